//! Literal text extraction.

use crate::core::tree::{NodeId, SyntaxNode, SyntaxTree};

/// Normalized literal text of a template literal, string literal or JSX text.
///
/// Template literals contribute the cooked value of every static segment, in
/// order, with interpolation points dropped. The result is trimmed. Any other
/// node kind (or an unknown id) yields an empty string.
pub fn literal_text(tree: &SyntaxTree, node: NodeId) -> String {
    match tree.data(node) {
        Some(SyntaxNode::TemplateLiteral { quasis, .. }) => quasis
            .iter()
            .filter_map(|quasi| quasi.cooked.as_deref())
            .collect::<String>()
            .trim()
            .to_string(),
        Some(SyntaxNode::StringLiteral { value }) | Some(SyntaxNode::JSXText { value }) => {
            value.trim().to_string()
        }
        _ => String::new(),
    }
}
