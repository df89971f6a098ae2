//! Unlocalized attribute rule.
//!
//! Flags string attributes whose text reaches users: `placeholder`, `alt`,
//! `aria-label` and `value` on native HTML elements, and any attribute on a
//! custom component that is not a recognized message component.

use crate::{
    core::{
        classify::{
            TRANS_COMPONENT, element_attribute_names, element_name, is_allowed_markup_attribute,
            is_upper_case_token,
        },
        text::literal_text,
        tree::{NodeId, NodeKind, SyntaxNode, SyntaxTree, has_ancestor_with_name},
        violation::MessageKind,
        visit::{NodeVisitor, Phase, RuleContext},
    },
    utils::contains_alphabetic,
};

pub struct UnlocalizedAttributeRule<'a> {
    ignore_attributes: &'a [String],
}

impl<'a> UnlocalizedAttributeRule<'a> {
    pub fn new(ignore_attributes: &'a [String]) -> Self {
        Self { ignore_attributes }
    }

    fn is_ignored(&self, attribute: &str) -> bool {
        self.ignore_attributes.iter().any(|name| name == attribute)
    }
}

/// The literal carrying an attribute's text.
///
/// `attr="x"`, `attr={"x"}` and `` attr={`x`} `` qualify; templates with
/// interpolations and every other expression do not.
fn literal_value(tree: &SyntaxTree, value: NodeId) -> Option<NodeId> {
    match tree.data(value)? {
        SyntaxNode::StringLiteral { .. } => Some(value),
        SyntaxNode::JSXExpressionContainer {
            expression: Some(expression),
        } => match tree.data(*expression)? {
            SyntaxNode::StringLiteral { .. } => Some(*expression),
            SyntaxNode::TemplateLiteral { expressions, .. } if expressions.is_empty() => {
                Some(*expression)
            }
            _ => None,
        },
        _ => None,
    }
}

impl NodeVisitor for UnlocalizedAttributeRule<'_> {
    fn subscriptions(&self) -> &'static [(NodeKind, Phase)] {
        &[(NodeKind::JSXAttribute, Phase::Enter)]
    }

    fn on_enter(&mut self, ctx: &mut RuleContext<'_>, node: NodeId) {
        let tree = ctx.tree();
        let Some(SyntaxNode::JSXAttribute {
            name,
            value: Some(value),
        }) = tree.data(node)
        else {
            return;
        };
        if self.is_ignored(name) {
            return;
        }
        let Some(literal) = literal_value(tree, *value) else {
            return;
        };

        let text = literal_text(tree, literal);
        if text.is_empty() || !contains_alphabetic(&text) || is_upper_case_token(&text) {
            return;
        }

        let Some(element) = tree
            .parent(node)
            .filter(|&parent| tree.kind(parent) == Some(NodeKind::JSXElement))
        else {
            return;
        };
        let Some(tag) = element_name(tree, element) else {
            return;
        };
        if has_ancestor_with_name(tree, node, TRANS_COMPONENT) {
            return;
        }

        let attribute_names = element_attribute_names(tree, element);
        if is_allowed_markup_attribute(tag, name, &attribute_names) {
            return;
        }

        ctx.report(
            node,
            MessageKind::UnlocalizedAttribute {
                tag: tag.to_string(),
                attribute: name.clone(),
                text,
            },
        );
    }
}
