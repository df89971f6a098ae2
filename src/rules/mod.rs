//! Rule implementations for msglint.
//!
//! Every rule is a [`NodeVisitor`] over the arena syntax tree. All enabled
//! rules share one traversal per file; their violations are then filtered
//! through the file's suppression directives and turned into [`Issue`]s.
//!
//! ## Module Structure
//!
//! - `message_expression`: Complex expressions embedded in message templates
//! - `unlocalized_attribute`: User-visible string attributes on markup elements
//! - `unlocalized_text`: Inline JSX text outside translation components

pub mod message_expression;
pub mod unlocalized_attribute;
pub mod unlocalized_text;

use crate::{
    core::{
        SourceContext, SourceLocation,
        parsers::jsx::ParsedSource,
        violation::{MessageKind, Violation},
        visit::{NodeVisitor, traverse},
    },
    issues::{
        Issue, MessageExpressionIssue, Rule, UnlocalizedAttributeIssue, UnlocalizedTextIssue,
    },
};

pub use message_expression::MessageExpressionRule;
pub use unlocalized_attribute::UnlocalizedAttributeRule;
pub use unlocalized_text::UnlocalizedTextRule;

/// User-configurable inputs shared by the rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleOptions<'a> {
    /// Exact (trimmed) JSX texts that are never reported.
    pub ignore_texts: &'a [String],
    /// Attribute names that are never reported.
    pub ignore_attributes: &'a [String],
}

/// Run the given rules over one parsed file.
///
/// Issues suppressed by `msglint-disable*` comments are dropped.
pub fn check_parsed(
    file_path: &str,
    parsed: &ParsedSource,
    rules: &[Rule],
    options: RuleOptions<'_>,
) -> Vec<Issue> {
    let mut message_expression = MessageExpressionRule;
    let mut unlocalized_attribute = UnlocalizedAttributeRule::new(options.ignore_attributes);
    let mut unlocalized_text = UnlocalizedTextRule::new(options.ignore_texts);

    let mut visitors: Vec<&mut dyn NodeVisitor> = Vec::new();
    if rules.contains(&Rule::MessageExpression) {
        visitors.push(&mut message_expression);
    }
    if rules.contains(&Rule::UnlocalizedAttribute) {
        visitors.push(&mut unlocalized_attribute);
    }
    if rules.contains(&Rule::UnlocalizedText) {
        visitors.push(&mut unlocalized_text);
    }
    if visitors.is_empty() {
        return Vec::new();
    }

    traverse(&parsed.tree, &mut visitors)
        .into_iter()
        .filter(|v| {
            !parsed
                .disable_context
                .should_ignore(v.position.line, v.rule())
        })
        .map(|v| to_issue(file_path, parsed, v))
        .collect()
}

fn to_issue(file_path: &str, parsed: &ParsedSource, violation: Violation) -> Issue {
    let Violation { position, kind, .. } = violation;
    let context = SourceContext::new(
        SourceLocation::new(file_path, position.line, position.col),
        parsed.source_line(position.line),
    );
    match kind {
        MessageKind::DisallowedExpressionInMessage => {
            Issue::MessageExpression(MessageExpressionIssue { context })
        }
        MessageKind::UnlocalizedAttribute {
            tag,
            attribute,
            text,
        } => Issue::UnlocalizedAttribute(UnlocalizedAttributeIssue {
            context,
            tag,
            attribute,
            text,
        }),
        MessageKind::UnlocalizedText { text } => {
            Issue::UnlocalizedText(UnlocalizedTextIssue { context, text })
        }
    }
}
