//! Message expression rule.
//!
//! Inside a message template (`` t`...` ``, `` msg`...` ``,
//! `` defineMessage`...` ``) every interpolation must be a plain variable or
//! one of the `plural` / `select` / `selectOrdinal` macros. Member access,
//! arbitrary calls and every other expression would leave the extracted
//! message with a meaningless placeholder name.

use crate::core::{
    classify::{is_tagged_message_template, is_template_macro_call},
    tree::{NodeId, NodeKind, SyntaxNode, SyntaxTree, nearest_ancestor_of_kind},
    violation::MessageKind,
    visit::{NodeVisitor, Phase, RuleContext},
};

/// How a single `${...}` expression is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionClass {
    /// Bare identifier: `${name}`.
    Variable,
    /// `${plural(count, {...})}` and friends. Arguments are not inspected.
    TemplateMacro,
    Forbidden,
}

pub fn classify_expression(tree: &SyntaxTree, node: NodeId) -> ExpressionClass {
    match tree.data(node) {
        Some(SyntaxNode::Identifier { .. }) => ExpressionClass::Variable,
        Some(SyntaxNode::CallExpression { .. }) if is_template_macro_call(tree, node) => {
            ExpressionClass::TemplateMacro
        }
        _ => ExpressionClass::Forbidden,
    }
}

/// Outcome for one template literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateDecision {
    /// Every interpolation is allowed.
    Clean,
    /// Has a forbidden interpolation but is not part of a message.
    NotAMessage,
    Violation,
}

/// Decide whether `template` must be reported.
///
/// The nearest enclosing tagged template is looked up only when a forbidden
/// interpolation exists, and only that one decides: `` t`${x}` `` nested in
/// `` css`...` `` is judged by `css`.
pub fn decide(tree: &SyntaxTree, template: NodeId) -> TemplateDecision {
    let Some(SyntaxNode::TemplateLiteral { expressions, .. }) = tree.data(template) else {
        return TemplateDecision::Clean;
    };

    let has_forbidden = expressions
        .iter()
        .any(|&expr| classify_expression(tree, expr) == ExpressionClass::Forbidden);
    if !has_forbidden {
        return TemplateDecision::Clean;
    }

    match nearest_ancestor_of_kind(tree, template, NodeKind::TaggedTemplateExpression) {
        Some(tagged) if is_tagged_message_template(tree, tagged) => TemplateDecision::Violation,
        _ => TemplateDecision::NotAMessage,
    }
}

/// Reports at most once per message template, on exit.
#[derive(Debug, Default)]
pub struct MessageExpressionRule;

impl NodeVisitor for MessageExpressionRule {
    fn subscriptions(&self) -> &'static [(NodeKind, Phase)] {
        &[(NodeKind::TemplateLiteral, Phase::Exit)]
    }

    fn on_exit(&mut self, ctx: &mut RuleContext<'_>, node: NodeId) {
        if decide(ctx.tree(), node) == TemplateDecision::Violation {
            ctx.report(node, MessageKind::DisallowedExpressionInMessage);
        }
    }
}
