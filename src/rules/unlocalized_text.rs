//! Unlocalized text rule.
//!
//! Detects inline JSX text that is not wrapped in a translation component.

use crate::{
    core::{
        classify::{element_name, is_translation_component},
        text::literal_text,
        tree::{NodeId, NodeKind, ancestors},
        violation::MessageKind,
        visit::{NodeVisitor, Phase, RuleContext},
    },
    utils::contains_alphabetic,
};

/// Elements whose text content is code, not copy.
const RAW_TEXT_ELEMENTS: &[&str] = &["style", "script"];

pub struct UnlocalizedTextRule<'a> {
    ignore_texts: &'a [String],
}

impl<'a> UnlocalizedTextRule<'a> {
    pub fn new(ignore_texts: &'a [String]) -> Self {
        Self { ignore_texts }
    }
}

impl NodeVisitor for UnlocalizedTextRule<'_> {
    fn subscriptions(&self) -> &'static [(NodeKind, Phase)] {
        &[(NodeKind::JSXText, Phase::Enter)]
    }

    fn on_enter(&mut self, ctx: &mut RuleContext<'_>, node: NodeId) {
        let tree = ctx.tree();
        let text = literal_text(tree, node);
        if !contains_alphabetic(&text) || self.ignore_texts.iter().any(|t| *t == text) {
            return;
        }

        let in_raw_text_element = tree
            .parent(node)
            .and_then(|parent| element_name(tree, parent))
            .is_some_and(|name| RAW_TEXT_ELEMENTS.contains(&name));
        if in_raw_text_element {
            return;
        }

        if ancestors(tree, node).any(|ancestor| is_translation_component(tree, ancestor)) {
            return;
        }

        ctx.report(node, MessageKind::UnlocalizedText { text });
    }
}
