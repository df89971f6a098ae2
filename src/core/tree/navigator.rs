//! Upward lookup over the parent chain.

use super::node::{NodeId, NodeKind, SyntaxNode, SyntaxTree};

/// Iterator over the enclosing nodes of a starting node, nearest first.
///
/// The starting node itself is not yielded. The walk stops after `tree.len()`
/// steps so a corrupted parent chain can never loop forever.
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: Option<NodeId>,
    remaining: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.next?;
        // Dangling ids end the chain
        self.tree.get(current)?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

pub fn ancestors(tree: &SyntaxTree, node: NodeId) -> Ancestors<'_> {
    Ancestors {
        tree,
        next: tree.parent(node),
        remaining: tree.len(),
    }
}

/// Find the nearest enclosing node of the given kind.
///
/// Starts at the immediate parent. Returns `None` when the chain reaches the
/// root without a match, which is a normal outcome (e.g. a template literal
/// that is not tagged at all).
pub fn nearest_ancestor_of_kind(tree: &SyntaxTree, node: NodeId, kind: NodeKind) -> Option<NodeId> {
    ancestors(tree, node).find(|&id| tree.kind(id) == Some(kind))
}

/// Check whether any enclosing `JSXElement` has the identifier tag `name`.
///
/// Used to skip content that already sits inside a translation component such
/// as `<Trans>`.
pub fn has_ancestor_with_name(tree: &SyntaxTree, node: NodeId, name: &str) -> bool {
    ancestors(tree, node).any(|id| {
        matches!(
            tree.data(id),
            Some(SyntaxNode::JSXElement { name: Some(tag), .. }) if tag == name
        )
    })
}
