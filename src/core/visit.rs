//! Traversal engine driving rule callbacks over a [`SyntaxTree`].
//!
//! Rules implement [`NodeVisitor`] and declare which node kinds they want, and
//! in which phase. [`traverse`] performs a single depth-first pass: `on_enter`
//! fires in pre-order, `on_exit` in post-order once every descendant has been
//! visited. Rules share no state across nodes; everything they emit goes
//! through [`RuleContext::report`].

use std::collections::HashMap;

use crate::core::tree::{NodeId, NodeKind, SyntaxTree};
use crate::core::violation::{MessageKind, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Enter,
    Exit,
}

pub trait NodeVisitor {
    /// Node kinds and phases this visitor is invoked for.
    fn subscriptions(&self) -> &'static [(NodeKind, Phase)];

    fn on_enter(&mut self, _ctx: &mut RuleContext<'_>, _node: NodeId) {}

    fn on_exit(&mut self, _ctx: &mut RuleContext<'_>, _node: NodeId) {}
}

/// Read access to the tree plus the violation sink for one traversal.
pub struct RuleContext<'a> {
    tree: &'a SyntaxTree,
    violations: Vec<Violation>,
}

impl<'a> RuleContext<'a> {
    pub fn new(tree: &'a SyntaxTree) -> Self {
        Self {
            tree,
            violations: Vec::new(),
        }
    }

    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// Emit one violation anchored at `node`.
    pub fn report(&mut self, node: NodeId, kind: MessageKind) {
        let position = self.tree.position(node).unwrap_or_default();
        self.violations.push(Violation {
            node,
            position,
            kind,
        });
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Walk the whole tree once, dispatching to every subscribed visitor.
///
/// Visitors subscribed to the same node and phase run in slice order.
pub fn traverse(tree: &SyntaxTree, visitors: &mut [&mut dyn NodeVisitor]) -> Vec<Violation> {
    let mut ctx = RuleContext::new(tree);
    let Some(root) = tree.root() else {
        return ctx.into_violations();
    };

    let mut routes: HashMap<(NodeKind, Phase), Vec<usize>> = HashMap::new();
    for (index, visitor) in visitors.iter().enumerate() {
        for &subscription in visitor.subscriptions() {
            routes.entry(subscription).or_default().push(index);
        }
    }

    // (node, children already scheduled)
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];
    while let Some((node, expanded)) = stack.pop() {
        let Some(kind) = tree.kind(node) else {
            continue;
        };

        if expanded {
            if let Some(indices) = routes.get(&(kind, Phase::Exit)) {
                for &index in indices {
                    visitors[index].on_exit(&mut ctx, node);
                }
            }
            continue;
        }

        if let Some(indices) = routes.get(&(kind, Phase::Enter)) {
            for &index in indices {
                visitors[index].on_enter(&mut ctx, node);
            }
        }

        stack.push((node, true));
        if let Some(children) = tree.get(node).map(|n| &n.children) {
            stack.extend(children.iter().rev().map(|&child| (child, false)));
        }
    }

    ctx.into_violations()
}
