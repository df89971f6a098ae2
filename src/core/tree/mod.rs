//! Read-only syntax tree used by the rules.
//!
//! ## Module Structure
//!
//! - `node`: Arena, node ids and the closed `SyntaxNode` variant type
//! - `navigator`: Parent-chain lookups (nearest ancestor of a kind)
//! - `builder`: Lowers an swc `Module` into the arena

mod builder;
mod navigator;
mod node;

pub use builder::TreeBuilder;
pub use navigator::{Ancestors, ancestors, has_ancestor_with_name, nearest_ancestor_of_kind};
pub use node::{Node, NodeId, NodeKind, Position, SyntaxNode, SyntaxTree, TemplateQuasi};
