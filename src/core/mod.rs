//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `tree`: Arena syntax tree, parent-chain navigation, swc lowering
//! - `parsers`: swc front-end producing a [`ParsedSource`]
//! - `classify`: Tag, attribute and node predicates
//! - `text`: Literal text extraction
//! - `visit`: Enter/exit traversal engine for rules
//! - `violation`: Per-file findings produced by rules
//! - `directives`: `msglint-disable*` comment handling
//! - `file_scanner`: Source file discovery
//! - `context`: Project-level [`CheckContext`]

pub mod classify;
pub mod context;
pub mod data;
pub mod directives;
pub mod file_scanner;
pub mod parsers;
pub mod text;
pub mod tree;
pub mod violation;
pub mod visit;

pub use context::CheckContext;
pub use data::{SourceContext, SourceLocation};
pub use parsers::jsx::ParsedSource;
