//! Source file parsers.
//!
//! - `jsx`: JSX/TSX source file parser (uses swc for AST generation, then
//!   lowers the module into the arena syntax tree)

pub mod jsx;
