//! msglint - static checks for Lingui-style i18n messages
//!
//! msglint is a CLI tool and library that inspects JS/TS/JSX sources for
//! message templates embedding complex expressions (`` t`${user.name}` ``),
//! user-visible attributes left untranslated and bare JSX text.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Syntax tree, classification and traversal engine
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Detection rules built on the traversal engine
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
