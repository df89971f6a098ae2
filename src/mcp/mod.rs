//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes msglint checks to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameters and JSON result types

mod server;
pub mod types;

pub use server::{MsglintMcpServer, run_server};
