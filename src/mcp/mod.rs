//! MCP (Model Context Protocol) Server Module
//!
//! Exposes the module catalog as MCP tools for Claude Code and other MCP clients.
//! Uses JSON-RPC 2.0 over stdio transport.
//!
//! ## Tools
//!
//! - `search_modules` - Keyword search over name, category, description, and tech stack
//! - `recommend_modules` - Rule-based module recommendations for a use case

mod server;
mod types;

pub use server::McpServer;
pub use types::*;
