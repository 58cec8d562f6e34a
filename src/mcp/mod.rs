//! MCP stdio client and wire protocol

pub mod client;
pub mod protocol;

pub use client::McpClient;
