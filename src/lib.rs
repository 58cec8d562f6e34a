//! mcp-smoke - stdio smoke-test harness for Model Context Protocol servers
//!
//! Spawns an MCP server as a child process, drives the fixed
//! initialize -> tools/list -> tools/call conversation over newline-delimited
//! JSON-RPC on the server's stdio pipes, prints each response, and always
//! terminates and reaps the server before returning.

pub mod config;
pub mod harness;
pub mod mcp;
pub mod types;

pub use config::{ConfigLoader, HarnessConfig};
pub use harness::{SmokeReport, Step, StepOutcome};
pub use mcp::McpClient;
pub use types::HarnessError;
