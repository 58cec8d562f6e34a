//! Harness configuration
//!
//! Three sources, highest priority first:
//! 1. CLI overrides (trailing server command)
//! 2. Config file (./.mcp-smoke.toml, $MCP_SMOKE_CONFIG, or ~/.config/mcp-smoke/config.toml)
//! 3. Built-in defaults reproducing the stock eg-mcp launch

mod defaults;
mod file_config;
mod loader;

pub use defaults::default_config;
pub use file_config::{CallOverride, FileConfig, ServerOverride, Settings};
pub use loader::ConfigLoader;

use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// How to launch the MCP server under test
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub command: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub env: HashMap<String, String>,
}

/// Which tool the third step invokes
#[derive(Debug, Clone)]
pub struct ToolCallConfig {
    pub tool: String,
    pub arguments: Value,
}

/// Fully resolved harness configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub server: ServerConfig,
    pub call: ToolCallConfig,
    /// Per-request timeout; `None` waits forever
    pub request_timeout_secs: Option<u64>,
    /// Log level applied when no CLI flag is given
    pub log_level: Option<String>,
}

impl HarnessConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        default_config()
    }
}
