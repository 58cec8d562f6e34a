//! Built-in defaults
//!
//! Reproduce the stock launch of the eg-mcp server and its crate-source
//! smoke call. The config file and CLI can override any of it.

use super::{HarnessConfig, ServerConfig, ToolCallConfig};
use serde_json::json;
use std::collections::HashMap;

pub fn default_config() -> HarnessConfig {
    HarnessConfig {
        server: ServerConfig {
            command: "cargo".to_string(),
            args: vec![
                "run".to_string(),
                "--bin".to_string(),
                "eg-mcp".to_string(),
                "--features".to_string(),
                "mcp".to_string(),
            ],
            cwd: None,
            env: HashMap::new(),
        },
        call: ToolCallConfig {
            tool: "get_crate_source".to_string(),
            arguments: json!({"crate_name": "serde"}),
        },
        request_timeout_secs: None,
        log_level: None,
    }
}
