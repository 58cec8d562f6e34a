//! Config file parsing

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;

/// On-disk overlay; every field optional, merged over the defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub settings: Option<Settings>,
    pub server: Option<ServerOverride>,
    pub call: Option<CallOverride>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub log_level: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerOverride {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
    pub cwd: Option<PathBuf>,
    pub env: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallOverride {
    pub tool: Option<String>,
    pub arguments: Option<Value>,
}
