use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("failed to launch MCP server `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("child process {0} pipe was not captured")]
    Pipe(&'static str),

    #[error("MCP protocol error: {0}")]
    Protocol(String),

    #[error("request timeout after {0}s")]
    Timeout(u64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
