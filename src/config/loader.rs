//! Configuration loader
//!
//! Priority order (highest to lowest):
//! 1. Explicit --config path
//! 2. ./.mcp-smoke.toml (project-specific)
//! 3. $MCP_SMOKE_CONFIG (environment variable)
//! 4. ~/.config/mcp-smoke/config.toml (user-global)
//! 5. Built-in defaults

use super::{default_config, FileConfig, HarnessConfig};
use crate::types::{HarnessError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist and parse; otherwise the first existing
    /// candidate is used, and the defaults apply when no file is found.
    pub fn load(explicit: Option<&Path>) -> Result<HarnessConfig> {
        if let Some(path) = explicit {
            debug!("Loading config from --config {}", path.display());
            return Self::load_file(path);
        }

        for path in Self::candidates() {
            if path.exists() {
                debug!("Loading config from {}", path.display());
                return Self::load_file(&path);
            }
        }

        debug!("No config file found, using built-in defaults");
        Ok(default_config())
    }

    fn candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        // Project-specific config
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(".mcp-smoke.toml"));
        }

        // Environment variable
        if let Ok(path) = std::env::var("MCP_SMOKE_CONFIG") {
            candidates.push(PathBuf::from(path));
        }

        // User-global config
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("mcp-smoke").join("config.toml"));
        }

        candidates
    }

    /// Parse one file and merge it over the defaults
    pub fn load_file(path: &Path) -> Result<HarnessConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HarnessError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let file: FileConfig = toml::from_str(&content).map_err(|e| {
            HarnessError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        Ok(Self::merge(default_config(), file))
    }

    fn merge(mut config: HarnessConfig, file: FileConfig) -> HarnessConfig {
        if let Some(server) = file.server {
            match (server.command, server.args) {
                // A new command must not inherit the default cargo args.
                (Some(command), args) => {
                    config.server.command = command;
                    config.server.args = args.unwrap_or_default();
                }
                (None, Some(args)) => config.server.args = args,
                (None, None) => {}
            }
            if let Some(cwd) = server.cwd {
                config.server.cwd = Some(cwd);
            }
            if let Some(env) = server.env {
                config.server.env.extend(env);
            }
        }

        if let Some(call) = file.call {
            if let Some(tool) = call.tool {
                config.call.tool = tool;
            }
            if let Some(arguments) = call.arguments {
                config.call.arguments = arguments;
            }
        }

        if let Some(settings) = file.settings {
            if settings.request_timeout_secs.is_some() {
                config.request_timeout_secs = settings.request_timeout_secs;
            }
            if settings.log_level.is_some() {
                config.log_level = settings.log_level;
            }
        }

        config
    }
}
