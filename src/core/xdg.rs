//! XDG Base Directory Support
//!
//! Resolves where the bridge looks for its configuration file.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "mcp-http-bridge";

/// XDG directory structure for the bridge
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve directories
    ///
    /// Priority order (highest to lowest):
    /// 1. MCP_BRIDGE_CONFIG_DIR
    /// 2. XDG_CONFIG_HOME
    /// 3. Platform default (`dirs::config_dir()`, then ~/.config)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("MCP_BRIDGE_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR);
        }

        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // MCP_BRIDGE_CONFIG is an explicit override
        if let Ok(file) = env::var("MCP_BRIDGE_CONFIG") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Log resolved paths at debug level
    pub fn log_paths(&self) {
        tracing::debug!("Config dir: {:?}", self.config_dir);
        tracing::debug!("Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
