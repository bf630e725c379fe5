//! Configuration management for the bridge.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{BridgeError, Result};
use crate::core::xdg::XdgDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Local config file looked up in the working directory
const LOCAL_CONFIG_FILE: &str = "mcp-http-bridge.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub rpc: RpcConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listen address of the bridge itself
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_server_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Downstream REST service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Full base URL; takes precedence over host/port when set
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_backend_host")]
    pub host: String,

    #[serde(default = "default_backend_port")]
    pub port: u16,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Honour HTTP_PROXY/HTTPS_PROXY/NO_PROXY from the environment
    #[serde(default = "default_system_proxy")]
    pub system_proxy: bool,
}

/// JSON-RPC envelope behaviour
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RpcConfig {
    /// Embed downstream results as a JSON-encoded string instead of
    /// a JSON value
    #[serde(default)]
    pub stringify_results: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit one JSON object per log line
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8053
}

fn default_backend_host() -> String {
    "archon-server".to_string()
}

fn default_backend_port() -> u16 {
    8181
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("mcp-http-bridge/{}", env!("CARGO_PKG_VERSION"))
}

fn default_system_proxy() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: default_backend_host(),
            port: default_backend_port(),
            timeout_sec: default_timeout(),
            user_agent: default_user_agent(),
            system_proxy: default_system_proxy(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl BackendConfig {
    /// Resolve the base URL of the downstream service
    pub fn base_url(&self) -> Result<Url> {
        let raw = match &self.url {
            Some(url) => url.clone(),
            None => format!("http://{}:{}", self.host, self.port),
        };

        let url = Url::parse(&raw).map_err(|e| BridgeError::InvalidUrl(format!("{raw}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(BridgeError::InvalidUrl(format!(
                "{raw}: cannot be used as a base URL"
            )));
        }

        Ok(url)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BridgeError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File lookup order:
    /// 1. MCP_BRIDGE_CONFIG env var
    /// 2. XDG config file (~/.config/mcp-http-bridge/config.toml)
    /// 3. ./mcp-http-bridge.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let xdg_config = xdg.config_file();
        let mut config = if xdg_config.exists() {
            Self::from_file(xdg_config)?
        } else if env::var("MCP_BRIDGE_CONFIG").is_ok() {
            return Err(BridgeError::ConfigError(format!(
                "Config file not found: {}",
                xdg_config.display()
            )));
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Load from an explicit file, then apply env overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("MCP_BRIDGE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("ARCHON_MCP_HTTP_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Backend configuration
        if let Ok(url) = env::var("ARCHON_SERVER_URL") {
            self.backend.url = Some(url);
        }
        if let Ok(host) = env::var("ARCHON_SERVER_HOST") {
            self.backend.host = host;
        }
        if let Ok(port) = env::var("ARCHON_SERVER_PORT") {
            if let Ok(p) = port.parse() {
                self.backend.port = p;
            }
        }
        if let Ok(timeout) = env::var("MCP_BRIDGE_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.backend.timeout_sec = t;
            }
        }

        if let Ok(flag) = env::var("MCP_BRIDGE_SYSTEM_PROXY") {
            if let Ok(b) = flag.parse() {
                self.backend.system_proxy = b;
            }
        }

        // RPC configuration
        if let Ok(flag) = env::var("MCP_BRIDGE_STRINGIFY_RESULTS") {
            if let Ok(b) = flag.parse() {
                self.rpc.stringify_results = b;
            }
        }

        // Logging configuration
        if let Ok(level) = env::var("MCP_BRIDGE_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Ok(flag) = env::var("MCP_BRIDGE_LOG_JSON") {
            if let Ok(b) = flag.parse() {
                self.logging.json = b;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(BridgeError::ConfigError(
                "Server port must be non-zero".to_string(),
            ));
        }

        if self.backend.url.is_none() && self.backend.port == 0 {
            return Err(BridgeError::ConfigError(
                "Backend port must be non-zero".to_string(),
            ));
        }

        if self.backend.timeout_sec == 0 {
            return Err(BridgeError::ConfigError(
                "Backend timeout must be non-zero".to_string(),
            ));
        }

        self.backend
            .base_url()
            .map_err(|e| BridgeError::ConfigError(e.to_string()))?;

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(BridgeError::ConfigError(format!(
                "Unknown log level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
        match self.backend.base_url() {
            Ok(url) => tracing::info!("  Backend: {}", url),
            Err(e) => tracing::warn!("  Backend: {}", e),
        }
        tracing::info!("  Backend timeout: {}s", self.backend.timeout_sec);
        tracing::info!("  Stringify results: {}", self.rpc.stringify_results);
        tracing::info!("  Log level: {}", self.logging.level);
    }
}
