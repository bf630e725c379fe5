//! Error types and error handling for the bridge.
//!
//! This module defines the errors raised while talking to the
//! downstream service or loading configuration. JSON-RPC error codes
//! are assigned in the `rpc` adapter, not here.

use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Main error type for the bridge core
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Backend returned HTTP {status} for {url}: {body}")]
    Backend {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl BridgeError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if the error was caused by the caller's input
    pub fn is_bad_request(&self) -> bool {
        matches!(self, BridgeError::InvalidParams(_))
    }

    /// Check if the error originated in the downstream service or the
    /// network path to it
    pub fn is_upstream(&self) -> bool {
        matches!(self, BridgeError::Backend { .. } | BridgeError::Network(_))
    }
}
