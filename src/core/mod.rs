//! Core domain logic (protocol-agnostic)
//!
//! Everything the HTTP and RPC adapters share, independent of
//! how requests arrive.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Outbound call and body types
//! - **xdg**: Config file location
//! - **backend**: Downstream seam and its REST implementation
//! - **services**: Unified service container

pub mod backend;
pub mod config;
pub mod error;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use backend::{Backend, RestBackend};
pub use config::Config;
pub use error::{BridgeError, Result};
pub use services::Services;
