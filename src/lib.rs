//! mcp-http-bridge - JSON-RPC over HTTP for agent tool calls
//!
//! Agents post JSON-RPC-shaped requests to `/rpc`; the bridge maps each
//! known method onto one call against the Archon REST API and wraps the
//! answer in a JSON-RPC envelope.
//!
//! # Architecture
//!
//! - **core**: Configuration, errors, the downstream `Backend` seam
//! - **rpc**: Envelopes, method table, parameter mapping, dispatcher
//! - **http**: Axum adapter (`/rpc`, `/health`)
//! - **agent**: Demonstration work loop over the `bd` issue tracker
//! - **cli**: clap adapter for the agent binary
//!
//! # Methods
//!
//! `perform_rag_query`, `get_available_sources`, `search_code_examples`,
//! `manage_project`, `manage_task`, `manage_document`.

// Core domain logic (protocol-agnostic)
pub mod core;

// JSON-RPC adapter
pub mod rpc;

// HTTP adapter
pub mod http;

// Demonstration agent
pub mod agent;

// CLI adapter for the agent
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{BridgeError, Result};
pub use core::services::Services;
pub use core::types::*;
