//! JSON-RPC adapter
//!
//! Envelope parsing, the fixed method table, per-method parameter
//! mapping and the dispatcher that ties them to a `Backend`.

pub mod dispatcher;
pub mod error;
pub mod method;
pub mod params;
pub mod protocol;

// Re-export main types
pub use dispatcher::{Dispatcher, RpcOutcome};
pub use error::RpcError;
pub use method::Method;
pub use protocol::{JsonRpcError, JsonRpcResponse, RpcRequest};
