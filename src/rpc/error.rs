//! RPC-level error types

use crate::core::error::BridgeError;
use crate::rpc::protocol::{INTERNAL_ERROR, INVALID_REQUEST, METHOD_NOT_FOUND};
use axum::http::StatusCode;
use thiserror::Error;

/// Message returned when the envelope itself could not be read
pub const OPAQUE_INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Method not specified")]
    MethodNotSpecified,

    #[error("Method '{0}' not found")]
    MethodNotFound(String),

    /// Failure while serving a recognized method
    #[error("{0}")]
    Internal(String),

    /// Failure before the request could be read; the id is lost
    #[error("Parse error: {0}")]
    Parse(String),
}

impl RpcError {
    pub fn code(&self) -> i32 {
        match self {
            RpcError::MethodNotSpecified => INVALID_REQUEST,
            RpcError::MethodNotFound(_) => METHOD_NOT_FOUND,
            RpcError::Internal(_) | RpcError::Parse(_) => INTERNAL_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RpcError::MethodNotSpecified => StatusCode::BAD_REQUEST,
            RpcError::MethodNotFound(_) => StatusCode::NOT_FOUND,
            RpcError::Internal(_) | RpcError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response envelope
    pub fn message(&self) -> String {
        match self {
            RpcError::Parse(_) => OPAQUE_INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the response may echo the request id
    pub fn echoes_id(&self) -> bool {
        !matches!(self, RpcError::Parse(_))
    }
}

impl From<BridgeError> for RpcError {
    fn from(err: BridgeError) -> Self {
        RpcError::Internal(err.to_string())
    }
}
