//! Request dispatch
//!
//! Turns one request body into one response envelope plus HTTP status.
//! Every failure becomes an error envelope; nothing escapes `handle`.

use crate::core::services::Services;
use crate::rpc::error::RpcError;
use crate::rpc::method::Method;
use crate::rpc::protocol::{JsonRpcResponse, MethodField, RpcRequest};
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Response envelope with the status it should be sent with
#[derive(Debug, Clone, PartialEq)]
pub struct RpcOutcome {
    pub status: StatusCode,
    pub response: JsonRpcResponse,
}

impl RpcOutcome {
    fn success(id: Value, result: Value) -> Self {
        Self {
            status: StatusCode::OK,
            response: JsonRpcResponse::success(id, result),
        }
    }

    fn failure(id: Value, err: &RpcError) -> Self {
        let id = err.echoes_id().then_some(id);
        Self {
            status: err.status(),
            response: JsonRpcResponse::error(id, err.code(), err.message()),
        }
    }
}

pub struct Dispatcher {
    services: Arc<Services>,
}

impl Dispatcher {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    /// Handle a raw request body
    pub async fn handle(&self, body: &[u8]) -> RpcOutcome {
        match RpcRequest::from_slice(body) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                error!("RPC endpoint error: {}", e);
                RpcOutcome::failure(Value::Null, &e)
            }
        }
    }

    /// Handle an already parsed request
    pub async fn handle_request(&self, request: RpcRequest) -> RpcOutcome {
        let method = match &request.method {
            MethodField::Unspecified => {
                return RpcOutcome::failure(request.id, &RpcError::MethodNotSpecified);
            }
            MethodField::Name(name) => Method::lookup(name),
            MethodField::Other(_) => None,
        };

        let Some(method) = method else {
            let name = request.method.display_name();
            info!("Unknown method requested: {}", name);
            return RpcOutcome::failure(request.id, &RpcError::MethodNotFound(name));
        };

        match self.call(method, &request).await {
            Ok(result) => RpcOutcome::success(request.id, result),
            Err(e) => {
                error!(method = %method, "Error calling MCP tool {}: {}", method, e);
                RpcOutcome::failure(request.id, &e)
            }
        }
    }

    async fn call(&self, method: Method, request: &RpcRequest) -> Result<Value, RpcError> {
        let params = request.params_object()?;
        let call = method.resolve(params)?;
        debug!(method = %method, "Forwarding as {}", call);

        let started = Instant::now();
        let result = self.services.backend.execute(call).await?;
        debug!(
            method = %method,
            backend_ms = started.elapsed().as_millis() as u64,
            "Backend call completed"
        );

        if self.services.config.rpc.stringify_results {
            Ok(Value::String(serde_json::to_string(&result).map_err(
                |e| RpcError::Internal(e.to_string()),
            )?))
        } else {
            Ok(result)
        }
    }
}
