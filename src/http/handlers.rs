//! HTTP request handlers for the bridge
//!
//! Implements the two endpoints: the JSON-RPC entry point and the
//! health probe.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};

use crate::core::types::HealthResponse;
use crate::rpc::Dispatcher;

/// Health check handler
///
/// Reports static readiness. The downstream service is not contacted.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}

/// JSON-RPC handler
///
/// Takes the raw body so that malformed JSON still produces a
/// JSON-RPC error envelope instead of an extractor rejection.
///
/// # Returns
///
/// The response envelope with the status chosen by the dispatcher:
///
/// - 200 on success
/// - 400 when `method` is missing
/// - 404 when `method` is unknown
/// - 500 when the downstream call or the envelope parse fails
pub async fn rpc_handler(
    State(dispatcher): State<Arc<Dispatcher>>,
    body: Bytes,
) -> impl IntoResponse {
    let outcome = dispatcher.handle(&body).await;
    (outcome.status, Json(outcome.response))
}
