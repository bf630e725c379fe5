//! HTTP middleware

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Access log: one line per request with method, path, status and latency
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        target: "mcp_http_bridge::access",
        src = %client,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );

    response
}
