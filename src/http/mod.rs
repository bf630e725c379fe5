//! HTTP adapter
//!
//! Depends on core/ and rpc/. Exposes `POST /rpc` and `GET /health`
//! via the Axum web framework.

pub mod handlers;
pub mod middleware;

pub use handlers::*;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::services::Services;
use crate::rpc::Dispatcher;

/// Build the API router around existing services
pub fn router(services: Arc<Services>) -> Router {
    let dispatcher = Arc::new(Dispatcher::new(services));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/rpc", post(handlers::rpc_handler))
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(dispatcher)
}

/// Build the API router from configuration, forwarding over REST
pub fn app(config: Config) -> Result<Router> {
    let services = Arc::new(Services::new(config)?);
    Ok(router(services))
}
