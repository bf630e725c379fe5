//! Unified service container for the bridge
//!
//! Provides shared access to configuration and the downstream backend.

use crate::core::backend::{Backend, RestBackend};
use crate::core::config::Config;
use crate::core::error::Result;
use std::sync::Arc;

/// Unified services container
///
/// Cloning is cheap; all clones share one backend connection pool.
#[derive(Clone)]
pub struct Services {
    /// Downstream service access
    pub backend: Arc<dyn Backend>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, forwarding over REST
    pub fn new(config: Config) -> Result<Self> {
        let backend = Arc::new(RestBackend::new(&config.backend)?);
        Ok(Self::with_backend(config, backend))
    }

    /// Create services around an already constructed backend
    pub fn with_backend(config: Config, backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            config: Arc::new(config),
        }
    }
}
