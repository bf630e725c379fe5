//! Downstream service access
//!
//! The dispatcher resolves every method to a single `BackendRequest`
//! and hands it to a `Backend`. `RestBackend` forwards it over HTTP
//! using one pooled `reqwest::Client` shared by all requests.

use crate::core::config::BackendConfig;
use crate::core::error::{BridgeError, Result};
use crate::core::types::{BackendRequest, Verb};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Executes resolved calls against the downstream service
#[async_trait]
pub trait Backend: Send + Sync {
    /// Perform the call and return the decoded JSON body
    async fn execute(&self, request: BackendRequest) -> Result<Value>;
}

/// REST implementation of `Backend`
pub struct RestBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl RestBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .user_agent(config.user_agent.clone());
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the absolute URL for a request, encoding each segment
    pub fn url_for(&self, request: &BackendRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                BridgeError::InvalidUrl(format!("{}: cannot be a base", self.base_url))
            })?;
            path.pop_if_empty();
            for segment in &request.segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl Backend for RestBackend {
    #[instrument(skip(self, request), fields(call = %request))]
    async fn execute(&self, request: BackendRequest) -> Result<Value> {
        let url = self.url_for(&request)?;

        let builder = match request.verb {
            Verb::Get => self.client.get(url.clone()),
            Verb::Post => self.client.post(url.clone()),
            Verb::Patch => self.client.patch(url.clone()),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let resp = builder.send().await?;
        let status = resp.status();
        debug!("Backend responded with {}", status);

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BridgeError::Backend {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let bytes = resp.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
