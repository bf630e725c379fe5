//! Shared data structures for the bridge.
//!
//! `BackendRequest` is the single outbound call a dispatched method
//! resolves to; the remaining types are request/response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// HTTP verbs used against the downstream service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Patch,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Patch => "PATCH",
        };
        f.write_str(s)
    }
}

/// One outbound call to the downstream service
///
/// `segments` are raw path segments relative to the backend base URL;
/// they are percent-encoded individually when the URL is built.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub verb: Verb,
    pub segments: Vec<String>,
    pub body: Option<Value>,
}

impl BackendRequest {
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verb: Verb::Get,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    pub fn post<I, S>(segments: I, body: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verb: Verb::Post,
            segments: segments.into_iter().map(Into::into).collect(),
            body: Some(body),
        }
    }

    pub fn patch<I, S>(segments: I, body: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verb: Verb::Patch,
            segments: segments.into_iter().map(Into::into).collect(),
            body: Some(body),
        }
    }

    /// Unencoded path, for logs and assertions
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

impl fmt::Display for BackendRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.path())
    }
}

/// Body of `/api/rag/query` and `/api/rag/code-examples`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchBody {
    pub query: String,
    pub source_id: Option<String>,
    pub match_count: u32,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub tools_available: bool,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "mcp-http-bridge".to_string(),
            tools_available: true,
        }
    }
}
