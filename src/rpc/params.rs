//! Per-method parameter structs
//!
//! Each struct names the fields its method reads. Project, task and
//! document bodies are open schemas: whatever is not a control key
//! (`action` and the identifiers used in the path) is forwarded as-is.

use crate::core::error::{BridgeError, Result};
use crate::core::types::{BackendRequest, SearchBody};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

pub const DEFAULT_MATCH_COUNT: u32 = 5;

/// Deserialize a params mapping into a method's parameter struct
pub fn parse<T: DeserializeOwned>(params: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(params))
        .map_err(|e| BridgeError::InvalidParams(e.to_string()))
}

/// An identifier as a path segment; numbers are rendered in decimal
fn require(value: Option<Value>, field: &str) -> Result<String> {
    match value {
        Some(Value::String(v)) if !v.is_empty() => Ok(v),
        Some(Value::Number(n)) => Ok(n.to_string()),
        None | Some(Value::Null) | Some(Value::String(_)) => {
            Err(BridgeError::InvalidParams(format!("{field} is required")))
        }
        Some(_) => Err(BridgeError::InvalidParams(format!(
            "{field} must be a string or a number"
        ))),
    }
}

/// Put a field back into an outgoing body unchanged
fn restore(fields: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(v) = value {
        fields.insert(key.to_string(), v);
    }
}

/// `perform_rag_query`
#[derive(Debug, Default, Deserialize)]
pub struct RagQueryParams {
    #[serde(default)]
    pub query: Option<String>,
    /// Forwarded as `source_id`
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub match_count: Option<u32>,
}

impl RagQueryParams {
    pub fn into_request(self) -> Result<BackendRequest> {
        let body = SearchBody {
            query: self.query.unwrap_or_default(),
            source_id: self.source,
            match_count: self.match_count.unwrap_or(DEFAULT_MATCH_COUNT),
        };
        Ok(BackendRequest::post(
            ["api", "rag", "query"],
            serde_json::to_value(body)?,
        ))
    }
}

/// `search_code_examples`
#[derive(Debug, Default, Deserialize)]
pub struct CodeExamplesParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub match_count: Option<u32>,
}

impl CodeExamplesParams {
    pub fn into_request(self) -> Result<BackendRequest> {
        let body = SearchBody {
            query: self.query.unwrap_or_default(),
            source_id: self.source_id,
            match_count: self.match_count.unwrap_or(DEFAULT_MATCH_COUNT),
        };
        Ok(BackendRequest::post(
            ["api", "rag", "code-examples"],
            serde_json::to_value(body)?,
        ))
    }
}

/// `action` as understood by the manage_* methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Get,
    /// Anything else, including a missing action
    Update,
}

impl Action {
    fn from_field(action: Option<&Value>) -> Self {
        match action.and_then(Value::as_str) {
            Some("create") => Action::Create,
            Some("get") => Action::Get,
            _ => Action::Update,
        }
    }
}

/// `manage_project`
#[derive(Debug, Deserialize)]
pub struct ProjectParams {
    #[serde(default)]
    pub action: Option<Value>,
    #[serde(default)]
    pub project_id: Option<Value>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProjectParams {
    pub fn into_request(self) -> Result<BackendRequest> {
        let mut fields = self.fields;
        match Action::from_field(self.action.as_ref()) {
            Action::Create => {
                restore(&mut fields, "project_id", self.project_id);
                Ok(BackendRequest::post(["api", "projects"], Value::Object(fields)))
            }
            Action::Get => {
                let project_id = require(self.project_id, "project_id")?;
                Ok(BackendRequest::get(["api".to_string(), "projects".to_string(), project_id]))
            }
            Action::Update => {
                let project_id = require(self.project_id, "project_id")?;
                Ok(BackendRequest::patch(
                    ["api".to_string(), "projects".to_string(), project_id],
                    Value::Object(fields),
                ))
            }
        }
    }
}

/// `manage_task`
#[derive(Debug, Deserialize)]
pub struct TaskParams {
    #[serde(default)]
    pub action: Option<Value>,
    #[serde(default)]
    pub project_id: Option<Value>,
    #[serde(default)]
    pub task_id: Option<Value>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl TaskParams {
    pub fn into_request(self) -> Result<BackendRequest> {
        let project_id = require(self.project_id, "project_id")?;
        let mut fields = self.fields;
        let mut segments = vec!["api".to_string(), "projects".to_string(), project_id];
        segments.push("tasks".to_string());

        if Action::from_field(self.action.as_ref()) == Action::Create {
            restore(&mut fields, "task_id", self.task_id);
            Ok(BackendRequest::post(segments, Value::Object(fields)))
        } else {
            segments.push(require(self.task_id, "task_id")?);
            Ok(BackendRequest::patch(segments, Value::Object(fields)))
        }
    }
}

/// `manage_document`
#[derive(Debug, Deserialize)]
pub struct DocumentParams {
    #[serde(default)]
    pub action: Option<Value>,
    #[serde(default)]
    pub project_id: Option<Value>,
    #[serde(default)]
    pub doc_id: Option<Value>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DocumentParams {
    pub fn into_request(self) -> Result<BackendRequest> {
        let project_id = require(self.project_id, "project_id")?;
        let mut fields = self.fields;
        let mut segments = vec!["api".to_string(), "projects".to_string(), project_id];
        segments.push("documents".to_string());

        if Action::from_field(self.action.as_ref()) == Action::Create {
            restore(&mut fields, "doc_id", self.doc_id);
            Ok(BackendRequest::post(segments, Value::Object(fields)))
        } else {
            segments.push(require(self.doc_id, "doc_id")?);
            Ok(BackendRequest::patch(segments, Value::Object(fields)))
        }
    }
}
