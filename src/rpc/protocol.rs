//! JSON-RPC 2.0 envelope types and error codes

use crate::rpc::error::RpcError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const JSONRPC_VERSION: &str = "2.0";

// Standard JSON-RPC error codes
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INTERNAL_ERROR: i32 = -32603;

/// Id used when a request omits `id`
pub fn default_id() -> Value {
    Value::from(1)
}

/// How the `method` member of an incoming envelope looked
#[derive(Debug, Clone, PartialEq)]
pub enum MethodField {
    /// Absent or falsy: `null`, `false`, `0`, `""`, `[]`, `{}`
    Unspecified,
    Name(String),
    /// Any other JSON value; never a known method
    Other(Value),
}

impl MethodField {
    fn from_value(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => MethodField::Unspecified,
            Some(Value::String(s)) if s.is_empty() => MethodField::Unspecified,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => MethodField::Unspecified,
            Some(Value::Array(a)) if a.is_empty() => MethodField::Unspecified,
            Some(Value::Object(o)) if o.is_empty() => MethodField::Unspecified,
            Some(Value::String(s)) => MethodField::Name(s),
            Some(other) => MethodField::Other(other),
        }
    }

    /// Name as shown in error messages
    pub fn display_name(&self) -> String {
        match self {
            MethodField::Unspecified => String::new(),
            MethodField::Name(name) => name.clone(),
            MethodField::Other(value) => value.to_string(),
        }
    }
}

/// Incoming request envelope
///
/// Built from an arbitrary JSON object; members are interpreted
/// leniently and validated by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcRequest {
    pub method: MethodField,
    /// Raw `params`; `null` when absent
    pub params: Value,
    pub id: Value,
}

impl RpcRequest {
    /// Parse a request body
    ///
    /// Fails only when the body is not a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, RpcError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| RpcError::Parse(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, RpcError> {
        let Value::Object(mut object) = value else {
            return Err(RpcError::Parse(
                "request body must be a JSON object".to_string(),
            ));
        };

        Ok(Self {
            method: MethodField::from_value(object.remove("method")),
            params: object.remove("params").unwrap_or(Value::Null),
            id: object.remove("id").unwrap_or_else(default_id),
        })
    }

    /// `params` as a mapping; absent or `null` yields an empty one
    pub fn params_object(&self) -> Result<Map<String, Value>, RpcError> {
        match &self.params {
            Value::Null => Ok(Map::new()),
            Value::Object(map) => Ok(map.clone()),
            other => Err(RpcError::Internal(format!(
                "Invalid params: expected an object, got {}",
                json_type_name(other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

/// Outgoing response envelope
///
/// `id` is omitted only for failures that happened before the request
/// could be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Some(id),
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}
