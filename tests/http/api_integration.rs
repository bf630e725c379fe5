//! Integration tests for the bridge HTTP API
//!
//! Exercises routing, envelope shape and status codes with an
//! in-process backend that records what it was asked to do.

use axum::http::StatusCode;
use mcp_http_bridge::core::config::Config;
use mcp_http_bridge::core::types::{BackendRequest, Verb};
use serde_json::{json, Value};

use crate::common::{bridge_app, get, post_rpc, FailingBackend, RecordingBackend};

#[tokio::test]
async fn test_health_endpoint() {
    let backend = RecordingBackend::returning(json!({}));
    let app = bridge_app(backend.clone(), Config::default());

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        json!({
            "status": "healthy",
            "service": "mcp-http-bridge",
            "tools_available": true
        })
    );
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_health_ignores_backend_state() {
    let app = bridge_app(std::sync::Arc::new(FailingBackend), Config::default());

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_missing_method_is_bad_request() {
    let backend = RecordingBackend::returning(json!({}));
    let app = bridge_app(backend.clone(), Config::default());

    let (status, json) = post_rpc(app, json!({"params": {}, "id": 7}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["id"], 7);
    assert_eq!(json["error"]["code"], -32600);
    assert_eq!(json["error"]["message"], "Method not specified");
    assert!(json.get("result").is_none());
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_empty_method_is_bad_request() {
    let app = bridge_app(RecordingBackend::returning(json!({})), Config::default());

    let (status, json) = post_rpc(app, json!({"method": ""}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], -32600);
    assert_eq!(json["id"], 1);
}

#[tokio::test]
async fn test_unknown_method_is_not_found() {
    let backend = RecordingBackend::returning(json!({}));
    let app = bridge_app(backend.clone(), Config::default());

    let (status, json) = post_rpc(app, json!({"method": "frobnicate", "id": 3}).to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["id"], 3);
    assert_eq!(json["error"]["code"], -32601);
    assert_eq!(json["error"]["message"], "Method 'frobnicate' not found");
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_non_json_body_is_opaque_internal_error() {
    let app = bridge_app(RecordingBackend::returning(json!({})), Config::default());

    let (status, json) = post_rpc(app, "{not json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["error"]["code"], -32603);
    assert_eq!(json["error"]["message"], "Internal server error");
    assert!(json.get("id").is_none());
}

#[tokio::test]
async fn test_rag_query_defaults_match_count() {
    let backend = RecordingBackend::returning(json!({"results": [{"content": "foo"}]}));
    let app = bridge_app(backend.clone(), Config::default());

    let (status, json) = post_rpc(
        app,
        json!({"method": "perform_rag_query", "params": {"query": "foo"}, "id": 1}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], json!({"results": [{"content": "foo"}]}));
    assert!(json.get("error").is_none());

    let call = backend.single_call();
    assert_eq!(
        call,
        BackendRequest::post(
            ["api", "rag", "query"],
            json!({"query": "foo", "source_id": null, "match_count": 5})
        )
    );
}

#[tokio::test]
async fn test_manage_project_create_strips_action() {
    let backend = RecordingBackend::returning(json!({"id": "P1"}));
    let app = bridge_app(backend.clone(), Config::default());

    let (status, _) = post_rpc(
        app,
        json!({"method": "manage_project", "params": {"action": "create", "name": "X"}})
            .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let call = backend.single_call();
    assert_eq!(call.verb, Verb::Post);
    assert_eq!(call.path(), "/api/projects");
    assert_eq!(call.body, Some(json!({"name": "X"})));
}

#[tokio::test]
async fn test_manage_task_create_path_and_body() {
    let backend = RecordingBackend::returning(json!({"id": "T1"}));
    let app = bridge_app(backend.clone(), Config::default());

    let (status, _) = post_rpc(
        app,
        json!({
            "method": "manage_task",
            "params": {"action": "create", "project_id": "P1", "title": "T"}
        })
        .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let call = backend.single_call();
    assert_eq!(call.verb, Verb::Post);
    assert_eq!(call.path(), "/api/projects/P1/tasks");
    assert_eq!(call.body, Some(json!({"title": "T"})));
}

#[tokio::test]
async fn test_id_echoed_on_success() {
    let app = bridge_app(RecordingBackend::returning(json!([])), Config::default());

    let (_, json) = post_rpc(
        app,
        json!({"method": "get_available_sources", "id": "req-42"}).to_string(),
    )
    .await;

    assert_eq!(json["id"], "req-42");
    assert_eq!(json["result"], json!([]));
}

#[tokio::test]
async fn test_id_echoed_on_backend_failure() {
    let app = bridge_app(std::sync::Arc::new(FailingBackend), Config::default());

    let (status, json) = post_rpc(
        app,
        json!({"method": "get_available_sources", "id": {"n": 9}}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["id"], json!({"n": 9}));
    assert_eq!(json["error"]["code"], -32603);
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("503"), "unexpected message: {message}");
    assert!(message.contains("service unavailable"));
}

#[tokio::test]
async fn test_get_on_rpc_not_allowed() {
    let app = bridge_app(RecordingBackend::returning(json!({})), Config::default());

    let (status, _) = get(app, "/rpc").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
