//! Envelope edge cases: ids, params and method shapes

use std::sync::Arc;

use axum::http::StatusCode;
use mcp_http_bridge::core::config::Config;
use mcp_http_bridge::core::services::Services;
use mcp_http_bridge::rpc::{Dispatcher, RpcRequest};
use serde_json::{json, Value};

use crate::common::RecordingBackend;

fn dispatcher() -> (Dispatcher, Arc<RecordingBackend>) {
    let backend = RecordingBackend::returning(json!({"ok": true}));
    let services = Services::with_backend(Config::default(), backend.clone());
    (Dispatcher::new(Arc::new(services)), backend)
}

#[tokio::test]
async fn test_missing_id_defaults_to_one() {
    let (dispatcher, _) = dispatcher();
    let outcome = dispatcher
        .handle(br#"{"method": "get_available_sources"}"#)
        .await;

    assert_eq!(outcome.status, StatusCode::OK);
    assert_eq!(outcome.response.id, Some(json!(1)));
}

#[tokio::test]
async fn test_explicit_null_id_is_echoed() {
    let (dispatcher, _) = dispatcher();
    let outcome = dispatcher
        .handle(br#"{"method": "get_available_sources", "id": null}"#)
        .await;

    assert_eq!(outcome.response.id, Some(Value::Null));
    let json = serde_json::to_value(&outcome.response).unwrap();
    assert!(json.as_object().unwrap().contains_key("id"));
    assert!(json["id"].is_null());
}

#[tokio::test]
async fn test_null_params_is_empty_mapping() {
    let (dispatcher, backend) = dispatcher();
    let outcome = dispatcher
        .handle(br#"{"method": "perform_rag_query", "params": null}"#)
        .await;

    assert_eq!(outcome.status, StatusCode::OK);
    assert_eq!(backend.single_call().path(), "/api/rag/query");
}

#[tokio::test]
async fn test_array_params_is_internal_error() {
    let (dispatcher, backend) = dispatcher();
    let outcome = dispatcher
        .handle(br#"{"method": "perform_rag_query", "params": [1, 2], "id": "a"}"#)
        .await;

    assert_eq!(outcome.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(outcome.response.id, Some(json!("a")));
    let error = outcome.response.error.unwrap();
    assert_eq!(error.code, -32603);
    assert!(error.message.starts_with("Invalid params"), "{}", error.message);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_false_method_is_not_specified() {
    let (dispatcher, _) = dispatcher();
    let outcome = dispatcher.handle(br#"{"method": false}"#).await;

    assert_eq!(outcome.status, StatusCode::BAD_REQUEST);
    assert_eq!(outcome.response.error.unwrap().code, -32600);
}

#[tokio::test]
async fn test_falsy_method_shapes_are_not_specified() {
    let (dispatcher, backend) = dispatcher();
    for body in [
        &br#"{"method": 0, "id": 4}"#[..],
        &br#"{"method": [], "id": 4}"#[..],
        &br#"{"method": {}, "id": 4}"#[..],
    ] {
        let outcome = dispatcher.handle(body).await;

        assert_eq!(outcome.status, StatusCode::BAD_REQUEST);
        assert_eq!(outcome.response.id, Some(json!(4)));
        let error = outcome.response.error.unwrap();
        assert_eq!(error.code, -32600);
        assert_eq!(error.message, "Method not specified");
    }
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_numeric_method_is_not_found() {
    let (dispatcher, _) = dispatcher();
    let outcome = dispatcher.handle(br#"{"method": 42, "id": 2}"#).await;

    assert_eq!(outcome.status, StatusCode::NOT_FOUND);
    let error = outcome.response.error.unwrap();
    assert_eq!(error.code, -32601);
    assert_eq!(error.message, "Method '42' not found");
}

#[tokio::test]
async fn test_method_names_are_case_sensitive() {
    let (dispatcher, backend) = dispatcher();
    let outcome = dispatcher
        .handle(br#"{"method": "Perform_Rag_Query"}"#)
        .await;

    assert_eq!(outcome.status, StatusCode::NOT_FOUND);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_handle_request_accepts_parsed_envelope() {
    let (dispatcher, _) = dispatcher();
    let request =
        RpcRequest::from_value(json!({"method": "get_available_sources", "id": 77})).unwrap();

    let outcome = dispatcher.handle_request(request).await;

    assert_eq!(outcome.status, StatusCode::OK);
    assert_eq!(outcome.response.id, Some(json!(77)));
    assert_eq!(outcome.response.result, Some(json!({"ok": true})));
}

#[tokio::test]
async fn test_top_level_array_loses_id() {
    let (dispatcher, _) = dispatcher();
    let outcome = dispatcher
        .handle(br#"[{"method": "get_available_sources", "id": 3}]"#)
        .await;

    assert_eq!(outcome.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(outcome.response.id, None);
    assert_eq!(
        outcome.response.error.unwrap().message,
        "Internal server error"
    );
}
