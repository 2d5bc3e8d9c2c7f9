//! Integration tests for the slideshot REST API.
//!
//! These cover the request surface that never reaches a browser; rendering
//! itself is exercised in `render_e2e.rs`.

use std::sync::Arc;

use axum_test::TestServer;
use http::StatusCode;
use serde_json::json;
use slideshot_server::{build_router, AppState, ServerConfig};

fn test_server() -> TestServer {
    let state = Arc::new(AppState::new(ServerConfig::default()));
    let app = build_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn health_reports_ready() {
    let server = test_server();
    let res = server.get("/").await;
    res.assert_status_ok();

    let body: serde_json::Value = res.json();
    assert_eq!(body["status"], "ready");
    assert!(body["message"].is_string());
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn render_missing_html_returns_400() {
    let server = test_server();
    let res = server.post("/render").json(&json!({})).await;
    res.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json();
    assert_eq!(body["error"], "HTML content required");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("POST /render"));
}

#[tokio::test]
async fn render_empty_html_returns_400() {
    let server = test_server();
    let res = server.post("/render").json(&json!({ "html": "" })).await;
    res.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json();
    assert_eq!(body["error"], "HTML content required");
}

#[tokio::test]
async fn render_non_string_html_returns_422() {
    let server = test_server();
    let res = server.post("/render").json(&json!({ "html": 42 })).await;
    res.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn render_oversized_body_is_rejected() {
    let server = test_server();
    let html = "x".repeat(11 * 1024 * 1024);
    let res = server.post("/render").json(&json!({ "html": html })).await;
    res.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn config_reads_port_from_env() {
    std::env::set_var("PORT", "8123");
    let config = ServerConfig::from_env();
    assert_eq!(config.port, 8123);

    std::env::set_var("PORT", "not-a-port");
    let config = ServerConfig::from_env();
    assert_eq!(config.port, 3000);
    std::env::remove_var("PORT");
}
