//! Shared test fixtures
//!
//! Each test gets its own database under a temp directory, so tests are
//! independent and can run in parallel.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use trade_server::core::{Config, ServerState};
use trade_server::db::models::ProductSnapshot;

/// Fresh state over a throwaway database. Keep the `TempDir` alive for the
/// duration of the test, dropping it deletes the database files.
pub async fn test_state() -> (ServerState, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("initialize state");
    (state, dir)
}

/// Full application router over a throwaway database
pub async fn test_app() -> (Router, TempDir) {
    let (state, dir) = test_state().await;
    (trade_server::api::router(state), dir)
}

pub fn get_random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn snapshot(category: &str, variety: &str, packaging: &str) -> ProductSnapshot {
    ProductSnapshot {
        category: category.to_string(),
        variety: variety.to_string(),
        packaging: packaging.to_string(),
        volume: "100".to_string(),
        price_per_unit: "2.50".to_string(),
    }
}

/// Drive one request through the router and decode the JSON response
pub async fn request_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
