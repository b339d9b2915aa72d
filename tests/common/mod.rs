//! Common test utilities

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use grocery_daemon::{build_router, GroceryService, JsonFileStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Path of the data file used inside a test directory
pub fn data_file(dir: &Path) -> PathBuf {
    dir.join("grocery-lists.json")
}

/// Service backed by a JSON file inside `dir`
pub fn file_service(dir: &Path) -> GroceryService {
    GroceryService::new(Arc::new(JsonFileStore::new(data_file(dir))))
}

/// Router backed by a JSON file inside `dir`
#[allow(dead_code)] // Test utility for HTTP tests only
pub fn test_app(dir: &Path) -> Router {
    build_router(file_service(dir), vec!["http://localhost".to_string()])
}

/// Send a request through the router and decode the JSON response body.
/// Returns `Value::Null` for empty bodies.
#[allow(dead_code)] // Test utility for HTTP tests only
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body should be JSON")
    };
    (status, value)
}
