//! Shared helpers for integration tests.

#![allow(dead_code)]

use axum::body::{Body, to_bytes};
use axum::response::Response;
use serde_json::Value;

/// Sets an environment variable for the current process.
///
/// Callers must be `#[serial_test::serial]` so no other test reads the
/// environment concurrently.
pub fn set_var(key: &str, value: &str) {
    // SAFETY: env-mutating tests are serialized.
    unsafe {
        std::env::set_var(key, value);
    }
}

/// Removes an environment variable from the current process.
pub fn remove_var(key: &str) {
    // SAFETY: env-mutating tests are serialized.
    unsafe {
        std::env::remove_var(key);
    }
}

/// Collects a response body into a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

/// Collects a response body and parses it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let text = body_string(response).await;
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Invalid JSON body {text:?}: {e}"))
}
