//! Route handlers
//!
//! Request bodies reaching these handlers have already been through the
//! sanitizing middleware.

use crate::config::execution_environment;
use crate::error::ApiError;
use axum::Json;
use axum::body::Bytes;
use axum::http::Uri;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: Option<String>,
    pub version: &'static str,
}

/// `GET /`
pub async fn root() -> &'static str {
    "Hello World!"
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        environment: execution_environment(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /echo` - returns the JSON body it received.
///
/// Takes raw bytes rather than axum's `Json` extractor so malformed input
/// gets the same JSON error shape as every other failure.
pub async fn echo(body: Bytes) -> Result<Json<Value>, ApiError> {
    let value: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidJson(e.to_string()))?;
    debug!(bytes = body.len(), "Echoing request body");
    Ok(Json(value))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
