//! Request body sanitization middleware.
//!
//! JSON request bodies are parsed, trimmed with [`sanitize`] and re-encoded
//! before any handler sees them. Everything else passes through untouched.

use crate::error::ApiError;
use crate::util::{as_mapping, sanitize};
use axum::body::{Body, Bytes, to_bytes};
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;
use serde_json::Value;
use std::error::Error as _;
use tracing::{debug, warn};

/// Largest request body the middleware will buffer (1 MiB)
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Sanitizes JSON request bodies in place.
pub async fn sanitize_body(request: Request, next: Next) -> Response {
    if !is_json(request.headers()) {
        return next.run(request).await;
    }

    if declared_length(request.headers()).is_some_and(|len| len > MAX_BODY_BYTES) {
        return ApiError::PayloadTooLarge {
            limit: MAX_BODY_BYTES,
        }
        .into_response();
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) if exceeded_limit(&e) => {
            debug!(limit = MAX_BODY_BYTES, "Streamed request body over limit");
            return ApiError::PayloadTooLarge {
                limit: MAX_BODY_BYTES,
            }
            .into_response();
        }
        Err(e) => {
            warn!(error = %e, "Failed to buffer request body");
            return ApiError::BodyRead(e.to_string()).into_response();
        }
    };

    let body = match rewrite_json(&bytes) {
        Some(rewritten) => {
            debug!(
                before = bytes.len(),
                after = rewritten.len(),
                "Sanitized JSON request body"
            );
            parts.headers.remove(header::TRANSFER_ENCODING);
            parts
                .headers
                .insert(header::CONTENT_LENGTH, HeaderValue::from(rewritten.len()));
            Body::from(rewritten)
        }
        None => Body::from(bytes),
    };

    next.run(Request::from_parts(parts, body)).await
}

/// Returns the sanitized encoding of `bytes`, or `None` when the body
/// should be forwarded as-is (invalid JSON or nothing to trim).
fn rewrite_json(bytes: &Bytes) -> Option<Vec<u8>> {
    let value: Value = serde_json::from_slice(bytes).ok()?;

    let has_strings = match &value {
        Value::String(_) | Value::Array(_) => true,
        _ => as_mapping(&value, false).is_some(),
    };
    if !has_strings {
        return None;
    }

    serde_json::to_vec(&sanitize(&value)).ok()
}

/// `application/json` or any `+json` media type
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || essence.ends_with("+json")
}

/// Whether a buffering error was caused by the body outgrowing its limit
fn exceeded_limit(error: &axum::Error) -> bool {
    let mut source = error.source();
    while let Some(err) = source {
        if err.is::<LengthLimitError>() {
            return true;
        }
        source = err.source();
    }
    false
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}
