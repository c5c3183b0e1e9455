//! CORS layer construction

use crate::config::AllowedOrigins;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tracing::warn;

/// Methods allowed on cross-origin requests
const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::HEAD,
    Method::PUT,
    Method::PATCH,
    Method::POST,
    Method::DELETE,
];

/// Builds the CORS layer for the configured origins.
///
/// Credentials are never allowed; browsers reject them together with a
/// wildcard origin.
pub fn build_cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(cors::Any);

    match origins {
        AllowedOrigins::Any => layer.allow_origin(cors::Any),
        AllowedOrigins::List(list) => {
            layer.allow_origin(AllowOrigin::list(origin_header_values(list)))
        }
    }
}

/// Converts origins to header values, skipping ones that cannot be sent.
///
/// A literal "*" inside a list is dropped too, since `AllowOrigin::list`
/// panics on wildcards.
fn origin_header_values(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                warn!(
                    "Ignoring '*' inside an origin list; set ALLOWED_ORIGINS=* to allow any origin"
                );
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                    None
                }
            }
        })
        .collect()
}
