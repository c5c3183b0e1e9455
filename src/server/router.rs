//! Application router

use crate::config::{AllowedOrigins, allowed_origins};
use crate::server::cors::build_cors_layer;
use crate::server::handlers;
use crate::server::middleware::sanitize_body;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Creates the application router from the current environment.
pub fn create_router() -> Router {
    router_with_origins(&allowed_origins())
}

/// Creates the application router for an explicit set of CORS origins.
///
/// Layers run outermost first: request tracing, CORS, body sanitization.
pub fn router_with_origins(origins: &AllowedOrigins) -> Router {
    info!(allowed_origins = %origins, "Building application router");

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/echo", post(handlers::echo))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(sanitize_body))
        .layer(build_cors_layer(origins))
        .layer(TraceLayer::new_for_http())
}
