//! Function-as-a-service entry point
//!
//! Serverless hosts reuse a process across many invocations, so the router
//! is built on the first invocation and kept for the life of the process.
//! Each invocation clones the cached router, which only bumps reference
//! counts.

use crate::server::create_router;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use std::sync::OnceLock;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;
use tracing::info;

/// Process-wide application instance
static APP: OnceLock<Router> = OnceLock::new();

/// Number of times the router has been built
#[cfg(test)]
static BUILDS: AtomicUsize = AtomicUsize::new(0);

/// Returns the cached application router, building it on first use.
pub fn app() -> Router {
    APP.get_or_init(|| {
        info!("Cold start: building application");
        #[cfg(test)]
        BUILDS.fetch_add(1, Ordering::SeqCst);
        create_router()
    })
    .clone()
}

/// Whether the application has already been built in this process.
pub fn is_warm() -> bool {
    APP.get().is_some()
}

/// Handles one invocation through the cached router.
pub async fn handle(request: Request<Body>) -> Response {
    match app().oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    }
}
