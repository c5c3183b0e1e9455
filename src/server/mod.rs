//! HTTP application
//!
//! Routes, CORS and the body-sanitizing middleware assembled into one
//! axum [`Router`](axum::Router).

pub mod cors;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use cors::build_cors_layer;
pub use middleware::{MAX_BODY_BYTES, sanitize_body};
pub use router::{create_router, router_with_origins};
