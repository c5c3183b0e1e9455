//! Serverless HTTP API starter
//!
//! A small axum application meant to run behind a function-as-a-service
//! host, with typed environment configuration, CORS, and whitespace
//! sanitization of JSON request bodies.
//!
//! ## Configuration
//!
//! All settings come from the process environment and are re-read on every
//! access. None of them can fail; bad values fall back to a default.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `APP_ENV` | environment label, also selects `.env.<APP_ENV>` | unset |
//! | `PORT` | local listener port | `5001` |
//! | `ALLOWED_ORIGINS` | `*` or comma-separated origins | `http://localhost:3000` |
//! | `SKIP_AUTH` | `true` to let an auth guard skip checks | `false` |
//!
//! ## Invocation model
//!
//! ```text
//! first invocation  → build router (OnceLock) → dispatch
//! later invocations → clone cached router     → dispatch
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod transport;
pub mod util;

// Re-export main types
pub use config::{AllowedOrigins, ConfigSnapshot};
pub use error::{ApiError, AppError, Result};
pub use server::create_router;
pub use transport::{app, handle};
pub use util::sanitize;
