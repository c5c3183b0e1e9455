//! Transport module
//!
//! Two ways to reach the application: the function entry point used by a
//! serverless host, and a plain HTTP listener.

pub mod function;
pub mod http;

pub use function::{app, handle, is_warm};
pub use http::{DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT, HttpConfig, run_http_blocking, serve};
