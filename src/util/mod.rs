//! Utility functions shared across the application.

mod sanitizer;

pub use sanitizer::sanitize;

pub(crate) use sanitizer::as_mapping;
