//! Configuration module
//!
//! Typed accessors over the process environment plus the env file loader
//! that populates it at startup.

pub mod env;
pub mod loader;

pub use env::{
    AllowedOrigins, ConfigSnapshot, DEFAULT_ORIGIN, DEFAULT_PORT, allowed_origins,
    auth_bypass_enabled, execution_environment, network_port,
};
pub use loader::{EnvFiles, env_file_candidates, load_env_files};
