//! nimbus-api
//!
//! Runs the application on a local HTTP listener.

use clap::Parser;
use nimbus_api::{
    config::{ConfigSnapshot, load_env_files},
    transport::{DEFAULT_HTTP_HOST, HttpConfig, run_http_blocking},
};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// nimbus-api - serverless HTTP API starter
#[derive(Parser, Debug)]
#[command(name = "nimbus-api")]
#[command(version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error). Defaults to info in
    /// production and debug elsewhere.
    #[arg(long, env = "NIMBUS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "NIMBUS_LOG_JSON")]
    log_json: bool,

    /// HTTP server host
    #[arg(long, env = "NIMBUS_HOST", default_value = DEFAULT_HTTP_HOST)]
    host: String,

    /// Directory containing .env files
    #[arg(long, default_value = ".")]
    env_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Env files come first so they can set RUST_LOG and APP_ENV-dependent values
    let env_files = load_env_files(&args.env_dir);
    let snapshot = ConfigSnapshot::capture();

    // Initialize logging
    let level = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| snapshot.default_log_level());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if args.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }

    let env_files = env_files.inspect_err(|e| error!(error = %e, "Failed to load env files"))?;
    for path in &env_files.loaded {
        info!(path = %path.display(), "Loaded env file");
    }
    for path in &env_files.skipped {
        debug!(path = %path.display(), "Env file not present, skipped");
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = snapshot.execution_environment.as_deref().unwrap_or("unset"),
        port = snapshot.network_port,
        allowed_origins = %snapshot.allowed_origins,
        auth_bypass = snapshot.auth_bypass_enabled,
        "Starting nimbus-api"
    );

    if snapshot.auth_bypass_enabled && snapshot.is_production() {
        warn!("SKIP_AUTH is enabled in production");
    }

    let http_config = HttpConfig::from_env(&args.host)
        .inspect_err(|e| error!(error = %e, "Invalid HTTP configuration"))?;

    run_http_blocking(http_config).await?;

    Ok(())
}
