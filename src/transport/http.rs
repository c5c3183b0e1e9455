//! Local HTTP transport
//!
//! Serves the cached application on a TCP listener. Used for local
//! development and for hosts that forward plain HTTP to the process.

use crate::config::network_port;
use crate::error::{ConfigError, Result, TransportError};
use crate::transport::function::app;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Default port for the HTTP transport
pub const DEFAULT_HTTP_PORT: u16 = 5001;

/// Default bind host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Address to bind to (e.g., "0.0.0.0:5001")
    pub bind: SocketAddr,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], DEFAULT_HTTP_PORT)),
        }
    }
}

impl HttpConfig {
    /// Create a new HTTP config with the specified bind address
    pub fn new(bind: SocketAddr) -> Self {
        Self { bind }
    }

    /// Create config from host and port strings
    pub fn from_host_port(
        host: &str,
        port: u16,
    ) -> std::result::Result<Self, std::net::AddrParseError> {
        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        Ok(Self::new(addr))
    }

    /// Create config for `host` using the port from the `PORT` variable.
    ///
    /// The accessor accepts any positive integer, so a port above 65535 is
    /// only rejected here, where it has to become a socket address.
    pub fn from_env(host: &str) -> Result<Self> {
        let port = network_port();
        let port = u16::try_from(port).map_err(|_| ConfigError::Invalid {
            message: format!("PORT {} exceeds the maximum TCP port {}", port, u16::MAX),
        })?;

        Ok(Self::from_host_port(host, port).map_err(TransportError::from)?)
    }
}

/// Serve the application on an already bound listener until `shutdown`
/// resolves. In-flight requests are drained before returning.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().map_err(TransportError::from)?;
    info!("HTTP server listening on http://{}", local_addr);

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(TransportError::from)?;

    info!("HTTP server stopped");
    Ok(())
}

/// Run the HTTP server and wait for Ctrl+C
pub async fn run_http_blocking(config: HttpConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind)
        .await
        .inspect_err(|e| error!(bind = %config.bind, error = %e, "Failed to bind"))
        .map_err(TransportError::from)?;

    info!("Press Ctrl+C to stop the server");
    serve(listener, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
