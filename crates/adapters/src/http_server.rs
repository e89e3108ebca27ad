//! HTTP server.
//!
//! Binds the configured address and serves [`create_router`] until the
//! shutdown future resolves.

use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::create_router;
use crate::state::AppState;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host name or IP address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, bracketing IPv6 literals
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// The Cityguide HTTP server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Creates a new [`HttpServer`] serving `state`.
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Access the configuration associated with this server.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind the configured address
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind(self.config.bind_address()).await
    }

    /// Bind and serve until `shutdown` resolves
    pub async fn run<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("HTTP server listening on {}", listener.local_addr()?);

        axum::serve(listener, create_router(self.state))
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}
