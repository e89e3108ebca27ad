//! Serve command implementation
//!
//! This module implements the `cityguide serve` command, which runs the HTTP
//! API until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use url::Url;

use cityguide_adapters::{AppState, HttpServer, ServerConfig};

use super::{build_directory, UpstreamOptions};

/// Arguments for the serve command
pub struct ServeArgs {
    /// Host to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Externally visible URL of the deployment
    pub public_url: Option<Url>,
    /// City and weather source
    pub upstream: UpstreamOptions,
}

/// Execute the serve command
pub async fn execute_serve_command(args: ServeArgs) -> Result<()> {
    let host = resolve_host(&args.host, args.public_url.as_ref());
    let directory = build_directory(&args.upstream)?;

    if let Some(url) = &args.public_url {
        info!("Public URL: {}", url);
    }

    let state = AppState::new(directory).with_public_url(args.public_url);
    let server = HttpServer::new(ServerConfig { host, port: args.port }, state);
    let bind_address = server.config().bind_address();

    server
        .run(wait_for_shutdown())
        .await
        .with_context(|| format!("HTTP server on {} failed", bind_address))?;

    info!("Shutdown complete");
    Ok(())
}

/// Hosted deployments must listen on every interface
pub fn resolve_host(host: &str, public_url: Option<&Url>) -> String {
    match public_url {
        Some(_) => "0.0.0.0".to_string(),
        None => host.to_string(),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn options(fixtures: Option<PathBuf>) -> UpstreamOptions {
        UpstreamOptions {
            upstream_url: Url::parse("https://example.com").unwrap(),
            timeout: Duration::from_secs(1),
            fixtures,
        }
    }

    #[test]
    fn test_resolve_host() {
        assert_eq!(resolve_host("localhost", None), "localhost");

        let url = Url::parse("https://cityguide.onrender.com").unwrap();
        assert_eq!(resolve_host("localhost", Some(&url)), "0.0.0.0");
    }

    #[test]
    fn test_build_directory() {
        assert!(build_directory(&options(None)).is_ok());

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "cities": {{}} }}"#).unwrap();
        assert!(build_directory(&options(Some(file.path().to_path_buf()))).is_ok());

        let missing = PathBuf::from("/nonexistent/cityguide-fixtures.json");
        assert!(build_directory(&options(Some(missing))).is_err());
    }
}
