//! Daemon entry point for the authless calculator MCP server.
//!
//! Loads configuration from the command line and environment, then serves the
//! MCP protocol over HTTP and, when enabled, over stdio.

mod config;

use calc_mcp::server::{serve_stdio, serve_streamable_http};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CalcConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // stdout is reserved for the stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = CalcConfig::from_args()?;

    let http = async {
        if config.http_serve {
            serve_streamable_http(config.http_config()).await
        } else {
            Ok(())
        }
    };
    let stdio = async {
        if config.enable_stdio {
            info!("serving MCP over stdio");
            serve_stdio().await
        } else {
            Ok(())
        }
    };

    tokio::select! {
        result = async { tokio::try_join!(http, stdio) } => {
            result?;
        }
        result = shutdown_requested(tokio::signal::ctrl_c()) => {
            result?;
        }
    }
    Ok(())
}

/// Resolves once `signal` fires; fails if the signal handler could not be installed.
async fn shutdown_requested(
    signal: impl Future<Output = std::io::Result<()>>,
) -> Result<(), BoxError> {
    signal.await?;
    info!("shutdown requested");
    Ok(())
}
