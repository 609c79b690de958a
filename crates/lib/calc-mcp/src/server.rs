//! MCP server runners and HTTP path dispatch.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig,
    StreamableHttpService,
    session::local::LocalSessionManager,
};
use tracing::info;

use crate::AuthlessCalculator;

/// Base path of the streaming (SSE) transport.
pub const SSE_PATH: &str = "/sse";
/// Message path of the streaming transport; shares sessions with [`SSE_PATH`].
pub const SSE_MESSAGE_PATH: &str = "/sse/message";
/// Path of the unary request/response transport.
pub const MCP_PATH: &str = "/mcp";
/// Body returned for every unmatched path.
pub const NOT_FOUND_BODY: &str = "Not found";

/// Configuration for the MCP HTTP server.
#[derive(Debug, Clone)]
pub struct McpHttpServerConfig {
    pub addr: SocketAddr,
    pub sse_keep_alive: Option<Duration>,
    pub sse_retry: Option<Duration>,
}

impl McpHttpServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            sse_keep_alive: Some(Duration::from_secs(15)),
            sse_retry: Some(Duration::from_secs(3)),
        }
    }

    #[must_use]
    pub const fn with_sse_keep_alive(mut self, sse_keep_alive: Option<Duration>) -> Self {
        self.sse_keep_alive = sse_keep_alive;
        self
    }

    #[must_use]
    pub const fn with_sse_retry(mut self, sse_retry: Option<Duration>) -> Self {
        self.sse_retry = sse_retry;
        self
    }
}

impl Default for McpHttpServerConfig {
    fn default() -> Self {
        Self::new("127.0.0.1:8787".parse().expect("valid MCP HTTP address"))
    }
}

/// Builds the HTTP router.
///
/// `/sse` and `/sse/message` reach one stateful streaming service, `/mcp`
/// reaches a stateless service, and anything else is a plain-text 404.
pub fn router(config: &McpHttpServerConfig) -> Router {
    let streaming: StreamableHttpService<AuthlessCalculator, LocalSessionManager> =
        StreamableHttpService::new(
            || Ok(AuthlessCalculator::new()),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                sse_keep_alive: config.sse_keep_alive,
                sse_retry: config.sse_retry,
                stateful_mode: true,
                ..Default::default()
            },
        );
    let unary: StreamableHttpService<AuthlessCalculator, LocalSessionManager> =
        StreamableHttpService::new(
            || Ok(AuthlessCalculator::new()),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                sse_keep_alive: None,
                sse_retry: None,
                stateful_mode: false,
                ..Default::default()
            },
        );

    Router::new()
        .route_service(SSE_PATH, streaming.clone())
        .route_service(SSE_MESSAGE_PATH, streaming)
        .route_service(MCP_PATH, unary)
        .fallback(not_found)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// Serves the MCP server over stdio.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = AuthlessCalculator::new();
    let (stdin, stdout) = stdio();
    let running = serve_server(service, (stdin, stdout)).await?;
    let _ = running.waiting().await?;
    Ok(())
}

/// Serves both HTTP transports until the listener fails.
///
/// # Errors
/// Returns any listener or server error.
pub async fn serve_streamable_http(
    config: McpHttpServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = router(&config);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    info!("authless calculator listening on {}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
