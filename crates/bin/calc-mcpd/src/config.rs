use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use calc_mcp::server::McpHttpServerConfig;

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8787";
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
const DEFAULT_SSE_RETRY_SECS: u64 = 3;

#[derive(Parser, Debug)]
#[command(name = "calc-mcpd", version, about = "Authless calculator MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "CALC_HTTP_ADDR", default_value = DEFAULT_HTTP_ADDR)]
    http_addr: SocketAddr,

    #[arg(
        long,
        env = "CALC_HTTP_SERVE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    http_serve: bool,

    #[arg(
        long = "stdio",
        env = "CALC_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "CALC_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,

    #[arg(
        long,
        env = "CALC_SSE_RETRY_SECS",
        default_value_t = DEFAULT_SSE_RETRY_SECS
    )]
    sse_retry_secs: u64,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct CalcConfig {
    pub http_addr: SocketAddr,
    pub http_serve: bool,
    pub enable_stdio: bool,
    pub sse_keep_alive: Option<Duration>,
    pub sse_retry: Option<Duration>,
}

#[derive(Debug)]
pub enum ConfigError {
    NoTransport,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransport => write!(
                f,
                "no transport enabled: set CALC_HTTP_SERVE or CALC_ENABLE_STDIO"
            ),
        }
    }
}

impl Error for ConfigError {}

impl CalcConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    pub const fn http_config(&self) -> McpHttpServerConfig {
        McpHttpServerConfig::new(self.http_addr)
            .with_sse_keep_alive(self.sse_keep_alive)
            .with_sse_retry(self.sse_retry)
    }
}

const fn seconds_or_disabled(secs: u64) -> Option<Duration> {
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}

impl TryFrom<CliArgs> for CalcConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if !args.http_serve && !args.enable_stdio {
            return Err(ConfigError::NoTransport);
        }

        Ok(Self {
            http_addr: args.http_addr,
            http_serve: args.http_serve,
            enable_stdio: args.enable_stdio,
            sse_keep_alive: seconds_or_disabled(args.sse_keep_alive_secs),
            sse_retry: seconds_or_disabled(args.sse_retry_secs),
        })
    }
}
