//! MCP server implementation for the authless calculator.
//!
//! This crate registers the calculator tools with rmcp tool routers, exposes
//! the server metadata used during capability negotiation, and dispatches
//! HTTP paths to the streaming and unary transports.

mod helpers;
mod tools;
pub mod server;

use rmcp::{
    ErrorData,
    RoleServer,
    ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    service::RequestContext,
};
use rmcp::model::{
    CallToolRequestParams,
    CallToolResult,
    Implementation,
    ListToolsResult,
    PaginatedRequestParams,
    ServerCapabilities,
    ServerInfo,
    Tool,
};

pub use tools::arithmetic::{AddParams, CalculateParams};
pub use tools::currency::CurrencyConvertParams;

/// Server name advertised during initialization.
pub const SERVER_NAME: &str = "Authless Calculator";
/// Server version advertised during initialization.
pub const SERVER_VERSION: &str = "1.0.0";

/// Registration order of the tools, as reported by `tools/list`.
pub const TOOL_ORDER: [&str; 3] = ["add", "calculate", "currency_convert_and_analyze"];

const SERVER_INSTRUCTIONS: &str = r"Authless Calculator exposes simple arithmetic and a mocked currency converter.

Tools:
- `add` sums two numbers `a` and `b`.
- `calculate` applies `operation` (add, subtract, multiply, divide) to `a` and `b`.
  Dividing by zero returns the text `Error: Cannot divide by zero`.
- `currency_convert_and_analyze` converts `amount` from `from` to `to` (default USD) using
  fixed rates for USD/INR, EUR/USD and USD/JPY pairs, and may add a short market note.
  Unsupported pairs are reported as text.";

/// MCP server exposing the calculator tools.
#[derive(Clone)]
pub struct AuthlessCalculator {
    tool_router: ToolRouter<Self>,
}

impl AuthlessCalculator {
    #[must_use]
    pub fn new() -> Self {
        let tool_router = Self::tool_router_arithmetic() + Self::tool_router_currency();
        Self { tool_router }
    }

    /// Lists the registered tool definitions in registration order.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools = self.tool_router.list_all();
        tools.sort_by(|left, right| {
            tool_rank(left)
                .cmp(&tool_rank(right))
                .then_with(|| left.name.cmp(&right.name))
        });
        tools
    }
}

fn tool_rank(tool: &Tool) -> usize {
    TOOL_ORDER
        .iter()
        .position(|name| *name == tool.name)
        .unwrap_or(TOOL_ORDER.len())
}

impl Default for AuthlessCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerHandler for AuthlessCalculator {
    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let tcc = ToolCallContext::new(self, request, context);
        self.tool_router.call(tcc).await
    }

    // The router keeps tools in a hash map; list them in registration order.
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                ..Implementation::default()
            },
            ..Default::default()
        }
    }
}
