use calc_core::Operation;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::AuthlessCalculator;
use crate::helpers;

/// Parameters for adding two numbers.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AddParams {
    pub a: f64,
    pub b: f64,
}

/// Parameters for a single arithmetic operation.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CalculateParams {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
}

#[tool_router(router = tool_router_arithmetic, vis = "pub")]
impl AuthlessCalculator {
    #[tool(description = "Add two numbers and return the sum.")]
    async fn add(
        &self,
        Parameters(params): Parameters<AddParams>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(a = params.a, b = params.b, "add");
        Ok(helpers::into_call_result(calc_core::add(params.a, params.b)))
    }

    #[tool(description = "Apply add, subtract, multiply or divide to two numbers. Dividing by zero returns an error message as text.")]
    async fn calculate(
        &self,
        Parameters(params): Parameters<CalculateParams>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(operation = %params.operation, a = params.a, b = params.b, "calculate");
        Ok(helpers::into_call_result(calc_core::calculate(
            params.operation,
            params.a,
            params.b,
        )))
    }
}
