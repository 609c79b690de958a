use calc_core::CurrencyCode;
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

/// Parameters for converting an amount between two currencies.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CurrencyConvertParams {
    pub amount: f64,
    pub from: CurrencyCode,
    #[serde(default = "CurrencyCode::default_target")]
    pub to: CurrencyCode,
}

#[tool_router(router = tool_router_currency, vis = "pub")]
impl AuthlessCalculator {
    #[tool(description = "Convert an amount between currencies using fixed rates and add a short market note when available. `to` defaults to USD.")]
    async fn currency_convert_and_analyze(
        &self,
        Parameters(params): Parameters<CurrencyConvertParams>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(amount = params.amount, from = %params.from, to = %params.to, "currency_convert_and_analyze");
        Ok(helpers::into_call_result(calc_core::currency_convert_and_analyze(
            params.amount,
            params.from.as_str(),
            params.to.as_str(),
        )))
    }
}
