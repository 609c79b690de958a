//! Core tool semantics for the authless calculator.
//!
//! This crate owns everything a tool call computes: the arithmetic operations,
//! the fixed exchange-rate table and conversion analysis, and the number
//! formatting rules shared by every tool. It has no protocol dependency; the
//! MCP crate maps [`ToolResult`] into protocol content.

pub mod arithmetic;
pub mod content;
pub mod currency;
pub mod format;

pub use arithmetic::{Operation, add, calculate};
pub use content::{ContentBlock, ToolResult};
pub use currency::{CurrencyCode, ExchangeRateTable, EXCHANGE_RATES, currency_convert_and_analyze};
