//! MCP tool modules.
//!
//! Tools are grouped by domain: plain arithmetic and currency conversion.

pub mod arithmetic;
pub mod currency;
