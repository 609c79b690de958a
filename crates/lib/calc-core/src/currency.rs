//! Currency conversion with a fixed, mocked exchange-rate table.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::content::ToolResult;
use crate::format::{format_fixed2, format_number};

/// Target currency used when a conversion omits `to`.
pub const DEFAULT_TARGET_CURRENCY: &str = "USD";

pub const JPY_VOLATILITY_NOTE: &str =
    "Note: The Japanese Yen has shown volatility recently due to central bank policies.";
pub const INR_STABILITY_NOTE: &str =
    "The INR to USD rate has been relatively stable with slight depreciation over the past year.";

const CURRENCY_CODE_LEN: usize = 3;

/// Static mapping of `FROM_TO` pair keys to conversion factors.
///
/// The table is not symmetric: inverse pairs are stored as their own entries.
#[derive(Debug)]
pub struct ExchangeRateTable {
    entries: &'static [(&'static str, f64)],
}

/// The process-wide rate table.
pub static EXCHANGE_RATES: ExchangeRateTable = ExchangeRateTable {
    entries: &[
        ("USD_INR", 83.0),
        ("INR_USD", 1.0 / 83.0),
        ("EUR_USD", 1.08),
        ("USD_EUR", 1.0 / 1.08),
        ("JPY_USD", 1.0 / 156.0),
        ("USD_JPY", 156.0),
    ],
};

impl ExchangeRateTable {
    /// Looks up a rate by its `FROM_TO` key. Keys are case-sensitive.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(pair, _)| *pair == key)
            .map(|(_, rate)| *rate)
    }

    /// Looks up a rate after normalizing both codes to uppercase.
    #[must_use]
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        self.lookup(&pair_key(from, to))
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }
}

/// Builds the uppercase `FROM_TO` lookup key.
#[must_use]
pub fn pair_key(from: &str, to: &str) -> String {
    format!("{}_{}", from.to_uppercase(), to.to_uppercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCurrencyCode(pub String);

impl fmt::Display for InvalidCurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "currency code must be exactly {CURRENCY_CODE_LEN} characters, got {:?}",
            self.0
        )
    }
}

impl Error for InvalidCurrencyCode {}

/// A three-character currency code as supplied by the caller.
///
/// Length is counted in UTF-16 code units, so a character outside the basic
/// multilingual plane counts twice. Case is preserved; lookups uppercase on
/// demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The default conversion target, `USD`.
    #[must_use]
    pub fn default_target() -> Self {
        Self(DEFAULT_TARGET_CURRENCY.to_string())
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = InvalidCurrencyCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.encode_utf16().count() == CURRENCY_CODE_LEN {
            Ok(Self(value))
        } else {
            Err(InvalidCurrencyCode(value))
        }
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = InvalidCurrencyCode;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl JsonSchema for CurrencyCode {
    fn schema_name() -> Cow<'static, str> {
        "CurrencyCode".into()
    }

    fn inline_schema() -> bool {
        true
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "minLength": CURRENCY_CODE_LEN,
            "maxLength": CURRENCY_CODE_LEN,
            "description": "Three-letter currency code, e.g. INR"
        })
    }
}

/// Converts `amount` between two currencies and appends a market note when
/// one applies.
///
/// An unknown pair is reported as text using the codes exactly as given,
/// while the lookup itself is case-insensitive.
#[must_use]
pub fn currency_convert_and_analyze(amount: f64, from: &str, to: &str) -> ToolResult {
    let Some(rate) = EXCHANGE_RATES.rate(from, to) else {
        warn!(from, to, "no exchange rate for currency pair");
        return ToolResult::text(format!(
            "Sorry, I don't have the exchange rate for {from} to {to}."
        ));
    };

    let from_upper = from.to_uppercase();
    let to_upper = to.to_uppercase();
    let converted = amount * rate;
    debug!(from = %from_upper, to = %to_upper, rate, converted, "converted amount");

    let result = ToolResult::text(format!(
        "{} {from_upper} = {} {to_upper}",
        format_number(amount),
        format_fixed2(converted)
    ));

    match insight(&from_upper, &to_upper) {
        Some(note) => result.with_text(note),
        None => result,
    }
}

fn insight(from: &str, to: &str) -> Option<&'static str> {
    if from == "JPY" || to == "JPY" {
        Some(JPY_VOLATILITY_NOTE)
    } else if from == "INR" && to == "USD" {
        Some(INR_STABILITY_NOTE)
    } else {
        None
    }
}
