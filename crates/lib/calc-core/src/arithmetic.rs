use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::content::ToolResult;
use crate::format::format_number;

/// Text returned by `calculate` when asked to divide by zero.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Error: Cannot divide by zero";

/// Operations accepted by the `calculate` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Applies the operation. Returns `None` for division by zero.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::Add => Some(a + b),
            Self::Subtract => Some(a - b),
            Self::Multiply => Some(a * b),
            Self::Divide if b == 0.0 => None,
            Self::Divide => Some(a / b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sums two numbers.
#[must_use]
pub fn add(a: f64, b: f64) -> ToolResult {
    ToolResult::text(format_number(a + b))
}

/// Runs one of the four arithmetic operations.
///
/// Division by zero is not an error; it yields [`DIVIDE_BY_ZERO_MESSAGE`].
#[must_use]
pub fn calculate(operation: Operation, a: f64, b: f64) -> ToolResult {
    operation.apply(a, b).map_or_else(
        || ToolResult::text(DIVIDE_BY_ZERO_MESSAGE),
        |value| ToolResult::text(format_number(value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_text(result: &ToolResult) -> &str {
        assert_eq!(result.content.len(), 1, "expected a single content block");
        result.content[0].as_text()
    }

    #[test]
    fn add_formats_sum() {
        assert_eq!(single_text(&add(2.0, 3.0)), "5");
        assert_eq!(single_text(&add(-1.5, 1.5)), "0");
        assert_eq!(single_text(&add(0.5, 0.25)), "0.75");
    }

    #[test]
    fn calculate_matches_plain_arithmetic() {
        let cases = [
            (Operation::Add, 4.0, -6.0, "-2"),
            (Operation::Subtract, 0.0, 2.5, "-2.5"),
            (Operation::Multiply, -3.0, -4.0, "12"),
            (Operation::Multiply, 7.0, 0.0, "0"),
            (Operation::Divide, 10.0, 2.0, "5"),
            (Operation::Divide, 1.0, 4.0, "0.25"),
        ];
        for (operation, a, b, expected) in cases {
            assert_eq!(
                single_text(&calculate(operation, a, b)),
                expected,
                "{operation} {a} {b}"
            );
        }
    }

    #[test]
    fn divide_by_zero_is_reported_in_band() {
        assert_eq!(single_text(&calculate(Operation::Divide, 5.0, 0.0)), DIVIDE_BY_ZERO_MESSAGE);
        assert_eq!(single_text(&calculate(Operation::Divide, 5.0, -0.0)), DIVIDE_BY_ZERO_MESSAGE);
        assert_eq!(Operation::Divide.apply(0.0, 0.0), None);
    }

    #[test]
    fn operation_names_are_lowercase() {
        let parsed: Operation =
            serde_json::from_value(serde_json::json!("subtract")).expect("known operation");
        assert_eq!(parsed, Operation::Subtract);
        assert!(serde_json::from_value::<Operation>(serde_json::json!("modulo")).is_err());
        assert!(serde_json::from_value::<Operation>(serde_json::json!("Add")).is_err());
    }
}
