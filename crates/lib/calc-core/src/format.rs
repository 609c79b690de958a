//! Number-to-text rules.
//!
//! Tool output prints numbers the way a JavaScript runtime does: integral
//! values have no fractional part, `-0` prints as `0`, and very large or very
//! small magnitudes switch to exponent notation with a signed exponent.

const EXPONENT_UPPER: f64 = 1e21;
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats a number using default number-to-string conversion.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    value.to_string()
}

/// Formats a number with exactly two fractional digits.
///
/// Exact midpoints round away from zero. Non-finite values and magnitudes of
/// `1e21` or more fall back to [`format_number`].
#[must_use]
#[allow(clippy::float_cmp, clippy::suboptimal_flops)]
pub fn format_fixed2(value: f64) -> String {
    if !value.is_finite() || value.abs() >= EXPONENT_UPPER {
        return format_number(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    // A midpoint at the third digit is an odd multiple of 1/8.
    let eighths = magnitude * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (magnitude * 100.0 + 0.5).floor();
        return format!("{sign}{:.2}", cents / 100.0);
    }

    format!("{sign}{magnitude:.2}")
}
