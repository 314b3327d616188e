//! Conversions between operand strings and `f64`.
//!
//! Operands are kept as the exact text the user typed. They only become
//! numbers at evaluation time, and the result goes straight back to text.

use tracing::trace;

/// Largest decimal exponent still written in plain notation.
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest decimal exponent still written in plain notation.
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Parse the longest numeric prefix of `operand`.
///
/// Accepts an optional sign followed by either `Infinity` or digits with
/// an optional decimal point and optional exponent. Trailing text after a
/// valid prefix is ignored, so `"3."` and `"3.5abc"` both parse. Returns
/// `None` when no digits precede the first invalid character (`""`, `"."`,
/// `"-"`, `"NaN"`).
///
/// # Example
///
/// ```rust
/// use keypad_calc::calculator::parse_operand;
///
/// assert_eq!(parse_operand("3."), Some(3.0));
/// assert_eq!(parse_operand(".5"), Some(0.5));
/// assert_eq!(parse_operand(""), None);
/// ```
pub fn parse_operand(operand: &str) -> Option<f64> {
    let text = operand.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let negative = bytes.first() == Some(&b'-');

    if text.get(end..).is_some_and(|rest| rest.starts_with("Infinity")) {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let integer_digits = count_digits(bytes.get(end..).unwrap_or_default());
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(bytes.get(end + 1..).unwrap_or_default());
        end += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        trace!(operand, "Operand has no numeric prefix");
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_start = end + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let exponent_digits = count_digits(bytes.get(exponent_start..).unwrap_or_default());
        if exponent_digits > 0 {
            end = exponent_start + exponent_digits;
        }
    }

    text.get(..end)?.parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render a number the way a JavaScript engine stringifies it.
///
/// Uses the shortest digit string that round-trips, plain notation for
/// decimal exponents from -7 up to 20 and `d.ddde±N` otherwise. Negative
/// zero renders as `"0"`; non-finite values render as `NaN`, `Infinity`
/// and `-Infinity`.
///
/// # Example
///
/// ```rust
/// use keypad_calc::calculator::number_to_string;
///
/// assert_eq!(number_to_string(75.0), "75");
/// assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(10.0 / 0.0), "Infinity");
/// ```
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let body = layout_digits(&digits, exponent);

    if value.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

/// Place the decimal point in `digits`, whose first digit has weight
/// `10^exponent`.
fn layout_digits(digits: &str, exponent: i32) -> String {
    let count = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    let point = exponent + 1;

    if (MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT).contains(&exponent) {
        if count <= point {
            return format!("{digits}{}", zeros(point - count));
        }
        if point > 0 {
            let (whole, fraction) = digits.split_at(to_index(point));
            return format!("{whole}.{fraction}");
        }
        return format!("0.{}{digits}", zeros(-point));
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    let magnitude = exponent.unsigned_abs();
    match digits.split_at(1) {
        (lead, "") => format!("{lead}e{sign}{magnitude}"),
        (lead, rest) => format!("{lead}.{rest}e{sign}{magnitude}"),
    }
}

fn zeros(count: i32) -> String {
    "0".repeat(to_index(count))
}

fn to_index(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_operand("50"), Some(50.0));
        assert_eq!(parse_operand("12.5"), Some(12.5));
        assert_eq!(parse_operand("0.25"), Some(0.25));
        assert_eq!(parse_operand("007"), Some(7.0));
    }

    #[test]
    fn parses_partial_decimals() {
        assert_eq!(parse_operand("3."), Some(3.0));
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("1.2.3"), Some(1.2));
    }

    #[test]
    fn parses_evaluation_results() {
        assert_eq!(parse_operand("-2.5"), Some(-2.5));
        assert_eq!(parse_operand("1e+21"), Some(1e21));
        assert_eq!(parse_operand("1.5e-10"), Some(1.5e-10));
        assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_operand("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_operand("Infinity5"), Some(f64::INFINITY));
    }

    #[test]
    fn ignores_trailing_garbage_after_prefix() {
        assert_eq!(parse_operand("12abc"), Some(12.0));
        assert_eq!(parse_operand("4e"), Some(4.0));
        assert_eq!(parse_operand("4e+"), Some(4.0));
        assert_eq!(parse_operand("  8"), Some(8.0));
    }

    #[test]
    fn rejects_text_without_digits() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("NaN"), None);
        assert_eq!(parse_operand("abc"), None);
    }

    #[test]
    fn integers_render_without_fraction() {
        assert_eq!(number_to_string(75.0), "75");
        assert_eq!(number_to_string(-3.0), "-3");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(1.2345678901234568e20), "123456789012345680000");
    }

    #[test]
    fn fractions_render_shortest_digits() {
        assert_eq!(number_to_string(12.5), "12.5");
        assert_eq!(number_to_string(-2.5), "-2.5");
        assert_eq!(number_to_string(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(number_to_string(0.000001), "0.000001");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_notation() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(2.5e25), "2.5e+25");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(-1.5e-10), "-1.5e-10");
    }

    #[test]
    fn special_values_have_fixed_names() {
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(0.0), "0");
    }
}
