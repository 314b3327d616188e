//! Operand formatting for the primary display line.

use serde::{Deserialize, Serialize};

/// Separators used when rendering an operand.
///
/// Defaults to en-US conventions: `,` between thousands groups and `.`
/// before the fraction. Deserializable so a presentation layer can keep
/// it in its own configuration; missing fields fall back to the defaults.
///
/// # Example
///
/// ```rust
/// use keypad_calc::display::{format_operand, FormatOptions};
///
/// let options = FormatOptions::default()
///     .with_grouping_separator(Some('.'))
///     .with_decimal_separator(',');
///
/// assert_eq!(format_operand(Some("1234.5"), &options).as_deref(), Some("1.234,5"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Separator between groups of three integer digits; `None` disables grouping
    pub grouping_separator: Option<char>,
    /// Separator placed before the fraction digits
    pub decimal_separator: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            grouping_separator: Some(','),
            decimal_separator: '.',
        }
    }
}

impl FormatOptions {
    pub fn with_grouping_separator(mut self, separator: Option<char>) -> Self {
        self.grouping_separator = separator;
        self
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }
}

/// Format an operand for display.
///
/// The integer part is grouped in threes with leading zeros dropped (an
/// empty integer part shows as `0`); the fraction, if the operand has a
/// decimal point, is reattached verbatim, trailing zeros and a trailing
/// point included. Absent or empty operands produce no output. Operands
/// that are not plain decimals, such as `Infinity`, `NaN` or exponent
/// forms, are returned unchanged.
pub fn format_operand(operand: Option<&str>, options: &FormatOptions) -> Option<String> {
    let operand = operand.filter(|o| !o.is_empty())?;

    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let (sign, digits) = match integer.strip_prefix(&['-', '+'][..]) {
        Some(rest) => integer.split_at(integer.len() - rest.len()),
        None => ("", integer),
    };

    let plain = digits.bytes().all(|b| b.is_ascii_digit())
        && fraction.is_none_or(|f| f.bytes().all(|b| b.is_ascii_digit()));
    if !plain || (digits.is_empty() && fraction.is_none()) {
        return Some(operand.to_string());
    }

    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };

    let mut formatted = String::from(sign);
    formatted.push_str(&group_digits(significant, options.grouping_separator));
    if let Some(fraction) = fraction {
        formatted.push(options.decimal_separator);
        formatted.push_str(fraction);
    }
    Some(formatted)
}

fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
