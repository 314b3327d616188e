//! Actions accepted by the calculator and their typed payloads.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single keypad character: `0`-`9` or the decimal point.
///
/// # Example
///
/// ```rust
/// use keypad_calc::calculator::Digit;
///
/// let five = Digit::try_from('5').unwrap();
/// assert_eq!(five.as_char(), '5');
/// assert!(Digit::try_from('x').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    pub const ZERO: Digit = Digit('0');
    pub const POINT: Digit = Digit('.');

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == '0'
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Digit(c))
        } else {
            Err(InputError::InvalidDigit(c))
        }
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary operator awaiting its right-hand operand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Keypad symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator with IEEE-754 double semantics.
    ///
    /// Division by zero is not special-cased: it yields `inf`, `-inf` or
    /// `NaN` exactly as `f64` division does.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operation {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(InputError::InvalidOperation(other)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Every input the calculator understands.
///
/// Serialized with a kebab-case `type` tag and an optional `payload`, e.g.
/// `{"type":"add-digit","payload":"7"}` or `{"type":"evaluate"}`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    AddDigit(Digit),
    ChooseOperation(Operation),
    DeleteDigit,
    Clear,
    Evaluate,
}

impl Action {
    /// Kebab-case tag naming this action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddDigit(_) => "add-digit",
            Self::ChooseOperation(_) => "choose-operation",
            Self::DeleteDigit => "delete-digit",
            Self::Clear => "clear",
            Self::Evaluate => "evaluate",
        }
    }
}

impl From<Digit> for Action {
    fn from(digit: Digit) -> Self {
        Self::AddDigit(digit)
    }
}

impl From<Operation> for Action {
    fn from(operation: Operation) -> Self {
        Self::ChooseOperation(operation)
    }
}

/// Parse a keypad label: `0`-`9`, `.`, `+`, `-`, `*`, `/`, `=`, `AC`/`C`
/// or `DEL`/`⌫`. Surrounding whitespace is ignored; letters are
/// case-insensitive.
impl FromStr for Action {
    type Err = InputError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        if label.is_empty() {
            return Err(InputError::EmptyKey);
        }

        match label.to_ascii_uppercase().as_str() {
            "AC" | "C" => return Ok(Self::Clear),
            "DEL" | "⌫" => return Ok(Self::DeleteDigit),
            "=" => return Ok(Self::Evaluate),
            _ => {}
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Digit::try_from(c)
                .map(Self::AddDigit)
                .or_else(|_| Operation::try_from(c).map(Self::ChooseOperation))
                .map_err(|_| InputError::UnknownKey(label.to_string())),
            _ => Err(InputError::UnknownKey(label.to_string())),
        }
    }
}
