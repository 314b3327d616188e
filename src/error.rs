//! Keypad input errors.

use thiserror::Error;

/// Errors raised while turning raw keypad input into typed actions.
///
/// Transitions themselves never fail; these only occur at the boundary
/// where characters or key labels become [`Digit`](crate::calculator::Digit),
/// [`Operation`](crate::calculator::Operation) or
/// [`Action`](crate::calculator::Action) values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a digit or decimal point")]
    InvalidDigit(char),

    #[error("'{0}' is not one of + - * /")]
    InvalidOperation(char),

    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    #[error("Key label is empty")]
    EmptyKey,
}
