//! The two display lines a presentation layer renders.

use super::format::{format_operand, FormatOptions};
use crate::calculator::CalculatorState;
use serde::Serialize;
use std::fmt;

/// Rendered calculator output.
///
/// `previous` shows the captured operand and pending operator, e.g.
/// `"50 +"`, and is empty when nothing is pending. `current` is the
/// formatted current operand, empty when nothing has been typed.
///
/// # Example
///
/// ```rust
/// use keypad_calc::calculator::{CalculatorState, Operation};
/// use keypad_calc::display::{FormatOptions, Screen};
///
/// let state = CalculatorState::with_pending("50", Operation::Add, "1234.5");
/// let screen = Screen::render(&state, &FormatOptions::default());
///
/// assert_eq!(screen.previous, "50 +");
/// assert_eq!(screen.current, "1,234.5");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct Screen {
    pub previous: String,
    pub current: String,
}

impl Screen {
    pub fn render(state: &CalculatorState, options: &FormatOptions) -> Self {
        let previous = state
            .pending()
            .map(|p| format!("{} {}", p.operand, p.operation))
            .unwrap_or_default();
        let current =
            format_operand(Some(state.current_operand()), options).unwrap_or_default();

        Self { previous, current }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.previous)?;
        write!(f, "{}", self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    #[test]
    fn initial_state_renders_blank() {
        let screen = Screen::render(&CalculatorState::new(), &FormatOptions::default());
        assert_eq!(screen, Screen::default());
    }

    #[test]
    fn pending_operation_renders_on_previous_line() {
        let state = CalculatorState::with_pending("1234", Operation::Multiply, "");
        let screen = Screen::render(&state, &FormatOptions::default());

        assert_eq!(screen.previous, "1234 *");
        assert_eq!(screen.current, "");
    }

    #[test]
    fn empty_previous_operand_keeps_operator() {
        let state = CalculatorState::with_pending("", Operation::Subtract, "");
        let screen = Screen::render(&state, &FormatOptions::default());
        assert_eq!(screen.previous, " -");
    }

    #[test]
    fn display_prints_both_lines() {
        let state = CalculatorState::with_pending("8", Operation::Divide, "12000");
        let screen = Screen::render(&state, &FormatOptions::default());
        assert_eq!(screen.to_string(), "8 /\n12,000");
    }
}
