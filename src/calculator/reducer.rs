//! The calculator's transition function.

use super::action::{Action, Digit, Operation};
use super::number::{number_to_string, parse_operand};
use super::state::{CalculatorState, PendingOperation};
use crate::core::Reducer;
use tracing::trace;

/// Compute the snapshot that follows `state` once `action` is applied.
///
/// Total and pure: actions that do not apply (a second leading zero, a
/// second decimal point, deleting from an empty operand, evaluating
/// without two parseable operands and an operator) return a copy of
/// `state`.
///
/// # Example
///
/// ```rust
/// use keypad_calc::calculator::{transition, Action, CalculatorState, Operation};
///
/// let state = CalculatorState::with_pending("10", Operation::Divide, "0");
/// let state = transition(&state, &Action::Evaluate);
///
/// assert_eq!(state.current_operand(), "Infinity");
/// assert_eq!(state.operation(), None);
/// ```
pub fn transition(state: &CalculatorState, action: &Action) -> CalculatorState {
    match *action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(operation) => choose_operation(state, operation),
        Action::DeleteDigit => delete_digit(state),
        Action::Clear => CalculatorState::new(),
        Action::Evaluate => evaluate(state),
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: digit.to_string(),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = &state.current_operand;
    if digit.is_zero() && current == "0" {
        return state.clone();
    }
    if digit.is_point() && current.contains('.') {
        return state.clone();
    }

    let mut current_operand = current.clone();
    current_operand.push(digit.as_char());
    CalculatorState {
        current_operand,
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    CalculatorState {
        current_operand: String::new(),
        pending: Some(PendingOperation {
            operand: state.current_operand.clone(),
            operation,
        }),
        overwrite: state.overwrite,
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    let mut current_operand = state.current_operand.clone();
    current_operand.pop();
    CalculatorState {
        current_operand,
        ..state.clone()
    }
}

fn evaluate(state: &CalculatorState) -> CalculatorState {
    let Some(pending) = &state.pending else {
        return state.clone();
    };
    let (Some(lhs), Some(rhs)) = (
        parse_operand(&pending.operand),
        parse_operand(&state.current_operand),
    ) else {
        trace!(
            previous = %pending.operand,
            current = %state.current_operand,
            "Evaluation skipped, operand not numeric"
        );
        return state.clone();
    };

    CalculatorState::with_current(number_to_string(pending.operation.apply(lhs, rhs)))
}

/// [`Reducer`] wrapper around [`transition`] for use with a
/// [`Store`](crate::core::Store).
#[derive(Clone, Copy, Debug, Default)]
pub struct CalculatorReducer;

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Action = Action;

    fn reduce(&self, state: &CalculatorState, action: &Action) -> CalculatorState {
        transition(state, action)
    }
}

impl CalculatorState {
    /// Method form of [`transition`].
    pub fn apply(&self, action: &Action) -> Self {
        transition(self, action)
    }
}
