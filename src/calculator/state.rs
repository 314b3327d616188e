//! Calculator snapshot.

use super::action::Operation;
use crate::core::State;
use serde::{Deserialize, Serialize};

/// Left-hand operand captured when an operator was chosen, together with
/// that operator.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PendingOperation {
    pub operand: String,
    pub operation: Operation,
}

/// Coarse position of a snapshot in the input cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Nothing typed and nothing pending
    Idle,
    /// Typing the first operand (or looking at a result)
    Entering,
    /// Operator chosen, right-hand operand not started
    AwaitingOperand,
    /// Typing the right-hand operand
    EnteringSecond,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Entering => "Entering",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::EnteringSecond => "EnteringSecond",
        }
    }
}

/// Immutable calculator snapshot.
///
/// The previous operand and the operator live in one
/// [`PendingOperation`], so a snapshot can never hold one without the
/// other.
///
/// # Example
///
/// ```rust
/// use keypad_calc::calculator::{Action, CalculatorState, Digit, Operation};
///
/// let state = CalculatorState::new()
///     .apply(&Action::AddDigit(Digit::try_from('4').unwrap()))
///     .apply(&Action::ChooseOperation(Operation::Multiply));
///
/// assert_eq!(state.current_operand(), "");
/// assert_eq!(state.previous_operand(), Some("4"));
/// assert_eq!(state.operation(), Some(Operation::Multiply));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) current_operand: String,
    #[serde(default)]
    pub(crate) pending: Option<PendingOperation>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) overwrite: bool,
}

impl CalculatorState {
    /// The initial state: nothing typed, nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with only a current operand.
    pub fn with_current(operand: impl Into<String>) -> Self {
        Self {
            current_operand: operand.into(),
            ..Self::default()
        }
    }

    /// Snapshot with a pending operation and a current operand.
    pub fn with_pending(
        previous: impl Into<String>,
        operation: Operation,
        current: impl Into<String>,
    ) -> Self {
        Self {
            current_operand: current.into(),
            pending: Some(PendingOperation {
                operand: previous.into(),
                operation,
            }),
            overwrite: false,
        }
    }

    /// Copy of this snapshot with the overwrite flag set to `overwrite`.
    ///
    /// No transition sets the flag; a presentation layer that wants the
    /// next digit to replace a displayed result opts in here.
    pub fn with_overwrite(&self, overwrite: bool) -> Self {
        Self {
            overwrite,
            ..self.clone()
        }
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    pub fn operation(&self) -> Option<Operation> {
        self.pending.as_ref().map(|p| p.operation)
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn phase(&self) -> Phase {
        match (&self.pending, self.current_operand.is_empty()) {
            (None, true) => Phase::Idle,
            (None, false) => Phase::Entering,
            (Some(_), true) => Phase::AwaitingOperand,
            (Some(_), false) => Phase::EnteringSecond,
        }
    }
}

impl State for CalculatorState {
    fn name(&self) -> &str {
        self.phase().name()
    }

    fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_empty() {
        let state = CalculatorState::new();

        assert_eq!(state.current_operand(), "");
        assert_eq!(state.previous_operand(), None);
        assert_eq!(state.operation(), None);
        assert!(!state.overwrite());
        assert!(state.is_initial());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn pending_exposes_operand_and_operation_together() {
        let state = CalculatorState::with_pending("10", Operation::Divide, "0");

        assert_eq!(state.previous_operand(), Some("10"));
        assert_eq!(state.operation(), Some(Operation::Divide));
        assert_eq!(state.current_operand(), "0");
        assert!(!state.is_initial());
    }

    #[test]
    fn phase_follows_operands() {
        assert_eq!(CalculatorState::with_current("5").phase(), Phase::Entering);
        assert_eq!(
            CalculatorState::with_pending("5", Operation::Add, "").phase(),
            Phase::AwaitingOperand
        );
        assert_eq!(
            CalculatorState::with_pending("5", Operation::Add, "2").phase(),
            Phase::EnteringSecond
        );
        assert_eq!(
            CalculatorState::with_pending("5", Operation::Add, "2").name(),
            "EnteringSecond"
        );
    }

    #[test]
    fn with_overwrite_leaves_original_untouched() {
        let state = CalculatorState::with_current("75");
        let flagged = state.with_overwrite(true);

        assert!(flagged.overwrite());
        assert!(!state.overwrite());
        assert_eq!(flagged.current_operand(), "75");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CalculatorState::with_pending("50", Operation::Add, "25");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"current_operand":"25","pending":{"operand":"50","operation":"+"}}"#
        );

        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn overwrite_flag_is_serialized_only_when_set() {
        let state = CalculatorState::with_current("3").with_overwrite(true);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"current_operand":"3","pending":null,"overwrite":true}"#);

        let deserialized: CalculatorState = serde_json::from_str(r#"{"current_operand":""}"#).unwrap();
        assert!(deserialized.is_initial());
    }
}
