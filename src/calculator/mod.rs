//! The calculator input state machine.
//!
//! - [`CalculatorState`]: immutable snapshot of what has been typed
//! - [`Action`]: the five inputs, with typed [`Digit`] and [`Operation`] payloads
//! - [`transition`]: the total, pure function from snapshot and action to
//!   the next snapshot
//!
//! Operands stay text until evaluation; [`parse_operand`] and
//! [`number_to_string`] convert at that boundary.

mod action;
mod number;
mod reducer;
mod state;

pub use action::{Action, Digit, Operation};
pub use number::{number_to_string, parse_operand};
pub use reducer::{transition, CalculatorReducer};
pub use state::{CalculatorState, PendingOperation, Phase};

use crate::core::Store;

/// Store driving a [`CalculatorState`] with [`CalculatorReducer`].
pub type CalculatorStore = Store<CalculatorReducer>;

impl CalculatorStore {
    /// Store holding the initial calculator state.
    pub fn calculator() -> Self {
        Store::new(CalculatorReducer, CalculatorState::new())
    }
}
