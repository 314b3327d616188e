//! Keypad Calc: a pure functional calculator input state machine
//!
//! Keypad Calc follows the "pure core, imperative shell" philosophy.
//! Every keypress is a typed [`Action`]; a pure, total transition function
//! turns the current [`CalculatorState`] snapshot and that action into the
//! next snapshot. The only mutable piece is the [`Store`], which owns the
//! latest snapshot and applies actions in dispatch order.
//!
//! # Core Concepts
//!
//! - **State**: Immutable snapshots via the `State` trait
//! - **Reducer**: Total transition functions; invalid input is a no-op, never an error
//! - **Store**: Explicit owner of the canonical snapshot
//! - **Display**: Formatting contract for a presentation layer
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::calculator::{Action, CalculatorStore};
//! use keypad_calc::display::{FormatOptions, Screen};
//!
//! let mut store = CalculatorStore::calculator();
//! for key in ["5", "0", "+", "2", "5", "="] {
//!     store.dispatch(key.parse::<Action>().unwrap());
//! }
//!
//! assert_eq!(store.state().current_operand(), "75");
//! assert_eq!(store.state().previous_operand(), None);
//!
//! let screen = Screen::render(store.state(), &FormatOptions::default());
//! assert_eq!(screen.current, "75");
//! ```

pub mod calculator;
pub mod core;
pub mod display;
pub mod error;

// Re-export commonly used types
pub use crate::calculator::{transition, Action, CalculatorState, CalculatorStore, Digit, Operation};
pub use crate::core::{Reducer, State, Store};
pub use crate::error::InputError;
