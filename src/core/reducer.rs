//! Pure reducers mapping a snapshot and an action to the next snapshot.

use super::state::State;
use std::fmt::Debug;

/// Pure, total transition function.
///
/// A reducer never fails and never has side effects: an action that does
/// not apply to the given snapshot yields a snapshot equal to its input.
/// Callers treat that identity transition as a valid outcome, not an error.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{Reducer, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
/// struct Count(u8);
///
/// impl State for Count {
///     fn name(&self) -> &str { "Count" }
/// }
///
/// #[derive(Debug)]
/// enum Step { Up, Reset }
///
/// struct Counter;
///
/// impl Reducer for Counter {
///     type State = Count;
///     type Action = Step;
///
///     fn reduce(&self, state: &Count, action: &Step) -> Count {
///         match action {
///             Step::Up => state.0.checked_add(1).map(Count).unwrap_or_else(|| state.clone()),
///             Step::Reset => Count::default(),
///         }
///     }
/// }
///
/// assert_eq!(Counter.reduce(&Count(1), &Step::Up), Count(2));
/// assert_eq!(Counter.reduce(&Count(255), &Step::Up), Count(255));
/// ```
pub trait Reducer {
    /// Snapshot type produced by this reducer.
    type State: State;

    /// Closed set of inputs the reducer accepts.
    type Action: Debug;

    /// Compute the snapshot that follows `state` once `action` is applied.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}
