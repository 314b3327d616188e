//! Core State trait for reducer snapshots.
//!
//! Every snapshot a reducer produces implements this trait, which provides
//! pure methods for inspecting the snapshot without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for immutable state snapshots.
///
/// All methods are pure. A snapshot is a value: transitions never mutate
/// one in place, they derive a new one from it.
///
/// # Required Traits
///
/// - `Clone`: no-op transitions hand back a copy of their input
/// - `PartialEq`: the store detects no-op transitions by comparison
/// - `Debug`: snapshots must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: snapshots can be handed to a presentation layer
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
/// struct Counter {
///     value: u32,
/// }
///
/// impl State for Counter {
///     fn name(&self) -> &str {
///         if self.value == 0 { "Zero" } else { "Counting" }
///     }
///
///     fn is_initial(&self) -> bool {
///         self.value == 0
///     }
/// }
///
/// assert!(Counter::default().is_initial());
/// assert_eq!(Counter { value: 3 }.name(), "Counting");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the phase this snapshot is in, for display/logging.
    fn name(&self) -> &str;

    /// Check if this snapshot equals the machine's initial state.
    ///
    /// Default implementation returns `false`.
    fn is_initial(&self) -> bool {
        false
    }
}
