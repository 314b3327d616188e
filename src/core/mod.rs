//! Core reducer types and logic.
//!
//! This module contains the pure functional core every machine plugs into:
//! - Snapshot definitions via the `State` trait
//! - Total transition functions via the `Reducer` trait
//! - The `Store` that owns the canonical snapshot
//!
//! Everything except `Store` is pure; the store's only effect is replacing
//! the snapshot it owns.

mod reducer;
mod state;
mod store;

pub use reducer::Reducer;
pub use state::State;
pub use store::Store;
