//! Owned state container that applies dispatched actions in order.

use super::reducer::Reducer;
use super::state::State;
use tracing::{debug, trace};

/// Exclusive owner of the canonical snapshot.
///
/// Every dispatch runs the reducer to completion and replaces the held
/// snapshot with its output before the next dispatch can start; `&mut self`
/// on [`Store::dispatch`] is the single ordered update queue. Readers only
/// ever get a shared reference to the latest snapshot.
pub struct Store<R: Reducer> {
    reducer: R,
    state: R::State,
    dispatched: usize,
    ignored: usize,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial` as its first snapshot.
    pub fn new(reducer: R, initial: R::State) -> Self {
        Self {
            reducer,
            state: initial,
            dispatched: 0,
            ignored: 0,
        }
    }

    /// Latest snapshot (pure)
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of actions dispatched so far
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Number of dispatched actions that left the snapshot unchanged
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Apply one action and return the new snapshot.
    pub fn dispatch(&mut self, action: R::Action) -> &R::State {
        let next = self.reducer.reduce(&self.state, &action);
        self.dispatched = self.dispatched.saturating_add(1);

        if next == self.state {
            self.ignored = self.ignored.saturating_add(1);
            trace!(?action, phase = %self.state.name(), "Action left state unchanged");
        } else {
            debug!(
                ?action,
                from = %self.state.name(),
                to = %next.name(),
                "State transitioned"
            );
            self.state = next;
        }

        &self.state
    }

    /// Apply a sequence of actions in iteration order.
    pub fn dispatch_all<I>(&mut self, actions: I) -> &R::State
    where
        I: IntoIterator<Item = R::Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    /// Consume the store, keeping only the latest snapshot.
    pub fn into_state(self) -> R::State {
        self.state
    }
}

impl<R> Default for Store<R>
where
    R: Reducer + Default,
    R::State: Default,
{
    fn default() -> Self {
        Self::new(R::default(), R::State::default())
    }
}
