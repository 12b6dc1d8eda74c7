//! Lifecycle events reported by `poll`.

use serde::{Deserialize, Serialize};

/// Result of one poll call, distinct from the domain event codes returned
/// by state functions.
///
/// `Accepted` and `Faulted` are terminal for the cursor that reported
/// them: the host should stop polling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// The active state's function ran and produced no event; the cursor
    /// did not move.
    None,
    /// A transition rule matched and the cursor moved to a new state.
    StateChanged,
    /// The active state is a member of the final-state set.
    Accepted,
    /// No transition rule matched the produced event; the cursor recorded
    /// a fault and will not run again.
    Faulted,
}

impl Lifecycle {
    /// Whether this event ends the poll loop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Lifecycle::Accepted | Lifecycle::Faulted)
    }
}
