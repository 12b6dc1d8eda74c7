//! Transition history tracking.
//!
//! Each cursor keeps an ordered log of the transitions it has resolved.
//! The log is observational only: the poll algorithm never reads it.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single resolved transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state the cursor moved from.
    pub from: StateId,
    /// The state the cursor moved to.
    pub to: StateId,
    /// When the transition was resolved.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of resolved transitions.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use mealy::{History, StateId, TransitionRecord};
///
/// let mut history = History::new();
/// history.record(TransitionRecord {
///     from: StateId(1),
///     to: StateId(2),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path, vec![StateId(1), StateId(2)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    records: Vec<TransitionRecord>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a transition record.
    pub fn record(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    /// All recorded transitions, in resolution order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Whether anything has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The sequence of states traversed: the origin of the first record,
    /// then the destination of each record. Empty if nothing was recorded.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    ///
    /// `None` if the history is empty; zero for a single record.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
