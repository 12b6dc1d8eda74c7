//! Snapshot and resume for cursors.
//!
//! A [`Snapshot`] captures the run-time portion of a cursor (current
//! state, output register, fault, and history) without the machine
//! definition or its callbacks, which are not serializable. The host
//! persists the snapshot wherever it likes and later resumes it against a
//! machine holding the same table.
//!
//! The engine itself never persists anything; snapshots exist only when
//! the host asks for one.

use crate::core::{Event, Fault, History, Register, StateId};
use crate::engine::{Cursor, Machine};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the snapshot format.
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable capture of a cursor's run-time state.
///
/// Does NOT include the state table or its callbacks; resuming requires a
/// machine built from the same definition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot<R> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Identifier of the state the cursor was parked in
    pub current_state: StateId,

    /// Output-register value at capture time
    pub register: R,

    /// Fault recorded on the cursor, if any
    pub fault: Fault,

    /// Transition history up to the capture point
    pub history: History,
}

impl<R: Serialize + DeserializeOwned> Snapshot<R> {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Encode as a compact binary blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from a binary blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<R: Register, E: Event, C> Cursor<'_, R, E, C> {
    /// Capture the cursor's run-time state.
    pub fn snapshot(&self) -> Snapshot<R> {
        Snapshot {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            current_state: self.current_state(),
            register: self.register().clone(),
            fault: self.fault(),
            history: self.history().clone(),
        }
    }
}

impl<R: Register, E: Event, C> Machine<R, E, C> {
    /// Recreate a cursor from a snapshot.
    ///
    /// Rejects snapshots written by an unsupported format version and
    /// snapshots whose parked state is not in this machine's table. Resume
    /// does not re-fire enter hooks: the parked state was entered before
    /// the snapshot was taken.
    pub fn resume(
        &self,
        snapshot: Snapshot<R>,
        context: C,
    ) -> Result<Cursor<'_, R, E, C>, CheckpointError> {
        if snapshot.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: snapshot.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if !self.has_state(snapshot.current_state) {
            return Err(CheckpointError::ValidationFailed(format!(
                "state {} is not in this machine's table",
                snapshot.current_state
            )));
        }

        tracing::debug!(state = %snapshot.current_state, id = %snapshot.id, "cursor resumed");
        Ok(Cursor::resumed(
            self,
            snapshot.current_state,
            snapshot.register,
            snapshot.fault,
            snapshot.history,
            context,
        ))
    }
}
