//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur during snapshot and resume operations.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot format version is not supported by this build
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot data does not fit the machine it was resumed against
    #[error("Snapshot validation failed: {0}")]
    ValidationFailed(String),
}
