//! Error types for the event store.

use thiserror::Error;

/// Result type for event store operations.
pub type Result<T> = std::result::Result<T, EventError>;

/// Errors that can occur in the event store.
#[derive(Error, Debug)]
pub enum EventError {
    /// Reading or writing the backing file failed.
    #[error("event store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// An event could not be serialized.
    #[error("event serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
