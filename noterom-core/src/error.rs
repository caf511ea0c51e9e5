use thiserror::Error;

use crate::entry::MAX_CLASSES;

/// Validation failures. Each aborts the operation before any state changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Only {} classes are allowed.", MAX_CLASSES)]
    CapacityReached,
    #[error("Please enter a class name.")]
    MissingName,
    #[error("Please enter a start time.")]
    MissingStart,
    #[error("Please provide an end time or a duration.")]
    MissingEnd,
    #[error("Invalid date \"{0}\" (expected YYYY-MM-DD).")]
    InvalidDate(String),
    #[error("Invalid time \"{0}\" (expected HH:MM).")]
    InvalidTime(String),
    #[error("Select a class to save notes.")]
    NoSelection,
}

/// Failures writing the storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize classes: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },
}
