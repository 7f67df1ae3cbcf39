//! Error types for journal operations.
//!
//! Section reads never fail: a missing section is `None`. Errors are reserved
//! for missing prerequisites (the daily file or week folder a command works on)
//! and for I/O that cannot be degraded into "skip this file".

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a journal command.
#[derive(Error, Debug)]
pub enum JournalError {
    /// The daily file a command needs has not been created.
    #[error("Daily file does not exist: {}", .0.display())]
    MissingDailyFile(PathBuf),

    /// The week folder a command needs has not been created.
    #[error("Week folder does not exist: {}", .0.display())]
    MissingWeekFolder(PathBuf),

    /// A file exists but could not be decoded in any supported encoding.
    #[error("Could not read {}", .0.display())]
    Unreadable(PathBuf),

    /// A date argument or configured date did not parse.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialisation failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

impl JournalError {
    #[must_use]
    /// Follow-up instruction for the user, when there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            JournalError::MissingDailyFile(_) => {
                Some("Please run `learnlog daily-start` first to create the daily file.")
            }
            JournalError::MissingWeekFolder(_) => {
                Some("Please run `learnlog week-start` first to create the weekly folder.")
            }
            JournalError::InvalidDate(_) => Some("Dates are written like 2025-09-26."),
            _ => None,
        }
    }
}
