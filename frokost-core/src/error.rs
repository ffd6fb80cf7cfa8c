//! Error types for the frokost crates.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in frokost operations.
#[derive(Error, Debug)]
pub enum FrokostError {
    #[error("Invalid entry for {date}: {field} {reason}")]
    InvalidEntry {
        date: NaiveDate,
        field: &'static str,
        reason: String,
    },

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for frokost operations.
pub type FrokostResult<T> = Result<T, FrokostError>;
