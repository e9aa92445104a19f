use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the failures that abort a conversion run.
///
/// Recoverable data problems (blank numbers, absent optional columns) never
/// surface here; they are defaulted by the builders instead.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a CSV export is structurally malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when an expected input export does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised under the strict column policy when none of a required
    /// column's header spellings is present.
    #[error("missing required column '{column}' (row at line {line})")]
    MissingColumn { column: String, line: u64 },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
