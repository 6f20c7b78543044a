//! Error types for the report pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while producing the income sheet.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The input report does not exist at the given path.
    ///
    /// Kept separate from [`ReportError::Io`] so the CLI can report it
    /// with its own message and exit status.
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The requested encoding label is not supported
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Input bytes are not valid text in the requested encoding
    #[error("input is not valid {encoding}: {detail}")]
    Decode {
        encoding: &'static str,
        detail: String,
    },

    /// Output text cannot be represented in the requested encoding
    #[error("cannot encode {character:?} as {encoding}")]
    Encode {
        encoding: &'static str,
        character: char,
    },
}
