//! Error types for the vintage library.
//!
//! The generation core never fails; these errors belong to the file-level
//! collaborators (loading, writing, exporting).

use std::io;
use thiserror::Error;

/// Result type alias for vintage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the vintage library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is binary or a recognized non-text format (PDF, ZIP, image, ...).
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Text decoding error.
    #[error("Text encoding error: {0}")]
    Encoding(String),

    /// Invalid or oversized input.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The rendering collaborator could not produce its output.
    #[error("Render error: {0}")]
    Render(String),

    /// The export collaborator failed (cancellation is not an error).
    #[error("Export error: {0}")]
    Export(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
