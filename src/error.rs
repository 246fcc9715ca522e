//! Unified error types for chatlens.
//!
//! Parsing and analysis themselves never fail: unmatched or invalid
//! transcript lines are skipped, and every view is defined for empty input.
//! Errors only arise at the edges, when reading a transcript from disk or
//! writing a report.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn load() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// Typically a missing or unreadable transcript, or an unwritable
    /// output path.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Unknown or disabled report format.
    #[error("Invalid report format: {message}")]
    InvalidFormat {
        /// Description of what went wrong
        message: String,
    },

    /// The transcript contained no line in the expected
    /// `DD/MM/YY, H:MM am - Sender: Message` format.
    #[error("No chat messages found{}. Make sure the file is a WhatsApp chat export.", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    EmptyTranscript {
        /// The file path, if available
        path: Option<PathBuf>,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an empty-transcript error.
    pub fn empty_transcript(path: Option<PathBuf>) -> Self {
        ChatlensError::EmptyTranscript { path }
    }

    /// Creates an invalid-format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the transcript had no parsable messages.
    pub fn is_empty_transcript(&self) -> bool {
        matches!(self, ChatlensError::EmptyTranscript { .. })
    }
}
