//! Error types for the jiucuo library.
//!
//! All errors are represented by the [`JiucuoError`] enum. Correction
//! failures are deterministic functions of their input and are reported
//! synchronously to the caller, never swallowed internally.
//!
//! # Examples
//!
//! ```
//! use jiucuo::error::{JiucuoError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(JiucuoError::lexicon("dictionary file is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for jiucuo operations.
#[derive(Error, Debug)]
pub enum JiucuoError {
    /// I/O errors (dictionary, alphabet, and pinyin table files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon-related errors (dictionary or alphabet loading)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// No known word within one edit of the unknown word
    #[error("no candidate correction for \"{0}\"")]
    NoCandidate(String),

    /// The transliterator violated its one-syllable-per-character contract
    #[error("malformed phonetic key for \"{word}\": {reason}")]
    MalformedPhoneticKey { word: String, reason: String },

    /// Segmentation errors
    #[error("Segmentation error: {0}")]
    Segmentation(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with JiucuoError.
pub type Result<T> = std::result::Result<T, JiucuoError>;

impl JiucuoError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        JiucuoError::Lexicon(msg.into())
    }

    /// Create a new no-candidate error for the given word.
    pub fn no_candidate<S: Into<String>>(word: S) -> Self {
        JiucuoError::NoCandidate(word.into())
    }

    /// Create a new malformed-phonetic-key error.
    pub fn malformed_key<S: Into<String>, R: Into<String>>(word: S, reason: R) -> Self {
        JiucuoError::MalformedPhoneticKey {
            word: word.into(),
            reason: reason.into(),
        }
    }

    /// Create a new segmentation error.
    pub fn segmentation<S: Into<String>>(msg: S) -> Self {
        JiucuoError::Segmentation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JiucuoError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        JiucuoError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
