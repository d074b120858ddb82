//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Most of the pipeline cannot fail at all: unrecognized lines become
//! continuations, unknown user filters become empty selections, and empty
//! input yields empty analytics. The only hard errors are I/O failures and
//! inputs that are not valid UTF-8.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// This type is broadly used across the library for any operation that
/// may produce an error.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::RawRecord;
///
/// fn my_function() -> Result<Vec<RawRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
///
/// This enum represents all possible errors that can occur when using
/// chatlens. Each variant contains context about what went wrong and, where
/// applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - A stopword file cannot be read
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// UTF-8 decode error.
    ///
    /// The input bytes are not valid UTF-8. This is a hard input-rejection
    /// error: chatlens does not attempt transliteration or lossy recovery.
    #[error("UTF-8 decode error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// JSON serialization error.
    ///
    /// This can occur when writing the `--json` report.
    #[cfg(feature = "cli")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "input decoding".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a UTF-8 decode error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a UTF-8 decode error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatlensError::Utf8 { .. })
    }

    /// Returns `true` if this is a JSON serialization error.
    #[cfg(feature = "cli")]
    pub fn is_json(&self) -> bool {
        matches!(self, ChatlensError::Json(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
