//! Analyzer configuration.
//!
//! This module provides [`AnalyzerConfig`], the knobs the analytics
//! functions need beyond the records themselves: the export's media
//! placeholder string and the stopword set for the lexical analyzer.
//! Both are data, not logic; stopwords in particular are language-specific
//! and always supplied by the caller, never hard-coded.
//!
//! # Example
//!
//! ```rust
//! use chatlens::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::new()
//!     .with_media_placeholder("<Media omitted>")
//!     .with_stopwords(["the", "and", "is"]);
//!
//! assert!(config.is_media("<Media omitted>"));
//! assert!(config.is_stopword("the"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Placeholder WhatsApp inserts for omitted attachments.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Configuration for the analytics functions.
///
/// # Example
///
/// ```rust
/// use chatlens::AnalyzerConfig;
///
/// let config = AnalyzerConfig::new()
///     .with_stopwords(["hai", "ki", "to"]);
/// assert_eq!(config.media_placeholder, "<Media omitted>");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// The exact text a record carries in place of an attachment
    /// (default: `<Media omitted>`).
    pub media_placeholder: String,

    /// Tokens to drop during lexical analysis, stored lowercased
    /// (default: empty).
    pub stopwords: HashSet<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            stopwords: HashSet::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder string.
    ///
    /// Exports localize this string ("`<Medien ausgeschlossen>`", "`<Без
    /// медиафайлов>`", ...), so it must match the export being analyzed.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Adds stopwords, lowercasing each one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::AnalyzerConfig;
    ///
    /// let config = AnalyzerConfig::new().with_stopwords(["The", "AND"]);
    /// assert!(config.is_stopword("the"));
    /// assert!(config.is_stopword("and"));
    /// ```
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|word| word.as_ref().to_lowercase()));
        self
    }

    /// Adds stopwords from a whitespace/newline-separated file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`](crate::ChatlensError::Io) if the file
    /// cannot be read.
    pub fn with_stopwords_file(self, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(self.with_stopwords(content.split_whitespace()))
    }

    /// Returns `true` if `text` is exactly the media placeholder.
    pub fn is_media(&self, text: &str) -> bool {
        text == self.media_placeholder
    }

    /// Returns `true` if `token` (already lowercased) is a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}
