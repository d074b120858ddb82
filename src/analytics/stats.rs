//! Topline statistics: message, word, media and link counts.
//!
//! # Example
//!
//! ```rust
//! use chatlens::analytics::fetch_stats;
//! use chatlens::calendar::normalize;
//! use chatlens::{AnalyzerConfig, ChatParser, UserFilter};
//!
//! let parser = ChatParser::new();
//! let records = normalize(parser.parse_str(
//!     "01/01/23, 10:00 - Alice: Check https://example.com now\n\
//!      01/01/23, 10:05 - Bob: <Media omitted>",
//! ));
//! let config = AnalyzerConfig::default();
//!
//! let stats = fetch_stats(&UserFilter::Overall, &records, &config);
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.words, 3);
//! assert_eq!(stats.media, 1);
//! assert_eq!(stats.links, 1);
//! ```

use regex::Regex;
use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::filter::UserFilter;
use crate::record::Record;

/// URL occurrences: an `http://` or `https://` scheme, or a bare `www.`
/// prefix. Each occurrence counts, so one message can contribute several.
const LINK_PATTERN: &str = r"(?i)\b(?:https?://|www\.)\S+";

/// The four topline counts for one filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ToplineStats {
    /// Selected records; system notifications are included under `Overall`.
    pub messages: usize,
    /// Whitespace-delimited tokens across the selected records' text.
    /// Media-placeholder records contribute nothing here.
    pub words: usize,
    /// Records whose text is exactly the media placeholder.
    pub media: usize,
    /// URL occurrences across the selected records' text.
    pub links: usize,
}

/// Computes the topline stats for a filter.
///
/// An empty selection (empty input, or a participant name that never
/// appears) yields all zeroes rather than an error.
pub fn fetch_stats(
    filter: &UserFilter,
    records: &[Record],
    config: &AnalyzerConfig,
) -> ToplineStats {
    let link_re = Regex::new(LINK_PATTERN).unwrap();
    let mut stats = ToplineStats::default();

    for record in filter.select(records) {
        stats.messages += 1;

        if config.is_media(&record.text) {
            stats.media += 1;
        } else {
            stats.words += record.text.split_whitespace().count();
        }

        stats.links += link_re.find_iter(&record.text).count();
    }

    stats
}
