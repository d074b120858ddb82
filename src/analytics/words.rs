//! Word-frequency ranking over participant message text.
//!
//! System records and media placeholder rows never contribute. Tokens are
//! whitespace-split, lowercased, stripped of leading and trailing ASCII
//! punctuation, and dropped when empty or listed as a stopword.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::filter::UserFilter;
use crate::record::Record;

/// Default cutoff for [`most_common_words`].
pub const DEFAULT_TOP_WORDS: usize = 20;

/// One ranked word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    /// Normalized (lowercased, trimmed) token.
    pub word: String,
    /// Occurrences across the selected records.
    pub count: usize,
}

/// Tallies every surviving token, then ranks by count descending with
/// first appearance breaking ties.
fn ranked_words(
    filter: &UserFilter,
    records: &[Record],
    config: &AnalyzerConfig,
) -> Vec<WordCount> {
    let mut tally: HashMap<String, (usize, usize)> = HashMap::new();
    let mut next_index = 0_usize;

    for record in filter.select(records) {
        if record.is_system() || config.is_media(&record.text) {
            continue;
        }
        for raw_token in record.text.split_whitespace() {
            let token = raw_token.to_lowercase();
            let token = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if token.is_empty() || config.is_stopword(token) {
                continue;
            }
            let entry = tally.entry(token.to_owned()).or_insert((0, next_index));
            entry.0 += 1;
            next_index += 1;
        }
    }

    let mut ranked: Vec<(String, (usize, usize))> = tally.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });

    ranked
        .into_iter()
        .map(|(word, (count, _))| WordCount { word, count })
        .collect()
}

/// The `top_n` most frequent words among the selected records.
pub fn most_common_words(
    filter: &UserFilter,
    records: &[Record],
    config: &AnalyzerConfig,
    top_n: usize,
) -> Vec<WordCount> {
    let mut ranked = ranked_words(filter, records, config);
    ranked.truncate(top_n);
    ranked
}

/// The full word-frequency ranking, uncapped, for weighted rendering.
pub fn create_wordcloud(
    filter: &UserFilter,
    records: &[Record],
    config: &AnalyzerConfig,
) -> Vec<WordCount> {
    ranked_words(filter, records, config)
}
