//! Emoji frequency over message text.
//!
//! Text is segmented into extended grapheme clusters so multi-codepoint
//! emoji (ZWJ families, flags, keycaps, skin tones) count as single
//! units. A cluster counts when it contains a pictographic codepoint, a
//! regional indicator, or the combining keycap; plain digits, `#`, and
//! `*` on their own do not match.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::filter::UserFilter;
use crate::record::Record;

const EMOJI_PATTERN: &str = r"\p{Extended_Pictographic}|[\x{1F1E6}-\x{1F1FF}]|\x{20E3}";

/// One ranked emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    /// The full grapheme cluster.
    pub emoji: String,
    /// Occurrences across the selected records.
    pub count: usize,
}

/// Ranks every emoji cluster in the selected records by count descending,
/// first appearance breaking ties.
pub fn emoji_helper(filter: &UserFilter, records: &[Record]) -> Vec<EmojiCount> {
    let emoji_re = Regex::new(EMOJI_PATTERN).unwrap();

    let mut tally: HashMap<String, (usize, usize)> = HashMap::new();
    let mut next_index = 0_usize;

    for record in filter.select(records) {
        for cluster in record.text.graphemes(true) {
            if !emoji_re.is_match(cluster) {
                continue;
            }
            let entry = tally.entry(cluster.to_owned()).or_insert((0, next_index));
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
        .map(|(emoji, (count, _))| EmojiCount { emoji, count })
        .collect()
}
