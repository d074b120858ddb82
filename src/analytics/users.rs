//! Per-participant message volume.
//!
//! System records carry no author and are excluded from both the ranking
//! and the percentage base.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::Record;

/// How many participants the capped ranking keeps.
pub const TOP_USERS: usize = 5;

/// One participant's absolute message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    /// Participant name.
    pub user: String,
    /// Their message count.
    pub count: usize,
}

/// One participant's share of participant messages, rounded to two
/// decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    /// Participant name.
    pub user: String,
    /// Percentage of all participant messages.
    pub percent: f64,
}

/// The capped count ranking plus the uncapped percentage table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRanking {
    /// At most [`TOP_USERS`] entries, count descending.
    pub top_users: Vec<UserCount>,
    /// Every participant, same order as the full ranking.
    pub shares: Vec<UserShare>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ranks participants by message count descending, name ascending on
/// ties.
pub fn most_busy_users(records: &[Record]) -> UserRanking {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total = 0_usize;

    for record in records {
        if let Some(name) = record.sender.name() {
            *counts.entry(name).or_insert(0) += 1;
            total += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|(name_a, count_a), (name_b, count_b)| {
        count_b.cmp(count_a).then(name_a.cmp(name_b))
    });

    let top_users = ranked
        .iter()
        .take(TOP_USERS)
        .map(|&(user, count)| UserCount { user: user.to_owned(), count })
        .collect();

    let shares = ranked
        .iter()
        .map(|&(user, count)| UserShare {
            user: user.to_owned(),
            percent: round2(100.0 * count as f64 / total as f64),
        })
        .collect();

    UserRanking { top_users, shares }
}

/// Distinct participant names, sorted ascending.
pub fn participants(records: &[Record]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .filter_map(|record| record.sender.name())
        .map(str::to_owned)
        .collect();
    names.sort();
    names.dedup();
    names
}
