//! Monthly and daily message timelines.
//!
//! Both timelines group the selected records by a calendar bucket and
//! return one entry per bucket that actually occurs, chronologically
//! ascending. Under the ordering invariant (records appear in timestamp
//! order) ascending bucket order equals first-appearance order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::MONTHS;
use crate::filter::UserFilter;
use crate::record::Record;

/// One month's message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// Display label, `"<MonthName>-<Year>"`.
    pub label: String,
    /// Messages in that month.
    pub count: usize,
}

/// One calendar date's message count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    /// The date.
    pub date: NaiveDate,
    /// Messages on that date.
    pub count: usize,
}

/// Messages per month, chronologically ascending.
pub fn monthly_timeline(filter: &UserFilter, records: &[Record]) -> Vec<MonthlyCount> {
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();

    for record in filter.select(records) {
        *buckets
            .entry((record.calendar.year, record.calendar.month_num))
            .or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month_num), count)| MonthlyCount {
            label: format!("{}-{}", MONTHS[month_num as usize - 1], year),
            count,
        })
        .collect()
}

/// Messages per calendar date, strictly ascending, one entry per distinct
/// date present.
pub fn daily_timeline(filter: &UserFilter, records: &[Record]) -> Vec<DailyCount> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for record in filter.select(records) {
        *buckets.entry(record.calendar.only_date).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}
