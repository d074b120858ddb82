//! Activity distribution over weekdays, months, and a day-by-hour grid.

use std::collections::HashMap;

use chrono::Datelike;
use serde::Serialize;

use crate::calendar::WEEKDAYS;
use crate::filter::UserFilter;
use crate::record::Record;

/// Messages per weekday name. Only weekdays with at least one message
/// appear; render in [`WEEKDAYS`] order for a stable display.
pub fn week_activity_map(filter: &UserFilter, records: &[Record]) -> HashMap<&'static str, usize> {
    let mut map = HashMap::new();
    for record in filter.select(records) {
        *map.entry(record.calendar.day_name).or_insert(0) += 1;
    }
    map
}

/// Messages per month name. Only months with at least one message appear;
/// render in [`MONTHS`](crate::calendar::MONTHS) order for a stable display.
pub fn month_activity_map(filter: &UserFilter, records: &[Record]) -> HashMap<&'static str, usize> {
    let mut map = HashMap::new();
    for record in filter.select(records) {
        *map.entry(record.calendar.month_name).or_insert(0) += 1;
    }
    map
}

/// Message counts on a fixed 7x24 grid: row per weekday (Monday first),
/// column per starting hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    /// `cells[weekday][hour]`, weekday 0 = Monday, hour 0 = 00:00-00:59.
    pub cells: [[usize; 24]; 7],
}

impl ActivityHeatmap {
    /// Row labels, Monday through Sunday.
    #[must_use]
    pub fn day_names() -> [&'static str; 7] {
        WEEKDAYS
    }

    /// Column labels, `"0-1"` through `"23-24"`.
    #[must_use]
    pub fn hour_labels() -> [String; 24] {
        std::array::from_fn(|hour| format!("{}-{}", hour, hour + 1))
    }

    /// Count for one cell.
    #[must_use]
    pub fn get(&self, weekday: usize, hour: usize) -> usize {
        self.cells[weekday][hour]
    }

    /// Sum over the whole grid.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

/// Fills the 7x24 grid from the selected records. Cells with no messages
/// hold zero, so the grid shape is independent of the data.
pub fn activity_heatmap(filter: &UserFilter, records: &[Record]) -> ActivityHeatmap {
    let mut cells = [[0_usize; 24]; 7];

    for record in filter.select(records) {
        let day = record.timestamp.weekday().num_days_from_monday() as usize;
        let hour = record.calendar.hour as usize;
        cells[day][hour] += 1;
    }

    ActivityHeatmap { cells }
}
