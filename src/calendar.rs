//! Calendar projections of record timestamps.
//!
//! Derives the bucket keys the analytics functions group by: date, year,
//! month (number and name), day of month, weekday name, hour and minute.
//! All of them are pure functions of the timestamp, computed once per record
//! by [`normalize`] and cached on the [`Record`].
//!
//! The [`WEEKDAYS`] and [`MONTHS`] tables define the canonical display
//! orders. They double as the deterministic tie-break order whenever a
//! consumer ranks equal-count buckets.
//!
//! # Example
//!
//! ```
//! use chatlens::calendar::CalendarFields;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(22, 45, 0)
//!     .unwrap();
//! let fields = CalendarFields::from_timestamp(ts);
//!
//! assert_eq!(fields.month_name, "January");
//! assert_eq!(fields.day_name, "Monday");
//! assert_eq!(fields.hour, 22);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::record::{RawRecord, Record};

/// Canonical weekday names, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Canonical month names, January first.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Cached calendar projections of a record timestamp.
///
/// `month_num` is 1-based (January = 1); `day_name` follows the canonical
/// Monday-first order of [`WEEKDAYS`]. The fields are never mutated
/// independently of the timestamp they were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarFields {
    /// The calendar date, without time of day.
    pub only_date: NaiveDate,
    /// Four-digit year.
    pub year: i32,
    /// Full English month name from [`MONTHS`].
    pub month_name: &'static str,
    /// Month number, 1-12.
    pub month_num: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Full English weekday name from [`WEEKDAYS`].
    pub day_name: &'static str,
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
}

impl CalendarFields {
    /// Projects all calendar fields from a timestamp.
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        let month_num = ts.month();
        Self {
            only_date: ts.date(),
            year: ts.year(),
            month_name: MONTHS[month_num as usize - 1],
            month_num,
            day: ts.day(),
            day_name: WEEKDAYS[ts.weekday().num_days_from_monday() as usize],
            hour: ts.hour(),
            minute: ts.minute(),
        }
    }
}

/// Upgrades parsed records with their calendar fields.
///
/// Pure and total: preserves length, order, senders and text. This is the
/// single step between [`ChatParser`](crate::ChatParser) output and the
/// analytics functions.
pub fn normalize(records: Vec<RawRecord>) -> Vec<Record> {
    records.into_iter().map(Record::from_raw).collect()
}
