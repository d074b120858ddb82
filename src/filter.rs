//! Select records by participant.
//!
//! This module provides [`UserFilter`], the selection key every analytics
//! function takes. A filter is either [`Overall`](UserFilter::Overall)
//! (every record, system notifications included) or
//! [`User`](UserFilter::User) (records from one named participant).
//!
//! # Examples
//!
//! ```
//! use chatlens::{RawRecord, Sender, UserFilter};
//! use chatlens::calendar::normalize;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let records = normalize(vec![
//!     RawRecord::new(ts, Sender::participant("Alice"), "Hello"),
//!     RawRecord::new(ts, Sender::participant("Bob"), "Hi"),
//!     RawRecord::new(ts, Sender::System, "Bob joined"),
//! ]);
//!
//! assert_eq!(UserFilter::Overall.select(&records).count(), 3);
//! assert_eq!(UserFilter::user("Alice").select(&records).count(), 1);
//!
//! // Unknown participants are an empty selection, not an error.
//! assert_eq!(UserFilter::user("Mallory").select(&records).count(), 0);
//! ```
//!
//! # Behavior Notes
//!
//! - Matching is exact (case-sensitive), like the export itself.
//! - System notifications are selected only by `Overall`; a participant
//!   filter never matches them, even one named `"group_notification"`.

use std::fmt;

use crate::record::{Record, Sender};

/// Which records an analytics function should look at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserFilter {
    /// Every record, system notifications included.
    #[default]
    Overall,
    /// Records whose sender is this participant.
    User(String),
}

impl UserFilter {
    /// Creates a participant filter.
    pub fn user(name: impl Into<String>) -> Self {
        UserFilter::User(name.into())
    }

    /// Returns `true` if this record's sender passes the filter.
    pub fn matches(&self, sender: &Sender) -> bool {
        match self {
            UserFilter::Overall => true,
            UserFilter::User(name) => match sender {
                Sender::Participant(participant) => participant == name,
                Sender::System => false,
            },
        }
    }

    /// Iterates over the records that pass the filter, in source order.
    pub fn select<'a>(&'a self, records: &'a [Record]) -> impl Iterator<Item = &'a Record> {
        records.iter().filter(move |record| self.matches(&record.sender))
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserFilter::Overall => f.write_str("Overall"),
            UserFilter::User(name) => f.write_str(name),
        }
    }
}
