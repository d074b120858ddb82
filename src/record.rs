//! Core record types for parsed chat exports.
//!
//! This module provides [`Sender`], [`RawRecord`] and [`Record`], the
//! normalized representation of chat-log entries. The parser produces
//! [`RawRecord`]s; [`normalize`](crate::calendar::normalize) upgrades them to
//! [`Record`]s with cached calendar projections for the analytics functions.
//!
//! # Overview
//!
//! A record consists of:
//! - `timestamp`: date and time the line carried, minute precision
//! - `sender`: a participant name or the system-notification sentinel
//! - `text`: the message body, possibly spanning multiple physical lines
//!
//! # Examples
//!
//! ```
//! use chatlens::{RawRecord, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let record = RawRecord::new(ts, Sender::participant("Alice"), "Hello there");
//!
//! assert_eq!(record.sender.as_str(), "Alice");
//! assert!(!record.sender.is_system());
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::calendar::CalendarFields;

/// Display string used for [`Sender::System`].
///
/// Matches the sentinel value WhatsApp-analyzer style tooling expects in
/// serialized output.
pub const SYSTEM_SENDER: &str = "group_notification";

/// The author of a record: a chat participant or the system itself.
///
/// Exports interleave real messages with group-management events (subject
/// changes, joins, encryption notices). Those events carry no attributable
/// sender, so they are tagged [`Sender::System`] rather than smuggled through
/// as a magic participant name. This keeps filtering by participant exact.
///
/// # Example
///
/// ```
/// use chatlens::Sender;
///
/// let alice = Sender::participant("Alice");
/// assert_eq!(alice.name(), Some("Alice"));
///
/// let system = Sender::System;
/// assert!(system.is_system());
/// assert_eq!(system.as_str(), "group_notification");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sender {
    /// A named chat participant.
    Participant(String),
    /// A system notification (group changes, encryption notices, etc.).
    System,
}

impl Sender {
    /// Creates a participant sender.
    pub fn participant(name: impl Into<String>) -> Self {
        Sender::Participant(name.into())
    }

    /// Returns the participant name, or `None` for system notifications.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::Participant(name) => Some(name),
            Sender::System => None,
        }
    }

    /// Returns the display string: the participant name, or
    /// [`SYSTEM_SENDER`] for system notifications.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::Participant(name) => name,
            Sender::System => SYSTEM_SENDER,
        }
    }

    /// Returns `true` for system notifications.
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized flat as its display string, so JSON consumers see a plain
// "sender" field rather than an enum wrapper.
impl Serialize for Sender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A parsed chat entry before calendar normalization.
///
/// Produced by [`ChatParser`](crate::ChatParser) in source order. The parser
/// guarantees the sequence order equals chronological order of appearance in
/// the export; nothing downstream re-sorts it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawRecord {
    /// When the message was sent, to the minute.
    pub timestamp: NaiveDateTime,

    /// Who sent it.
    pub sender: Sender,

    /// Message body.
    ///
    /// Multiline messages keep their inner newlines: continuation lines from
    /// the export are appended with a `'\n'` separator.
    pub text: String,
}

impl RawRecord {
    /// Creates a new record.
    pub fn new(timestamp: NaiveDateTime, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender,
            text: text.into(),
        }
    }

    /// Returns `true` if this record is a system notification.
    pub fn is_system(&self) -> bool {
        self.sender.is_system()
    }
}

/// A normalized chat entry: a [`RawRecord`] plus its cached calendar fields.
///
/// The calendar fields are pure projections of `timestamp`, computed once
/// during [`normalize`](crate::calendar::normalize) and never mutated
/// independently. Every analytics function takes `&[Record]` read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// When the message was sent, to the minute.
    pub timestamp: NaiveDateTime,

    /// Who sent it.
    pub sender: Sender,

    /// Message body.
    pub text: String,

    /// Calendar projections of `timestamp`.
    pub calendar: CalendarFields,
}

impl Record {
    /// Upgrades a raw record by computing its calendar fields.
    pub fn from_raw(raw: RawRecord) -> Self {
        let calendar = CalendarFields::from_timestamp(raw.timestamp);
        Self {
            timestamp: raw.timestamp,
            sender: raw.sender,
            text: raw.text,
            calendar,
        }
    }

    /// Returns `true` if this record is a system notification.
    pub fn is_system(&self) -> bool {
        self.sender.is_system()
    }
}
