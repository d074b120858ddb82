//! WhatsApp-style TXT export parser.
//!
//! Turns raw export text into an ordered sequence of [`RawRecord`]s. The
//! line grammar is `"<date>, <time> - <sender>: <message>"` for participant
//! messages and `"<date>, <time> - <system text>"` for system notifications;
//! lines with no timestamp prefix continue the previous message.
//!
//! Supported timestamp prefixes, tried per line in fixed priority order
//! (first match wins; there is no per-file format detection):
//! - 12-hour slash: `01/01/23, 10:00 AM - Sender: Message`
//! - 24-hour slash: `01/01/23, 10:00 - Sender: Message`
//! - 24-hour dot: `01.01.2023, 20:40 - Sender: Message`
//!
//! Dates are parsed day-first: `01/02/23` is February 1st.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::{ChatlensError, Result};
use crate::record::{RawRecord, Sender};

/// Parser for WhatsApp-style TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::ChatParser;
///
/// let parser = ChatParser::new();
/// let records = parser.parse("chat.txt".as_ref())?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub struct ChatParser {
    patterns: Vec<(LineFormat, Regex)>,
}

/// Timestamp-prefix variants.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LineFormat {
    /// 12-hour slash with am/pm marker: `01/01/23, 10:00 AM - `
    SlashAmPm,
    /// 24-hour slash: `01/01/23, 10:00 - `
    Slash24,
    /// 24-hour dot: `01.01.2023, 20:40 - `
    Dot24,
}

impl LineFormat {
    /// All variants, in match priority order.
    const PRIORITY: [LineFormat; 3] = [
        LineFormat::SlashAmPm,
        LineFormat::Slash24,
        LineFormat::Dot24,
    ];

    /// Returns the regex pattern for this prefix.
    ///
    /// Group 1 is the date, group 2 the time (with meridiem where present),
    /// group 3 the remainder of the line. The space after the comma is
    /// optional; some exports omit it.
    fn pattern(self) -> &'static str {
        match self {
            // 01/01/23, 10:00 AM - Sender: Message
            LineFormat::SlashAmPm => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s?(\d{1,2}:\d{2}\s?[AaPp][Mm])\s-\s(.*)$"
            }
            // 01/01/23,10:00 - Sender: Message
            LineFormat::Slash24 => r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s?(\d{1,2}:\d{2})\s-\s(.*)$",
            // 01.01.2023, 20:40 - Sender: Message
            LineFormat::Dot24 => r"^(\d{1,2}\.\d{1,2}\.\d{2,4}),\s?(\d{1,2}:\d{2})\s-\s(.*)$",
        }
    }

    /// Returns date parsing format strings for chrono. Day-first.
    fn parse_formats(self) -> &'static [&'static str] {
        match self {
            LineFormat::SlashAmPm => &["%d/%m/%y, %I:%M %p", "%d/%m/%Y, %I:%M %p"],
            LineFormat::Slash24 => &["%d/%m/%y, %H:%M", "%d/%m/%Y, %H:%M"],
            LineFormat::Dot24 => &["%d.%m.%y, %H:%M", "%d.%m.%Y, %H:%M"],
        }
    }
}

/// Parse timestamp from captured date and time strings.
///
/// Returns `None` when the digits matched the line shape but do not form a
/// real date (month 14, February 31st, hour 13 with a meridiem, ...).
fn parse_timestamp(date_str: &str, time_str: &str, format: LineFormat) -> Option<NaiveDateTime> {
    let datetime_str = format!("{date_str}, {time_str}");

    for parse_format in format.parse_formats() {
        if let Ok(ts) = NaiveDateTime::parse_from_str(&datetime_str, parse_format) {
            return Some(ts);
        }
    }

    None
}

/// Split the post-timestamp remainder into sender and body.
///
/// The separator is the first `": "` occurrence. A remainder without one is
/// a system line: group created, user added/left, encryption notice, etc.
fn build_record(timestamp: NaiveDateTime, remainder: &str) -> RawRecord {
    match remainder.split_once(": ") {
        Some((name, body)) => RawRecord::new(timestamp, Sender::participant(name.trim()), body),
        None => RawRecord::new(timestamp, Sender::System, remainder),
    }
}

impl ChatParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        let patterns = LineFormat::PRIORITY
            .into_iter()
            .map(|format| (format, Regex::new(format.pattern()).unwrap()))
            .collect();
        Self { patterns }
    }

    /// Parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read and
    /// [`ChatlensError::Utf8`] if its bytes are not valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<Vec<RawRecord>> {
        let bytes = fs::read(path)?;
        self.parse_bytes(&bytes)
    }

    /// Parses export bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Utf8`] if the bytes are not valid UTF-8.
    /// There is no lossy recovery; a broken export is rejected outright.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<RawRecord>> {
        let content = String::from_utf8(bytes.to_vec()).map_err(|e| {
            ChatlensError::utf8(
                format!(
                    "chat export (invalid byte at offset {})",
                    e.utf8_error().valid_up_to()
                ),
                e,
            )
        })?;
        Ok(self.parse_str(&content))
    }

    /// Parses export text. Infallible: empty or wholly unrecognized input
    /// yields an empty sequence.
    ///
    /// Single linear pass. Each line either starts a new record (timestamp
    /// prefix matched and parsed), continues the previous record (appended
    /// with a `'\n'` separator), or, when no record exists yet, is
    /// discarded.
    pub fn parse_str(&self, content: &str) -> Vec<RawRecord> {
        let mut records: Vec<RawRecord> = Vec::new();

        for line in content.lines() {
            if let Some((format, caps)) = self.match_line(line) {
                let date_str = caps.get(1).map_or("", |m| m.as_str());
                let time_str = caps.get(2).map_or("", |m| m.as_str());
                let remainder = caps.get(3).map_or("", |m| m.as_str());

                if let Some(timestamp) = parse_timestamp(date_str, time_str, format) {
                    records.push(build_record(timestamp, remainder));
                    continue;
                }
                // Shape matched but the digits are not a real date:
                // downgrade to a continuation line.
            }

            if let Some(last) = records.last_mut() {
                last.text.push('\n');
                last.text.push_str(line);
            }
            // No previous record: orphan line, discarded.
        }

        records
    }

    /// Tries each pattern in priority order against a line.
    fn match_line<'a>(&self, line: &'a str) -> Option<(LineFormat, regex::Captures<'a>)> {
        self.patterns
            .iter()
            .find_map(|(format, regex)| regex.captures(line).map(|caps| (*format, caps)))
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}
