//! # Chatlens
//!
//! A Rust library for turning exported WhatsApp-style chat logs into
//! structured records and aggregate statistics.
//!
//! ## Overview
//!
//! Chatlens ingests plain-text chat exports of the form
//! `date, time - sender: text`, recovers one record per message
//! (stitching wrapped lines back onto the message they belong to), and
//! computes the aggregations a chat dashboard needs:
//!
//! - **Topline stats** — message, word, media, and link counts
//! - **Timelines** — messages per month and per day
//! - **Activity** — weekday and month distributions, plus a 7x24
//!   day-by-hour heatmap
//! - **Content** — word frequencies (stopword-aware) and emoji
//!   frequencies
//! - **Participants** — per-user message ranking with percentage shares
//!
//! Every aggregation accepts a [`UserFilter`] so the same call answers
//! both "for the whole chat" and "for one participant".
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlens::analytics::{fetch_stats, most_busy_users};
//! use chatlens::calendar::normalize;
//! use chatlens::{AnalyzerConfig, ChatParser, Result, UserFilter};
//!
//! fn main() -> Result<()> {
//!     // Parse an export into raw records.
//!     let parser = ChatParser::new();
//!     let raw = parser.parse("chat.txt".as_ref())?;
//!
//!     // Precompute calendar fields once.
//!     let records = normalize(raw);
//!
//!     // Aggregate.
//!     let config = AnalyzerConfig::new();
//!     let stats = fetch_stats(&UserFilter::Overall, &records, &config);
//!     println!("{} messages, {} words", stats.messages, stats.words);
//!
//!     for user in most_busy_users(&records).top_users {
//!         println!("{}: {}", user.user, user.count);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — Line-oriented export parsing
//!   - [`ChatParser`] — Compiled line patterns, [`parse`](ChatParser::parse) /
//!     [`parse_bytes`](ChatParser::parse_bytes) / [`parse_str`](ChatParser::parse_str)
//! - [`record`] — Message records ([`RawRecord`], [`Record`], [`Sender`])
//! - [`calendar`] — Calendar enrichment ([`normalize`](calendar::normalize),
//!   [`CalendarFields`](calendar::CalendarFields), [`WEEKDAYS`](calendar::WEEKDAYS),
//!   [`MONTHS`](calendar::MONTHS))
//! - [`filter`] — Record selection ([`UserFilter`])
//! - [`config`] — Analysis knobs ([`AnalyzerConfig`])
//! - [`analytics`] — The aggregations
//!   - [`analytics::stats`] — [`fetch_stats`](analytics::fetch_stats)
//!   - [`analytics::timeline`] — [`monthly_timeline`](analytics::monthly_timeline),
//!     [`daily_timeline`](analytics::daily_timeline)
//!   - [`analytics::activity`] — [`week_activity_map`](analytics::week_activity_map),
//!     [`month_activity_map`](analytics::month_activity_map),
//!     [`activity_heatmap`](analytics::activity_heatmap)
//!   - [`analytics::words`] — [`most_common_words`](analytics::most_common_words),
//!     [`create_wordcloud`](analytics::create_wordcloud)
//!   - [`analytics::emoji`] — [`emoji_helper`](analytics::emoji_helper)
//!   - [`analytics::users`] — [`most_busy_users`](analytics::most_busy_users),
//!     [`participants`](analytics::participants)
//! - [`error`] — Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod analytics;
pub mod calendar;
pub mod config;
pub mod error;
pub mod filter;
pub mod parser;
pub mod record;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use config::{AnalyzerConfig, DEFAULT_MEDIA_PLACEHOLDER};
pub use error::{ChatlensError, Result};
pub use filter::UserFilter;
pub use parser::ChatParser;
pub use record::{RawRecord, Record, SYSTEM_SENDER, Sender};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Parsing
    pub use crate::parser::ChatParser;

    // Records and calendar enrichment
    pub use crate::calendar::{CalendarFields, normalize};
    pub use crate::record::{RawRecord, Record, Sender};

    // Selection and configuration
    pub use crate::config::AnalyzerConfig;
    pub use crate::filter::UserFilter;

    // Aggregations
    pub use crate::analytics::{
        activity_heatmap, create_wordcloud, daily_timeline, emoji_helper, fetch_stats,
        month_activity_map, monthly_timeline, most_busy_users, most_common_words, participants,
        week_activity_map,
    };

    // Error types
    pub use crate::error::{ChatlensError, Result};
}
