//! Analytics over the normalized record sequence.
//!
//! This module contains:
//! - [`stats`] - topline counts (messages, words, media, links)
//! - [`timeline`] - monthly and daily message timelines
//! - [`activity`] - weekday/month activity maps and the hour heatmap
//! - [`words`] - word-frequency ranking and wordcloud weights
//! - [`emoji`] - emoji-frequency ranking
//! - [`users`] - participant ranking and shares
//!
//! Every function here is a pure read-only query over `&[Record]`. Results
//! are small value structures recomputed per call; nothing is cached and no
//! state is shared, so calling any of them repeatedly or concurrently over
//! the same slice is safe.
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::analytics::fetch_stats;
//! use chatlens::calendar::normalize;
//! use chatlens::{AnalyzerConfig, ChatParser, UserFilter};
//!
//! let parser = ChatParser::new();
//! let records = normalize(parser.parse_str("01/01/23, 10:00 - Alice: Hello"));
//! let config = AnalyzerConfig::default();
//!
//! let stats = fetch_stats(&UserFilter::Overall, &records, &config);
//! assert_eq!(stats.messages, 1);
//! assert_eq!(stats.words, 1);
//! ```

pub mod activity;
pub mod emoji;
pub mod stats;
pub mod timeline;
pub mod users;
pub mod words;

// Re-export the operations and result types for convenience
pub use activity::{ActivityHeatmap, activity_heatmap, month_activity_map, week_activity_map};
pub use emoji::{EmojiCount, emoji_helper};
pub use stats::{ToplineStats, fetch_stats};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use users::{TOP_USERS, UserCount, UserRanking, UserShare, most_busy_users, participants};
pub use words::{DEFAULT_TOP_WORDS, WordCount, create_wordcloud, most_common_words};
