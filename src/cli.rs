//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Report`] - Every aggregation for one scope, serializable as JSON
//!
//! The report type works outside the CLI too: build one from parsed
//! records and serialize it, or render it as text.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::analytics::{
    ActivityHeatmap, DEFAULT_TOP_WORDS, DailyCount, EmojiCount, MonthlyCount, ToplineStats,
    UserRanking, WordCount, activity_heatmap, daily_timeline, emoji_helper, fetch_stats,
    month_activity_map, monthly_timeline, most_busy_users, most_common_words, participants,
    week_activity_map,
};
use crate::calendar::{MONTHS, WEEKDAYS};
use crate::config::AnalyzerConfig;
use crate::filter::UserFilter;
use crate::record::Record;

/// How many emoji rows the text report prints. The JSON report carries
/// the full ranking.
const EMOJI_ROWS: usize = 10;

/// Analyze a WhatsApp-style chat export: message volume, timelines,
/// activity patterns, word and emoji frequencies, participant ranking.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --stopwords stopwords.txt --top-words 30
    chatlens chat.txt --json > report.json")]
pub struct Args {
    /// Path to the exported chat file
    pub input: PathBuf,

    /// Restrict aggregations to one participant (default: whole chat)
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Whitespace-separated stopword file for the word rankings
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Text that marks a message as an attachment placeholder
    #[arg(long, value_name = "TEXT")]
    pub media_placeholder: Option<String>,

    /// How many words the word ranking keeps
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_WORDS)]
    pub top_words: usize,

    /// Emit the full report as pretty-printed JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Builds the analyzer configuration the flags describe.
    pub fn analyzer_config(&self) -> crate::Result<AnalyzerConfig> {
        let mut config = AnalyzerConfig::new();
        if let Some(ref placeholder) = self.media_placeholder {
            config = config.with_media_placeholder(placeholder);
        }
        if let Some(ref path) = self.stopwords {
            config = config.with_stopwords_file(path)?;
        }
        Ok(config)
    }

    /// The scope the flags select.
    pub fn filter(&self) -> UserFilter {
        match self.user {
            Some(ref name) => UserFilter::user(name),
            None => UserFilter::Overall,
        }
    }
}

/// One weekday's or month's message count, in canonical calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    /// Weekday or month name.
    pub label: &'static str,
    /// Messages under that label.
    pub count: usize,
}

/// Every aggregation for one scope.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// `"Overall"` or the participant name.
    pub scope: String,
    pub stats: ToplineStats,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    /// Weekdays with at least one message, Monday first.
    pub week_activity: Vec<ActivityEntry>,
    /// Months with at least one message, January first.
    pub month_activity: Vec<ActivityEntry>,
    pub heatmap: ActivityHeatmap,
    pub top_words: Vec<WordCount>,
    pub emojis: Vec<EmojiCount>,
    /// Chat-wide participant ranking, independent of scope.
    pub users: UserRanking,
    pub participants: Vec<String>,
}

impl Report {
    /// Runs every aggregation for the given scope.
    pub fn build(
        filter: &UserFilter,
        records: &[Record],
        config: &AnalyzerConfig,
        top_words: usize,
    ) -> Self {
        Report {
            scope: filter.to_string(),
            stats: fetch_stats(filter, records, config),
            monthly_timeline: monthly_timeline(filter, records),
            daily_timeline: daily_timeline(filter, records),
            week_activity: in_calendar_order(&week_activity_map(filter, records), &WEEKDAYS),
            month_activity: in_calendar_order(&month_activity_map(filter, records), &MONTHS),
            heatmap: activity_heatmap(filter, records),
            top_words: most_common_words(filter, records, config, top_words),
            emojis: emoji_helper(filter, records),
            users: most_busy_users(records),
            participants: participants(records),
        }
    }

    /// Renders the text report.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        section(&mut out, "📊 Topline:");
        line(&mut out, format!("Messages: {}", self.stats.messages));
        line(&mut out, format!("Words:    {}", self.stats.words));
        line(&mut out, format!("Media:    {}", self.stats.media));
        line(&mut out, format!("Links:    {}", self.stats.links));

        section(&mut out, "🗓️ Monthly timeline:");
        for month in &self.monthly_timeline {
            line(&mut out, format!("{}: {}", month.label, month.count));
        }

        if let Some(busiest) = self.daily_timeline.iter().max_by_key(|d| d.count) {
            section(&mut out, "📅 Days:");
            line(
                &mut out,
                format!("Active days: {}", self.daily_timeline.len()),
            );
            line(
                &mut out,
                format!("Busiest day: {} ({} messages)", busiest.date, busiest.count),
            );
        }

        section(&mut out, "📆 Weekday activity:");
        for entry in &self.week_activity {
            line(&mut out, format!("{}: {}", entry.label, entry.count));
        }

        section(&mut out, "🌙 Month activity:");
        for entry in &self.month_activity {
            line(&mut out, format!("{}: {}", entry.label, entry.count));
        }

        if let Some((day, hour, count)) = self.busiest_hour() {
            section(&mut out, "🔥 Busiest hour:");
            line(
                &mut out,
                format!(
                    "{} {}: {} messages",
                    ActivityHeatmap::day_names()[day],
                    ActivityHeatmap::hour_labels()[hour],
                    count
                ),
            );
        }

        if !self.top_words.is_empty() {
            section(&mut out, "💬 Top words:");
            for word in &self.top_words {
                line(&mut out, format!("{}: {}", word.word, word.count));
            }
        }

        if !self.emojis.is_empty() {
            section(&mut out, "😀 Top emojis:");
            for emoji in self.emojis.iter().take(EMOJI_ROWS) {
                line(&mut out, format!("{}: {}", emoji.emoji, emoji.count));
            }
        }

        section(&mut out, "👥 Most active users:");
        for (user, share) in self.users.top_users.iter().zip(&self.users.shares) {
            line(
                &mut out,
                format!("{}: {} ({:.2}%)", user.user, user.count, share.percent),
            );
        }

        section(&mut out, "🙋 Participants:");
        line(&mut out, self.participants.join(", "));

        out
    }

    /// The most loaded heatmap cell, ties resolved toward the earlier
    /// day and hour.
    fn busiest_hour(&self) -> Option<(usize, usize, usize)> {
        let mut best: Option<(usize, usize, usize)> = None;
        for (day, row) in self.heatmap.cells.iter().enumerate() {
            for (hour, &count) in row.iter().enumerate() {
                if count > 0 && best.is_none_or(|(_, _, max)| count > max) {
                    best = Some((day, hour, count));
                }
            }
        }
        best
    }
}

/// Flattens a sparse activity map into canonical calendar order,
/// dropping absent labels.
fn in_calendar_order(
    map: &HashMap<&'static str, usize>,
    order: &[&'static str],
) -> Vec<ActivityEntry> {
    order
        .iter()
        .filter_map(|&label| {
            map.get(label)
                .map(|&count| ActivityEntry { label, count })
        })
        .collect()
}

fn section(out: &mut String, header: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(header);
    out.push('\n');
}

fn line(out: &mut String, content: String) {
    out.push_str("   ");
    out.push_str(&content);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::normalize;
    use crate::parser::ChatParser;

    const SAMPLE: &str = "\
01/01/23, 10:00 - Alice: Hello there 😀
01/01/23, 10:05 - Bob: hi hi https://example.com
02/01/23, 22:00 - Alice: <Media omitted>
15/02/23, 09:30 - Bob: back in February
";

    fn report(user: Option<&str>) -> Report {
        let records = normalize(ChatParser::new().parse_str(SAMPLE));
        let filter = match user {
            Some(name) => UserFilter::user(name),
            None => UserFilter::Overall,
        };
        Report::build(&filter, &records, &AnalyzerConfig::new(), DEFAULT_TOP_WORDS)
    }

    #[test]
    fn test_report_scope_and_stats() {
        let report = report(None);
        assert_eq!(report.scope, "Overall");
        assert_eq!(report.stats.messages, 4);
        assert_eq!(report.stats.media, 1);
        assert_eq!(report.stats.links, 1);
    }

    #[test]
    fn test_report_activity_in_calendar_order() {
        let report = report(None);

        let labels: Vec<_> = report.week_activity.iter().map(|e| e.label).collect();
        // Jan 1 2023 is a Sunday, Jan 2 a Monday, Feb 15 a Wednesday.
        assert_eq!(labels, vec!["Monday", "Wednesday", "Sunday"]);

        let months: Vec<_> = report.month_activity.iter().map(|e| e.label).collect();
        assert_eq!(months, vec!["January", "February"]);
    }

    #[test]
    fn test_report_users_ignore_scope() {
        let report = report(Some("Alice"));
        assert_eq!(report.stats.messages, 2);
        // Ranking still covers the whole chat.
        assert_eq!(report.users.top_users.len(), 2);
        assert_eq!(report.participants, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = report(None);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["scope"], "Overall");
        assert_eq!(json["stats"]["messages"], 4);
        assert!(json["heatmap"]["cells"].is_array());
        assert_eq!(json["participants"][0], "Alice");
    }

    #[test]
    fn test_render_text_sections() {
        let text = report(None).render_text();

        assert!(text.contains("📊 Topline:"));
        assert!(text.contains("Messages: 4"));
        assert!(text.contains("January-2023: 3"));
        assert!(text.contains("Busiest day: 2023-01-01 (2 messages)"));
        assert!(text.contains("😀: 1"));
        assert!(text.contains("Alice: 2 (50.00%)"));
    }

    #[test]
    fn test_args_filter_and_config() {
        let args = Args::parse_from(["chatlens", "chat.txt", "--user", "Alice"]);
        assert_eq!(args.filter(), UserFilter::user("Alice"));
        assert_eq!(args.top_words, DEFAULT_TOP_WORDS);

        let args = Args::parse_from(["chatlens", "chat.txt", "--media-placeholder", "<attached>"]);
        let config = args.analyzer_config().unwrap();
        assert!(config.is_media("<attached>"));
        assert!(!config.is_media("<Media omitted>"));
    }
}
