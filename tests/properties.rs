//! Property tests over randomly generated chat exports.
//!
//! Each case builds a syntactically valid export, runs the full
//! pipeline, and checks the invariants that must hold for any input.

use chatlens::analytics::{
    activity_heatmap, create_wordcloud, daily_timeline, emoji_helper, fetch_stats,
    monthly_timeline, most_busy_users, most_common_words, participants,
};
use chatlens::calendar::normalize;
use chatlens::{AnalyzerConfig, ChatParser, Record, UserFilter};
use proptest::prelude::*;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

fn sender_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        3 => Just(Some("Alice")),
        3 => Just(Some("Bob")),
        2 => Just(Some("Carol")),
        1 => Just(None),
    ]
}

fn text_strategy() -> impl Strategy<Value = String> {
    let phrase = prop_oneof![
        Just("hello"),
        Just("world"),
        Just("the"),
        Just("rust is nice"),
        Just("check https://example.com"),
        Just("😀"),
        Just("ok!"),
        Just("status: green"),
    ];
    prop_oneof![
        1 => Just("<Media omitted>".to_string()),
        5 => proptest::collection::vec(phrase, 1..5).prop_map(|parts| parts.join(" ")),
    ]
}

fn line_strategy() -> impl Strategy<Value = String> {
    (
        1_u32..=28,
        1_u32..=12,
        22_u32..=24,
        0_u32..=23,
        0_u32..=59,
        sender_strategy(),
        text_strategy(),
    )
        .prop_map(|(day, month, year, hour, minute, sender, text)| match sender {
            Some(name) => format!("{day:02}/{month:02}/{year}, {hour}:{minute:02} - {name}: {text}"),
            None => format!("{day:02}/{month:02}/{year}, {hour}:{minute:02} - You changed the group description"),
        })
}

fn chat_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(line_strategy(), 0..40).prop_map(|lines| lines.join("\n"))
}

fn pipeline(chat: &str) -> Vec<Record> {
    normalize(ChatParser::new().parse_str(chat))
}

proptest! {
    #[test]
    fn prop_every_generated_line_becomes_a_record(chat in chat_strategy()) {
        let records = pipeline(&chat);
        prop_assert_eq!(records.len(), chat.lines().count());
    }

    #[test]
    fn prop_scope_counts_partition_overall(chat in chat_strategy()) {
        let records = pipeline(&chat);
        let config = AnalyzerConfig::new();

        let overall = fetch_stats(&UserFilter::Overall, &records, &config).messages;
        let per_user: usize = participants(&records)
            .iter()
            .map(|name| fetch_stats(&UserFilter::user(name), &records, &config).messages)
            .sum();
        let system = records.iter().filter(|r| r.is_system()).count();

        prop_assert_eq!(per_user + system, overall);
    }

    #[test]
    fn prop_monthly_counts_sum_to_messages(chat in chat_strategy()) {
        let records = pipeline(&chat);
        let config = AnalyzerConfig::new();

        let messages = fetch_stats(&UserFilter::Overall, &records, &config).messages;
        let summed: usize = monthly_timeline(&UserFilter::Overall, &records)
            .iter()
            .map(|m| m.count)
            .sum();

        prop_assert_eq!(summed, messages);
    }

    #[test]
    fn prop_daily_dates_strictly_increase(chat in chat_strategy()) {
        let records = pipeline(&chat);
        let timeline = daily_timeline(&UserFilter::Overall, &records);

        for window in timeline.windows(2) {
            prop_assert!(window[0].date < window[1].date);
        }
        let summed: usize = timeline.iter().map(|d| d.count).sum();
        prop_assert_eq!(summed, records.len());
    }

    #[test]
    fn prop_heatmap_total_equals_messages(chat in chat_strategy()) {
        let records = pipeline(&chat);

        let overall = activity_heatmap(&UserFilter::Overall, &records);
        prop_assert_eq!(overall.total(), records.len());

        let alice = activity_heatmap(&UserFilter::user("Alice"), &records);
        let alice_messages = fetch_stats(
            &UserFilter::user("Alice"),
            &records,
            &AnalyzerConfig::new(),
        )
        .messages;
        prop_assert_eq!(alice.total(), alice_messages);
    }

    #[test]
    fn prop_emoji_counts_sum_to_a_full_scan(chat in chat_strategy()) {
        let records = pipeline(&chat);

        let ranked_total: usize = emoji_helper(&UserFilter::Overall, &records)
            .iter()
            .map(|e| e.count)
            .sum();

        let emoji_re =
            Regex::new(r"\p{Extended_Pictographic}|[\x{1F1E6}-\x{1F1FF}]|\x{20E3}").unwrap();
        let scanned_total = records
            .iter()
            .flat_map(|r| r.text.graphemes(true))
            .filter(|cluster| emoji_re.is_match(cluster))
            .count();

        prop_assert_eq!(ranked_total, scanned_total);
    }

    #[test]
    fn prop_ranked_words_respect_exclusions(chat in chat_strategy()) {
        let records = pipeline(&chat);
        let config = AnalyzerConfig::new().with_stopwords(["the", "ok"]);

        for entry in create_wordcloud(&UserFilter::Overall, &records, &config) {
            prop_assert!(!config.is_stopword(&entry.word));
            prop_assert!(entry.count > 0);
        }
    }

    #[test]
    fn prop_top_words_is_a_prefix_of_the_wordcloud(chat in chat_strategy(), top_n in 0_usize..10) {
        let records = pipeline(&chat);
        let config = AnalyzerConfig::new();

        let cloud = create_wordcloud(&UserFilter::Overall, &records, &config);
        let top = most_common_words(&UserFilter::Overall, &records, &config, top_n);

        prop_assert_eq!(top.len(), top_n.min(cloud.len()));
        prop_assert_eq!(&top[..], &cloud[..top.len()]);
    }

    #[test]
    fn prop_shares_sum_to_one_hundred(chat in chat_strategy()) {
        let records = pipeline(&chat);
        let ranking = most_busy_users(&records);

        if !ranking.shares.is_empty() {
            let sum: f64 = ranking.shares.iter().map(|s| s.percent).sum();
            prop_assert!((sum - 100.0).abs() < 0.1, "shares summed to {}", sum);
        }
        prop_assert!(ranking.top_users.len() <= ranking.shares.len());
    }
}
