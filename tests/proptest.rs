//! Property-based tests for chatlens.
//!
//! These tests generate random transcripts to check the invariants of the
//! parser and the analytics views.

use proptest::prelude::*;

use chatlens::analytics::ranking::most_active;
use chatlens::analytics::{SenderFilter, analyze};
use chatlens::config::{DEFAULT_TOP_SENDERS, OTHERS_LABEL};
use chatlens::parse;

const SENDERS: &[&str] = &["Alice", "Bob", "Charlie", "User123", "Иван", "村上", "A B", "Eve"];

const BODIES: &[&str] = &[
    "Hello",
    "Hi there!",
    "How are you?",
    "",
    "   ",
    "<Media omitted>",
    "see https://example.com",
    "Привет мир",
    "Special;chars\"here",
    "🎉🔥💀 emoji",
    "time is 10:30: really",
];

/// One well-formed transcript line, always on a real calendar date.
fn arb_line() -> impl Strategy<Value = String> {
    (
        1u32..=28,
        1u32..=12,
        0u32..100,
        1u32..=12,
        0u32..60,
        prop::sample::select(vec!["am", "pm"]),
        prop::sample::select(SENDERS.to_vec()),
        prop::sample::select(BODIES.to_vec()),
    )
        .prop_map(|(day, month, year, hour, minute, meridiem, sender, body)| {
            format!("{day:02}/{month:02}/{year:02}, {hour}:{minute:02} {meridiem} - {sender}: {body}")
        })
}

fn arb_transcript(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_line(), 0..max_len)
}

fn arb_filter() -> impl Strategy<Value = SenderFilter> {
    prop_oneof![
        Just(SenderFilter::Overall),
        prop::sample::select(SENDERS.to_vec()).prop_map(SenderFilter::from),
        Just(SenderFilter::from("Nobody")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// N well-formed lines parse to N messages, in order
    #[test]
    fn parse_count_matches_line_count(lines in arb_transcript(40)) {
        let messages = parse(&lines.join("\n"));
        prop_assert_eq!(messages.len(), lines.len());

        for (msg, line) in messages.iter().zip(&lines) {
            let prefix = format!("- {}: ", msg.sender());
            prop_assert!(line.contains(&prefix), "sender mismatch in {}", line);
        }
    }

    /// CRLF line endings change nothing
    #[test]
    fn parse_crlf_equals_lf(lines in arb_transcript(20)) {
        prop_assert_eq!(parse(&lines.join("\r\n")), parse(&lines.join("\n")));
    }

    /// Arbitrary text never panics
    #[test]
    fn parse_never_panics(text in ".{0,300}") {
        let _ = parse(&text);
    }

    // ============================================
    // ANALYTICS PROPERTIES
    // ============================================

    /// Analysis is a pure function
    #[test]
    fn analyze_is_idempotent(lines in arb_transcript(30), filter in arb_filter()) {
        let messages = parse(&lines.join("\n"));
        let first = analyze(&filter, &messages);
        let second = analyze(&filter, &messages);
        prop_assert_eq!(first, second);
    }

    /// Dense views always have 7, 12 and 7 × 24 entries
    #[test]
    fn dense_views_are_complete(lines in arb_transcript(30), filter in arb_filter()) {
        let messages = parse(&lines.join("\n"));
        let result = analyze(&filter, &messages);
        prop_assert_eq!(result.week_activity.len(), 7);
        prop_assert_eq!(result.month_activity.len(), 12);
        prop_assert_eq!(result.heat_map.cell_count(), 168);
    }

    /// Every filtered message lands in exactly one bucket of each view
    #[test]
    fn filtered_views_conserve_messages(lines in arb_transcript(30), filter in arb_filter()) {
        let messages = parse(&lines.join("\n"));
        let result = analyze(&filter, &messages);
        let total = result.stats.total_messages;

        prop_assert_eq!(result.week_activity.iter().map(|d| d.count).sum::<usize>(), total);
        prop_assert_eq!(result.month_activity.iter().map(|m| m.count).sum::<usize>(), total);
        prop_assert_eq!(result.quarterly.iter().map(|q| q.count).sum::<usize>(), total);
        prop_assert_eq!(result.heat_map.total(), total);
    }

    /// Quarterly timeline is strictly chronological
    #[test]
    fn quarterly_is_sorted(lines in arb_transcript(30)) {
        let messages = parse(&lines.join("\n"));
        let timeline = analyze(&SenderFilter::Overall, &messages).quarterly;
        for pair in timeline.windows(2) {
            prop_assert!((pair[0].year, pair[0].quarter) < (pair[1].year, pair[1].quarter));
        }
    }

    /// Ranking has at most top N + 1 entries and covers every message
    #[test]
    fn most_active_is_bounded(lines in arb_transcript(60)) {
        let messages = parse(&lines.join("\n"));
        let ranking = most_active(&messages, DEFAULT_TOP_SENDERS, OTHERS_LABEL);

        prop_assert!(ranking.len() <= DEFAULT_TOP_SENDERS + 1);
        prop_assert_eq!(ranking.iter().map(|s| s.count).sum::<usize>(), messages.len());
        for share in &ranking {
            prop_assert!((0.0..=100.0).contains(&share.percentage));
        }
    }

    /// The ranking does not depend on the filter
    #[test]
    fn most_active_ignores_filter(lines in arb_transcript(30), filter in arb_filter()) {
        let messages = parse(&lines.join("\n"));
        let overall = analyze(&SenderFilter::Overall, &messages);
        let filtered = analyze(&filter, &messages);
        prop_assert_eq!(overall.most_active, filtered.most_active);
    }

    /// Media messages never add words, URLs or emoji
    #[test]
    fn media_only_adds_media(n in 1usize..20) {
        let transcript: String = (0..n)
            .map(|i| format!("01/01/23, 9:{:02} am - Bob: <Media omitted>\n", i % 60))
            .collect();
        let messages = parse(&transcript);
        let result = analyze(&SenderFilter::Overall, &messages);
        prop_assert_eq!(result.stats.media_messages, n);
        prop_assert_eq!(result.stats.total_words, 0);
        prop_assert_eq!(result.stats.total_urls, 0);
        prop_assert!(result.stats.emoji_freq.is_empty());
    }
}
