//! General message statistics: counts of messages, words, media, links and
//! emoji.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::SenderFilter;
use crate::Message;

/// `http://` or `https://` followed by any run of non-whitespace.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

/// Single emoji code points: pictographs, emoticons, transport, symbols,
/// dingbats, regional indicators, enclosed alphanumerics and a handful of
/// standalone symbols (©, ®, ™, ⭐, ...).
///
/// Matching is per code point, so a flag (two regional indicators) counts as
/// two glyphs and skin tone modifiers are counted on their own.
static EMOJI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[",
        r"\x{1F300}-\x{1F5FF}\x{1F900}-\x{1F9FF}\x{1F600}-\x{1F64F}\x{1F680}-\x{1F6FF}",
        r"\x{2600}-\x{26FF}\x{2700}-\x{27BF}\x{1F1E6}-\x{1F1FF}\x{1F191}-\x{1F251}",
        r"\x{1F004}\x{1F0CF}\x{1F170}-\x{1F171}\x{1F17E}-\x{1F17F}\x{1F18E}",
        r"\x{3030}\x{2B50}\x{2B55}\x{2934}-\x{2935}\x{2B05}-\x{2B07}\x{2B1B}-\x{2B1C}",
        r"\x{3297}\x{3299}\x{303D}\x{00A9}\x{00AE}\x{2122}\x{23F3}\x{24C2}",
        r"\x{23E9}-\x{23EF}\x{25B6}\x{23F8}-\x{23FA}",
        r"]",
    ))
    .expect("emoji pattern is valid")
});

/// Returns every URL in `text`, in order.
pub fn extract_urls(text: &str) -> Vec<&str> {
    URL_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Returns every emoji glyph in `text`, in order, repeats included.
pub fn extract_emojis(text: &str) -> Vec<&str> {
    EMOJI_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Counts whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Aggregate counts over the messages selected by a [`SenderFilter`].
///
/// Media messages (body equal to the media placeholder) are counted in
/// `media_messages` only; they add nothing to words, URLs or emoji.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneralStats<'a> {
    pub total_messages: usize,
    pub total_words: usize,
    pub media_messages: usize,
    pub total_urls: usize,
    /// Occurrences per emoji glyph.
    pub emoji_freq: BTreeMap<String, usize>,
    /// The messages these counts were taken from.
    #[serde(skip)]
    pub filtered_messages: Vec<&'a Message>,
}

impl GeneralStats<'_> {
    /// The `n` most frequent emoji, most frequent first.
    ///
    /// Ties keep code point order.
    pub fn top_emojis(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .emoji_freq
            .iter()
            .map(|(emoji, &count)| (emoji.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Total emoji occurrences.
    pub fn total_emojis(&self) -> usize {
        self.emoji_freq.values().sum()
    }
}

/// Computes [`GeneralStats`] for the messages matching `filter`.
pub fn stats<'a>(
    filter: &SenderFilter,
    messages: &'a [Message],
    media_placeholder: &str,
) -> GeneralStats<'a> {
    let mut stats = GeneralStats {
        filtered_messages: filter.apply(messages).collect(),
        ..GeneralStats::default()
    };
    stats.total_messages = stats.filtered_messages.len();

    for msg in &stats.filtered_messages {
        if msg.is_placeholder(media_placeholder) {
            stats.media_messages += 1;
            continue;
        }

        let body = msg.body();
        stats.total_words += count_words(body);
        stats.total_urls += URL_REGEX.find_iter(body).count();
        for emoji in EMOJI_REGEX.find_iter(body) {
            *stats
                .emoji_freq
                .entry(emoji.as_str().to_string())
                .or_insert(0) += 1;
        }
    }

    stats
}
