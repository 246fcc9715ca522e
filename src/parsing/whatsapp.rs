//! WhatsApp line format primitives.
//!
//! Exported Android chats put one message per line:
//!
//! ```text
//! 15/06/23, 10:30 pm - John Doe: Hey, how are you?
//! ```
//!
//! This module owns the line pattern, timestamp normalization and the
//! system-notice heuristic. [`crate::parser::TranscriptParser`] drives them.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

/// Pattern for one message line.
///
/// Groups: `date` (`DD/MM/YY` or `DD/MM/YYYY`), `time` (`H:MM`), optional
/// lowercase `meridiem`, `sender` (up to the first colon, same line), `body`
/// (rest of the line without `\r`). The pattern is unanchored so every
/// occurrence in the text is found, in order.
pub const LINE_PATTERN: &str = r"(?P<date>\d{2}/\d{2}/\d{2,4}), (?P<time>\d{1,2}:\d{2})(?:\s?(?P<meridiem>[ap]m))? - (?P<sender>[^:\r\n]+): (?P<body>[^\r\n]*)";

/// Compiled [`LINE_PATTERN`].
pub static LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("line pattern is valid"));

/// Raw fields of one matched line, borrowed from the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub meridiem: Option<&'a str>,
    pub sender: &'a str,
    pub body: &'a str,
}

impl<'a> RawLine<'a> {
    /// Extracts the fields from a [`LINE_REGEX`] match.
    pub fn from_captures(caps: &regex::Captures<'a>) -> Self {
        let field = |name| caps.name(name).map_or("", |m| m.as_str());
        Self {
            date: field("date"),
            time: field("time"),
            meridiem: caps.name("meridiem").map(|m| m.as_str()),
            sender: field("sender"),
            body: field("body"),
        }
    }

    /// Builds the timestamp, or `None` if the date or time is not a real
    /// calendar value.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_whatsapp_timestamp(self.date, self.time, self.meridiem)
    }
}

/// Maps a year token to a full year. Values below 100 are taken as 20xx.
pub fn normalize_year(year: i32) -> i32 {
    if year < 100 { 2000 + year } else { year }
}

/// Converts a 12-hour clock hour to 0-23.
///
/// `12 am` is midnight, `12 pm` is noon. Hours above 12 are rejected.
fn to_24_hour(hour: u32, meridiem: &str) -> Option<u32> {
    match (hour, meridiem) {
        (12, "am") => Some(0),
        (12, "pm") => Some(12),
        (0..=11, "am") => Some(hour),
        (0..=11, "pm") => Some(hour + 12),
        _ => None,
    }
}

/// Parses a `DD/MM/YY[YY]` date and `H:MM` time into a timestamp.
///
/// With a `meridiem` the hour is read on a 12-hour clock, otherwise on a
/// 24-hour clock. Returns `None` for impossible values such as `32/13/99`
/// or `25:00`.
pub fn parse_whatsapp_timestamp(
    date: &str,
    time: &str,
    meridiem: Option<&str>,
) -> Option<NaiveDateTime> {
    let mut parts = date.splitn(3, '/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;

    let (hour, minute) = time.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    let hour = match meridiem {
        Some(m) => to_24_hour(hour, m)?,
        None => hour,
    };

    NaiveDate::from_ymd_opt(normalize_year(year), month, day)?.and_hms_opt(hour, minute, 0)
}

/// Notices WhatsApp writes into exports that are not user messages.
const SYSTEM_NOTICES: &[&str] = &[
    "messages and calls are end-to-end encrypted",
    "created group",
    "changed the subject",
    "changed this group's icon",
    "changed the group description",
    "deleted this group's icon",
    "changed their phone number",
    "joined using this group's invite link",
    "security code changed",
    "you're now an admin",
    "turned on disappearing messages",
    "turned off disappearing messages",
    "this message was deleted",
];

/// Heuristic check for a system notice that slipped through the line pattern.
///
/// Matches the body against known notice phrases (case-insensitive), and
/// treats a blank sender as system-generated.
pub fn is_whatsapp_system_message(sender: &str, body: &str) -> bool {
    if sender.trim().is_empty() {
        return true;
    }

    let body_lower = body.to_lowercase();
    SYSTEM_NOTICES
        .iter()
        .any(|notice| body_lower.contains(notice))
}

/// Truncates `body` to at most `max_len` bytes without splitting a char.
pub fn truncate_body(body: &str, max_len: usize) -> &str {
    if body.len() <= max_len {
        return body;
    }
    let mut end = max_len;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
