//! Transcript parser.
//!
//! Turns a whole exported transcript into an ordered `Vec<Message>`. The text
//! is scanned for every occurrence of the message line pattern (see
//! [`crate::parsing::LINE_PATTERN`]); anything in between, such as the extra
//! lines of a multi-line message or notices without a `Sender: ` prefix, is
//! skipped without error.
//!
//! Lines whose date or time is not a real calendar value (`32/13/99`,
//! `25:00`) are dropped the same way and counted in
//! [`ParseReport::invalid_timestamps`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::parse;
//!
//! let messages = parse("01/01/23, 9:00 am - Alice: Hello world");
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].sender(), "Alice");
//! assert_eq!(messages[0].weekday_name(), "Sunday");
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::Message;
use crate::config::ParserConfig;
use crate::error::ChatlensError;
use crate::parsing::{LINE_REGEX, RawLine, is_whatsapp_system_message, truncate_body};

/// Parses a transcript with the default configuration.
///
/// Never fails: empty or non-matching input yields an empty vector.
pub fn parse(text: &str) -> Vec<Message> {
    TranscriptParser::new().parse_str(text)
}

/// Outcome of a parse, with counts of what was left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Parsed messages in document order.
    pub messages: Vec<Message>,
    /// Occurrences of the line pattern, including dropped ones.
    pub matched_lines: usize,
    /// Matched lines dropped because the date or time was impossible.
    pub invalid_timestamps: usize,
    /// Matched lines dropped as system notices.
    pub system_messages: usize,
}

impl ParseReport {
    /// Number of matched lines that did not become messages.
    pub fn dropped(&self) -> usize {
        self.invalid_timestamps + self.system_messages
    }
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::with_config(ParserConfig::new().with_max_body_len(5));
/// let messages = parser.parse_str("02/03/24, 14:00 - Bob: truncated body");
/// assert_eq!(messages[0].body(), "trunc");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses transcript text into messages.
    pub fn parse_str(&self, text: &str) -> Vec<Message> {
        self.parse_with_report(text).messages
    }

    /// Parses transcript text and reports what was dropped.
    pub fn parse_with_report(&self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();

        for caps in LINE_REGEX.captures_iter(text) {
            report.matched_lines += 1;
            let raw = RawLine::from_captures(&caps);

            let Some(timestamp) = raw.timestamp() else {
                debug!(
                    date = raw.date,
                    time = raw.time,
                    meridiem = raw.meridiem,
                    "Dropping line with invalid timestamp"
                );
                report.invalid_timestamps += 1;
                continue;
            };

            let sender = raw.sender.trim();
            if self.config.skip_system_messages && is_whatsapp_system_message(sender, raw.body) {
                report.system_messages += 1;
                continue;
            }

            let body = match self.config.max_body_len {
                Some(max) => truncate_body(raw.body, max),
                None => raw.body,
            };

            report.messages.push(Message::new(timestamp, sender, body));
        }

        debug!(
            matched = report.matched_lines,
            parsed = report.messages.len(),
            invalid_timestamps = report.invalid_timestamps,
            system_messages = report.system_messages,
            "Parsed transcript"
        );

        report
    }

    /// Reads a UTF-8 transcript file and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseReport, ChatlensError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(self.parse_with_report(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DayOfWeek;

    #[test]
    fn test_parse_single_line() {
        let messages = parse("01/01/23, 9:00 am - Alice: Hello world");
        assert_eq!(messages.len(), 1);

        let msg = &messages[0];
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.body(), "Hello world");
        assert_eq!(msg.year(), 2023);
        assert_eq!(msg.month(), 1);
        assert_eq!(msg.day(), 1);
        assert_eq!(msg.hour(), 9);
        assert_eq!(msg.weekday(), DayOfWeek::Sunday);
    }

    #[test]
    fn test_parse_preserves_document_order() {
        let text = "\
05/03/23, 8:00 pm - Bob: later
01/01/23, 9:00 am - Alice: earlier";
        let messages = parse(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender(), "Bob");
        assert_eq!(messages[1].sender(), "Alice");
    }

    #[test]
    fn test_parse_skips_continuation_lines() {
        let text = "\
01/01/23, 9:00 am - Alice: first line
second line of the same message
01/01/23, 9:01 am - Bob: reply";
        let messages = parse(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].body(), "first line");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
        assert!(parse("nothing to see here\n").is_empty());
    }

    #[test]
    fn test_parse_trims_sender() {
        let messages = parse("01/01/23, 9:00 am -  Alice : hi");
        assert_eq!(messages[0].sender(), "Alice");
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let line = "01/01/23, 9:00 am - Alice: same\n";
        let messages = parse(&line.repeat(3));
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn test_invalid_dates_are_dropped_and_counted() {
        let text = "\
32/13/99, 9:00 am - Alice: impossible
01/01/23, 9:00 am - Bob: fine
01/01/23, 25:00 - Carol: impossible hour";
        let report = TranscriptParser::new().parse_with_report(text);
        assert_eq!(report.matched_lines, 3);
        assert_eq!(report.invalid_timestamps, 2);
        assert_eq!(report.messages.len(), 1);
        assert_eq!(report.messages[0].sender(), "Bob");
        assert_eq!(report.dropped(), 2);
    }

    #[test]
    fn test_skip_system_messages_opt_in() {
        let text = "\
01/01/23, 9:00 am - Alice: Messages and calls are end-to-end encrypted.
01/01/23, 9:01 am - Alice: hello";

        assert_eq!(parse(text).len(), 2);

        let parser =
            TranscriptParser::with_config(ParserConfig::new().with_skip_system_messages(true));
        let report = parser.parse_with_report(text);
        assert_eq!(report.messages.len(), 1);
        assert_eq!(report.system_messages, 1);
    }

    #[test]
    fn test_media_placeholder_kept_verbatim() {
        let messages = parse("01/01/23, 9:00 am - Bob: <Media omitted>");
        assert_eq!(messages[0].body(), "<Media omitted>");
    }

    #[test]
    fn test_parse_file_missing() {
        let err = TranscriptParser::new()
            .parse_file("definitely/not/here.txt")
            .unwrap_err();
        assert!(err.is_io());
    }
}
