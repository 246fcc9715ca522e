//! # Chatlens
//!
//! A Rust library for parsing exported WhatsApp chat transcripts and computing
//! activity analytics over them.
//!
//! ## Overview
//!
//! A transcript is the plain-text file WhatsApp produces with
//! "Export chat". Every message starts with a line like:
//!
//! ```text
//! 12/03/23, 9:41 pm - Alice: See you tomorrow 👋
//! ```
//!
//! Chatlens turns such a transcript into a `Vec<Message>` with precomputed
//! calendar fields, then derives six views from it:
//!
//! - general statistics (messages, words, media, links, emoji frequency)
//! - the most active senders, with an "Others" remainder
//! - a quarterly timeline
//! - message counts per weekday and per month
//! - a weekday × hour heat map
//!
//! Every view except the sender ranking can be narrowed to one sender.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let transcript = "\
//! 01/01/23, 9:00 am - Alice: Happy new year 🎉
//! 01/01/23, 9:02 am - Bob: <Media omitted>
//! 02/01/23, 8:15 pm - Alice: https://example.com";
//!
//! let messages = parse(transcript);
//! let result = analyze(&SenderFilter::Overall, &messages);
//!
//! assert_eq!(result.stats.total_messages, 3);
//! assert_eq!(result.most_active[0].sender, "Alice");
//! assert_eq!(result.week_activity[0].count, 2); // Sunday
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`parse`], [`TranscriptParser`](parser::TranscriptParser), [`ParseReport`](parser::ParseReport)
//! - [`parsing`] - line pattern and timestamp helpers
//! - [`message`] - [`Message`]
//! - [`calendar`] - [`DayOfWeek`](calendar::DayOfWeek), [`MonthName`](calendar::MonthName)
//! - [`analytics`] - the six views, [`analyze`], [`Analyzer`](analytics::Analyzer)
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalyzerConfig`](config::AnalyzerConfig), [`ReportConfig`](config::ReportConfig)
//! - [`output`] / [`format`] - text, JSON and CSV reports
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod analytics;
pub mod calendar;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use analytics::analyze;
pub use error::{ChatlensError, Result};
pub use message::Message;
pub use parser::parse;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;
    pub use crate::calendar::{DayOfWeek, MonthName};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{ParseReport, TranscriptParser, parse};

    // Analytics
    pub use crate::analytics::{
        AnalysisResult, Analyzer, DayCount, GeneralStats, HeatMap, MonthCount, QuarterCount,
        SenderFilter, SenderShare, analyze,
    };

    // Configuration
    pub use crate::config::{AnalyzerConfig, ParserConfig, ReportConfig};

    // Output
    pub use crate::format::{ReportFormat, to_format_string, write_to_format};
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
    pub use crate::output::{to_text, write_text};
}
