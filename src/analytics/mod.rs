//! Analytics over parsed messages.
//!
//! Six independent views, each a pure function of the message slice and a
//! [`SenderFilter`]:
//!
//! | View | Function | Filtered | Shape |
//! |------|----------|----------|-------|
//! | General stats | [`stats`](stats::stats) | yes | counters + emoji map |
//! | Top senders | [`most_active`](ranking::most_active) | no | ≤ top N + "Others" |
//! | Quarterly timeline | [`quarterly`] | yes | sparse, chronological |
//! | Weekday activity | [`week_activity`] | yes | 7 entries, Sunday first |
//! | Month activity | [`month_activity`] | yes | 12 entries, January first |
//! | Hourly heat map | [`heat_map`] | yes | 7 × 24 cells |
//!
//! [`analyze`] bundles all six into an [`AnalysisResult`]. When only the
//! filter changes, [`Analyzer::reanalyze`] recomputes the filtered views and
//! carries the sender ranking over.
//!
//! # Example
//!
//! ```rust
//! use chatlens::analytics::{SenderFilter, analyze};
//! use chatlens::parse;
//!
//! let transcript = "\
//! 01/01/23, 9:00 am - Alice: Hello world
//! 01/01/23, 9:05 am - Bob: <Media omitted>
//! 02/01/23, 6:30 pm - Alice: see https://example.com 🎉";
//!
//! let messages = parse(transcript);
//! let overall = analyze(&SenderFilter::Overall, &messages);
//! assert_eq!(overall.stats.total_messages, 3);
//! assert_eq!(overall.stats.media_messages, 1);
//! assert_eq!(overall.stats.total_urls, 1);
//!
//! let alice = analyze(&"Alice".into(), &messages);
//! assert_eq!(alice.stats.total_messages, 2);
//! // the ranking always covers everyone
//! assert_eq!(alice.most_active.len(), 2);
//! ```

pub mod activity;
pub mod ranking;
pub mod stats;
pub mod timeline;

pub use activity::{DayCount, HOURS, HeatMap, MonthCount, heat_map, month_activity, week_activity};
pub use ranking::{SenderShare, percentage, sender_counts};
pub use stats::{GeneralStats, count_words, extract_emojis, extract_urls};
pub use timeline::{QuarterCount, quarterly};

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::config::AnalyzerConfig;

/// Which messages a filtered view looks at.
///
/// The string `"overall"` selects everything; any other string is an exact,
/// case-sensitive sender name.
///
/// ```rust
/// use chatlens::analytics::SenderFilter;
///
/// assert_eq!(SenderFilter::from("overall"), SenderFilter::Overall);
/// assert_eq!(SenderFilter::from("Alice"), SenderFilter::Sender("Alice".into()));
/// assert_eq!(SenderFilter::from("Alice").to_string(), "Alice");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SenderFilter {
    /// All messages.
    #[default]
    Overall,
    /// Messages whose sender equals this name exactly.
    Sender(String),
}

impl SenderFilter {
    /// Filter value that selects every message.
    pub const OVERALL: &'static str = "overall";

    /// Creates a filter for one sender.
    pub fn sender(name: impl Into<String>) -> Self {
        SenderFilter::Sender(name.into())
    }

    /// Returns `true` for [`SenderFilter::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, SenderFilter::Overall)
    }

    /// Returns `true` if `msg` passes the filter.
    pub fn matches(&self, msg: &Message) -> bool {
        match self {
            SenderFilter::Overall => true,
            SenderFilter::Sender(name) => msg.sender() == name,
        }
    }

    /// Iterates over the messages that pass the filter, in order.
    pub fn apply<'m>(&self, messages: &'m [Message]) -> impl Iterator<Item = &'m Message> {
        messages.iter().filter(move |msg| self.matches(msg))
    }
}

impl From<&str> for SenderFilter {
    fn from(value: &str) -> Self {
        if value == SenderFilter::OVERALL {
            SenderFilter::Overall
        } else {
            SenderFilter::Sender(value.to_string())
        }
    }
}

impl From<String> for SenderFilter {
    fn from(value: String) -> Self {
        if value == SenderFilter::OVERALL {
            SenderFilter::Overall
        } else {
            SenderFilter::Sender(value)
        }
    }
}

impl From<SenderFilter> for String {
    fn from(filter: SenderFilter) -> Self {
        match filter {
            SenderFilter::Overall => SenderFilter::OVERALL.to_string(),
            SenderFilter::Sender(name) => name,
        }
    }
}

impl std::fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SenderFilter::Overall => f.write_str(SenderFilter::OVERALL),
            SenderFilter::Sender(name) => f.write_str(name),
        }
    }
}

/// All six views for one filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult<'a> {
    /// The filter the filtered views were computed with.
    pub filter: SenderFilter,
    pub stats: GeneralStats<'a>,
    /// Sender ranking over the whole conversation, independent of `filter`.
    pub most_active: Vec<SenderShare>,
    pub quarterly: Vec<QuarterCount>,
    pub week_activity: Vec<DayCount>,
    pub month_activity: Vec<MonthCount>,
    pub heat_map: HeatMap,
}

/// Computes every view with the default [`AnalyzerConfig`].
pub fn analyze<'a>(filter: &SenderFilter, messages: &'a [Message]) -> AnalysisResult<'a> {
    Analyzer::new().analyze(filter, messages)
}

/// Runs the views with a given [`AnalyzerConfig`].
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::{Analyzer, SenderFilter};
/// use chatlens::config::AnalyzerConfig;
/// use chatlens::parse;
///
/// let messages = parse("01/01/23, 9:00 am - Alice: hi\n01/01/23, 9:01 am - Bob: yo");
/// let analyzer = Analyzer::with_config(AnalyzerConfig::new().with_top_senders(1));
///
/// let ranking = analyzer.most_active(&messages);
/// assert_eq!(ranking.len(), 2);
/// assert_eq!(ranking[1].sender, "Others");
/// assert_eq!(analyzer.senders(&messages), ["Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Distinct senders in order of their first message.
    pub fn senders<'a>(&self, messages: &'a [Message]) -> Vec<&'a str> {
        sender_counts(messages)
            .into_iter()
            .map(|(sender, _)| sender)
            .collect()
    }

    /// General counters for the filtered messages.
    pub fn stats<'a>(&self, filter: &SenderFilter, messages: &'a [Message]) -> GeneralStats<'a> {
        stats::stats(filter, messages, &self.config.media_placeholder)
    }

    /// Sender ranking over all messages.
    pub fn most_active(&self, messages: &[Message]) -> Vec<SenderShare> {
        ranking::most_active(messages, self.config.top_senders, &self.config.others_label)
    }

    /// Computes all six views.
    pub fn analyze<'a>(&self, filter: &SenderFilter, messages: &'a [Message]) -> AnalysisResult<'a> {
        let most_active = self.most_active(messages);
        self.analyze_filtered(filter, messages, most_active)
    }

    /// Recomputes the filtered views for a new filter over the same
    /// messages, reusing the sender ranking from `previous`.
    pub fn reanalyze<'a>(
        &self,
        previous: AnalysisResult<'a>,
        filter: &SenderFilter,
        messages: &'a [Message],
    ) -> AnalysisResult<'a> {
        self.analyze_filtered(filter, messages, previous.most_active)
    }

    fn analyze_filtered<'a>(
        &self,
        filter: &SenderFilter,
        messages: &'a [Message],
        most_active: Vec<SenderShare>,
    ) -> AnalysisResult<'a> {
        AnalysisResult {
            filter: filter.clone(),
            stats: self.stats(filter, messages),
            most_active,
            quarterly: quarterly(filter, messages),
            week_activity: week_activity(filter, messages),
            month_activity: month_activity(filter, messages),
            heat_map: heat_map(filter, messages),
        }
    }
}
