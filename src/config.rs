//! Configuration types for parsing and analysis.
//!
//! Plain structs with builder methods and no CLI framework dependencies, so
//! library users can construct them directly.
//!
//! - [`ParserConfig`] - how transcript lines are turned into messages
//! - [`AnalyzerConfig`] - constants used by the aggregation views
//! - [`ReportConfig`] - what the report writers include
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalyzerConfig, ParserConfig};
//! use chatlens::parser::TranscriptParser;
//! use chatlens::analytics::Analyzer;
//!
//! let parser = TranscriptParser::with_config(
//!     ParserConfig::new().with_skip_system_messages(true),
//! );
//! let analyzer = Analyzer::with_config(AnalyzerConfig::new().with_top_senders(3));
//! ```

use serde::{Deserialize, Serialize};

/// Default body that marks an attachment-only message.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Label of the synthetic entry that sums senders outside the top list.
pub const OTHERS_LABEL: &str = "Others";

/// Number of senders ranked individually by default.
pub const DEFAULT_TOP_SENDERS: usize = 5;

/// Number of emoji listed in reports by default.
pub const DEFAULT_TOP_EMOJIS: usize = 10;

/// Configuration for transcript parsing.
///
/// The defaults keep every matched line, in document order.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_skip_system_messages(true)
///     .with_max_body_len(4096);
/// assert_eq!(config.max_body_len, Some(4096));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Drop WhatsApp notices (encryption banner, subject or icon changes,
    /// deleted messages) that happen to match the message pattern
    /// (default: false)
    pub skip_system_messages: bool,

    /// Truncate bodies longer than this many bytes, on a char boundary
    /// (default: no limit)
    pub max_body_len: Option<usize>,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to skip system notices.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Sets the maximum body length in bytes.
    #[must_use]
    pub fn with_max_body_len(mut self, len: usize) -> Self {
        self.max_body_len = Some(len);
        self
    }
}

/// Configuration for the aggregation views.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.top_senders, 5);
/// assert_eq!(config.others_label, "Others");
/// assert_eq!(config.media_placeholder, "<Media omitted>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Senders listed individually in the ranking (default: 5)
    pub top_senders: usize,

    /// Label for the aggregated remainder entry (default: "Others")
    pub others_label: String,

    /// Body treated as a media message (default: "<Media omitted>")
    pub media_placeholder: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_senders: DEFAULT_TOP_SENDERS,
            others_label: OTHERS_LABEL.to_string(),
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many senders are ranked individually.
    #[must_use]
    pub fn with_top_senders(mut self, n: usize) -> Self {
        self.top_senders = n;
        self
    }

    /// Sets the label of the remainder entry.
    #[must_use]
    pub fn with_others_label(mut self, label: impl Into<String>) -> Self {
        self.others_label = label.into();
        self
    }

    /// Sets the media placeholder body.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }
}

/// Configuration for rendered reports.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ReportConfig;
///
/// let config = ReportConfig::new().with_top_emojis(3).without_heat_map();
/// assert_eq!(config.top_emojis, 3);
/// assert!(!config.include_heat_map);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Emoji listed in the text report and CSV (default: 10)
    pub top_emojis: usize,

    /// Include the weekday × hour grid (default: true)
    pub include_heat_map: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_emojis: DEFAULT_TOP_EMOJIS,
            include_heat_map: true,
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many emoji are listed.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Leaves the heat map out of the report.
    #[must_use]
    pub fn without_heat_map(mut self) -> Self {
        self.include_heat_map = false;
        self
    }
}
