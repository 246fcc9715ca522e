//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - report format options
//!
//! [`OutputFormat`] converts into the library's
//! [`ReportFormat`](crate::format::ReportFormat), so the binary and library
//! users select writers the same way.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analytics::SenderFilter;
use crate::config::{
    AnalyzerConfig, DEFAULT_TOP_EMOJIS, DEFAULT_TOP_SENDERS, ParserConfig, ReportConfig,
};

/// Analyze an exported WhatsApp chat: message, word, media, link and emoji
/// counts, the most active senders, and activity over time.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --sender Alice
    chatlens chat.txt -f json -o report.json
    chatlens chat.txt -o report.csv
    chatlens chat.txt --list-senders")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Restrict the filtered views to one sender ("overall" for everyone)
    #[arg(short, long, value_name = "NAME", default_value = SenderFilter::OVERALL)]
    pub sender: String,

    /// Report format (default: from the output extension, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Number of emoji listed in the report
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_EMOJIS)]
    pub top_emojis: usize,

    /// Number of senders ranked individually before "Others"
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_SENDERS)]
    pub top_senders: usize,

    /// Drop WhatsApp system notices that look like messages
    #[arg(long)]
    pub skip_system: bool,

    /// Leave the weekday × hour heat map out of the report
    #[arg(long)]
    pub no_heat_map: bool,

    /// Print the distinct senders and exit
    #[arg(long)]
    pub list_senders: bool,

    /// Log parsing details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The sender filter selected by `--sender`.
    pub fn filter(&self) -> SenderFilter {
        SenderFilter::from(self.sender.as_str())
    }

    /// Parser settings from the flags.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_skip_system_messages(self.skip_system)
    }

    /// Analyzer settings from the flags.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new().with_top_senders(self.top_senders)
    }

    /// Report settings from the flags.
    pub fn report_config(&self) -> ReportConfig {
        let config = ReportConfig::new().with_top_emojis(self.top_emojis);
        if self.no_heat_map {
            config.without_heat_map()
        } else {
            config
        }
    }

    /// The effective report format.
    ///
    /// An explicit `--format` wins; otherwise the `--output` extension decides,
    /// falling back to text.
    pub fn report_format(&self) -> crate::format::ReportFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|path| crate::format::ReportFormat::from_path(path).ok())
            .unwrap_or_default()
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Full analysis as JSON
    Json,

    /// Semicolon-delimited rows
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::ReportFormat {
    fn from(format: OutputFormat) -> crate::format::ReportFormat {
        match format {
            OutputFormat::Text => crate::format::ReportFormat::Text,
            OutputFormat::Json => crate::format::ReportFormat::Json,
            OutputFormat::Csv => crate::format::ReportFormat::Csv,
        }
    }
}
