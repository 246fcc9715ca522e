//! Report format selection.
//!
//! [`ReportFormat`] has no CLI framework dependency, so library users can
//! pick a writer the same way the binary does.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::analytics::{SenderFilter, analyze};
//! use chatlens::config::ReportConfig;
//! use chatlens::format::{ReportFormat, to_format_string};
//! use chatlens::parse;
//!
//! let messages = parse("01/01/23, 9:00 am - Alice: Hello!");
//! let result = analyze(&SenderFilter::Overall, &messages);
//!
//! let csv = to_format_string(&result, ReportFormat::Csv, &ReportConfig::new())?;
//! assert!(csv.starts_with("Section;Label;Count;Percentage"));
//!
//! let format = ReportFormat::from_path("report.json")?;
//! assert_eq!(format, ReportFormat::Json);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::analytics::AnalysisResult;
use crate::config::ReportConfig;
use crate::error::ChatlensError;

/// Output format for an analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Human-readable report (default)
    #[default]
    Text,

    /// The full [`AnalysisResult`] as pretty-printed JSON
    Json,

    /// Long-form `Section;Label;Count;Percentage` rows
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use chatlens::format::ReportFormat;
    ///
    /// assert_eq!(ReportFormat::Text.extension(), "txt");
    /// assert_eq!(ReportFormat::Csv.extension(), "csv");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ReportFormat] {
        &[ReportFormat::Text, ReportFormat::Json, ReportFormat::Csv]
    }

    /// Feature that must be enabled for this format's writer.
    fn required_feature(self) -> Option<&'static str> {
        match self {
            ReportFormat::Text => None,
            ReportFormat::Json => Some("json-output"),
            ReportFormat::Csv => Some("csv-output"),
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, ChatlensError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(ChatlensError::invalid_format(format!(
                "Unknown file extension: '.{ext}'. Expected one of: txt, json, csv"
            ))),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

fn feature_disabled(format: ReportFormat) -> ChatlensError {
    ChatlensError::invalid_format(format!(
        "Report format {} requires the '{}' feature to be enabled",
        format,
        format.required_feature().unwrap_or_default()
    ))
}

/// Writes the report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    result: &AnalysisResult<'_>,
    path: &str,
    format: ReportFormat,
    config: &ReportConfig,
) -> Result<(), ChatlensError> {
    match format {
        ReportFormat::Text => crate::output::write_text(result, path, config),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::output::write_json(result, path),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => crate::output::write_csv(result, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders the report as a string in the specified format.
pub fn to_format_string(
    result: &AnalysisResult<'_>,
    format: ReportFormat,
    config: &ReportConfig,
) -> Result<String, ChatlensError> {
    match format {
        ReportFormat::Text => Ok(crate::output::to_text(result, config)),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::output::to_json(result),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => crate::output::to_csv(result, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
