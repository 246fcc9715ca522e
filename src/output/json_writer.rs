//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::analytics::AnalysisResult;
use crate::error::ChatlensError;

/// Writes the analysis to a JSON file.
///
/// # Format
/// ```json
/// {
///   "filter": "overall",
///   "stats": {"total_messages": 3, "total_words": 5, ...},
///   "most_active": [{"sender": "Alice", "count": 2, "percentage": 66.7}],
///   "quarterly": [{"label": "Q1-2023", "year": 2023, "quarter": 1, "count": 3}],
///   "week_activity": [{"day": "Sunday", "count": 2}, ...],
///   "month_activity": [{"month": "January", "count": 3}, ...],
///   "heat_map": {"Sunday": {"0": 0, ..., "23": 0}, ...}
/// }
/// ```
pub fn write_json(result: &AnalysisResult<'_>, output_path: &str) -> Result<(), ChatlensError> {
    let json = to_json(result)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the analysis to a pretty-printed JSON string.
pub fn to_json(result: &AnalysisResult<'_>) -> Result<String, ChatlensError> {
    Ok(serde_json::to_string_pretty(result)?)
}
