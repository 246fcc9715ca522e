//! CSV output writer.
//!
//! Every view is flattened into long-form rows so the whole analysis fits in
//! one sheet:
//!
//! ```text
//! Section;Label;Count;Percentage
//! stats;total_messages;3;
//! emoji;🎉;1;
//! most_active;Alice;2;66.7
//! quarterly;Q1-2023;3;
//! weekday;Sunday;2;
//! month;January;3;
//! heat_map;Sunday 09;2;
//! ```

use std::fs::File;
use std::io::Write;

use crate::analytics::AnalysisResult;
use crate::config::ReportConfig;
use crate::error::ChatlensError;

const HEADER: [&str; 4] = ["Section", "Label", "Count", "Percentage"];

/// Writes the analysis to a semicolon-delimited CSV file.
pub fn write_csv(
    result: &AnalysisResult<'_>,
    output_path: &str,
    config: &ReportConfig,
) -> Result<(), ChatlensError> {
    let file = File::create(output_path)?;
    write_records(result, config, file)
}

/// Converts the analysis to a CSV string.
pub fn to_csv(result: &AnalysisResult<'_>, config: &ReportConfig) -> Result<String, ChatlensError> {
    let mut buffer = Vec::new();
    write_records(result, config, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(
    result: &AnalysisResult<'_>,
    config: &ReportConfig,
    out: W,
) -> Result<(), ChatlensError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);
    writer.write_record(HEADER)?;

    let stats = &result.stats;
    for (label, count) in [
        ("total_messages", stats.total_messages),
        ("total_words", stats.total_words),
        ("media_messages", stats.media_messages),
        ("total_urls", stats.total_urls),
    ] {
        write_row(&mut writer, "stats", label, count, "")?;
    }

    for (emoji, count) in stats.top_emojis(config.top_emojis) {
        write_row(&mut writer, "emoji", emoji, count, "")?;
    }

    for share in &result.most_active {
        write_row(
            &mut writer,
            "most_active",
            &share.sender,
            share.count,
            &share.percentage_label(),
        )?;
    }

    for quarter in &result.quarterly {
        write_row(&mut writer, "quarterly", &quarter.label, quarter.count, "")?;
    }

    for day in &result.week_activity {
        write_row(&mut writer, "weekday", day.day.name(), day.count, "")?;
    }

    for month in &result.month_activity {
        write_row(&mut writer, "month", month.month.name(), month.count, "")?;
    }

    if config.include_heat_map {
        for (day, row) in result.heat_map.rows() {
            for (hour, &count) in row.iter().enumerate() {
                let label = format!("{} {hour:02}", day.name());
                write_row(&mut writer, "heat_map", &label, count, "")?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn write_row<W: Write>(
    writer: &mut csv::Writer<W>,
    section: &str,
    label: &str,
    count: usize,
    percentage: &str,
) -> Result<(), ChatlensError> {
    writer.write_record([section, label, count.to_string().as_str(), percentage])?;
    Ok(())
}
