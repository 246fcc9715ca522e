//! Human-readable text report.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;

use crate::analytics::{AnalysisResult, HOURS, HeatMap};
use crate::calendar::DayOfWeek;
use crate::config::ReportConfig;
use crate::error::ChatlensError;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Shades for heat map cells, from empty to busiest.
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Writes the text report to a file.
pub fn write_text(
    result: &AnalysisResult<'_>,
    output_path: &str,
    config: &ReportConfig,
) -> Result<(), ChatlensError> {
    let text = to_text(result, config);
    let mut file = File::create(output_path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

/// Renders the report as plain text.
pub fn to_text(result: &AnalysisResult<'_>, config: &ReportConfig) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = render(&mut out, result, config);
    out
}

fn render(
    out: &mut String,
    result: &AnalysisResult<'_>,
    config: &ReportConfig,
) -> std::fmt::Result {
    let stats = &result.stats;

    writeln!(out, "📊 Chat statistics ({})", result.filter)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "💬 Messages:  {}", stats.total_messages)?;
    writeln!(out, "📝 Words:     {}", stats.total_words)?;
    writeln!(out, "🖼  Media:     {}", stats.media_messages)?;
    writeln!(out, "🔗 Links:     {}", stats.total_urls)?;
    writeln!(out, "😀 Emoji:     {}", stats.total_emojis())?;

    let top_emojis = stats.top_emojis(config.top_emojis);
    if !top_emojis.is_empty() {
        writeln!(out)?;
        writeln!(out, "😀 Top emoji")?;
        let line: Vec<String> = top_emojis
            .iter()
            .map(|(emoji, count)| format!("{emoji} {count}"))
            .collect();
        writeln!(out, "   {}", line.join("  "))?;
    }

    if !result.most_active.is_empty() {
        writeln!(out)?;
        writeln!(out, "👥 Most active")?;
        let width = result
            .most_active
            .iter()
            .map(|s| s.sender.chars().count())
            .max()
            .unwrap_or(0);
        for share in &result.most_active {
            writeln!(
                out,
                "   {:<width$}  {:>6}  ({}%)",
                share.sender,
                share.count,
                share.percentage_label()
            )?;
        }
    }

    if !result.quarterly.is_empty() {
        writeln!(out)?;
        writeln!(out, "📈 Quarterly timeline")?;
        for quarter in &result.quarterly {
            writeln!(out, "   {:<8} {:>6}", quarter.label, quarter.count)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "📅 By weekday")?;
    for day in &result.week_activity {
        writeln!(out, "   {:<10} {:>6}", day.day.name(), day.count)?;
    }

    writeln!(out)?;
    writeln!(out, "🗓  By month")?;
    for month in &result.month_activity {
        writeln!(out, "   {:<10} {:>6}", month.month.name(), month.count)?;
    }

    if config.include_heat_map {
        writeln!(out)?;
        writeln!(out, "🔥 Hourly activity")?;
        render_heat_map(out, &result.heat_map)?;
    }

    if let Some((day, hour, count)) = result.heat_map.busiest() {
        writeln!(out)?;
        writeln!(
            out,
            "⏰ Busiest hour: {} {:02}:00 ({} messages)",
            day.name(),
            hour,
            count
        )?;
    }

    Ok(())
}

fn render_heat_map(out: &mut String, map: &HeatMap) -> std::fmt::Result {
    write!(out, "       ")?;
    for hour in (0..24).step_by(3) {
        write!(out, "{hour:<3}")?;
    }
    writeln!(out)?;

    for day in DayOfWeek::ALL {
        write!(out, "   {} ", day.short_name())?;
        for hour in 0..HOURS as u32 {
            write!(out, "{}", shade(map.intensity(day, hour)))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Maps an intensity in `0.0..=1.0` to a shade; any non-zero cell is visible.
fn shade(intensity: f64) -> char {
    if intensity <= 0.0 {
        return SHADES[0];
    }
    let steps = (SHADES.len() - 1) as f64;
    let idx = (intensity * steps).ceil() as usize;
    SHADES[idx.clamp(1, SHADES.len() - 1)]
}
