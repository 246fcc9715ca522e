//! Quarterly message timeline.

use std::collections::BTreeMap;

use serde::Serialize;

use super::SenderFilter;
use crate::Message;

/// Message count for one calendar quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterCount {
    /// `Q{quarter}-{year}`, e.g. `Q2-2023`.
    pub label: String,
    pub year: i32,
    /// 1-4
    pub quarter: u32,
    pub count: usize,
}

impl QuarterCount {
    fn new(year: i32, quarter: u32, count: usize) -> Self {
        Self {
            label: format!("Q{quarter}-{year}"),
            year,
            quarter,
            count,
        }
    }
}

/// Counts messages per calendar quarter.
///
/// Only quarters with at least one message appear. Entries are ordered by
/// year, then quarter, so `Q4-2022` precedes `Q1-2023`.
pub fn quarterly(filter: &SenderFilter, messages: &[Message]) -> Vec<QuarterCount> {
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for msg in filter.apply(messages) {
        *buckets.entry((msg.year(), msg.quarter())).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|((year, quarter), count)| QuarterCount::new(year, quarter, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(sender: &str, y: i32, m: u32) -> Message {
        let ts = NaiveDate::from_ymd_opt(y, m, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Message::new(ts, sender, "x")
    }

    #[test]
    fn test_quarterly_groups_and_labels() {
        let messages = vec![
            msg("Alice", 2023, 1),
            msg("Bob", 2023, 3),
            msg("Alice", 2023, 4),
        ];
        let timeline = quarterly(&SenderFilter::Overall, &messages);
        assert_eq!(
            timeline,
            [QuarterCount::new(2023, 1, 2), QuarterCount::new(2023, 2, 1)]
        );
        assert_eq!(timeline[0].label, "Q1-2023");
        assert_eq!(timeline[1].label, "Q2-2023");
    }

    #[test]
    fn test_quarterly_orders_numerically_across_years() {
        // Textual sort would put "Q1-2024" before "Q4-2023"; year must win.
        let messages = vec![
            msg("Alice", 2024, 2),
            msg("Alice", 2023, 11),
            msg("Alice", 2022, 12),
        ];
        let labels: Vec<_> = quarterly(&SenderFilter::Overall, &messages)
            .into_iter()
            .map(|q| q.label)
            .collect();
        assert_eq!(labels, ["Q4-2022", "Q4-2023", "Q1-2024"]);
    }

    #[test]
    fn test_quarterly_sparse() {
        let messages = vec![msg("Alice", 2023, 1), msg("Alice", 2023, 12)];
        let timeline = quarterly(&SenderFilter::Overall, &messages);
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_quarterly_filtered() {
        let messages = vec![msg("Alice", 2023, 1), msg("Bob", 2023, 5)];
        let timeline = quarterly(&SenderFilter::from("Bob"), &messages);
        assert_eq!(timeline, [QuarterCount::new(2023, 2, 1)]);
        assert!(quarterly(&SenderFilter::from("Nobody"), &messages).is_empty());
    }
}
