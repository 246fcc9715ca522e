//! Most active senders.

use std::collections::HashMap;

use serde::Serialize;

use crate::Message;

/// One row of the sender ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub sender: String,
    pub count: usize,
    /// Share of all messages, in percent, rounded to one decimal.
    pub percentage: f64,
}

impl SenderShare {
    fn new(sender: impl Into<String>, count: usize, total: usize) -> Self {
        Self {
            sender: sender.into(),
            count,
            percentage: percentage(count, total),
        }
    }

    /// Percentage formatted with one decimal, e.g. `"33.3"`.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage)
    }
}

/// `count / total * 100`, rounded to one decimal. Zero when `total` is zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = count as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Message count per sender, in order of each sender's first message.
pub fn sender_counts(messages: &[Message]) -> Vec<(&str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for msg in messages {
        let sender = msg.sender();
        match index.get(sender) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(sender, counts.len());
                counts.push((sender, 1));
            }
        }
    }

    counts
}

/// Ranks senders by message count over the whole conversation.
///
/// The `top_n` busiest senders are listed individually; everyone else is
/// summed into a single `others_label` entry, appended only when non-empty.
/// Equal counts keep first-appearance order. Each percentage is rounded on
/// its own, so they need not add up to exactly 100.
pub fn most_active(messages: &[Message], top_n: usize, others_label: &str) -> Vec<SenderShare> {
    let total = messages.len();
    let mut counts = sender_counts(messages);
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let split = top_n.min(counts.len());
    let others: usize = counts[split..].iter().map(|(_, count)| count).sum();

    let mut ranking: Vec<SenderShare> = counts[..split]
        .iter()
        .map(|&(sender, count)| SenderShare::new(sender, count, total))
        .collect();

    if others > 0 {
        ranking.push(SenderShare::new(others_label, others, total));
    }

    ranking
}
