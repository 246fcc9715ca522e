//! Dense activity histograms: weekday, month and the weekday × hour heat map.
//!
//! Every structure here has a fixed key set. All seven days, all twelve
//! months and all 168 heat map cells are present even when their count is
//! zero.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::SenderFilter;
use crate::Message;
use crate::calendar::{DayOfWeek, MonthName};

/// Hours in a heat map row.
pub const HOURS: usize = 24;

/// Message count for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DayCount {
    pub day: DayOfWeek,
    pub count: usize,
}

/// Message count for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MonthCount {
    pub month: MonthName,
    pub count: usize,
}

/// Counts messages per weekday, Sunday through Saturday.
///
/// Always returns seven entries.
pub fn week_activity(filter: &SenderFilter, messages: &[Message]) -> Vec<DayCount> {
    let mut counts = [0usize; 7];
    for msg in filter.apply(messages) {
        counts[msg.weekday().index()] += 1;
    }

    DayOfWeek::ALL
        .iter()
        .zip(counts)
        .map(|(&day, count)| DayCount { day, count })
        .collect()
}

/// Counts messages per month, January through December.
///
/// Always returns twelve entries. Months of different years share a bucket.
pub fn month_activity(filter: &SenderFilter, messages: &[Message]) -> Vec<MonthCount> {
    let mut counts = [0usize; 12];
    for msg in filter.apply(messages) {
        counts[msg.month_of_year() as usize] += 1;
    }

    MonthName::ALL
        .iter()
        .zip(counts)
        .map(|(&month, count)| MonthCount { month, count })
        .collect()
}

/// Builds the weekday × hour heat map.
pub fn heat_map(filter: &SenderFilter, messages: &[Message]) -> HeatMap {
    let mut map = HeatMap::new();
    for msg in filter.apply(messages) {
        map.record(msg.weekday(), msg.hour());
    }
    map
}

/// Message counts by weekday (rows, Sunday first) and hour of day (columns).
///
/// Serializes as `{"Sunday": {"0": n, ..., "23": n}, ...}`.
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::{SenderFilter, heat_map};
/// use chatlens::calendar::DayOfWeek;
/// use chatlens::parse;
///
/// let messages = parse("01/01/23, 9:00 am - Alice: hi\n01/01/23, 9:30 am - Bob: hey");
/// let map = heat_map(&SenderFilter::Overall, &messages);
///
/// assert_eq!(map.get(DayOfWeek::Sunday, 9), 2);
/// assert_eq!(map.max_count(), 2);
/// assert_eq!(map.intensity(DayOfWeek::Sunday, 9), 1.0);
/// assert_eq!(map.intensity(DayOfWeek::Monday, 9), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatMap {
    cells: [[usize; HOURS]; 7],
}

impl Default for HeatMap {
    fn default() -> Self {
        Self::new()
    }
}

impl HeatMap {
    /// Creates a map with all 168 cells at zero.
    pub fn new() -> Self {
        Self {
            cells: [[0; HOURS]; 7],
        }
    }

    fn record(&mut self, day: DayOfWeek, hour: u32) {
        if let Some(cell) = self.cells[day.index()].get_mut(hour as usize) {
            *cell += 1;
        }
    }

    /// Count for one cell. Hours outside 0-23 read as zero.
    pub fn get(&self, day: DayOfWeek, hour: u32) -> usize {
        self.cells[day.index()]
            .get(hour as usize)
            .copied()
            .unwrap_or(0)
    }

    /// The 24 hourly counts of one day.
    pub fn row(&self, day: DayOfWeek) -> &[usize; HOURS] {
        &self.cells[day.index()]
    }

    /// Iterates rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = (DayOfWeek, &[usize; HOURS])> {
        DayOfWeek::ALL.iter().map(|&day| (day, self.row(day)))
    }

    /// Number of cells, always 7 × 24.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().map(|row| row.len()).sum()
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Largest cell value, zero for an empty map.
    pub fn max_count(&self) -> usize {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Cell value normalized against [`max_count`](Self::max_count), in `0.0..=1.0`.
    ///
    /// Returns `0.0` everywhere when the map is empty.
    pub fn intensity(&self, day: DayOfWeek, hour: u32) -> f64 {
        let max = self.max_count();
        if max == 0 {
            return 0.0;
        }
        self.get(day, hour) as f64 / max as f64
    }

    /// The busiest cell as `(day, hour, count)`, earliest on ties.
    ///
    /// `None` when the map is empty.
    pub fn busiest(&self) -> Option<(DayOfWeek, u32, usize)> {
        let mut best: Option<(DayOfWeek, u32, usize)> = None;
        for (day, row) in self.rows() {
            for (hour, &count) in row.iter().enumerate() {
                if count > best.map_or(0, |(_, _, c)| c) {
                    best = Some((day, hour as u32, count));
                }
            }
        }
        best
    }
}

struct HourRow<'a>(&'a [usize; HOURS]);

impl Serialize for HourRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(HOURS))?;
        for (hour, count) in self.0.iter().enumerate() {
            map.serialize_entry(&(hour as u32), count)?;
        }
        map.end()
    }
}

impl Serialize for HeatMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DayOfWeek::ALL.len()))?;
        for (day, row) in self.rows() {
            map.serialize_entry(day.name(), &HourRow(row))?;
        }
        map.end()
    }
}
