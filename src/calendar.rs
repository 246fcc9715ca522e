//! Fixed English calendar names.
//!
//! Weekday and month names are looked up from static tables rather than
//! formatted through a locale, so the same transcript yields the same labels
//! on every machine.
//!
//! Both enums iterate in the canonical display order used by the activity
//! views: weeks start on Sunday, years on January.
//!
//! ```
//! use chatlens::calendar::{DayOfWeek, MonthName};
//!
//! assert_eq!(DayOfWeek::ALL[0].name(), "Sunday");
//! assert_eq!(MonthName::from_number(6), Some(MonthName::June));
//! ```

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// All seven days in display order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Full English name, e.g. `"Monday"`.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }

    /// Three-letter abbreviation, as used for heat map row labels.
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }

    /// Position in [`DayOfWeek::ALL`] (Sunday = 0).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        DayOfWeek::ALL[day.num_days_from_sunday() as usize]
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A calendar month, January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MonthName {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl MonthName {
    /// All twelve months in display order.
    pub const ALL: [MonthName; 12] = [
        MonthName::January,
        MonthName::February,
        MonthName::March,
        MonthName::April,
        MonthName::May,
        MonthName::June,
        MonthName::July,
        MonthName::August,
        MonthName::September,
        MonthName::October,
        MonthName::November,
        MonthName::December,
    ];

    /// Looks up a month from its 1-based number.
    pub fn from_number(month: u32) -> Option<Self> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        MonthName::ALL.get(idx).copied()
    }

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Full English name, e.g. `"June"`.
    pub fn name(self) -> &'static str {
        match self {
            MonthName::January => "January",
            MonthName::February => "February",
            MonthName::March => "March",
            MonthName::April => "April",
            MonthName::May => "May",
            MonthName::June => "June",
            MonthName::July => "July",
            MonthName::August => "August",
            MonthName::September => "September",
            MonthName::October => "October",
            MonthName::November => "November",
            MonthName::December => "December",
        }
    }

    /// Calendar quarter (1-4) the month falls in.
    pub fn quarter(self) -> u32 {
        self.number().div_ceil(3)
    }
}

impl std::fmt::Display for MonthName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_order_starts_on_sunday() {
        let names: Vec<_> = DayOfWeek::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday"
            ]
        );
    }

    #[test]
    fn test_from_chrono_weekday() {
        assert_eq!(DayOfWeek::from(Weekday::Sun), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::from(Weekday::Mon), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from(Weekday::Sat), DayOfWeek::Saturday);
    }

    #[test]
    fn test_short_name() {
        assert_eq!(DayOfWeek::Wednesday.short_name(), "Wed");
    }

    #[test]
    fn test_month_from_number() {
        assert_eq!(MonthName::from_number(1), Some(MonthName::January));
        assert_eq!(MonthName::from_number(12), Some(MonthName::December));
        assert_eq!(MonthName::from_number(0), None);
        assert_eq!(MonthName::from_number(13), None);
    }

    #[test]
    fn test_month_quarter() {
        assert_eq!(MonthName::January.quarter(), 1);
        assert_eq!(MonthName::March.quarter(), 1);
        assert_eq!(MonthName::April.quarter(), 2);
        assert_eq!(MonthName::September.quarter(), 3);
        assert_eq!(MonthName::December.quarter(), 4);
    }

    #[test]
    fn test_month_number_roundtrip() {
        for month in MonthName::ALL {
            assert_eq!(MonthName::from_number(month.number()), Some(month));
        }
    }
}
