//! The parsed chat message record.
//!
//! This module provides [`Message`], one timestamped, attributed line of a
//! transcript. Every calendar field the analytics need (year, month, day,
//! hour, weekday, month name) is derived once in [`Message::new`] and cached
//! on the record, so aggregations never re-derive dates.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chatlens::calendar::DayOfWeek;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Hello world");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.year(), 2023);
//! assert_eq!(msg.weekday(), DayOfWeek::Sunday);
//! assert_eq!(msg.month_name(), "January");
//! ```
//!
//! ## Serialization
//!
//! Derived fields are written out for consumers but ignored on input; they
//! are always recomputed from `timestamp`.
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(18, 5, 0).unwrap();
//! let msg = Message::new(ts, "Bob", "hi");
//! let json = serde_json::to_string(&msg)?;
//! assert!(json.contains("\"weekday\":\"Saturday\""));
//!
//! let back: Message = serde_json::from_str(&json)?;
//! assert_eq!(back, msg);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::calendar::{DayOfWeek, MonthName};

/// A single parsed transcript line.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Send time, no timezone |
/// | `sender` | `String` | Trimmed display name, exact-match key |
/// | `body` | `String` | Message text after the `Sender: ` prefix |
/// | `year`..`hour` | integers | Derived from `timestamp` |
/// | `weekday` | [`DayOfWeek`] | Derived from `timestamp` |
/// | `month_name` | [`MonthName`] | Derived from `timestamp` |
///
/// Fields are private so the derived values can never drift from the
/// timestamp; use the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MessageRecord")]
pub struct Message {
    timestamp: NaiveDateTime,
    sender: String,
    body: String,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    weekday: DayOfWeek,
    month_name: MonthName,
}

/// Input shape accepted when deserializing a [`Message`].
#[derive(Deserialize)]
struct MessageRecord {
    timestamp: NaiveDateTime,
    sender: String,
    body: String,
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Message::new(record.timestamp, record.sender, record.body)
    }
}

impl Message {
    /// Creates a message and derives its calendar fields.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let date = timestamp.date();
        let month = date.month();
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            year: date.year(),
            month,
            day: date.day(),
            hour: timestamp.hour(),
            weekday: DayOfWeek::from(date.weekday()),
            // chrono months are always 1..=12
            month_name: MonthName::ALL[month as usize - 1],
        }
    }

    /// Returns the send time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender's display name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Four-digit year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn weekday(&self) -> DayOfWeek {
        self.weekday
    }

    /// Full English weekday name, e.g. `"Monday"`.
    pub fn weekday_name(&self) -> &'static str {
        self.weekday.name()
    }

    pub fn month_of_year(&self) -> MonthName {
        self.month_name
    }

    /// Full English month name, e.g. `"June"`.
    pub fn month_name(&self) -> &'static str {
        self.month_name.name()
    }

    /// Calendar quarter, 1-4.
    pub fn quarter(&self) -> u32 {
        self.month_name.quarter()
    }

    /// Returns `true` if the body is exactly `placeholder`.
    pub fn is_placeholder(&self, placeholder: &str) -> bool {
        self.body == placeholder
    }
}
