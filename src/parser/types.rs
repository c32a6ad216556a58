//! Type definitions for the transcript parser.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Full month names indexed by `month_num - 1`.
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full weekday names in calendar order, Monday first.
pub(crate) const WEEKDAY_NAMES: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// Date component order used by the transcript's timestamp format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `d/m/y` stamps (the common export locale).
    DayFirst,
    /// `m/d/y` stamps.
    MonthFirst,
}

/// One parsed transcript entry with its calendar breakdown.
///
/// The breakdown fields are computed once at parse time so aggregation
/// queries read them directly instead of re-deriving them per pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Wall-clock date and time of the entry, minute precision.
    pub timestamp: NaiveDateTime,
    /// Sender name, or the group-notification sentinel for system events.
    pub user: String,
    /// Raw message body (may be the media-omitted sentinel).
    pub message: String,
    /// Calendar date of the entry.
    pub date: NaiveDate,
    pub year: i32,
    /// Full month name.
    pub month: &'static str,
    /// Month number, 1-12.
    pub month_num: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Full weekday name.
    pub day_name: &'static str,
    pub hour: u32,
    pub minute: u32,
    /// Hour-bucket label for the activity heatmap, e.g. "14-15".
    pub period: String,
}

impl Message {
    /// Build a record from its parsed parts, deriving the calendar fields.
    pub fn new(timestamp: NaiveDateTime, user: String, message: String) -> Self {
        let hour = timestamp.hour();
        Self {
            timestamp,
            user,
            message,
            date: timestamp.date(),
            year: timestamp.year(),
            month: month_name(timestamp.month()),
            month_num: timestamp.month(),
            day: timestamp.day(),
            day_name: weekday_name(timestamp.weekday()),
            hour,
            minute: timestamp.minute(),
            period: period_label(hour),
        }
    }
}

/// Result of parsing a transcript: the record table plus a count of entries
/// dropped because their timestamp did not parse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedChat {
    /// Records in original transcript order.
    pub messages: Vec<Message>,
    /// Entries recognized by the timestamp anchor but dropped as malformed.
    pub skipped: usize,
}

/// Full month name for a 1-based month number.
pub(crate) fn month_name(month_num: u32) -> &'static str {
    month_num
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Full weekday name.
pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Hour-bucket label, wrapping the upper bound at midnight ("23-0").
pub(crate) fn period_label(hour: u32) -> String {
    format!("{}-{}", hour, (hour + 1) % 24)
}
