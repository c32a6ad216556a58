//! Type definitions for the statistics engine.

use chrono::NaiveDate;
use serde::Serialize;

use crate::parser::types::{WEEKDAY_NAMES, period_label};

/// Front-end label selecting the whole table instead of a single sender.
pub const OVERALL: &str = "Overall";

/// Which rows an engine query runs over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSelection {
    /// Every row in the table.
    Overall,
    /// Rows of a single sender.
    User(String),
}

impl UserSelection {
    /// Build a selection from a front-end label. The [`OVERALL`] label keeps
    /// everything, any other value selects that sender.
    pub fn from_name(name: &str) -> Self {
        if name == OVERALL {
            UserSelection::Overall
        } else {
            UserSelection::User(name.to_string())
        }
    }

    /// Whether rows of `user` pass this selection's filter.
    pub fn includes(&self, user: &str) -> bool {
        match self {
            UserSelection::Overall => true,
            UserSelection::User(name) => name == user,
        }
    }

    /// Display label for report headings.
    pub fn label(&self) -> &str {
        match self {
            UserSelection::Overall => OVERALL,
            UserSelection::User(name) => name,
        }
    }
}

/// Headline counters for one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChatStats {
    /// Rows remaining after the filter step.
    pub messages: usize,
    /// Whitespace-separated tokens across all message bodies.
    pub words: usize,
    /// Bodies equal to the media-omitted sentinel.
    pub media: usize,
    /// URL occurrences across all bodies (one body may contain several).
    pub links: usize,
}

/// Message volume of one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    /// Month number, 1-12.
    pub month_num: u32,
    /// Full month name.
    pub month: &'static str,
    /// Chart label, e.g. "January-2024".
    pub label: String,
    pub messages: usize,
}

/// Message volume of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Message volume of one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekdayCount {
    pub day_name: &'static str,
    pub messages: usize,
}

/// Message volume of one month name, all years combined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthCount {
    pub month: &'static str,
    pub messages: usize,
}

/// Weekday by hour-bucket activity matrix, zero-filled.
///
/// Rows follow calendar order Monday through Sunday; columns are the 24
/// hour buckets of the day. Rendering-only output, nothing computes on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityHeatmap {
    pub counts: [[usize; 24]; 7],
}

impl ActivityHeatmap {
    pub fn new() -> Self {
        Self { counts: [[0; 24]; 7] }
    }

    /// Row labels in matrix order.
    pub fn day_names() -> [&'static str; 7] {
        WEEKDAY_NAMES
    }

    /// Column labels in matrix order.
    pub fn period_labels() -> Vec<String> {
        (0..24).map(period_label).collect()
    }
}

impl Default for ActivityHeatmap {
    fn default() -> Self {
        Self::new()
    }
}

/// One ranked sender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserCount {
    pub user: String,
    pub messages: usize,
}

/// Share of the whole table attributed to one sender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub user: String,
    /// Percent of all table rows, rounded to two decimals.
    pub percent: f64,
}

/// Output of the busy-users query.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BusyUsers {
    /// Top senders by message count, descending.
    pub top: Vec<UserCount>,
    /// Percentage share per sender, every real sender included.
    pub shares: Vec<UserShare>,
}

/// One counted word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_name() {
        assert_eq!(UserSelection::from_name("Overall"), UserSelection::Overall);
        assert_eq!(UserSelection::from_name("Alice"), UserSelection::User("Alice".to_string()));
    }

    #[test]
    fn test_selection_includes() {
        let overall = UserSelection::Overall;
        assert!(overall.includes("Alice"));
        assert!(overall.includes("group_notification"));

        let alice = UserSelection::User("Alice".to_string());
        assert!(alice.includes("Alice"));
        assert!(!alice.includes("Bob"));
    }

    #[test]
    fn test_heatmap_labels() {
        assert_eq!(ActivityHeatmap::day_names()[0], "Monday");
        assert_eq!(ActivityHeatmap::day_names()[6], "Sunday");

        let periods = ActivityHeatmap::period_labels();
        assert_eq!(periods.len(), 24);
        assert_eq!(periods[0], "0-1");
        assert_eq!(periods[23], "23-0");
    }

    #[test]
    fn test_heatmap_starts_zeroed() {
        let heatmap = ActivityHeatmap::new();
        assert!(heatmap.counts.iter().all(|row| row.iter().all(|&c| c == 0)));
    }
}
