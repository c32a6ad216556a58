//! Parse the date/time stamp that opens every transcript entry.
//!
//! Exports vary in two ways the parser has to absorb: the year may be two or
//! four digits, and the time may be 12-hour with an am/pm marker or plain
//! 24-hour. The date component order is a property of the export locale and
//! is selected by the caller.

use chrono::NaiveDateTime;

use super::types::DateOrder;

/// Stamp formats for day-first exports. Two-digit years and 12-hour clocks
/// are tried first so "24" resolves to 2024 rather than year 24.
const DAY_FIRST_FORMATS: [&str; 4] = ["%d/%m/%y, %I:%M %p", "%d/%m/%Y, %I:%M %p", "%d/%m/%y, %H:%M", "%d/%m/%Y, %H:%M"];

/// Stamp formats for month-first exports, same ordering rules.
const MONTH_FIRST_FORMATS: [&str; 4] = ["%m/%d/%y, %I:%M %p", "%m/%d/%Y, %I:%M %p", "%m/%d/%y, %H:%M", "%m/%d/%Y, %H:%M"];

/// Parse a stamp such as `01/01/24, 10:00 am` or `13/7/2023, 22:05`.
///
/// # Parameters
///
/// * `stamp` - The stamp text without the trailing entry separator
/// * `date_order` - Component order of the export locale
///
/// # Returns
///
/// `Some(timestamp)` if the stamp matches one of the known formats, `None` otherwise.
pub fn parse_stamp(stamp: &str, date_order: DateOrder) -> Option<NaiveDateTime> {
    // Some exporters emit a narrow no-break space before the am/pm marker.
    let normalized = stamp.replace('\u{202f}', " ");
    let normalized = normalized.trim();

    let formats = match date_order {
        DateOrder::DayFirst => &DAY_FIRST_FORMATS,
        DateOrder::MonthFirst => &MONTH_FIRST_FORMATS,
    };

    for format in formats {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(normalized, format) {
            return Some(timestamp);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_two_digit_year_12_hour() {
        let result = parse_stamp("01/01/24, 10:00 am", DateOrder::DayFirst);
        assert!(result.is_some());

        let timestamp = result.unwrap();
        assert_eq!(timestamp.year(), 2024);
        assert_eq!(timestamp.month(), 1);
        assert_eq!(timestamp.day(), 1);
        assert_eq!(timestamp.hour(), 10);
        assert_eq!(timestamp.minute(), 0);
    }

    #[test]
    fn test_parse_four_digit_year_24_hour() {
        let result = parse_stamp("13/7/2023, 22:05", DateOrder::DayFirst);
        assert!(result.is_some());

        let timestamp = result.unwrap();
        assert_eq!(timestamp.year(), 2023);
        assert_eq!(timestamp.month(), 7);
        assert_eq!(timestamp.day(), 13);
        assert_eq!(timestamp.hour(), 22);
        assert_eq!(timestamp.minute(), 5);
    }

    #[test]
    fn test_parse_noon_and_midnight_markers() {
        let noon = parse_stamp("5/6/24, 12:30 pm", DateOrder::DayFirst).unwrap();
        assert_eq!(noon.hour(), 12);

        let midnight = parse_stamp("5/6/24, 12:30 am", DateOrder::DayFirst).unwrap();
        assert_eq!(midnight.hour(), 0);
    }

    #[test]
    fn test_parse_uppercase_marker() {
        let result = parse_stamp("01/01/24, 10:00 AM", DateOrder::DayFirst);
        assert!(result.is_some());
        assert_eq!(result.unwrap().hour(), 10);
    }

    #[test]
    fn test_parse_narrow_no_break_space_before_marker() {
        let result = parse_stamp("01/01/24, 10:00\u{202f}am", DateOrder::DayFirst);
        assert!(result.is_some());
        assert_eq!(result.unwrap().hour(), 10);
    }

    #[test]
    fn test_parse_month_first_order() {
        let result = parse_stamp("12/31/23, 9:15 pm", DateOrder::MonthFirst);
        assert!(result.is_some());

        let timestamp = result.unwrap();
        assert_eq!(timestamp.month(), 12);
        assert_eq!(timestamp.day(), 31);
        assert_eq!(timestamp.hour(), 21);
    }

    #[test]
    fn test_parse_rejects_invalid_date() {
        assert!(parse_stamp("31/02/24, 10:00 am", DateOrder::DayFirst).is_none());
        assert!(parse_stamp("not a stamp", DateOrder::DayFirst).is_none());
    }
}
