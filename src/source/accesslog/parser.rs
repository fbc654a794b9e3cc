//! Access-log line parser
//!
//! One record per line, five whitespace-separated integer fields:
//! `year month day hour minute`. Field ranges are validated here so the
//! aggregation core only ever sees well-formed entries; the day check goes
//! through chrono to also reject impossible dates like Feb 30.

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::LogEntry;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum LineError {
    #[error("expected 5 fields, got {0}")]
    FieldCount(usize),

    #[error("field \"{0}\" is not an integer")]
    NotAnInteger(String),

    #[error("no such date: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("hour {0} out of range (0-23)")]
    HourOutOfRange(u32),

    #[error("minute {0} out of range (0-59)")]
    MinuteOutOfRange(u32),
}

fn int_field<T: std::str::FromStr>(raw: &str) -> Result<T, LineError> {
    raw.parse()
        .map_err(|_| LineError::NotAnInteger(raw.to_string()))
}

/// Parse one log line into an entry.
pub(crate) fn parse_line(line: &str) -> Result<LogEntry, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(LineError::FieldCount(fields.len()));
    }

    let year: i32 = int_field(fields[0])?;
    let month: u32 = int_field(fields[1])?;
    let day: u32 = int_field(fields[2])?;
    let hour: u32 = int_field(fields[3])?;
    let minute: u32 = int_field(fields[4])?;

    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(LineError::InvalidDate { year, month, day });
    }
    if hour > 23 {
        return Err(LineError::HourOutOfRange(hour));
    }
    if minute > 59 {
        return Err(LineError::MinuteOutOfRange(minute));
    }

    Ok(LogEntry {
        year,
        month,
        day,
        hour,
        minute,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_line() {
        let entry = parse_line("2024 3 5 9 30").unwrap();
        assert_eq!(entry.year, 2024);
        assert_eq!(entry.month, 3);
        assert_eq!(entry.day, 5);
        assert_eq!(entry.hour, 9);
        assert_eq!(entry.minute, 30);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let entry = parse_line("  2024   12  31   23  59 ").unwrap();
        assert_eq!(entry.month, 12);
        assert_eq!(entry.minute, 59);
    }

    #[test]
    fn rejects_short_and_long_lines() {
        assert_eq!(parse_line("2024 3 5 9"), Err(LineError::FieldCount(4)));
        assert_eq!(
            parse_line("2024 3 5 9 30 7"),
            Err(LineError::FieldCount(6))
        );
        assert_eq!(parse_line(""), Err(LineError::FieldCount(0)));
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert_eq!(
            parse_line("2024 mar 5 9 30"),
            Err(LineError::NotAnInteger("mar".to_string()))
        );
    }

    #[test]
    fn rejects_month_13_and_day_0() {
        assert!(matches!(
            parse_line("2024 13 5 9 30"),
            Err(LineError::InvalidDate { month: 13, .. })
        ));
        assert!(matches!(
            parse_line("2024 3 0 9 30"),
            Err(LineError::InvalidDate { day: 0, .. })
        ));
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(matches!(
            parse_line("2023 2 30 9 30"),
            Err(LineError::InvalidDate { .. })
        ));
        // 2024 is a leap year, Feb 29 is real.
        assert!(parse_line("2024 2 29 9 30").is_ok());
        assert!(matches!(
            parse_line("2023 2 29 9 30"),
            Err(LineError::InvalidDate { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_time_fields() {
        assert_eq!(
            parse_line("2024 3 5 24 30"),
            Err(LineError::HourOutOfRange(24))
        );
        assert_eq!(
            parse_line("2024 3 5 9 60"),
            Err(LineError::MinuteOutOfRange(60))
        );
        assert!(parse_line("2024 3 5 0 0").is_ok());
        assert!(parse_line("2024 3 5 23 59").is_ok());
    }
}
