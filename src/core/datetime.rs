//! Date and timestamp parsing for user input.
//!
//! Habit start dates are entered as `YYYY-MM-DD` and check-off timestamps
//! as `YYYY-MM-DD HH:MM`, matching the formats persisted in the database.
//! Range checks (no past start dates, no future check-offs) happen here,
//! before anything reaches the store or the streak engine.

use chrono::{Month, NaiveDate, NaiveDateTime};

use crate::error::HabitualError;

/// Format for habit start dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format for persisted check-off timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `HabitualError::InvalidDate` if the input does not match
/// [`DATE_FORMAT`].
pub fn parse_date(input: &str) -> Result<NaiveDate, HabitualError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        HabitualError::InvalidDate(format!(
            "'{input}' is not a date in the format YYYY-MM-DD"
        ))
    })
}

/// Parse a habit start date and reject dates in the past.
///
/// A habit can start today or on a future date; back-dating the start is
/// not allowed.
///
/// # Errors
///
/// Returns `HabitualError::InvalidDate` if the input is malformed or
/// earlier than `today`.
pub fn parse_start_date(input: &str, today: NaiveDate) -> Result<NaiveDate, HabitualError> {
    let date = parse_date(input)?;
    if date < today {
        return Err(HabitualError::InvalidDate(format!(
            "start date {date} is in the past"
        )));
    }
    Ok(date)
}

/// Parse a check-off timestamp and reject timestamps in the future.
///
/// # Errors
///
/// Returns `HabitualError::InvalidDate` if the input is malformed or
/// later than `now`.
pub fn parse_checkoff(input: &str, now: NaiveDateTime) -> Result<NaiveDateTime, HabitualError> {
    let timestamp = NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT).map_err(|_| {
        HabitualError::InvalidDate(format!(
            "'{input}' is not a timestamp in the format YYYY-MM-DD HH:MM"
        ))
    })?;

    if timestamp > now {
        return Err(HabitualError::InvalidDate(format!(
            "check-off time {} is in the future",
            timestamp.format(TIMESTAMP_FORMAT)
        )));
    }

    Ok(timestamp)
}

/// Validate a month number.
///
/// # Errors
///
/// Returns `HabitualError::InvalidMonth` unless `month` is between 1 and 12.
pub const fn validate_month(month: u32) -> Result<u32, HabitualError> {
    if month >= 1 && month <= 12 {
        Ok(month)
    } else {
        Err(HabitualError::InvalidMonth(month))
    }
}

/// English name of a month number (1-12).
///
/// # Errors
///
/// Returns `HabitualError::InvalidMonth` for values outside 1-12.
pub fn month_name(month: u32) -> Result<&'static str, HabitualError> {
    let month = validate_month(month)?;
    let named = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(HabitualError::InvalidMonth(month))?;
    Ok(named.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(parse_date("2024-05-01").unwrap(), d(2024, 5, 1));
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("05/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("not a date").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_start_date_today_ok() {
        let today = d(2024, 5, 1);
        assert_eq!(parse_start_date("2024-05-01", today).unwrap(), today);
    }

    #[test]
    fn test_parse_start_date_future_ok() {
        let today = d(2024, 5, 1);
        assert_eq!(parse_start_date("2024-06-15", today).unwrap(), d(2024, 6, 15));
    }

    #[test]
    fn test_parse_start_date_past_rejected() {
        let today = d(2024, 5, 1);
        assert!(parse_start_date("2024-04-30", today).is_err());
    }

    #[test]
    fn test_parse_checkoff_valid() {
        let now = d(2024, 5, 23).and_hms_opt(14, 30, 0).unwrap();
        let parsed = parse_checkoff("2024-05-23 08:00", now).unwrap();
        assert_eq!(parsed.format(TIMESTAMP_FORMAT).to_string(), "2024-05-23 08:00");
    }

    #[test]
    fn test_parse_checkoff_future_rejected() {
        let now = d(2024, 5, 23).and_hms_opt(14, 30, 0).unwrap();
        assert!(parse_checkoff("2024-05-23 15:00", now).is_err());
        assert!(parse_checkoff("2024-05-24 08:00", now).is_err());
    }

    #[test]
    fn test_parse_checkoff_bad_format() {
        let now = d(2024, 5, 23).and_hms_opt(14, 30, 0).unwrap();
        assert!(parse_checkoff("2024-05-23", now).is_err());
        assert!(parse_checkoff("2024-05-23T08:00", now).is_err());
    }

    #[test]
    fn test_validate_month() {
        assert_eq!(validate_month(1).unwrap(), 1);
        assert_eq!(validate_month(12).unwrap(), 12);
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(5).unwrap(), "May");
        assert_eq!(month_name(1).unwrap(), "January");
        assert!(month_name(0).is_err());
        assert!(month_name(13).is_err());
    }
}
