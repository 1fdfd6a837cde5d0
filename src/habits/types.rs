//! Habit types and input validation.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::streak::StreakUnit;
use crate::error::HabitualError;

/// How often a habit is meant to be done.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// Every day.
    Daily,
    /// Once a week, on the anchor weekday.
    Weekly,
}

impl Cadence {
    /// The cadence as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    /// Parse a stored cadence value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }

    /// Unit streaks of this cadence are measured in.
    #[must_use]
    pub const fn unit(self) -> StreakUnit {
        match self {
            Self::Daily => StreakUnit::Days,
            Self::Weekly => StreakUnit::Weeks,
        }
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Row id, resolved once when the habit is loaded.
    pub id: i64,
    /// Display name, normalized by [`validate_name`].
    pub name: String,
    /// What the habit is meant to improve.
    pub description: String,
    /// Daily or weekly.
    pub cadence: Cadence,
    /// Date the habit starts counting.
    pub start_date: NaiveDate,
    /// When the habit was created.
    pub created_at: NaiveDateTime,
}

impl Habit {
    /// The weekday weekly check-offs must land on to count.
    ///
    /// Derived from the start date; meaningless for daily habits.
    #[must_use]
    pub fn anchor_weekday(&self) -> Weekday {
        self.start_date.weekday()
    }

    /// Whether the habit has started by the given date.
    #[must_use]
    pub fn has_started(&self, today: NaiveDate) -> bool {
        today >= self.start_date
    }
}

/// Validate and normalize a habit name.
///
/// Names must be non-empty, must not start with whitespace, and must not
/// be purely numeric. The stored form is lower-cased with the first letter
/// capitalized, so "morning WALK" and "Morning walk" are the same habit.
///
/// # Errors
///
/// Returns `HabitualError::InvalidName` if the rules are not met.
pub fn validate_name(raw: &str) -> Result<String, HabitualError> {
    if raw.is_empty() {
        return Err(HabitualError::InvalidName("name is empty".to_string()));
    }
    if raw.starts_with(char::is_whitespace) {
        return Err(HabitualError::InvalidName(
            "name starts with whitespace".to_string(),
        ));
    }
    if raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(HabitualError::InvalidName(
            "name cannot be purely numeric".to_string(),
        ));
    }
    Ok(normalize_name(raw))
}

/// Validate a habit description.
///
/// # Errors
///
/// Returns `HabitualError::InvalidName` if the description is empty,
/// starts with whitespace, or is purely numeric.
pub fn validate_description(raw: &str) -> Result<String, HabitualError> {
    if raw.is_empty() {
        return Err(HabitualError::InvalidName(
            "description is empty".to_string(),
        ));
    }
    if raw.starts_with(char::is_whitespace) {
        return Err(HabitualError::InvalidName(
            "description starts with whitespace".to_string(),
        ));
    }
    if raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(HabitualError::InvalidName(
            "description cannot be purely numeric".to_string(),
        ));
    }
    Ok(raw.to_string())
}

/// Lower-case the whole name, then capitalize the first character.
fn normalize_name(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence_round_trip() {
        assert_eq!(Cadence::parse(Cadence::Daily.as_str()), Some(Cadence::Daily));
        assert_eq!(Cadence::parse(Cadence::Weekly.as_str()), Some(Cadence::Weekly));
        assert_eq!(Cadence::parse("monthly"), None);
    }

    #[test]
    fn test_cadence_unit() {
        assert_eq!(Cadence::Daily.unit(), StreakUnit::Days);
        assert_eq!(Cadence::Weekly.unit(), StreakUnit::Weeks);
    }

    #[test]
    fn test_validate_name_normalizes() {
        assert_eq!(validate_name("meditation").unwrap(), "Meditation");
        assert_eq!(validate_name("MORNING walk").unwrap(), "Morning walk");
        assert_eq!(validate_name("Water Plants").unwrap(), "Water plants");
    }

    #[test]
    fn test_validate_name_rejects() {
        assert!(validate_name("").is_err());
        assert!(validate_name(" meditation").is_err());
        assert!(validate_name("12345").is_err());
    }

    #[test]
    fn test_validate_name_allows_digits_mixed_in() {
        assert_eq!(validate_name("8 glasses of water").unwrap(), "8 glasses of water");
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("Improve mindfulness.").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description(" leading space").is_err());
        assert!(validate_description("42").is_err());
    }

    #[test]
    fn test_anchor_weekday() {
        // 2024-05-01 was a Wednesday
        let habit = Habit {
            id: 1,
            name: "Swimming".to_string(),
            description: "Improve cardio fitness.".to_string(),
            cadence: Cadence::Weekly,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(6, 0, 0)
                .unwrap(),
        };
        assert_eq!(habit.anchor_weekday(), Weekday::Wed);
    }

    #[test]
    fn test_has_started() {
        let habit = Habit {
            id: 1,
            name: "Python".to_string(),
            description: "Improve job performance.".to_string(),
            cadence: Cadence::Daily,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2024, 4, 30)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        };
        assert!(!habit.has_started(NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()));
        assert!(habit.has_started(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        assert!(habit.has_started(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()));
    }
}
