//! JSON output formatting for habitual.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::json;

use crate::core::datetime::TIMESTAMP_FORMAT;
use crate::core::streak::StreakResult;
use crate::error::HabitualError;
use crate::habits::Habit;

/// Format habits as JSON
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_habits_json(habits: &[Habit], title: &str) -> Result<String, HabitualError> {
    let output = json!({
        "list": title,
        "count": habits.len(),
        "items": habits
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a check-off confirmation as JSON
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_checkoff_json(
    habit: &Habit,
    completed_at: NaiveDateTime,
) -> Result<String, HabitualError> {
    let output = json!({
        "habit": habit.name,
        "cadence": habit.cadence,
        "completedAt": completed_at.format(TIMESTAMP_FORMAT).to_string(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single streak value as JSON
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_streak_json(
    name: &str,
    kind: &str,
    streak: StreakResult,
) -> Result<String, HabitualError> {
    let output = json!({
        "habit": name,
        "kind": kind,
        "streak": streak,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, HabitualError> {
    Ok(serde_json::to_string_pretty(value)?)
}
