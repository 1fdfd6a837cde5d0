//! Output formatting for habitual.
//!
//! This module provides formatters for displaying habits and streak
//! analytics in pretty (colored) and JSON form.

mod json;
mod pretty;

use chrono::NaiveDateTime;

use crate::cli::args::OutputFormat;
use crate::core::datetime::month_name;
use crate::core::streak::StreakResult;
use crate::error::HabitualError;
use crate::features::analyze::{BestReport, MonthlyReport, StreakSummary};
use crate::habits::Habit;

pub use json::*;
pub use pretty::*;

/// Format a list of habits based on output format
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_habits(
    habits: &[Habit],
    title: &str,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(habits, title)),
        OutputFormat::Json => format_habits_json(habits, title),
    }
}

/// Format a single habit based on output format
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_habit(habit: &Habit, format: OutputFormat) -> Result<String, HabitualError> {
    match format {
        OutputFormat::Pretty => Ok(format_habit_pretty(habit)),
        OutputFormat::Json => to_json(habit),
    }
}

/// Format a habit with streaks and check-off count
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_habit_detail(
    habit: &Habit,
    summary: &StreakSummary,
    checkoffs: i64,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    match format {
        OutputFormat::Pretty => Ok(format_habit_detail_pretty(habit, summary, checkoffs)),
        OutputFormat::Json => to_json(&serde_json::json!({
            "habit": habit,
            "checkoffs": checkoffs,
            "current": summary.current,
            "longest": summary.longest,
        })),
    }
}

/// Format a check-off confirmation
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_checkoff(
    habit: &Habit,
    completed_at: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    match format {
        OutputFormat::Pretty => Ok(format_checkoff_pretty(habit, completed_at)),
        OutputFormat::Json => format_checkoff_json(habit, completed_at),
    }
}

/// Format a single streak value
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_streak(
    name: &str,
    kind: &str,
    streak: StreakResult,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    match format {
        OutputFormat::Pretty => Ok(format_streak_pretty(name, &format!("{kind} streak"), streak)),
        OutputFormat::Json => format_streak_json(name, kind, streak),
    }
}

/// Format the longest-streak winners per cadence group
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_best(report: &BestReport, format: OutputFormat) -> Result<String, HabitualError> {
    match format {
        OutputFormat::Pretty => Ok(format_best_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}

/// Format per-habit monthly check-off counts
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails, or
/// `HabitualError::InvalidMonth` if the report carries a bad month.
pub fn format_monthly(
    report: &MonthlyReport,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    match format {
        OutputFormat::Pretty => Ok(format_monthly_pretty(report, month_name(report.month)?)),
        OutputFormat::Json => to_json(report),
    }
}
