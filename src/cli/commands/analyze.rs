//! Analyze command implementation.
//!
//! Handles the analyze subcommands for streak analytics.

use chrono::Local;
use colored::Colorize;

use crate::cli::args::{AnalyzeCommands, OutputFormat};
use crate::core::streak::StreakResult;
use crate::error::HabitualError;
use crate::features::analyze::{best_streaks, current_streak, longest_streak, monthly_completions};
use crate::habits::{validate_name, Habit, HabitStore};
use crate::output::{format_best, format_monthly, format_streak};

/// Trailing window for monthly counts, so "May" means the last May.
const MONTH_WINDOW_DAYS: i64 = 365;

/// Execute analyze subcommands.
///
/// # Errors
///
/// Returns an error if a habit lookup fails, the month is out of range,
/// or a query fails.
pub fn analyze(
    store: &HabitStore,
    cmd: AnalyzeCommands,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    let today = Local::now().date_naive();

    match cmd {
        AnalyzeCommands::Best => {
            let report = best_streaks(store)?;
            format_best(&report, format)
        }

        AnalyzeCommands::Month { month, all_time } => {
            let window = if all_time {
                None
            } else {
                Some(MONTH_WINDOW_DAYS)
            };
            let report = monthly_completions(store, month, window, today)?;
            format_monthly(&report, format)
        }

        AnalyzeCommands::Current { name } => {
            let name = validate_name(&name)?;
            let habit = store.get(&name)?;
            let streak = current_streak(store, &habit, today)?;
            let output = format_streak(&habit.name, "current", streak, format)?;
            with_no_history_note(store, &habit, streak, output, format)
        }

        AnalyzeCommands::Longest { name } => {
            let name = validate_name(&name)?;
            let habit = store.get(&name)?;
            let streak = longest_streak(store, &habit)?;
            let output = format_streak(&habit.name, "longest", streak, format)?;
            with_no_history_note(store, &habit, streak, output, format)
        }
    }
}

/// Append a note when a zero streak is down to an empty history.
///
/// A zero is a valid answer, not an error; the note tells the user why.
fn with_no_history_note(
    store: &HabitStore,
    habit: &Habit,
    streak: StreakResult,
    output: String,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    if format == OutputFormat::Pretty
        && streak.count == 0
        && store.checkoff_count(habit.id)? == 0
    {
        return Ok(format!(
            "{output}\n  {}",
            format!("{} has no check-offs yet", habit.name).dimmed()
        ));
    }

    Ok(output)
}
