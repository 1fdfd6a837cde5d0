//! Command implementations for habitual.
//!
//! Each command resolves its habit from the store once, performs the
//! operation, and returns the formatted output as a string. Printing is
//! left to `main`.

mod analyze;

pub use analyze::analyze;

use chrono::Local;
use clap::CommandFactory;
use colored::Colorize;

use crate::cli::args::{
    AddArgs, Cli, DeleteArgs, DoneArgs, ListArgs, OutputFormat, ResetArgs, ShowArgs,
};
use crate::core::datetime::{parse_checkoff, parse_start_date};
use crate::error::HabitualError;
use crate::features::analyze::streak_summary;
use crate::habits::{validate_description, validate_name, Cadence, HabitStore};
use crate::output::{format_checkoff, format_habit, format_habit_detail, format_habits, to_json};

/// Execute the add command: create a new habit.
///
/// # Errors
///
/// Returns an error if validation fails, the name is taken, or the
/// insert fails.
pub fn add(
    store: &HabitStore,
    args: AddArgs,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    let name = validate_name(&args.name)?;
    let description = validate_description(&args.description)?;

    if store.find_by_name(&name)?.is_some() {
        return Err(HabitualError::InvalidName(format!(
            "'{name}' already exists"
        )));
    }

    let now = Local::now().naive_local();
    let start_date = match args.start_date {
        Some(ref input) => parse_start_date(input, now.date())?,
        None => now.date(),
    };

    let habit = store.insert(&name, &description, args.cadence, start_date, now)?;
    format_habit(&habit, format)
}

/// Execute the done command: record a check-off.
///
/// # Errors
///
/// Returns an error if the habit does not exist, the timestamp is
/// invalid, or the habit has not started yet.
pub fn done(
    store: &HabitStore,
    args: DoneArgs,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    let name = validate_name(&args.name)?;
    let habit = store.get(&name)?;

    let now = Local::now().naive_local();
    let completed_at = match args.at {
        Some(ref input) => parse_checkoff(input, now)?,
        None => now,
    };

    if completed_at.date() < habit.start_date {
        return Err(HabitualError::InvalidDate(format!(
            "{} has not started yet: its start date is {}",
            habit.name, habit.start_date
        )));
    }

    store.add_checkoff(habit.id, completed_at)?;
    format_checkoff(&habit, completed_at, format)
}

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the query or output formatting fails.
pub fn list(
    store: &HabitStore,
    args: ListArgs,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    let habits = store.list(args.cadence)?;
    let title = match args.cadence {
        None => "Habits",
        Some(Cadence::Daily) => "Daily habits",
        Some(Cadence::Weekly) => "Weekly habits",
    };
    format_habits(&habits, title, format)
}

/// Execute the show command: one habit with its streaks.
///
/// # Errors
///
/// Returns an error if the habit does not exist or a query fails.
pub fn show(
    store: &HabitStore,
    args: ShowArgs,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    let name = validate_name(&args.name)?;
    let habit = store.get(&name)?;

    let today = Local::now().date_naive();
    let summary = streak_summary(store, &habit, today)?;
    let checkoffs = store.checkoff_count(habit.id)?;

    format_habit_detail(&habit, &summary, checkoffs, format)
}

/// Execute the reset command: clear history, set a new start date.
///
/// # Errors
///
/// Returns an error if the habit does not exist or the new start date is
/// invalid.
pub fn reset(
    store: &HabitStore,
    args: ResetArgs,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    let name = validate_name(&args.name)?;
    let habit = store.get(&name)?;

    let today = Local::now().date_naive();
    let start_date = match args.start_date {
        Some(ref input) => parse_start_date(input, today)?,
        None => today,
    };

    store.reset(habit.id, start_date)?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "habit": habit.name,
            "startDate": start_date.to_string(),
            "checkoffsCleared": true,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} reset: check-offs cleared, start date is now {}",
            "↺".yellow(),
            habit.name.bold(),
            start_date
        )),
    }
}

/// Execute the delete command.
///
/// # Errors
///
/// Returns an error if the habit does not exist or the delete fails.
pub fn delete(
    store: &HabitStore,
    args: DeleteArgs,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    let name = validate_name(&args.name)?;
    let habit = store.get(&name)?;

    store.delete(habit.id)?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "deleted": habit.name,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} deleted along with its history",
            "✗".red(),
            habit.name.bold()
        )),
    }
}

/// Generate shell completions for the given shell.
#[must_use]
pub fn completions(shell: clap_complete::Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "habitual", &mut buf);
    String::from_utf8(buf).unwrap_or_default()
}
