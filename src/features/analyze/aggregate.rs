//! Aggregations across a cadence group.
//!
//! The aggregator owns no habit collection of its own: it iterates the
//! store's habits explicitly, calls the streak engine per habit, and
//! reduces the results.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::streaks::longest_streak;
use crate::core::datetime::validate_month;
use crate::core::streak::StreakResult;
use crate::error::HabitualError;
use crate::habits::{Cadence, HabitStore};

/// Check-off count for one habit in the requested month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// Habit name.
    pub name: String,
    /// Number of check-offs in the month.
    pub count: usize,
}

/// Per-habit check-off counts for one calendar month, split by cadence.
///
/// Each group is sorted ascending by count, ties broken by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Month number, 1-12.
    pub month: u32,
    /// Daily habits with their counts.
    pub daily: Vec<MonthlyCount>,
    /// Weekly habits with their counts.
    pub weekly: Vec<MonthlyCount>,
}

/// The habit with the longest streak in one cadence group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestStreak {
    /// Habit name.
    pub name: String,
    /// Its longest streak.
    pub streak: StreakResult,
}

/// Longest-streak winners per cadence group.
///
/// A group with no habits has no winner. On equal streaks the habit
/// encountered first in store order wins; no stability is promised
/// beyond that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestReport {
    /// Winner among daily habits, if any exist.
    pub daily: Option<BestStreak>,
    /// Winner among weekly habits, if any exist.
    pub weekly: Option<BestStreak>,
}

/// Count check-offs falling in the given calendar month for every habit.
///
/// With `window_days` set, only check-offs within that many trailing days
/// of `today` count; the default caller passes 365 so that "May" means the
/// most recent May rather than every May on record.
///
/// # Errors
///
/// Returns `HabitualError::InvalidMonth` for a month outside 1-12, or a
/// database error if a history cannot be read.
pub fn monthly_completions(
    store: &HabitStore,
    month: u32,
    window_days: Option<i64>,
    today: NaiveDate,
) -> Result<MonthlyReport, HabitualError> {
    let month = validate_month(month)?;

    Ok(MonthlyReport {
        month,
        daily: group_counts(store, Cadence::Daily, month, window_days, today)?,
        weekly: group_counts(store, Cadence::Weekly, month, window_days, today)?,
    })
}

/// Month counts for one cadence group, ascending by count.
fn group_counts(
    store: &HabitStore,
    cadence: Cadence,
    month: u32,
    window_days: Option<i64>,
    today: NaiveDate,
) -> Result<Vec<MonthlyCount>, HabitualError> {
    let cutoff = window_days.map(|days| today - Duration::days(days));

    let mut counts = Vec::new();
    for habit in store.list(Some(cadence))? {
        let dates = store.completion_dates(habit.id)?;
        let count = dates
            .iter()
            .filter(|date| date.month() == month)
            .filter(|date| cutoff.is_none_or(|cutoff| **date > cutoff))
            .count();
        counts.push(MonthlyCount {
            name: habit.name,
            count,
        });
    }

    counts.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.name.cmp(&b.name)));
    Ok(counts)
}

/// Find the habit with the longest streak in each cadence group.
///
/// # Errors
///
/// Returns a database error if a history cannot be read.
pub fn best_streaks(store: &HabitStore) -> Result<BestReport, HabitualError> {
    Ok(BestReport {
        daily: group_best(store, Cadence::Daily)?,
        weekly: group_best(store, Cadence::Weekly)?,
    })
}

/// Longest-streak winner for one cadence group.
fn group_best(store: &HabitStore, cadence: Cadence) -> Result<Option<BestStreak>, HabitualError> {
    let mut best: Option<BestStreak> = None;

    for habit in store.list(Some(cadence))? {
        let streak = longest_streak(store, &habit)?;
        let is_better = best
            .as_ref()
            .is_none_or(|current| streak.count > current.streak.count);
        if is_better {
            best = Some(BestStreak {
                name: habit.name,
                streak,
            });
        }
    }

    Ok(best)
}
