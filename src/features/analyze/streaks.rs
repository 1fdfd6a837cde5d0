//! Per-habit streak queries.
//!
//! These resolve a habit's history from the store once, then dispatch to
//! the pure streak functions on the habit's cadence. History is re-read on
//! every call; nothing is cached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::streak::{self, StreakResult};
use crate::error::HabitualError;
use crate::habits::{Cadence, Habit, HabitStore};

/// Current and longest streak for one habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    /// Habit name.
    pub name: String,
    /// Habit cadence, determining the streak unit.
    pub cadence: Cadence,
    /// Streak including today (daily) or the current week (weekly).
    pub current: StreakResult,
    /// Longest streak anywhere in the history.
    pub longest: StreakResult,
}

/// Longest streak for a habit.
///
/// # Errors
///
/// Returns an error if the history cannot be read.
pub fn longest_streak(store: &HabitStore, habit: &Habit) -> Result<StreakResult, HabitualError> {
    let dates = store.completion_dates(habit.id)?;

    let count = match habit.cadence {
        Cadence::Daily => streak::longest_daily(&dates),
        Cadence::Weekly => streak::longest_weekly(&dates, habit.anchor_weekday()),
    };

    Ok(StreakResult {
        count,
        unit: habit.cadence.unit(),
    })
}

/// Current streak for a habit, relative to `today`.
///
/// # Errors
///
/// Returns an error if the history cannot be read.
pub fn current_streak(
    store: &HabitStore,
    habit: &Habit,
    today: NaiveDate,
) -> Result<StreakResult, HabitualError> {
    let dates = store.completion_dates(habit.id)?;

    let count = match habit.cadence {
        Cadence::Daily => streak::current_daily(&dates, today),
        Cadence::Weekly => streak::current_weekly(&dates, habit.anchor_weekday(), today),
    };

    Ok(StreakResult {
        count,
        unit: habit.cadence.unit(),
    })
}

/// Both streaks for a habit, read from the store in one pass.
///
/// # Errors
///
/// Returns an error if the history cannot be read.
pub fn streak_summary(
    store: &HabitStore,
    habit: &Habit,
    today: NaiveDate,
) -> Result<StreakSummary, HabitualError> {
    let dates = store.completion_dates(habit.id)?;
    let unit = habit.cadence.unit();

    let (current, longest) = match habit.cadence {
        Cadence::Daily => (
            streak::current_daily(&dates, today),
            streak::longest_daily(&dates),
        ),
        Cadence::Weekly => {
            let anchor = habit.anchor_weekday();
            (
                streak::current_weekly(&dates, anchor, today),
                streak::longest_weekly(&dates, anchor),
            )
        }
    };

    Ok(StreakSummary {
        name: habit.name.clone(),
        cadence: habit.cadence,
        current: StreakResult { count: current, unit },
        longest: StreakResult { count: longest, unit },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use chrono::{Duration, NaiveDateTime};

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn noon(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(12, 0, 0).unwrap()
    }

    fn test_store() -> HabitStore {
        HabitStore::with_database(Database::open_in_memory().unwrap())
    }

    fn daily_habit(store: &HabitStore) -> Habit {
        store
            .insert(
                "Meditation",
                "Improve mindfulness and presence.",
                Cadence::Daily,
                d(2024, 4, 30),
                noon(d(2024, 4, 30)),
            )
            .unwrap()
    }

    fn weekly_habit(store: &HabitStore) -> Habit {
        // 2024-05-01 is a Wednesday
        store
            .insert(
                "Swimming",
                "Improve cardio fitness.",
                Cadence::Weekly,
                d(2024, 5, 1),
                noon(d(2024, 5, 1)),
            )
            .unwrap()
    }

    #[test]
    fn test_no_history_is_zero_not_error() {
        let store = test_store();
        let habit = daily_habit(&store);

        let summary = streak_summary(&store, &habit, d(2024, 5, 23)).unwrap();
        assert_eq!(summary.current.count, 0);
        assert_eq!(summary.longest.count, 0);
        assert_eq!(summary.current.to_string(), "0 days");
    }

    #[test]
    fn test_daily_summary() {
        let store = test_store();
        let habit = daily_habit(&store);
        let today = d(2024, 5, 23);

        // A 10-day run, a gap on 05-11, then a 12-day run ending today
        for i in 0..10 {
            store
                .add_checkoff(habit.id, noon(d(2024, 5, 1) + Duration::days(i)))
                .unwrap();
        }
        for i in 0..12 {
            store
                .add_checkoff(habit.id, noon(d(2024, 5, 12) + Duration::days(i)))
                .unwrap();
        }

        let summary = streak_summary(&store, &habit, today).unwrap();
        assert_eq!(summary.longest, StreakResult::days(12));
        assert_eq!(summary.current, StreakResult::days(12));

        // The day after a missed day the current streak resets
        let summary = streak_summary(&store, &habit, d(2024, 5, 25)).unwrap();
        assert_eq!(summary.current, StreakResult::days(0));
        assert_eq!(summary.longest, StreakResult::days(12));
    }

    #[test]
    fn test_weekly_summary_ignores_off_anchor() {
        let store = test_store();
        let habit = weekly_habit(&store);

        // Five consecutive Wednesdays plus one Tuesday check-off
        for i in 0..5 {
            store
                .add_checkoff(habit.id, noon(d(2024, 5, 1) + Duration::weeks(i)))
                .unwrap();
        }
        store.add_checkoff(habit.id, noon(d(2024, 5, 21))).unwrap();

        let longest = longest_streak(&store, &habit).unwrap();
        assert_eq!(longest, StreakResult::weeks(5));

        let current = current_streak(&store, &habit, d(2024, 5, 30)).unwrap();
        assert_eq!(current, StreakResult::weeks(5));

        // Eight days after the last Wednesday the streak has lapsed
        let lapsed = current_streak(&store, &habit, d(2024, 6, 6)).unwrap();
        assert_eq!(lapsed, StreakResult::weeks(0));
    }

    #[test]
    fn test_reset_then_zero() {
        let store = test_store();
        let habit = daily_habit(&store);
        for i in 0..5 {
            store
                .add_checkoff(habit.id, noon(d(2024, 5, 1) + Duration::days(i)))
                .unwrap();
        }

        store.reset(habit.id, d(2024, 6, 1)).unwrap();
        let habit = store.get("Meditation").unwrap();

        let summary = streak_summary(&store, &habit, d(2024, 6, 1)).unwrap();
        assert_eq!(summary.longest.count, 0);
        assert_eq!(summary.current.count, 0);
    }
}
