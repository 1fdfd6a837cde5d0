//! Streak computation over completion histories.
//!
//! A completion history is a list of calendar dates on which a habit was
//! checked off, sorted most recent first. The store guarantees that
//! ordering; these functions do not re-sort.
//!
//! Several check-offs on the same calendar date collapse to a single
//! occurrence: an exact duplicate neither breaks nor extends a streak, in
//! any of the four scans. Weekly streaks only count check-offs landing on
//! the habit's anchor weekday; everything else is filtered out before the
//! scan.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Unit a streak is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakUnit {
    /// Consecutive calendar days.
    Days,
    /// Consecutive on-anchor weeks.
    Weeks,
}

impl StreakUnit {
    /// The unit as a display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
        }
    }
}

impl std::fmt::Display for StreakUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A streak length paired with its unit, e.g. "12 days" or "5 weeks".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    /// Number of consecutive periods.
    pub count: u32,
    /// Unit the count is measured in.
    pub unit: StreakUnit,
}

impl StreakResult {
    /// A streak measured in days.
    #[must_use]
    pub const fn days(count: u32) -> Self {
        Self {
            count,
            unit: StreakUnit::Days,
        }
    }

    /// A streak measured in weeks.
    #[must_use]
    pub const fn weeks(count: u32) -> Self {
        Self {
            count,
            unit: StreakUnit::Weeks,
        }
    }
}

impl std::fmt::Display for StreakResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.count, self.unit)
    }
}

/// Longest run of calendar-consecutive dates anywhere in the history.
///
/// `dates` must be sorted most recent first. Returns 0 for an empty
/// history, 1 for a single date.
#[must_use]
pub fn longest_daily(dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut longest = 1u32;
    let mut run = 1u32;

    for pair in dates.windows(2) {
        let (newer, older) = (pair[0], pair[1]);
        if older == newer - Duration::days(1) {
            run += 1;
        } else if older == newer {
            // same-day duplicate, collapses to one occurrence
        } else {
            longest = longest.max(run);
            run = 1;
        }
    }

    // The final run is never closed out inside the scan
    longest.max(run)
}

/// Longest run of consecutive on-anchor weeks anywhere in the history.
///
/// `dates` must be sorted most recent first. Check-offs not on `anchor`
/// are ignored entirely; a history with no on-anchor dates has no streak,
/// whatever else it contains.
#[must_use]
pub fn longest_weekly(dates: &[NaiveDate], anchor: Weekday) -> u32 {
    let filtered = on_anchor(dates, anchor);
    if filtered.is_empty() {
        return 0;
    }

    let mut longest = 1u32;
    let mut run = 1u32;

    for pair in filtered.windows(2) {
        let (newer, older) = (pair[0], pair[1]);
        if older == newer - Duration::weeks(1) {
            run += 1;
            longest = longest.max(run);
        } else if older == newer {
            // two check-offs on the same anchor date count once
        } else {
            run = 1;
        }
    }

    longest.max(run)
}

/// Length of the active run of consecutive days ending today.
///
/// Returns 0 unless the most recent date in the history is `today`;
/// a streak that does not reach today is not current, however long.
#[must_use]
pub fn current_daily(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&most_recent) = dates.first() else {
        return 0;
    };

    if most_recent != today {
        return 0;
    }

    let mut run = 1u32;

    for pair in dates.windows(2) {
        let (newer, older) = (pair[0], pair[1]);
        if older == newer - Duration::days(1) {
            run += 1;
        } else if older == newer {
            continue;
        } else {
            // only the run touching today matters
            break;
        }
    }

    run
}

/// Length of the active run of consecutive on-anchor weeks.
///
/// Returns 0 if the most recent on-anchor check-off is more than 7 days
/// before `today` - the streak has lapsed.
#[must_use]
pub fn current_weekly(dates: &[NaiveDate], anchor: Weekday, today: NaiveDate) -> u32 {
    let filtered = on_anchor(dates, anchor);
    let Some(&most_recent) = filtered.first() else {
        return 0;
    };

    if most_recent < today - Duration::weeks(1) {
        return 0;
    }

    let mut run = 1u32;

    for pair in filtered.windows(2) {
        let (newer, older) = (pair[0], pair[1]);
        if older == newer - Duration::weeks(1) {
            run += 1;
        } else if older == newer {
            continue;
        } else {
            break;
        }
    }

    run
}

/// Filter a descending history down to dates on the anchor weekday.
fn on_anchor(dates: &[NaiveDate], anchor: Weekday) -> Vec<NaiveDate> {
    dates
        .iter()
        .copied()
        .filter(|date| date.weekday() == anchor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Descending range of consecutive days, newest first.
    fn run_ending(end: NaiveDate, len: u32) -> Vec<NaiveDate> {
        (0..i64::from(len)).map(|i| end - Duration::days(i)).collect()
    }

    #[test]
    fn test_longest_daily_empty() {
        assert_eq!(longest_daily(&[]), 0);
    }

    #[test]
    fn test_longest_daily_single() {
        assert_eq!(longest_daily(&[d(2024, 5, 1)]), 1);
    }

    #[test]
    fn test_longest_daily_gap_free_equals_length() {
        let dates = run_ending(d(2024, 5, 23), 14);
        assert_eq!(longest_daily(&dates), 14);
    }

    #[test]
    fn test_longest_daily_two_runs() {
        // A 12-day run, a one-day gap, then a 10-day run
        let mut dates = run_ending(d(2024, 5, 23), 12);
        dates.extend(run_ending(d(2024, 5, 10), 10));
        assert_eq!(longest_daily(&dates), 12);
    }

    #[test]
    fn test_longest_daily_last_run_longest() {
        // The oldest run is the longest and is only closed by the final max
        let mut dates = run_ending(d(2024, 5, 23), 3);
        dates.extend(run_ending(d(2024, 5, 15), 8));
        assert_eq!(longest_daily(&dates), 8);
    }

    #[test]
    fn test_longest_daily_duplicates_ignored() {
        let plain = run_ending(d(2024, 5, 10), 5);
        let mut doubled = Vec::new();
        for date in &plain {
            doubled.push(*date);
            doubled.push(*date);
        }
        assert_eq!(longest_daily(&doubled), longest_daily(&plain));
        assert_eq!(longest_daily(&doubled), 5);
    }

    #[test]
    fn test_current_daily_empty() {
        assert_eq!(current_daily(&[], d(2024, 5, 23)), 0);
    }

    #[test]
    fn test_current_daily_not_today() {
        let dates = run_ending(d(2024, 5, 22), 6);
        assert_eq!(current_daily(&dates, d(2024, 5, 23)), 0);
    }

    #[test]
    fn test_current_daily_run_ending_today() {
        let today = d(2024, 5, 23);
        let dates = run_ending(today, 6);
        assert_eq!(current_daily(&dates, today), 6);
    }

    #[test]
    fn test_current_daily_stops_at_first_gap() {
        let today = d(2024, 5, 23);
        let mut dates = run_ending(today, 3);
        dates.extend(run_ending(d(2024, 5, 18), 10));
        assert_eq!(current_daily(&dates, today), 3);
    }

    #[test]
    fn test_current_daily_only_today() {
        let today = d(2024, 5, 23);
        assert_eq!(current_daily(&[today], today), 1);
    }

    #[test]
    fn test_current_daily_duplicates_ignored() {
        let today = d(2024, 5, 23);
        let dates = vec![today, today, d(2024, 5, 22), d(2024, 5, 22), d(2024, 5, 21)];
        assert_eq!(current_daily(&dates, today), 3);
    }

    #[test]
    fn test_longest_never_below_current() {
        let today = d(2024, 5, 23);
        let histories = [
            vec![],
            vec![today],
            run_ending(today, 4),
            run_ending(d(2024, 5, 20), 9),
            vec![today, d(2024, 5, 21), d(2024, 5, 20)],
        ];
        for dates in &histories {
            assert!(longest_daily(dates) >= current_daily(dates, today));
        }
    }

    // 2024-05-01 was a Wednesday; weekly fixtures anchor there.

    fn wednesdays(count: u32) -> Vec<NaiveDate> {
        (0..i64::from(count))
            .map(|i| d(2024, 5, 29) - Duration::weeks(i))
            .collect()
    }

    #[test]
    fn test_longest_weekly_empty() {
        assert_eq!(longest_weekly(&[], Weekday::Wed), 0);
    }

    #[test]
    fn test_longest_weekly_all_off_anchor() {
        // Tuesdays only, anchored on Wednesday: no streak at all
        let dates = vec![d(2024, 5, 21), d(2024, 5, 14), d(2024, 5, 7)];
        assert_eq!(longest_weekly(&dates, Weekday::Wed), 0);
    }

    #[test]
    fn test_longest_weekly_off_anchor_ignored() {
        // Five consecutive Wednesdays plus one Tuesday that must not count
        let mut dates = wednesdays(5);
        dates.push(d(2024, 5, 21));
        dates.sort_by(|a, b| b.cmp(a));
        assert_eq!(longest_weekly(&dates, Weekday::Wed), 5);
    }

    #[test]
    fn test_longest_weekly_broken_run() {
        // Wednesdays with one week missing: 2024-05-29, 05-22, then 05-08, 05-01
        let dates = vec![d(2024, 5, 29), d(2024, 5, 22), d(2024, 5, 8), d(2024, 5, 1)];
        assert_eq!(longest_weekly(&dates, Weekday::Wed), 2);
    }

    #[test]
    fn test_longest_weekly_single() {
        assert_eq!(longest_weekly(&[d(2024, 5, 1)], Weekday::Wed), 1);
    }

    #[test]
    fn test_longest_weekly_duplicate_anchor_dates_do_not_inflate() {
        let plain = wednesdays(4);
        let mut doubled = Vec::new();
        for date in &plain {
            doubled.push(*date);
            doubled.push(*date);
        }
        assert_eq!(longest_weekly(&doubled, Weekday::Wed), 4);
    }

    #[test]
    fn test_current_weekly_empty() {
        assert_eq!(current_weekly(&[], Weekday::Wed, d(2024, 5, 30)), 0);
    }

    #[test]
    fn test_current_weekly_lapsed() {
        // Most recent on-anchor check-off is 8 days before today
        let dates = wednesdays(5);
        let today = d(2024, 5, 29) + Duration::days(8);
        assert_eq!(current_weekly(&dates, Weekday::Wed, today), 0);
    }

    #[test]
    fn test_current_weekly_active() {
        let dates = wednesdays(5);
        let today = d(2024, 5, 30);
        assert_eq!(current_weekly(&dates, Weekday::Wed, today), 5);
    }

    #[test]
    fn test_current_weekly_exactly_one_week_old() {
        let dates = wednesdays(3);
        let today = d(2024, 5, 29) + Duration::weeks(1);
        assert_eq!(current_weekly(&dates, Weekday::Wed, today), 3);
    }

    #[test]
    fn test_current_weekly_stops_at_gap() {
        let dates = vec![d(2024, 5, 29), d(2024, 5, 22), d(2024, 5, 8)];
        assert_eq!(current_weekly(&dates, Weekday::Wed, d(2024, 5, 29)), 2);
    }

    #[test]
    fn test_current_weekly_off_anchor_only() {
        let dates = vec![d(2024, 5, 28)];
        assert_eq!(current_weekly(&dates, Weekday::Wed, d(2024, 5, 29)), 0);
    }

    #[test]
    fn test_current_weekly_duplicates_ignored() {
        let today = d(2024, 5, 29);
        let dates = vec![today, today, d(2024, 5, 22), d(2024, 5, 15)];
        assert_eq!(current_weekly(&dates, Weekday::Wed, today), 3);
    }

    #[test]
    fn test_streak_result_display() {
        assert_eq!(StreakResult::days(12).to_string(), "12 days");
        assert_eq!(StreakResult::weeks(5).to_string(), "5 weeks");
        assert_eq!(StreakResult::days(0).to_string(), "0 days");
    }
}
