//! Habit analytics.
//!
//! Streak queries for a single habit plus aggregations across a cadence
//! group:
//! - Current and longest streak, dispatched on the habit's cadence
//! - Check-off counts for a calendar month
//! - The habit with the longest streak per cadence group

pub mod aggregate;
pub mod streaks;

pub use aggregate::{best_streaks, monthly_completions, BestReport, BestStreak, MonthlyCount, MonthlyReport};
pub use streaks::{current_streak, longest_streak, streak_summary, StreakSummary};
