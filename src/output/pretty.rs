use chrono::NaiveDateTime;
use colored::Colorize;

use crate::core::datetime::TIMESTAMP_FORMAT;
use crate::core::streak::StreakResult;
use crate::features::analyze::{BestReport, MonthlyReport, StreakSummary};
use crate::habits::{Cadence, Habit};

/// Format a list of habits as a pretty table
pub fn format_habits_pretty(habits: &[Habit], title: &str) -> String {
    if habits.is_empty() {
        return format!("{} (0 habits)\n  No habits logged", title);
    }

    let mut output = format!("{} ({} habits)\n", title, habits.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for habit in habits {
        let cadence = match habit.cadence {
            Cadence::Daily => "daily ".cyan(),
            Cadence::Weekly => "weekly".magenta(),
        };

        let mut line = format!("{} {}", cadence, habit.name.bold());
        line.push_str(&format!("  since {}", habit.start_date.to_string().yellow()));

        if !habit.description.is_empty() {
            line.push_str(&format!("  {}", habit.description.dimmed()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single habit as a detail block
pub fn format_habit_pretty(habit: &Habit) -> String {
    let mut output = format!("{}\n", habit.name.bold());
    output.push_str(&format!("  {}: {}\n", "Description".dimmed(), habit.description));
    output.push_str(&format!("  {}: {}\n", "Cadence".dimmed(), habit.cadence));
    output.push_str(&format!("  {}: {}\n", "Start date".dimmed(), habit.start_date));

    if habit.cadence == Cadence::Weekly {
        output.push_str(&format!(
            "  {}: {}\n",
            "Anchor weekday".dimmed(),
            habit.anchor_weekday()
        ));
    }

    output
}

/// Format a habit with its streaks and check-off count
pub fn format_habit_detail_pretty(
    habit: &Habit,
    summary: &StreakSummary,
    checkoffs: i64,
) -> String {
    let mut output = format_habit_pretty(habit);
    output.push_str(&format!("  {}: {}\n", "Check-offs".dimmed(), checkoffs));
    output.push_str(&format!(
        "  {}: {}  {}: {}\n",
        "Current streak".dimmed(),
        colorize_streak(summary.current),
        "Longest streak".dimmed(),
        summary.longest
    ));

    if checkoffs == 0 {
        output.push_str(&format!("  {}\n", "No check-offs recorded yet".dimmed()));
    }

    output
}

/// Format a check-off confirmation
pub fn format_checkoff_pretty(habit: &Habit, completed_at: NaiveDateTime) -> String {
    let mut output = format!(
        "{} {} checked off ({})",
        "✓".green(),
        habit.name.bold(),
        completed_at.format(TIMESTAMP_FORMAT)
    );

    // Weekly check-offs only count on the anchor weekday; remind the user
    if habit.cadence == Cadence::Weekly {
        output.push('\n');
        output.push_str(
            &format!(
                "  {} counts toward streaks only when checked off on {}s",
                habit.name,
                habit.anchor_weekday()
            )
            .dimmed()
            .to_string(),
        );
    }

    output
}

/// Format a single streak value for one habit
pub fn format_streak_pretty(name: &str, label: &str, streak: StreakResult) -> String {
    format!(
        "{} has a {} of {}",
        name.bold(),
        label,
        colorize_streak(streak)
    )
}

/// Format the longest-streak winners per cadence group
pub fn format_best_pretty(report: &BestReport) -> String {
    let mut output = String::new();

    output.push_str(&"Daily habits".bold().to_string());
    output.push('\n');
    match &report.daily {
        Some(best) => output.push_str(&format!(
            "  Longest streak: {} with {}\n",
            best.name.bold(),
            colorize_streak(best.streak)
        )),
        None => output.push_str("  No daily habits logged\n"),
    }

    output.push('\n');
    output.push_str(&"Weekly habits".bold().to_string());
    output.push('\n');
    match &report.weekly {
        Some(best) => output.push_str(&format!(
            "  Longest streak: {} with {}\n",
            best.name.bold(),
            colorize_streak(best.streak)
        )),
        None => output.push_str("  No weekly habits logged\n"),
    }

    output
}

/// Format per-habit monthly check-off counts
pub fn format_monthly_pretty(report: &MonthlyReport, month_name: &str) -> String {
    let mut output = format!("{}\n", format!("Check-offs in {month_name}").bold());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    output.push_str(&"Daily habits".bold().to_string());
    output.push('\n');
    if report.daily.is_empty() {
        output.push_str("  No daily habits logged\n");
    }
    for entry in &report.daily {
        output.push_str(&format!("  {}: {}\n", entry.name, entry.count));
    }

    output.push('\n');
    output.push_str(&"Weekly habits".bold().to_string());
    output.push('\n');
    if report.weekly.is_empty() {
        output.push_str("  No weekly habits logged\n");
    }
    for entry in &report.weekly {
        output.push_str(&format!("  {}: {}\n", entry.name, entry.count));
    }

    output
}

/// Color a streak green when it is alive, dim when it is zero.
fn colorize_streak(streak: StreakResult) -> String {
    if streak.count > 0 {
        streak.to_string().green().to_string()
    } else {
        streak.to_string().dimmed().to_string()
    }
}
