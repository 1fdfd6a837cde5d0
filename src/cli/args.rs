use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::habits::Cadence;

#[derive(Parser)]
#[command(name = "habitual")]
#[command(about = "A habit tracker with streak analytics for your terminal")]
#[command(long_about = "habitual - track habits and their streaks

Record daily and weekly habits, check them off as you go, and analyze
your streaks: current streak, longest streak, and per-month totals.

QUICK START:
  habitual add \"Meditation\" -d \"Improve mindfulness\" -c daily
  habitual done meditation          Check off a habit for today
  habitual show meditation          Streaks for one habit
  habitual analyze best             Longest streaks across all habits

WEEKLY HABITS:
  A weekly habit is anchored to the weekday of its start date. Only
  check-offs on that weekday count toward streaks.

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  habitual <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// When omitted, the default comes from config.yaml.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the habit database
    ///
    /// Defaults to ~/.habitual/habitual.db. Useful for keeping separate
    /// habit sets, or for testing.
    #[arg(long, env = "HABITUAL_DB", global = true)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new habit
    ///
    /// Habits have a name, a description, a cadence (daily or weekly),
    /// and a start date. Names are case-insensitive: "morning walk" and
    /// "Morning Walk" are the same habit.
    ///
    /// For weekly habits the start date matters twice over: streaks only
    /// count check-offs on the weekday the habit started on.
    ///
    /// # Examples
    ///
    ///   habitual add "Meditation" -d "Improve mindfulness" -c daily
    ///   habitual add "Swimming" -d "Cardio fitness" -c weekly -s 2024-05-01
    #[command(alias = "a")]
    Add(AddArgs),

    /// Check off a habit
    ///
    /// Records a completion event. By default the event is stamped with
    /// the current time; use --at to back-date a check-off you forgot to
    /// record. Future timestamps are rejected.
    ///
    /// Checking off twice on the same day is fine - duplicates never
    /// break or extend a streak.
    ///
    /// # Examples
    ///
    ///   habitual done meditation
    ///   habitual done swimming --at "2024-05-08 07:15"
    #[command(alias = "d")]
    Done(DoneArgs),

    /// List habits
    ///
    /// Shows all habits, or only those of one cadence.
    ///
    /// # Examples
    ///
    ///   habitual list
    ///   habitual list --cadence weekly
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one habit with its streaks
    ///
    /// Displays the habit's metadata, check-off count, current streak,
    /// and longest streak.
    ///
    /// # Examples
    ///
    ///   habitual show meditation
    ///   habitual show swimming -o json
    Show(ShowArgs),

    /// Analyze streaks and check-off totals
    ///
    /// # Subcommands
    ///
    ///   best      Habit with the longest streak, per cadence
    ///   month     Check-off counts for a calendar month
    ///   current   Current streak for one habit
    ///   longest   Longest streak for one habit
    ///
    /// # Examples
    ///
    ///   habitual analyze best
    ///   habitual analyze month 5
    ///   habitual analyze current meditation
    Analyze(AnalyzeArgs),

    /// Reset a habit
    ///
    /// Deletes all recorded check-offs and sets a new start date
    /// (today unless --start-date is given). Streaks start over from
    /// zero.
    ///
    /// # Examples
    ///
    ///   habitual reset meditation
    ///   habitual reset swimming --start-date 2024-07-01
    Reset(ResetArgs),

    /// Delete a habit and its entire history
    ///
    /// # Examples
    ///
    ///   habitual delete meditation
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   habitual completions zsh > ~/.zfunc/_habitual
    Completions(CompletionsArgs),
}

/// Arguments for creating a habit.
#[derive(Args)]
pub struct AddArgs {
    /// Name of the habit
    pub name: String,

    /// What the habit is meant to improve
    #[arg(short, long)]
    pub description: String,

    /// How often the habit should be done
    #[arg(short, long, value_enum)]
    pub cadence: Cadence,

    /// Start date (YYYY-MM-DD); today if omitted, past dates rejected
    #[arg(short, long)]
    pub start_date: Option<String>,
}

/// Arguments for checking off a habit.
#[derive(Args)]
pub struct DoneArgs {
    /// Name of the habit to check off
    pub name: String,

    /// Completion timestamp (YYYY-MM-DD HH:MM); now if omitted
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for listing habits.
#[derive(Args)]
pub struct ListArgs {
    /// Only list habits of this cadence
    #[arg(short, long, value_enum)]
    pub cadence: Option<Cadence>,
}

/// Arguments for showing one habit.
#[derive(Args)]
pub struct ShowArgs {
    /// Name of the habit to show
    pub name: String,
}

/// Arguments for the analyze subcommands.
#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(subcommand)]
    pub command: AnalyzeCommands,
}

#[derive(Subcommand)]
pub enum AnalyzeCommands {
    /// Habit with the longest streak, per cadence group
    Best,

    /// Check-off counts for a calendar month, ascending
    ///
    /// Counts check-offs whose month matches, within the trailing 365
    /// days, so "month 5" means the most recent May. Use --all-time to
    /// count every year on record.
    Month {
        /// Month number, 1-12
        month: u32,

        /// Count matching months from every year, not just the last
        #[arg(long)]
        all_time: bool,
    },

    /// Current streak for one habit
    Current {
        /// Name of the habit
        name: String,
    },

    /// Longest streak for one habit
    Longest {
        /// Name of the habit
        name: String,
    },
}

/// Arguments for resetting a habit.
#[derive(Args)]
pub struct ResetArgs {
    /// Name of the habit to reset
    pub name: String,

    /// New start date (YYYY-MM-DD); today if omitted
    #[arg(short, long)]
    pub start_date: Option<String>,
}

/// Arguments for deleting a habit.
#[derive(Args)]
pub struct DeleteArgs {
    /// Name of the habit to delete
    pub name: String,
}

/// Arguments for generating shell completions.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
