//! Error types for habitual.
//!
//! All fallible operations in the crate return [`HabitualError`]. The `main`
//! binary converts it into a single error line on stderr.

use thiserror::Error;

/// Errors that can occur while running habitual.
#[derive(Error, Debug)]
pub enum HabitualError {
    /// Database open, migration, or query failure.
    #[error("database error: {0}")]
    Database(String),

    /// Configuration or path resolution failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization failure.
    #[error("serialization error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A habit name that matches nothing in the store.
    #[error("no habit named '{0}'")]
    NotFound(String),

    /// A date or timestamp that is malformed or out of range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A month argument outside 1-12.
    #[error("invalid month {0}: expected a value between 1 and 12")]
    InvalidMonth(u32),

    /// A habit name that fails the input rules.
    #[error("invalid habit name: {0}")]
    InvalidName(String),

    /// An I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
