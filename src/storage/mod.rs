//! Storage layer for habitual.
//!
//! This module provides SQLite-based persistence for:
//! - Habit metadata (name, description, cadence, start date)
//! - Check-off events (completion timestamps)

mod database;
mod migrations;

pub use database::Database;
