//! Habit domain types and persistence.
//!
//! A habit has a name, a description, a cadence (daily or weekly), and a
//! start date. Check-off events are stored separately and queried as a
//! descending list of completion dates for the streak engine.

mod store;
mod types;

pub use store::HabitStore;
pub use types::{validate_description, validate_name, Cadence, Habit};
