//! Core computation and parsing for habitual.
//!
//! Everything in here is pure: no database access, no clock reads. The
//! streak engine receives its history and "today" from the caller.

pub mod datetime;
pub mod streak;
