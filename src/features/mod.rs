//! Feature modules for habitual.

pub mod analyze;
