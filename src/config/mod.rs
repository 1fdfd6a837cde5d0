//! Configuration management for habitual.
//!
//! This module handles loading configuration from `~/.habitual/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig};
