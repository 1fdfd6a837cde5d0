//! Configuration settings for habitual.
//!
//! Settings are loaded from `~/.habitual/config.yaml`. A missing file
//! means defaults; a malformed file is an error rather than a silent
//! fallback.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::HabitualError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format when `--output` is not given.
    pub default_output: OutputFormat,
    /// Color output setting.
    pub color: ColorSetting,
    /// Database path override; `--database` and `HABITUAL_DB` win over it.
    pub database: Option<PathBuf>,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl Config {
    /// Load configuration from the config file, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(paths: &Paths) -> Result<Self, HabitualError> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&paths.config_file).map_err(|e| {
            HabitualError::Config(format!(
                "Failed to read {}: {e}",
                paths.config_file.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            HabitualError::Config(format!(
                "Failed to parse {}: {e}",
                paths.config_file.display()
            ))
        })
    }

    /// Apply the color setting to the global colored-output switch.
    pub fn apply_color(&self) {
        match self.general.color {
            ColorSetting::Auto => {}
            ColorSetting::Always => colored::control::set_override(true),
            ColorSetting::Never => colored::control::set_override(false),
        }
    }
}
