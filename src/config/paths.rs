//! Path resolution for habitual configuration and data files.
//!
//! All habitual data is stored in `~/.habitual/`:
//! - `config.yaml` - Main configuration file
//! - `habitual.db` - SQLite database for habits and check-offs

use std::path::PathBuf;

use crate::error::HabitualError;

/// Paths to habitual configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.habitual/`
    pub root: PathBuf,
    /// Config file: `~/.habitual/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.habitual/habitual.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, HabitualError> {
        let home = std::env::var("HOME").map_err(|_| {
            HabitualError::Config("Could not determine home directory".to_string())
        })?;

        let root = PathBuf::from(home).join(".habitual");

        Ok(Self {
            config_file: root.join("config.yaml"),
            database: root.join("habitual.db"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("habitual.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), HabitualError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                HabitualError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".habitual"))
        })
    }
}
