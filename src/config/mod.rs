//! Configuration management for the siplog application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It supports configuring the directory that
//! holds the entry database and the user settings file.
//!
//! # Environment Variables
//!
//! - `SIPLOG_DIR`: Path to the data directory (defaults to ~/.local/share/siplog)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DATABASE_FILE_NAME, DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_SIPLOG_DIR, SETTINGS_FILE_NAME,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Configuration for the siplog application.
///
/// This struct holds the configuration settings needed for the application:
/// the data directory containing the entry database and the settings file.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use siplog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
/// };
/// assert!(config.database_path().ends_with("siplog.db"));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where the entry database and settings file are stored.
    ///
    /// Loaded from the SIPLOG_DIR environment variable with a fallback
    /// to ~/.local/share/siplog if not specified.
    pub data_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Reads `SIPLOG_DIR`, falling back to `~/.local/share/siplog`. The path is
    /// expanded with `shellexpand` to handle `~` and environment variable
    /// references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// path is empty.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_SIPLOG_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty or
    /// not absolute.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// Path of the entry database inside the data directory.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Path of the user settings file inside the data directory.
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE_NAME)
    }

    /// Creates the data directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> AppResult<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }
}
