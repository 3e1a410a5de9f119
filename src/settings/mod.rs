//! User preference collaborator.
//!
//! Settings hold display identity and UI-facing preferences as a simple
//! key-value record persisted as JSON in the data directory. They are
//! read by the CLI layer only; the entry store and the statistics engine
//! never consult them. The struct is passed explicitly to whatever needs
//! it rather than living in ambient process-wide state.

use crate::errors::{AppResult, SettingsError};
use crate::model::DrinkType;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// User-facing preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name shown in greetings and exports; free text.
    pub display_name: String,
    /// Short handle, free text.
    pub handle: String,
    pub dark_mode: bool,
    /// Whether the daily reminder is enabled. Scheduling itself is an
    /// OS-level concern outside this crate; only the preference is kept.
    pub reminder_enabled: bool,
    pub reminder_time: Option<NaiveTime>,
    /// Drink type pre-selected when logging a new entry.
    pub default_drink: DrinkType,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            display_name: String::new(),
            handle: String::new(),
            dark_mode: false,
            reminder_enabled: false,
            reminder_time: None,
            default_drink: DrinkType::Coffee,
        }
    }
}

impl Settings {
    /// Loads settings from the given file, falling back to defaults when
    /// the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Io` if an existing file cannot be read, or
    /// `SettingsError::Malformed` if it does not parse as settings JSON.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(path).map_err(SettingsError::Io)?;
        let settings = serde_json::from_str(&raw).map_err(SettingsError::Malformed)?;
        Ok(settings)
    }

    /// Writes the settings to the given file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(self).map_err(SettingsError::Malformed)?;
        fs::write(path, raw).map_err(SettingsError::Io)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }
}
