//! Viewing and changing user settings.

use crate::cli::SettingsSetArgs;
use crate::constants::REMINDER_TIME_FORMAT;
use crate::errors::{AppError, AppResult};
use crate::settings::Settings;
use chrono::NaiveTime;
use std::path::Path;
use tracing::info;

/// Prints the current settings.
pub fn show_settings(settings: &Settings) {
    let or_dash = |s: &str| {
        if s.is_empty() {
            "-".to_string()
        } else {
            s.to_string()
        }
    };

    println!("Display name:  {}", or_dash(&settings.display_name));
    println!("Handle:        {}", or_dash(&settings.handle));
    println!("Dark mode:     {}", settings.dark_mode);
    println!("Reminder:      {}", settings.reminder_enabled);
    match settings.reminder_time {
        Some(time) => println!("Reminder time: {}", time.format(REMINDER_TIME_FORMAT)),
        None => println!("Reminder time: -"),
    }
    println!("Default drink: {}", settings.default_drink);
}

/// Applies the given changes and persists the settings file.
///
/// # Errors
///
/// Returns `AppError::Validation` if the reminder time does not parse as
/// HH:MM, or a settings error if the file cannot be written.
pub fn set_settings(
    settings: &mut Settings,
    settings_path: &Path,
    args: SettingsSetArgs,
) -> AppResult<()> {
    if let Some(display_name) = args.display_name {
        settings.display_name = display_name;
    }
    if let Some(handle) = args.handle {
        settings.handle = handle;
    }
    if let Some(dark_mode) = args.dark_mode {
        settings.dark_mode = dark_mode;
    }
    if let Some(reminder) = args.reminder {
        settings.reminder_enabled = reminder;
    }
    if let Some(raw) = args.reminder_time {
        let time = NaiveTime::parse_from_str(&raw, REMINDER_TIME_FORMAT).map_err(|_| {
            AppError::Validation(format!("reminder time '{}' is not in HH:MM format", raw))
        })?;
        settings.reminder_time = Some(time);
    }
    if let Some(default_drink) = args.default_drink {
        settings.default_drink = default_drink;
    }

    settings.save(settings_path)?;
    info!("Settings updated");

    println!("Settings saved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DrinkType;
    use tempfile::tempdir;

    fn no_changes() -> SettingsSetArgs {
        SettingsSetArgs {
            display_name: None,
            handle: None,
            dark_mode: None,
            reminder: None,
            reminder_time: None,
            default_drink: None,
        }
    }

    #[test]
    fn test_set_settings_persists_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();

        let args = SettingsSetArgs {
            display_name: Some("Robin".to_string()),
            dark_mode: Some(true),
            reminder_time: Some("08:30".to_string()),
            default_drink: Some(DrinkType::Matcha),
            ..no_changes()
        };

        set_settings(&mut settings, &path, args).unwrap();

        let reloaded = Settings::load(&path).unwrap();
        assert_eq!(reloaded.display_name, "Robin");
        assert!(reloaded.dark_mode);
        assert_eq!(
            reloaded.reminder_time,
            NaiveTime::from_hms_opt(8, 30, 0)
        );
        assert_eq!(reloaded.default_drink, DrinkType::Matcha);
        // Untouched fields keep their values
        assert!(!reloaded.reminder_enabled);
    }

    #[test]
    fn test_set_settings_rejects_bad_reminder_time() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();

        let args = SettingsSetArgs {
            reminder_time: Some("half past eight".to_string()),
            ..no_changes()
        };

        match set_settings(&mut settings, &path, args) {
            Err(AppError::Validation(msg)) => assert!(msg.contains("HH:MM")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
        // Nothing was written
        assert!(!path.exists());
    }
}
