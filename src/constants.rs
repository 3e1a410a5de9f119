//! Constants used throughout the application.
//!
//! This module contains all constants used in the siplog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "siplog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal drink journal for your daily cups";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the siplog data directory.
pub const ENV_VAR_SIPLOG_DIR: &str = "SIPLOG_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for siplog data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/siplog";

// File System Parameters
/// File name of the entry database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "siplog.db";
/// File name of the user settings file inside the data directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// Entry Defaults & Bounds
/// Rating assigned to a new entry when none is given.
pub const DEFAULT_RATING: u8 = 4;
/// Highest allowed rating. Zero is valid and means "unrated".
pub const MAX_RATING: u8 = 5;

// Export
/// Header row of the CSV export, in column order.
pub const CSV_HEADER: [&str; 9] = [
    "Date",
    "Drink Type",
    "Specific Drink",
    "Location",
    "Temperature",
    "Milk",
    "Price",
    "Rating",
    "Notes",
];
/// Date format for the CSV `Date` column.
pub const CSV_DATE_FORMAT: &str = "%Y-%m-%d";

// Settings Defaults
/// Reminder time format accepted from the CLI (HH:MM).
pub const REMINDER_TIME_FORMAT: &str = "%H:%M";
