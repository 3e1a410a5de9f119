//! Error handling utilities for the siplog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use thiserror::Error;

/// Represents specific error cases that can occur during database operations.
///
/// This enum provides detailed, contextual error information for different failure modes
/// when interacting with the SQLite entry store.
///
/// # Examples
///
/// ```
/// use siplog::errors::DatabaseError;
///
/// let error = DatabaseError::NotFound("entry 123 not found".to_string());
/// assert!(format!("{}", error).contains("not found"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error (storage unavailable, write failure, corruption).
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// Requested entry not found in the store.
    ///
    /// Updates and deletes against a missing id report this rather than
    /// silently succeeding. The store is single-threaded, so hitting this
    /// indicates a logic bug in the caller, not a race.
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// Custom database error with detailed message.
    #[error("Database error: {0}")]
    Custom(String),
}

/// Represents error cases that can occur when reading or writing user settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    #[error("Failed to access settings file: {0}")]
    Io(#[from] io::Error),

    /// The settings file exists but does not parse as valid JSON.
    #[error("Settings file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Represents all possible errors that can occur in the siplog application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use siplog::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use siplog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected entry field values (rating out of range, negative price).
    #[error("Invalid entry: {0}")]
    Validation(String),

    /// Errors related to database operations.
    ///
    /// This variant uses a dedicated DatabaseError type to provide detailed
    /// information about what went wrong with the entry store.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Errors related to the user settings file.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
pub type AppResult<T> = Result<T, AppError>;
