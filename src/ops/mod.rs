//! High-level operations behind the CLI subcommands.
//!
//! Each operation orchestrates the store, the pure engines, and user
//! output for one command. Shared helpers for id resolution, price
//! parsing, and confirmation prompts live here.

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod settings;
pub mod show;
pub mod stats;

// Re-export commonly used functions
pub use add::add_entry;
pub use delete::{clear_entries, delete_entry};
pub use edit::edit_entry;
pub use export::export_entries;
pub use list::list_entries;
pub use settings::{set_settings, show_settings};
pub use show::show_entry;
pub use stats::show_stats;

use crate::errors::{AppResult, DatabaseError};
use crate::store::EntryStore;
use std::io::{self, Write};
use tracing::warn;
use uuid::Uuid;

/// First eight characters of the hyphenated id, used wherever an entry
/// is referenced in output.
pub(crate) fn short_id(id: &Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

/// Resolves a full id or a unique id prefix against the store.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` when nothing matches and
/// `AppError::Validation` when the prefix matches more than one entry.
pub(crate) fn resolve_entry_id(store: &EntryStore, raw: &str) -> AppResult<Uuid> {
    if let Ok(id) = Uuid::parse_str(raw) {
        return Ok(id);
    }

    let needle = raw.to_lowercase();
    let matches: Vec<Uuid> = store
        .all()?
        .iter()
        .map(|e| e.id)
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [] => Err(DatabaseError::NotFound(format!("No entry matches id '{}'", raw)).into()),
        [id] => Ok(*id),
        _ => Err(crate::errors::AppError::Validation(format!(
            "Id prefix '{}' matches {} entries",
            raw,
            matches.len()
        ))),
    }
}

/// Parses a price string from the CLI.
///
/// Input that does not parse as a number is refused and reported with a
/// warning; the caller leaves the field unset rather than failing the
/// whole operation.
pub(crate) fn parse_price(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring price input '{}': not a number", raw);
            None
        }
    }
}

/// Prompts the user for a yes/no answer with a default.
///
/// # Errors
///
/// Returns `AppError::Io` if stdin or stdout is unavailable.
pub(crate) fn prompt_yes_no(question: &str, default: bool) -> AppResult<bool> {
    let prompt = if default {
        format!("{} [Y/n] ", question)
    } else {
        format!("{} [y/N] ", question)
    };

    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        match input.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer yes or no."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryDraft;
    use tempfile::TempDir;

    fn open_test_store() -> (TempDir, EntryStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(&temp_dir.path().join("test.db")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_resolve_full_id() {
        let (_dir, mut store) = open_test_store();
        let entry = store.create(EntryDraft::default()).unwrap();

        let resolved = resolve_entry_id(&store, &entry.id.to_string()).unwrap();
        assert_eq!(resolved, entry.id);
    }

    #[test]
    fn test_resolve_unique_prefix() {
        let (_dir, mut store) = open_test_store();
        let entry = store.create(EntryDraft::default()).unwrap();

        let prefix = short_id(&entry.id);
        let resolved = resolve_entry_id(&store, &prefix).unwrap();
        assert_eq!(resolved, entry.id);
    }

    #[test]
    fn test_resolve_unknown_prefix_is_not_found() {
        let (_dir, store) = open_test_store();

        let result = resolve_entry_id(&store, "zzzzzzzz");
        match result {
            Err(crate::errors::AppError::Database(DatabaseError::NotFound(_))) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("4.50"), Some(4.5));
        assert_eq!(parse_price(" 3 "), Some(3.0));
        assert_eq!(parse_price("four fifty"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_short_id_length() {
        let id = Uuid::new_v4();
        assert_eq!(short_id(&id).len(), 8);
        assert!(id.to_string().starts_with(&short_id(&id)));
    }
}
