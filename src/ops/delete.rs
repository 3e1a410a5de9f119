//! Removing entries.

use crate::errors::AppResult;
use crate::ops::{prompt_yes_no, resolve_entry_id, short_id};
use crate::store::EntryStore;
use tracing::info;

/// Deletes a single entry by id or unique id prefix.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if the id does not resolve; a
/// missing entry is never a silent success.
pub fn delete_entry(store: &mut EntryStore, raw_id: &str) -> AppResult<()> {
    let id = resolve_entry_id(store, raw_id)?;
    store.delete(id)?;

    println!("Deleted entry {}", short_id(&id));
    Ok(())
}

/// Deletes every entry after confirmation.
///
/// `assume_yes` skips the prompt (for scripted use). Clearing is
/// irreversible.
///
/// # Errors
///
/// Returns an error if the prompt or the store write fails.
pub fn clear_entries(store: &mut EntryStore, assume_yes: bool) -> AppResult<()> {
    let count = store.count()?;
    if count == 0 {
        println!("No entries to remove.");
        return Ok(());
    }

    if !assume_yes {
        let question = format!("Permanently delete all {} entries?", count);
        if !prompt_yes_no(&question, false)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let removed = store.delete_all()?;
    info!("Cleared journal ({} entries)", removed);

    println!("Removed {} entries.", removed);
    Ok(())
}
