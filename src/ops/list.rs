//! Browsing the journal.

use crate::cli::ListArgs;
use crate::errors::AppResult;
use crate::filter;
use crate::model::Entry;
use crate::ops::short_id;
use crate::store::EntryStore;
use tracing::debug;

/// Prints entries newest first, optionally filtered by drink type and a
/// case-insensitive search string.
///
/// # Errors
///
/// Returns an error if the store read fails.
pub fn list_entries(store: &EntryStore, args: ListArgs) -> AppResult<()> {
    let entries = store.all()?;
    let query = args.search.as_deref().unwrap_or("");
    let visible = filter::filtered(&entries, args.drink, query);

    debug!("{} of {} entries match", visible.len(), entries.len());

    if visible.is_empty() {
        println!("No entries.");
        return Ok(());
    }

    let limit = args.limit.unwrap_or(usize::MAX);
    let shown = visible.iter().take(limit);
    for entry in shown {
        println!("{}", format_line(entry));
    }

    if visible.len() > limit {
        println!("... and {} more", visible.len() - limit);
    }

    Ok(())
}

fn format_line(entry: &Entry) -> String {
    let mut line = format!(
        "{}  {}  {} ({})  {}  {}/5",
        short_id(&entry.id),
        entry.created_at.format("%Y-%m-%d"),
        entry.display_drink(),
        entry.drink_type,
        entry.temperature,
        entry.rating,
    );

    if !entry.location.is_empty() {
        line.push_str("  @ ");
        line.push_str(&entry.location);
    }

    line
}
