//! Filter and search over an entry snapshot.
//!
//! Pure, non-mutating derivation of the visible subset: an optional
//! drink-type filter plus an optional case-insensitive substring search.
//! No ranking, no fuzzy matching; input ordering is preserved.

use crate::model::{DrinkType, Entry};

/// Whether an entry passes the given criteria.
///
/// The type filter passes when unset or equal to the entry's drink type.
/// The query passes when empty or a case-insensitive substring of the
/// specific drink, the location, or the notes.
pub fn matches(entry: &Entry, type_filter: Option<DrinkType>, query: &str) -> bool {
    if let Some(drink_type) = type_filter {
        if entry.drink_type != drink_type {
            return false;
        }
    }

    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    entry.specific_drink.to_lowercase().contains(&needle)
        || entry.location.to_lowercase().contains(&needle)
        || entry.notes.to_lowercase().contains(&needle)
}

/// Returns the entries matching the criteria, in input order.
pub fn filtered<'a>(
    entries: &'a [Entry],
    type_filter: Option<DrinkType>,
    query: &str,
) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| matches(entry, type_filter, query))
        .collect()
}
