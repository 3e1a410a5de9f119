//! Rewriting an existing entry.

use crate::cli::EditArgs;
use crate::errors::AppResult;
use crate::model::{Entry, EntryDraft};
use crate::ops::{parse_price, resolve_entry_id, short_id};
use crate::store::EntryStore;
use std::fs;
use tracing::info;

/// Applies the given field changes to an entry.
///
/// The store's update contract rewrites every mutable field, so the
/// current entry is loaded first and flags that were not given keep the
/// current values. `--tag` adds to the existing tags (after
/// `--clear-tags`, if given); the `--clear-*` flags unset optional
/// fields.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if the id does not resolve, or an
/// error if validation or the store write fails.
pub fn edit_entry(store: &mut EntryStore, args: EditArgs) -> AppResult<Entry> {
    let id = resolve_entry_id(store, &args.id)?;
    let existing = store.get(id)?;

    let price = if args.clear_price {
        None
    } else {
        match &args.price {
            // An unparseable price leaves the stored value alone
            Some(raw) => parse_price(raw).or(existing.price),
            None => existing.price,
        }
    };

    let mood = if args.clear_mood {
        None
    } else {
        args.mood.or(existing.mood)
    };

    let photo = if args.remove_photo {
        None
    } else {
        match &args.photo {
            Some(path) => Some(fs::read(path)?),
            None => existing.photo,
        }
    };

    let mut draft = EntryDraft {
        drink_type: args.drink.unwrap_or(existing.drink_type),
        specific_drink: args.name.unwrap_or(existing.specific_drink),
        location: args.location.unwrap_or(existing.location),
        temperature: args.temperature.unwrap_or(existing.temperature),
        milk_type: args.milk.unwrap_or(existing.milk_type),
        price,
        rating: args.rating.unwrap_or(existing.rating),
        notes: args.notes.unwrap_or(existing.notes),
        mood,
        tags: if args.clear_tags {
            Vec::new()
        } else {
            existing.tags
        },
        photo,
    };
    for tag in args.tags {
        draft.add_tag(tag);
    }

    let updated = store.update(id, draft)?;
    info!("Edited entry {}", id);

    println!(
        "Updated {} ({})",
        updated.display_drink(),
        short_id(&updated.id)
    );
    Ok(updated)
}
