//! Logging a new drink entry.

use crate::cli::AddArgs;
use crate::errors::AppResult;
use crate::model::{Entry, EntryDraft, Temperature};
use crate::ops::{parse_price, short_id};
use crate::settings::Settings;
use crate::store::EntryStore;
use std::fs;
use tracing::{debug, info};

/// Creates a new entry from the command-line fields.
///
/// Omitted fields take the capture defaults; the drink category defaults
/// to the configured default drink. A photo path is read and stored
/// inline with the entry.
///
/// # Errors
///
/// Returns an error if the photo file cannot be read, the fields fail
/// validation, or the store write fails.
pub fn add_entry(
    store: &mut EntryStore,
    settings: &Settings,
    args: AddArgs,
) -> AppResult<Entry> {
    info!("Logging a new drink");

    let photo = match &args.photo {
        Some(path) => {
            debug!("Reading photo from {:?}", path);
            Some(fs::read(path)?)
        }
        None => None,
    };

    let mut draft = EntryDraft {
        drink_type: args.drink.unwrap_or(settings.default_drink),
        temperature: if args.iced {
            Temperature::Iced
        } else {
            Temperature::Hot
        },
        photo,
        ..EntryDraft::default()
    };

    if let Some(name) = args.name {
        draft.specific_drink = name;
    }
    if let Some(location) = args.location {
        draft.location = location;
    }
    if let Some(milk) = args.milk {
        draft.milk_type = milk;
    }
    if let Some(raw) = &args.price {
        draft.price = parse_price(raw);
    }
    if let Some(rating) = args.rating {
        draft.rating = rating;
    }
    if let Some(notes) = args.notes {
        draft.notes = notes;
    }
    draft.mood = args.mood;
    for tag in args.tags {
        draft.add_tag(tag);
    }

    let entry = store.create(draft)?;

    println!("Logged {} ({})", entry.display_drink(), short_id(&entry.id));
    Ok(entry)
}
