//! Full view of a single entry.

use crate::cli::ShowArgs;
use crate::errors::AppResult;
use crate::ops::resolve_entry_id;
use crate::store::EntryStore;
use std::fs;
use tracing::info;

/// Prints every field of one entry and optionally writes its photo out
/// to a file.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if the id does not resolve, or
/// `AppError::Io` if the photo cannot be written.
pub fn show_entry(store: &EntryStore, args: ShowArgs) -> AppResult<()> {
    let id = resolve_entry_id(store, &args.id)?;
    let entry = store.get(id)?;

    println!("Id:         {}", entry.id);
    println!("Drink:      {} ({})", entry.display_drink(), entry.drink_type);
    println!("Temperature: {}", entry.temperature);
    println!("Milk:       {}", entry.milk_type);
    match entry.price {
        Some(price) => println!("Price:      {:.2}", price),
        None => println!("Price:      -"),
    }
    println!("Rating:     {}/5", entry.rating);
    match entry.mood {
        Some(mood) => println!("Mood:       {}", mood),
        None => println!("Mood:       -"),
    }
    if !entry.location.is_empty() {
        println!("Location:   {}", entry.location);
    }
    if !entry.tags.is_empty() {
        println!("Tags:       {}", entry.tags.join(", "));
    }
    if !entry.notes.is_empty() {
        println!("Notes:      {}", entry.notes);
    }
    println!("Photo:      {}", match &entry.photo {
        Some(bytes) => format!("{} bytes", bytes.len()),
        None => "-".to_string(),
    });
    println!("Created:    {}", entry.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Updated:    {}", entry.updated_at.format("%Y-%m-%d %H:%M:%S UTC"));

    if let Some(path) = args.save_photo {
        match &entry.photo {
            Some(bytes) => {
                fs::write(&path, bytes)?;
                info!("Wrote photo to {:?}", path);
                println!("Saved photo to {}", path.display());
            }
            None => println!("Entry has no photo to save."),
        }
    }

    Ok(())
}
