//! Derived statistics display.

use crate::errors::AppResult;
use crate::stats;
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::debug;

/// Computes and prints the aggregate view of the journal.
///
/// `today` is the caller's current date, captured once at startup so
/// every computation in an invocation agrees on it.
///
/// # Errors
///
/// Returns an error if the store read fails.
pub fn show_stats(store: &EntryStore, today: NaiveDate) -> AppResult<()> {
    let entries = store.all()?;
    debug!("Computing statistics over {} entries", entries.len());

    let favorite = stats::favorite_drink(&entries).unwrap_or_else(|| "none".to_string());

    println!("Entries:        {}", stats::total_count(&entries));
    println!("Average rating: {:.1}", stats::average_rating(&entries));
    println!("Favorite drink: {}", favorite);
    println!(
        "Current streak: {} day(s)",
        stats::current_streak(&entries, today)
    );
    println!(
        "This month:     {}",
        stats::this_month_count(&entries, today)
    );

    Ok(())
}
