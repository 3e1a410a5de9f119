//! Derived statistics over an entry snapshot.
//!
//! Pure aggregate computations with no side effects and no persistence.
//! The caller supplies the snapshot and, where calendar math is involved,
//! the reference date; nothing here reads the clock. Calendar days are
//! taken from the UTC timestamps entries are stored with.

use crate::model::Entry;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeSet;

/// Number of entries in the snapshot.
pub fn total_count(entries: &[Entry]) -> usize {
    entries.len()
}

/// Arithmetic mean of ratings across the snapshot.
///
/// Defined as 0 for an empty snapshot; this avoids division by zero as
/// an explicit policy, not an error.
pub fn average_rating(entries: &[Entry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }

    let sum: u32 = entries.iter().map(|e| u32::from(e.rating)).sum();
    f64::from(sum) / entries.len() as f64
}

/// The most-logged drink name in the snapshot.
///
/// Entries are grouped by specific drink, falling back to the drink-type
/// label when empty. Among groups with equal counts, the group whose
/// first member appears earliest in the snapshot wins. Returns `None`
/// for an empty snapshot.
pub fn favorite_drink(entries: &[Entry]) -> Option<String> {
    // Counts kept in first-seen order so the tie-break falls out of a
    // strictly-greater comparison.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        let name = entry.display_drink();
        match counts.iter_mut().find(|(key, _)| *key == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((name, count));
        }
    }

    best.map(|(name, _)| name.to_string())
}

/// Consecutive calendar days with at least one entry, counting backward
/// from `today`.
///
/// The walk stops, without incrementing, at the first gap. A snapshot
/// with no entry dated `today` yields 0, as does an empty snapshot.
pub fn current_streak(entries: &[Entry], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = entries
        .iter()
        .map(|e| e.created_at.date_naive())
        .collect();

    let mut streak = 0;
    let mut cursor = today;
    for day in days.iter().rev() {
        if *day > cursor {
            // Entries dated after the cursor cannot extend a backward walk
            continue;
        }
        if *day == cursor {
            streak += 1;
            cursor = cursor - Duration::days(1);
        } else {
            break;
        }
    }

    streak
}

/// Number of entries created in the same calendar month and year as
/// `reference`.
pub fn this_month_count(entries: &[Entry], reference: NaiveDate) -> usize {
    entries
        .iter()
        .filter(|e| {
            let day = e.created_at.date_naive();
            day.year() == reference.year() && day.month() == reference.month()
        })
        .count()
}
