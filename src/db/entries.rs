//! Entry CRUD operations.
//!
//! This module provides functions for creating, reading, updating, and deleting
//! drink journal entries in the database. Higher-level semantics (fresh ids,
//! timestamps, change notification) live in `store`; these functions map rows.

use crate::errors::{AppResult, DatabaseError};
use crate::model::{DrinkType, Entry, MilkType, Mood, Temperature};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use tracing::debug;
use uuid::Uuid;

/// Column list shared by every SELECT, in `map_row` order.
const ENTRY_COLUMNS: &str = "id, drink_type, specific_drink, location, temperature, milk_type, \
     price, rating, notes, mood, tags, photo, created_at, updated_at";

fn text_error(
    idx: usize,
    e: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, e.into())
}

fn parse_timestamp(idx: usize, raw: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| text_error(idx, e))
}

/// Maps a database row to an [`Entry`].
fn map_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let id = Uuid::parse_str(&row.get::<_, String>(0)?).map_err(|e| text_error(0, e))?;
    let drink_type: DrinkType = row
        .get::<_, String>(1)?
        .parse()
        .map_err(|e| text_error(1, e))?;
    let temperature: Temperature = row
        .get::<_, String>(4)?
        .parse()
        .map_err(|e| text_error(4, e))?;
    let milk_type: MilkType = row
        .get::<_, String>(5)?
        .parse()
        .map_err(|e| text_error(5, e))?;
    let mood: Option<Mood> = match row.get::<_, Option<String>>(9)? {
        Some(raw) => Some(raw.parse().map_err(|e| text_error(9, e))?),
        None => None,
    };
    let tags: Vec<String> =
        serde_json::from_str(&row.get::<_, String>(10)?).map_err(|e| text_error(10, e))?;

    Ok(Entry {
        id,
        drink_type,
        specific_drink: row.get(2)?,
        location: row.get(3)?,
        temperature,
        milk_type,
        price: row.get(6)?,
        rating: row.get::<_, i64>(7)? as u8,
        notes: row.get(8)?,
        mood,
        tags,
        photo: row.get(11)?,
        created_at: parse_timestamp(12, &row.get::<_, String>(12)?)?,
        updated_at: parse_timestamp(13, &row.get::<_, String>(13)?)?,
    })
}

fn tags_json(entry: &Entry) -> AppResult<String> {
    serde_json::to_string(&entry.tags)
        .map_err(|e| DatabaseError::Custom(format!("Failed to serialize tags: {}", e)).into())
}

/// Inserts a fully-constructed journal entry.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_entry(conn: &Connection, entry: &Entry) -> AppResult<()> {
    debug!("Inserting entry {}", entry.id);

    conn.execute(
        r#"
        INSERT INTO entries (id, drink_type, specific_drink, location, temperature, milk_type,
                             price, rating, notes, mood, tags, photo, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
        "#,
        params![
            entry.id.to_string(),
            entry.drink_type.as_str(),
            entry.specific_drink,
            entry.location,
            entry.temperature.as_str(),
            entry.milk_type.as_str(),
            entry.price,
            entry.rating as i64,
            entry.notes,
            entry.mood.map(|m| m.as_str()),
            tags_json(entry)?,
            entry.photo,
            entry.created_at.to_rfc3339(),
            entry.updated_at.to_rfc3339(),
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(())
}

/// Retrieves an entry by id.
///
/// Returns `Ok(None)` if no entry exists with the given id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn get_entry(conn: &Connection, id: Uuid) -> AppResult<Option<Entry>> {
    debug!("Getting entry {}", id);

    let result = conn.query_row(
        &format!("SELECT {} FROM entries WHERE id = ?1", ENTRY_COLUMNS),
        params![id.to_string()],
        map_row,
    );

    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Lists every entry, most recently created first.
///
/// Entries sharing a `created_at` value are ordered most-recently-inserted
/// first (rowid descending) so the ordering is deterministic.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM entries ORDER BY created_at DESC, rowid DESC",
            ENTRY_COLUMNS
        ))
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt.query_map([], map_row).map_err(DatabaseError::Sqlite)?;

    let mut entries = Vec::new();
    for row in rows {
        entries.push(row.map_err(DatabaseError::Sqlite)?);
    }

    debug!("Listed {} entries", entries.len());
    Ok(entries)
}

/// Rewrites every mutable field of an existing entry.
///
/// `id` and `created_at` are never touched; the caller supplies the
/// refreshed `updated_at`.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no entry has the given id, or an
/// error if the database operation fails.
pub fn update_entry(conn: &Connection, entry: &Entry) -> AppResult<()> {
    debug!("Updating entry {}", entry.id);

    let rows_affected = conn
        .execute(
            r#"
            UPDATE entries
            SET drink_type = ?2, specific_drink = ?3, location = ?4, temperature = ?5,
                milk_type = ?6, price = ?7, rating = ?8, notes = ?9, mood = ?10,
                tags = ?11, photo = ?12, updated_at = ?13
            WHERE id = ?1
            "#,
            params![
                entry.id.to_string(),
                entry.drink_type.as_str(),
                entry.specific_drink,
                entry.location,
                entry.temperature.as_str(),
                entry.milk_type.as_str(),
                entry.price,
                entry.rating as i64,
                entry.notes,
                entry.mood.map(|m| m.as_str()),
                tags_json(entry)?,
                entry.photo,
                entry.updated_at.to_rfc3339(),
            ],
        )
        .map_err(DatabaseError::Sqlite)?;

    if rows_affected == 0 {
        return Err(
            DatabaseError::NotFound(format!("Entry with id {} not found", entry.id)).into(),
        );
    }

    Ok(())
}

/// Deletes an entry by id.
///
/// Deleting a missing id is an error, never a silent success.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no entry has the given id, or an
/// error if the database operation fails.
pub fn delete_entry(conn: &Connection, id: Uuid) -> AppResult<()> {
    debug!("Deleting entry {}", id);

    let rows_affected = conn
        .execute("DELETE FROM entries WHERE id = ?1", params![id.to_string()])
        .map_err(DatabaseError::Sqlite)?;

    if rows_affected == 0 {
        return Err(DatabaseError::NotFound(format!("Entry with id {} not found", id)).into());
    }

    Ok(())
}

/// Deletes every entry. Returns the number of entries removed.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn delete_all_entries(conn: &Connection) -> AppResult<usize> {
    debug!("Deleting all entries");

    let rows_affected = conn
        .execute("DELETE FROM entries", [])
        .map_err(DatabaseError::Sqlite)?;

    Ok(rows_affected)
}

/// Counts the stored entries.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn count_entries(conn: &Connection) -> AppResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
        .map_err(DatabaseError::Sqlite)?;

    Ok(count as usize)
}
