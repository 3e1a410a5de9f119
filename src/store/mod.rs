//! The entry store: the only write path in the system.
//!
//! `EntryStore` owns the database and layers entry semantics over the
//! row-level operations in `db::entries`: fresh ids and timestamps on
//! create, full-field rewrites on update, and a change-notification
//! contract. Every mutation durably persists before returning, so readers
//! only ever observe committed state.
//!
//! # Change notification
//!
//! Consumers that mirror the entry list (the way the original capture UI
//! auto-refreshed) call [`EntryStore::subscribe`] and re-read
//! [`EntryStore::all`] whenever an event arrives. The store emits one
//! event after each successful mutation and prunes subscribers whose
//! receiving end has been dropped.

use crate::db::Database;
use crate::db::entries;
use crate::errors::{AppResult, DatabaseError};
use crate::model::{dedup_tags, Entry, EntryDraft};
use chrono::Utc;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};
use tracing::{debug, info};
use uuid::Uuid;

/// Emitted after each successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    Created(Uuid),
    Updated(Uuid),
    Deleted(Uuid),
    /// Every entry was removed by an explicit clear.
    Cleared,
}

/// Durable, exclusively-owning collection of journal entries.
pub struct EntryStore {
    db: Database,
    subscribers: Vec<Sender<ChangeEvent>>,
}

impl EntryStore {
    /// Opens the store at the given database path, creating the file and
    /// schema on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be initialized.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        let db = Database::open(db_path)?;
        db.initialize_schema()?;
        Ok(EntryStore {
            db,
            subscribers: Vec::new(),
        })
    }

    /// Registers a change subscriber.
    ///
    /// The returned receiver yields one [`ChangeEvent`] per successful
    /// mutation from this point on.
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, event: ChangeEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    /// Constructs and persists a new entry from the draft.
    ///
    /// A fresh id is assigned and `created_at = updated_at = now`. Tags
    /// are deduplicated, keeping first occurrences.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the draft fails validation, or a
    /// database error if the write fails (in which case nothing was
    /// stored).
    pub fn create(&mut self, draft: EntryDraft) -> AppResult<Entry> {
        draft.validate()?;

        let now = Utc::now();
        let entry = Entry {
            id: Uuid::new_v4(),
            drink_type: draft.drink_type,
            specific_drink: draft.specific_drink,
            location: draft.location,
            temperature: draft.temperature,
            milk_type: draft.milk_type,
            price: draft.price,
            rating: draft.rating,
            notes: draft.notes,
            mood: draft.mood,
            tags: dedup_tags(draft.tags),
            photo: draft.photo,
            created_at: now,
            updated_at: now,
        };

        let conn = self.db.get_conn()?;
        entries::insert_entry(&conn, &entry)?;
        drop(conn);

        info!("Created entry {}", entry.id);
        self.notify(ChangeEvent::Created(entry.id));
        Ok(entry)
    }

    /// Returns every stored entry, most recently created first.
    ///
    /// Entries with equal creation times are ordered most-recently-inserted
    /// first, so the ordering is deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn all(&self) -> AppResult<Vec<Entry>> {
        let conn = self.db.get_conn()?;
        entries::list_entries(&conn)
    }

    /// Retrieves a single entry by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the id does not exist.
    pub fn get(&self, id: Uuid) -> AppResult<Entry> {
        let conn = self.db.get_conn()?;
        entries::get_entry(&conn, id)?
            .ok_or_else(|| DatabaseError::NotFound(format!("Entry with id {} not found", id)).into())
    }

    /// Replaces every mutable field of the identified entry with the
    /// draft's values and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the draft fails validation, or
    /// `DatabaseError::NotFound` if the id does not exist.
    pub fn update(&mut self, id: Uuid, draft: EntryDraft) -> AppResult<Entry> {
        draft.validate()?;

        let conn = self.db.get_conn()?;
        let existing = entries::get_entry(&conn, id)?
            .ok_or_else(|| DatabaseError::NotFound(format!("Entry with id {} not found", id)))?;

        let entry = Entry {
            id,
            drink_type: draft.drink_type,
            specific_drink: draft.specific_drink,
            location: draft.location,
            temperature: draft.temperature,
            milk_type: draft.milk_type,
            price: draft.price,
            rating: draft.rating,
            notes: draft.notes,
            mood: draft.mood,
            tags: dedup_tags(draft.tags),
            photo: draft.photo,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        entries::update_entry(&conn, &entry)?;
        drop(conn);

        debug!("Updated entry {}", id);
        self.notify(ChangeEvent::Updated(id));
        Ok(entry)
    }

    /// Removes the identified entry.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the id does not exist; a
    /// missing id never deletes silently.
    pub fn delete(&mut self, id: Uuid) -> AppResult<()> {
        let conn = self.db.get_conn()?;
        entries::delete_entry(&conn, id)?;
        drop(conn);

        info!("Deleted entry {}", id);
        self.notify(ChangeEvent::Deleted(id));
        Ok(())
    }

    /// Removes every entry. Irreversible; confirmation happens at the
    /// CLI boundary. Returns the number of entries removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn delete_all(&mut self) -> AppResult<usize> {
        let conn = self.db.get_conn()?;
        let removed = entries::delete_all_entries(&conn)?;
        drop(conn);

        info!("Cleared {} entries", removed);
        self.notify(ChangeEvent::Cleared);
        Ok(removed)
    }

    /// Number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn count(&self) -> AppResult<usize> {
        let conn = self.db.get_conn()?;
        entries::count_entries(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::model::{DrinkType, MilkType, Mood, Temperature};
    use tempfile::TempDir;

    fn open_test_store() -> (TempDir, EntryStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(&temp_dir.path().join("test.db")).unwrap();
        (temp_dir, store)
    }

    fn sample_draft() -> EntryDraft {
        EntryDraft {
            drink_type: DrinkType::Coffee,
            specific_drink: "Cortado".to_string(),
            location: "Home".to_string(),
            temperature: Temperature::Hot,
            milk_type: MilkType::Dairy,
            price: Some(3.0),
            rating: 4,
            notes: "double shot".to_string(),
            mood: Some(Mood::Productive),
            tags: vec!["morning".to_string()],
            photo: None,
        }
    }

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let (_dir, mut store) = open_test_store();

        let entry = store.create(sample_draft()).unwrap();

        assert_eq!(entry.updated_at, entry.created_at);

        let listed = store.all().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], entry);
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let (_dir, mut store) = open_test_store();

        let draft = EntryDraft {
            rating: 7,
            ..sample_draft()
        };

        match store.create(draft) {
            Err(AppError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {:?}", other.map(|e| e.id)),
        }
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_create_dedups_tags() {
        let (_dir, mut store) = open_test_store();

        let draft = EntryDraft {
            tags: vec![
                "cozy".to_string(),
                "seasonal".to_string(),
                "cozy".to_string(),
            ],
            ..sample_draft()
        };

        let entry = store.create(draft).unwrap();
        assert_eq!(entry.tags, vec!["cozy".to_string(), "seasonal".to_string()]);
    }

    #[test]
    fn test_update_refreshes_updated_at_and_rewrites_fields() {
        let (_dir, mut store) = open_test_store();
        let entry = store.create(sample_draft()).unwrap();

        // Make sure the clock moves past the creation instant
        std::thread::sleep(std::time::Duration::from_millis(10));

        let draft = EntryDraft {
            drink_type: DrinkType::Matcha,
            specific_drink: "Matcha Latte".to_string(),
            temperature: Temperature::Iced,
            rating: 5,
            mood: None,
            ..sample_draft()
        };
        let updated = store.update(entry.id, draft).unwrap();

        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.created_at, entry.created_at);
        assert!(updated.updated_at > entry.updated_at);
        assert_eq!(updated.drink_type, DrinkType::Matcha);
        assert_eq!(updated.rating, 5);
        assert!(updated.mood.is_none());

        let reread = store.get(entry.id).unwrap();
        assert_eq!(reread, updated);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let (_dir, mut store) = open_test_store();

        match store.update(Uuid::new_v4(), sample_draft()) {
            Err(AppError::Database(DatabaseError::NotFound(_))) => {}
            other => panic!("Expected NotFound error, got {:?}", other.map(|e| e.id)),
        }
    }

    #[test]
    fn test_delete_missing_id_is_not_found_and_count_unchanged() {
        let (_dir, mut store) = open_test_store();
        store.create(sample_draft()).unwrap();

        match store.delete(Uuid::new_v4()) {
            Err(AppError::Database(DatabaseError::NotFound(_))) => {}
            other => panic!("Expected NotFound error, got {:?}", other),
        }
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_count_tracks_creates_and_deletes() {
        let (_dir, mut store) = open_test_store();

        let a = store.create(sample_draft()).unwrap();
        let _b = store.create(sample_draft()).unwrap();
        let c = store.create(sample_draft()).unwrap();
        assert_eq!(store.count().unwrap(), store.all().unwrap().len());

        store.delete(a.id).unwrap();
        store.delete(c.id).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.count().unwrap(), store.all().unwrap().len());
    }

    #[test]
    fn test_delete_all() {
        let (_dir, mut store) = open_test_store();
        store.create(sample_draft()).unwrap();
        store.create(sample_draft()).unwrap();

        let removed = store.delete_all().unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_subscribers_receive_change_events() {
        let (_dir, mut store) = open_test_store();
        let events = store.subscribe();

        let entry = store.create(sample_draft()).unwrap();
        store.update(entry.id, sample_draft()).unwrap();
        store.delete(entry.id).unwrap();
        store.delete_all().unwrap();

        assert_eq!(events.try_recv().unwrap(), ChangeEvent::Created(entry.id));
        assert_eq!(events.try_recv().unwrap(), ChangeEvent::Updated(entry.id));
        assert_eq!(events.try_recv().unwrap(), ChangeEvent::Deleted(entry.id));
        assert_eq!(events.try_recv().unwrap(), ChangeEvent::Cleared);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_failed_mutation_emits_no_event() {
        let (_dir, mut store) = open_test_store();
        let events = store.subscribe();

        let _ = store.delete(Uuid::new_v4());

        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let (_dir, mut store) = open_test_store();

        let events = store.subscribe();
        drop(events);

        // Next mutation notices the dead receiver and drops it
        store.create(sample_draft()).unwrap();
        assert!(store.subscribers.is_empty());
    }
}
