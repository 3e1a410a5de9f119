//! Integration tests for the entry store.
//!
//! These exercise the store through its public API against a real
//! database file, including behavior across process-restart boundaries
//! (modeled by reopening the store).

use siplog::errors::{AppError, DatabaseError};
use siplog::model::{DrinkType, EntryDraft, MilkType, Mood, Temperature};
use siplog::store::{ChangeEvent, EntryStore};
use tempfile::TempDir;
use uuid::Uuid;

fn open_store(dir: &TempDir) -> EntryStore {
    EntryStore::open(&dir.path().join("siplog.db")).unwrap()
}

fn latte_draft() -> EntryDraft {
    EntryDraft {
        drink_type: DrinkType::Coffee,
        specific_drink: "Latte".to_string(),
        location: "Corner Cafe".to_string(),
        temperature: Temperature::Hot,
        milk_type: MilkType::Oat,
        price: Some(4.5),
        rating: 4,
        notes: "smooth".to_string(),
        mood: Some(Mood::Cozy),
        tags: vec!["morning".to_string(), "oat".to_string()],
        photo: Some(vec![1, 2, 3, 4]),
    }
}

#[test]
fn create_then_all_round_trips_every_field() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let draft = latte_draft();
    let created = store.create(draft.clone()).unwrap();

    let listed = store.all().unwrap();
    assert_eq!(listed.len(), 1);
    let entry = &listed[0];

    // Equal to the draft in every caller-supplied field
    assert_eq!(entry.drink_type, draft.drink_type);
    assert_eq!(entry.specific_drink, draft.specific_drink);
    assert_eq!(entry.location, draft.location);
    assert_eq!(entry.temperature, draft.temperature);
    assert_eq!(entry.milk_type, draft.milk_type);
    assert_eq!(entry.price, draft.price);
    assert_eq!(entry.rating, draft.rating);
    assert_eq!(entry.notes, draft.notes);
    assert_eq!(entry.mood, draft.mood);
    assert_eq!(entry.tags, draft.tags);
    assert_eq!(entry.photo, draft.photo);

    // System-assigned fields
    assert_eq!(entry.id, created.id);
    assert_eq!(entry.created_at, created.created_at);
    assert_eq!(entry.updated_at, entry.created_at);
}

#[test]
fn entries_survive_store_reopen() {
    let dir = TempDir::new().unwrap();

    let id = {
        let mut store = open_store(&dir);
        store.create(latte_draft()).unwrap().id
    };

    let store = open_store(&dir);
    let entry = store.get(id).unwrap();
    assert_eq!(entry.specific_drink, "Latte");
    assert_eq!(entry.photo, Some(vec![1, 2, 3, 4]));
}

#[test]
fn count_matches_all_after_any_create_delete_sequence() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let a = store.create(latte_draft()).unwrap();
    let b = store.create(EntryDraft::default()).unwrap();
    let _c = store.create(EntryDraft::default()).unwrap();
    assert_eq!(store.count().unwrap(), store.all().unwrap().len());
    assert_eq!(store.count().unwrap(), 3);

    store.delete(b.id).unwrap();
    assert_eq!(store.count().unwrap(), store.all().unwrap().len());

    store.delete(a.id).unwrap();
    store.create(EntryDraft::default()).unwrap();
    assert_eq!(store.count().unwrap(), store.all().unwrap().len());
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn all_returns_newest_first() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let first = store.create(latte_draft()).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = store.create(EntryDraft::default()).unwrap();

    let listed = store.all().unwrap();
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[test]
fn update_refreshes_updated_at_and_replaces_every_field() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let entry = store.create(latte_draft()).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(10));

    let new_fields = EntryDraft {
        drink_type: DrinkType::Other,
        specific_drink: "Chai".to_string(),
        location: "Home".to_string(),
        temperature: Temperature::Iced,
        milk_type: MilkType::Soy,
        price: None,
        rating: 2,
        notes: "experiment".to_string(),
        mood: None,
        tags: vec!["afternoon".to_string()],
        photo: None,
    };
    store.update(entry.id, new_fields.clone()).unwrap();

    let reread = store.get(entry.id).unwrap();
    assert!(reread.updated_at > entry.updated_at);
    assert_eq!(reread.created_at, entry.created_at);
    assert_eq!(reread.drink_type, new_fields.drink_type);
    assert_eq!(reread.specific_drink, new_fields.specific_drink);
    assert_eq!(reread.location, new_fields.location);
    assert_eq!(reread.temperature, new_fields.temperature);
    assert_eq!(reread.milk_type, new_fields.milk_type);
    assert_eq!(reread.price, new_fields.price);
    assert_eq!(reread.rating, new_fields.rating);
    assert_eq!(reread.notes, new_fields.notes);
    assert_eq!(reread.mood, new_fields.mood);
    assert_eq!(reread.tags, new_fields.tags);
    assert_eq!(reread.photo, new_fields.photo);
}

#[test]
fn delete_nonexistent_id_fails_and_count_is_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    store.create(latte_draft()).unwrap();

    let result = store.delete(Uuid::new_v4());
    assert!(matches!(
        result,
        Err(AppError::Database(DatabaseError::NotFound(_)))
    ));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn update_nonexistent_id_fails() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let result = store.update(Uuid::new_v4(), latte_draft());
    assert!(matches!(
        result,
        Err(AppError::Database(DatabaseError::NotFound(_)))
    ));
}

#[test]
fn change_events_drive_snapshot_refresh() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    let events = store.subscribe();

    // A consumer mirrors the list by re-reading all() on every event
    let entry = store.create(latte_draft()).unwrap();
    assert_eq!(events.try_recv().unwrap(), ChangeEvent::Created(entry.id));
    assert_eq!(store.all().unwrap().len(), 1);

    store.delete(entry.id).unwrap();
    assert_eq!(events.try_recv().unwrap(), ChangeEvent::Deleted(entry.id));
    assert_eq!(store.all().unwrap().len(), 0);
}

#[test]
fn tags_are_deduplicated_on_create_and_update() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let draft = EntryDraft {
        tags: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        ..EntryDraft::default()
    };
    let entry = store.create(draft).unwrap();
    assert_eq!(entry.tags, vec!["a".to_string(), "b".to_string()]);

    let draft = EntryDraft {
        tags: vec!["b".to_string(), "b".to_string(), "c".to_string()],
        ..EntryDraft::default()
    };
    let updated = store.update(entry.id, draft).unwrap();
    assert_eq!(updated.tags, vec!["b".to_string(), "c".to_string()]);
}

#[test]
fn invalid_drafts_never_reach_storage() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let bad_rating = EntryDraft {
        rating: 9,
        ..EntryDraft::default()
    };
    assert!(matches!(
        store.create(bad_rating),
        Err(AppError::Validation(_))
    ));

    let bad_price = EntryDraft {
        price: Some(-1.0),
        ..EntryDraft::default()
    };
    assert!(matches!(
        store.create(bad_price),
        Err(AppError::Validation(_))
    ));

    assert_eq!(store.count().unwrap(), 0);
}
