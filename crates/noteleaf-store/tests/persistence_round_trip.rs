//! Integration test for file-backed persistence.
//!
//! Verifies that a note collection written by one session is visible to the
//! next, that mutations write through immediately, and that the id sequence
//! continues across sessions.

use noteleaf_store::{FileStore, NoteStore};

#[test]
fn collection_survives_across_sessions() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let (first_id, second_id) = {
        let kv = FileStore::open(dir.path()).expect("Failed to open file store");
        let mut store = NoteStore::load(Box::new(kv)).expect("Failed to load store");

        let first = store
            .create("Grocery list", "Milk, eggs, coffee", "personal")
            .expect("create failed")
            .id;
        let second = store
            .create("Deploy checklist", "Tag, build, ship", "work")
            .expect("create failed")
            .id;
        (first, second)
    };

    // New session over the same directory sees the same collection.
    let kv = FileStore::open(dir.path()).expect("Failed to open file store");
    let mut store = NoteStore::load(Box::new(kv)).expect("Failed to load store");

    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].id, second_id);
    assert_eq!(store.all()[1].id, first_id);
    assert_eq!(store.all()[0].title, "Deploy checklist");

    // Ids keep increasing after a reload.
    let third = store
        .create("New in session two", "content", "ideas")
        .expect("create failed")
        .id;
    assert!(third > second_id);
}

#[test]
fn delete_is_written_through() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let doomed = {
        let kv = FileStore::open(dir.path()).expect("Failed to open file store");
        let mut store = NoteStore::load(Box::new(kv)).expect("Failed to load store");
        let keep = store.create("keep", "c", "work").expect("create failed").id;
        let doomed = store.create("doomed", "c", "work").expect("create failed").id;
        assert!(store.delete(doomed).expect("delete failed"));
        assert!(store.get(keep).is_some());
        doomed
    };

    let kv = FileStore::open(dir.path()).expect("Failed to open file store");
    let store = NoteStore::load(Box::new(kv)).expect("Failed to load store");
    assert_eq!(store.len(), 1);
    assert!(store.get(doomed).is_none());
}

#[test]
fn update_is_written_through() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let id = {
        let kv = FileStore::open(dir.path()).expect("Failed to open file store");
        let mut store = NoteStore::load(Box::new(kv)).expect("Failed to load store");
        let id = store.create("v1", "content", "work").expect("create failed").id;
        store
            .update(id, "v2", "content", "work")
            .expect("update failed");
        id
    };

    let kv = FileStore::open(dir.path()).expect("Failed to open file store");
    let store = NoteStore::load(Box::new(kv)).expect("Failed to load store");
    assert_eq!(store.get(id).expect("note missing").title, "v2");
}
