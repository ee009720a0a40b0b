use castbook_core::{CastDraft, CastRepository, RepoError, SqliteCastStore};
use tempfile::TempDir;

fn store() -> (TempDir, SqliteCastStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteCastStore::new(dir.path().join("cast_management.db"));
    store.initialize().unwrap();
    (dir, store)
}

fn draft(store_name: &str, person_name: &str, age: Option<i64>, note: &str) -> CastDraft {
    CastDraft::new(store_name, person_name, age, Some(note.to_string()))
}

#[test]
fn initialize_is_idempotent_and_never_touches_rows() {
    let (_dir, store) = store();
    store.create(&draft("ShopA", "Alice", Some(23), "")).unwrap();

    store.initialize().unwrap();
    store.initialize().unwrap();

    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn list_all_on_empty_store_is_empty() {
    let (_dir, store) = store();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn list_all_sorts_by_store_then_person() {
    let (_dir, store) = store();
    for (shop, person) in [
        ("ShopB", "Bob"),
        ("ShopA", "Zoe"),
        ("ShopB", "Amy"),
        ("ShopA", "Alice"),
    ] {
        store.create(&draft(shop, person, None, "")).unwrap();
    }

    let order: Vec<(String, String)> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|cast| (cast.store_name, cast.person_name))
        .collect();
    assert_eq!(
        order,
        vec![
            ("ShopA".to_string(), "Alice".to_string()),
            ("ShopA".to_string(), "Zoe".to_string()),
            ("ShopB".to_string(), "Amy".to_string()),
            ("ShopB".to_string(), "Bob".to_string()),
        ]
    );
}

#[test]
fn create_round_trips_every_field() {
    let (_dir, store) = store();
    let id = store
        .create(&draft("ShopC", "Carol", Some(31), "prefers weekends"))
        .unwrap();

    let casts = store.list_all().unwrap();
    let cast = casts.iter().find(|cast| cast.id == id).unwrap();
    assert_eq!(cast.store_name, "ShopC");
    assert_eq!(cast.person_name, "Carol");
    assert_eq!(cast.age, Some(31));
    assert_eq!(cast.note.as_deref(), Some("prefers weekends"));
}

#[test]
fn update_overwrites_all_fields_at_same_id() {
    let (_dir, store) = store();
    let id = store.create(&draft("ShopA", "Alice", Some(23), "old")).unwrap();

    store
        .update(id, &CastDraft::new("ShopZ", "Alicia", None, None))
        .unwrap();

    let casts = store.list_all().unwrap();
    assert_eq!(casts.len(), 1);
    assert_eq!(casts[0].id, id);
    assert_eq!(casts[0].store_name, "ShopZ");
    assert_eq!(casts[0].person_name, "Alicia");
    assert_eq!(casts[0].age, None);
    assert_eq!(casts[0].note, None);
}

#[test]
fn update_of_missing_id_leaves_records_unchanged() {
    let (_dir, store) = store();
    let id = store.create(&draft("ShopA", "Alice", Some(23), "")).unwrap();
    let before = store.list_all().unwrap();

    store
        .update(id + 100, &draft("ShopX", "Ghost", Some(1), "x"))
        .unwrap();

    assert_eq!(store.list_all().unwrap(), before);
}

#[test]
fn delete_removes_record_and_is_safe_to_repeat() {
    let (_dir, store) = store();
    let keep = store.create(&draft("ShopA", "Alice", None, "")).unwrap();
    let gone = store.create(&draft("ShopB", "Bob", None, "")).unwrap();

    store.delete(gone).unwrap();
    store.delete(gone).unwrap();

    let ids: Vec<i64> = store.list_all().unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![keep]);
}

#[test]
fn ids_are_never_reused_after_delete() {
    let (_dir, store) = store();
    let first = store.create(&draft("ShopA", "Alice", None, "")).unwrap();
    store.delete(first).unwrap();

    let second = store.create(&draft("ShopA", "Alice", None, "")).unwrap();
    assert!(second > first);
}

#[test]
fn unvalidated_rows_are_still_listed() {
    let (_dir, store) = store();
    store.create(&draft("ShopA", "Alice", None, "")).unwrap();
    let blank = store.create(&CastDraft::default()).unwrap();

    let casts = store.list_all().unwrap();
    assert_eq!(casts.len(), 2);
    assert_eq!(casts[0].id, blank);
    assert_eq!(casts[0].store_name, "");
    assert_eq!(casts[0].person_name, "");
}

#[test]
fn ages_beyond_u32_round_trip() {
    let (_dir, store) = store();
    let id = store
        .create(&draft("ShopA", "Elder", Some(5_000_000_000), ""))
        .unwrap();

    let casts = store.list_all().unwrap();
    assert_eq!(casts[0].id, id);
    assert_eq!(casts[0].age, Some(5_000_000_000));
}

#[test]
fn non_integer_persisted_age_is_reported_as_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cast_management.db");
    let store = SqliteCastStore::new(&path);
    store.initialize().unwrap();

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO casts (store_name, person_name, age) VALUES ('ShopA', 'Alice', 'twenty');",
        [],
    )
    .unwrap();
    drop(conn);

    let err = store.list_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(ref message) if message.contains("Text")));
}

#[test]
fn unreadable_path_surfaces_sqlite_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteCastStore::new(dir.path().join("missing").join("casts.db"));

    assert!(matches!(
        store.initialize().unwrap_err(),
        RepoError::Sqlite(_)
    ));
}
