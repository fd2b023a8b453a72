use calcpad_core::db::migrations::{latest_version, schema_version};
use calcpad_core::db::{open_db, open_db_in_memory};
use calcpad_core::{PreferenceRepository, SqlitePreferenceRepository, StoreError};
use rusqlite::Connection;

#[test]
fn fresh_store_has_no_preferences() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePreferenceRepository::new(&conn);

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert_eq!(repo.get("theme").unwrap(), None);
}

#[test]
fn value_written_under_current_schema_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calcpad.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        SqlitePreferenceRepository::new(&conn)
            .set("theme", "dark")
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    let repo = SqlitePreferenceRepository::new(&conn);
    assert_eq!(repo.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn unversioned_file_is_upgraded_and_writable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.sqlite3");
    Connection::open(&path)
        .unwrap()
        .execute_batch("CREATE TABLE unrelated (id INTEGER);")
        .unwrap();

    let conn = open_db(&path).unwrap();
    let repo = SqlitePreferenceRepository::new(&conn);
    repo.set("theme", "light").unwrap();

    assert_eq!(repo.get("theme").unwrap().as_deref(), Some("light"));
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
}

#[test]
fn store_from_newer_build_is_refused_and_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    let newer = latest_version() + 7;
    Connection::open(&path)
        .unwrap()
        .pragma_update(None, "user_version", newer)
        .unwrap();

    let err = open_db(&path).unwrap_err();
    assert!(
        matches!(err, StoreError::SchemaTooNew { found, supported }
            if found == newer && supported == latest_version()),
        "unexpected error: {err}"
    );
    assert!(err.to_string().contains(&format!("v{newer}")));

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), newer);
}
