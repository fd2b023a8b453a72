use calcpad_core::db::{open_db, open_db_in_memory};
use calcpad_core::{
    PreferenceRepository, SqlitePreferenceRepository, StoreError, Theme, ThemeService,
};

#[test]
fn theme_defaults_to_light() {
    let conn = open_db_in_memory().unwrap();
    let service = ThemeService::new(SqlitePreferenceRepository::new(&conn));

    assert_eq!(service.current_theme().unwrap(), Theme::Light);
}

#[test]
fn toggle_flips_and_persists_theme() {
    let conn = open_db_in_memory().unwrap();
    let service = ThemeService::new(SqlitePreferenceRepository::new(&conn));

    assert_eq!(service.toggle_theme().unwrap(), Theme::Dark);
    assert_eq!(service.current_theme().unwrap(), Theme::Dark);
    assert_eq!(service.toggle_theme().unwrap(), Theme::Light);

    let repo = SqlitePreferenceRepository::new(&conn);
    assert_eq!(repo.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn unrecognized_stored_value_reads_as_light() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePreferenceRepository::new(&conn);
    repo.set("theme", "solarized").unwrap();

    let service = ThemeService::new(repo);
    assert_eq!(service.current_theme().unwrap(), Theme::Light);
}

#[test]
fn theme_survives_reopening_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let service = ThemeService::new(SqlitePreferenceRepository::new(&conn));
        service.set_theme(Theme::Dark).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let service = ThemeService::new(SqlitePreferenceRepository::new(&conn));
    assert!(service.current_theme().unwrap().is_dark());
}

#[test]
fn set_overwrites_existing_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePreferenceRepository::new(&conn);

    repo.set("theme", "dark").unwrap();
    repo.set(" theme ", "light").unwrap();
    assert_eq!(repo.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn blank_key_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePreferenceRepository::new(&conn);

    assert!(matches!(repo.get(" "), Err(StoreError::EmptyKey)));
    assert!(matches!(repo.set("", "dark"), Err(StoreError::EmptyKey)));
}
