//! Preference schema steps.
//!
//! Step `n` (1-based) upgrades a store from schema `n - 1` to `n`. Steps are
//! append-only; an applied step is never edited.

use crate::db::{StoreError, StoreResult};
use rusqlite::Connection;
use std::cmp::Ordering;

const SCHEMA_STEPS: &[&str] = &[include_str!("0001_preferences.sql")];

/// Newest schema version this build can open.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.len() as u32
}

/// Schema version recorded in the store (`0` for a fresh file).
pub fn schema_version(conn: &Connection) -> StoreResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// Runs every missing step in one transaction.
///
/// A store from a newer build is left untouched and reported as
/// `StoreError::SchemaTooNew`.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let found = schema_version(conn)?;
    let supported = latest_version();

    match found.cmp(&supported) {
        Ordering::Greater => Err(StoreError::SchemaTooNew { found, supported }),
        Ordering::Equal => Ok(()),
        Ordering::Less => {
            let tx = conn.transaction()?;
            let pending = &SCHEMA_STEPS[found as usize..];
            for (version, step) in (found + 1..).zip(pending) {
                tx.execute_batch(step)?;
                tx.pragma_update(None, "user_version", version)?;
            }
            tx.commit()?;
            Ok(())
        }
    }
}
