//! SQLite storage bootstrap for host-persisted preferences.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the preference store.
//! - Apply schema steps before any preference is read or written.
//! - Own the error type shared by the store and its repositories.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Calculator state and history are never stored here.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while opening, migrating or querying the preference store.
#[derive(Debug)]
pub enum StoreError {
    /// SQLite rejected the connection or a statement.
    Sqlite(rusqlite::Error),
    /// The file was written by a newer calcpad with more schema steps.
    SchemaTooNew { found: u32, supported: u32 },
    /// A preference key was blank after trimming.
    EmptyKey,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "preference store: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "preference store uses schema v{found}; this build understands up to v{supported}"
            ),
            Self::EmptyKey => f.write_str("preference key cannot be empty"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if let Self::Sqlite(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
