//! Core calculator logic for calcpad.
//! This crate is the single source of truth for calculator invariants.

pub mod db;
pub mod engine;
pub mod history;
pub mod input;
pub mod logging;
pub mod model;
pub mod number;
pub mod repo;
pub mod service;

pub use db::{StoreError, StoreResult};
pub use engine::Calculator;
pub use history::HistoryLedger;
pub use input::{InputError, InputEvent, InputResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::display::DisplayState;
pub use model::history_entry::HistoryEntry;
pub use model::operator::Operator;
pub use model::theme::Theme;
pub use number::{format_number, parse_operand};
pub use repo::preference_repo::{PreferenceRepository, SqlitePreferenceRepository};
pub use service::theme_service::ThemeService;

/// Minimal health-check API for front-end wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
