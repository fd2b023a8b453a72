//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one calculator session per UI display through FRB.
//! - Return render-ready snapshots after every input event.
//! - Expose theme preference reads and toggles backed by the core store.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Calculator state lives in caller-owned sessions, never in globals.

use calcpad_core::db::open_db;
use calcpad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Calculator, DisplayState, HistoryEntry, InputEvent, StoreResult, SqlitePreferenceRepository,
    Theme, ThemeService,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

const PREFS_DB_FILE_NAME: &str = "calcpad_prefs.sqlite3";
const EMPTY_HISTORY_PLACEHOLDER: &str = "No history yet";
static PREFS_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Text for the two display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// Main operand line.
    pub current: String,
    /// Previous operand plus pending operator symbol, or empty.
    pub expression: String,
}

impl From<DisplayState> for DisplaySnapshot {
    fn from(value: DisplayState) -> Self {
        Self {
            current: value.current,
            expression: value.expression,
        }
    }
}

/// Result envelope for inputs that can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputResponse {
    /// Whether the input reached the engine.
    pub ok: bool,
    /// Display after handling (unchanged when `ok == false`).
    pub display: DisplaySnapshot,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
}

/// One rendered history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// Position in the panel; `0` is the newest calculation.
    pub index: u32,
    pub expression: String,
    pub result: String,
}

/// Full history panel render model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPanel {
    /// Newest first.
    pub items: Vec<HistoryItem>,
    /// Set only when `items` is empty.
    pub placeholder: Option<String>,
}

/// Theme read/toggle envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeResponse {
    pub ok: bool,
    pub is_dark: bool,
    pub message: String,
}

/// Calculator session owned by one UI display.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Default)]
pub struct CalculatorSession {
    calculator: Calculator,
}

impl CalculatorSession {
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self::default()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn display(&self) -> DisplaySnapshot {
        self.calculator.display().into()
    }

    /// Handles a keyboard key name; unknown keys leave state untouched.
    #[flutter_rust_bridge::frb(sync)]
    pub fn press_key(&mut self, key: String) -> DisplaySnapshot {
        if let Some(event) = InputEvent::from_key(key.as_str()) {
            self.calculator.apply(event);
        }
        self.display()
    }

    /// Handles an on-screen button action.
    #[flutter_rust_bridge::frb(sync)]
    pub fn press_button(&mut self, action: String) -> InputResponse {
        match InputEvent::from_button(action.as_str()) {
            Ok(event) => {
                self.calculator.apply(event);
                InputResponse {
                    ok: true,
                    display: self.display(),
                    message: String::new(),
                }
            }
            Err(err) => {
                warn!("event=press_button module=ffi status=rejected error={err}");
                InputResponse {
                    ok: false,
                    display: self.display(),
                    message: format!("press_button failed: {err}"),
                }
            }
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn history_panel(&self) -> HistoryPanel {
        let items = self
            .calculator
            .history()
            .entries()
            .enumerate()
            .map(|(index, entry)| to_history_item(index, entry))
            .collect::<Vec<_>>();
        let placeholder = items
            .is_empty()
            .then(|| EMPTY_HISTORY_PLACEHOLDER.to_string());
        HistoryPanel { items, placeholder }
    }

    /// Loads the result of history row `index` into the display.
    #[flutter_rust_bridge::frb(sync)]
    pub fn recall_history(&mut self, index: u32) -> InputResponse {
        match self.calculator.recall(index as usize) {
            Some(_) => InputResponse {
                ok: true,
                display: self.display(),
                message: String::new(),
            },
            None => InputResponse {
                ok: false,
                display: self.display(),
                message: format!("recall_history failed: no entry at index {index}"),
            },
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn clear_history(&mut self) -> HistoryPanel {
        self.calculator.clear_history();
        self.history_panel()
    }
}

/// Reads the persisted theme.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; `ok == false` reports light theme with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_get() -> ThemeResponse {
    to_theme_response(with_theme_service(|service| service.current_theme()))
}

/// Flips and persists the theme, returning the new value.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_toggle() -> ThemeResponse {
    to_theme_response(with_theme_service(|service| service.toggle_theme()))
}

fn to_history_item(index: usize, entry: &HistoryEntry) -> HistoryItem {
    HistoryItem {
        index: u32::try_from(index).unwrap_or(u32::MAX),
        expression: entry.expression().to_string(),
        result: entry.result().to_string(),
    }
}

fn to_theme_response(result: Result<Theme, String>) -> ThemeResponse {
    match result {
        Ok(theme) => ThemeResponse {
            ok: true,
            is_dark: theme.is_dark(),
            message: String::new(),
        },
        Err(message) => ThemeResponse {
            ok: false,
            is_dark: false,
            message,
        },
    }
}

fn resolve_prefs_db_path() -> PathBuf {
    PREFS_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("CALCPAD_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(PREFS_DB_FILE_NAME)
        })
        .clone()
}

fn with_theme_service(
    f: impl FnOnce(&ThemeService<SqlitePreferenceRepository<'_>>) -> StoreResult<Theme>,
) -> Result<Theme, String> {
    let conn = open_db(resolve_prefs_db_path())
        .map_err(|err| format!("preference DB open failed: {err}"))?;
    let service = ThemeService::new(SqlitePreferenceRepository::new(&conn));
    f(&service).map_err(|err| format!("theme preference failed: {err}"))
}
