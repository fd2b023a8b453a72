//! Session calculation history.
//!
//! # Responsibility
//! - Keep completed calculations newest-first for the history panel.
//! - Project recorded results back to callers for recall.
//!
//! # Invariants
//! - Entries are only added at the front and only removed wholesale.
//! - Ledger lifetime equals the owning session; nothing is persisted.

mod ledger;

pub use ledger::HistoryLedger;
