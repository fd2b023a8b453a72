use crate::model::history_entry::HistoryEntry;
use log::debug;
use std::collections::VecDeque;

/// Ordered list of completed calculations, newest first.
///
/// No entry limit and no deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a completed calculation.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        debug!(
            "event=history_record module=history status=ok len={}",
            self.entries.len()
        );
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        debug!("event=history_clear module=history status=ok removed={removed}");
    }

    /// Returns the result text of `entry` for feeding back into an engine.
    ///
    /// Read-only: the ledger is not modified.
    pub fn recall(entry: &HistoryEntry) -> String {
        entry.result().to_string()
    }

    /// Entry at `index`, where `0` is the most recent calculation.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Iterates entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
