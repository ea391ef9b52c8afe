//! Rolling History Window
//!
//! Fixed-capacity FIFO of reduced snapshots. Append and trim happen in one
//! call so the window can never be observed over capacity.

use std::collections::VecDeque;

use crate::config::defaults::HISTORY_CAPACITY;
use crate::types::HistoryEntry;

/// Insertion-ordered, capped at [`HISTORY_CAPACITY`] entries.
#[derive(Debug, Clone)]
pub struct HistoryWindow {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryWindow {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Add to the tail, evicting from the head once over capacity.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Owned copy of the current contents, oldest first.
    ///
    /// Later appends never alter a copy already handed out.
    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self::new()
    }
}
