use std::path::PathBuf;

use chrono::Utc;

use super::matcher::HistoryMatcher;
use super::storage::{self, HistoryEntry};
use crate::config::HistoryConfig;
use crate::place::Place;

pub const MAX_VISIBLE_HISTORY: usize = 10;

/// History panel state and the persisted entries behind it
#[derive(Debug)]
pub struct HistoryState {
    entries: Vec<HistoryEntry>,
    /// Where to persist; `None` keeps history in memory only
    path: Option<PathBuf>,
    max_entries: usize,
    matcher: HistoryMatcher,
    /// Cursor into the filtered list
    selected: usize,
}

impl HistoryState {
    /// Load history according to config
    ///
    /// Disabled history, or no usable data directory, gives an in-memory
    /// store that is never written.
    pub fn load(config: &HistoryConfig, path: Option<PathBuf>) -> Self {
        if !config.enabled {
            return Self::in_memory(config.max_entries);
        }
        let Some(path) = path.or_else(storage::history_path) else {
            log::warn!("No data directory available; history will not be saved");
            return Self::in_memory(config.max_entries);
        };

        let mut entries = storage::load_history(&path);
        entries.truncate(config.max_entries);
        Self {
            entries,
            path: Some(path),
            max_entries: config.max_entries,
            matcher: HistoryMatcher::new(),
            selected: 0,
        }
    }

    pub fn in_memory(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            path: None,
            max_entries,
            matcher: HistoryMatcher::new(),
            selected: 0,
        }
    }

    pub fn empty() -> Self {
        Self::in_memory(HistoryConfig::default().max_entries)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_persistent(&self) -> bool {
        self.path.is_some()
    }

    /// Record a picked place and persist
    ///
    /// Save failures are logged; history is best-effort.
    pub fn record(&mut self, place: &Place) {
        let entry = HistoryEntry::new(place.clone(), Utc::now());
        self.entries = storage::record_entry(&self.entries, entry, self.max_entries);
        self.selected = 0;

        if let Some(path) = &self.path
            && let Err(e) = storage::save_history(path, &self.entries)
        {
            log::warn!("Failed to save history: {}", e);
        }
    }

    /// Entries matching `query`, capped for display
    pub fn visible(&self, query: &str) -> Vec<&HistoryEntry> {
        self.matcher
            .filter(query, &self.entries)
            .into_iter()
            .take(MAX_VISIBLE_HISTORY)
            .map(|idx| &self.entries[idx])
            .collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, query: &str) {
        let count = self.visible(query).len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self, query: &str) {
        let count = self.visible(query).len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    pub fn selected_entry(&self, query: &str) -> Option<&HistoryEntry> {
        self.visible(query).get(self.selected).copied()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
