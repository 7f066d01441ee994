//! History persistence
//!
//! Stores entries as a JSON array in `<data_dir>/cityscout/history.json`.
//! A missing or unreadable file loads as empty history.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CityscoutError;
use crate::place::Place;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub place: Place,
    pub picked_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(place: Place, picked_at: DateTime<Utc>) -> Self {
        Self { place, picked_at }
    }

    pub fn label(&self) -> String {
        self.place.label()
    }
}

/// Default location: `<data_dir>/cityscout/history.json`
pub fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("cityscout").join("history.json"))
}

pub fn load_history(path: &Path) -> Vec<HistoryEntry> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            log::warn!("Failed to read history {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&text) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Ignoring corrupt history {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

pub fn save_history(path: &Path, entries: &[HistoryEntry]) -> Result<(), CityscoutError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}

/// Put `entry` first, drop older entries with the same label, cap at `max_entries`
pub fn record_entry(entries: &[HistoryEntry], entry: HistoryEntry, max_entries: usize) -> Vec<HistoryEntry> {
    let mut updated = Vec::with_capacity(entries.len() + 1);
    updated.push(entry);
    updated.extend_from_slice(entries);
    trim_to_max(deduplicate(updated), max_entries)
}

/// Keep the first occurrence of each label
fn deduplicate(entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    let mut seen = std::collections::HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.label()))
        .collect()
}

fn trim_to_max(mut entries: Vec<HistoryEntry>, max_entries: usize) -> Vec<HistoryEntry> {
    entries.truncate(max_entries);
    entries
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
