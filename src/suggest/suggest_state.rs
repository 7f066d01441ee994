//! Suggestion dropdown state
//!
//! What the dropdown renders from. Only the reconciler applies lookup
//! results here; the engine handles clearing, loading, and visibility.

use super::source::{LookupError, LookupOutcome, LookupResult};
use crate::config::SuggestConfig;
use crate::place::Place;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// User-facing message for a query the endpoint rejected as too short
pub fn short_query_message(min_chars: usize) -> String {
    match min_chars {
        1 => "Type at least 1 letter.".to_string(),
        n => format!("Type at least {} letters.", n),
    }
}

/// User-facing message for an upstream status failure
pub fn upstream_error_message(status: u16) -> String {
    format!("Search failed (HTTP {}). Please try again.", status)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionState {
    /// Candidates in the order the endpoint returned them
    pub results: Vec<Place>,
    pub is_open: bool,
    /// True only while the authoritative request is unresolved
    pub is_loading: bool,
    /// Never set together with non-empty results
    pub error: Option<String>,
    /// Keyboard cursor into `results`
    pub highlighted: Option<usize>,
    /// Threshold quoted in the short-query message
    min_chars: usize,
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self::with_min_chars(SuggestConfig::default().min_chars)
    }
}

impl SuggestionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_chars(min_chars: usize) -> Self {
        Self {
            results: Vec::new(),
            is_open: false,
            is_loading: false,
            error: None,
            highlighted: None,
            min_chars,
        }
    }

    /// Reset to empty and closed
    pub fn clear(&mut self) {
        *self = Self::with_min_chars(self.min_chars);
    }

    /// A lookup is scheduled; hide any previous error
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Apply a lookup result
    ///
    /// Returns false for `Cancelled`, which never changes state.
    pub fn apply_result(&mut self, result: LookupResult) -> bool {
        match result {
            Ok(LookupOutcome::Places(places)) => self.show(places),
            Ok(LookupOutcome::NotFound) => self.show(Vec::new()),
            Ok(LookupOutcome::Malformed) => {
                self.fail(short_query_message(self.min_chars));
                self.is_open = false;
            }
            Err(LookupError::Upstream { status }) => self.fail(upstream_error_message(status)),
            Err(LookupError::Transport(_)) | Err(LookupError::Decode(_)) => {
                self.fail(NETWORK_ERROR_MESSAGE.to_string())
            }
            Err(LookupError::Cancelled) => return false,
        }
        true
    }

    fn show(&mut self, places: Vec<Place>) {
        self.results = places;
        self.highlighted = None;
        self.is_open = true;
        self.is_loading = false;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.results.clear();
        self.highlighted = None;
        self.is_open = true;
        self.is_loading = false;
        self.error = Some(message);
    }

    /// Close the dropdown, keeping results for a later reopen
    ///
    /// An error goes with it; only the short-query hint is ever shown
    /// while closed, and closing that dismisses it.
    pub fn close(&mut self) {
        self.is_open = false;
        self.highlighted = None;
        self.error = None;
    }

    /// Reopen with existing results; returns whether it opened
    pub fn reopen(&mut self) -> bool {
        if self.results.is_empty() {
            return false;
        }
        self.is_open = true;
        true
    }

    /// Open, settled, and nothing matched
    pub fn shows_no_results(&self) -> bool {
        self.is_open && !self.is_loading && self.error.is_none() && self.results.is_empty()
    }

    pub fn highlight_next(&mut self) {
        if !self.is_open || self.results.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i + 1 < self.results.len() => i + 1,
            _ => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        if !self.is_open || self.results.is_empty() {
            return;
        }
        let last = self.results.len() - 1;
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    pub fn highlighted_place(&self) -> Option<&Place> {
        self.highlighted.and_then(|i| self.results.get(i))
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
