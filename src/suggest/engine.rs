//! Suggestion engine
//!
//! Owns the query text, the debounce deadline, the request arbiter, and
//! the dropdown state. The UI loop feeds it keystrokes and focus changes
//! and calls `tick` and `poll_responses` every iteration; nothing here
//! blocks.
//!
//! Flow: `set_query` restarts the debounce deadline, `tick` issues the
//! lookup once the deadline passes, and `poll_responses` hands each
//! response to the reconciler.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};

use super::arbiter::RequestArbiter;
use super::debouncer::Debouncer;
use super::reconciler::{Reconciled, reconcile};
use super::source::PlaceSource;
use super::suggest_state::SuggestionState;
use super::worker::{LookupRequest, LookupResponse, spawn_worker};
use crate::config::SuggestConfig;
use crate::place::Place;

/// Invoked with the place the user picked
pub type SelectCallback = Box<dyn FnMut(&Place) + Send>;

/// Tunables for the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Result count sent with every lookup
    pub count: usize,
    pub debounce: Duration,
    /// Minimum trimmed characters before a lookup is scheduled
    pub min_chars: usize,
    /// How long a blur waits before closing the dropdown
    pub blur_grace: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self::from(&SuggestConfig::default())
    }
}

impl From<&SuggestConfig> for EngineOptions {
    fn from(config: &SuggestConfig) -> Self {
        Self {
            count: config.count.max(1),
            debounce: Duration::from_millis(config.debounce_ms),
            min_chars: config.min_chars.max(1),
            blur_grace: Duration::from_millis(config.blur_grace_ms),
        }
    }
}

pub struct SuggestEngine {
    options: EngineOptions,
    query: String,
    debouncer: Debouncer,
    arbiter: RequestArbiter,
    state: SuggestionState,
    /// `None` once shut down, so late responses have nowhere to land
    response_rx: Option<Receiver<LookupResponse>>,
    blur_deadline: Option<Instant>,
    focused: bool,
    on_select: Option<SelectCallback>,
}

impl SuggestEngine {
    /// Create an engine talking to an already running worker
    pub fn new(
        options: EngineOptions,
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) -> Self {
        Self {
            options,
            query: String::new(),
            debouncer: Debouncer::new(options.debounce),
            arbiter: RequestArbiter::new(request_tx),
            state: SuggestionState::with_min_chars(options.min_chars),
            response_rx: Some(response_rx),
            blur_deadline: None,
            focused: true,
            on_select: None,
        }
    }

    /// Create an engine and spawn its lookup worker over `source`
    pub fn spawn(options: EngineOptions, source: Arc<dyn PlaceSource>) -> io::Result<Self> {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(source, request_rx, response_tx)?;
        Ok(Self::new(options, request_tx, response_rx))
    }

    /// Set the callback invoked on every pick
    pub fn set_on_select(&mut self, callback: SelectCallback) {
        self.on_select = Some(callback);
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_shut_down(&self) -> bool {
        self.response_rx.is_none()
    }

    /// Update the query text after a keystroke
    ///
    /// Below the minimum length this clears the dropdown and drops any
    /// pending lookup. Otherwise it shows loading and restarts the
    /// debounce deadline; the outstanding request loses authority right
    /// away since it was for older text.
    pub fn set_query(&mut self, text: &str, now: Instant) {
        if self.is_shut_down() || text == self.query {
            return;
        }
        self.query = text.to_string();

        let trimmed = self.query.trim();
        if trimmed.chars().count() < self.options.min_chars {
            self.debouncer.cancel();
            self.arbiter.supersede();
            self.state.clear();
            return;
        }

        self.arbiter.supersede();
        self.state.begin_loading();
        self.debouncer.restart(trimmed.to_string(), now);
    }

    /// Replace the query text without scheduling a lookup
    ///
    /// Used after a pick, or when a place is chosen from elsewhere. The
    /// dropdown is reset to empty.
    pub fn settle_query(&mut self, text: String) {
        if self.is_shut_down() {
            return;
        }
        self.query = text;
        self.debouncer.cancel();
        self.arbiter.supersede();
        self.blur_deadline = None;
        self.state.clear();
    }

    /// Fire due deadlines
    ///
    /// Issues the debounced lookup and applies a pending blur close.
    /// Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_shut_down() {
            return false;
        }
        let mut changed = false;

        if let Some(query) = self.debouncer.fire(now) {
            if let Err(e) = self.arbiter.issue(query, self.options.count) {
                self.state.apply_result(Err(e));
            }
            changed = true;
        }

        if self.blur_deadline.is_some_and(|deadline| now >= deadline) {
            self.blur_deadline = None;
            self.state.close();
            changed = true;
        }

        changed
    }

    /// Drain worker responses through the reconciler
    ///
    /// Returns how many responses were applied.
    pub fn poll_responses(&mut self) -> usize {
        let Some(response_rx) = self.response_rx.as_ref() else {
            return 0;
        };

        let mut applied = 0;
        while let Ok(response) = response_rx.try_recv() {
            if reconcile(&mut self.arbiter, &mut self.state, response) == Reconciled::Applied {
                applied += 1;
            }
        }

        // Results landing after the grace window must not reopen a blurred dropdown
        if applied > 0 && !self.focused && self.blur_deadline.is_none() {
            self.state.close();
        }
        applied
    }

    /// Input regained focus; reopen existing results without refetching
    pub fn focus(&mut self) {
        if self.is_shut_down() {
            return;
        }
        self.focused = true;
        self.blur_deadline = None;
        self.state.reopen();
    }

    /// Input lost focus; the dropdown closes after the grace window
    ///
    /// A lookup still loading counts as open, so its results cannot
    /// reopen the dropdown once the window has passed.
    pub fn blur(&mut self, now: Instant) {
        if self.is_shut_down() {
            return;
        }
        self.focused = false;
        if self.state.is_open || self.state.is_loading {
            self.blur_deadline = Some(now + self.options.blur_grace);
        }
    }

    /// Close the dropdown, keeping results for a later reopen
    pub fn dismiss(&mut self) {
        self.blur_deadline = None;
        self.state.close();
    }

    pub fn highlight_next(&mut self) {
        self.state.highlight_next();
    }

    pub fn highlight_prev(&mut self) {
        self.state.highlight_prev();
    }

    /// Pick the result at `index` from the open dropdown
    ///
    /// Sets the query to the place label, resets the dropdown, and invokes
    /// the selection callback.
    pub fn pick(&mut self, index: usize) -> Option<Place> {
        if self.is_shut_down() || !self.state.is_open {
            return None;
        }
        let place = self.state.results.get(index)?.clone();

        self.settle_query(place.label());
        if let Some(callback) = self.on_select.as_mut() {
            callback(&place);
        }
        Some(place)
    }

    /// Pick the highlighted result, or the first one when none is highlighted
    pub fn pick_highlighted(&mut self) -> Option<Place> {
        let index = self.state.highlighted.unwrap_or(0);
        self.pick(index)
    }

    /// Earliest pending deadline, for sizing the event poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.debouncer.deadline(), self.blur_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Tear down: cancel the deadline and the outstanding request
    ///
    /// Disconnects the response channel, so no later response can change
    /// state. Also runs on drop.
    pub fn shutdown(&mut self) {
        if self.is_shut_down() {
            return;
        }
        self.debouncer.cancel();
        self.arbiter.shutdown();
        self.blur_deadline = None;
        self.response_rx = None;
        log::debug!("Suggestion engine shut down");
    }
}

impl Drop for SuggestEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
