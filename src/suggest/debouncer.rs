//! Debounce scheduling for place lookups
//!
//! Holds a single deadline. Every keystroke restarts it, so only the last
//! keystroke of a quiet period produces a lookup. The event loop calls
//! `fire` with the current time; there is no background timer thread.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
    pending_query: Option<String>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            pending_query: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending deadline with `now + delay` for `query`
    pub fn restart(&mut self, query: String, now: Instant) {
        self.deadline = Some(now + self.delay);
        self.pending_query = Some(query);
    }

    /// Drop the pending deadline without firing
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.pending_query = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Take the pending query if its deadline has passed
    ///
    /// Fires at most once per restart.
    pub fn fire(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending_query.take()
            }
            _ => None,
        }
    }

    /// Remaining time before the pending deadline, zero if overdue
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
