//! Terminal city explorer
//!
//! The `suggest` module is the autocomplete engine: debounced lookups,
//! a single authoritative request at a time, and reconciliation of
//! out-of-order responses into dropdown state. `app` is the ratatui shell
//! around it.

pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod place;
pub mod suggest;

#[cfg(test)]
mod test_utils;
