//! Incremental place search
//!
//! Turns keystrokes into a debounced sequence of lookups where only the
//! most recently issued request may change what the dropdown shows.

pub mod arbiter;
pub mod debouncer;
pub mod engine;
pub mod reconciler;
pub mod source;
pub mod suggest_state;
pub mod worker;

pub use arbiter::RequestArbiter;
pub use debouncer::Debouncer;
pub use engine::{EngineOptions, SelectCallback, SuggestEngine};
pub use reconciler::{Reconciled, reconcile};
pub use source::{HttpPlaceSource, LookupError, LookupOutcome, LookupResult, PlaceSource};
pub use suggest_state::SuggestionState;
pub use worker::{LookupRequest, LookupResponse, spawn_worker};
