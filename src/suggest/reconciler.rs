//! Result reconciliation
//!
//! A response changes state only if its request id equals the arbiter's
//! authoritative id. Anything else is a superseded response and is dropped.

use super::arbiter::RequestArbiter;
use super::source::LookupError;
use super::suggest_state::SuggestionState;
use super::worker::LookupResponse;

/// What happened to a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    Applied,
    /// A newer request was issued (or none is outstanding)
    Superseded,
    /// The authoritative request reported cancellation
    Cancelled,
}

pub fn reconcile(
    arbiter: &mut RequestArbiter,
    state: &mut SuggestionState,
    response: LookupResponse,
) -> Reconciled {
    let LookupResponse { request_id, result } = response;

    if !arbiter.is_authoritative(request_id) {
        log::debug!("Discarding response for superseded request {}", request_id);
        return Reconciled::Superseded;
    }

    if matches!(result, Err(LookupError::Cancelled)) {
        return Reconciled::Cancelled;
    }

    arbiter.resolve(request_id);
    state.apply_result(result);
    Reconciled::Applied
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod reconciler_tests;
