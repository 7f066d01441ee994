//! Request arbitration
//!
//! Keeps at most one authoritative lookup. Issuing a new request cancels
//! the previous one's token first, and only the authoritative id is
//! accepted back by the reconciler. Token cancellation only saves
//! bandwidth; the id check is what keeps stale results out.

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use super::source::LookupError;
use super::worker::LookupRequest;

#[derive(Debug)]
struct PendingRequest {
    request_id: u64,
    cancel_token: CancellationToken,
}

#[derive(Debug)]
pub struct RequestArbiter {
    request_tx: Option<UnboundedSender<LookupRequest>>,
    /// Last issued id; ids start at 1
    last_request_id: u64,
    authoritative: Option<PendingRequest>,
}

impl RequestArbiter {
    pub fn new(request_tx: UnboundedSender<LookupRequest>) -> Self {
        Self {
            request_tx: Some(request_tx),
            last_request_id: 0,
            authoritative: None,
        }
    }

    /// Cancel the authoritative request, if any
    ///
    /// Afterwards no response is authoritative until the next `issue`.
    /// Returns the id that lost authority.
    pub fn supersede(&mut self) -> Option<u64> {
        let pending = self.authoritative.take()?;
        pending.cancel_token.cancel();
        log::debug!("Superseded request {}", pending.request_id);
        Some(pending.request_id)
    }

    /// Issue a lookup and make it the authoritative request
    ///
    /// Fails when the worker is no longer receiving; the request is then
    /// not authoritative and nothing will answer it.
    pub fn issue(&mut self, query: String, count: usize) -> Result<u64, LookupError> {
        self.supersede();

        let Some(tx) = self.request_tx.as_ref() else {
            return Err(LookupError::Transport(
                "lookup worker has been shut down".to_string(),
            ));
        };

        self.last_request_id = self.last_request_id.wrapping_add(1);
        let request_id = self.last_request_id;
        let cancel_token = CancellationToken::new();

        let request = LookupRequest {
            query,
            count,
            request_id,
            cancel_token: cancel_token.clone(),
        };

        if tx.send(request).is_err() {
            log::warn!("Lookup worker is not running; request {} dropped", request_id);
            return Err(LookupError::Transport(
                "lookup worker is not running".to_string(),
            ));
        }

        log::debug!("Issued request {}", request_id);
        self.authoritative = Some(PendingRequest {
            request_id,
            cancel_token,
        });
        Ok(request_id)
    }

    /// Whether `request_id` is the one allowed to change visible state
    pub fn is_authoritative(&self, request_id: u64) -> bool {
        self.authoritative
            .as_ref()
            .is_some_and(|pending| pending.request_id == request_id)
    }

    /// Mark the authoritative request as resolved
    ///
    /// Returns false when `request_id` is not authoritative.
    pub fn resolve(&mut self, request_id: u64) -> bool {
        if self.is_authoritative(request_id) {
            self.authoritative = None;
            true
        } else {
            false
        }
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.authoritative.as_ref().map(|pending| pending.request_id)
    }

    /// Cancel the outstanding request and stop issuing new ones
    ///
    /// Dropping the sender lets the worker thread exit.
    pub fn shutdown(&mut self) {
        self.supersede();
        self.request_tx = None;
    }

    pub fn is_shut_down(&self) -> bool {
        self.request_tx.is_none()
    }
}

#[cfg(test)]
#[path = "arbiter_tests.rs"]
mod arbiter_tests;
