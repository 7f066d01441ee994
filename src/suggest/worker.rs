//! Place lookup worker thread
//!
//! Runs lookups on a background thread so the UI loop never blocks on the
//! network. The thread owns a current-thread tokio runtime; each request
//! becomes its own task, so a slow lookup never delays a newer one.
//! Responses go back over a std channel tagged with their request id.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::source::{LookupError, LookupResult, PlaceSource};

/// Lookup request sent from the engine to the worker
#[derive(Debug)]
pub struct LookupRequest {
    pub query: String,
    pub count: usize,
    /// Issuance token, echoed back in the response
    pub request_id: u64,
    /// Cancelled when a newer request supersedes this one
    pub cancel_token: CancellationToken,
}

/// Lookup response sent from the worker back to the engine
#[derive(Debug)]
pub struct LookupResponse {
    pub request_id: u64,
    pub result: LookupResult,
}

/// Spawn the lookup worker thread
///
/// The thread exits once every `LookupRequest` sender has been dropped.
pub fn spawn_worker(
    source: Arc<dyn PlaceSource>,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("cityscout-lookup".to_string())
        .spawn(move || worker_loop(source, request_rx, response_tx))
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    source: Arc<dyn PlaceSource>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start lookup runtime: {}", e);
            fail_remaining(&mut request_rx, &response_tx, &e.to_string());
            return;
        }
    };

    runtime.block_on(async {
        while let Some(request) = request_rx.recv().await {
            tokio::spawn(handle_lookup(
                Arc::clone(&source),
                request,
                response_tx.clone(),
            ));
        }
    });

    log::debug!("Lookup worker thread shutting down");
}

/// Run one lookup, racing it against its cancellation token
async fn handle_lookup(
    source: Arc<dyn PlaceSource>,
    request: LookupRequest,
    response_tx: Sender<LookupResponse>,
) {
    let LookupRequest {
        query,
        count,
        request_id,
        cancel_token,
    } = request;

    let result = if cancel_token.is_cancelled() {
        Err(LookupError::Cancelled)
    } else {
        log::debug!("Looking up {:?} (request {})", query, request_id);
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => Err(LookupError::Cancelled),
            result = source.lookup(&query, count) => result,
        }
    };

    if response_tx
        .send(LookupResponse { request_id, result })
        .is_err()
    {
        log::debug!("Engine gone, dropping response for request {}", request_id);
    }
}

/// Answer every queued request with a transport error
fn fail_remaining(
    request_rx: &mut UnboundedReceiver<LookupRequest>,
    response_tx: &Sender<LookupResponse>,
    reason: &str,
) {
    while let Some(request) = request_rx.blocking_recv() {
        let _ = response_tx.send(LookupResponse {
            request_id: request.request_id,
            result: Err(LookupError::Transport(reason.to_string())),
        });
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
