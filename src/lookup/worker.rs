//! Lookup worker thread
//!
//! Owns a current-thread tokio runtime. Every request becomes its own task;
//! nothing orders, cancels, or deduplicates them.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;

use super::{LookupRequest, LookupResponse, SuggestionClient};

/// Spawn the lookup worker thread
///
/// The worker exits once every request sender has been dropped. Lookups
/// still in flight at that point are dropped with the runtime.
pub fn spawn_worker(
    client: SuggestionClient,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });
}

fn worker_loop(
    client: SuggestionClient,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start lookup runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let response_tx = response_tx.clone();
            tokio::spawn(async move {
                handle_lookup(&client, request, &response_tx).await;
            });
        }
    });

    log::debug!("Lookup worker shutting down");
}

async fn handle_lookup(
    client: &SuggestionClient,
    request: LookupRequest,
    response_tx: &Sender<LookupResponse>,
) {
    let LookupRequest { term } = request;

    let response = match client.fetch(&term).await {
        Ok(suggestions) => {
            log::debug!("Lookup '{}' returned {} suggestions", term, suggestions.len());
            LookupResponse::Suggestions { term, suggestions }
        }
        Err(error) => LookupResponse::Failed { term, error },
    };

    if response_tx.send(response).is_err() {
        // UI thread is gone
        log::debug!("Dropping lookup result, receiver disconnected");
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
