//! Fetch worker thread
//!
//! Performs Places API calls in a background thread so the UI event loop
//! never blocks on the network. Requests arrive on one channel, results
//! leave on another; the widget drains the response channel on every tick.
//!
//! There is deliberately no request id and no cancel message: debouncing is
//! the only request-volume control, and responses apply in arrival order
//! (the last one to land wins).

use std::sync::mpsc::{Receiver, Sender};

use super::client::{DetailSource, SuggestionSource};
use super::types::{PlaceDetail, PlaceSuggestion};
use crate::error::GeocompleteError;

/// Request messages sent to the fetch worker thread
#[derive(Debug)]
pub enum FetchRequest {
    /// Fetch autocomplete candidates for a settled input value
    Suggestions { input: String },
    /// Fetch the detail record for a selected suggestion
    Detail { suggestion: PlaceSuggestion },
}

/// Response messages received from the fetch worker thread
#[derive(Debug)]
pub enum FetchResponse {
    /// Result of a suggestion fetch
    Suggestions(Result<Vec<PlaceSuggestion>, GeocompleteError>),
    /// Result of a detail fetch, paired with the selected suggestion
    Detail {
        suggestion: PlaceSuggestion,
        result: Result<PlaceDetail, GeocompleteError>,
    },
}

/// Spawn the fetch worker thread
///
/// The worker owns the suggestion source and, when supplied, a caller
/// detail source; otherwise details come from the same source object when
/// it implements [`DetailSource`] too.
pub fn spawn_worker<S>(
    source: S,
    custom_details: Option<Box<dyn DetailSource>>,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) where
    S: SuggestionSource + DetailSource + 'static,
{
    std::thread::spawn(move || {
        let details: &dyn DetailSource = match &custom_details {
            Some(custom) => custom.as_ref(),
            None => &source,
        };
        worker_loop(&source, details, request_rx, response_tx);
    });
}

/// Main worker loop, processes requests until the channel is closed
pub fn worker_loop(
    suggestions: &dyn SuggestionSource,
    details: &dyn DetailSource,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = match request {
            FetchRequest::Suggestions { input } => {
                log::debug!("Fetching suggestions for {:?}", input);
                FetchResponse::Suggestions(suggestions.fetch_suggestions(&input))
            }
            FetchRequest::Detail { suggestion } => {
                log::debug!("Fetching details for {:?}", suggestion.place_id);
                let result = details.fetch_detail(&suggestion.place_id);
                FetchResponse::Detail { suggestion, result }
            }
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected, stop working
            break;
        }
    }

    log::debug!("Fetch worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
