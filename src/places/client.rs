//! HTTP client for the Places web service
//!
//! Owns a reqwest client on a small current-thread tokio runtime. Only ever
//! driven from the fetch worker thread, so the blocking `block_on` calls
//! never touch the UI event loop.

use tokio::runtime::Runtime;
use url::Url;

use super::request;
use super::types::{AutocompleteResponse, DetailsResponse, PlaceDetail, PlaceSuggestion};
use crate::error::GeocompleteError;

/// A source of autocomplete candidates for a settled input value
pub trait SuggestionSource: Send {
    fn fetch_suggestions(&self, input: &str) -> Result<Vec<PlaceSuggestion>, GeocompleteError>;
}

/// A collaborator that resolves a selected suggestion to a detail record
///
/// The widget queues one detail fetch per selection when detail fetching is
/// enabled. [`PlacesClient`] is the default implementation; callers can
/// substitute their own source.
pub trait DetailSource: Send {
    fn fetch_detail(&self, place_id: &str) -> Result<PlaceDetail, GeocompleteError>;
}

/// Places web service client
pub struct PlacesClient {
    api_key: String,
    /// Caller parameters merged verbatim into every autocomplete request
    query_params: Vec<(String, String)>,
    /// Caller parameters merged verbatim into every details request
    details_params: Vec<(String, String)>,
    http: reqwest::Client,
    runtime: Runtime,
}

impl PlacesClient {
    /// Create a new client
    ///
    /// Fails only if the tokio runtime cannot be built.
    pub fn new(
        api_key: String,
        query_params: Vec<(String, String)>,
        details_params: Vec<(String, String)>,
    ) -> Result<Self, GeocompleteError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            api_key,
            query_params,
            details_params,
            http: reqwest::Client::new(),
            runtime,
        })
    }

    /// Perform a GET and deserialize the JSON body
    fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, GeocompleteError> {
        self.runtime.block_on(async {
            let response = self
                .http
                .get(url)
                .send()
                .await
                .map_err(|e| GeocompleteError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(GeocompleteError::Api {
                    code: status.as_u16(),
                    message,
                });
            }

            response
                .json::<T>()
                .await
                .map_err(|e| GeocompleteError::Parse(e.to_string()))
        })
    }
}

impl SuggestionSource for PlacesClient {
    /// Fetch autocomplete suggestions for a settled input value
    ///
    /// Returns the full candidate list, which may be empty. Never retries.
    fn fetch_suggestions(&self, input: &str) -> Result<Vec<PlaceSuggestion>, GeocompleteError> {
        let url = request::autocomplete_url(input, &self.api_key, &self.query_params)?;
        let response: AutocompleteResponse = self.get_json(url)?;
        Ok(response.predictions)
    }
}

impl DetailSource for PlacesClient {
    fn fetch_detail(&self, place_id: &str) -> Result<PlaceDetail, GeocompleteError> {
        let url = request::details_url(place_id, &self.api_key, &self.details_params)?;
        let response: DetailsResponse = self.get_json(url)?;
        response.result.ok_or_else(|| {
            GeocompleteError::Parse(format!(
                "details response for {} carried no result (status: {})",
                place_id, response.status
            ))
        })
    }
}
