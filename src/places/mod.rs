//! Places API integration: data model, request construction, HTTP client,
//! and the background fetch worker.

pub mod client;
pub mod request;
pub mod types;
pub mod worker;

// Re-export public types
pub use client::{DetailSource, PlacesClient, SuggestionSource};
pub use types::{MatchedSubstring, PlaceDetail, PlaceSuggestion, StructuredFormatting};
pub use worker::{FetchRequest, FetchResponse, spawn_worker};
