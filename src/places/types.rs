//! Data model for the Places Autocomplete and Details APIs
//!
//! These mirror the wire format of the Google Places web service. Records
//! are immutable once deserialized; the widget replaces its suggestion list
//! wholesale on every fetch.

use serde::Deserialize;

/// A span of a suggestion's text that matched the query
///
/// Offsets are in characters from the start of the text, as reported by the
/// API. Used by the default row renderer to highlight matched fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MatchedSubstring {
    pub offset: usize,
    pub length: usize,
}

/// Primary/secondary breakdown of a suggestion's description
///
/// `main_text` is typically the place name, `secondary_text` the containing
/// locality. The main text carries its own matched-substring offsets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct StructuredFormatting {
    #[serde(default)]
    pub main_text: String,
    #[serde(default)]
    pub secondary_text: String,
    #[serde(default)]
    pub main_text_matched_substrings: Vec<MatchedSubstring>,
}

/// One candidate result from the autocomplete endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceSuggestion {
    pub description: String,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub matched_substrings: Vec<MatchedSubstring>,
    #[serde(default)]
    pub structured_formatting: Option<StructuredFormatting>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl PlaceSuggestion {
    /// Build a suggestion from just a description and place id
    ///
    /// Used for predefined places supplied by the caller, which have no
    /// matched substrings or structured formatting.
    pub fn predefined(description: impl Into<String>, place_id: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            place_id: place_id.into(),
            matched_substrings: Vec::new(),
            structured_formatting: None,
            types: Vec::new(),
        }
    }

    /// The text shown in the default row rendering, with the matched spans
    /// that apply to it
    ///
    /// Prefers the structured formatting's main text (with its own offsets);
    /// falls back to the full description.
    pub fn primary_text(&self) -> (&str, &[MatchedSubstring]) {
        match &self.structured_formatting {
            Some(sf) if !sf.main_text.is_empty() => {
                (&sf.main_text, &sf.main_text_matched_substrings)
            }
            _ => (&self.description, &self.matched_substrings),
        }
    }
}

/// Response envelope of the autocomplete endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub predictions: Vec<PlaceSuggestion>,
    #[serde(default)]
    pub status: String,
}

/// One component of a place's address (street, locality, country, ...)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Geometry of a place detail record
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct Geometry {
    #[serde(default)]
    pub location: Location,
}

/// Expanded information for a single selected suggestion
///
/// Fetched lazily from the details endpoint when a suggestion is selected
/// and detail fetching is enabled. Never cached; fetched fresh per
/// selection.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct PlaceDetail {
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub utc_offset: Option<i32>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Response envelope of the details endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub result: Option<PlaceDetail>,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
