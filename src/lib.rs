//! geocomplete: an interactive place-search widget
//!
//! A text input with debounced autocomplete suggestions fetched from the
//! Places API, rendered as a selectable dropdown beneath the input. The
//! widget is headless-friendly: fetching goes through channels to a worker
//! thread, so the whole lifecycle can be driven (and tested) without a
//! terminal or a network.

pub mod config;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod places;
pub mod test_utils;
pub mod widget;

// Re-export the types most callers need
pub use error::GeocompleteError;
pub use places::{PlaceDetail, PlaceSuggestion};
pub use widget::{Callbacks, PlacesAutocomplete, Theme, WidgetOptions};
