//! The place-search autocomplete widget
//!
//! A text input with a debounced suggestion dropdown underneath. State and
//! behavior live in [`state`], key handling in [`events`], drawing in
//! [`render`]. The widget never talks to the network directly; it queues
//! fetch requests to the worker thread and drains responses on every tick.

mod events;
mod options;
mod render;
mod state;
pub mod theme;

// Re-export public types
pub use options::{Callbacks, EmptyRenderer, RowRenderer, WidgetOptions};
pub use state::PlacesAutocomplete;
pub use theme::Theme;
