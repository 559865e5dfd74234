//! Widget configuration: options, callbacks, and render-override hooks

use ratatui::text::Line;

use super::theme::Theme;
use crate::config::Config;
use crate::error::GeocompleteError;
use crate::places::{PlaceDetail, PlaceSuggestion};

/// Fully replaces the default row rendering for a suggestion
pub type RowRenderer = Box<dyn Fn(&PlaceSuggestion) -> Line<'static>>;

/// Fully replaces the default empty-result rendering
pub type EmptyRenderer = Box<dyn Fn() -> Line<'static>>;

/// Host-application callbacks
///
/// All optional; the widget never requires a host to observe anything.
/// `on_press` receives the selected suggestion and, when detail fetching is
/// enabled and succeeded, its detail record.
#[derive(Default)]
pub struct Callbacks {
    pub on_press: Option<Box<dyn FnMut(&PlaceSuggestion, Option<&PlaceDetail>)>>,
    pub on_text_change: Option<Box<dyn FnMut(&str)>>,
    pub on_focus: Option<Box<dyn FnMut()>>,
    pub on_error: Option<Box<dyn FnMut(&GeocompleteError)>>,
}

/// Widget construction options
pub struct WidgetOptions {
    /// API key; `None` silently suppresses all fetching
    pub api_key: Option<String>,
    /// Extra autocomplete query parameters, merged verbatim
    pub query_params: Vec<(String, String)>,
    /// Extra details query parameters, merged verbatim
    pub details_params: Vec<(String, String)>,
    /// Places rendered ahead of fetched suggestions
    pub predefined_places: Vec<PlaceSuggestion>,
    /// Quiet period before a fetch is issued
    pub debounce_ms: u64,
    /// Fetch a detail record on selection before invoking `on_press`
    pub fetch_details: bool,
    /// Whether the dropdown renders at all
    pub list_visible: bool,
    /// Input placeholder text
    pub placeholder: String,
    /// Initial input text
    pub initial_text: Option<String>,
    /// Static message shown when a fetch returned nothing
    ///
    /// Overridden by `render_empty`; defaults to a built-in message.
    pub empty_message: Option<String>,
    pub theme: Theme,
    pub render_row: Option<RowRenderer>,
    pub render_empty: Option<EmptyRenderer>,
    pub callbacks: Callbacks,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            query_params: Vec::new(),
            details_params: Vec::new(),
            predefined_places: Vec::new(),
            debounce_ms: 300,
            fetch_details: false,
            list_visible: true,
            placeholder: "Search...".to_string(),
            initial_text: None,
            empty_message: None,
            theme: Theme::default(),
            render_row: None,
            render_empty: None,
            callbacks: Callbacks::default(),
        }
    }
}

impl WidgetOptions {
    /// Build options from a loaded config file and a resolved API key
    pub fn from_config(config: &Config, api_key: Option<String>) -> Self {
        let mut query_params = Vec::new();
        if let Some(language) = &config.api.language {
            query_params.push(("language".to_string(), language.clone()));
        }

        Self {
            api_key,
            query_params,
            debounce_ms: config.widget.debounce_ms,
            fetch_details: config.widget.fetch_details,
            list_visible: config.widget.list_visible,
            placeholder: config.widget.placeholder.clone(),
            ..Self::default()
        }
    }
}
