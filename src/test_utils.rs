#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::Instant;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::error::GeocompleteError;
    use crate::places::{
        DetailSource, FetchRequest, FetchResponse, PlaceDetail, PlaceSuggestion, SuggestionSource,
    };
    use crate::widget::{PlacesAutocomplete, WidgetOptions};

    pub const TEST_API_KEY: &str = "DUMMY_API_KEY";

    pub fn suggestion(description: &str, place_id: &str) -> PlaceSuggestion {
        PlaceSuggestion::predefined(description, place_id)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// A widget wired to raw channels instead of a worker thread, so tests
    /// can observe queued requests and inject responses deterministically
    pub fn test_widget(
        options: WidgetOptions,
    ) -> (
        PlacesAutocomplete,
        Receiver<FetchRequest>,
        Sender<FetchResponse>,
    ) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut widget = PlacesAutocomplete::new(options);
        widget.set_channels(request_tx, response_rx);
        (widget, request_rx, response_tx)
    }

    pub fn keyed_options() -> WidgetOptions {
        WidgetOptions {
            api_key: Some(TEST_API_KEY.to_string()),
            ..WidgetOptions::default()
        }
    }

    /// Type a string into the widget one key at a time
    pub fn type_str(widget: &mut PlacesAutocomplete, text: &str, now: Instant) {
        for ch in text.chars() {
            widget.handle_key_at(key(KeyCode::Char(ch)), now);
        }
    }

    /// Suggestion source stub recording every request
    pub struct StubSuggestions {
        results: Vec<PlaceSuggestion>,
        error: Option<String>,
        requests: Mutex<Vec<String>>,
    }

    impl StubSuggestions {
        pub fn with_results(results: Vec<PlaceSuggestion>) -> Self {
            Self {
                results,
                error: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                results: Vec::new(),
                error: Some(message.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl SuggestionSource for StubSuggestions {
        fn fetch_suggestions(
            &self,
            input: &str,
        ) -> Result<Vec<PlaceSuggestion>, GeocompleteError> {
            self.requests.lock().unwrap().push(input.to_string());
            match &self.error {
                Some(message) => Err(GeocompleteError::Network(message.clone())),
                None => Ok(self.results.clone()),
            }
        }
    }

    /// Detail source stub returning a fixed record
    #[derive(Default)]
    pub struct StubDetails {
        name: Option<String>,
    }

    impl StubDetails {
        pub fn named(name: &str) -> Self {
            Self {
                name: Some(name.to_string()),
            }
        }
    }

    impl DetailSource for StubDetails {
        fn fetch_detail(&self, place_id: &str) -> Result<PlaceDetail, GeocompleteError> {
            Ok(PlaceDetail {
                place_id: place_id.to_string(),
                name: self.name.clone().unwrap_or_default(),
                ..PlaceDetail::default()
            })
        }
    }
}
