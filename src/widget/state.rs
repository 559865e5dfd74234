//! Widget state and lifecycle
//!
//! Owns the input text, the suggestion list, the loading/focus flags, the
//! debounce timer, and the channel handles to the fetch worker. All
//! mutations happen on the event-loop thread: key events, tick polls, and
//! drained worker responses.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use super::options::{Callbacks, EmptyRenderer, RowRenderer, WidgetOptions};
use super::theme::Theme;
use crate::debounce::Debouncer;
use crate::error::GeocompleteError;
use crate::places::{
    FetchRequest, FetchResponse, PlaceDetail, PlaceSuggestion, PlacesClient, spawn_worker,
};

/// The place-search autocomplete widget
pub struct PlacesAutocomplete {
    pub textarea: TextArea<'static>,
    /// API key; `None` suppresses fetching entirely
    pub api_key: Option<String>,
    /// Places rendered ahead of fetched suggestions
    pub predefined_places: Vec<PlaceSuggestion>,
    /// Current fetched suggestions, replaced wholesale per fetch
    pub suggestions: Vec<PlaceSuggestion>,
    /// Whether a suggestion fetch is outstanding
    pub loading: bool,
    /// Whether the input has focus
    pub focused: bool,
    /// Whether the dropdown renders at all
    pub list_visible: bool,
    /// Fetch a detail record on selection before invoking `on_press`
    pub fetch_details: bool,
    /// Selected dropdown row, if any
    pub selected: Option<usize>,
    pub placeholder: String,
    pub empty_message: Option<String>,
    pub theme: Theme,
    pub render_row: Option<RowRenderer>,
    pub render_empty: Option<EmptyRenderer>,
    pub callbacks: Callbacks,
    /// Debounce timer for keystrokes
    pub debouncer: Debouncer,
    /// Channel to send requests to the fetch worker
    pub request_tx: Option<Sender<FetchRequest>>,
    /// Channel to receive responses from the fetch worker
    pub response_rx: Option<Receiver<FetchResponse>>,
}

impl PlacesAutocomplete {
    /// Create a widget with no worker attached
    ///
    /// Call [`set_channels`](Self::set_channels) to attach one, or use
    /// [`with_places_worker`](Self::with_places_worker).
    pub fn new(options: WidgetOptions) -> Self {
        let WidgetOptions {
            api_key,
            query_params: _,
            details_params: _,
            predefined_places,
            debounce_ms,
            fetch_details,
            list_visible,
            placeholder,
            initial_text,
            empty_message,
            theme,
            render_row,
            render_empty,
            callbacks,
        } = options;

        let initial = initial_text.unwrap_or_default();
        let mut textarea = TextArea::new(vec![initial.clone()]);
        textarea.set_placeholder_text(placeholder.as_str());
        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);

        let mut debouncer = Debouncer::new(debounce_ms);
        // A non-empty initial value counts as input and fetches once settled
        if !initial.is_empty() {
            debouncer.update(&initial);
        }

        Self {
            textarea,
            api_key,
            predefined_places,
            suggestions: Vec::new(),
            loading: false,
            focused: true,
            list_visible,
            fetch_details,
            selected: None,
            placeholder,
            empty_message,
            theme,
            render_row,
            render_empty,
            callbacks,
            debouncer,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Create a widget backed by a Places fetch worker
    ///
    /// Spawns the worker thread with a [`PlacesClient`] built from the
    /// options. Without an API key no worker is spawned; the widget then
    /// only ever clears its suggestions.
    pub fn with_places_worker(options: WidgetOptions) -> Result<Self, GeocompleteError> {
        let api_key = options.api_key.clone();
        let query_params = options.query_params.clone();
        let details_params = options.details_params.clone();

        let mut widget = Self::new(options);

        if let Some(key) = api_key {
            let client = PlacesClient::new(key, query_params, details_params)?;
            let (request_tx, request_rx) = mpsc::channel();
            let (response_tx, response_rx) = mpsc::channel();
            spawn_worker(client, None, request_rx, response_tx);
            widget.set_channels(request_tx, response_rx);
        }

        Ok(widget)
    }

    /// Attach the channel handles for communication with a fetch worker
    pub fn set_channels(
        &mut self,
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    // --- Imperative handle -------------------------------------------------

    /// Set the input text programmatically
    ///
    /// Re-arms the debounce timer like a keystroke would, so a settled
    /// programmatic value fetches too. Does not fire `on_text_change`.
    pub fn set_address_text(&mut self, text: &str) {
        self.set_address_text_at(text, Instant::now());
    }

    /// `set_address_text` with an explicit clock reading
    pub fn set_address_text_at(&mut self, text: &str, now: Instant) {
        let single_line = text.replace(['\r', '\n'], " ");
        let mut textarea = TextArea::new(vec![single_line.clone()]);
        textarea.set_placeholder_text(self.placeholder.as_str());
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
        self.debouncer.update_at(&single_line, now);
    }

    /// Read the current input text
    pub fn get_address_text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|line| line.as_str())
            .unwrap_or("")
    }

    /// Focus the input field
    pub fn focus(&mut self) {
        self.focused = true;
        if let Some(on_focus) = &mut self.callbacks.on_focus {
            on_focus();
        }
    }

    /// Blur the input field
    pub fn blur(&mut self) {
        self.focused = false;
    }

    // --- Event-loop tick ---------------------------------------------------

    /// Advance the widget: poll the debounce timer, drain worker responses
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// `tick` with an explicit clock reading
    pub fn tick_at(&mut self, now: Instant) {
        if let Some(settled) = self.debouncer.poll_at(now) {
            self.on_settled(settled);
        }
        self.drain_responses();
    }

    /// Handle a settled debounce value
    ///
    /// An empty value or a missing API key clears the list and issues no
    /// request; otherwise exactly one fetch is queued.
    fn on_settled(&mut self, input: String) {
        if input.is_empty() || self.api_key.is_none() {
            self.suggestions.clear();
            self.selected = None;
            self.loading = false;
            return;
        }

        if let Some(tx) = &self.request_tx
            && tx.send(FetchRequest::Suggestions { input }).is_ok()
        {
            self.loading = true;
        }
    }

    /// Apply every response the worker has produced so far
    ///
    /// Responses apply in arrival order; a late response for an older query
    /// overwrites a newer one (no generation token, by contract).
    fn drain_responses(&mut self) {
        let mut responses = Vec::new();
        if let Some(rx) = &self.response_rx {
            while let Ok(response) = rx.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            self.apply_response(response);
        }
    }

    fn apply_response(&mut self, response: FetchResponse) {
        match response {
            FetchResponse::Suggestions(Ok(list)) => {
                self.suggestions = list;
                self.loading = false;
                // Keep the selection only while it still points at a row
                if self.selected.is_some_and(|i| i >= self.row_count()) {
                    self.selected = None;
                }
            }
            FetchResponse::Suggestions(Err(error)) => {
                // Prior suggestions are kept; only the loading flag clears
                self.loading = false;
                log::warn!("Suggestion fetch failed: {}", error);
                self.report_error(&error);
            }
            FetchResponse::Detail { suggestion, result } => match result {
                Ok(detail) => self.invoke_press(&suggestion, Some(&detail)),
                Err(error) => {
                    log::warn!(
                        "Detail fetch for {:?} failed: {}",
                        suggestion.place_id,
                        error
                    );
                    self.report_error(&error);
                    self.invoke_press(&suggestion, None);
                }
            },
        }
    }

    // --- Selection ---------------------------------------------------------

    /// Rows the dropdown shows: predefined places, then fetched suggestions
    pub fn visible_rows(&self) -> impl Iterator<Item = &PlaceSuggestion> {
        self.predefined_places.iter().chain(self.suggestions.iter())
    }

    pub fn row_count(&self) -> usize {
        self.predefined_places.len() + self.suggestions.len()
    }

    pub fn row(&self, index: usize) -> Option<&PlaceSuggestion> {
        self.visible_rows().nth(index)
    }

    /// Move the selection down, starting from the top
    pub fn select_next(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < count => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    /// Move the selection up, starting from the bottom
    pub fn select_prev(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => count - 1,
        });
    }

    /// Select the currently highlighted row, if any
    pub fn select_current_at(&mut self, now: Instant) {
        if let Some(index) = self.selected {
            self.select_at(index, now);
        }
    }

    /// Select a row by index
    ///
    /// Always sets the input text to the suggestion's description. With
    /// detail fetching enabled (and a worker attached) the press callback
    /// is deferred until the detail response arrives; otherwise it fires
    /// immediately with no detail.
    pub fn select(&mut self, index: usize) {
        self.select_at(index, Instant::now());
    }

    /// `select` with an explicit clock reading
    pub fn select_at(&mut self, index: usize, now: Instant) {
        let Some(suggestion) = self.row(index).cloned() else {
            return;
        };

        self.set_address_text_at(&suggestion.description, now);

        if self.fetch_details
            && let Some(tx) = &self.request_tx
            && tx
                .send(FetchRequest::Detail {
                    suggestion: suggestion.clone(),
                })
                .is_ok()
        {
            return;
        }

        self.invoke_press(&suggestion, None);
    }

    // --- Callbacks ---------------------------------------------------------

    fn invoke_press(&mut self, suggestion: &PlaceSuggestion, detail: Option<&PlaceDetail>) {
        if let Some(on_press) = &mut self.callbacks.on_press {
            on_press(suggestion, detail);
        }
    }

    pub(super) fn notify_text_change(&mut self) {
        let text = self.get_address_text().to_string();
        if let Some(on_text_change) = &mut self.callbacks.on_text_change {
            on_text_change(&text);
        }
    }

    fn report_error(&mut self, error: &GeocompleteError) {
        if let Some(on_error) = &mut self.callbacks.on_error {
            on_error(error);
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
