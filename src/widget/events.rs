//! Key handling for the widget
//!
//! Text keys go to the textarea and re-arm the debounce timer; Up/Down move
//! the dropdown selection; Enter selects; Esc blurs. Only key-press events
//! are processed to avoid duplicates on terminals that report releases.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::state::PlacesAutocomplete;

impl PlacesAutocomplete {
    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Instant::now());
    }

    /// `handle_key` with an explicit clock reading
    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if !self.focused {
            return;
        }

        match key.code {
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Enter => self.select_current_at(now),
            KeyCode::Esc => self.blur(),
            _ => {
                if self.textarea.input(key) {
                    // Text changed: notify the host and restart the countdown
                    self.notify_text_change();
                    let text = self.get_address_text().to_string();
                    self.debouncer.update_at(&text, now);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
