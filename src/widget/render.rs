//! Widget rendering
//!
//! Input field on top, dropdown list beneath. The default row rendering
//! splits the suggestion's primary text into highlighted/plain spans from
//! the API's matched-substring offsets; a caller-supplied row renderer
//! replaces it entirely. Empty-result rendering shows only when a fetch is
//! not in flight.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::PlacesAutocomplete;
use crate::highlight::split_spans;
use crate::places::PlaceSuggestion;

// Dropdown display constants
const INPUT_HEIGHT: u16 = 3;
const MAX_VISIBLE_ROWS: usize = 10;
const LIST_BORDER_HEIGHT: u16 = 2;
const ROW_PADDING: u16 = 4;

/// Built-in empty-result message
const DEFAULT_EMPTY_MESSAGE: &str = "No results";

impl PlacesAutocomplete {
    /// Render the widget into the given area
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout =
            Layout::vertical([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)]).split(area);

        self.render_input(frame, layout[0]);
        if self.list_visible {
            self.render_dropdown(frame, layout[1]);
        }
    }

    /// Render the input field (top)
    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        // Border color reflects focus
        let border_style = if self.focused {
            self.theme.input_border_focused
        } else {
            self.theme.input_border
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(border_style),
        );

        frame.render_widget(&self.textarea, area);
    }

    /// Render the dropdown list below the input
    fn render_dropdown(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let rows: Vec<&PlaceSuggestion> = self.visible_rows().collect();
        if rows.is_empty() {
            if self.loading {
                self.render_notice(frame, area, Line::styled("Loading...", self.theme.loading));
            } else if !self.get_address_text().is_empty() {
                // Empty-result rendering, suppressed while a fetch is in flight
                let line = match &self.render_empty {
                    Some(render_empty) => render_empty(),
                    None => Line::styled(
                        self.empty_message
                            .clone()
                            .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string()),
                        self.theme.empty,
                    ),
                };
                self.render_notice(frame, area, line);
            }
            return;
        }

        let visible_count = rows.len().min(MAX_VISIBLE_ROWS);
        let list_height = (visible_count as u16 + LIST_BORDER_HEIGHT).min(area.height);

        // Size the dropdown to its widest visible row
        let max_row_width = rows
            .iter()
            .take(MAX_VISIBLE_ROWS)
            .map(|s| s.description.width())
            .max()
            .unwrap_or(0) as u16;
        let list_width = (max_row_width + ROW_PADDING).clamp(20, area.width);

        let list_area = Rect {
            x: area.x,
            y: area.y,
            width: list_width,
            height: list_height,
        };

        let items: Vec<ListItem> = rows
            .iter()
            .take(MAX_VISIBLE_ROWS)
            .enumerate()
            .map(|(i, suggestion)| {
                let selected = self.selected == Some(i);
                let line = match &self.render_row {
                    Some(render_row) => render_row(suggestion),
                    None => self.default_row(suggestion, selected),
                };
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.list_border),
        );

        frame.render_widget(list, list_area);
    }

    /// Default row rendering: highlighted primary text plus dim secondary
    fn default_row(&self, suggestion: &PlaceSuggestion, selected: bool) -> Line<'static> {
        if selected {
            // High-contrast selected row; match styling is dropped on purpose
            return Line::styled(
                format!("\u{25ba} {}", suggestion.description),
                self.theme.row_selected,
            );
        }

        let (text, matched_spans) = suggestion.primary_text();
        let mut spans = vec![Span::raw("  ")];
        for fragment in split_spans(text, matched_spans) {
            let style = if fragment.matched {
                self.theme.highlight
            } else {
                self.theme.row
            };
            spans.push(Span::styled(fragment.text, style));
        }

        if let Some(sf) = &suggestion.structured_formatting
            && !sf.main_text.is_empty()
            && !sf.secondary_text.is_empty()
        {
            spans.push(Span::styled(
                format!(", {}", sf.secondary_text),
                self.theme.secondary,
            ));
        }

        Line::from(spans)
    }

    /// Render a single-line notice (loading or empty message) in a box
    fn render_notice(&self, frame: &mut Frame, area: Rect, line: Line<'static>) {
        let width = (line.width() as u16 + ROW_PADDING).clamp(20, area.width);
        let notice_area = Rect {
            x: area.x,
            y: area.y,
            width,
            height: 3.min(area.height),
        };
        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.list_border),
        );
        frame.render_widget(paragraph, notice_area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
