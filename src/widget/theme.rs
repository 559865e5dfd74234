//! Style overrides for the widget
//!
//! Every visual element the widget draws can be restyled by the caller;
//! the defaults follow the usual focused-cyan/unfocused-gray scheme.

use ratatui::style::{Color, Modifier, Style};

/// Widget style overrides
#[derive(Debug, Clone)]
pub struct Theme {
    /// Input border when the input has focus
    pub input_border_focused: Style,
    /// Input border when unfocused
    pub input_border: Style,
    /// Dropdown border
    pub list_border: Style,
    /// Plain (unmatched) row text
    pub row: Style,
    /// The currently selected row
    pub row_selected: Style,
    /// Matched fragments of a row's text
    pub highlight: Style,
    /// Secondary text (locality) after the main text
    pub secondary: Style,
    /// The empty-result message
    pub empty: Style,
    /// The loading indicator row
    pub loading: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            input_border_focused: Style::default().fg(Color::Cyan),
            input_border: Style::default().fg(Color::DarkGray),
            list_border: Style::default().fg(Color::DarkGray),
            row: Style::default(),
            row_selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            secondary: Style::default().fg(Color::DarkGray),
            empty: Style::default().fg(Color::DarkGray),
            loading: Style::default().fg(Color::Yellow),
        }
    }
}
