use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;

use geocomplete::config;
use geocomplete::widget::{Callbacks, PlacesAutocomplete, WidgetOptions};

/// How long to wait for terminal events before ticking the widget
const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(
    name = "geocomplete",
    version,
    about = "Interactive place search with debounced autocomplete suggestions"
)]
struct Cli {
    /// Places API key (falls back to GOOGLE_PLACES_API_KEY, then the config file)
    #[arg(long)]
    api_key: Option<String>,

    /// Quiet period in milliseconds before a fetch is issued
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Language code merged into every request
    #[arg(long)]
    language: Option<String>,

    /// Fetch a detail record when a suggestion is selected
    #[arg(long)]
    fetch_details: bool,

    /// Config file path (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    let file_config = config::load(cli.config.as_deref())?;
    let api_key = config::resolve_api_key(cli.api_key.clone(), &file_config);
    if api_key.is_none() {
        log::warn!("No API key configured; suggestions are disabled");
    }

    let mut options = WidgetOptions::from_config(&file_config, api_key);
    if let Some(debounce_ms) = cli.debounce_ms {
        options.debounce_ms = debounce_ms;
    }
    if let Some(language) = cli.language {
        options
            .query_params
            .retain(|(name, _)| name != "language");
        options.query_params.push(("language".to_string(), language));
    }
    if cli.fetch_details {
        options.fetch_details = true;
    }

    // Status line fed by the widget's callbacks
    let status: Rc<RefCell<String>> = Rc::new(RefCell::new(
        "Type to search, Up/Down to choose, Enter to select, Esc to quit".to_string(),
    ));
    let press_status = Rc::clone(&status);
    let error_status = Rc::clone(&status);
    options.callbacks = Callbacks {
        on_press: Some(Box::new(move |suggestion, detail| {
            *press_status.borrow_mut() = match detail {
                Some(d) => format!(
                    "Selected: {} ({:.5}, {:.5})",
                    suggestion.description, d.geometry.location.lat, d.geometry.location.lng
                ),
                None => format!("Selected: {}", suggestion.description),
            };
        })),
        on_error: Some(Box::new(move |error| {
            *error_status.borrow_mut() = error.to_string();
        })),
        ..Callbacks::default()
    };

    let widget = PlacesAutocomplete::with_places_worker(options)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, widget, status);
    ratatui::restore();

    result
}

fn run(
    mut terminal: DefaultTerminal,
    mut widget: PlacesAutocomplete,
    status: Rc<RefCell<String>>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let layout =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(frame.area());
            widget.render(frame, layout[0]);
            frame.render_widget(Paragraph::new(status.borrow().clone()), layout[1]);
        })?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoid duplicates)
                if key.kind == KeyEventKind::Press {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if ctrl_c || (key.code == KeyCode::Esc && !widget.focused) {
                        break;
                    }
                    widget.handle_key(key);
                }
            }
        }

        // Poll the debounce timer and drain worker responses
        widget.tick();
    }

    Ok(())
}
