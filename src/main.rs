// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Showcase Carousel TUI.
//!
//! A terminal slideshow for heterogeneous travel content: hero banners,
//! tour cards, lodging cards, and testimonials, loaded from a JSON file and
//! advanced by an autoplay timer, keyboard commands, and mouse gestures.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Background Threads** capture user input, emit periodic ticks, and
//!   load the slide data file.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. All inputs are
//! serialized onto a single `std::sync::mpsc` channel, so every reaction
//! step runs to completion before the next begins.

mod components;
mod config;
mod data;
mod events;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::{Duration, Instant},
};

use crate::{
    components::SliderPane,
    config::AppConfig,
    events::{AppEvent, process_events},
    theme::Theme,
};

const TICK_MS: u64 = 100;

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub slider: SliderPane,
    pub status_error: Option<String>,

    started: Instant,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// The carousel starts empty and inert; it is rebuilt when the loader
    /// thread delivers the slide sequence.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let slider = SliderPane::new(
            Vec::new(),
            config.slider_config(),
            config.show_dots,
            config.show_arrows,
            0,
        );

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            slider,
            status_error: None,
            started: Instant::now(),
        }
    }

    /// Milliseconds since application start; the time base for autoplay
    /// deadlines and gesture timestamps.
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();
    config::save_config(&config).ok();

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture for hover, click, and drag gestures.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, releasing mouse capture, leaving the alternate screen, and
/// resetting the background color. It also ensures the cursor is made
/// visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background threads and enters the main event
/// loop.
///
/// This function spawns:
/// * An input thread forwarding raw terminal events.
/// * A tick thread driving the autoplay timer and UI refresh.
/// * A short-lived loader thread that reads the slide data file.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    tx_input.send(AppEvent::Key(key)).ok();
                }
                Ok(event::Event::Mouse(mouse)) => {
                    tx_input.send(AppEvent::Mouse(mouse)).ok();
                }
                _ => {}
            }
        }
    });

    // Spawn a thread to send a periodic tick application event; this is both
    // the time base for autoplay deadlines and the minimum "frame rate" of
    // the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(TICK_MS));
        }
    });

    // Load the slide sequence in the background. Loading failures degrade
    // to an empty, inert carousel rather than an application error.
    let tx_loader = app.event_tx.clone();
    let slides_path = PathBuf::from(&app.config.slides_file);
    thread::spawn(move || {
        let (slides, warning) = data::load_slides(&slides_path);
        tx_loader.send(AppEvent::SlidesLoaded(slides, warning)).ok();
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
