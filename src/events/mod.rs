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

//! Application logic and event handling.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. All inputs — keyboard, mouse, the periodic tick, and the
//! slide loader — arrive on one channel as [`AppEvent`]s and are applied as
//! discrete, run-to-completion reaction steps: each event fully updates the
//! state and completes a redraw before the next event is taken, so no
//! partially-applied transition is ever observable.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::Slide, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    SlidesLoaded(Vec<Slide>, Option<String>),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => handle_mouse(app, mouse)?,
            AppEvent::SlidesLoaded(slides, warning) => handle_slides_loaded(app, slides, warning),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::Tick => handle_tick(app),
            AppEvent::ExitApplication => unreachable!(),
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Maps keyboard input to application actions and slider transitions.
///
/// Application-level keys (quitting) are handled here; everything else is
/// offered to the carousel, which picks out the navigation keys it
/// recognizes and ignores the rest.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        _ => {
            let now_ms = app.now_ms();
            let event = Event::Key(key);
            let event_tx = app.event_tx.clone();
            app.slider.process_event(&event, now_ms, &event_tx)?;
        }
    }

    Ok(())
}
