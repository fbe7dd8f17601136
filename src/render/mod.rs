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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, theme::Theme, util::format::format_position};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a one-line header, the carousel pane, and a
/// one-line status bar. The carousel records its own geometry while drawing
/// so subsequent mouse events can be hit-tested against it.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: header, carousel, status line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);
    app.slider.draw(f, outer[1], &app.theme);
    draw_status(f, outer[2], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" vistui ", Style::default().fg(app.theme.accent_colour).bold()),
        Span::styled(
            app.config.slides_file.as_str(),
            Style::default().fg(app.theme.status_fg),
        ),
    ]));
    f.render_widget(header, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!(
                " slide {} · autoplay {} ",
                format_position(app.slider.index(), app.slider.len()),
                app.slider.autoplay_status(),
            ),
            Style::default().fg(app.theme.status_fg),
        ),
        Span::styled(
            "‹ › navigate · 1-9 jump · q quit",
            Style::default().fg(app.theme.status_fg),
        ),
    ];

    if let Some(error) = &app.status_error {
        spans.push(Span::styled(
            format!("  {error}"),
            Style::default().fg(app.theme.error_fg),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
