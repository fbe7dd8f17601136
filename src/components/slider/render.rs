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

//! UI rendering logic for the carousel.
//!
//! One panel is visible at a time, selected by the strip offset; the four
//! slide variants each get their own layout. The draw pass also records the
//! pane, arrow, and dot geometry on the component for mouse hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    components::SliderPane,
    model::{Media, Slide},
    render::Render,
    theme::Theme,
    util::format::{format_price, format_stars},
};

const ARROW_WIDTH: u16 = 3;
const DOT_STRIDE: u16 = 2;

impl Render for SliderPane {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.prev_arrow = None;
        self.next_arrow = None;
        self.dots.clear();

        if area.width == 0 || area.height == 0 {
            self.area = Rect::default();
            return;
        }
        self.area = area;

        let dots_height = if self.show_dots && !self.is_empty() { 1 } else { 0 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(dots_height)])
            .split(area);

        self.draw_strip(f, rows[0], theme);

        if self.show_arrows && !self.is_empty() {
            self.draw_arrows(f, rows[0], theme);
        }

        if dots_height > 0 {
            self.draw_dots(f, rows[1], theme);
        }
    }
}

impl SliderPane {
    fn draw_strip(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::symmetric(4, 1));

        let Some(slide) = self.current_slide() else {
            let placeholder = Paragraph::new("nothing to show")
                .style(Style::default().fg(theme.panel_detail_fg))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(placeholder, area);
            return;
        };

        let lines = match slide {
            Slide::Hero(hero) => vec![
                Line::from(hero.title.as_str())
                    .style(Style::default().fg(theme.panel_title_fg).bold()),
                Line::from(hero.subtitle.as_str())
                    .style(Style::default().fg(theme.panel_body_fg)),
                Line::default(),
                Line::from(hero.description.as_str())
                    .style(Style::default().fg(theme.panel_body_fg)),
                Line::default(),
                Line::from(format!("➔ {} ({})", hero.cta_text, hero.cta_link))
                    .style(Style::default().fg(theme.accent_colour)),
                media_line(&hero.media, theme),
            ],

            Slide::Tour(tour) => vec![
                Line::from(tour.name.as_str())
                    .style(Style::default().fg(theme.panel_title_fg).bold()),
                Line::from(tour.duration.as_str())
                    .style(Style::default().fg(theme.panel_detail_fg)),
                Line::default(),
                Line::from(vec![
                    Span::styled(format_stars(tour.rating), Style::default().fg(theme.star_fg)),
                    Span::styled(
                        format!(" {:.1}", tour.rating),
                        Style::default().fg(theme.panel_detail_fg),
                    ),
                ]),
                Line::from(format_price(tour.price)).style(Style::default().fg(theme.price_fg)),
                Line::default(),
                Line::from("Book Now").style(Style::default().fg(theme.accent_colour).bold()),
                media_line(&tour.media, theme),
            ],

            Slide::Lodging(lodging) => vec![
                Line::from(lodging.name.as_str())
                    .style(Style::default().fg(theme.panel_title_fg).bold()),
                Line::from(lodging.location.as_str())
                    .style(Style::default().fg(theme.panel_detail_fg)),
                Line::default(),
                Line::from(vec![
                    Span::styled(
                        format_stars(lodging.rating),
                        Style::default().fg(theme.star_fg),
                    ),
                    Span::styled(
                        format!(" {:.1}", lodging.rating),
                        Style::default().fg(theme.panel_detail_fg),
                    ),
                ]),
                Line::from(format!("{} / night", format_price(lodging.nightly_price)))
                    .style(Style::default().fg(theme.price_fg)),
                media_line(&lodging.media, theme),
            ],

            Slide::Testimonial(testimonial) => {
                let mut lines = vec![
                    Line::from(format!("“{}”", testimonial.quote))
                        .style(Style::default().fg(theme.panel_body_fg).italic()),
                    Line::default(),
                    Line::from(format_stars(f64::from(testimonial.rating)))
                        .style(Style::default().fg(theme.star_fg)),
                    Line::from(testimonial.author.as_str())
                        .style(Style::default().fg(theme.panel_title_fg).bold()),
                    Line::from(testimonial.role.as_str())
                        .style(Style::default().fg(theme.panel_detail_fg)),
                ];
                if let Some(destination) = &testimonial.destination {
                    lines.push(
                        Line::from(format!("Visited: {destination}"))
                            .style(Style::default().fg(theme.panel_detail_fg)),
                    );
                }
                lines.push(media_line(&testimonial.media, theme));
                lines
            }
        };

        let panel = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(panel, area);
    }

    fn draw_arrows(&mut self, f: &mut Frame, strip: Rect, theme: &Theme) {
        if strip.width < 2 * ARROW_WIDTH + 2 {
            return;
        }
        let y = strip.y + strip.height / 2;

        let prev = Rect::new(strip.x + 1, y, ARROW_WIDTH, 1);
        let next = Rect::new(strip.right().saturating_sub(ARROW_WIDTH + 1), y, ARROW_WIDTH, 1);

        let style = Style::default().fg(theme.arrow_fg).bold();
        f.render_widget(
            Paragraph::new("‹").style(style).alignment(Alignment::Center),
            prev,
        );
        f.render_widget(
            Paragraph::new("›").style(style).alignment(Alignment::Center),
            next,
        );

        self.prev_arrow = Some(prev);
        self.next_arrow = Some(next);
    }

    fn draw_dots(&mut self, f: &mut Frame, row: Rect, theme: &Theme) {
        let indicator = self.indicator();
        let total = indicator.len() as u16 * DOT_STRIDE;
        if total == 0 || row.width < total {
            return;
        }

        // Placed by hand rather than with centered alignment so the
        // recorded hit rects line up with the glyphs.
        let start_x = row.x + (row.width - total) / 2;
        for (i, active) in indicator.iter().enumerate() {
            let rect = Rect::new(start_x + i as u16 * DOT_STRIDE, row.y, 1, 1);
            let (glyph, style) = if *active {
                ("●", Style::default().fg(theme.dot_active_fg))
            } else {
                ("○", Style::default().fg(theme.dot_inactive_fg))
            };
            f.render_widget(Paragraph::new(glyph).style(style), rect);
            self.dots.push(rect);
        }
    }
}

fn media_line(media: &Media, theme: &Theme) -> Line<'static> {
    let text = if media.is_motion() {
        format!("▶ video · falls back to {}", media.poster())
    } else {
        format!("image: {}", media.poster())
    };
    Line::from(text).style(Style::default().fg(theme.panel_detail_fg))
}
