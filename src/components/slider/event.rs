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

//! Input handling for the carousel.
//!
//! This module maps raw terminal events to slider transitions:
//!
//! * left/right arrow keys retreat/advance, digits jump to a dot,
//! * mouse movement in and out of the pane pauses/resumes autoplay,
//! * clicks on the arrow and dot affordances trigger discrete transitions,
//! * press-drag-release inside the pane is interpreted as a swipe.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::components::SliderPane;
use crate::events::AppEvent;
use crate::model::SliderEvent;

impl SliderPane {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        now_ms: u64,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        match event {
            Event::Key(key) => self.process_key(*key, now_ms, event_tx)?,
            Event::Mouse(mouse) => self.process_mouse(*mouse, now_ms, event_tx)?,
            _ => {}
        }

        Ok(())
    }

    fn process_key(
        &mut self,
        key: KeyEvent,
        now_ms: u64,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        match key.code {
            KeyCode::Left => self.retreat(now_ms),
            KeyCode::Right => self.advance(now_ms),

            // Digits mirror the dot affordances for keyboard users, so they
            // are only wired while dots are.
            KeyCode::Char(digit @ '1'..='9') => {
                if self.is_empty() || !self.show_dots {
                    return Ok(());
                }
                let target = digit as usize - '1' as usize;
                if let Err(err) = self.jump(target, now_ms) {
                    event_tx.send(AppEvent::Error(err.to_string()))?;
                }
            }

            _ => {}
        }

        Ok(())
    }

    fn process_mouse(
        &mut self,
        mouse: MouseEvent,
        now_ms: u64,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        let position = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved => self.pointer_moved(position, now_ms),
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer_down(position, now_ms, event_tx)?;
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.dragging {
                    self.apply(SliderEvent::DragMove { x: position.x });
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.dragging {
                    self.dragging = false;
                    self.apply(SliderEvent::DragEnd { now_ms });
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Tracks the pointer crossing the pane boundary; entering pauses the
    /// autoplay timer, leaving re-arms it with a fresh interval. Hovering
    /// by itself never changes the index.
    fn pointer_moved(&mut self, position: Position, now_ms: u64) {
        let inside = self.area.contains(position);
        if inside && !self.hovering {
            self.hovering = true;
            self.apply(SliderEvent::PointerEnter);
        } else if !inside && self.hovering {
            self.hovering = false;
            self.apply(SliderEvent::PointerLeave { now_ms });
        }
    }

    fn pointer_down(
        &mut self,
        position: Position,
        now_ms: u64,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        if self.prev_arrow.is_some_and(|rect| rect.contains(position)) {
            self.retreat(now_ms);
            return Ok(());
        }
        if self.next_arrow.is_some_and(|rect| rect.contains(position)) {
            self.advance(now_ms);
            return Ok(());
        }

        if let Some(target) = self
            .dots
            .iter()
            .position(|rect| rect.contains(position))
        {
            // Dots are built one per slide, so the target is in range
            // unless the geometry is stale; report rather than ignore.
            if let Err(err) = self.jump(target, now_ms) {
                event_tx.send(AppEvent::Error(err.to_string()))?;
            }
            return Ok(());
        }

        if self.area.contains(position) {
            self.dragging = true;
            self.apply(SliderEvent::DragStart { x: position.x });
        }

        Ok(())
    }
}
