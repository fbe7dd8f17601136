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

//! The carousel component.
//!
//! This module hosts the shell around the pure slider state machine. The
//! shell owns the slide sequence, translates terminal input into state
//! machine events (`event.rs`), and draws the current panel, arrows, and
//! indicator dots (`render.rs`). The geometry of the last draw is recorded
//! on the component so mouse input can be hit-tested against the arrows,
//! the dots, and the pane itself.
//!
//! Every state transition completes its position sync in the same reaction
//! step: the strip offset and the indicator row are derived from the index
//! on demand and are never stored separately.

mod event;
mod render;

use ratatui::layout::Rect;

use crate::model::{Slide, SliderConfig, SliderError, SliderEvent, SliderState};
use crate::model::slider::Autoplay;

pub(crate) struct SliderPane {
    slides: Vec<Slide>,
    state: SliderState,

    show_dots: bool,
    show_arrows: bool,

    // Geometry recorded by the most recent draw, used for hit-testing.
    area: Rect,
    prev_arrow: Option<Rect>,
    next_arrow: Option<Rect>,
    dots: Vec<Rect>,

    hovering: bool,
    dragging: bool,
}

impl SliderPane {
    /// Builds the carousel over an already-loaded slide sequence and starts
    /// the autoplay timer. An empty sequence constructs an inert pane: no
    /// deadline is armed and every transition is a no-op.
    pub(crate) fn new(
        slides: Vec<Slide>,
        config: SliderConfig,
        show_dots: bool,
        show_arrows: bool,
        now_ms: u64,
    ) -> Self {
        let state = SliderState::new(slides.len(), config, now_ms);
        Self {
            slides,
            state,
            show_dots,
            show_arrows,
            area: Rect::default(),
            prev_arrow: None,
            next_arrow: None,
            dots: Vec::new(),
            hovering: false,
            dragging: false,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.state.index()
    }

    pub(crate) fn len(&self) -> usize {
        self.state.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Advances to the next slide, wrapping at the end.
    pub(crate) fn advance(&mut self, now_ms: u64) {
        self.state = self.state.apply(SliderEvent::Advance { now_ms });
    }

    /// Retreats to the previous slide, wrapping at the start.
    pub(crate) fn retreat(&mut self, now_ms: u64) {
        self.state = self.state.apply(SliderEvent::Retreat { now_ms });
    }

    /// Jumps straight to `index`. Out-of-range targets are rejected, never
    /// wrapped and never clamped: silently fixing the target here could
    /// mask an indexing bug in the caller.
    pub(crate) fn jump(&mut self, index: usize, now_ms: u64) -> Result<(), SliderError> {
        if !self.state.in_range(index) {
            return Err(SliderError::IndexOutOfRange {
                index,
                len: self.state.len(),
            });
        }
        self.state = self.state.apply(SliderEvent::Jump { index, now_ms });
        Ok(())
    }

    /// Feeds the autoplay timer; advances when the armed deadline passes.
    pub(crate) fn tick(&mut self, now_ms: u64) {
        self.state = self.state.apply(SliderEvent::Tick { now_ms });
    }

    /// The strip offset of the position sync, in percent of one panel
    /// width. Always `-(index * 100)`.
    pub(crate) fn strip_offset_percent(&self) -> i64 {
        -(self.state.index() as i64 * 100)
    }

    /// Indicator dot states, one per slide; exactly the dot at the current
    /// index is active.
    pub(crate) fn indicator(&self) -> Vec<bool> {
        (0..self.state.len())
            .map(|i| i == self.state.index())
            .collect()
    }

    /// The slide selected by the current strip offset.
    pub(crate) fn current_slide(&self) -> Option<&Slide> {
        let panel = (-self.strip_offset_percent() / 100) as usize;
        self.slides.get(panel)
    }

    /// A short autoplay label for the status line.
    pub(crate) fn autoplay_status(&self) -> &'static str {
        match self.state.autoplay() {
            Autoplay::Disabled => "off",
            Autoplay::Armed { .. } => "playing",
            Autoplay::Paused => "paused",
        }
    }

    fn apply(&mut self, event: SliderEvent) {
        self.state = self.state.apply(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::slide::{Hero, Media};

    fn hero(title: &str) -> Slide {
        Slide::Hero(Hero {
            title: title.into(),
            subtitle: String::new(),
            description: String::new(),
            cta_text: String::new(),
            cta_link: String::new(),
            media: Media::Still("bg.jpg".into()),
        })
    }

    fn pane(n: usize) -> SliderPane {
        let slides = (0..n).map(|i| hero(&format!("slide {i}"))).collect();
        SliderPane::new(slides, SliderConfig::default(), true, true, 0)
    }

    #[test]
    fn indicator_tracks_index_with_one_active_dot() {
        let mut pane = pane(4);
        for _ in 0..6 {
            pane.advance(0);
            let dots = pane.indicator();
            assert_eq!(dots.len(), 4);
            assert_eq!(dots.iter().filter(|active| **active).count(), 1);
            assert!(dots[pane.index()]);
        }
    }

    #[test]
    fn strip_offset_mirrors_index() {
        let mut pane = pane(3);
        assert_eq!(pane.strip_offset_percent(), 0);
        pane.advance(0);
        assert_eq!(pane.strip_offset_percent(), -100);
        pane.jump(2, 0).unwrap();
        assert_eq!(pane.strip_offset_percent(), -200);
    }

    #[test]
    fn current_slide_follows_the_strip_offset() {
        let mut pane = pane(3);
        pane.jump(1, 0).unwrap();
        match pane.current_slide() {
            Some(Slide::Hero(h)) => assert_eq!(h.title, "slide 1"),
            other => panic!("unexpected slide: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_jump_is_rejected_and_leaves_state_alone() {
        let mut pane = pane(3);
        pane.advance(0);
        let err = pane.jump(3, 0).unwrap_err();
        assert_eq!(err, SliderError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(pane.index(), 1);
    }

    #[test]
    fn empty_pane_is_inert() {
        let mut pane = pane(0);
        assert_eq!(pane.autoplay_status(), "off");
        pane.advance(0);
        pane.retreat(0);
        pane.tick(1_000_000);
        assert_eq!(pane.index(), 0);
        assert!(pane.indicator().is_empty());
        assert!(pane.current_slide().is_none());
        assert!(pane.jump(0, 0).is_err());
    }
}
