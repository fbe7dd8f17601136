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

//! The carousel state machine.
//!
//! The slider is modeled as an explicit state value plus a pure transition
//! function, [`SliderState::apply`], so the whole machine can be exercised
//! without a terminal. Time never comes from a clock in here: every
//! time-sensitive event carries a `now_ms` timestamp supplied by the shell.
//!
//! Three input sources feed the machine:
//!
//! * the autoplay timer (a single armed deadline, re-armed on every fire),
//! * discrete commands (advance, retreat, jump),
//! * continuous drag gestures, which only resolve to a transition when the
//!   gesture ends past the swipe threshold.
//!
//! Every discrete transition resets the armed deadline to a fresh full
//! interval, so autoplay never fires within one interval of the most recent
//! manual action. Hovering pauses the deadline entirely; leaving re-arms it.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum SliderError {
    #[error("slide index {index} is out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Static slider policy, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SliderConfig {
    pub auto_play: bool,
    pub interval_ms: u64,
    pub swipe_threshold: u16,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            auto_play: true,
            interval_ms: 5000,
            swipe_threshold: 50,
        }
    }
}

/// Autoplay timer state. At most one deadline is ever pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Autoplay {
    /// Autoplay is off, or the slide sequence is empty.
    Disabled,
    /// A tick at or after `deadline_ms` advances the slider.
    Armed { deadline_ms: u64 },
    /// The pointer is hovering; nothing is scheduled until it leaves.
    Paused,
}

/// An in-progress drag gesture, sampled continuously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Drag {
    pub origin_x: u16,
    pub latest_x: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SliderEvent {
    Tick { now_ms: u64 },
    Advance { now_ms: u64 },
    Retreat { now_ms: u64 },
    Jump { index: usize, now_ms: u64 },
    PointerEnter,
    PointerLeave { now_ms: u64 },
    DragStart { x: u16 },
    DragMove { x: u16 },
    DragEnd { now_ms: u64 },
}

/// The complete mutable state of one carousel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SliderState {
    len: usize,
    index: usize,
    autoplay: Autoplay,
    drag: Option<Drag>,
    config: SliderConfig,
}

impl SliderState {
    /// Creates the state for a sequence of `len` slides, starting at index
    /// zero. The first deadline is armed one full interval after `now_ms`,
    /// iff autoplay is enabled and the sequence is non-empty.
    pub(crate) fn new(len: usize, config: SliderConfig, now_ms: u64) -> Self {
        let autoplay = if config.auto_play && len > 0 {
            Autoplay::Armed {
                deadline_ms: now_ms + config.interval_ms,
            }
        } else {
            Autoplay::Disabled
        };

        Self {
            len,
            index: 0,
            autoplay,
            drag: None,
            config,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    pub(crate) fn in_range(&self, index: usize) -> bool {
        index < self.len
    }

    /// The pure transition function: applies one event and returns the
    /// successor state. An empty sequence is inert and every event leaves
    /// it unchanged.
    pub(crate) fn apply(&self, event: SliderEvent) -> SliderState {
        let mut next = self.clone();
        if next.len == 0 {
            return next;
        }

        match event {
            SliderEvent::Tick { now_ms } => {
                if let Autoplay::Armed { deadline_ms } = next.autoplay {
                    if now_ms >= deadline_ms {
                        next.index = (next.index + 1) % next.len;
                        next.autoplay = Autoplay::Armed {
                            deadline_ms: now_ms + next.config.interval_ms,
                        };
                    }
                }
            }

            SliderEvent::Advance { now_ms } => {
                next.index = (next.index + 1) % next.len;
                next.reset_timer(now_ms);
            }

            SliderEvent::Retreat { now_ms } => {
                next.index = (next.index + next.len - 1) % next.len;
                next.reset_timer(now_ms);
            }

            SliderEvent::Jump { index, now_ms } => {
                // Range checking is the caller's contract; an out-of-range
                // target must neither wrap nor clamp.
                if index < next.len {
                    next.index = index;
                    next.reset_timer(now_ms);
                } else {
                    debug_assert!(false, "jump target {index} out of range");
                }
            }

            SliderEvent::PointerEnter => {
                if matches!(next.autoplay, Autoplay::Armed { .. }) {
                    next.autoplay = Autoplay::Paused;
                }
            }

            SliderEvent::PointerLeave { now_ms } => {
                if next.autoplay == Autoplay::Paused {
                    next.autoplay = Autoplay::Armed {
                        deadline_ms: now_ms + next.config.interval_ms,
                    };
                }
            }

            SliderEvent::DragStart { x } => {
                next.drag = Some(Drag {
                    origin_x: x,
                    latest_x: x,
                });
            }

            SliderEvent::DragMove { x } => {
                if let Some(drag) = next.drag.as_mut() {
                    drag.latest_x = x;
                }
            }

            SliderEvent::DragEnd { now_ms } => {
                if let Some(drag) = next.drag.take() {
                    let delta = i32::from(drag.origin_x) - i32::from(drag.latest_x);
                    let threshold = i32::from(next.config.swipe_threshold);
                    if delta > threshold {
                        // Swipe left: next slide.
                        next.index = (next.index + 1) % next.len;
                        next.reset_timer(now_ms);
                    } else if delta < -threshold {
                        // Swipe right: previous slide.
                        next.index = (next.index + next.len - 1) % next.len;
                        next.reset_timer(now_ms);
                    }
                }
            }
        }

        next
    }

    /// Timer reset after a discrete transition: replaces the pending
    /// deadline with a fresh full interval. Paused (hovering) and disabled
    /// timers stay as they are; the hover policy owns re-arming.
    fn reset_timer(&mut self, now_ms: u64) {
        if matches!(self.autoplay, Autoplay::Armed { .. }) {
            self.autoplay = Autoplay::Armed {
                deadline_ms: now_ms + self.config.interval_ms,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(len: usize) -> SliderState {
        SliderState::new(
            len,
            SliderConfig {
                auto_play: true,
                interval_ms: 1000,
                swipe_threshold: 50,
            },
            0,
        )
    }

    fn at_index(len: usize, index: usize) -> SliderState {
        let mut s = state(len);
        for _ in 0..index {
            s = s.apply(SliderEvent::Advance { now_ms: 0 });
        }
        assert_eq!(s.index(), index);
        s
    }

    #[test]
    fn advance_then_retreat_restores_index() {
        for len in 1..6 {
            for start in 0..len {
                let s = at_index(len, start);
                let forward = s
                    .apply(SliderEvent::Advance { now_ms: 0 })
                    .apply(SliderEvent::Retreat { now_ms: 0 });
                assert_eq!(forward.index(), start);

                let backward = s
                    .apply(SliderEvent::Retreat { now_ms: 0 })
                    .apply(SliderEvent::Advance { now_ms: 0 });
                assert_eq!(backward.index(), start);
            }
        }
    }

    #[test]
    fn full_cycle_of_advances_is_identity() {
        for len in 1..6 {
            for start in 0..len {
                let mut s = at_index(len, start);
                for _ in 0..len {
                    s = s.apply(SliderEvent::Advance { now_ms: 0 });
                }
                assert_eq!(s.index(), start);
            }
        }
    }

    #[test]
    fn retreat_wraps_from_first_to_last() {
        let s = state(4).apply(SliderEvent::Retreat { now_ms: 0 });
        assert_eq!(s.index(), 3);
    }

    #[test]
    fn jump_sets_index_exactly() {
        for start in 0..5 {
            let s = at_index(5, start).apply(SliderEvent::Jump { index: 3, now_ms: 0 });
            assert_eq!(s.index(), 3);
        }
    }

    #[test]
    fn four_ticks_at_interval_cycle_three_slides() {
        let mut s = state(3);
        let mut seen = Vec::new();
        for tick in 1..=4u64 {
            s = s.apply(SliderEvent::Tick { now_ms: tick * 1000 });
            seen.push(s.index());
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn early_tick_does_not_fire() {
        let s = state(3).apply(SliderEvent::Tick { now_ms: 999 });
        assert_eq!(s.index(), 0);
        assert_eq!(s.autoplay(), Autoplay::Armed { deadline_ms: 1000 });
    }

    #[test]
    fn discrete_transition_buys_a_fresh_interval() {
        // Manual advance at 900ms pushes the deadline to 1900ms, so the
        // tick at the original 1000ms deadline must not fire.
        let s = state(3)
            .apply(SliderEvent::Advance { now_ms: 900 })
            .apply(SliderEvent::Tick { now_ms: 1000 });
        assert_eq!(s.index(), 1);
        assert_eq!(s.autoplay(), Autoplay::Armed { deadline_ms: 1900 });

        let s = s.apply(SliderEvent::Tick { now_ms: 1900 });
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn hover_pauses_without_touching_index() {
        let s = state(3).apply(SliderEvent::PointerEnter);
        assert_eq!(s.index(), 0);
        assert_eq!(s.autoplay(), Autoplay::Paused);

        // No deadline pending, so ticks do nothing while hovering.
        let s = s.apply(SliderEvent::Tick { now_ms: 10_000 });
        assert_eq!(s.index(), 0);

        // Leaving re-arms a fresh full interval.
        let s = s.apply(SliderEvent::PointerLeave { now_ms: 10_000 });
        assert_eq!(s.autoplay(), Autoplay::Armed { deadline_ms: 11_000 });
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn discrete_transition_while_hovering_stays_paused() {
        let s = state(3)
            .apply(SliderEvent::PointerEnter)
            .apply(SliderEvent::Advance { now_ms: 500 });
        assert_eq!(s.index(), 1);
        assert_eq!(s.autoplay(), Autoplay::Paused);
    }

    #[test]
    fn swipe_just_under_threshold_is_ignored() {
        for delta in [49u16, 50] {
            let s = state(3)
                .apply(SliderEvent::DragStart { x: 100 })
                .apply(SliderEvent::DragMove { x: 100 - delta })
                .apply(SliderEvent::DragEnd { now_ms: 0 });
            assert_eq!(s.index(), 0, "delta {delta} should not transition");
        }
    }

    #[test]
    fn swipe_left_past_threshold_advances() {
        let s = state(3)
            .apply(SliderEvent::DragStart { x: 200 })
            .apply(SliderEvent::DragMove { x: 149 })
            .apply(SliderEvent::DragEnd { now_ms: 0 });
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn swipe_right_past_threshold_retreats() {
        let s = state(3)
            .apply(SliderEvent::DragStart { x: 100 })
            .apply(SliderEvent::DragMove { x: 151 })
            .apply(SliderEvent::DragEnd { now_ms: 0 });
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn completed_swipe_resets_the_timer() {
        let s = state(3)
            .apply(SliderEvent::DragStart { x: 200 })
            .apply(SliderEvent::DragMove { x: 100 })
            .apply(SliderEvent::DragEnd { now_ms: 700 });
        assert_eq!(s.autoplay(), Autoplay::Armed { deadline_ms: 1700 });
        assert_eq!(s.drag, None);
    }

    #[test]
    fn drag_move_without_start_is_ignored() {
        let s = state(3)
            .apply(SliderEvent::DragMove { x: 10 })
            .apply(SliderEvent::DragEnd { now_ms: 0 });
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn empty_sequence_is_inert() {
        let s = state(0);
        assert_eq!(s.autoplay(), Autoplay::Disabled);

        let events = [
            SliderEvent::Tick { now_ms: 5000 },
            SliderEvent::Advance { now_ms: 0 },
            SliderEvent::Retreat { now_ms: 0 },
            SliderEvent::PointerEnter,
            SliderEvent::DragStart { x: 0 },
            SliderEvent::DragEnd { now_ms: 0 },
        ];
        let mut next = s.clone();
        for event in events {
            next = next.apply(event);
        }
        assert_eq!(next, s);
    }

    #[test]
    fn autoplay_disabled_never_arms() {
        let s = SliderState::new(
            3,
            SliderConfig {
                auto_play: false,
                ..SliderConfig::default()
            },
            0,
        );
        assert_eq!(s.autoplay(), Autoplay::Disabled);

        let s = s
            .apply(SliderEvent::Tick { now_ms: 60_000 })
            .apply(SliderEvent::Advance { now_ms: 60_000 });
        assert_eq!(s.index(), 1);
        assert_eq!(s.autoplay(), Autoplay::Disabled);
    }
}
