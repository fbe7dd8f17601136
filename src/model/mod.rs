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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: the slide
//! content variants shown in the carousel and the slider state machine that
//! drives it.
//!
//! # Sub-modules
//!
//! * [`slide`]: The slide tagged union, media sources, and record
//!   classification.
//! * [`slider`]: The pure carousel state machine (index, autoplay timer,
//!   drag gestures).

pub(crate) mod slide;
pub(crate) mod slider;

pub(crate) use slide::{Media, Slide, SlideRecord};
pub(crate) use slider::{SliderConfig, SliderError, SliderEvent, SliderState};
