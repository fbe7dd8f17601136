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

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

use crate::model::SliderConfig;

const CONFIG_NAME: &str = "vistui";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct AppConfig {
    pub version: u32,
    pub slides_file: String,
    pub auto_play: bool,
    pub interval_ms: u64,
    pub show_dots: bool,
    pub show_arrows: bool,
    pub swipe_threshold: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            slides_file: "slides.json".into(),
            auto_play: true,
            interval_ms: 5000,
            show_dots: true,
            show_arrows: true,
            swipe_threshold: 50,
        }
    }
}

impl AppConfig {
    /// The slider policy carried by this configuration. A zero interval
    /// falls back to the default rather than arming a busy timer.
    pub(crate) fn slider_config(&self) -> SliderConfig {
        SliderConfig {
            auto_play: self.auto_play,
            interval_ms: if self.interval_ms > 0 {
                self.interval_ms
            } else {
                SliderConfig::default().interval_ms
            },
            swipe_threshold: self.swipe_threshold,
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub(crate) fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_falls_back_to_default() {
        let cfg = AppConfig {
            interval_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(cfg.slider_config().interval_ms, 5000);
    }
}
