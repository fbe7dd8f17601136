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

//! Slide data loading.
//!
//! The carousel itself never performs I/O: this collaborator reads the
//! configured JSON file, classifies each record into its slide variant, and
//! hands the carousel an already-parsed sequence. Any failure, from a
//! missing file to malformed JSON, yields an empty sequence instead of an
//! error reaching the carousel; the carousel treats an empty sequence as
//! inert.

use std::{fs, path::Path};

use thiserror::Error;

use crate::model::{Slide, SlideRecord};

#[derive(Debug, Error)]
pub(crate) enum SlideDataError {
    #[error("failed to read slide data file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse slide data file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads and classifies the slide data file.
pub(crate) fn read_slides(path: &Path) -> Result<Vec<Slide>, SlideDataError> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<SlideRecord> = serde_json::from_str(&raw)?;
    Ok(records.into_iter().map(Slide::classify).collect())
}

/// Loads the slide sequence, degrading every failure to an empty sequence.
///
/// Returns the slides together with an optional description of what went
/// wrong, for the status line; the carousel itself never sees the failure.
pub(crate) fn load_slides(path: &Path) -> (Vec<Slide>, Option<String>) {
    match read_slides(path) {
        Ok(slides) => (slides, None),
        Err(err) => (Vec::new(), Some(format!("{}: {err}", path.display()))),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_file_yields_empty_sequence() {
        let path = PathBuf::from("/nonexistent/vistui-slides.json");
        let (slides, warning) = load_slides(&path);
        assert!(slides.is_empty());
        assert!(warning.is_some());
    }

    #[test]
    fn malformed_json_yields_empty_sequence() {
        let path = std::env::temp_dir().join("vistui-malformed-slides.json");
        fs::write(&path, "{ not json").unwrap();
        let (slides, warning) = load_slides(&path);
        fs::remove_file(&path).ok();
        assert!(slides.is_empty());
        assert!(warning.is_some());
    }

    #[test]
    fn valid_records_are_classified_in_order() {
        let path = std::env::temp_dir().join("vistui-valid-slides.json");
        fs::write(
            &path,
            r#"[
                {"title": "Explore", "subtitle": "the coast", "bg": "hero.jpg"},
                {"name": "City Tour", "duration": "3 days", "rating": 4.5, "price": 899.0, "imageUrl": "tour.jpg"},
                {"name": "Ana", "review": "Loved it", "rating": 5, "role": "Traveler"}
            ]"#,
        )
        .unwrap();
        let (slides, warning) = load_slides(&path);
        fs::remove_file(&path).ok();

        assert!(warning.is_none());
        assert_eq!(slides.len(), 3);
        assert!(matches!(slides[0], Slide::Hero(_)));
        assert!(matches!(slides[1], Slide::Tour(_)));
        assert!(matches!(slides[2], Slide::Testimonial(_)));
    }
}
