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

//! Slide content variants and record classification.
//!
//! Content records arrive as loosely-shaped JSON objects. Each record is
//! classified exactly once, at ingestion, into one of four mutually
//! exclusive slide variants by a priority-ordered predicate chain; the
//! carousel never re-derives the variant on a transition.

use serde::Deserialize;

/// A raw content record as it appears in the slide data file.
///
/// Every field is optional; which fields are present decides the slide
/// variant. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SlideRecord {
    pub name: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub review: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub destination: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub rating: Option<f64>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub bg: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

/// Visual source for a slide panel.
///
/// Motion media always carries a still poster so the renderer can degrade
/// without involving the carousel state.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Media {
    Still(String),
    Motion { source: String, poster: String },
}

impl Media {
    /// Builds a media source from an optional motion source and a still
    /// fallback. A missing or blank motion source degrades to the still.
    fn resolve(video: Option<String>, still: Option<String>) -> Self {
        let poster = still.unwrap_or_default();
        match video {
            Some(source) if !source.trim().is_empty() => Media::Motion { source, poster },
            _ => Media::Still(poster),
        }
    }

    /// The still image shown when motion media is unavailable.
    pub(crate) fn poster(&self) -> &str {
        match self {
            Media::Still(poster) => poster,
            Media::Motion { poster, .. } => poster,
        }
    }

    pub(crate) fn is_motion(&self) -> bool {
        matches!(self, Media::Motion { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub rating: u8,
    pub destination: Option<String>,
    pub media: Media,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tour {
    pub name: String,
    pub duration: String,
    pub rating: f64,
    pub price: f64,
    pub media: Media,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Lodging {
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub nightly_price: f64,
    pub media: Media,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    pub media: Media,
}

/// One panel of the carousel, classified once at ingestion.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Slide {
    Testimonial(Testimonial),
    Tour(Tour),
    Lodging(Lodging),
    Hero(Hero),
}

impl Slide {
    /// Classifies a raw record into its slide variant.
    ///
    /// The predicate chain is evaluated in fixed priority order: a `review`
    /// field wins over `duration`, which wins over `location`; anything
    /// else is a hero banner. A record satisfies only the first matching
    /// predicate.
    pub(crate) fn classify(record: SlideRecord) -> Slide {
        if let Some(quote) = record.review {
            Slide::Testimonial(Testimonial {
                quote,
                author: record.name.unwrap_or_default(),
                role: record.role.unwrap_or_default(),
                rating: record.rating.unwrap_or(0.0).max(0.0) as u8,
                destination: record.destination,
                media: Media::resolve(record.video_url, record.avatar),
            })
        } else if let Some(duration) = record.duration {
            Slide::Tour(Tour {
                name: record.name.unwrap_or_default(),
                duration,
                rating: record.rating.unwrap_or(0.0),
                price: record.price.unwrap_or(0.0),
                media: Media::resolve(record.video_url, record.image_url),
            })
        } else if let Some(location) = record.location {
            Slide::Lodging(Lodging {
                name: record.name.unwrap_or_default(),
                location,
                rating: record.rating.unwrap_or(0.0),
                nightly_price: record.price.unwrap_or(0.0),
                media: Media::resolve(record.video_url, record.image_url),
            })
        } else {
            Slide::Hero(Hero {
                title: record.title.unwrap_or_default(),
                subtitle: record.subtitle.unwrap_or_default(),
                description: record.description.unwrap_or_default(),
                cta_text: record.cta_text.unwrap_or_default(),
                cta_link: record.cta_link.unwrap_or_default(),
                media: Media::resolve(record.video_url, record.bg),
            })
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SlideRecord {
        SlideRecord::default()
    }

    #[test]
    fn review_field_classifies_as_testimonial() {
        let slide = Slide::classify(SlideRecord {
            review: Some("Wonderful trip".into()),
            name: Some("Ana".into()),
            rating: Some(5.0),
            ..record()
        });
        match slide {
            Slide::Testimonial(t) => {
                assert_eq!(t.quote, "Wonderful trip");
                assert_eq!(t.rating, 5);
            }
            other => panic!("expected testimonial, got {other:?}"),
        }
    }

    #[test]
    fn review_wins_over_duration_and_location() {
        let slide = Slide::classify(SlideRecord {
            review: Some("Great".into()),
            duration: Some("5 days".into()),
            location: Some("Lisbon".into()),
            ..record()
        });
        assert!(matches!(slide, Slide::Testimonial(_)));
    }

    #[test]
    fn duration_wins_over_location() {
        let slide = Slide::classify(SlideRecord {
            duration: Some("3 days".into()),
            location: Some("Porto".into()),
            ..record()
        });
        assert!(matches!(slide, Slide::Tour(_)));
    }

    #[test]
    fn location_alone_classifies_as_lodging() {
        let slide = Slide::classify(SlideRecord {
            location: Some("Madeira".into()),
            price: Some(120.0),
            ..record()
        });
        match slide {
            Slide::Lodging(l) => assert_eq!(l.nightly_price, 120.0),
            other => panic!("expected lodging, got {other:?}"),
        }
    }

    #[test]
    fn bare_record_falls_back_to_hero() {
        let slide = Slide::classify(SlideRecord {
            title: Some("Discover".into()),
            bg: Some("hero.jpg".into()),
            ..record()
        });
        match slide {
            Slide::Hero(h) => {
                assert_eq!(h.title, "Discover");
                assert_eq!(h.media, Media::Still("hero.jpg".into()));
            }
            other => panic!("expected hero, got {other:?}"),
        }
    }

    #[test]
    fn motion_media_keeps_still_poster() {
        let media = match Slide::classify(SlideRecord {
            duration: Some("2 days".into()),
            video_url: Some("tour.mp4".into()),
            image_url: Some("tour.jpg".into()),
            ..record()
        }) {
            Slide::Tour(t) => t.media,
            other => panic!("expected tour, got {other:?}"),
        };
        assert!(media.is_motion());
        assert_eq!(media.poster(), "tour.jpg");
    }

    #[test]
    fn blank_motion_source_degrades_to_still() {
        let media = match Slide::classify(SlideRecord {
            duration: Some("2 days".into()),
            video_url: Some("   ".into()),
            image_url: Some("tour.jpg".into()),
            ..record()
        }) {
            Slide::Tour(t) => t.media,
            other => panic!("expected tour, got {other:?}"),
        };
        assert_eq!(media, Media::Still("tour.jpg".into()));
    }
}
