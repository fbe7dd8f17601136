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

/// Formats a star rating as filled stars, one per whole point.
///
/// Matches the source material, which renders `floor(rating)` stars and
/// appends the numeric value separately.
pub(crate) fn format_stars(rating: f64) -> String {
    let count = rating.max(0.0).floor() as usize;
    "★".repeat(count.min(5))
}

/// Formats a price for display, e.g. `$899`.
pub(crate) fn format_price(price: f64) -> String {
    format!("${:.0}", price)
}

/// Formats a one-based slide position, e.g. `3/7`.
pub(crate) fn format_position(index: usize, len: usize) -> String {
    if len == 0 {
        "-/-".to_string()
    } else {
        format!("{}/{}", index + 1, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_floor_the_rating() {
        assert_eq!(format_stars(4.7), "★★★★");
        assert_eq!(format_stars(5.0), "★★★★★");
        assert_eq!(format_stars(0.0), "");
        assert_eq!(format_stars(-1.0), "");
    }

    #[test]
    fn position_is_one_based() {
        assert_eq!(format_position(0, 3), "1/3");
        assert_eq!(format_position(2, 3), "3/3");
        assert_eq!(format_position(0, 0), "-/-");
    }
}
