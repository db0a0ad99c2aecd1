use itertools::Itertools;

use crate::model::{Category, ConstellationLine, Legend, Position, Star};

pub const MAP_MIN_X: f64 = 10.0;
pub const MAP_MAX_X: f64 = 90.0;
pub const MAP_MIN_Y: f64 = 15.0;
pub const MAP_MAX_Y: f64 = 85.0;

/// Largest offset of a star from its category anchor.
pub const MAX_STAR_RADIUS: f64 = 22.0;

/// Stars at least this far apart are not joined by a line.
pub const LINK_DISTANCE: f64 = 40.0;

/// The point each category's stars cluster around.
pub fn anchor(category: Category) -> Position {
    let (x, y) = match category {
        Category::Founders => (20.0, 25.0),
        Category::Contributors => (65.0, 20.0),
        Category::Achievers => (25.0, 65.0),
        Category::Legends => (70.0, 60.0),
    };
    Position { x, y }
}

/// Sum of the UTF-16 code units of `id`; zero for an empty id.
///
/// Only stable and roughly spread out, not uniform.
pub fn layout_hash(id: &str) -> u32 {
    id.encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_add(u32::from(unit)))
}

/// A reproducible map position for a legend, derived from its id.
///
/// The id hash picks an angle and a radius of 8 to 22 around the category
/// anchor; the result is clamped to the visible map.
pub fn deterministic_position(id: &str, category: Category) -> Position {
    let hash = layout_hash(id);
    let angle = f64::from(hash % 360).to_radians();
    let radius = f64::from(8 + hash % 15);
    let base = anchor(category);

    Position {
        x: (base.x + angle.cos() * radius).clamp(MAP_MIN_X, MAP_MAX_X),
        y: (base.y + angle.sin() * radius).clamp(MAP_MIN_Y, MAP_MAX_Y),
    }
}

/// Place every legend on the map, in input order.
pub fn constellation<'a, I>(legends: I) -> Vec<Star<'a>>
where
    I: IntoIterator<Item = &'a Legend>,
{
    legends
        .into_iter()
        .map(|l| Star {
            id: &l.id,
            category: l.category,
            position: deterministic_position(&l.id, l.category),
        })
        .collect()
}

/// Join consecutive stars of the same category that are close enough.
///
/// Categories are visited in order of first appearance. Closer stars get
/// brighter lines, never fainter than 0.1.
pub fn constellation_lines<'a>(stars: &[Star<'a>]) -> Vec<ConstellationLine<'a>> {
    let mut lines = Vec::new();
    for category in stars.iter().map(|s| s.category).unique() {
        let members = stars.iter().filter(|s| s.category == category);
        for (from, to) in members.tuple_windows() {
            let distance = from.position.distance(&to.position);
            if distance < LINK_DISTANCE {
                lines.push(ConstellationLine {
                    from: from.id,
                    to: to.id,
                    distance,
                    opacity: (0.4 - distance / 100.0).max(0.1),
                });
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::query::test_catalog;

    fn star(id: &str, category: Category, x: f64, y: f64) -> Star<'_> {
        Star {
            id,
            category,
            position: Position { x, y },
        }
    }

    #[test]
    fn test_layout_hash() {
        assert_eq!(layout_hash(""), 0);
        assert_eq!(layout_hash("legend-2"), 718);
    }

    #[test]
    fn test_position_is_deterministic() {
        for legend in test_catalog() {
            let first = deterministic_position(&legend.id, legend.category);
            let second = deterministic_position(&legend.id, legend.category);
            assert_eq!(first.x.to_bits(), second.x.to_bits());
            assert_eq!(first.y.to_bits(), second.y.to_bits());
        }
    }

    #[test]
    fn test_position_stays_in_category_band() {
        let ids = ["founder-1", "founder-2", "x", "a much longer identifier", ""];
        for category in Category::iter() {
            let base = anchor(category);
            for id in ids {
                let position = deterministic_position(id, category);
                assert!((MAP_MIN_X..=MAP_MAX_X).contains(&position.x));
                assert!((MAP_MIN_Y..=MAP_MAX_Y).contains(&position.y));
                assert!(position.distance(&base) <= MAX_STAR_RADIUS + 1e-9);
            }
        }
    }

    #[test]
    fn test_empty_id_sits_east_of_anchor() {
        let position = deterministic_position("", Category::Founders);
        assert!((position.x - 28.0).abs() < 1e-9);
        assert!((position.y - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_is_clamped() {
        // hash 718: angle 358 degrees, radius 21, overshoots the right edge
        let position = deterministic_position("legend-2", Category::Legends);
        assert_eq!(position.x, MAP_MAX_X);
        assert!((position.y - (60.0 + 21.0 * 358f64.to_radians().sin())).abs() < 1e-9);
    }

    #[test]
    fn test_constellation_lines() {
        let stars = [
            star("a", Category::Founders, 10.0, 10.0),
            star("z", Category::Legends, 12.0, 10.0),
            star("b", Category::Founders, 13.0, 14.0),
            star("c", Category::Founders, 60.0, 14.0),
        ];
        let lines = constellation_lines(&stars);
        assert_eq!(lines.len(), 1);
        assert_eq!((lines[0].from, lines[0].to), ("a", "b"));
        assert!((lines[0].distance - 5.0).abs() < 1e-9);
        assert!((lines[0].opacity - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_line_opacity_floor() {
        let stars = [
            star("a", Category::Achievers, 10.0, 20.0),
            star("b", Category::Achievers, 45.0, 20.0),
        ];
        let lines = constellation_lines(&stars);
        assert_eq!(lines.len(), 1);
        assert!((lines[0].opacity - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_catalog_constellation() {
        let legends = test_catalog();
        let stars = constellation(&legends);
        assert_eq!(stars.len(), legends.len());
        for line in constellation_lines(&stars) {
            let from = stars.iter().find(|s| s.id == line.from).unwrap();
            let to = stars.iter().find(|s| s.id == line.to).unwrap();
            assert_eq!(from.category, to.category);
            assert!(line.distance < LINK_DISTANCE);
            assert!((0.1..=0.4).contains(&line.opacity));
        }
    }
}
