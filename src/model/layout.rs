use serde::Serialize;

use super::category::Category;

/// A point on the constellation map, in percent of the map's width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A legend placed on the constellation map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star<'a> {
    pub id: &'a str,
    pub category: Category,
    pub position: Position,
}

/// A line drawn between two neighbouring stars of the same category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstellationLine<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub distance: f64,
    pub opacity: f64,
}
