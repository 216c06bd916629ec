//! Axis-aligned bounding boxes

use crate::spatial::point::Point;
use crate::spatial::tile::Tile;

/// Minimal rectangle containing a set of points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Top-left corner
    pub min: Point,
    /// Bottom-right corner
    pub max: Point,
}

impl BoundingBox {
    /// Box containing every point, or an inverted empty box when there are none
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut bounds = Self::empty();
        for point in points {
            bounds.include(point);
        }
        bounds
    }

    /// Box covering the outlines of all tiles
    pub fn of_tiles(tiles: &[Tile]) -> Self {
        tiles
            .iter()
            .fold(Self::empty(), |acc, tile| acc.union(&tile.polygon().bounds()))
    }

    /// An empty box; including any point makes it valid
    pub const fn empty() -> Self {
        Self {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Whether no point has been included
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Grow the box to contain `point`
    pub const fn include(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Smallest box containing both boxes
    #[must_use]
    pub const fn union(&self, other: &Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether `point` lies inside or on the border
    pub fn contains(&self, point: Point) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// Whether the two boxes overlap
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
