//! Kite and dart tiles
//!
//! A tile is a plain value: kind, anchor point, orientation and size. Tiles never
//! reference each other, and a generation replaces its parents wholesale.

use crate::spatial::point::Point;
use std::fmt;

/// The two prototiles of the P2 tiling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    /// Convex prototile; the sun configuration is made of kites
    Kite,
    /// Concave prototile
    Dart,
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kite => write!(f, "kite"),
            Self::Dart => write!(f, "dart"),
        }
    }
}

/// One tile of the tiling
///
/// Two tiles are equal when kind, anchor and angle match exactly; `size` is
/// ignored because every tile of one generation shares it. The angle is stored
/// as computed and is never wrapped into `[0, 2π)`.
#[derive(Clone, Copy, Debug)]
pub struct Tile {
    /// Prototile kind
    pub kind: TileKind,
    /// Anchor x coordinate
    pub x: f64,
    /// Anchor y coordinate
    pub y: f64,
    /// Orientation in radians, unnormalized
    pub angle: f64,
    /// Edge length parameter, always positive
    pub size: f64,
}

impl Tile {
    /// Create a tile
    pub const fn new(kind: TileKind, x: f64, y: f64, angle: f64, size: f64) -> Self {
        Self {
            kind,
            x,
            y,
            angle,
            size,
        }
    }

    /// Anchor point shared with the tile's polygon
    pub const fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether this is a kite
    pub const fn is_kite(&self) -> bool {
        matches!(self.kind, TileKind::Kite)
    }
}

impl PartialEq for Tile {
    // Identity is exact-match on the computed values
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.x == other.x
            && self.y == other.y
            && self.angle == other.angle
    }
}
