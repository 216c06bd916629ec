//! Tile outlines
//!
//! A tile is drawn as a quadrilateral: its anchor followed by three vertices placed
//! at `angle - T`, `angle` and `angle + T`, at distances taken from a per-kind
//! table and scaled by the tile size. Negative distances put dart vertices on the
//! far side of the anchor, which makes the dart concave.

use crate::math::constants::{G, T};
use crate::math::trig::polar_offset;
use crate::spatial::bounds::BoundingBox;
use crate::spatial::point::Point;
use crate::spatial::tile::{Tile, TileKind};

/// Vertex distances for kites
pub const KITE_DISTANCES: [f64; 3] = [G, G, G];

/// Vertex distances for darts
pub const DART_DISTANCES: [f64; 3] = [-G, -1.0, -G];

/// Distance row for one kind
pub const fn vertex_distances(kind: TileKind) -> [f64; 3] {
    match kind {
        TileKind::Kite => KITE_DISTANCES,
        TileKind::Dart => DART_DISTANCES,
    }
}

/// Closed quadrilateral outline of a tile
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePolygon {
    /// Kind of the source tile, used to pick the fill
    pub kind: TileKind,
    /// Anchor followed by the three computed vertices
    pub vertices: [Point; 4],
}

impl TilePolygon {
    /// Vertices of the closed path, starting and ending at the anchor
    pub fn closed_path(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.iter().copied().chain(self.vertices.first().copied())
    }

    /// The four edges, the last one returning to the anchor
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices
            .iter()
            .copied()
            .zip(self.vertices.iter().copied().cycle().skip(1))
    }

    /// Smallest box containing every vertex
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices.iter().copied())
    }

    /// Signed area by the shoelace formula (positive when counter-clockwise on screen)
    pub fn signed_area(&self) -> f64 {
        let twice: f64 = self
            .edges()
            .map(|(a, b)| a.x.mul_add(-b.y, b.x * a.y))
            .sum();
        twice / 2.0
    }
}

/// Outline of a tile
pub fn tile_polygon(tile: &Tile) -> TilePolygon {
    let distances = vertex_distances(tile.kind);
    let anchor = tile.anchor();
    let mut vertices = [anchor; 4];
    let mut theta = tile.angle - T;

    for (vertex, distance) in vertices.iter_mut().skip(1).zip(distances) {
        *vertex = polar_offset(anchor, theta, distance, tile.size);
        theta += T;
    }

    TilePolygon {
        kind: tile.kind,
        vertices,
    }
}

impl Tile {
    /// Outline of this tile, see [`tile_polygon`]
    pub fn polygon(&self) -> TilePolygon {
        tile_polygon(self)
    }
}
