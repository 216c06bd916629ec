//! Spatial data structures for the tiling
//!
//! This module contains:
//! - Plane points and bounding boxes
//! - The tile model and its identity rules
//! - Conversion of tiles to drawable polygons

/// Axis-aligned bounds of polygons and whole tilings
pub mod bounds;
/// Plane coordinates in screen space
pub mod point;
/// Tile outlines derived from the vertex distance table
pub mod polygon;
/// Kite and dart tiles
pub mod tile;

pub use point::Point;
pub use tile::{Tile, TileKind};
