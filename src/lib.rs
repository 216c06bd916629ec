//! Penrose kite and dart tiling by recursive deflation
//!
//! A sun of kites is seeded from the canvas size, then every generation replaces
//! each tile with smaller kites and darts and removes the duplicates produced along
//! shared edges. The finished tile list is turned into polygons for drawing.

#![forbid(unsafe_code)]

/// Seeding, deflation, deduplication and caching of tilings
pub mod algorithm;
/// Command-line harness, rendering and export
pub mod io;
/// Golden ratio, base angle and polar helpers
pub mod math;
/// Tiles, points, polygons and bounds
pub mod spatial;

pub use algorithm::deflation::deflate;
pub use algorithm::seeding::seed_prototiles;
pub use io::error::{Result, TilingError};
pub use spatial::polygon::tile_polygon;
pub use spatial::tile::{Tile, TileKind};
