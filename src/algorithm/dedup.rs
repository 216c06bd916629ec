//! Duplicate elimination after each generation
//!
//! Neighbouring parents emit coincident children along shared edges. The whole
//! child set is filtered at once, keeping the first occurrence of each tile so the
//! output order is stable.

use crate::spatial::tile::{Tile, TileKind};
use std::collections::HashSet;

/// Largest number of decimal digits accepted for quantized matching
pub const MAX_QUANTIZATION_DIGITS: u32 = 12;

/// How tiles are compared when removing duplicates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DedupStrategy {
    /// Exact floating-point match on kind, anchor and angle
    #[default]
    Exact,
    /// Match after rounding anchor and angle to `10^-digits`; angles are still not wrapped
    Quantized {
        /// Decimal digits kept before comparison
        digits: u32,
    },
}

/// Hashable identity of a tile under a strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileKey {
    kind: TileKind,
    x: i64,
    y: i64,
    angle: i64,
}

impl DedupStrategy {
    /// Identity key of `tile`
    pub fn key(self, tile: &Tile) -> TileKey {
        match self {
            Self::Exact => TileKey {
                kind: tile.kind,
                x: exact_component(tile.x),
                y: exact_component(tile.y),
                angle: exact_component(tile.angle),
            },
            Self::Quantized { digits } => {
                let scale = quantization_scale(digits);
                TileKey {
                    kind: tile.kind,
                    x: quantized_component(tile.x, scale),
                    y: quantized_component(tile.y, scale),
                    angle: quantized_component(tile.angle, scale),
                }
            }
        }
    }

    /// Drop repeated tiles, keeping first-seen order
    pub fn deduplicate(self, tiles: Vec<Tile>) -> Vec<Tile> {
        let mut seen = HashSet::with_capacity(tiles.len());
        let mut unique = Vec::with_capacity(tiles.len());

        for tile in tiles {
            if seen.insert(self.key(&tile)) {
                unique.push(tile);
            }
        }

        unique
    }
}

// -0.0 and 0.0 compare equal, so they must share a key
fn exact_component(value: f64) -> i64 {
    (value + 0.0).to_bits() as i64
}

fn quantized_component(value: f64, scale: f64) -> i64 {
    (value * scale).round() as i64
}

/// Multiplier applied before rounding for `digits` decimal digits
pub fn quantization_scale(digits: u32) -> f64 {
    10_f64.powi(digits.min(MAX_QUANTIZATION_DIGITS) as i32)
}

/// Drop repeated tiles using exact matching
pub fn deduplicate(tiles: Vec<Tile>) -> Vec<Tile> {
    DedupStrategy::Exact.deduplicate(tiles)
}

/// Number of tiles that have an earlier equal tile under `strategy`
pub fn count_duplicates(tiles: &[Tile], strategy: DedupStrategy) -> usize {
    let mut seen = HashSet::with_capacity(tiles.len());
    tiles
        .iter()
        .filter(|tile| !seen.insert(strategy.key(tile)))
        .count()
}
