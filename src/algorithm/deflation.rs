//! Kite and dart deflation
//!
//! Each generation replaces every tile by smaller children placed on the parent's
//! decomposition, scales sizes down by the golden ratio, and removes duplicates
//! across the whole child set before the next generation starts. Parents are never
//! mutated; every step returns a fresh collection.

use crate::algorithm::dedup::DedupStrategy;
use crate::math::constants::{G, T};
use crate::math::trig::polar_offset;
use crate::spatial::tile::{Tile, TileKind};

/// Children emitted by one kite
pub const KITE_CHILDREN: usize = 4;

/// Children emitted by one dart
pub const DART_CHILDREN: usize = 3;

// Both rules walk the two mirror halves of the parent in this order
const SIGNS: [f64; 2] = [1.0, -1.0];

/// Append the children of `tile` to `out`
///
/// A dart yields a kite on its anchor and two darts pushed out along `angle ∓ 4T`.
/// A kite yields, per side, a dart on its anchor and a kite pushed out along
/// `angle ∓ T`. Displacements use the parent size, children get `size / G`.
// Fused multiply-add rounds differently and would split coincident children
#[allow(clippy::suboptimal_flops)]
pub fn substitute_into(tile: &Tile, out: &mut Vec<Tile>) {
    let anchor = tile.anchor();
    let a = tile.angle;
    let size = tile.size / G;

    match tile.kind {
        TileKind::Dart => {
            out.push(Tile::new(TileKind::Kite, tile.x, tile.y, a + 5.0 * T, size));

            for sign in SIGNS {
                let theta = a - 4.0 * T * sign;
                let next = polar_offset(anchor, theta, G, tile.size);
                out.push(Tile::new(TileKind::Dart, next.x, next.y, theta, size));
            }
        }
        TileKind::Kite => {
            for sign in SIGNS {
                out.push(Tile::new(
                    TileKind::Dart,
                    tile.x,
                    tile.y,
                    a - 4.0 * T * sign,
                    size,
                ));

                let next = polar_offset(anchor, a - T * sign, G, tile.size);
                out.push(Tile::new(
                    TileKind::Kite,
                    next.x,
                    next.y,
                    a + 3.0 * T * sign,
                    size,
                ));
            }
        }
    }
}

/// Children of a single tile, before any deduplication
pub fn substitute(tile: &Tile) -> Vec<Tile> {
    let mut children = Vec::with_capacity(child_count(tile.kind));
    substitute_into(tile, &mut children);
    children
}

/// Number of children a tile of `kind` produces
pub const fn child_count(kind: TileKind) -> usize {
    match kind {
        TileKind::Kite => KITE_CHILDREN,
        TileKind::Dart => DART_CHILDREN,
    }
}

/// Counts describing one completed generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// One-based index of the generation just produced
    pub generation: usize,
    /// Tiles that were substituted
    pub parents: usize,
    /// Children emitted before deduplication
    pub produced: usize,
    /// Children dropped as duplicates
    pub duplicates: usize,
    /// Kites in the resulting set
    pub kites: usize,
    /// Darts in the resulting set
    pub darts: usize,
}

impl GenerationReport {
    /// Tiles left after deduplication
    pub const fn tiles(&self) -> usize {
        self.produced - self.duplicates
    }
}

/// Deflation driver bound to one deduplication strategy
#[derive(Clone, Copy, Debug, Default)]
pub struct Deflator {
    strategy: DedupStrategy,
}

impl Deflator {
    /// Create a deflator using `strategy` after every generation
    pub const fn new(strategy: DedupStrategy) -> Self {
        Self { strategy }
    }

    /// Strategy applied after every generation
    pub const fn strategy(&self) -> DedupStrategy {
        self.strategy
    }

    /// Produce the next generation of `tiles`
    ///
    /// `generation` is only recorded in the report.
    pub fn step(&self, tiles: &[Tile], generation: usize) -> (Vec<Tile>, GenerationReport) {
        let capacity = tiles.iter().map(|tile| child_count(tile.kind)).sum();
        let mut children = Vec::with_capacity(capacity);
        for tile in tiles {
            substitute_into(tile, &mut children);
        }

        let produced = children.len();
        let next = self.strategy.deduplicate(children);
        let kites = next.iter().filter(|tile| tile.is_kite()).count();

        let report = GenerationReport {
            generation,
            parents: tiles.len(),
            produced,
            duplicates: produced - next.len(),
            kites,
            darts: next.len() - kites,
        };

        (next, report)
    }

    /// Apply `generations` steps; zero or negative counts return `tiles` unchanged
    pub fn run(&self, tiles: Vec<Tile>, generations: i32) -> Vec<Tile> {
        self.run_with(tiles, generations, |_| {})
    }

    /// Like [`Self::run`], calling `observer` after every generation
    pub fn run_with<F>(&self, tiles: Vec<Tile>, generations: i32, mut observer: F) -> Vec<Tile>
    where
        F: FnMut(&GenerationReport),
    {
        let total = generations.max(0) as usize;
        let mut current = tiles;

        for generation in 1..=total {
            let (next, report) = self.step(&current, generation);
            tracing::debug!(
                generation,
                parents = report.parents,
                produced = report.produced,
                duplicates = report.duplicates,
                kites = report.kites,
                darts = report.darts,
                "deflated generation"
            );
            observer(&report);
            current = next;
        }

        current
    }

    /// Every generation starting from `seed` itself, without end
    ///
    /// Bound it with `take(n + 1)` to stop after `n` deflations.
    pub const fn generations(&self, seed: Vec<Tile>) -> Generations {
        Generations {
            deflator: *self,
            current: seed,
            index: 0,
        }
    }
}

/// One generation yielded by [`Generations`]
#[derive(Clone, Debug)]
pub struct Generation {
    /// Zero for the seed, then one per deflation
    pub index: usize,
    /// Tiles of this generation
    pub tiles: Vec<Tile>,
}

/// Iterator over successive generations
#[derive(Clone, Debug)]
pub struct Generations {
    deflator: Deflator,
    current: Vec<Tile>,
    index: usize,
}

impl Iterator for Generations {
    type Item = Generation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > 0 {
            let (next, _) = self.deflator.step(&self.current, self.index);
            self.current = next;
        }

        let generation = Generation {
            index: self.index,
            tiles: self.current.clone(),
        };
        self.index += 1;
        Some(generation)
    }
}

/// Deflate `tiles` by `generations` steps with exact duplicate matching
///
/// Zero or negative counts return the input unchanged.
pub fn deflate(tiles: Vec<Tile>, generations: i32) -> Vec<Tile> {
    Deflator::default().run(tiles, generations)
}
