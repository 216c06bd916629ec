use crate::algorithm::dedup::DedupStrategy;
use crate::algorithm::deflation::{Deflator, GenerationReport};
use crate::algorithm::seeding::seed_prototiles;
use crate::spatial::tile::Tile;
use std::collections::HashMap;

/// Key identifying a finished tiling
///
/// Dimensions are stored as raw bits so the key is hashable; deflation is
/// deterministic, so equal keys always describe identical tile lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TilingKey {
    width_bits: u64,
    height_bits: u64,
    generations: i32,
    strategy: DedupStrategy,
}

impl TilingKey {
    /// Key for a sun seeded on a `width` x `height` canvas and deflated `generations` times
    pub const fn new(width: f64, height: f64, generations: i32, strategy: DedupStrategy) -> Self {
        Self {
            width_bits: width.to_bits(),
            height_bits: height.to_bits(),
            // Negative counts behave like zero
            generations: if generations < 0 { 0 } else { generations },
            strategy,
        }
    }

    /// Canvas width
    pub const fn width(&self) -> f64 {
        f64::from_bits(self.width_bits)
    }

    /// Canvas height
    pub const fn height(&self) -> f64 {
        f64::from_bits(self.height_bits)
    }

    /// Number of deflations
    pub const fn generations(&self) -> i32 {
        self.generations
    }

    /// Duplicate matching used between generations
    pub const fn strategy(&self) -> DedupStrategy {
        self.strategy
    }
}

/// Memoization cache for finished tilings
///
/// Rendering the same parameters repeatedly reuses the tile list computed the
/// first time instead of deflating again.
#[derive(Default)]
pub struct TilingCache {
    /// Parameters to final tile list mapping
    tilings: HashMap<TilingKey, Vec<Tile>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl TilingCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve a cached tiling or compute and store it
    ///
    /// Uses the provided closure only when `key` is not already cached.
    pub fn get_or_compute<F>(&mut self, key: TilingKey, compute_fn: F) -> &[Tile]
    where
        F: FnOnce() -> Vec<Tile>,
    {
        use std::collections::hash_map::Entry;

        match self.tilings.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                tracing::trace!(?key, "tiling cache hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                tracing::trace!(?key, "tiling cache miss");
                entry.insert(compute_fn())
            }
        }
    }

    /// Tiling for `key`, seeding and deflating on a miss
    ///
    /// `observer` sees every generation report, and is only called on a miss.
    pub fn tiling_with<F>(&mut self, key: TilingKey, observer: F) -> &[Tile]
    where
        F: FnMut(&GenerationReport),
    {
        self.get_or_compute(key, || {
            Deflator::new(key.strategy()).run_with(
                seed_prototiles(key.width(), key.height()),
                key.generations(),
                observer,
            )
        })
    }

    /// Tiling for `key`, seeding and deflating on a miss
    pub fn tiling(&mut self, key: TilingKey) -> &[Tile] {
        self.tiling_with(key, |_| {})
    }

    /// Number of cached tilings
    pub fn len(&self) -> usize {
        self.tilings.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.tilings.is_empty()
    }

    /// Drop every cached tiling, keeping statistics
    pub fn clear(&mut self) {
        self.tilings.clear();
    }
}
