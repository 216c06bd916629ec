//! Tests for memoization of finished tilings

#[cfg(test)]
mod tests {
    use kitedart::algorithm::cache::{TilingCache, TilingKey};
    use kitedart::algorithm::dedup::DedupStrategy;
    use kitedart::algorithm::deflation::deflate;
    use kitedart::algorithm::seeding::seed_prototiles;
    use kitedart::spatial::{Tile, TileKind};

    fn key(generations: i32) -> TilingKey {
        TilingKey::new(960.0, 540.0, generations, DedupStrategy::Exact)
    }

    // Tests first lookup misses and second lookup hits without recomputing
    // Verified by always calling the compute closure
    #[test]
    fn test_get_or_compute_hit_and_miss() {
        let mut cache = TilingCache::new();
        let mut calls = 0;

        let first = cache
            .get_or_compute(key(1), || {
                calls += 1;
                vec![Tile::new(TileKind::Kite, 0.0, 0.0, 0.0, 1.0)]
            })
            .len();
        assert_eq!(first, 1);
        assert_eq!(cache.stats.misses, 1);
        assert_eq!(cache.stats.hits, 0);

        let second = cache
            .get_or_compute(key(1), || {
                calls += 1;
                Vec::new()
            })
            .len();
        assert_eq!(second, 1);
        assert_eq!(calls, 1);
        assert_eq!(cache.stats.hits, 1);
        assert_eq!(cache.len(), 1);
    }

    // Tests a cached tiling equals a fresh deflation of the sun
    // Verified by seeding with swapped width and height
    #[test]
    fn test_tiling_matches_deflate() {
        let mut cache = TilingCache::new();
        let expected = deflate(seed_prototiles(960.0, 540.0), 2);
        assert_eq!(cache.tiling(key(2)), expected.as_slice());
    }

    // Tests the observer only runs when the tiling is computed
    // Verified by invoking the observer on hits
    #[test]
    fn test_observer_only_on_miss() {
        let mut cache = TilingCache::new();
        let mut reports = 0;
        cache.tiling_with(key(3), |_| reports += 1);
        cache.tiling_with(key(3), |_| reports += 1);
        assert_eq!(reports, 3);
        assert_eq!(cache.stats.misses, 1);
        assert_eq!(cache.stats.hits, 1);
    }

    // Tests negative generation counts share the zero-generation entry
    // Verified by storing the raw generation count
    #[test]
    fn test_negative_generations_key() {
        assert_eq!(key(-4), key(0));
        assert_eq!(key(-4).generations(), 0);
        assert_ne!(key(1), key(0));
    }

    // Tests keys distinguish strategies and dimensions
    // Verified by omitting the strategy from the key
    #[test]
    fn test_key_fields() {
        let quantized = TilingKey::new(960.0, 540.0, 1, DedupStrategy::Quantized { digits: 6 });
        assert_ne!(quantized, key(1));
        assert_eq!(quantized.width().to_bits(), 960.0_f64.to_bits());
        assert_eq!(quantized.height().to_bits(), 540.0_f64.to_bits());
        assert_eq!(quantized.strategy(), DedupStrategy::Quantized { digits: 6 });
    }

    // Tests clearing drops tilings but keeps statistics
    // Verified by resetting statistics in clear
    #[test]
    fn test_clear() {
        let mut cache = TilingCache::new();
        assert!(cache.is_empty());
        cache.tiling(key(0));
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats.misses, 1);
    }
}
