//! Cache Statistics Module
//!
//! Snapshot of the raw store contents plus hit/miss/eviction counters.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of a cache.
///
/// `size` and `keys` describe the raw store, so entries that are already
/// stale but have not been read since are still counted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of entries currently held
    pub size: usize,
    /// Keys currently held, sorted
    pub keys: Vec<String>,
    /// Number of reads that returned a value
    pub hits: u64,
    /// Number of reads that returned nothing (never set, stale or cleared)
    pub misses: u64,
    /// Number of stale entries removed, lazily or by a sweep
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates an empty snapshot with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Counters ==
/// Running counters owned by a cache.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Counters {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl Counters {
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_evictions(&mut self, count: usize) {
        self.evictions += count as u64;
    }
}
