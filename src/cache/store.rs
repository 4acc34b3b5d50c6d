//! Cache Store Module
//!
//! Keyed store with a single fixed TTL and lazy, read-time eviction.

use std::collections::HashMap;
use std::time::Duration;

use tracing::trace;

use crate::cache::stats::Counters;
use crate::cache::{duration_ms, CacheEntry, CacheStats, Clock, SystemClock, DEFAULT_TTL};

// == TTL Cache ==
/// In-memory key/value store whose entries go stale after a fixed TTL.
///
/// Stale entries are only removed when read (or by an explicit
/// [`sweep_expired`](Self::sweep_expired)), never in the background.
#[derive(Debug)]
pub struct TtlCache<V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Lifetime of every entry
    ttl: Duration,
    /// Time source for stamping and ageing entries
    clock: C,
    /// Hit/miss/eviction counters
    counters: Counters,
}

impl<V> TtlCache<V, SystemClock> {
    // == Constructor ==
    /// Creates an empty cache on the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<V> Default for TtlCache<V, SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<V, C: Clock> TtlCache<V, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
            counters: Counters::default(),
        }
    }

    fn ttl_ms(&self) -> u64 {
        duration_ms(self.ttl)
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// The timestamp is always refreshed on overwrite.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let entry = CacheEntry::new(value, self.clock.now_ms());
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Returns the value under `key` if it is still fresh.
    ///
    /// A stale entry is removed as a side effect. Never set, stale and
    /// cleared keys all look the same to the caller.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let now = self.clock.now_ms();
        let ttl_ms = self.ttl_ms();

        let stale = match self.entries.get(key) {
            Some(entry) => entry.is_stale(now, ttl_ms),
            None => {
                self.counters.record_miss();
                return None;
            }
        };

        if stale {
            self.entries.remove(key);
            self.counters.record_miss();
            self.counters.record_evictions(1);
            trace!(key, "evicted stale entry on read");
            return None;
        }

        self.counters.record_hit();
        self.entries.get(key).map(|entry| &entry.data)
    }

    // == Get Or Insert ==
    /// Returns the fresh value under `key`, or stores and returns `f()`.
    pub fn get_or_insert_with<F>(&mut self, key: &str, f: F) -> &V
    where
        F: FnOnce() -> V,
    {
        if self.get(key).is_none() {
            self.set(key, f());
        }
        &self.entries[key].data
    }

    // == Contains Fresh ==
    /// Checks for a fresh entry without evicting or touching counters.
    pub fn contains_fresh(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_stale(now, self.ttl_ms()))
    }

    // == TTL Remaining ==
    /// Time left before the entry under `key` turns stale.
    ///
    /// `None` if there is no entry; `Some(ZERO)` if it is already stale but
    /// has not been evicted yet.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .map(|entry| Duration::from_millis(entry.remaining_ms(now, self.ttl_ms())))
    }

    // == Clear ==
    /// Removes every entry, fresh or stale. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Returns a snapshot of the raw store.
    ///
    /// Stale entries that have not been read yet are included.
    pub fn stats(&self) -> CacheStats {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort_unstable();

        CacheStats {
            size: self.entries.len(),
            keys,
            hits: self.counters.hits,
            misses: self.counters.misses,
            evictions: self.counters.evictions,
        }
    }

    // == Sweep Expired ==
    /// Removes all stale entries at once.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let ttl_ms = self.ttl_ms();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_stale(now, ttl_ms));

        let removed = before - self.entries.len();
        self.counters.record_evictions(removed);
        removed
    }

    // == TTL ==
    /// Returns the lifetime applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the raw number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use serde_json::{json, Value};

    const MINUTE: Duration = Duration::from_secs(60);

    fn manual_cache<V>() -> (TtlCache<V, ManualClock>, ManualClock) {
        let clock = ManualClock::new(1_700_000_000_000);
        (TtlCache::with_clock(DEFAULT_TTL, clock.clone()), clock)
    }

    #[test]
    fn test_store_new() {
        let store: TtlCache<String> = TtlCache::default();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), DEFAULT_TTL);
    }

    #[test]
    fn test_store_set_and_get() {
        let (mut store, _) = manual_cache();

        store.set("teamA-standings", json!({"rank": 1}));

        assert_eq!(store.get("teamA-standings"), Some(&json!({"rank": 1})));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let (mut store, _) = manual_cache::<String>();
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let (mut store, _) = manual_cache();

        store.set("odds", "v1".to_string());
        store.set("odds", "v2".to_string());

        assert_eq!(store.get("odds").map(String::as_str), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_refreshes_timestamp() {
        let (mut store, clock) = manual_cache();

        store.set("fixtures", 1);
        clock.advance(10 * MINUTE);
        store.set("fixtures", 2);
        clock.advance(10 * MINUTE);

        // 20 minutes after the first write, 10 after the second
        assert_eq!(store.get("fixtures"), Some(&2));
    }

    #[test]
    fn test_store_expiration_window() {
        let (mut store, clock) = manual_cache();

        store.set("live", 7);
        clock.advance(14 * MINUTE);
        assert_eq!(store.get("live"), Some(&7));

        clock.advance(2 * MINUTE);
        assert!(store.get("live").is_none());
        assert!(store.is_empty(), "stale entry should be evicted on read");
    }

    #[test]
    fn test_store_exact_boundary_is_fresh() {
        let (mut store, clock) = manual_cache();

        store.set("live", 7);
        clock.advance(DEFAULT_TTL);
        assert_eq!(store.get("live"), Some(&7));

        clock.advance(Duration::from_millis(1));
        assert!(store.get("live").is_none());
    }

    #[test]
    fn test_huge_ttl_does_not_wrap() {
        // More milliseconds than fit in a u64
        let ttl = Duration::from_secs(18_446_744_073_709_552);
        let clock = ManualClock::new(0);
        let mut store = TtlCache::with_clock(ttl, clock.clone());

        store.set("k", 1);
        clock.advance(Duration::from_secs(1));
        assert_eq!(store.get("k"), Some(&1));

        clock.advance(Duration::from_secs(365 * 24 * 60 * 60));
        assert_eq!(store.get("k"), Some(&1));
    }

    #[test]
    fn test_ttl_remaining() {
        let (mut store, clock) = manual_cache();

        assert!(store.ttl_remaining("k").is_none());

        store.set("k", 1);
        clock.advance(5 * MINUTE);
        assert_eq!(store.ttl_remaining("k"), Some(10 * MINUTE));

        clock.advance(20 * MINUTE);
        assert_eq!(store.ttl_remaining("k"), Some(Duration::ZERO));
    }

    #[test]
    fn test_store_clear() {
        let (mut store, _) = manual_cache();

        store.set("a", 1);
        store.set("b", 2);
        store.set("c", 3);
        store.clear();

        assert!(store.get("a").is_none());
        assert!(store.get("b").is_none());
        assert!(store.get("c").is_none());
        assert_eq!(store.stats().size, 0);
    }

    #[test]
    fn test_stats_include_unread_stale_entries() {
        let (mut store, clock) = manual_cache();

        store.set("old", 1);
        clock.advance(20 * MINUTE);
        store.set("new", 2);

        let stats = store.stats();
        assert_eq!(stats.size, 2);
        assert_eq!(stats.keys, vec!["new".to_string(), "old".to_string()]);

        // Reading the stale key evicts it
        assert!(store.get("old").is_none());
        assert_eq!(store.stats().size, 1);
    }

    #[test]
    fn test_store_stats_counters() {
        let (mut store, clock) = manual_cache();

        store.set("key1", 1);
        store.get("key1"); // hit
        store.get("nonexistent"); // miss
        clock.advance(16 * MINUTE);
        store.get("key1"); // miss + eviction

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.size, 0);
    }

    #[test]
    fn test_type_preservation() {
        let (mut store, _) = manual_cache::<Value>();

        store.set("name", json!("Arsenal"));
        store.set("points", json!(73));
        store.set("form", json!(["W", "D", "W"]));
        store.set("team", json!({"id": 42, "name": "Arsenal"}));

        assert_eq!(store.get("name"), Some(&json!("Arsenal")));
        assert_eq!(store.get("points"), Some(&json!(73)));
        assert_eq!(store.get("form"), Some(&json!(["W", "D", "W"])));
        assert_eq!(store.get("team"), Some(&json!({"id": 42, "name": "Arsenal"})));
    }

    #[test]
    fn test_contains_fresh_does_not_evict() {
        let (mut store, clock) = manual_cache();

        store.set("k", 1);
        assert!(store.contains_fresh("k"));

        clock.advance(16 * MINUTE);
        assert!(!store.contains_fresh("k"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().misses, 0);
    }

    #[test]
    fn test_get_or_insert_with() {
        let (mut store, clock) = manual_cache();

        assert_eq!(*store.get_or_insert_with("k", || 1), 1);
        // Fresh value wins over the closure
        assert_eq!(*store.get_or_insert_with("k", || 2), 1);

        clock.advance(16 * MINUTE);
        assert_eq!(*store.get_or_insert_with("k", || 3), 3);
    }

    #[test]
    fn test_store_sweep_expired() {
        let (mut store, clock) = manual_cache();

        store.set("key1", 1);
        clock.advance(10 * MINUTE);
        store.set("key2", 2);
        clock.advance(6 * MINUTE);

        let removed = store.sweep_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("key2"), Some(&2));
        assert_eq!(store.stats().evictions, 1);
    }
}
