//! Cache Entry Module
//!
//! A stored payload plus the time it was written.

// == Cache Entry ==
/// Represents a single cache entry with its insertion timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    /// The stored payload
    pub data: T,
    /// Insertion timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates an entry stamped with `stored_at`.
    pub fn new(data: T, stored_at: u64) -> Self {
        Self { data, stored_at }
    }

    // == Age ==
    /// Milliseconds elapsed since insertion.
    ///
    /// Saturates at 0 if `now_ms` is earlier than `stored_at`.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at)
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived `ttl_ms`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is still
    /// fresh. It turns stale on the first millisecond after that.
    pub fn is_stale(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) > ttl_ms
    }

    // == Remaining ==
    /// Milliseconds left before the entry turns stale, 0 if it already has.
    pub fn remaining_ms(&self, now_ms: u64, ttl_ms: u64) -> u64 {
        ttl_ms.saturating_sub(self.age_ms(now_ms))
    }
}
