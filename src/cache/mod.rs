//! Cache Module
//!
//! Provides an in-memory TTL cache with lazy eviction and read-through helpers.

mod clock;
mod entry;
mod read_through;
mod stats;
mod store;


use std::time::Duration;

// Re-export public types
pub use clock::{current_timestamp_ms, duration_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use read_through::fetch_through;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// Lifetime of a cached upstream response (15 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(15 * 60);
