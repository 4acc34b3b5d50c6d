//! Matchday Cache - A process-local TTL cache for sports-data API responses
//!
//! Entries expire after a fixed TTL and are evicted lazily on read. A
//! read-through helper fills the cache on a miss, and an optional HTTP
//! front exposes one JSON-payload cache to other processes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{fetch_through, TtlCache};
pub use config::Config;
pub use tasks::spawn_sweep_task;
