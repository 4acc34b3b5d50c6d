//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Sweep: Removes stale cache entries at a configured interval (opt-in)

mod sweep;

pub use sweep::spawn_sweep_task;
