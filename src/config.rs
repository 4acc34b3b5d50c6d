//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_TTL_SECS: u64 = 15 * 60;
const DEFAULT_PORT: u16 = 3000;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lifetime of every cache entry, in seconds
    pub ttl_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Seconds between background sweeps; 0 disables the sweep
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Entry lifetime in seconds (default: 900; 0 is ignored)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 0, disabled)
    pub fn from_env() -> Self {
        Self {
            ttl_secs: match env_or("CACHE_TTL", DEFAULT_TTL_SECS) {
                0 => DEFAULT_TTL_SECS,
                secs => secs,
            },
            server_port: env_or("SERVER_PORT", DEFAULT_PORT),
            sweep_interval: env_or("SWEEP_INTERVAL", 0),
        }
    }

    /// Entry lifetime as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Sweep period, or `None` when lazy eviction is the only eviction.
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval > 0).then(|| Duration::from_secs(self.sweep_interval))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
            server_port: DEFAULT_PORT,
            sweep_interval: 0,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
