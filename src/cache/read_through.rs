//! Read-Through Helper
//!
//! Looks a key up in a shared cache and, on a miss, runs the caller's fetch
//! and stores its result.

use std::future::Future;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{Clock, TtlCache};

/// Returns the cached value for `key`, or fetches, stores and returns it.
///
/// The lock is not held while `fetch` runs, so concurrent misses on the same
/// key may each fetch; the last one to finish wins. A failed fetch leaves the
/// cache untouched and its error is handed back as-is.
///
/// # Example
/// ```ignore
/// let table = fetch_through(&state.cache, "standings:39:2024", || async {
///     upstream.standings(39, 2024).await
/// })
/// .await?;
/// ```
pub async fn fetch_through<V, C, F, Fut, E>(
    cache: &RwLock<TtlCache<V, C>>,
    key: &str,
    fetch: F,
) -> Result<V, E>
where
    V: Clone,
    C: Clock,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>>,
{
    // Write lock: a stale hit is evicted during the lookup
    if let Some(value) = cache.write().await.get(key).cloned() {
        debug!(key, "read-through hit");
        return Ok(value);
    }

    debug!(key, "read-through miss, fetching");
    match fetch().await {
        Ok(value) => {
            cache.write().await.set(key, value.clone());
            Ok(value)
        }
        Err(err) => {
            warn!(key, "read-through fetch failed, nothing cached");
            Err(err)
        }
    }
}
