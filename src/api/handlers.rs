//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::{Clock, SystemClock, TtlCache};
use crate::error::{ApiError, Result};
use crate::models::{
    ClearResponse, GetResponse, HealthResponse, SetRequest, SetResponse, StatsResponse,
};

/// Cache of upstream JSON payloads shared between handlers.
pub type SharedCache<C = SystemClock> = Arc<RwLock<TtlCache<Value, C>>>;

/// Application state shared across all handlers.
///
/// Contains the cache wrapped in Arc<RwLock<>> so every request handler
/// in this process sees the same store.
pub struct AppState<C = SystemClock> {
    /// Process-local cache
    pub cache: SharedCache<C>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<C: Clock> AppState<C> {
    /// Creates a new AppState owning the given cache.
    pub fn new(cache: TtlCache<Value, C>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }
}

impl AppState {
    /// Creates a new AppState from configuration.
    ///
    /// Builds a system-clock cache with the configured TTL.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(TtlCache::new(config.ttl()))
    }
}

/// Handler for PUT /cache
///
/// Stores a JSON payload under a key, replacing any previous one.
pub async fn set_handler<C>(
    State(state): State<AppState<C>>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>>
where
    C: Clock + Send + Sync + 'static,
{
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    cache.set(req.key.clone(), req.value);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /cache/:key
///
/// Returns the payload if still fresh, 404 otherwise.
pub async fn get_handler<C>(
    State(state): State<AppState<C>>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>>
where
    C: Clock + Send + Sync + 'static,
{
    // Write lock: a stale entry is evicted on read
    let mut cache = state.cache.write().await;
    let Some(value) = cache.get(&key).cloned() else {
        return Err(ApiError::Miss(key));
    };
    let remaining = cache.ttl_remaining(&key).unwrap_or_default();

    Ok(Json(GetResponse::new(key, value, remaining.as_secs())))
}

/// Handler for DELETE /cache
///
/// Drops every entry.
pub async fn clear_handler<C>(State(state): State<AppState<C>>) -> Json<ClearResponse>
where
    C: Clock + Send + Sync + 'static,
{
    let mut cache = state.cache.write().await;
    let removed = cache.len();
    cache.clear();
    info!("Cache cleared, {} entries removed", removed);

    Json(ClearResponse::new(removed))
}

/// Handler for GET /stats
///
/// Returns the raw store snapshot and counters.
pub async fn stats_handler<C>(State(state): State<AppState<C>>) -> Json<StatsResponse>
where
    C: Clock + Send + Sync + 'static,
{
    let cache = state.cache.read().await;
    Json(StatsResponse::new(cache.stats(), cache.ttl().as_secs()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
