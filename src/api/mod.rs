//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `PUT /cache` - Store a JSON payload under a key
//! - `GET /cache/:key` - Retrieve a fresh payload by key
//! - `DELETE /cache` - Clear every entry
//! - `GET /stats` - Raw store snapshot and counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
