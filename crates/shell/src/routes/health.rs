//! Health check handlers.

use axum::Json;
use serde_json::{Value, json};

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness probe.
///
/// The shell is ready as soon as it is serving; it holds no connections
/// that need warming.
pub async fn readiness() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}
