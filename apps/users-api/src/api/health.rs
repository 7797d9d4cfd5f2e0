//! Health check endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "users-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn ready() -> Json<HealthResponse> {
    // The store lives in process memory; there is nothing external to probe
    Json(HealthResponse {
        status: "ready".to_string(),
        service: "users-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}
