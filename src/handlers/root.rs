use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::server::AppState;

/// GET / - Service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Blog API",
        "version": version,
        "endpoints": {
            "authors": "/authors[/:id]",
            "posts": "/posts[/:id]",
            "comments": "/posts/comments/:id",
            "health": "/health",
        }
    }))
}

/// GET /health - Liveness plus a store round trip
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    if let Err(e) = DatabaseManager::health_check(state.store()).await {
        tracing::error!("Health check failed: {}", e);
        return Err(ApiError::service_unavailable("Store unavailable"));
    }

    Ok(Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "store": "ok"
    })))
}

/// Catch-all for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}
