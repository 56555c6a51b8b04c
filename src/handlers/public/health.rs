use axum::extract::State;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

pub const ROUTE_NOT_FOUND: &str = "Route not found.";
pub const DATABASE_UNAVAILABLE: &str = "Database unavailable.";

/// GET /health - Liveness plus store connectivity
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    match state.posts.health_check().await {
        Ok(_) => Ok(ApiResponse::success(json!({
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "database": "ok"
        }))),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Err(ApiError::service_unavailable(DATABASE_UNAVAILABLE))
        }
    }
}

/// Fallback for unmatched routes
pub async fn route_not_found() -> ApiError {
    ApiError::not_found(ROUTE_NOT_FOUND)
}
