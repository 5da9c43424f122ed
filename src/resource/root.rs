use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::AppState;
use crate::backend::Backend;

pub const GREETING: &str = "Hello World! Next Dev";

/// `GET /`
pub async fn greeting() -> &'static str {
    GREETING
}

/// `GET /health`: round-trips `SELECT 1` through the pool
pub async fn health(State(backend): State<AppState>) -> impl IntoResponse {
    match backend.health_check().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "message": "Database unavailable"
                })),
            )
        }
    }
}

/// Catch-all for unknown paths and for known paths hit with an unsupported method
pub async fn route_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found",
            "path": uri.path()
        })),
    )
}
