use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::api::router::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Welcome to the public GBADs database tables!" }))
}

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// GET /health/ready
/// Readiness: the service is ready once the database answers a ping.
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.gateway.ping().await {
        Ok(()) => Ok(Json(json!({ "status": "ready" }))),
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "not ready", "error": e.to_string() })),
            ))
        }
    }
}
