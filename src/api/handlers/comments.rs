use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::verify_moderation_token;
use crate::api::router::AppState;

#[derive(Deserialize)]
pub struct ApproveParams {
    #[serde(default)]
    reviewer: Option<String>,
}

/// POST /v1/comments/{id}/approve
/// Requires a moderation token minted for the `approve` task.
pub async fn approve_comment_handler(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    Query(params): Query<ApproveParams>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    verify_moderation_token(&headers, "approve")?;

    state
        .approve_comment
        .execute(&comment_id, params.reviewer)
        .await?;
    Ok(Json(json!({
        "message": format!("Comment {comment_id} approved")
    })))
}

/// POST /v1/comments/{id}/deny
/// Requires a moderation token minted for the `deny` task.
pub async fn deny_comment_handler(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    verify_moderation_token(&headers, "deny")?;

    state.deny_comment.execute(&comment_id).await?;
    Ok(Json(json!({
        "message": format!("Comment {comment_id} denied")
    })))
}
