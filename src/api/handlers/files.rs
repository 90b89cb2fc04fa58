use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::api::errors::ApiError;
use crate::api::router::AppState;

#[derive(Deserialize)]
pub struct FileParams {
    bucket: String,
    key: String,
}

/// POST /v1/files
/// Store the request body under `bucket`/`key`.
pub async fn upload_file_handler(
    State(state): State<AppState>,
    Query(params): Query<FileParams>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .upload_file
        .execute(&params.bucket, &params.key, body)
        .await?;
    Ok(Json(json!({
        "message": format!("Uploaded {} to {}", params.key, params.bucket)
    })))
}

/// GET /v1/files
/// Stream the object back as an attachment.
pub async fn download_file_handler(
    State(state): State<AppState>,
    Query(params): Query<FileParams>,
) -> Result<Response, ApiError> {
    let body = state
        .download_file
        .execute(&params.bucket, &params.key)
        .await?;

    let filename = params
        .key
        .rsplit('/')
        .next()
        .unwrap_or(params.key.as_str())
        .to_string();
    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/octet-stream".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        body,
    )
        .into_response())
}

/// DELETE /v1/files
pub async fn delete_file_handler(
    State(state): State<AppState>,
    Query(params): Query<FileParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .delete_file
        .execute(&params.bucket, &params.key)
        .await?;
    Ok(Json(json!({
        "message": format!("Deleted {} from {}", params.key, params.bucket)
    })))
}
