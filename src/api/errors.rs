use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::errors::{
    CommentUseCaseError, FileUseCaseError, MetadataUseCaseError, PopulationUseCaseError,
    QueryUseCaseError,
};
use crate::application::ports::{DatabaseError, GraphError, StoreError};

/// API error response
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

// Convert use case errors to API errors. The query path keeps its two error
// kinds distinct: catalog-validation failures and engine rejections are both
// caller-correctable 400s (with different messages), connection trouble is a
// 500.

impl From<QueryUseCaseError> for ApiError {
    fn from(err: QueryUseCaseError) -> Self {
        match err {
            QueryUseCaseError::Validation(e) => ApiError::bad_request(e.to_string()),
            QueryUseCaseError::Database(DatabaseError::Execution(msg)) => ApiError::bad_request(
                format!("Error in the given query. Please check the syntax and try again: {msg}"),
            ),
            QueryUseCaseError::Database(DatabaseError::Connection(msg)) => {
                ApiError::internal_error(format!("Database error: {msg}"))
            }
        }
    }
}

impl From<PopulationUseCaseError> for ApiError {
    fn from(err: PopulationUseCaseError) -> Self {
        match err {
            PopulationUseCaseError::InvalidSource(_) => ApiError::bad_request(err.to_string()),
            PopulationUseCaseError::Query(e) => e.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::not_found(err.to_string()),
            StoreError::Backend(msg) => {
                ApiError::internal_error(format!("Object store error: {msg}"))
            }
        }
    }
}

impl From<FileUseCaseError> for ApiError {
    fn from(err: FileUseCaseError) -> Self {
        match err {
            FileUseCaseError::Store(e) => e.into(),
        }
    }
}

impl From<CommentUseCaseError> for ApiError {
    fn from(err: CommentUseCaseError) -> Self {
        match err {
            CommentUseCaseError::Store(e) => e.into(),
            CommentUseCaseError::Malformed(msg) => {
                ApiError::bad_request(format!("Malformed comment document: {msg}"))
            }
            CommentUseCaseError::Database(DatabaseError::Execution(msg)) => {
                ApiError::internal_error(format!("Comment insert rejected: {msg}"))
            }
            CommentUseCaseError::Database(DatabaseError::Connection(msg)) => {
                ApiError::internal_error(format!("Database error: {msg}"))
            }
        }
    }
}

impl From<MetadataUseCaseError> for ApiError {
    fn from(err: MetadataUseCaseError) -> Self {
        match err {
            MetadataUseCaseError::NotFound(name) => {
                ApiError::not_found(format!("Dataset not found: {name}"))
            }
            MetadataUseCaseError::Graph(GraphError::Driver(msg)) => {
                ApiError::internal_error(format!("Graph error: {msg}"))
            }
            MetadataUseCaseError::Graph(GraphError::Malformed(msg)) => {
                ApiError::internal_error(format!("Malformed graph record: {msg}"))
            }
        }
    }
}
