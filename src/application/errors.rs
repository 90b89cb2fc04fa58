//! Error types shared by the use cases.

use thiserror::Error;

use crate::application::ports::{DatabaseError, GraphError, StoreError};
use crate::domain::errors::QueryValidationError;

/// Errors on the query path. The two kinds required by the query-builder
/// contract stay distinct end to end: `Validation` never reaches the
/// database, `Database(Execution)` means the engine rejected the assembled
/// statement after the pre-checks passed.
#[derive(Debug, Error)]
pub enum QueryUseCaseError {
    #[error(transparent)]
    Validation(#[from] QueryValidationError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

#[derive(Debug, Error)]
pub enum FileUseCaseError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum CommentUseCaseError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Malformed comment document: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum MetadataUseCaseError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Dataset not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum PopulationUseCaseError {
    #[error("Invalid data source `{0}`; allowed sources are: oie, faostat")]
    InvalidSource(String),

    #[error(transparent)]
    Query(#[from] QueryUseCaseError),
}
