use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::ColumnDef;
use crate::domain::comment::CommentRecord;
#[cfg(test)]
use mockall::automock;

/// Failures reported by the relational backend. The two kinds are kept
/// distinct because callers may correct an execution failure (a bad WHERE
/// fragment, an undefined join column) but not a connection failure.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The engine rejected an assembled statement. The transaction has
    /// already been rolled back when this surfaces.
    #[error("Query rejected by the database: {0}")]
    Execution(String),

    /// Pool, protocol, or transaction-management failure.
    #[error("Database connection error: {0}")]
    Connection(String),
}

/// Rows rendered to text plus the parallel list of column names, both as
/// produced by the driver. Lives for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Port for the relational database: catalog introspection, verbatim SELECT
/// execution, and the one write path (approved comments).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SqlGateway: Send + Sync {
    /// All table names in the public schema, ordered by name.
    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError>;

    /// Ordered (name, type) pairs for a table; empty when the table does not
    /// exist.
    async fn list_table_fields(&self, table: &str) -> Result<Vec<ColumnDef>, DatabaseError>;

    /// Execute an assembled SELECT statement verbatim. On engine rejection
    /// the open transaction is rolled back and [`DatabaseError::Execution`]
    /// is returned; nothing is retried and no partial rows are surfaced.
    async fn execute(&self, sql: &str) -> Result<ResultSet, DatabaseError>;

    /// Insert an approved comment row (parameterised, never interpolated).
    async fn insert_comment(&self, comment: &CommentRecord) -> Result<(), DatabaseError>;

    /// Cheap liveness probe for the readiness endpoint.
    async fn ping(&self) -> Result<(), DatabaseError>;
}
