use thiserror::Error;

/// Pre-execution identifier failures: the request names a table or column
/// that does not exist in the current catalog snapshot. Always
/// caller-correctable, never retried, and never sent to the database.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryValidationError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field list cannot be empty")]
    EmptyFields,

    #[error("Join must contain exactly 4 items: table1,table2,field1,field2")]
    MalformedJoin,
}
