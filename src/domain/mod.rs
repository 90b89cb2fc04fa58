pub mod catalog;
pub mod comment;
pub mod errors;
pub mod query;

pub use catalog::{ColumnDef, TableCatalog};
pub use comment::CommentRecord;
pub use errors::QueryValidationError;
pub use query::{build_from_join_clause, parse_join_descriptor, QuerySpec};
