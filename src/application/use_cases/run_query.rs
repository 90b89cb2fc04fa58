use std::sync::Arc;

use crate::application::dto::QueryResult;
use crate::application::errors::QueryUseCaseError;
use crate::application::ports::SqlGateway;
use crate::domain::catalog::TableCatalog;
use crate::domain::query::{parse_join_descriptor, QuerySpec};

/// The caller's request as received by the HTTP layer. `join` is the raw
/// 4-item descriptor (`table1,table2,field1,field2`), not a clause.
#[derive(Debug, Clone, Default)]
pub struct SelectRequest {
    pub table: String,
    pub fields: String,
    pub where_clause: String,
    pub join: String,
    pub order_by: String,
    pub count: bool,
}

/// Use case: validate a query against a live catalog snapshot, assemble the
/// SELECT statement, and run it.
///
/// The WHERE and ORDER BY fragments are passed through to the engine
/// unescaped. That trust boundary is inherited from the public API contract;
/// identifier validation only covers the table name and plain field lists.
pub struct SelectQueryUseCase {
    gateway: Arc<dyn SqlGateway>,
}

impl SelectQueryUseCase {
    pub fn new(gateway: Arc<dyn SqlGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, request: SelectRequest) -> Result<QueryResult, QueryUseCaseError> {
        // 1. Snapshot the catalog. Re-fetched on every call: the live
        // information-schema is the only validation truth.
        let tables = self.gateway.list_tables().await?;
        let columns = self.gateway.list_table_fields(&request.table).await?;
        let catalog = TableCatalog::new(tables, columns);

        // 2. Turn the join descriptor into a clause (no catalog check on
        // join identifiers; the engine reports those).
        let join = if request.join.is_empty() {
            String::new()
        } else {
            parse_join_descriptor(&request.join)?
        };

        // 3. Expand `*` to the explicit column list so the response headers
        // name every column. Joined or counting selects keep `*` as-is.
        let fields = if request.fields == "*" && join.is_empty() && !request.count {
            catalog.column_names().join(",")
        } else {
            request.fields
        };

        let spec = QuerySpec {
            table: request.table,
            fields,
            where_clause: request.where_clause,
            join,
            order_by: request.order_by,
            count: request.count,
        };

        // 4. Validate before any SQL is assembled or sent.
        spec.validate(&catalog)?;

        // 5. Execute and return rows, column names, and the exact statement.
        let sql = spec.to_sql();
        let result = self.gateway.execute(&sql).await?;

        Ok(QueryResult {
            columns: result.columns,
            rows: result.rows,
            executed_sql: sql,
        })
    }
}
