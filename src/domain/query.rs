//! Dynamic `SELECT` assembly.
//!
//! A [`QuerySpec`] carries the caller's request verbatim: table name, field
//! list, optional WHERE/ORDER BY fragments, an optional pre-built join
//! clause, and a count flag. Identifier validation happens against a live
//! [`TableCatalog`] snapshot before any string is assembled; the WHERE and
//! ORDER BY fragments themselves are a documented trust boundary and pass
//! through unescaped.

use crate::domain::catalog::TableCatalog;
use crate::domain::errors::QueryValidationError;

/// The caller's query request. No normalization beyond trimming; no AST.
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    pub table: String,
    /// Comma-separated field list, or `*` for all columns.
    pub fields: String,
    /// Raw WHERE fragment, appended verbatim when non-empty.
    pub where_clause: String,
    /// Pre-built join clause (`FROM t1 INNER JOIN t2 ON ...`), or empty.
    pub join: String,
    /// Raw ORDER BY fragment, appended verbatim when non-empty.
    pub order_by: String,
    pub count: bool,
}

/// Build the `FROM ... INNER JOIN ... ON ...` clause from caller-supplied
/// identifiers. Join tables and fields are not checked against the catalog;
/// the engine reports unknown identifiers at execution time.
pub fn build_from_join_clause(table1: &str, table2: &str, field1: &str, field2: &str) -> String {
    format!("FROM {table1} INNER JOIN {table2} ON {table1}.{field1} = {table2}.{field2}")
}

/// Parse the 4-item join descriptor `table1,table2,field1,field2` into a
/// join clause.
pub fn parse_join_descriptor(descriptor: &str) -> Result<String, QueryValidationError> {
    let parts: Vec<&str> = descriptor.split(',').map(str::trim).collect();
    let [t1, t2, f1, f2] = parts.as_slice() else {
        return Err(QueryValidationError::MalformedJoin);
    };
    if [t1, t2, f1, f2].iter().any(|p| p.is_empty()) {
        return Err(QueryValidationError::MalformedJoin);
    }
    Ok(build_from_join_clause(t1, t2, f1, f2))
}

impl QuerySpec {
    /// Validate identifiers against the catalog snapshot.
    ///
    /// The table name must always resolve. Fields are checked exactly, one by
    /// one, unless the request selects `*`, counts, or carries a join (joined
    /// selects use qualified names which never match `information_schema`
    /// entries; those are left to the engine).
    pub fn validate(&self, catalog: &TableCatalog) -> Result<(), QueryValidationError> {
        if !catalog.contains_table(&self.table) {
            return Err(QueryValidationError::UnknownTable(self.table.clone()));
        }
        if self.count || self.fields == "*" || !self.join.is_empty() {
            return Ok(());
        }
        for field in self.fields.split(',') {
            let field = field.trim();
            if field.is_empty() {
                return Err(QueryValidationError::EmptyFields);
            }
            if !catalog.contains_column(field) {
                return Err(QueryValidationError::UnknownField(field.to_string()));
            }
        }
        Ok(())
    }

    /// Assemble the final SQL string. Counting replaces the field list with
    /// `COUNT(*)` whether or not a join is present.
    pub fn to_sql(&self) -> String {
        let fields = if self.count { "COUNT(*)" } else { &self.fields };
        let mut sql = format!("SELECT {fields}");
        if self.join.is_empty() {
            sql.push_str(&format!(" FROM {}", self.table));
        } else {
            sql.push(' ');
            sql.push_str(&self.join);
        }
        if !self.where_clause.is_empty() {
            sql.push_str(&format!(" WHERE {}", self.where_clause));
        }
        if !self.order_by.is_empty() {
            sql.push_str(&format!(" ORDER BY {}", self.order_by));
        }
        sql
    }
}
