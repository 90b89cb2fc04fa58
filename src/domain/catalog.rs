//! Point-in-time view of the database catalog used for identifier validation.
//!
//! A snapshot is rebuilt from `information_schema` on every validating call
//! rather than cached: validation truth is always the live database, and a
//! query referencing a table or column absent from the snapshot is rejected
//! before anything reaches the engine.

/// Column name/type pair as reported by `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: String,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// Snapshot of the public-schema table list plus the column set of the one
/// table under validation.
#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    tables: Vec<String>,
    columns: Vec<ColumnDef>,
}

impl TableCatalog {
    pub fn new(tables: Vec<String>, columns: Vec<ColumnDef>) -> Self {
        Self { tables, columns }
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.iter().any(|t| t == name)
    }

    /// Exact-match column lookup. A field name that is merely a substring of
    /// a real column does not validate.
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }
}
