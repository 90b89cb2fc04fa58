use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Column, PgPool, Row, TypeInfo, ValueRef};

use crate::application::ports::{DatabaseError, ResultSet, SqlGateway};
use crate::domain::catalog::ColumnDef;
use crate::domain::comment::CommentRecord;

/// sqlx-backed implementation of the relational port.
///
/// Catalog introspection always goes through parameterised statements. The
/// `execute` path is the one place raw SQL reaches the driver: it receives
/// statements already validated against the catalog plus the caller's raw
/// WHERE/ORDER BY fragments (the documented trust boundary), and runs them
/// inside a transaction so an engine rejection can be rolled back cleanly.
pub struct PostgresSqlGateway {
    pool: PgPool,
}

impl PostgresSqlGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SqlGateway for PostgresSqlGateway {
    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        let tables = sqlx::query_scalar::<_, String>(
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema='public' ORDER BY table_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(connection_error)?;

        tracing::debug!(count = tables.len(), "listed tables");
        Ok(tables)
    }

    async fn list_table_fields(&self, table: &str) -> Result<Vec<ColumnDef>, DatabaseError> {
        let rows = sqlx::query(
            "SELECT column_name, data_type FROM information_schema.columns \
             WHERE table_name=$1 ORDER BY ordinal_position",
        )
        .bind(table)
        .fetch_all(&self.pool)
        .await
        .map_err(connection_error)?;

        rows.iter()
            .map(|row| {
                let name: String = row.try_get("column_name").map_err(connection_error)?;
                let data_type: String = row.try_get("data_type").map_err(connection_error)?;
                Ok(ColumnDef::new(name, data_type))
            })
            .collect()
    }

    async fn execute(&self, sql: &str) -> Result<ResultSet, DatabaseError> {
        let tx = self.pool.begin().await.map_err(connection_error)?;
        let rows = fetch_in_transaction(PgSelectTransaction(tx), sql).await?;

        let columns = rows
            .first()
            .map(|row| {
                row.columns()
                    .iter()
                    .map(|c| c.name().to_string())
                    .collect()
            })
            .unwrap_or_default();

        let rendered = rows
            .iter()
            .map(|row| (0..row.len()).map(|i| render_value(row, i)).collect())
            .collect();

        Ok(ResultSet {
            columns,
            rows: rendered,
        })
    }

    async fn insert_comment(&self, comment: &CommentRecord) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO gbads_comments \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(&comment.created)
        .bind(&comment.approved)
        .bind(&comment.dashboard)
        .bind(&comment.table)
        .bind(&comment.subject)
        .bind(&comment.message)
        .bind(&comment.name)
        .bind(&comment.email)
        .bind(comment.is_public)
        .bind(&comment.reviewer)
        .execute(&self.pool)
        .await
        .map_err(execution_error)?;

        tracing::info!(dashboard = %comment.dashboard, "comment row inserted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(connection_error)?;
        Ok(())
    }
}

/// One open transaction carrying a single SELECT. The seam keeps the
/// rollback-on-rejection flow independent of a live pool.
#[async_trait]
trait SelectTransaction: Send {
    type Row: Send;

    async fn fetch_all(&mut self, sql: &str) -> Result<Vec<Self::Row>, sqlx::Error>;

    async fn commit(self) -> Result<(), sqlx::Error>;

    async fn rollback(self) -> Result<(), sqlx::Error>;
}

struct PgSelectTransaction<'a>(sqlx::Transaction<'a, sqlx::Postgres>);

#[async_trait]
impl<'a> SelectTransaction for PgSelectTransaction<'a> {
    type Row = PgRow;

    async fn fetch_all(&mut self, sql: &str) -> Result<Vec<PgRow>, sqlx::Error> {
        sqlx::query(sql).fetch_all(&mut *self.0).await
    }

    async fn commit(self) -> Result<(), sqlx::Error> {
        self.0.commit().await
    }

    async fn rollback(self) -> Result<(), sqlx::Error> {
        self.0.rollback().await
    }
}

/// Run one statement inside the transaction. An engine rejection rolls the
/// transaction back before the error propagates; success commits.
async fn fetch_in_transaction<Tx: SelectTransaction>(
    mut tx: Tx,
    sql: &str,
) -> Result<Vec<Tx::Row>, DatabaseError> {
    let rows = match tx.fetch_all(sql).await {
        Ok(rows) => rows,
        Err(e) => {
            if let Err(rb) = tx.rollback().await {
                tracing::warn!(error = %rb, "rollback after failed query also failed");
            }
            return Err(execution_error(e));
        }
    };

    tx.commit().await.map_err(connection_error)?;
    Ok(rows)
}

fn connection_error(e: sqlx::Error) -> DatabaseError {
    DatabaseError::Connection(e.to_string())
}

/// Engine-level rejections (undefined column, syntax error in a WHERE
/// fragment, ...) become `Execution`; everything else is a connection
/// problem.
fn execution_error(e: sqlx::Error) -> DatabaseError {
    match e {
        sqlx::Error::Database(db) => DatabaseError::Execution(db.message().to_string()),
        other => DatabaseError::Connection(other.to_string()),
    }
}

/// Render one column of a row to text. The public API returns every value
/// as a string (text, CSV, or HTML cell), so the handful of column types the
/// GBADs tables actually use are decoded and formatted here.
fn render_value(row: &PgRow, idx: usize) -> String {
    let raw = match row.try_get_raw(idx) {
        Ok(raw) => raw,
        Err(_) => return String::new(),
    };
    if raw.is_null() {
        return "NULL".to_string();
    }
    let type_name = raw.type_info().name().to_string();

    match type_name.as_str() {
        "TEXT" | "VARCHAR" | "BPCHAR" | "CHAR" | "NAME" => {
            row.try_get::<String, _>(idx).unwrap_or_default()
        }
        "INT2" => render(row.try_get::<i16, _>(idx)),
        "INT4" => render(row.try_get::<i32, _>(idx)),
        "INT8" => render(row.try_get::<i64, _>(idx)),
        "FLOAT4" => render(row.try_get::<f32, _>(idx)),
        "FLOAT8" => render(row.try_get::<f64, _>(idx)),
        "NUMERIC" => render(row.try_get::<sqlx::types::Decimal, _>(idx)),
        "BOOL" => render(row.try_get::<bool, _>(idx)),
        "DATE" => render(row.try_get::<chrono::NaiveDate, _>(idx)),
        "TIMESTAMP" => render(row.try_get::<chrono::NaiveDateTime, _>(idx)),
        "TIMESTAMPTZ" => row
            .try_get::<chrono::DateTime<chrono::Utc>, _>(idx)
            .map(|v| v.to_rfc3339())
            .unwrap_or_default(),
        "JSON" | "JSONB" => row
            .try_get::<serde_json::Value, _>(idx)
            .map(|v| v.to_string())
            .unwrap_or_default(),
        other => {
            tracing::debug!(column_type = other, "no text rendering for column type");
            row.try_get::<String, _>(idx).unwrap_or_default()
        }
    }
}

fn render<T: ToString>(value: Result<T, sqlx::Error>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
