use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::format::{render_list, render_table, RenderOptions, TableFormat};
use crate::api::router::AppState;

#[derive(Deserialize)]
pub struct FormatQuery {
    #[serde(default)]
    format: TableFormat,
}

/// GET /v1/tables
/// List all tables in the public schema.
pub async fn list_tables_handler(
    State(state): State<AppState>,
    Query(query): Query<FormatQuery>,
) -> Result<Response, ApiError> {
    let tables = state.list_tables.execute().await?;
    if tables.is_empty() {
        return Err(ApiError::not_found("No tables found"));
    }

    let options = RenderOptions {
        title: Some("GBADs Public Database Tables".to_string()),
        download_name: Some("tables".to_string()),
        ..Default::default()
    };
    Ok(render_list(query.format, &tables, &options))
}

/// GET /v1/tables/{table}/fields
/// List the (name, type) pairs of one table; 404 for unknown tables.
pub async fn list_fields_handler(
    State(state): State<AppState>,
    Path(table): Path<String>,
    Query(query): Query<FormatQuery>,
) -> Result<Response, ApiError> {
    let fields = state.list_fields.execute(&table).await?;
    if fields.is_empty() {
        return Err(ApiError::not_found("No fields found"));
    }

    let options = RenderOptions {
        title: Some(format!("Data fields: {table}")),
        download_name: Some(format!("{table}_fields")),
        ..Default::default()
    };

    // Text and CSV callers want just the field names; HTML shows types too.
    match query.format {
        TableFormat::Html => {
            let columns = vec!["name".to_string(), "type".to_string()];
            let rows: Vec<Vec<String>> = fields
                .into_iter()
                .map(|f| vec![f.name, f.data_type])
                .collect();
            Ok(render_table(query.format, &columns, &rows, &options))
        }
        _ => {
            let names: Vec<String> = fields.into_iter().map(|f| f.name).collect();
            Ok(render_list(query.format, &names, &options))
        }
    }
}
