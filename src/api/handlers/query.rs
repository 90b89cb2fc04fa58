use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::format::{render_table, RenderOptions, TableFormat};
use crate::api::router::AppState;
use crate::application::use_cases::SelectRequest;

#[derive(Deserialize)]
pub struct QueryParams {
    #[serde(default = "default_fields")]
    fields: String,
    /// Raw WHERE fragment, passed through to the engine unescaped.
    #[serde(default)]
    query: String,
    /// Join descriptor: `table1,table2,field1,field2`.
    #[serde(default)]
    join: String,
    #[serde(default)]
    order: String,
    #[serde(default)]
    format: TableFormat,
    /// Anything other than `no` (case-insensitive) turns the select into a
    /// COUNT(*).
    #[serde(default = "default_count")]
    count: String,
}

fn default_count() -> String {
    "no".to_string()
}

fn default_fields() -> String {
    "*".to_string()
}

/// GET /v1/query/{table}
/// Validate and run a SELECT against one public table.
pub async fn query_handler(
    State(state): State<AppState>,
    Path(table): Path<String>,
    Query(params): Query<QueryParams>,
) -> Result<Response, ApiError> {
    let request = SelectRequest {
        table: table.clone(),
        fields: params.fields,
        where_clause: params.query,
        join: params.join,
        order_by: params.order,
        count: !params.count.eq_ignore_ascii_case("no"),
    };

    let result = state.select_query.execute(request).await?;
    if result.rows.is_empty() {
        return Err(ApiError::not_found("No data found for the query"));
    }

    let options = RenderOptions {
        title: Some(format!("GBADs Public Database Query: {table}")),
        subtitle: Some(result.executed_sql),
        download_name: Some(table),
    };
    Ok(render_table(
        params.format,
        &result.columns,
        &result.rows,
        &options,
    ))
}
