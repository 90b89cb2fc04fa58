use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::format::{render_table, RenderOptions, TableFormat};
use crate::api::router::AppState;
use crate::application::use_cases::PopulationFilter;

#[derive(Deserialize)]
pub struct PopulationParams {
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    iso3: Option<String>,
    #[serde(default)]
    species: Option<String>,
    #[serde(default)]
    format: TableFormat,
}

/// `*` is the public spelling of "no filter".
fn filter_value(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "*")
}

/// GET /v1/population/{source}
/// Livestock population rows from the `oie` or `faostat` source table.
pub async fn population_handler(
    State(state): State<AppState>,
    Path(source): Path<String>,
    Query(params): Query<PopulationParams>,
) -> Result<Response, ApiError> {
    let filter = PopulationFilter {
        year: filter_value(params.year),
        country: filter_value(params.country),
        iso3: filter_value(params.iso3),
        species: filter_value(params.species),
    };

    let result = state.population.execute(&source, filter).await?;
    if result.rows.is_empty() {
        return Err(ApiError::not_found("No data found for the query"));
    }

    let options = RenderOptions {
        title: Some(format!("Livestock population: {source}")),
        subtitle: Some(result.executed_sql),
        download_name: Some(format!("population_{source}")),
    };
    Ok(render_table(
        params.format,
        &result.columns,
        &result.rows,
        &options,
    ))
}
