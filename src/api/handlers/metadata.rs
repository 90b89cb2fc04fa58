use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::errors::ApiError;
use crate::api::router::AppState;
use crate::application::dto::{DatasetCore, DatasetMetadata};

/// GET /v1/metadata/datasets
pub async fn datasets_handler(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let names = state.metadata.dataset_names().await?;
    Ok(Json(json!({ "datasets": names })))
}

/// GET /v1/metadata/species
pub async fn species_handler(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let names = state.metadata.species_names().await?;
    Ok(Json(json!({ "species": names })))
}

/// GET /v1/metadata/datasets/{name}
pub async fn dataset_metadata_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DatasetMetadata>, ApiError> {
    let metadata = state.metadata.dataset_metadata(&name).await?;
    Ok(Json(metadata))
}

#[derive(Deserialize)]
pub struct SpeciesSearch {
    species: String,
}

/// GET /v1/metadata/search/species
pub async fn search_species_handler(
    State(state): State<AppState>,
    Query(params): Query<SpeciesSearch>,
) -> Result<Json<Vec<DatasetCore>>, ApiError> {
    let datasets = state.metadata.search_species(&params.species).await?;
    Ok(Json(datasets))
}

#[derive(Deserialize)]
pub struct CountrySearch {
    country: String,
}

/// GET /v1/metadata/search/country
pub async fn search_country_handler(
    State(state): State<AppState>,
    Query(params): Query<CountrySearch>,
) -> Result<Json<Vec<DatasetCore>>, ApiError> {
    let datasets = state.metadata.search_country(&params.country).await?;
    Ok(Json(datasets))
}
