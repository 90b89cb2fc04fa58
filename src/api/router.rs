use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers::{
    approve_comment_handler, dataset_metadata_handler, datasets_handler, delete_file_handler,
    deny_comment_handler, download_file_handler, health_handler, list_fields_handler,
    list_tables_handler, population_handler, query_handler, readiness_handler, root_handler,
    search_country_handler, search_species_handler, species_handler, upload_file_handler,
};
use crate::api::middleware::auth::auth_middleware;
use crate::application::ports::SqlGateway;
use crate::application::use_cases::{
    ApproveCommentUseCase, DeleteFileUseCase, DenyCommentUseCase, DownloadFileUseCase,
    ListTableFieldsUseCase, ListTablesUseCase, MetadataQueries, PopulationQueryUseCase,
    SelectQueryUseCase, UploadFileUseCase,
};

/// Everything the handlers need, wired once at startup and shared by Arc.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn SqlGateway>,
    pub list_tables: Arc<ListTablesUseCase>,
    pub list_fields: Arc<ListTableFieldsUseCase>,
    pub select_query: Arc<SelectQueryUseCase>,
    pub population: Arc<PopulationQueryUseCase>,
    pub upload_file: Arc<UploadFileUseCase>,
    pub download_file: Arc<DownloadFileUseCase>,
    pub delete_file: Arc<DeleteFileUseCase>,
    pub approve_comment: Arc<ApproveCommentUseCase>,
    pub deny_comment: Arc<DenyCommentUseCase>,
    pub metadata: Arc<MetadataQueries>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let file_routes = Router::new()
        .route(
            "/v1/files",
            post(upload_file_handler)
                .get(download_file_handler)
                .delete(delete_file_handler),
        )
        .route_layer(middleware::from_fn(auth_middleware));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/health/ready", get(readiness_handler))
        .route("/v1/tables", get(list_tables_handler))
        .route("/v1/tables/{table}/fields", get(list_fields_handler))
        .route("/v1/query/{table}", get(query_handler))
        .route("/v1/population/{source}", get(population_handler))
        .route("/v1/comments/{id}/approve", post(approve_comment_handler))
        .route("/v1/comments/{id}/deny", post(deny_comment_handler))
        .route("/v1/metadata/datasets", get(datasets_handler))
        .route("/v1/metadata/datasets/{name}", get(dataset_metadata_handler))
        .route("/v1/metadata/species", get(species_handler))
        .route("/v1/metadata/search/species", get(search_species_handler))
        .route("/v1/metadata/search/country", get(search_country_handler))
        .merge(file_routes)
        .layer(cors)
        .with_state(state)
}
