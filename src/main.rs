use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{info, Level};

use gbads_api::{
    api::{create_router, AppState},
    application::{
        ports::{MetadataGraph, ObjectStore, SqlGateway},
        use_cases::{
            ApproveCommentUseCase, DeleteFileUseCase, DenyCommentUseCase, DownloadFileUseCase,
            ListTableFieldsUseCase, ListTablesUseCase, MetadataQueries, PopulationQueryUseCase,
            SelectQueryUseCase, UploadFileUseCase,
        },
    },
    infrastructure::{
        graph::Neo4jMetadataGraph, object_store::S3ObjectStore, persistence::PostgresSqlGateway,
    },
    Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(true)
        .init();

    info!("Starting GBADs data API");

    // Load configuration
    let config = Config::from_env();
    config.validate()?;
    info!("Configuration loaded and validated");

    // Initialize database connection pool
    info!("Connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout_secs))
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            e
        })?;

    // S3 client from the ambient AWS environment (credentials, region)
    let aws_config = aws_config::load_from_env().await;
    let s3_client = aws_sdk_s3::Client::new(&aws_config);

    // Knowledge graph driver
    info!("Connecting to knowledge graph at {}", config.graph_uri);
    let graph =
        Neo4jMetadataGraph::connect(&config.graph_uri, &config.graph_user, &config.graph_password)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to knowledge graph: {}", e);
                e
            })?;

    // Initialize infrastructure layer
    let gateway: Arc<dyn SqlGateway> = Arc::new(PostgresSqlGateway::new(pool));
    let store: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(s3_client));
    let graph: Arc<dyn MetadataGraph> = Arc::new(graph);
    info!("Infrastructure layer initialized");

    // Initialize use cases (application layer)
    let select_query = Arc::new(SelectQueryUseCase::new(Arc::clone(&gateway)));

    let state = AppState {
        gateway: Arc::clone(&gateway),
        list_tables: Arc::new(ListTablesUseCase::new(Arc::clone(&gateway))),
        list_fields: Arc::new(ListTableFieldsUseCase::new(Arc::clone(&gateway))),
        select_query: Arc::clone(&select_query),
        population: Arc::new(PopulationQueryUseCase::new(select_query)),
        upload_file: Arc::new(UploadFileUseCase::new(Arc::clone(&store))),
        download_file: Arc::new(DownloadFileUseCase::new(Arc::clone(&store))),
        delete_file: Arc::new(DeleteFileUseCase::new(Arc::clone(&store))),
        approve_comment: Arc::new(ApproveCommentUseCase::new(
            Arc::clone(&store),
            Arc::clone(&gateway),
            config.comments_bucket.clone(),
        )),
        deny_comment: Arc::new(DenyCommentUseCase::new(
            Arc::clone(&store),
            config.comments_bucket.clone(),
        )),
        metadata: Arc::new(MetadataQueries::new(graph)),
    };
    info!("Application layer initialized");

    // Create router and start server
    let app = create_router(state);
    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
