//! Full-router tests over in-memory port implementations.
//!
//! Each test builds the real axum router with stub backends, sends one
//! request with `tower::ServiceExt::oneshot`, and asserts on status and
//! body. No database, object store, or graph is required.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bytes::Bytes;
use tower::ServiceExt;

use gbads_api::api::{create_router, AppState};
use gbads_api::application::ports::{
    DatabaseError, GraphError, MetadataGraph, ObjectStore, ResultSet, SqlGateway, StoreError,
};
use gbads_api::application::use_cases::{
    ApproveCommentUseCase, DeleteFileUseCase, DenyCommentUseCase, DownloadFileUseCase,
    ListTableFieldsUseCase, ListTablesUseCase, MetadataQueries, PopulationQueryUseCase,
    SelectQueryUseCase, UploadFileUseCase,
};
use gbads_api::domain::catalog::ColumnDef;
use gbads_api::domain::comment::CommentRecord;
use gbads_api::dto::{DatasetCore, Distribution, License};

/// In-memory relational backend: a fixed catalog plus canned rows for any
/// executed statement. Records every statement and inserted comment.
#[derive(Default)]
struct StubGateway {
    tables: Vec<String>,
    fields: HashMap<String, Vec<ColumnDef>>,
    rows: Vec<Vec<String>>,
    columns: Vec<String>,
    executed: Mutex<Vec<String>>,
    comments: Mutex<Vec<CommentRecord>>,
}

#[async_trait]
impl SqlGateway for StubGateway {
    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        Ok(self.tables.clone())
    }

    async fn list_table_fields(&self, table: &str) -> Result<Vec<ColumnDef>, DatabaseError> {
        Ok(self.fields.get(table).cloned().unwrap_or_default())
    }

    async fn execute(&self, sql: &str) -> Result<ResultSet, DatabaseError> {
        self.executed.lock().unwrap().push(sql.to_string());
        Ok(ResultSet {
            columns: self.columns.clone(),
            rows: self.rows.clone(),
        })
    }

    async fn insert_comment(&self, comment: &CommentRecord) -> Result<(), DatabaseError> {
        self.comments.lock().unwrap().push(comment.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

/// In-memory object store keyed by `bucket/key`.
#[derive(Default)]
struct StubStore {
    objects: Mutex<HashMap<String, Bytes>>,
}

impl StubStore {
    fn with_object(bucket: &str, key: &str, body: &[u8]) -> Self {
        let store = Self::default();
        store
            .objects
            .lock()
            .unwrap()
            .insert(format!("{bucket}/{key}"), Bytes::copy_from_slice(body));
        store
    }
}

#[async_trait]
impl ObjectStore for StubStore {
    async fn put(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), StoreError> {
        self.objects
            .lock()
            .unwrap()
            .insert(format!("{bucket}/{key}"), body);
        Ok(())
    }

    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, StoreError> {
        self.objects
            .lock()
            .unwrap()
            .get(&format!("{bucket}/{key}"))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), StoreError> {
        self.objects.lock().unwrap().remove(&format!("{bucket}/{key}"));
        Ok(())
    }

    async fn copy(
        &self,
        bucket: &str,
        source_key: &str,
        dest_key: &str,
    ) -> Result<(), StoreError> {
        let mut objects = self.objects.lock().unwrap();
        let body = objects
            .get(&format!("{bucket}/{source_key}"))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                bucket: bucket.to_string(),
                key: source_key.to_string(),
            })?;
        objects.insert(format!("{bucket}/{dest_key}"), body);
        Ok(())
    }
}

/// Graph stub with one dataset and one species category.
struct StubGraph;

fn sample_dataset() -> DatasetCore {
    DatasetCore {
        id: "d1".to_string(),
        name: "faostat population".to_string(),
        date_published: "2020-01-01".to_string(),
        dataset_time_interval: "1961/2019".to_string(),
        citation: "FAO".to_string(),
        description: "Livestock population".to_string(),
    }
}

#[async_trait]
impl MetadataGraph for StubGraph {
    async fn dataset_names(&self) -> Result<Vec<String>, GraphError> {
        Ok(vec!["faostat population".to_string()])
    }

    async fn species_names(&self) -> Result<Vec<String>, GraphError> {
        Ok(vec!["Cattle".to_string(), "Chickens".to_string()])
    }

    async fn dataset_core(&self, name: &str) -> Result<Option<DatasetCore>, GraphError> {
        Ok((name == "faostat population").then(sample_dataset))
    }

    async fn dataset_distribution(&self, _name: &str) -> Result<Option<Distribution>, GraphError> {
        Ok(None)
    }

    async fn dataset_publisher(&self, _name: &str) -> Result<Option<String>, GraphError> {
        Ok(Some("FAO".to_string()))
    }

    async fn dataset_license(&self, _name: &str) -> Result<Option<License>, GraphError> {
        Ok(None)
    }

    async fn dataset_provider(&self, _name: &str) -> Result<Option<String>, GraphError> {
        Ok(None)
    }

    async fn dataset_contact_point(&self, _name: &str) -> Result<Option<String>, GraphError> {
        Ok(None)
    }

    async fn datasets_for_species(&self, category: &str) -> Result<Vec<DatasetCore>, GraphError> {
        if category.eq_ignore_ascii_case("cattle") {
            Ok(vec![sample_dataset()])
        } else {
            Ok(Vec::new())
        }
    }

    async fn datasets_for_country(&self, _country: &str) -> Result<Vec<DatasetCore>, GraphError> {
        Ok(vec![sample_dataset()])
    }
}

fn population_gateway() -> StubGateway {
    StubGateway {
        tables: vec![
            "livestock_countries_population_faostat".to_string(),
            "livestock_national_population_oie".to_string(),
        ],
        fields: HashMap::from([(
            "livestock_countries_population_faostat".to_string(),
            vec![
                ColumnDef::new("iso3", "text"),
                ColumnDef::new("country", "text"),
                ColumnDef::new("year", "integer"),
                ColumnDef::new("species", "text"),
                ColumnDef::new("population", "bigint"),
            ],
        )]),
        columns: vec!["country".to_string(), "year".to_string()],
        rows: vec![vec!["Ethiopia".to_string(), "2019".to_string()]],
        ..Default::default()
    }
}

fn build_router(gateway: Arc<StubGateway>, store: Arc<StubStore>) -> Router {
    let gateway_port: Arc<dyn SqlGateway> = gateway;
    let store_port: Arc<dyn ObjectStore> = store;
    let graph: Arc<dyn MetadataGraph> = Arc::new(StubGraph);
    let select_query = Arc::new(SelectQueryUseCase::new(Arc::clone(&gateway_port)));

    let state = AppState {
        gateway: Arc::clone(&gateway_port),
        list_tables: Arc::new(ListTablesUseCase::new(Arc::clone(&gateway_port))),
        list_fields: Arc::new(ListTableFieldsUseCase::new(Arc::clone(&gateway_port))),
        select_query: Arc::clone(&select_query),
        population: Arc::new(PopulationQueryUseCase::new(select_query)),
        upload_file: Arc::new(UploadFileUseCase::new(Arc::clone(&store_port))),
        download_file: Arc::new(DownloadFileUseCase::new(Arc::clone(&store_port))),
        delete_file: Arc::new(DeleteFileUseCase::new(Arc::clone(&store_port))),
        approve_comment: Arc::new(ApproveCommentUseCase::new(
            Arc::clone(&store_port),
            Arc::clone(&gateway_port),
            "comments".to_string(),
        )),
        deny_comment: Arc::new(DenyCommentUseCase::new(
            Arc::clone(&store_port),
            "comments".to_string(),
        )),
        metadata: Arc::new(MetadataQueries::new(graph)),
    };
    create_router(state)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn tables_are_comma_joined_text() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app.oneshot(get("/v1/tables")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        "livestock_countries_population_faostat,livestock_national_population_oie"
    );
}

#[tokio::test]
async fn fields_text_lists_names_only() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app
        .oneshot(get("/v1/tables/livestock_countries_population_faostat/fields"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "iso3,country,year,species,population");
}

#[tokio::test]
async fn fields_of_unknown_table_is_404() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app.oneshot(get("/v1/tables/no_such/fields")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn query_returns_text_table_and_runs_expected_sql() {
    let gateway = Arc::new(population_gateway());
    let app = build_router(Arc::clone(&gateway), Arc::new(StubStore::default()));

    let response = app
        .oneshot(get(
            "/v1/query/livestock_countries_population_faostat?fields=country,year&query=year=2019",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "country,year\nEthiopia,2019");

    let executed = gateway.executed.lock().unwrap();
    assert_eq!(
        executed.as_slice(),
        [
            "SELECT country,year FROM livestock_countries_population_faostat WHERE year=2019"
        ]
    );
}

#[tokio::test]
async fn query_against_unknown_table_is_400() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app
        .oneshot(get("/v1/query/no_such_table?fields=country"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("no_such_table"));
}

#[tokio::test]
async fn query_with_unknown_field_is_400() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app
        .oneshot(get(
            "/v1/query/livestock_countries_population_faostat?fields=nope",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn query_with_no_rows_is_404() {
    let mut gateway = population_gateway();
    gateway.rows = Vec::new();
    let app = build_router(Arc::new(gateway), Arc::new(StubStore::default()));

    let response = app
        .oneshot(get(
            "/v1/query/livestock_countries_population_faostat?fields=country",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("No data found"));
}

#[tokio::test]
async fn query_csv_sets_attachment_disposition() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app
        .oneshot(get(
            "/v1/query/livestock_countries_population_faostat?fields=country,year&format=file",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=livestock_countries_population_faostat.csv"
    );
}

#[tokio::test]
async fn query_count_builds_count_statement() {
    let gateway = Arc::new(population_gateway());
    let app = build_router(Arc::clone(&gateway), Arc::new(StubStore::default()));

    let response = app
        .oneshot(get(
            "/v1/query/livestock_countries_population_faostat?fields=country&count=yes",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let executed = gateway.executed.lock().unwrap();
    assert_eq!(
        executed.as_slice(),
        ["SELECT COUNT(*) FROM livestock_countries_population_faostat"]
    );
}

#[tokio::test]
async fn population_filters_compose_into_where_clause() {
    let gateway = Arc::new(population_gateway());
    let app = build_router(Arc::clone(&gateway), Arc::new(StubStore::default()));

    let response = app
        .oneshot(get(
            "/v1/population/faostat?year=2019&country=Ethiopia&species=*",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let executed = gateway.executed.lock().unwrap();
    assert_eq!(
        executed.as_slice(),
        [
            "SELECT iso3,country,year,species,population \
             FROM livestock_countries_population_faostat \
             WHERE year=2019 AND country='Ethiopia'"
        ]
    );
}

#[tokio::test]
async fn population_with_unknown_source_is_400() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app.oneshot(get("/v1/population/eurostat")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn file_endpoints_require_a_token() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app
        .oneshot(get("/v1/files?bucket=b&key=k"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn comment_moderation_requires_a_token() {
    let store = Arc::new(StubStore::with_object(
        "comments",
        "underreview/c1",
        br#"{"created":"2024-01-01T00:00:00","dashboard":"d","table":"t","subject":"s","message":"m","isPublic":true}"#,
    ));
    let app = build_router(Arc::new(population_gateway()), store);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/v1/comments/c1/approve")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dataset_metadata_is_served_as_json() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app
        .oneshot(get("/v1/metadata/datasets/faostat%20population"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["dataset"]["name"], "faostat population");
    assert_eq!(body["publisher"], "FAO");
    assert_eq!(body["license"], serde_json::Value::Null);
}

#[tokio::test]
async fn unknown_dataset_metadata_is_404() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app
        .oneshot(get("/v1/metadata/datasets/nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn species_search_filters_by_category() {
    let app = build_router(Arc::new(population_gateway()), Arc::new(StubStore::default()));

    let response = app
        .clone()
        .oneshot(get("/v1/metadata/search/species?species=cattle"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);

    let response = app
        .oneshot(get("/v1/metadata/search/species?species=fish"))
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(body.as_array().unwrap().is_empty());
}
