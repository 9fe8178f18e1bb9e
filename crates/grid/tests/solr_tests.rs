//! Solr engine tests against an in-process fake `/select` handler.

#![cfg(feature = "solr")]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Form, Json, Router};
use serde_json::json;

use tabula_grid::backends::solr::{SolrConfig, SolrEngine};
use tabula_grid::column::{Column, Preset};
use tabula_grid::engine::SearchEngine;
use tabula_grid::error::{EngineError, GridError};
use tabula_grid::grid::DataGrid;
use tabula_grid::types::{GridRequest, Pagination, SearchState, SelectRequest};

type Received = Arc<Mutex<Vec<Vec<(String, String)>>>>;

async fn select(
    State(received): State<Received>,
    Form(params): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    received.lock().unwrap().push(params);
    Json(json!({
        "responseHeader": {"status": 0, "QTime": 1},
        "response": {
            "numFound": 2,
            "start": 0,
            "docs": [
                {"name": "Ann", "age": 42},
                {"name": "Bob", "age": 7}
            ]
        }
    }))
}

async fn broken() -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "responseHeader": {"status": 400},
            "error": {"msg": "undefined field nope", "code": 400}
        })),
    )
}

async fn garbage() -> impl IntoResponse {
    "<html>not solr</html>"
}

/// Starts the fake Solr server and returns its base URL.
async fn start_fake_solr() -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/solr/people/select", post(select))
        .route("/solr/broken/select", post(broken))
        .route("/solr/garbage/select", post(garbage))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/solr", addr), received)
}

fn engine(base_url: &str, collection: &str) -> SolrEngine {
    SolrEngine::new(SolrConfig {
        base_url: base_url.to_string(),
        collection: collection.to_string(),
        max_rows: 250,
        ..Default::default()
    })
    .unwrap()
}

fn values<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    params
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

#[tokio::test]
async fn test_grid_request_round_trip() {
    let (base_url, received) = start_fake_solr().await;
    let engine = engine(&base_url, "people");

    let mut grid = DataGrid::new("people");
    grid.add_column(Column::new("name"))
        .add_column(Column::new("age").with_preset(Preset::Number));
    grid.add_filter_query("tenant:%1%", &["acme"]).unwrap();

    let request = GridRequest::new()
        .with_search(SearchState::new().with_global("42").with_column_filter(1, "40 to 50"))
        .with_pagination(Pagination::new(10, 5));

    let page = grid.process(&engine, &request).await.unwrap();

    assert_eq!(page.records_total, 2);
    assert_eq!(page.rows[0], vec![json!("Ann"), json!(42)]);

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let params = &received[0];
    assert_eq!(values(params, "q"), vec!["name:42 || age:42"]);
    assert_eq!(values(params, "fq"), vec!["age:[40 TO 50]", "tenant:acme"]);
    assert_eq!(values(params, "fl"), vec!["name,age"]);
    assert!(values(params, "sort").is_empty());
    assert_eq!(values(params, "start"), vec!["10"]);
    assert_eq!(values(params, "rows"), vec!["5"]);
    assert_eq!(values(params, "wt"), vec!["json"]);
}

#[tokio::test]
async fn test_unlimited_request_uses_max_rows() {
    let (base_url, received) = start_fake_solr().await;
    let engine = engine(&base_url, "people");

    let request = SelectRequest::new(vec!["name".to_string()]);
    let result = engine.execute(&request).await.unwrap();
    assert_eq!(result.num_found, 2);

    let received = received.lock().unwrap();
    assert_eq!(values(&received[0], "q"), vec!["*:*"]);
    assert_eq!(values(&received[0], "rows"), vec!["250"]);
}

#[tokio::test]
async fn test_solr_error_becomes_query_failed() {
    let (base_url, _) = start_fake_solr().await;
    let engine = engine(&base_url, "broken");

    let err = engine
        .execute(&SelectRequest::new(vec!["nope".to_string()]))
        .await
        .unwrap_err();

    match err {
        GridError::Engine(EngineError::QueryFailed {
            engine_name,
            status,
            message,
        }) => {
            assert_eq!(engine_name, "solr");
            assert_eq!(status, Some(400));
            assert_eq!(message, "undefined field nope");
        }
        other => panic!("Expected QueryFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_body_becomes_serialization_error() {
    let (base_url, _) = start_fake_solr().await;
    let engine = engine(&base_url, "garbage");

    let err = engine
        .execute(&SelectRequest::new(vec!["name".to_string()]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GridError::Engine(EngineError::Serialization { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_solr_becomes_connection_failed() {
    let engine = engine("http://127.0.0.1:1/solr", "people");

    let err = engine
        .execute(&SelectRequest::new(vec!["name".to_string()]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GridError::Engine(EngineError::ConnectionFailed { .. })
    ));
}
