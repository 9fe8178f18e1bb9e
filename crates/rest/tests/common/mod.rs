//! Common test utilities for the grid endpoint.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Value, json};

use tabula_grid::error::{EngineError, GridResult};
use tabula_grid::types::{ResultSet, SelectRequest};
use tabula_grid::SearchEngine;
use tabula_rest::{GridRegistry, ServerConfig};

/// Grid definitions served in tests.
pub const GRIDS_JSON: &str = r#"[
    {
        "name": "people",
        "columns": [
            { "name": "name" },
            { "name": "age", "preset": "number" },
            { "name": "active", "preset": "bool", "searchable": false }
        ],
        "filterQueries": [ { "query": "tenant:%1%", "bindings": ["acme"] } ]
    },
    {
        "name": "events",
        "columns": [
            { "name": "title" },
            { "name": "starts", "preset": "dateTime",
              "filterDateRange": { "timeZone": "America/New_York" } }
        ]
    }
]"#;

/// Search engine fake returning canned documents and recording requests.
pub struct FakeEngine {
    fail: bool,
    requests: Mutex<Vec<SelectRequest>>,
}

impl FakeEngine {
    /// Creates an engine answering with two documents out of 57.
    pub fn healthy() -> Self {
        Self {
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates an engine failing every request.
    pub fn failing() -> Self {
        Self {
            fail: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns the last executed request.
    pub fn last_request(&self) -> SelectRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was executed")
    }

    /// Returns the number of executed requests.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn document(value: Value) -> tabula_grid::types::Document {
    match value {
        Value::Object(map) => map,
        _ => panic!("Expected JSON object"),
    }
}

#[async_trait]
impl SearchEngine for FakeEngine {
    fn engine_name(&self) -> &'static str {
        "fake"
    }

    async fn execute(&self, request: &SelectRequest) -> GridResult<ResultSet> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(EngineError::ConnectionFailed {
                engine_name: "fake".to_string(),
                message: "connection refused".to_string(),
            }
            .into());
        }
        Ok(ResultSet::new(
            57,
            vec![
                document(json!({"name": "Ann", "age": 42, "active": 1, "title": "Launch"})),
                document(json!({"name": "Bob", "active": 0})),
            ],
        ))
    }
}

/// Creates a test server over `engine` serving [`GRIDS_JSON`].
pub fn create_test_server(engine: Arc<FakeEngine>) -> TestServer {
    let grids = GridRegistry::from_json(GRIDS_JSON).expect("Failed to load grids");
    let app = tabula_rest::create_app_with_config(engine, grids, ServerConfig::for_testing());
    TestServer::new(app).expect("Failed to create test server")
}
