//! Common test utilities for grid integration tests.
//!
//! - [`RecordingEngine`] - in-memory engine that records every request
//! - [`people_grid`] - three-column grid used across tests

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use tabula_grid::column::{Column, Preset};
use tabula_grid::engine::SearchEngine;
use tabula_grid::error::{EngineError, GridResult};
use tabula_grid::grid::DataGrid;
use tabula_grid::types::{Document, ResultSet, SelectRequest};

/// Search engine fake returning a canned result and recording requests.
pub struct RecordingEngine {
    result: Option<ResultSet>,
    requests: Mutex<Vec<SelectRequest>>,
}

impl RecordingEngine {
    /// Creates an engine answering every request with `result`.
    pub fn returning(result: ResultSet) -> Self {
        Self {
            result: Some(result),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates an engine failing every request.
    pub fn failing() -> Self {
        Self {
            result: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns the requests executed so far.
    pub fn requests(&self) -> Vec<SelectRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Returns the last executed request.
    pub fn last_request(&self) -> SelectRequest {
        self.requests().pop().expect("no request was executed")
    }
}

#[async_trait]
impl SearchEngine for RecordingEngine {
    fn engine_name(&self) -> &'static str {
        "recording"
    }

    async fn execute(&self, request: &SelectRequest) -> GridResult<ResultSet> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.result {
            Some(result) => Ok(result.clone()),
            None => Err(EngineError::QueryFailed {
                engine_name: "recording".to_string(),
                status: Some(500),
                message: "engine unavailable".to_string(),
            }
            .into()),
        }
    }
}

/// Builds a document from a JSON object literal.
pub fn document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => panic!("Expected JSON object"),
    }
}

/// Grid with `name` (text), `age` (number) and `active` (bool, not searchable).
pub fn people_grid() -> DataGrid {
    let mut grid = DataGrid::new("people");
    grid.add_column(Column::new("name"))
        .add_column(Column::new("age").with_preset(Preset::Number))
        .add_column(
            Column::new("active")
                .with_preset(Preset::Bool)
                .searchable(false),
        );
    grid
}

/// Two people documents with a reported total of 57.
pub fn people_result() -> ResultSet {
    ResultSet::new(
        57,
        vec![
            document(json!({"name": "Ann Smith", "age": 42, "active": 1})),
            document(json!({"name": "Bob Smith", "active": 0})),
        ],
    )
}
