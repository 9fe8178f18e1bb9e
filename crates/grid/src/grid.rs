//! Data grids.
//!
//! A [`DataGrid`] owns a column list and the raw filter clauses registered
//! on it, and answers grid requests against a [`SearchEngine`]: assemble one
//! select request, execute it once, map the result.
//!
//! # Example
//!
//! ```
//! use tabula_grid::column::{Column, Preset};
//! use tabula_grid::grid::DataGrid;
//! use tabula_grid::types::{GridRequest, SearchState};
//!
//! let mut grid = DataGrid::new("people");
//! grid.add_column(Column::new("name"))
//!     .add_column(Column::new("age").with_preset(Preset::Number));
//! grid.add_filter_query("tenant:%1%", &["acme"]).unwrap();
//!
//! let request = GridRequest::new().with_search(SearchState::new().with_global("42"));
//! let select = grid.build_request(&request);
//! assert_eq!(select.query.as_deref(), Some("name:42 || age:42"));
//! assert_eq!(select.filters[0].query, "tenant:acme");
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::column::{Column, SearchColumn};
use crate::engine::SearchEngine;
use crate::error::{GridError, GridResult};
use crate::query::{assemble, map_results};
use crate::types::{GridPage, GridRequest, RawFilter, SelectRequest};

/// A grid bound to search engine fields.
#[derive(Debug, Clone)]
pub struct DataGrid {
    name: String,
    columns: Vec<Column>,
    filter_queries: Vec<RawFilter>,
}

impl DataGrid {
    /// Creates an empty grid.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            filter_queries: Vec::new(),
        }
    }

    /// Returns the grid name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a column.
    pub fn add_column(&mut self, column: Column) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Inserts a column at `index`, shifting later columns right.
    ///
    /// An index past the end appends.
    pub fn insert_column(&mut self, index: usize, column: Column) -> &mut Self {
        let index = index.min(self.columns.len());
        self.columns.insert(index, column);
        self
    }

    /// Registers a filter clause applied to every later request.
    ///
    /// Placeholders in `query` are bound immediately; an unbound placeholder
    /// is an error.
    pub fn add_filter_query<S: AsRef<str>>(&mut self, query: &str, bindings: &[S]) -> GridResult<()> {
        self.filter_queries.push(RawFilter::new(query, bindings)?);
        Ok(())
    }

    /// Returns the columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by field name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Returns the registered raw filters.
    pub fn filter_queries(&self) -> &[RawFilter] {
        &self.filter_queries
    }

    /// Builds the select request for `request` without executing it.
    pub fn build_request(&self, request: &GridRequest) -> SelectRequest {
        assemble(
            &self.columns,
            &request.search,
            &request.sort,
            &request.pagination,
            &self.filter_queries,
        )
    }

    /// Answers `request` using `engine`.
    ///
    /// Engine failures are returned as-is; nothing is retried.
    pub async fn process<E>(&self, engine: &E, request: &GridRequest) -> GridResult<GridPage>
    where
        E: SearchEngine + ?Sized,
    {
        let select = self.build_request(request);

        let result = engine.execute(&select).await.inspect_err(|e| {
            warn!(grid = %self.name, engine = engine.engine_name(), error = %e, "Search failed");
        })?;

        debug!(
            grid = %self.name,
            num_found = result.num_found,
            returned = result.documents.len(),
            "Search completed"
        );

        Ok(map_results(&result, &self.columns))
    }

    /// Builds a grid from its serialized definition.
    ///
    /// Column names must be non-empty and unique.
    pub fn from_definition(definition: GridDefinition) -> GridResult<Self> {
        if definition.name.trim().is_empty() {
            return Err(GridError::InvalidDefinition {
                message: "grid name cannot be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for column in &definition.columns {
            if column.name().trim().is_empty() {
                return Err(GridError::InvalidDefinition {
                    message: format!("grid '{}' has a column without a name", definition.name),
                });
            }
            if !seen.insert(column.name()) {
                return Err(GridError::InvalidDefinition {
                    message: format!(
                        "grid '{}' defines column '{}' more than once",
                        definition.name,
                        column.name()
                    ),
                });
            }
        }

        let mut grid = DataGrid::new(definition.name);
        grid.columns = definition.columns;
        for filter in &definition.filter_queries {
            grid.add_filter_query(&filter.query, &filter.bindings)?;
        }
        Ok(grid)
    }
}

/// Serialized grid definition.
///
/// ```json
/// {
///   "name": "people",
///   "columns": [
///     { "name": "name" },
///     { "name": "age", "preset": "number" },
///     { "name": "active", "preset": "bool", "searchable": false },
///     { "name": "created", "preset": "dateTime",
///       "filterDateRange": { "timeZone": "Europe/London" } }
///   ],
///   "filterQueries": [ { "query": "tenant:%1%", "bindings": ["acme"] } ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDefinition {
    /// Grid name, used to route requests.
    pub name: String,
    /// Columns in display order.
    pub columns: Vec<Column>,
    /// Raw filter clauses applied to every request.
    #[serde(default)]
    pub filter_queries: Vec<FilterQueryDefinition>,
}

/// Serialized raw filter clause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterQueryDefinition {
    /// Clause text with optional placeholders.
    pub query: String,
    /// Placeholder values, 1-based.
    #[serde(default)]
    pub bindings: Vec<String>,
}
