//! Tabula Grid
//!
//! Translates the state of an interactive data grid (global search, per-column
//! filters, multi-column sort, paging) into Solr select requests, and maps the
//! returned documents back into grid rows.
//!
//! # Architecture
//!
//! - [`column`] - Column definitions, presets and filter configuration
//! - [`types`] - Grid requests, engine select requests and result types
//! - [`query`] - Value classification, column filters, request assembly and
//!   result mapping
//! - [`engine`] - The [`SearchEngine`] capability
//! - [`grid`] - [`DataGrid`], tying columns, raw filters and an engine together
//! - [`backends`] - Engine implementations (Solr)
//! - [`error`] - Error types
//!
//! # Features
//!
//! - `solr` (default) - HTTP client for Solr's `/select` handler
//!
//! # Quick Start
//!
//! ```
//! use tabula_grid::column::{Column, Preset};
//! use tabula_grid::grid::DataGrid;
//! use tabula_grid::types::{GridRequest, Pagination, SearchState, SortDirection, SortSpec};
//!
//! let mut grid = DataGrid::new("people");
//! grid.add_column(Column::new("name"))
//!     .add_column(Column::new("age").with_preset(Preset::Number))
//!     .add_column(Column::new("active").with_preset(Preset::Bool).searchable(false));
//!
//! let request = GridRequest::new()
//!     .with_search(SearchState::new().with_global("smith").with_column_filter(2, "Yes"))
//!     .with_sort(SortSpec::new().then_by(1, SortDirection::Descending))
//!     .with_pagination(Pagination::new(0, 25));
//!
//! let select = grid.build_request(&request);
//! assert_eq!(select.fields, vec!["name", "age", "active"]);
//! assert_eq!(select.filters[0].query, "active:1");
//! assert_eq!(select.sort[0].field, "age");
//! assert_eq!(select.rows, Some(25));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod column;
pub mod engine;
pub mod error;
pub mod grid;
pub mod query;
pub mod types;

pub use column::{Column, Preset, SearchColumn};
pub use engine::SearchEngine;
pub use error::{EngineError, GridError, GridResult};
pub use grid::{DataGrid, GridDefinition};
pub use types::{GridPage, GridRequest, ResultSet, SelectRequest};

#[cfg(feature = "solr")]
pub use backends::solr::{SolrConfig, SolrEngine};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
