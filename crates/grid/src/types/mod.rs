//! Core types for the grid query layer.
//!
//! - [`GridRequest`], [`SearchState`], [`SortSpec`], [`Pagination`] - what the
//!   user asked for
//! - [`SelectRequest`], [`FilterClause`], [`RawFilter`] - what the engine is
//!   asked
//! - [`ResultSet`], [`GridPage`] - what comes back
//!
//! # Example
//!
//! ```
//! use tabula_grid::types::{GridRequest, Pagination, SearchState, SortDirection, SortSpec};
//!
//! let request = GridRequest::new()
//!     .with_search(SearchState::new().with_global("smith").with_column_filter(2, "Yes"))
//!     .with_sort(SortSpec::new().then_by(0, SortDirection::Descending))
//!     .with_pagination(Pagination::new(0, 25));
//!
//! assert_eq!(request.search.global(), Some("smith"));
//! assert_eq!(request.pagination.length(), Some(25));
//! ```

mod request;
mod result;
mod select;

pub use request::{GridRequest, Pagination, SearchState, SortDirection, SortEntry, SortSpec};
pub use result::{Document, GridPage, ResultSet};
pub use select::{FilterClause, RawFilter, SelectRequest, SortClause};
