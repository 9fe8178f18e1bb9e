//! Grid state to Solr query translation.
//!
//! ```text
//! global search ──► formatter ─┐
//! column filters ─► filter ────┼─► assembler ──► SelectRequest ──► engine
//! sort, paging, raw filters ───┘                                      │
//!                                  GridPage ◄── mapper ◄── ResultSet ◄┘
//! ```

pub mod assembler;
pub mod filter;
pub mod formatter;
pub mod mapper;
pub mod syntax;

pub use assembler::{assemble, build_global_query, is_numeric};
pub use filter::build_column_filter;
pub use formatter::{ClassifiedValue, SearchForm, classify};
pub use mapper::map_results;
