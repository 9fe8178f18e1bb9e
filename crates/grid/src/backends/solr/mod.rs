//! Solr engine implementation.
//!
//! Select requests are sent to a single collection's `/select` request
//! handler as a form-encoded POST and answered with the JSON response writer.
//!
//! # Request Parameters
//!
//! | Parameter | Source |
//! |-----------|--------|
//! | `q` | Main query, or `*:*` |
//! | `fq` | One per filter clause |
//! | `fl` | Column fields, comma-joined |
//! | `sort` | `field asc\|desc`, comma-joined |
//! | `start`, `rows` | Paging (`rows` falls back to `max_rows`) |
//! | `wt` | Always `json` |
//!
//! # Example
//!
//! ```no_run
//! use tabula_grid::backends::solr::{SolrConfig, SolrEngine};
//!
//! # fn example() -> tabula_grid::GridResult<()> {
//! let config = SolrConfig {
//!     base_url: "http://localhost:8983/solr".to_string(),
//!     collection: "people".to_string(),
//!     ..Default::default()
//! };
//! let engine = SolrEngine::new(config)?;
//! assert_eq!(engine.select_url().as_str(), "http://localhost:8983/solr/people/select");
//! # Ok(())
//! # }
//! ```

mod backend;
mod params;
mod search_impl;

pub use backend::{SolrConfig, SolrEngine};
pub use params::select_params;
pub use search_impl::parse_select_response;
