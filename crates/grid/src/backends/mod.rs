//! Search engine implementations.
//!
//! Each engine is gated behind a feature flag.
//!
//! | Engine | Feature | Description |
//! |--------|---------|-------------|
//! | Solr | `solr` | HTTP client for the `/select` request handler |

#[cfg(feature = "solr")]
pub mod solr;
