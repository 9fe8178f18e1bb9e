//! HTTP request handlers.
//!
//! - [`grid`] - DataTables server-side processing for a named grid
//! - [`health`] - Health check endpoints

pub mod grid;
pub mod health;

// Re-export handlers for convenience
pub use grid::{grid_get_handler, grid_post_handler};
pub use health::{health_handler, liveness_handler};
