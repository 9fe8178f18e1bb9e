//! Route configuration.

pub mod grid_routes;

pub use grid_routes::create_routes;
