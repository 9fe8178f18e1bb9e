//! Application state for the grid endpoint.
//!
//! Handlers share the search engine, the grid registry and the server
//! configuration. All three are read-only after startup.

use std::sync::Arc;

use tabula_grid::SearchEngine;

use crate::config::ServerConfig;
use crate::registry::GridRegistry;

/// Shared application state.
///
/// # Type Parameters
///
/// * `E` - The search engine type (must implement [`SearchEngine`])
pub struct AppState<E> {
    engine: Arc<E>,
    grids: Arc<GridRegistry>,
    config: Arc<ServerConfig>,
}

// Manually implement Clone since E is wrapped in Arc and doesn't need to be Clone
impl<E> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            grids: Arc::clone(&self.grids),
            config: Arc::clone(&self.config),
        }
    }
}

impl<E: SearchEngine> AppState<E> {
    /// Creates a new AppState.
    pub fn new(engine: Arc<E>, grids: GridRegistry, config: ServerConfig) -> Self {
        Self {
            engine,
            grids: Arc::new(grids),
            config: Arc::new(config),
        }
    }

    /// Returns the search engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns the grid registry.
    pub fn grids(&self) -> &GridRegistry {
        &self.grids
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the page size used when a request has no `length`.
    pub fn default_page_size(&self) -> u32 {
        self.config.default_page_size
    }

    /// Returns the maximum page size.
    pub fn max_page_size(&self) -> u32 {
        self.config.max_page_size
    }
}
