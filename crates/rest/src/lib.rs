//! # tabula-rest - DataTables endpoint for Tabula grids
//!
//! Serves [DataTables server-side processing](https://datatables.net/manual/server-side)
//! requests for grids defined with `tabula-grid`. Each request is parsed
//! into a grid request, answered with one search engine call, and returned
//! in the DataTables response shape.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tabula_grid::{SolrConfig, SolrEngine};
//! use tabula_rest::{GridRegistry, ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = SolrEngine::new(SolrConfig {
//!         collection: "people".to_string(),
//!         ..Default::default()
//!     })?;
//!     let grids = GridRegistry::from_json(&std::fs::read_to_string("grids.json")?)?;
//!
//!     let app = create_app_with_config(Arc::new(engine), grids, ServerConfig::default());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Endpoint | HTTP Method | URL Pattern |
//! |----------|-------------|-------------|
//! | grid data | GET/POST | `/grids/[grid]` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//!
//! ## Error Handling
//!
//! | HTTP Status | Description |
//! |-------------|-------------|
//! | 400 | Malformed DataTables parameters |
//! | 404 | Unknown grid |
//! | 502 | Search engine failure |
//!
//! ## Architecture
//!
//! - [`config`] - Server configuration
//! - [`datatables`] - DataTables wire format
//! - [`error`] - Error types and JSON error bodies
//! - [`handlers`] - HTTP request handlers
//! - [`registry`] - Named grid lookup
//! - [`routing`] - Route configuration
//! - [`state`] - Application state

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod datatables;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use registry::GridRegistry;
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tabula_grid::SearchEngine;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<E>(engine: Arc<E>, grids: GridRegistry) -> Router
where
    E: SearchEngine + 'static,
{
    create_app_with_config(engine, grids, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the routes, request tracing, the request timeout and, when
/// enabled, CORS.
pub fn create_app_with_config<E>(engine: Arc<E>, grids: GridRegistry, config: ServerConfig) -> Router
where
    E: SearchEngine + 'static,
{
    info!(
        engine = engine.engine_name(),
        grids = grids.len(),
        "Creating grid endpoint"
    );

    let state = AppState::new(engine, grids, config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// Call once at startup. `RUST_LOG` overrides `level` when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "tabula_rest={level},tabula_grid={level},tabula={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
