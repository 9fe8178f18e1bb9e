//! Tabula grid server
//!
//! Serves DataTables server-side processing requests for the grids defined
//! in a JSON file, answered by a Solr collection.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tabula_rest::{GridRegistry, ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Loads grid definitions from `path`.
fn load_grids(path: &Path) -> anyhow::Result<GridRegistry> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read grid definitions from {}", path.display()))?;
    let grids = GridRegistry::from_json(&json)
        .with_context(|| format!("Invalid grid definitions in {}", path.display()))?;

    info!(file = %path.display(), grids = ?grids.names(), "Loaded grid definitions");
    Ok(grids)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        solr = %config.solr_url,
        "Starting Tabula grid server"
    );

    let grids = load_grids(&config.grids_file)?;
    start_solr(config, grids).await
}

/// Starts the server with the Solr engine.
#[cfg(feature = "solr")]
async fn start_solr(config: ServerConfig, grids: GridRegistry) -> anyhow::Result<()> {
    use tabula_grid::backends::solr::{SolrConfig, SolrEngine};

    let solr_config = SolrConfig {
        base_url: config.solr_url.clone(),
        collection: config.solr_collection.clone().unwrap_or_default(),
        request_timeout_ms: config.solr_timeout_ms,
        max_rows: config.solr_max_rows,
    };

    let engine = SolrEngine::new(solr_config).context("Failed to create Solr engine")?;

    let app = create_app_with_config(Arc::new(engine), grids, config.clone());
    serve(app, &config).await
}

/// Fallback when the solr feature is not enabled.
#[cfg(not(feature = "solr"))]
async fn start_solr(_config: ServerConfig, _grids: GridRegistry) -> anyhow::Result<()> {
    anyhow::bail!(
        "The Solr engine requires the 'solr' feature. \
         Build with: cargo build -p tabula-server --features solr"
    )
}
