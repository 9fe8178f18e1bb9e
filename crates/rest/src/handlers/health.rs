//! Health check endpoint handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tabula_grid::SearchEngine;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Reports the configured engine and grids; does not contact the engine.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler<E>(State(state): State<AppState<E>>) -> RestResult<Response>
where
    E: SearchEngine + 'static,
{
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "engine": state.engine().engine_name(),
        "grids": state.grids().names(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
