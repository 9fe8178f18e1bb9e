//! Grid endpoint routes.

use axum::{Router, routing::get};
use tabula_grid::SearchEngine;

use crate::handlers;
use crate::state::AppState;

/// Creates all routes.
///
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /grids/{grid}` - Grid data (query string)
/// - `POST /grids/{grid}` - Grid data (form body)
pub fn create_routes<E>(state: AppState<E>) -> Router
where
    E: SearchEngine + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<E>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route(
            "/grids/{grid}",
            get(handlers::grid_get_handler::<E>).post(handlers::grid_post_handler::<E>),
        )
        .with_state(state)
}
