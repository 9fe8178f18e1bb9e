//! Grid data handler.
//!
//! Answers DataTables server-side processing requests:
//! - `GET [base]/grids/[grid]?params`
//! - `POST [base]/grids/[grid]` (form-encoded parameters)

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tabula_grid::SearchEngine;
use tracing::debug;

use crate::datatables::{DataTablesResponse, PageLimits, parse_params};
use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for GET grid requests.
///
/// # Response
///
/// - `200 OK` - `{"draw", "recordsTotal", "recordsFiltered", "data"}`
/// - `400 Bad Request` - malformed parameters
/// - `404 Not Found` - unknown grid
/// - `502 Bad Gateway` - search engine failure
pub async fn grid_get_handler<E>(
    State(state): State<AppState<E>>,
    Path(grid): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> RestResult<Response>
where
    E: SearchEngine + 'static,
{
    debug!(grid = %grid, params = params.len(), "Processing grid GET request");
    execute_grid(&state, &grid, &params).await
}

/// Handler for POST grid requests.
///
/// Same contract as [`grid_get_handler`], with parameters in a form body.
pub async fn grid_post_handler<E>(
    State(state): State<AppState<E>>,
    Path(grid): Path<String>,
    Form(params): Form<Vec<(String, String)>>,
) -> RestResult<Response>
where
    E: SearchEngine + 'static,
{
    debug!(grid = %grid, params = params.len(), "Processing grid POST request");
    execute_grid(&state, &grid, &params).await
}

async fn execute_grid<E>(
    state: &AppState<E>,
    grid_name: &str,
    params: &[(String, String)],
) -> RestResult<Response>
where
    E: SearchEngine + 'static,
{
    let grid = state
        .grids()
        .get(grid_name)
        .ok_or_else(|| RestError::GridNotFound {
            grid: grid_name.to_string(),
        })?;

    let parsed = parse_params(
        params,
        PageLimits {
            default_page_size: state.default_page_size(),
            max_page_size: state.max_page_size(),
        },
    )?;

    let page = grid
        .process(state.engine(), &parsed.request)
        .await
        .map_err(|e| RestError::from(e).with_draw(parsed.draw))?;

    debug!(
        grid = %grid_name,
        draw = ?parsed.draw,
        rows = page.rows.len(),
        total = page.records_total,
        "Grid request completed"
    );

    let response = DataTablesResponse::new(parsed.draw, page);
    Ok((StatusCode::OK, Json(response)).into_response())
}
