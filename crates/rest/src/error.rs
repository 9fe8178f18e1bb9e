//! Error types for the grid endpoint.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | BadRequest | 400 |
//! | GridNotFound | 404 |
//! | EngineFailed | 502 |
//! | InternalError | 500 |
//!
//! Every error body is a JSON object with an `error` message. Errors raised
//! after the `draw` counter was read echo it back so the grid can match the
//! failure to its request.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use std::fmt;
use tabula_grid::GridError;

/// The primary error type for REST operations.
#[derive(Debug)]
pub enum RestError {
    /// Malformed request parameters (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// No grid is registered under the requested name (HTTP 404).
    GridNotFound {
        /// The requested grid name.
        grid: String,
    },

    /// The search engine failed (HTTP 502).
    EngineFailed {
        /// Draw counter of the failed request, if known.
        draw: Option<u64>,
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::GridNotFound { grid } => write!(f, "Grid not found: {}", grid),
            RestError::EngineFailed { message, .. } => {
                write!(f, "Search engine failure: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::GridNotFound { .. } => StatusCode::NOT_FOUND,
            RestError::EngineFailed { .. } => StatusCode::BAD_GATEWAY,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Attaches the request's draw counter to an engine failure.
    pub fn with_draw(self, draw: Option<u64>) -> Self {
        match self {
            RestError::EngineFailed { message, .. } => RestError::EngineFailed { draw, message },
            other => other,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut body = Map::new();
        if let RestError::EngineFailed {
            draw: Some(draw), ..
        } = &self
        {
            body.insert("draw".to_string(), Value::from(*draw));
        }
        body.insert("error".to_string(), Value::String(self.to_string()));

        (status, Json(Value::Object(body))).into_response()
    }
}

impl From<GridError> for RestError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::Engine(e) => RestError::EngineFailed {
                draw: None,
                message: e.to_string(),
            },
            other => RestError::InternalError {
                message: other.to_string(),
            },
        }
    }
}

/// Result type for REST operations.
pub type RestResult<T> = Result<T, RestError>;
