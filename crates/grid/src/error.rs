//! Error types for the grid query layer.
//!
//! Query assembly itself is infallible: malformed search input degrades to a
//! best-effort clause rather than an error. Errors only arise when a grid is
//! defined (bad column set, unbound filter placeholders) or when the search
//! engine is called.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for grid operations.
#[derive(Error, Debug)]
pub enum GridError {
    /// Search engine errors
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A registered raw filter query could not be resolved.
    #[error("invalid filter query '{query}': {message}")]
    InvalidFilter { query: String, message: String },

    /// A grid definition is inconsistent.
    #[error("invalid grid definition: {message}")]
    InvalidDefinition { message: String },
}

/// Errors raised while executing a request against a search engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine could not be reached or the client could not be built.
    #[error("connection failed to {engine_name}: {message}")]
    ConnectionFailed {
        engine_name: String,
        message: String,
    },

    /// The engine rejected or failed to execute the query.
    #[error("query execution failed in {engine_name}: {message}")]
    QueryFailed {
        engine_name: String,
        status: Option<u16>,
        message: String,
    },

    /// The engine response could not be decoded.
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Engine(EngineError::Serialization {
            message: err.to_string(),
        })
    }
}

impl GridError {
    /// Returns true if the error came from the search engine.
    pub fn is_engine_error(&self) -> bool {
        matches!(self, GridError::Engine(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = GridError::from(EngineError::QueryFailed {
            engine_name: "solr".to_string(),
            status: Some(400),
            message: "undefined field foo".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "query execution failed in solr: undefined field foo"
        );
        assert!(err.is_engine_error());
    }

    #[test]
    fn test_every_engine_error_is_an_engine_error() {
        let errors = vec![
            EngineError::ConnectionFailed {
                engine_name: "solr".to_string(),
                message: "connection refused".to_string(),
            },
            EngineError::QueryFailed {
                engine_name: "solr".to_string(),
                status: None,
                message: "HTTP 500".to_string(),
            },
            EngineError::Serialization {
                message: "expected value".to_string(),
            },
        ];

        for err in errors {
            let expected = match &err {
                EngineError::ConnectionFailed { .. } => "connection failed to solr: connection refused",
                EngineError::QueryFailed { .. } => "query execution failed in solr: HTTP 500",
                EngineError::Serialization { .. } => "serialization error: expected value",
            };
            let err = GridError::from(err);
            assert!(err.is_engine_error());
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_serde_error_conversion() {
        let err: GridError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            GridError::Engine(EngineError::Serialization { .. })
        ));
    }

    #[test]
    fn test_invalid_filter_display() {
        let err = GridError::InvalidFilter {
            query: "tenant:%1%".to_string(),
            message: "no value supplied for placeholder #1".to_string(),
        };
        assert!(!err.is_engine_error());
        assert!(err.to_string().contains("tenant:%1%"));
    }
}
