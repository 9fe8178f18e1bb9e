//! Server configuration for the grid endpoint.
//!
//! Configuration comes from command line arguments with environment variable
//! fallbacks, or is built programmatically.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TABULA_SERVER_PORT` | 8080 | Server port |
//! | `TABULA_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `TABULA_LOG_LEVEL` | info | Log level |
//! | `TABULA_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `TABULA_ENABLE_CORS` | true | Enable CORS |
//! | `TABULA_CORS_ORIGINS` | * | Allowed origins |
//! | `TABULA_CORS_METHODS` | GET,POST,OPTIONS | Allowed methods |
//! | `TABULA_CORS_HEADERS` | Content-Type,Accept,X-Requested-With | Allowed headers |
//! | `TABULA_DEFAULT_PAGE_SIZE` | 10 | Rows returned when `length` is missing |
//! | `TABULA_MAX_PAGE_SIZE` | 1000 | Upper bound for `length` |
//! | `TABULA_GRIDS_FILE` | grids.json | Grid definitions |
//! | `TABULA_SOLR_URL` | http://localhost:8983/solr | Solr base URL |
//! | `TABULA_SOLR_COLLECTION` | - | Solr collection |
//! | `TABULA_SOLR_TIMEOUT_MS` | 30000 | Solr request timeout (milliseconds) |
//! | `TABULA_SOLR_MAX_ROWS` | 10000 | Rows requested for unlimited pages |
//!
//! # Example
//!
//! ```rust
//! use tabula_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     solr_collection: Some("people".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Server configuration for the grid endpoint.
#[derive(Debug, Clone, Parser)]
#[command(name = "tabula")]
#[command(about = "DataTables server-side processing backed by Solr")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "TABULA_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "TABULA_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "TABULA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "TABULA_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "TABULA_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "TABULA_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "TABULA_CORS_METHODS", default_value = "GET,POST,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "TABULA_CORS_HEADERS",
        default_value = "Content-Type,Accept,X-Requested-With"
    )]
    pub cors_headers: String,

    /// Rows per page when the request has no `length`.
    #[arg(long, env = "TABULA_DEFAULT_PAGE_SIZE", default_value = "10")]
    pub default_page_size: u32,

    /// Maximum rows per page.
    #[arg(long, env = "TABULA_MAX_PAGE_SIZE", default_value = "1000")]
    pub max_page_size: u32,

    /// JSON file holding the grid definitions.
    #[arg(long, env = "TABULA_GRIDS_FILE", default_value = "grids.json")]
    pub grids_file: PathBuf,

    /// Solr base URL, including the context path.
    #[arg(long, env = "TABULA_SOLR_URL", default_value = "http://localhost:8983/solr")]
    pub solr_url: String,

    /// Solr collection queried by every grid.
    #[arg(long, env = "TABULA_SOLR_COLLECTION")]
    pub solr_collection: Option<String>,

    /// Solr request timeout in milliseconds.
    #[arg(long, env = "TABULA_SOLR_TIMEOUT_MS", default_value = "30000")]
    pub solr_timeout_ms: u64,

    /// Rows requested from Solr when a page has no limit.
    #[arg(long, env = "TABULA_SOLR_MAX_ROWS", default_value = "10000")]
    pub solr_max_rows: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept,X-Requested-With".to_string(),
            default_page_size: 10,
            max_page_size: 1000,
            grids_file: PathBuf::from("grids.json"),
            solr_url: "http://localhost:8983/solr".to_string(),
            solr_collection: None,
            solr_timeout_ms: 30000,
            solr_max_rows: 10000,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// Falls back to defaults when the environment cannot be parsed.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if self.solr_timeout_ms == 0 {
            errors.push("Solr timeout cannot be 0".to_string());
        }

        if self
            .solr_collection
            .as_deref()
            .is_none_or(|c| c.trim().is_empty())
        {
            errors.push("Solr collection must be set (TABULA_SOLR_COLLECTION)".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0 and disables CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            default_page_size: 10,
            max_page_size: 100,
            solr_collection: Some("test".to_string()),
            ..Default::default()
        }
    }
}
