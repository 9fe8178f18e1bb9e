//! Solr engine configuration and client.

use std::fmt::Debug;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, GridResult};

pub(crate) const ENGINE_NAME: &str = "solr";

/// Configuration for the Solr engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolrConfig {
    /// Solr base URL, including the context path (e.g. `http://localhost:8983/solr`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Collection (or core) queried by every request.
    pub collection: String,

    /// Request timeout in milliseconds (default: 30000).
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Row count sent when a request has no limit (default: 10000).
    #[serde(default = "default_max_rows")]
    pub max_rows: u32,
}

fn default_base_url() -> String {
    "http://localhost:8983/solr".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30000
}

fn default_max_rows() -> u32 {
    10000
}

impl Default for SolrConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: String::new(),
            request_timeout_ms: default_request_timeout_ms(),
            max_rows: default_max_rows(),
        }
    }
}

/// Search engine backed by a Solr collection.
pub struct SolrEngine {
    client: Client,
    config: SolrConfig,
    select_url: Url,
}

impl Debug for SolrEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolrEngine")
            .field("config", &self.config)
            .field("select_url", &self.select_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SolrEngine {
    /// Creates a new Solr engine with the given configuration.
    pub fn new(config: SolrConfig) -> GridResult<Self> {
        let select_url = Self::build_select_url(&config)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| EngineError::ConnectionFailed {
                engine_name: ENGINE_NAME.to_string(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        tracing::info!(url = %select_url, "Solr engine configured");

        Ok(Self {
            client,
            config,
            select_url,
        })
    }

    fn build_select_url(config: &SolrConfig) -> GridResult<Url> {
        let collection = config.collection.trim_matches('/');
        if collection.is_empty() {
            return Err(EngineError::ConnectionFailed {
                engine_name: ENGINE_NAME.to_string(),
                message: "Collection name cannot be empty".to_string(),
            }
            .into());
        }

        let raw = format!(
            "{}/{}/select",
            config.base_url.trim_end_matches('/'),
            collection
        );

        let url = Url::parse(&raw).map_err(|e| EngineError::ConnectionFailed {
            engine_name: ENGINE_NAME.to_string(),
            message: format!("Invalid URL '{}': {}", raw, e),
        })?;

        Ok(url)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &SolrConfig {
        &self.config
    }

    /// Returns the URL select requests are posted to.
    pub fn select_url(&self) -> &Url {
        &self.select_url
    }
}
