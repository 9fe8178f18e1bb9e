//! Search engine capability.

use async_trait::async_trait;

use crate::error::GridResult;
use crate::types::{ResultSet, SelectRequest};

/// Executes select requests against a search engine.
///
/// One call per grid request. Implementations own transport concerns
/// (timeouts, connection reuse); nothing here retries.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Returns a short name for logs and errors.
    fn engine_name(&self) -> &'static str;

    /// Executes `request` and returns the matching documents.
    async fn execute(&self, request: &SelectRequest) -> GridResult<ResultSet>;
}
