//! Engine results and the mapped grid page.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One result document: field values by field name.
pub type Document = Map<String, Value>;

/// The result set returned by a search engine for one select request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Number of documents matching the request (after filters).
    pub num_found: u64,
    /// Returned documents in engine order.
    pub documents: Vec<Document>,
}

impl ResultSet {
    /// Creates a result set.
    pub fn new(num_found: u64, documents: Vec<Document>) -> Self {
        Self {
            num_found,
            documents,
        }
    }

    /// Creates an empty result set.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Rows and counts for one grid page.
///
/// `records_total` and `records_filtered` always carry the same engine
/// match count; the engine is asked once and cannot report an unfiltered
/// total alongside the filtered one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPage {
    /// One row per document, values in column order.
    pub rows: Vec<Vec<Value>>,
    /// Reported total record count.
    pub records_total: u64,
    /// Reported filtered record count.
    pub records_filtered: u64,
}
