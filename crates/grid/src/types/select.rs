//! The engine-native select request built by the assembler.

use serde::{Deserialize, Serialize};

use crate::error::GridResult;
use crate::query::syntax;
use crate::types::SortDirection;

/// An independently evaluated filter clause.
///
/// Every filter clause of a request must hold (logical AND); OR only occurs
/// inside a clause's own text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    /// Identifies the clause (column name, or `filter_query_<n>`).
    pub key: String,
    /// Clause text in engine syntax.
    pub query: String,
}

impl FilterClause {
    /// Creates a filter clause.
    pub fn new(key: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            query: query.into(),
        }
    }
}

/// A sort instruction on an engine field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortClause {
    /// Field to sort on.
    pub field: String,
    /// The sort direction.
    pub direction: SortDirection,
}

/// A caller-supplied filter clause applied to every request of a grid.
///
/// Placeholders are resolved once, when the filter is created; see
/// [`syntax::bind_placeholders`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFilter {
    query: String,
}

impl RawFilter {
    /// Creates a raw filter, binding `%N%`, `%TN%`, `%PN%` and `%LN%`
    /// placeholders to `bindings`.
    pub fn new<S: AsRef<str>>(query: &str, bindings: &[S]) -> GridResult<Self> {
        Ok(Self {
            query: syntax::bind_placeholders(query, bindings)?,
        })
    }

    /// Returns the resolved clause text.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// A complete select request ready to be sent to a search engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectRequest {
    /// Requested fields, in column order.
    pub fields: Vec<String>,
    /// Main query; `None` matches every document.
    pub query: Option<String>,
    /// Independent filter clauses.
    pub filters: Vec<FilterClause>,
    /// Sort instructions in priority order.
    pub sort: Vec<SortClause>,
    /// Offset of the first row.
    pub start: u64,
    /// Maximum number of rows; `None` for no limit.
    pub rows: Option<u32>,
}

impl SelectRequest {
    /// Creates a match-all request for the given fields.
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    /// Returns the main query, or the engine's match-all query.
    pub fn query_or_match_all(&self) -> &str {
        self.query.as_deref().unwrap_or(syntax::MATCH_ALL)
    }

    /// Returns the filter clause texts in order.
    pub fn filter_queries(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(|f| f.query.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_all_default() {
        let request = SelectRequest::new(vec!["name".to_string()]);
        assert_eq!(request.query_or_match_all(), "*:*");
        assert!(request.filters.is_empty());
        assert_eq!(request.rows, None);
    }

    #[test]
    fn test_raw_filter_binds_placeholders() {
        let filter = RawFilter::new("tenant:%1% AND owner:%P2%", &["acme corp", "Jo \"JJ\""]).unwrap();
        assert_eq!(filter.query(), r#"tenant:acme\ corp AND owner:"Jo \"JJ\"""#);
    }

    #[test]
    fn test_raw_filter_missing_binding() {
        let result = RawFilter::new("tenant:%2%", &["acme"]);
        assert!(result.is_err());
    }
}
