//! Grid request state: search text, per-column filters, sort and paging.
//!
//! These types are produced per request by the input layer (for example the
//! DataTables wire parser in `tabula-rest`) and are read-only to the query
//! layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Global search text plus per-column filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    global: Option<String>,
    column_filters: BTreeMap<usize, String>,
}

impl SearchState {
    /// Creates an empty search state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global search text.
    pub fn with_global(mut self, text: impl Into<String>) -> Self {
        self.global = Some(text.into());
        self
    }

    /// Sets the filter input for the column at `index`.
    pub fn with_column_filter(mut self, index: usize, value: impl Into<String>) -> Self {
        self.column_filters.insert(index, value.into());
        self
    }

    /// Returns the global search text when it is non-blank.
    pub fn global(&self) -> Option<&str> {
        self.global
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// Returns the non-blank per-column filter inputs ordered by column index.
    pub fn column_filters(&self) -> impl Iterator<Item = (usize, &str)> {
        self.column_filters
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(index, value)| (*index, value.as_str()))
    }

    /// Returns true if there is neither global search text nor a column filter.
    pub fn is_empty(&self) -> bool {
        self.global().is_none() && self.column_filters().next().is_none()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

impl SortDirection {
    /// Parses a DataTables direction (`asc`/`desc`); anything else is ascending.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    /// Returns the engine keyword for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// One sort instruction against a column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    /// Index into the grid's column list.
    pub column: usize,
    /// The sort direction.
    pub direction: SortDirection,
}

/// Ordered sort instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    entries: Vec<SortEntry>,
}

impl SortSpec {
    /// Creates an empty sort spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sort instruction.
    pub fn then_by(mut self, column: usize, direction: SortDirection) -> Self {
        self.entries.push(SortEntry { column, direction });
        self
    }

    /// Returns the sort entries in caller order.
    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    /// Returns true if there are no sort entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Offset/limit paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    start: u64,
    length: Option<u32>,
}

impl Pagination {
    /// Creates pagination returning `length` rows from offset `start`.
    pub fn new(start: u64, length: u32) -> Self {
        Self {
            start,
            length: Some(length),
        }
    }

    /// Creates pagination without a row limit.
    pub fn unbounded(start: u64) -> Self {
        Self {
            start,
            length: None,
        }
    }

    /// Returns the offset.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Returns the page size, or `None` for no limit.
    pub fn length(&self) -> Option<u32> {
        self.length
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

/// Everything a grid needs to answer one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRequest {
    /// Search text and column filters.
    pub search: SearchState,
    /// Sort instructions.
    pub sort: SortSpec,
    /// Paging.
    pub pagination: Pagination,
}

impl GridRequest {
    /// Creates a request with no search, no sort and the default page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search state.
    pub fn with_search(mut self, search: SearchState) -> Self {
        self.search = search;
        self
    }

    /// Sets the sort spec.
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the pagination.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_inputs_are_ignored() {
        let search = SearchState::new()
            .with_global("   ")
            .with_column_filter(0, "")
            .with_column_filter(1, " \t")
            .with_column_filter(2, "abc");

        assert_eq!(search.global(), None);
        let filters: Vec<_> = search.column_filters().collect();
        assert_eq!(filters, vec![(2, "abc")]);
        assert!(!search.is_empty());
        assert!(SearchState::new().with_global(" ").is_empty());
    }

    #[test]
    fn test_column_filters_are_ordered_by_index() {
        let search = SearchState::new()
            .with_column_filter(3, "c")
            .with_column_filter(0, "a");
        let indices: Vec<_> = search.column_filters().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 3]);
    }

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!(SortDirection::parse("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::parse("DESC"), SortDirection::Descending);
        assert_eq!(SortDirection::parse("asc"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse("sideways"), SortDirection::Ascending);
    }

    #[test]
    fn test_pagination() {
        let page = Pagination::new(20, 10);
        assert_eq!(page.start(), 20);
        assert_eq!(page.length(), Some(10));
        assert_eq!(Pagination::unbounded(5).length(), None);
    }
}
