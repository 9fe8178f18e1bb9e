//! Select request assembly.
//!
//! Combines the global search (OR across searchable columns), per-column
//! filters (one AND'd filter clause each), registered raw filters, sort and
//! paging into one [`SelectRequest`].

use tracing::debug;

use crate::column::{GlobalSearch, SearchColumn};
use crate::types::{
    FilterClause, Pagination, RawFilter, SearchState, SelectRequest, SortClause, SortSpec,
};

use super::filter::build_column_filter;
use super::formatter::classify;
use super::syntax::with_complex_directive;

/// Builds the select request for one grid request.
///
/// Never fails: inputs that make no sense for a column degrade to a
/// best-effort clause or are skipped. Filter inputs and sort entries naming
/// a column index past the end of `columns` are ignored.
pub fn assemble<C: SearchColumn>(
    columns: &[C],
    search: &SearchState,
    sort: &SortSpec,
    pagination: &Pagination,
    extra_filters: &[RawFilter],
) -> SelectRequest {
    let mut request = SelectRequest::new(columns.iter().map(|c| c.name().to_string()).collect());

    if !search.is_empty() {
        request.query = search
            .global()
            .and_then(|text| build_global_query(columns, text));

        for (index, value) in search.column_filters() {
            if let Some(clause) = columns
                .get(index)
                .and_then(|column| build_column_filter(column, value))
            {
                request.filters.push(clause);
            }
        }
    }

    for (i, filter) in extra_filters.iter().enumerate() {
        request
            .filters
            .push(FilterClause::new(format!("filter_query_{}", i), filter.query()));
    }

    if !sort.is_empty() {
        request.sort = sort
            .entries()
            .iter()
            .filter_map(|entry| {
                let column = columns.get(entry.column)?;
                column.is_sortable().then(|| SortClause {
                    field: column.name().to_string(),
                    direction: entry.direction,
                })
            })
            .collect();
    }

    request.start = pagination.start();
    request.rows = pagination.length();

    debug!(
        query = request.query_or_match_all(),
        filters = request.filters.len(),
        sort = request.sort.len(),
        start = request.start,
        rows = ?request.rows,
        "Assembled select request"
    );

    request
}

/// Builds the main query for global search `text`.
///
/// Returns `None` when no column takes part, which means match-all.
pub fn build_global_query<C: SearchColumn>(columns: &[C], text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let numeric = is_numeric(text);
    let mut complex = false;
    let mut clauses = Vec::new();

    for column in columns.iter().filter(|c| c.is_searchable()) {
        let include = match column.preset().global_search() {
            GlobalSearch::Always => true,
            GlobalSearch::NumericOnly => numeric,
            GlobalSearch::Never => false,
        };
        if !include {
            continue;
        }

        let classified = classify(column.name(), text);
        complex |= classified.is_complex();
        clauses.push(classified.clause);
    }

    if clauses.is_empty() {
        return None;
    }

    Some(with_complex_directive(clauses.join(" || "), complex))
}

/// Returns true if `value` is a number: optional surrounding whitespace, an
/// optional sign, digits with an optional fraction and exponent.
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.bytes().any(|b| b.is_ascii_digit())
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        && trimmed.parse::<f64>().is_ok()
}
