//! Select request to Solr parameter encoding.

use crate::types::SelectRequest;

/// Encodes `request` as `/select` parameters.
///
/// `fq` repeats once per filter clause. `sort` is omitted when the request
/// has no sort clauses. A request without a row limit asks for `max_rows`.
pub fn select_params(request: &SelectRequest, max_rows: u32) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(6 + request.filters.len());

    params.push(("q", request.query_or_match_all().to_string()));

    for filter in &request.filters {
        params.push(("fq", filter.query.clone()));
    }

    params.push(("fl", request.fields.join(",")));

    if !request.sort.is_empty() {
        let sort = request
            .sort
            .iter()
            .map(|s| format!("{} {}", s.field, s.direction.as_str()))
            .collect::<Vec<_>>()
            .join(",");
        params.push(("sort", sort));
    }

    params.push(("start", request.start.to_string()));
    params.push(("rows", request.rows.unwrap_or(max_rows).to_string()));
    params.push(("wt", "json".to_string()));

    params
}
