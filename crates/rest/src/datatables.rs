//! DataTables server-side processing wire format.
//!
//! Requests arrive as flat key/value pairs with bracketed keys, either in the
//! query string or a form body:
//!
//! ```text
//! draw=3&start=20&length=10&search[value]=smith
//! &columns[2][search][value]=Yes
//! &order[0][column]=1&order[0][dir]=desc
//! ```
//!
//! Keys not listed here (`columns[i][data]`, `search[regex]`, cache busters)
//! are ignored. Column flags come from the grid definition, never from the
//! request.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tabula_grid::types::{
    GridPage, GridRequest, Pagination, SearchState, SortDirection, SortSpec,
};

use crate::error::{RestError, RestResult};

/// A parsed DataTables request.
#[derive(Debug, Clone)]
pub struct DataTablesRequest {
    /// Draw counter echoed back in the response.
    pub draw: Option<u64>,
    /// The grid request.
    pub request: GridRequest,
}

/// Page limits applied while parsing.
#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    /// Rows per page when `length` is missing.
    pub default_page_size: u32,
    /// Upper bound for `length`.
    pub max_page_size: u32,
}

#[derive(Default)]
struct OrderEntry {
    column: Option<usize>,
    dir: Option<String>,
}

/// Parses DataTables parameters into a grid request.
///
/// `length=-1` means no limit. Non-numeric `draw`, `start`, `length` or
/// bracket indices are rejected.
pub fn parse_params(params: &[(String, String)], limits: PageLimits) -> RestResult<DataTablesRequest> {
    let mut draw = None;
    let mut start = 0u64;
    let mut length: Option<i64> = None;
    let mut search = SearchState::new();
    let mut orders: BTreeMap<usize, OrderEntry> = BTreeMap::new();

    for (key, value) in params {
        match key.as_str() {
            "draw" => draw = Some(parse_number::<u64>("draw", value)?),
            "start" => start = parse_number("start", value)?,
            "length" => length = Some(parse_number("length", value)?),
            "search[value]" => search = search.with_global(value.clone()),
            _ => {
                if let Some((index, rest)) = bracketed(key, "columns[")? {
                    if rest == "[search][value]" {
                        search = search.with_column_filter(index, value.clone());
                    }
                } else if let Some((index, rest)) = bracketed(key, "order[")? {
                    let entry = orders.entry(index).or_default();
                    match rest {
                        "[column]" => entry.column = Some(parse_number("order column", value)?),
                        "[dir]" => entry.dir = Some(value.clone()),
                        _ => {}
                    }
                }
            }
        }
    }

    let sort = orders
        .into_values()
        .filter_map(|entry| {
            let direction = SortDirection::parse(entry.dir.as_deref().unwrap_or("asc"));
            entry.column.map(|column| (column, direction))
        })
        .fold(SortSpec::new(), |sort, (column, direction)| {
            sort.then_by(column, direction)
        });

    let pagination = match length {
        Some(-1) => Pagination::unbounded(start),
        Some(n) if n < 0 => {
            return Err(RestError::BadRequest {
                message: format!("length must be -1 or non-negative, got {}", n),
            });
        }
        Some(n) => Pagination::new(
            start,
            u32::try_from(n)
                .unwrap_or(u32::MAX)
                .min(limits.max_page_size),
        ),
        None => Pagination::new(start, limits.default_page_size),
    };

    Ok(DataTablesRequest {
        draw,
        request: GridRequest::new()
            .with_search(search)
            .with_sort(sort)
            .with_pagination(pagination),
    })
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> RestResult<T> {
    value.trim().parse().map_err(|_| RestError::BadRequest {
        message: format!("{} must be a number, got '{}'", name, value),
    })
}

/// Splits `prefix<n>]<rest>` into `n` and `<rest>`.
fn bracketed<'a>(key: &'a str, prefix: &str) -> RestResult<Option<(usize, &'a str)>> {
    let Some(tail) = key.strip_prefix(prefix) else {
        return Ok(None);
    };
    let Some((index, rest)) = tail.split_once(']') else {
        return Ok(None);
    };
    let index = parse_number(key, index)?;
    Ok(Some((index, rest)))
}

/// DataTables response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTablesResponse {
    /// Echoed draw counter (0 when the request had none).
    pub draw: u64,
    /// Total record count.
    pub records_total: u64,
    /// Filtered record count.
    pub records_filtered: u64,
    /// Rows, values in column order.
    pub data: Vec<Vec<Value>>,
}

impl DataTablesResponse {
    /// Builds the response for a grid page.
    pub fn new(draw: Option<u64>, page: GridPage) -> Self {
        Self {
            draw: draw.unwrap_or(0),
            records_total: page.records_total,
            records_filtered: page.records_filtered,
            data: page.rows,
        }
    }
}
