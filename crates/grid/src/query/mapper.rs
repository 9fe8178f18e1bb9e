//! Result mapping.
//!
//! Turns engine documents into grid rows ordered by column definition.

use serde_json::Value;

use crate::column::SearchColumn;
use crate::types::{GridPage, ResultSet};

/// Maps a result set onto `columns`.
///
/// Missing fields become `null`. Both record counts are set to the engine's
/// match count for the filtered request.
pub fn map_results<C: SearchColumn>(result: &ResultSet, columns: &[C]) -> GridPage {
    let rows = result
        .documents
        .iter()
        .map(|document| {
            columns
                .iter()
                .map(|column| document.get(column.name()).cloned().unwrap_or(Value::Null))
                .collect()
        })
        .collect();

    GridPage {
        rows,
        records_total: result.num_found,
        records_filtered: result.num_found,
    }
}
