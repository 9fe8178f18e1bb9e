//! Per-column filter clauses.
//!
//! Resolution order for a column's filter input:
//!
//! 1. select-menu column → the label's clause, verbatim, or no filter when
//!    the input is not one of its labels
//! 2. date-range column and parseable input → UTC range clause
//! 3. anything else → [`formatter::classify`], with the complex phrase
//!    directive when needed
//!
//! The result is always its own filter clause, AND'd with everything else in
//! the request.

use std::sync::LazyLock;

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use regex::Regex;
use tracing::debug;

use crate::column::SearchColumn;
use crate::types::FilterClause;

use super::formatter;
use super::syntax::with_complex_directive;

/// UTC timestamp format understood by Solr date fields.
pub const ENGINE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

static DATE_TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<from>[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}) to (?P<to>[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2})",
    )
    .expect("date time range pattern")
});

static BARE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<date>[0-9]{4}-[0-9]{2}-[0-9]{2})").expect("date pattern"));

/// Which end of a range a local time is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Lower,
    Upper,
}

/// Builds the filter clause for one column's filter input.
///
/// Returns `None` for blank input, and for input on a select-menu column
/// that matches none of its labels.
pub fn build_column_filter<C: SearchColumn + ?Sized>(column: &C, raw: &str) -> Option<FilterClause> {
    if raw.trim().is_empty() {
        return None;
    }

    let name = column.name();

    if column.has_select_filter() {
        let clause = column.select_filter(raw).map(|query| FilterClause::new(name, query));
        if clause.is_none() {
            debug!(column = name, value = raw, "Unknown select label, no filter applied");
        }
        return clause;
    }

    if let Some(range) = column.date_range_filter() {
        if let Some((from, to)) = parse_date_range(raw, range.time_zone) {
            return Some(FilterClause::new(name, date_range_clause(name, from, to)));
        }
        debug!(column = name, value = raw, "Date range input not recognised, filtering as text");
    }

    Some(text_filter(name, raw))
}

/// Builds a free-text filter clause for `field`.
pub fn text_filter(field: &str, raw: &str) -> FilterClause {
    let classified = formatter::classify(field, raw);
    let complex = classified.is_complex();
    FilterClause::new(field, with_complex_directive(classified.clause, complex))
}

/// Renders an inclusive UTC range clause.
pub fn date_range_clause(field: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    format!(
        "{}:[{} TO {}]",
        field,
        from.format(ENGINE_DATE_FORMAT),
        to.format(ENGINE_DATE_FORMAT)
    )
}

/// Parses date-range filter input expressed in `time_zone`.
///
/// Accepts `YYYY-MM-DD HH:MM to YYYY-MM-DD HH:MM` or a bare `YYYY-MM-DD`
/// (the whole day). Bounds are swapped when reversed; the lower bound gets
/// `:00` seconds and the upper bound `:59`. Returns `None` when the input is
/// in neither form or names an impossible date or time.
///
/// Impossible dates such as `2024-13-45` are rejected rather than rolled
/// over to the next valid date the way a lenient parser would.
pub fn parse_date_range(raw: &str, time_zone: Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let (from, to) = if let Some(captures) = DATE_TIME_RANGE.captures(raw) {
        (
            NaiveDateTime::parse_from_str(&captures["from"], "%Y-%m-%d %H:%M").ok()?,
            NaiveDateTime::parse_from_str(&captures["to"], "%Y-%m-%d %H:%M").ok()?,
        )
    } else if let Some(captures) = BARE_DATE.captures(raw) {
        let day = NaiveDate::parse_from_str(&captures["date"], "%Y-%m-%d").ok()?;
        (day.and_hms_opt(0, 0, 0)?, day.and_hms_opt(23, 59, 59)?)
    } else {
        return None;
    };

    let (from, to) = if from > to { (to, from) } else { (from, to) };

    let from = resolve_local(time_zone, from.with_second(0)?, Bound::Lower)?;
    let to = resolve_local(time_zone, to.with_second(59)?, Bound::Upper)?;

    Some((from.with_timezone(&Utc), to.with_timezone(&Utc)))
}

/// Maps a wall-clock time onto an instant in `time_zone`.
///
/// Times repeated by a DST fall-back resolve to the earliest instant for a
/// lower bound and the latest for an upper bound; times skipped by a DST
/// spring-forward move one hour later.
fn resolve_local(time_zone: Tz, local: NaiveDateTime, bound: Bound) -> Option<DateTime<Tz>> {
    match time_zone.from_local_datetime(&local) {
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(earliest, latest) => Some(match bound {
            Bound::Lower => earliest,
            Bound::Upper => latest,
        }),
        LocalResult::None => time_zone
            .from_local_datetime(&(local + TimeDelta::hours(1)))
            .earliest(),
    }
}
