//! Column definitions.
//!
//! A [`Column`] names a stored field of the search engine's documents and
//! declares how the field takes part in a grid request: whether it joins the
//! global search, whether it may be sorted on, which [`Preset`] it displays
//! as, and which per-column filter widget feeds it.
//!
//! The query layer only reads columns through the [`SearchColumn`]
//! capability trait, so grids built on another column type can reuse the
//! formatter, filter builder and assembler unchanged.
//!
//! # Example
//!
//! ```
//! use tabula_grid::column::{Column, Preset, SearchColumn};
//!
//! let active = Column::new("active").with_preset(Preset::Bool);
//! assert_eq!(active.select_filter("Yes"), Some("active:1"));
//!
//! let tags = Column::new("tags").with_preset(Preset::Array);
//! assert!(!tags.is_sortable());
//! ```

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Display/semantic type declared for a column.
///
/// The preset decides whether a column takes part in the global search; see
/// [`Preset::global_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    /// Plain text.
    #[default]
    None,
    /// Boolean stored as `1`/`0`.
    Bool,
    /// Multi-valued field.
    Array,
    /// Numeric identifier.
    Id,
    /// Plain number.
    Number,
    /// Percentage.
    Percent,
    /// Monetary amount.
    Money,
    /// Calendar date.
    Date,
    /// Date with time of day.
    DateTime,
    /// Text truncated for display.
    Trim,
    /// HTML text stripped and truncated for display.
    TrimHtml,
}

/// How a column takes part in the global search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalSearch {
    /// Always OR'd into the global search.
    Always,
    /// Only when the whole search string is numeric.
    NumericOnly,
    /// Never; the column is reachable through its own filter only.
    Never,
}

impl Preset {
    /// Returns the global search policy for this preset.
    pub fn global_search(self) -> GlobalSearch {
        match self {
            Preset::None | Preset::Array | Preset::Trim | Preset::TrimHtml => GlobalSearch::Always,
            Preset::Id | Preset::Number | Preset::Percent | Preset::Money => {
                GlobalSearch::NumericOnly
            }
            Preset::Bool | Preset::Date | Preset::DateTime => GlobalSearch::Never,
        }
    }

    /// Returns the preset name as written in grid definitions.
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::None => "none",
            Preset::Bool => "bool",
            Preset::Array => "array",
            Preset::Id => "id",
            Preset::Number => "number",
            Preset::Percent => "percent",
            Preset::Money => "money",
            Preset::Date => "date",
            Preset::DateTime => "dateTime",
            Preset::Trim => "trim",
            Preset::TrimHtml => "trimHtml",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a select-menu filter: a display label and the engine clause
/// it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Label shown in the select menu and sent back as the filter value.
    pub label: String,
    /// Engine clause emitted verbatim when the label is selected.
    pub query: String,
}

impl SelectOption {
    /// Creates a select option.
    pub fn new(label: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            query: query.into(),
        }
    }
}

/// Date-range filter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeFilter {
    /// Time zone the user's date input is expressed in.
    pub time_zone: Tz,
}

impl DateRangeFilter {
    /// Creates a date-range filter for the given time zone.
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }
}

impl Default for DateRangeFilter {
    fn default() -> Self {
        Self { time_zone: Tz::UTC }
    }
}

/// What the query layer needs to know about a column.
pub trait SearchColumn {
    /// The engine field name.
    fn name(&self) -> &str;

    /// Whether the column joins the global search.
    fn is_searchable(&self) -> bool;

    /// Whether sort instructions on the column are honored.
    fn is_sortable(&self) -> bool;

    /// The column's display preset.
    fn preset(&self) -> Preset;

    /// Whether the column filters through a select menu.
    fn has_select_filter(&self) -> bool;

    /// Returns the clause for a select-menu label, if the label exists.
    fn select_filter(&self, label: &str) -> Option<&str>;

    /// Returns the date-range filter configuration, if any.
    fn date_range_filter(&self) -> Option<&DateRangeFilter>;
}

/// A grid column backed by a search engine field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ColumnDefinition")]
pub struct Column {
    name: String,
    searchable: bool,
    sortable: bool,
    preset: Preset,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    filter_select: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_date_range: Option<DateRangeFilter>,
}

impl Column {
    /// Creates a searchable, sortable column without a preset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            searchable: true,
            sortable: true,
            preset: Preset::None,
            filter_select: Vec::new(),
            filter_date_range: None,
        }
    }

    /// Sets the preset and applies its side effects.
    ///
    /// `Bool` installs a `Yes`/`No` select filter matching `1`/`0`; `Array`
    /// makes the column non-sortable.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        match preset {
            Preset::Bool => {
                self.filter_select = vec![
                    SelectOption::new("Yes", format!("{}:1", self.name)),
                    SelectOption::new("No", format!("{}:0", self.name)),
                ];
            }
            Preset::Array => self.sortable = false,
            _ => {}
        }
        self.preset = preset;
        self
    }

    /// Sets whether the column joins the global search.
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Sets whether the column can be sorted on.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Replaces the select-menu filter.
    pub fn with_filter_select<I, L, Q>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (L, Q)>,
        L: Into<String>,
        Q: Into<String>,
    {
        self.filter_select = options
            .into_iter()
            .map(|(label, query)| SelectOption::new(label, query))
            .collect();
        self
    }

    /// Filters the column by date range, interpreting input in `time_zone`.
    pub fn with_filter_date_range(mut self, time_zone: Tz) -> Self {
        self.filter_date_range = Some(DateRangeFilter::new(time_zone));
        self
    }

    /// Returns the select-menu options in display order.
    pub fn select_options(&self) -> &[SelectOption] {
        &self.filter_select
    }
}

impl SearchColumn for Column {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_searchable(&self) -> bool {
        self.searchable
    }

    fn is_sortable(&self) -> bool {
        self.sortable
    }

    fn preset(&self) -> Preset {
        self.preset
    }

    fn has_select_filter(&self) -> bool {
        !self.filter_select.is_empty()
    }

    fn select_filter(&self, label: &str) -> Option<&str> {
        self.filter_select
            .iter()
            .find(|option| option.label == label)
            .map(|option| option.query.as_str())
    }

    fn date_range_filter(&self) -> Option<&DateRangeFilter> {
        self.filter_date_range.as_ref()
    }
}

/// Serialized form of a column.
///
/// Explicit flags win over preset defaults, so a definition can mark an
/// `array` column sortable or replace the `bool` select options.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnDefinition {
    name: String,
    #[serde(default)]
    searchable: Option<bool>,
    #[serde(default)]
    sortable: Option<bool>,
    #[serde(default)]
    preset: Preset,
    #[serde(default)]
    filter_select: Option<Vec<SelectOption>>,
    #[serde(default)]
    filter_date_range: Option<DateRangeFilter>,
}

impl From<ColumnDefinition> for Column {
    fn from(def: ColumnDefinition) -> Self {
        let mut column = Column::new(def.name).with_preset(def.preset);
        if let Some(searchable) = def.searchable {
            column.searchable = searchable;
        }
        if let Some(sortable) = def.sortable {
            column.sortable = sortable;
        }
        if let Some(options) = def.filter_select {
            column.filter_select = options;
        }
        column.filter_date_range = def.filter_date_range;
        column
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_column_defaults() {
        let column = Column::new("name");
        assert_eq!(column.name(), "name");
        assert!(column.is_searchable());
        assert!(column.is_sortable());
        assert_eq!(column.preset(), Preset::None);
        assert!(!column.has_select_filter());
        assert!(column.date_range_filter().is_none());
    }

    #[test]
    fn test_bool_preset_installs_select_filter() {
        let column = Column::new("active").with_preset(Preset::Bool);
        assert!(column.has_select_filter());
        assert_eq!(column.select_filter("Yes"), Some("active:1"));
        assert_eq!(column.select_filter("No"), Some("active:0"));
        assert_eq!(column.select_filter("Maybe"), None);
    }

    #[test]
    fn test_array_preset_disables_sorting() {
        let column = Column::new("tags").with_preset(Preset::Array);
        assert!(!column.is_sortable());

        // Explicitly re-enabled afterwards
        let column = Column::new("tags").with_preset(Preset::Array).sortable(true);
        assert!(column.is_sortable());
    }

    #[test]
    fn test_global_search_policy() {
        assert_eq!(Preset::None.global_search(), GlobalSearch::Always);
        assert_eq!(Preset::TrimHtml.global_search(), GlobalSearch::Always);
        assert_eq!(Preset::Money.global_search(), GlobalSearch::NumericOnly);
        assert_eq!(Preset::Id.global_search(), GlobalSearch::NumericOnly);
        assert_eq!(Preset::Bool.global_search(), GlobalSearch::Never);
        assert_eq!(Preset::DateTime.global_search(), GlobalSearch::Never);
    }

    #[test]
    fn test_deserialize_applies_preset_defaults() {
        let column: Column = serde_json::from_value(json!({
            "name": "active",
            "preset": "bool",
            "searchable": false
        }))
        .unwrap();
        assert_eq!(column.preset(), Preset::Bool);
        assert!(!column.is_searchable());
        assert_eq!(column.select_filter("Yes"), Some("active:1"));

        let column: Column = serde_json::from_value(json!({
            "name": "tags",
            "preset": "array"
        }))
        .unwrap();
        assert!(!column.is_sortable());
        assert!(column.is_searchable());
    }

    #[test]
    fn test_deserialize_date_range_filter() {
        let column: Column = serde_json::from_value(json!({
            "name": "created",
            "preset": "dateTime",
            "filterDateRange": { "timeZone": "Australia/Sydney" }
        }))
        .unwrap();
        assert_eq!(column.preset(), Preset::DateTime);
        assert_eq!(
            column.date_range_filter().map(|f| f.time_zone),
            Some(chrono_tz::Australia::Sydney)
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_time_zone() {
        let result = serde_json::from_value::<Column>(json!({
            "name": "created",
            "filterDateRange": { "timeZone": "Mars/Olympus_Mons" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_select_filter_overrides_bool_default() {
        let column: Column = serde_json::from_value(json!({
            "name": "status",
            "preset": "bool",
            "filterSelect": [
                { "label": "Open", "query": "status:open" },
                { "label": "Closed", "query": "status:closed" }
            ]
        }))
        .unwrap();
        assert_eq!(column.select_options().len(), 2);
        assert_eq!(column.select_filter("Open"), Some("status:open"));
        assert_eq!(column.select_filter("Yes"), None);
    }

    #[test]
    fn test_preset_display() {
        assert_eq!(Preset::DateTime.to_string(), "dateTime");
        assert_eq!(Preset::TrimHtml.to_string(), "trimHtml");
    }
}
