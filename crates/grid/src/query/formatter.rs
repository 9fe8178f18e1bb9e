//! Search value classification.
//!
//! Turns a raw search string into a clause against one field. Fuzzy,
//! numeric and range input is already valid engine syntax and passes through
//! untouched; anything else is free text and expands into a substring term
//! plus two phrase variants, which in turn requires the complex phrase
//! parser.

use std::sync::LazyLock;

use regex::Regex;

use super::syntax::{collapse_wildcard_runs, escape_phrase, escape_term};

static FUZZY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9]+~[0-9]*$").expect("fuzzy pattern"));

static EXACT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+$").expect("number pattern"));

static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9*.]+\s*TO\s*[0-9*.]+$").expect("range pattern"));

/// Which form a search value was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchForm {
    /// `term~N` edit-distance search.
    Fuzzy,
    /// Digits and dots, matched exactly.
    ExactNumber,
    /// `A TO B` inclusive range.
    Range,
    /// Free text: substring term OR phrase OR wildcard phrase.
    Freeform,
}

/// A search value rewritten as a clause against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedValue {
    /// Clause text in engine syntax.
    pub clause: String,
    /// The form the value was classified as.
    pub form: SearchForm,
}

impl ClassifiedValue {
    /// Whether the clause needs the complex phrase parser.
    pub fn is_complex(&self) -> bool {
        self.form == SearchForm::Freeform
    }
}

/// Classifies `raw` and renders it as a clause against `field`.
///
/// The value is trimmed first; the first matching form wins.
pub fn classify(field: &str, raw: &str) -> ClassifiedValue {
    let value = raw.trim();

    if FUZZY.is_match(value) {
        return ClassifiedValue {
            clause: format!("{}:{}", field, value),
            form: SearchForm::Fuzzy,
        };
    }

    if EXACT_NUMBER.is_match(value) {
        return ClassifiedValue {
            clause: format!("{}:{}", field, value),
            form: SearchForm::ExactNumber,
        };
    }

    if RANGE.is_match(value) {
        return ClassifiedValue {
            clause: format!("{}:[{}]", field, value.to_uppercase()),
            form: SearchForm::Range,
        };
    }

    let term = format!("{}:*{}*", field, escape_term(value));
    let phrase = format!("{}:{}", field, collapse_wildcard_runs(&escape_phrase(value)));
    let wildcard_phrase = format!(
        "{}:{}",
        field,
        collapse_wildcard_runs(&escape_phrase(&format!("*{}*", value)))
    );

    ClassifiedValue {
        clause: [term, phrase, wildcard_phrase].join(" || "),
        form: SearchForm::Freeform,
    }
}
