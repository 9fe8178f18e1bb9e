//! Lucene/Solr query syntax helpers.
//!
//! Escaping for user-supplied terms and phrases, the complex-phrase parser
//! directive, and placeholder binding for caller-supplied filter clauses.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GridError, GridResult};

/// Local-params prefix switching Solr to the order-insensitive complex
/// phrase parser, needed when wildcard phrases are OR'd together.
pub const COMPLEX_PHRASE_DIRECTIVE: &str = "{!complexphrase inOrder=false}";

/// Query matching every document.
pub const MATCH_ALL: &str = "*:*";

static WILDCARD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\*+\s+").expect("wildcard run pattern"));

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)%(L|P|T|)([0-9]+)%").expect("placeholder pattern"));

/// Escapes a term so every query operator in it is matched literally.
///
/// Whitespace is escaped too, so the result stays a single term.
pub fn escape_term(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() * 2);
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '&' | '|' if chars.peek() == Some(&c) => {
                chars.next();
                escaped.push('\\');
                escaped.push(c);
                escaped.push(c);
            }
            ' ' | '+' | '-' | '!' | '(' | ')' | '{' | '}' | '[' | ']' | '^' | '"' | '~' | '*'
            | '?' | ':' | '/' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Quotes a phrase for literal matching.
///
/// Only quotes and backslashes are escaped; wildcards keep their meaning
/// under the complex phrase parser.
pub fn escape_phrase(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + 2);
    escaped.push('"');
    for c in input.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('"');
    escaped
}

/// Collapses every whitespace-surrounded run of `*` into a single space.
pub fn collapse_wildcard_runs(input: &str) -> String {
    WILDCARD_RUN.replace_all(input, " ").into_owned()
}

/// Prefixes the complex-phrase directive when `complex` is set.
pub fn with_complex_directive(clause: String, complex: bool) -> String {
    if complex {
        format!("{}{}", COMPLEX_PHRASE_DIRECTIVE, clause)
    } else {
        clause
    }
}

/// Substitutes 1-based placeholders in `query` with `bindings`.
///
/// | Placeholder | Substitution |
/// |-------------|--------------|
/// | `%1%`, `%T1%` | term-escaped value |
/// | `%P1%` | phrase-escaped value |
/// | `%L1%` | value verbatim |
pub fn bind_placeholders<S: AsRef<str>>(query: &str, bindings: &[S]) -> GridResult<String> {
    let mut bound = String::with_capacity(query.len());
    let mut last = 0;

    for captures in PLACEHOLDER.captures_iter(query) {
        let (Some(whole), Some(mode), Some(number)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };

        let value = number
            .as_str()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| bindings.get(index))
            .ok_or_else(|| GridError::InvalidFilter {
                query: query.to_string(),
                message: format!("no value supplied for placeholder #{}", number.as_str()),
            })?
            .as_ref();

        bound.push_str(&query[last..whole.start()]);
        match mode.as_str().to_ascii_uppercase().as_str() {
            "L" => bound.push_str(value),
            "P" => bound.push_str(&escape_phrase(value)),
            _ => bound.push_str(&escape_term(value)),
        }
        last = whole.end();
    }

    bound.push_str(&query[last..]);
    Ok(bound)
}
