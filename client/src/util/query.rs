//! Search-field syntax.
//!
//! The search input accepts either a JSON object literal or a list of
//! `key:value` / `key=value` pairs separated by `,`, `;` or `&`. Pairs become a
//! JSON object sent as the `search` member of `POST /search`.
//!
//! Values that read as JSON scalars (`42`, `1.5`, `true`, `null`) keep their
//! type, double-quoted values are unquoted (separators inside quotes are
//! literal), and anything else is sent as a string.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde_json::{Map, Value};

/// Reasons the search text could not be turned into a query object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid search query: '{0}' is missing ':' or '='")]
    MissingSeparator(String),

    #[error("Invalid search query: '{0}' has an empty field name")]
    EmptyKey(String),

    #[error("Invalid search query: unterminated quote in '{0}'")]
    UnterminatedQuote(String),

    #[error("Invalid search query: {0}")]
    InvalidJson(String),

    #[error("Invalid search query: JSON input must be an object")]
    NotAnObject,
}

/// Parse the raw search-field text into a query object.
///
/// # Errors
///
/// Returns a [`QueryError`] naming the first fragment that cannot be read.
pub fn parse_query_object(text: &str) -> Result<Map<String, Value>, QueryError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Map::new());
    }
    if text.starts_with('{') {
        return match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(QueryError::NotAnObject),
            Err(e) => Err(QueryError::InvalidJson(e.to_string())),
        };
    }

    let mut out = Map::new();
    for fragment in split_pairs(text)? {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let Some(split_at) = fragment.find([':', '=']) else {
            return Err(QueryError::MissingSeparator(fragment.to_owned()));
        };
        let key = fragment[..split_at].trim();
        if key.is_empty() {
            return Err(QueryError::EmptyKey(fragment.to_owned()));
        }
        let value = parse_value(fragment[split_at + 1..].trim());
        out.insert(key.to_owned(), value);
    }
    Ok(out)
}

fn split_pairs(text: &str) -> Result<Vec<&str>, QueryError> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ',' | ';' | '&' if !in_quotes => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if in_quotes {
        return Err(QueryError::UnterminatedQuote(text[start..].trim().to_owned()));
    }
    parts.push(&text[start..]);
    Ok(parts)
}

fn parse_value(raw: &str) -> Value {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return serde_json::from_str::<String>(raw)
            .map_or_else(|_| Value::String(raw[1..raw.len() - 1].to_owned()), Value::String);
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(v @ (Value::Number(_) | Value::Bool(_) | Value::Null)) => v,
        _ => Value::String(raw.to_owned()),
    }
}
