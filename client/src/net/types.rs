//! Wire types for the records REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::state::search::{OrderBy, Pagination};

/// A server-supplied field-value mapping displayed as one list row.
pub type Record = Map<String, Value>;

/// Field holding a record's row identifier.
pub const RECORD_ID_FIELD: &str = "id";

/// Row identifier of `record`, if it has a usable one.
///
/// String ids are used verbatim and numeric ids in their decimal form; any
/// other shape (missing, empty, nested) makes the row unselectable.
pub fn record_id(record: &Record) -> Option<String> {
    match record.get(RECORD_ID_FIELD)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Render one cell for display. Strings print bare; `null` prints blank.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Body of `POST /search`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchRequest {
    pub search: Map<String, Value>,
    pub pagination: Pagination,
    #[serde(rename = "orderBy")]
    pub order_by: Map<String, Value>,
}

impl SearchRequest {
    /// `orderBy` is sent as `{ field: direction }`, or `{}` when unordered.
    pub fn new(search: Map<String, Value>, pagination: Pagination, order_by: Option<&OrderBy>) -> Self {
        let mut order = Map::new();
        if let Some(o) = order_by {
            order.insert(o.field_name.clone(), Value::String(o.direction.as_str().to_owned()));
        }
        Self { search, pagination, order_by: order }
    }
}
