//! URL query-string helpers.
//!
//! The page mirrors search, pagination, ordering, and column state into the
//! query string so links can be shared and bookmarked. Keys are emitted in
//! sorted order to keep generated URLs stable.

#[cfg(test)]
#[path = "url_params_test.rs"]
mod url_params_test;

use std::collections::BTreeMap;

use crate::config::{COLUMN_PARAMETER_NAME, SEARCH_QUERY_PARAMETER_NAME};
use crate::state::search::{OrderBy, Pagination, SortDirection};

/// Decoded query-string parameters.
pub type UrlParams = BTreeMap<String, String>;

pub const CURRENT_PAGE_KEY: &str = "currentPage";
pub const PAGE_SIZE_KEY: &str = "pageSize";
pub const ORDER_FIELD_KEY: &str = "ordFieldName";
pub const ORDER_DIRECTION_KEY: &str = "ordDirection";

/// Parse a location search string. The leading `?` is optional; a repeated
/// key keeps its last value.
pub fn parse(search: &str) -> UrlParams {
    let raw = search.strip_prefix('?').unwrap_or(search);
    serde_urlencoded::from_str::<Vec<(String, String)>>(raw)
        .unwrap_or_default()
        .into_iter()
        .collect()
}

/// Encode parameters as `a=1&b=2`, without a leading `?`.
pub fn stringify(params: &UrlParams) -> String {
    serde_urlencoded::to_string(params).unwrap_or_default()
}

/// Write pagination keys into `params`.
pub fn merge_pagination(params: &mut UrlParams, pagination: &Pagination) {
    params.insert(CURRENT_PAGE_KEY.to_owned(), pagination.current_page.to_string());
    params.insert(PAGE_SIZE_KEY.to_owned(), pagination.page_size.to_string());
}

/// Write order-by keys into `params`, or drop them when unordered.
pub fn merge_order_by(params: &mut UrlParams, order_by: Option<&OrderBy>) {
    match order_by {
        Some(order) => {
            params.insert(ORDER_FIELD_KEY.to_owned(), order.field_name.clone());
            params.insert(ORDER_DIRECTION_KEY.to_owned(), order.direction.as_str().to_owned());
        }
        None => {
            params.remove(ORDER_FIELD_KEY);
            params.remove(ORDER_DIRECTION_KEY);
        }
    }
}

/// Typed view of the parameters the page reads at mount time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitialQuery {
    pub search_query: Option<String>,
    pub current_page: Option<String>,
    pub page_size: Option<String>,
    pub order_by: Option<OrderBy>,
    pub columns: Option<u64>,
}

impl InitialQuery {
    /// Pick the known keys out of `params`. Unparseable column masks and
    /// order directions are treated as absent.
    pub fn from_params(params: &UrlParams) -> Self {
        let order_by = match (params.get(ORDER_FIELD_KEY), params.get(ORDER_DIRECTION_KEY)) {
            (Some(field), direction) if !field.is_empty() => Some(OrderBy {
                field_name: field.clone(),
                direction: direction.and_then(|d| SortDirection::parse(d)).unwrap_or_default(),
            }),
            _ => None,
        };
        Self {
            search_query: params.get(SEARCH_QUERY_PARAMETER_NAME).filter(|q| !q.is_empty()).cloned(),
            current_page: params.get(CURRENT_PAGE_KEY).cloned(),
            page_size: params.get(PAGE_SIZE_KEY).cloned(),
            order_by,
            columns: params.get(COLUMN_PARAMETER_NAME).and_then(|c| c.parse().ok()),
        }
    }
}
