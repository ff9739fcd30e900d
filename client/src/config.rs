//! Compile-time client configuration.
//!
//! The records backend base URL is taken from `SEARCH_API_URL` when the WASM
//! bundle is built and defaults to the host's `/api` proxy.

/// Base URL prepended to every REST endpoint path.
pub const API_URL: &str = match option_env!("SEARCH_API_URL") {
    Some(url) => url,
    None => "/api",
};

/// URL query parameter carrying the visible-column bitmask.
pub const COLUMN_PARAMETER_NAME: &str = "columns";

/// URL query parameter carrying the raw search text.
pub const SEARCH_QUERY_PARAMETER_NAME: &str = "searchQuery";

/// Page size used until the user or the URL picks another.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page sizes offered by the pagination bar.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// How long an alert stays on screen before dismissing itself.
pub const ALERT_TIMEOUT_MS: u32 = 4_000;

/// Upper bound on simultaneously visible alerts.
pub const MAX_ALERTS: usize = 5;
