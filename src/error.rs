//! Proxy failures and their HTTP mapping.
//!
//! ERROR HANDLING
//! ==============
//! Errors are answered as `{"message": "..."}` so the browser client shows
//! the same text it would show for a backend-generated error body.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("records backend is not configured")]
    BackendNotConfigured,

    #[error("records backend timed out")]
    Timeout,

    #[error("records backend request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BackendNotConfigured | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, %status, "proxy request failed");
        (status, Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}
