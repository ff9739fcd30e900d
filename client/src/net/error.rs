//! HTTP failure normalization.
//!
//! ERROR HANDLING
//! ==============
//! Every API call fails with an [`HttpError`]. Views never show the raw
//! error; they show [`HttpError::user_message`], which prefers a message the
//! backend put in its JSON body and otherwise falls back to a status-specific
//! sentence.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body was not what the endpoint promises.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl HttpError {
    /// Message suitable for an alert banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Status { status: 0, .. } => {
                "Network error: the server could not be reached".to_owned()
            }
            Self::Status { status, body } => body_message(body).unwrap_or_else(|| status_message(*status)),
            Self::Decode(_) => "Unexpected response from server".to_owned(),
            Self::Unavailable => "Search is not available yet".to_owned(),
        }
    }
}

/// `message` or `error` string from a JSON error body.
fn body_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

fn status_message(status: u16) -> String {
    match status {
        400 => "Bad request".to_owned(),
        401 => "Not authorized".to_owned(),
        403 => "Forbidden".to_owned(),
        404 => "Not found".to_owned(),
        500 => "Internal server error".to_owned(),
        _ => format!("Request failed with status {status}"),
    }
}
