//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the records backend; `None` disables the `/api` proxy.
    pub backend_url: Option<String>,
    pub backend_timeout: Duration,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SEARCH_BACKEND_URL`: `http(s)://` base URL of the records backend
    /// - `SEARCH_BACKEND_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first variable that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_number("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let timeout_secs =
            parse_number("SEARCH_BACKEND_TIMEOUT_SECS", lookup("SEARCH_BACKEND_TIMEOUT_SECS"), DEFAULT_BACKEND_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "SEARCH_BACKEND_TIMEOUT_SECS",
                value: "0".to_owned(),
                reason: "must be positive".to_owned(),
            });
        }
        let backend_url = parse_backend_url(lookup("SEARCH_BACKEND_URL"))?;
        Ok(Self { port, backend_url, backend_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_number<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: value.to_owned(),
            reason: e.to_string(),
        }),
    }
}

fn parse_backend_url(raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(value) = raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            var: "SEARCH_BACKEND_URL",
            value,
            reason: "expected an http:// or https:// URL".to_owned(),
        });
    }
    Ok(Some(value.trim_end_matches('/').to_owned()))
}
