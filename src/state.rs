//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the records backend; clones share it.

use std::sync::Arc;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Records backend base URL without a trailing slash.
    pub backend_url: Option<Arc<str>>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.backend_timeout).build()?;
        Ok(Self { http, backend_url: config.backend_url.as_deref().map(Arc::from) })
    }
}
