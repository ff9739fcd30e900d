//! `/api/*` reverse proxy to the records backend.
//!
//! The browser talks to the records API through this host so the WASM
//! bundle needs no CORS setup on the backend. Method, path, query string,
//! body, and `content-type` pass through unchanged; the upstream status,
//! `content-type`, and body are returned as-is.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, header};
use axum::response::Response;

use crate::error::ProxyError;
use crate::state::AppState;

/// Upstream URL for `path` (without the `/api/` prefix) and raw `query`.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

/// `ANY /api/{*path}`: forward one request to the records backend.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let base = state.backend_url.as_deref().ok_or(ProxyError::BackendNotConfigured)?;
    let url = upstream_url(base, &path, query.as_deref());
    tracing::debug!(%method, %url, "proxying records request");

    let mut request = state.http.request(method, &url);
    for name in [header::CONTENT_TYPE, header::ACCEPT] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    if !status.is_success() {
        tracing::info!(%status, %url, "records backend returned error status");
    }

    let mut response = Response::builder().status(status);
    if let Some(content_type) = content_type {
        response = response.header(header::CONTENT_TYPE, content_type);
    }
    response.body(Body::from(bytes)).map_err(|e| ProxyError::Upstream(e.to_string()))
}
