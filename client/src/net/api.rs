//! REST API helpers for the records backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`HttpError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! Every call is a single request with no retry; callers turn the error into
//! an alert through [`HttpError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::HttpError;
use super::types::{Record, SearchRequest};

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_endpoint(base: &str, encoded_id: &str) -> String {
    endpoint(base, &format!("delete/{encoded_id}"))
}

#[cfg(feature = "hydrate")]
fn api_endpoint(path: &str) -> String {
    endpoint(crate::config::API_URL, path)
}

#[cfg(feature = "hydrate")]
fn network_error(e: gloo_net::Error) -> HttpError {
    HttpError::Network(e.to_string())
}

/// Turn a non-2xx response into [`HttpError::Status`], keeping the body for
/// message extraction.
#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, HttpError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(HttpError::Status { status, body })
}

/// Fetch record field names via `GET /fields`.
///
/// # Errors
///
/// Returns an [`HttpError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a list of strings.
pub async fn fetch_fields() -> Result<Vec<String>, HttpError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_endpoint("fields"))
            .send()
            .await
            .map_err(network_error)?;
        let resp = ensure_ok(resp).await?;
        resp.json::<Vec<String>>().await.map_err(|e| HttpError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(HttpError::Unavailable)
    }
}

/// Run a search via `POST /search`.
///
/// # Errors
///
/// Returns an [`HttpError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a list of records.
pub async fn search_records(request: &SearchRequest) -> Result<Vec<Record>, HttpError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_endpoint("search"))
            .json(request)
            .map_err(|e| HttpError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        let resp = ensure_ok(resp).await?;
        resp.json::<Vec<Record>>().await.map_err(|e| HttpError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(HttpError::Unavailable)
    }
}

/// Delete one record via `DELETE /delete/{id}`.
///
/// # Errors
///
/// Returns an [`HttpError`] if the request fails or the server responds with
/// a non-OK status.
pub async fn delete_record(record_id: &str) -> Result<(), HttpError> {
    #[cfg(feature = "hydrate")]
    {
        let encoded = String::from(js_sys::encode_uri_component(record_id));
        let url = delete_endpoint(crate::config::API_URL, &encoded);
        let resp = gloo_net::http::Request::delete(&url).send().await.map_err(network_error)?;
        ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record_id;
        Err(HttpError::Unavailable)
    }
}

/// Approve records via `POST /approve` with a JSON array of ids.
///
/// # Errors
///
/// Returns an [`HttpError`] if the request fails or the server responds with
/// a non-OK status.
pub async fn approve_records(record_ids: &[String]) -> Result<(), HttpError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_endpoint("approve"))
            .json(&record_ids)
            .map_err(|e| HttpError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record_ids;
        Err(HttpError::Unavailable)
    }
}
