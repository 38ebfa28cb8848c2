//! API utilities for frontend-backend communication
//!
//! Base URL construction plus response helpers that turn non-2xx answers
//! into [`ApiError`] with the backend's own message.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::app_config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the config when set, otherwise the current
/// window host with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let config = app_config();
    if let Some(base) = &config.api.base_url {
        return base.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.api.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/assembly/tasks");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

pub fn serialize_error(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(format!("Failed to serialize request: {}", e))
}

/// Pass a successful response through; otherwise read the body for a message.
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_ok(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(serialize_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

/// POST without a request body (state transitions such as "resolve").
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(serialize_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(network_error)?;
    ensure_ok(response).await.map(|_| ())
}
