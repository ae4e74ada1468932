//! API utilities for frontend-backend communication
//!
//! Every backend call goes through the helpers below so errors reach the UI
//! in one shape: the backend `detail` text when it sent one, otherwise the
//! transport message.

use crate::shared::config::config;
use contracts::shared::api::{ApiEndpoint, ErrorBody, HttpMethod};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response (backend down, CORS, DNS)
    #[error("{0}")]
    Network(String),
    /// Backend answered with a non-2xx status
    #[error("{}", http_message(.status, .detail))]
    Http { status: u16, detail: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// A browser API refused to build the request
    #[error("Browser error: {0}")]
    Browser(String),
}

impl ApiError {
    pub fn browser(e: wasm_bindgen::JsValue) -> Self {
        ApiError::Browser(format!("{e:?}"))
    }
}

fn http_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(d) => d.clone(),
        None => format!("Request failed with status code {}", status),
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Get the base URL for API requests
///
/// Uses `RAG_API_URL` when it was set at build time, otherwise the current
/// window location with the backend port, e.g. "http://localhost:8000".
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return config().api_url.clone().unwrap_or_default(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    config().resolve_api_base(&protocol, &hostname)
}

pub fn api_url(endpoint: ApiEndpoint) -> String {
    endpoint.url(&api_base())
}

/// Extract the `detail` text from an error response body
pub fn parse_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail_text())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let detail = response
            .text()
            .await
            .ok()
            .and_then(|body| parse_error_detail(&body));
        log::warn!("{} -> HTTP {} ({:?})", response.url(), status, detail);
        return Err(ApiError::Http { status, detail });
    }
    Ok(response.json::<T>().await?)
}

/// Request builder with the endpoint's own method
fn request(endpoint: ApiEndpoint) -> RequestBuilder {
    let url = api_url(endpoint);
    let method = endpoint.method();
    log::debug!("{} {}", method.as_str(), url);
    match method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Delete => Request::delete(&url),
    }
}

pub async fn get_json<T: DeserializeOwned>(endpoint: ApiEndpoint) -> Result<T, ApiError> {
    let response = request(endpoint)
        .header("Accept", "application/json")
        .send()
        .await?;
    read_json(response).await
}

pub async fn post_json<B, T>(endpoint: ApiEndpoint, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = request(endpoint).json(body)?.send().await?;
    read_json(response).await
}

/// POST a multipart form; the browser sets the boundary header itself.
pub async fn post_multipart<T: DeserializeOwned>(
    endpoint: ApiEndpoint,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let response = request(endpoint).body(form)?.send().await?;
    read_json(response).await
}

pub async fn delete_json<T: DeserializeOwned>(endpoint: ApiEndpoint) -> Result<T, ApiError> {
    let response = request(endpoint)
        .header("Accept", "application/json")
        .send()
        .await?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_prefers_detail() {
        let e = ApiError::Http {
            status: 500,
            detail: Some("Error generating response: timeout".to_string()),
        };
        assert_eq!(e.to_string(), "Error generating response: timeout");
    }

    #[test]
    fn test_http_error_without_detail() {
        let e = ApiError::Http {
            status: 502,
            detail: None,
        };
        assert_eq!(e.to_string(), "Request failed with status code 502");
    }

    #[test]
    fn test_network_and_decode_messages() {
        assert_eq!(
            ApiError::Network("Failed to fetch".to_string()).to_string(),
            "Failed to fetch"
        );
        assert_eq!(
            ApiError::Decode("missing field `response`".to_string()).to_string(),
            "Failed to parse response: missing field `response`"
        );
    }

    #[test]
    fn test_parse_error_detail() {
        assert_eq!(
            parse_error_detail(r#"{"detail":"Error getting stats: disk full"}"#).as_deref(),
            Some("Error getting stats: disk full")
        );
        assert_eq!(parse_error_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(parse_error_detail(""), None);
    }
}
