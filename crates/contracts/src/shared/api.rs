//! REST contract of the indexing/answering backend.
//!
//! The backend is an external service; this module only describes the
//! endpoints the UI calls and the envelope types they share.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Backend endpoints consumed by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEndpoint {
    /// `GET /stats` -> `DatabaseStats`
    Stats,
    /// `POST /chat` -> `ChatResponse`
    Chat,
    /// `POST /upload` (multipart, field `files`) -> `UploadResponse`
    Upload,
    /// `DELETE /clear` -> `ClearResponse`
    Clear,
    /// `GET /health` -> `HealthResponse`
    Health,
}

impl ApiEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ApiEndpoint::Stats => "/stats",
            ApiEndpoint::Chat => "/chat",
            ApiEndpoint::Upload => "/upload",
            ApiEndpoint::Clear => "/clear",
            ApiEndpoint::Health => "/health",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            ApiEndpoint::Stats | ApiEndpoint::Health => HttpMethod::Get,
            ApiEndpoint::Chat | ApiEndpoint::Upload => HttpMethod::Post,
            ApiEndpoint::Clear => HttpMethod::Delete,
        }
    }

    /// Join the endpoint path onto a base URL, tolerating a trailing slash.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// Error body returned by the backend on non-2xx responses.
///
/// `detail` is usually a string, but validation failures carry a list of
/// objects, so it is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorBody {
    /// Human readable detail, `None` when the backend sent nothing useful
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| {
                        item.get("msg")
                            .and_then(Value::as_str)
                            .map(str::to_string)
                            .unwrap_or_else(|| item.to_string())
                    })
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("; "))
                }
            }
            other => Some(other.to_string()),
        }
    }
}

/// Response of `DELETE /clear`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearResponse {
    #[serde(default)]
    pub message: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_base() {
        assert_eq!(
            ApiEndpoint::Stats.url("http://localhost:8000"),
            "http://localhost:8000/stats"
        );
        assert_eq!(
            ApiEndpoint::Clear.url("http://localhost:8000/"),
            "http://localhost:8000/clear"
        );
        assert_eq!(ApiEndpoint::Clear.method(), HttpMethod::Delete);
        assert_eq!(ApiEndpoint::Upload.method().as_str(), "POST");
    }

    #[test]
    fn test_error_body_string_detail() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail":"Unsupported file type: notes.txt. Only PDF and CSV files are allowed."}"#,
        )
        .unwrap();
        assert_eq!(
            body.detail_text().as_deref(),
            Some("Unsupported file type: notes.txt. Only PDF and CSV files are allowed.")
        );
    }

    #[test]
    fn test_error_body_validation_list() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail":[{"loc":["body","query"],"msg":"field required","type":"value_error.missing"}]}"#,
        )
        .unwrap();
        assert_eq!(body.detail_text().as_deref(), Some("field required"));
    }

    #[test]
    fn test_error_body_missing_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail_text(), None);
    }

    #[test]
    fn test_health_status() {
        let h: HealthResponse =
            serde_json::from_str(r#"{"status":"healthy","service":"RAG API"}"#).unwrap();
        assert!(h.is_healthy());
        let h: HealthResponse = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert!(!h.is_healthy());
        assert_eq!(h.service, None);
    }
}
