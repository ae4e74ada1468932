use serde::{Deserialize, Serialize};

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ChatRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            session_id: None,
        }
    }
}

/// Answer of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    /// Source file names the answer was grounded on
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_empty_session() {
        let json = serde_json::to_string(&ChatRequest::new("What changed?")).unwrap();
        assert_eq!(json, r#"{"query":"What changed?"}"#);
    }

    #[test]
    fn test_response_without_sources() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"response":"I don't have any relevant information in the uploaded documents."}"#,
        )
        .unwrap();
        assert!(resp.sources.is_empty());
        assert_eq!(resp.session_id, None);
    }

    #[test]
    fn test_response_with_null_session() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"response":"ok","sources":["q3.pdf","sales.csv"],"session_id":null}"#,
        )
        .unwrap();
        assert_eq!(resp.sources.len(), 2);
    }
}
