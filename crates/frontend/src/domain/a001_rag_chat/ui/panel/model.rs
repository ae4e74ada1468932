//! RAG chat panel - Model (API functions)

use crate::shared::api_utils::{post_json, ApiError};
use contracts::domain::a001_rag_chat::{ChatRequest, ChatResponse};
use contracts::shared::api::ApiEndpoint;

/// Ask the backend a question about the indexed documents
pub async fn send_query(query: String) -> Result<ChatResponse, ApiError> {
    let request = ChatRequest::new(query);
    post_json(ApiEndpoint::Chat, &request).await
}
