use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dto::ChatResponse;

pub const GREETING: &str = "Hello! I'm your document assistant. I can help you analyze and answer questions about your uploaded documents. What would you like to know?";

pub const CLEARED_GREETING: &str =
    "Chat cleared! I'm ready to help you with questions about your documents.";

pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "What are the key strategic priorities in these documents?",
    "Can you summarize the main business challenges mentioned?",
    "What market opportunities are identified in the documents?",
    "What are the financial highlights or projections?",
    "How do the documents describe the competitive landscape?",
];

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// Message of the in-memory chat transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub is_error: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            sources: Vec::new(),
            is_error: false,
            created_at: Utc::now(),
        }
    }

    pub fn user(content: String) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: String, sources: Vec<String>) -> Self {
        Self {
            sources,
            ..Self::new(ChatRole::Assistant, content)
        }
    }

    pub fn error(detail: &str) -> Self {
        Self {
            is_error: true,
            ..Self::new(
                ChatRole::Assistant,
                format!("Sorry, I encountered an error: {}. Please try again.", detail),
            )
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}

/// Ordered chat history. Always starts with an assistant greeting and is
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::with_greeting(GREETING)
    }

    fn with_greeting(text: &str) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(text.to_string(), Vec::new())],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Only the greeting is present; suggestions are offered in this state.
    pub fn is_fresh(&self) -> bool {
        self.messages.len() == 1
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn push_user(&mut self, content: String) -> Uuid {
        let msg = ChatMessage::user(content);
        let id = msg.id;
        self.messages.push(msg);
        id
    }

    /// Append the backend answer. Duplicate source labels are dropped,
    /// first occurrence wins.
    pub fn push_assistant(&mut self, response: ChatResponse) -> Uuid {
        let mut sources: Vec<String> = Vec::with_capacity(response.sources.len());
        for source in response.sources {
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
        let msg = ChatMessage::assistant(response.response, sources);
        let id = msg.id;
        self.messages.push(msg);
        id
    }

    pub fn push_error(&mut self, detail: &str) -> Uuid {
        let msg = ChatMessage::error(detail);
        let id = msg.id;
        self.messages.push(msg);
        id
    }

    pub fn clear(&mut self) {
        *self = Self::with_greeting(CLEARED_GREETING);
    }
}

/// Returns the query to send, or `None` for blank input.
///
/// The text is sent as typed; trimming only decides whether it is blank.
pub fn prepare_query(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(text: &str, sources: &[&str]) -> ChatResponse {
        ChatResponse {
            response: text.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
            session_id: None,
        }
    }

    #[test]
    fn test_new_transcript_has_single_greeting() {
        let t = ChatTranscript::new();
        assert_eq!(t.messages().len(), 1);
        assert!(t.is_fresh());
        let greeting = &t.messages()[0];
        assert_eq!(greeting.role, ChatRole::Assistant);
        assert_eq!(greeting.content, GREETING);
        assert!(!greeting.is_error);
    }

    #[test]
    fn test_send_success_appends_user_and_bot() {
        let mut t = ChatTranscript::new();
        t.push_user("What is in the report?".to_string());
        t.push_assistant(response("A summary.", &["report.pdf"]));

        assert_eq!(t.messages().len(), 3);
        assert!(!t.is_fresh());
        assert!(t.messages()[1].is_user());
        let bot = t.last().unwrap();
        assert_eq!(bot.role, ChatRole::Assistant);
        assert_eq!(bot.content, "A summary.");
        assert_eq!(bot.sources, vec!["report.pdf".to_string()]);
    }

    #[test]
    fn test_send_failure_appends_user_and_error() {
        let mut t = ChatTranscript::new();
        t.push_user("hi".to_string());
        t.push_error("Error generating response: quota exceeded");

        assert_eq!(t.messages().len(), 3);
        let bot = t.last().unwrap();
        assert!(bot.is_error);
        assert!(!bot.has_sources());
        assert_eq!(
            bot.content,
            "Sorry, I encountered an error: Error generating response: quota exceeded. Please try again."
        );
    }

    #[test]
    fn test_duplicate_sources_are_collapsed() {
        let mut t = ChatTranscript::new();
        t.push_assistant(response("x", &["a.pdf", "b.csv", "a.pdf"]));
        assert_eq!(t.last().unwrap().sources, vec!["a.pdf", "b.csv"]);
    }

    #[test]
    fn test_clear_resets_to_greeting() {
        let mut t = ChatTranscript::new();
        t.push_user("q".to_string());
        t.push_assistant(response("a", &[]));
        t.clear();

        assert_eq!(t.messages().len(), 1);
        assert!(t.is_fresh());
        assert_eq!(t.messages()[0].content, CLEARED_GREETING);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut t = ChatTranscript::new();
        let a = t.push_user("one".to_string());
        let b = t.push_user("two".to_string());
        assert_ne!(a, b);
        assert_ne!(t.messages()[0].id, a);
    }

    #[test]
    fn test_prepare_query() {
        assert_eq!(prepare_query(""), None);
        assert_eq!(prepare_query("   \n\t"), None);
        assert_eq!(
            prepare_query("  revenue 2024 ").as_deref(),
            Some("  revenue 2024 ")
        );
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
    }
}
