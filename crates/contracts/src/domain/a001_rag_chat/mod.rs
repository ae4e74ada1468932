pub mod aggregate;
pub mod dto;

pub use aggregate::{prepare_query, ChatMessage, ChatRole, ChatTranscript};
pub use dto::{ChatRequest, ChatResponse};
