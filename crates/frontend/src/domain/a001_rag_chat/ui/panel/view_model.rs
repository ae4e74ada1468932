//! RAG chat panel - View Model

use contracts::domain::a001_rag_chat::{prepare_query, ChatTranscript};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct RagChatVm {
    pub transcript: RwSignal<ChatTranscript>,
    pub input: RwSignal<String>,
    /// A `/chat` request is in flight
    pub is_loading: RwSignal<bool>,
}

impl RagChatVm {
    pub fn new() -> Self {
        Self {
            transcript: RwSignal::new(ChatTranscript::new()),
            input: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
        }
    }

    pub fn can_send(&self) -> bool {
        !self.is_loading.get() && self.input.with(|text| prepare_query(text).is_some())
    }

    /// Move the input into the transcript as a user message.
    ///
    /// Returns the query to send, or `None` when there is nothing to send or
    /// a request is already running. The input is cleared right away.
    pub fn begin_send(&self) -> Option<String> {
        if self.is_loading.get_untracked() {
            return None;
        }
        let query = self.input.with_untracked(|text| prepare_query(text))?;
        self.input.set(String::new());
        self.transcript.update(|t| {
            t.push_user(query.clone());
        });
        self.is_loading.set(true);
        Some(query)
    }

    pub fn clear(&self) {
        self.transcript.update(|t| t.clear());
    }

    pub fn is_fresh(&self) -> bool {
        self.transcript.with(|t| t.is_fresh())
    }
}
