//! RAG chat panel (MVVM)
//!
//! - model.rs: API call for `POST /chat`
//! - view_model.rs: RagChatVm with RwSignals
//! - view.rs: RagChatPanel component

mod model;
mod view;
mod view_model;

pub use view::RagChatPanel;
pub use view_model::RagChatVm;
