//! Tab registry - the single place mapping a tab to its title, icon and view

use crate::dashboards::d400_knowledge_base::ui::KnowledgeBaseDashboard;
use crate::domain::a001_rag_chat::ui::panel::RagChatPanel;
use crate::system::pages::settings::SettingsPage;
use crate::usecases::u501_upload_documents::UploadDocumentsView;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppTab {
    #[default]
    Chat,
    Upload,
    Database,
    Settings,
}

impl AppTab {
    pub fn all() -> [AppTab; 4] {
        [AppTab::Chat, AppTab::Upload, AppTab::Database, AppTab::Settings]
    }

    /// Value of the `?active=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            AppTab::Chat => "chat",
            AppTab::Upload => "upload",
            AppTab::Database => "database",
            AppTab::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<AppTab> {
        AppTab::all().into_iter().find(|t| t.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Chat => "Chat",
            AppTab::Upload => "Upload Documents",
            AppTab::Database => "Database",
            AppTab::Settings => "Settings",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            AppTab::Chat => "chat",
            AppTab::Upload => "file-text",
            AppTab::Database => "database",
            AppTab::Settings => "settings",
        }
    }
}

pub fn render_tab_content(tab: AppTab) -> AnyView {
    match tab {
        AppTab::Chat => view! { <RagChatPanel /> }.into_any(),
        AppTab::Upload => view! { <UploadDocumentsView /> }.into_any(),
        AppTab::Database => view! { <KnowledgeBaseDashboard /> }.into_any(),
        AppTab::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_resolve_back() {
        for tab in AppTab::all() {
            assert_eq!(AppTab::from_key(tab.key()), Some(tab));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(AppTab::from_key("Chat"), None);
        assert_eq!(AppTab::from_key(""), None);
    }

    #[test]
    fn test_chat_is_default() {
        assert_eq!(AppTab::default(), AppTab::Chat);
        assert_eq!(AppTab::Upload.title(), "Upload Documents");
    }
}
