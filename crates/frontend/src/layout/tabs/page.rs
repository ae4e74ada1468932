//! TabPage component - wrapper for the content of one tab
//!
//! Every tab is created once and kept mounted; inactive ones are hidden with
//! the `tabs__item--hidden` class so the chat transcript and upload status
//! survive switching tabs.

use super::registry::{render_tab_content, AppTab};
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: AppTab, tabs_store: AppGlobalContext) -> impl IntoView {
    let is_active = move || tabs_store.active.get() == tab;

    log!("TabPage created for '{}'", tab.key());
    on_cleanup(move || {
        log!("TabPage destroyed for '{}'", tab.key());
    });

    view! {
        <div
            class="tabs__item tab-content"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key()
        >
            {render_tab_content(tab)}
        </div>
    }
}
