use super::registry::AppTab;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Navigation row under the header
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found");

    view! {
        <nav class="app-nav">
            {AppTab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="nav-button"
                            class:active=move || ctx.active.get() == tab
                            on:click=move |_| ctx.activate_tab(tab)
                        >
                            {icon(tab.icon_name())}
                            {tab.title()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
