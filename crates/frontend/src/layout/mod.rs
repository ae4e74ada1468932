pub mod global_context;
pub mod header;
pub mod tabs;

use global_context::AppGlobalContext;
use header::Header;
use leptos::prelude::*;
use tabs::{AppTab, TabBar, TabPage};

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, stats counters)          |
/// +------------------------------------------+
/// |  TabBar                                  |
/// +------------------------------------------+
/// |  TabPage x 4 (only the active one shown) |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app">
            <Header />
            <TabBar />
            <main class="app-main">
                {AppTab::all()
                    .into_iter()
                    .map(|tab| view! { <TabPage tab=tab tabs_store=ctx /> })
                    .collect_view()}
            </main>
        </div>
    }
}
