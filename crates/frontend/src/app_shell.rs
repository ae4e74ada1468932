//! Application Shell - root layout wiring
//!
//! `AppShell` starts the app-wide background work once (URL sync of the
//! active tab, initial stats load, stats polling) and renders the layout.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the component is created.
    ctx.init_router_integration();
    ctx.refresh_stats();
    ctx.start_stats_polling();

    view! { <Shell /> }
}
