use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::stat_card::{StatAccent, StatCard};
use crate::shared::icons::icon;
use contracts::dashboards::d400_knowledge_base::dto::DATABASE_INFO;
use contracts::dashboards::d400_knowledge_base::SourceKind;
use leptos::prelude::*;
use thaw::*;

/// Read-only view of the last stats snapshot with refresh and clear actions
#[component]
pub fn KnowledgeBaseDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_loading = ctx.is_loading;
    let has_stats = move || ctx.stats.with(|s| s.is_some());
    let is_empty = move || ctx.stats.with(|s| s.as_ref().map(|s| s.is_empty()).unwrap_or(true));

    let documents = Signal::derive(move || ctx.stats.with(|s| s.as_ref().map(|s| s.total_documents)));
    let chunks = Signal::derive(move || ctx.stats.with(|s| s.as_ref().map(|s| s.total_chunks)));
    let collections = Signal::derive(move || {
        ctx.stats
            .with(|s| s.as_ref().map(|s| s.collection_count() as u64))
    });

    let sources = move || {
        ctx.stats
            .with(|s| s.as_ref().map(|s| s.sources.clone()).unwrap_or_default())
    };
    let collection_names = move || {
        ctx.stats
            .with(|s| s.as_ref().map(|s| s.collections.clone()).unwrap_or_default())
    };

    view! {
        <div class="stats-container">
            <div class="stats-header">
                <h2>"Database Statistics"</h2>
                <div class="header-buttons">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=is_loading
                        on_click=move |_| ctx.refresh_stats()
                    >
                        <span class="refresh-icon" class:spinning=move || is_loading.get()>
                            {icon("refresh")}
                        </span>
                        " Refresh"
                    </Button>
                    <Show when=has_stats>
                        <Button
                            appearance=ButtonAppearance::Primary
                            class="clear-button"
                            disabled=Signal::derive(move || is_loading.get() || is_empty())
                            on_click=move |_| ctx.clear_database()
                        >
                            {icon("trash")}
                            " Clear All"
                        </Button>
                    </Show>
                </div>
            </div>

            {move || {
                ctx.stats_error.get().map(|e| {
                    view! {
                        <div class="warning-box warning-box--error">
                            {icon("alert-circle")}
                            <span class="warning-box__text">{e}</span>
                        </div>
                    }
                })
            }}

            <Show
                when=has_stats
                fallback=|| view! {
                    <div class="loading-stats">
                        <p>"Loading statistics..."</p>
                    </div>
                }
            >
                <div class="stats-grid">
                    <StatCard label="Documents" icon_name="file-text" accent=StatAccent::Documents value=documents />
                    <StatCard label="Text Chunks" icon_name="database" accent=StatAccent::Chunks value=chunks />
                    <StatCard label="Collections" icon_name="database" accent=StatAccent::Collections value=collections />
                </div>

                <Show when=move || !sources().is_empty()>
                    <div class="sources-section">
                        <h3>"Uploaded Documents"</h3>
                        <div class="sources-list">
                            <For each=sources key=|name| name.clone() let:name>
                                <div class="source-item">
                                    <span class="source-icon">{icon("file-text")}</span>
                                    <span class="source-name">{name.clone()}</span>
                                    <span class="source-type">{SourceKind::from_name(&name).label()}</span>
                                </div>
                            </For>
                        </div>
                    </div>
                </Show>

                <Show when=move || !collection_names().is_empty()>
                    <div class="collections-section">
                        <h3>"Vector Collections"</h3>
                        <div class="collections-list">
                            <For each=collection_names key=|name| name.clone() let:name>
                                <div class="collection-item">
                                    <span class="collection-icon">{icon("database")}</span>
                                    <span class="collection-name">{name}</span>
                                </div>
                            </For>
                        </div>
                    </div>
                </Show>

                <Show when=is_empty>
                    <div class="empty-state">
                        <span class="empty-icon">{icon("alert-triangle")}</span>
                        <h3>"No Documents Found"</h3>
                        <p>"Upload some PDF or CSV files to get started."</p>
                    </div>
                </Show>

                <div class="database-info">
                    <h3>"Database Information"</h3>
                    <div class="info-grid">
                        {DATABASE_INFO
                            .iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="info-item">
                                        <strong>{format!("{}:", label)}</strong>
                                        <span>{*value}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
