use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::number_format::pluralize;
use contracts::dashboards::d400_knowledge_base::DatabaseStats;
use leptos::prelude::*;

fn documents_label(stats: &DatabaseStats) -> String {
    pluralize(stats.total_documents, "Document", "Documents")
}

fn chunks_label(stats: &DatabaseStats) -> String {
    pluralize(stats.total_chunks, "Chunk", "Chunks")
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let counters = move || {
        ctx.stats.get().map(|stats| {
            view! {
                <div class="header__stats">
                    <span class="stat-item">
                        {icon("file-text")}
                        {documents_label(&stats)}
                    </span>
                    <span class="stat-item">
                        {icon("database")}
                        {chunks_label(&stats)}
                    </span>
                </div>
            }
        })
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__logo">{icon("bot")}</span>
                <div>
                    <h1 class="header__title">"Document Q&A Assistant"</h1>
                    <p class="header__subtitle">"Ask questions about your PDF and CSV documents"</p>
                </div>
            </div>
            {counters}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total_documents: u64, total_chunks: u64) -> DatabaseStats {
        DatabaseStats {
            total_documents,
            total_chunks,
            ..DatabaseStats::default()
        }
    }

    #[test]
    fn test_counter_labels() {
        let s = stats(3, 48);
        assert_eq!(documents_label(&s), "3 Documents");
        assert_eq!(chunks_label(&s), "48 Chunks");
    }

    #[test]
    fn test_counter_labels_singular_and_grouping() {
        let s = stats(1, 12_500);
        assert_eq!(documents_label(&s), "1 Document");
        assert_eq!(chunks_label(&s), "12,500 Chunks");
    }
}
