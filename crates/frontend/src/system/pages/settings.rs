//! Settings tab: where the client talks to and what it can do

use crate::shared::api_utils::api_base;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::health::{api, HealthStatus};
use contracts::usecases::u501_upload_documents::files::{ACCEPTED_TYPES, MAX_FILE_SIZE_MB};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const FEATURES: [&str; 5] = [
    "Ask questions in natural language about uploaded documents",
    "Answers cite the source files they were built from",
    "PDF and CSV ingestion with automatic chunking",
    "Vector similarity search over the knowledge base",
    "Live statistics of the indexed collection",
];

fn poll_label(ms: u32) -> String {
    if ms == 0 {
        "Disabled".to_string()
    } else if ms % 1000 == 0 {
        format!("Every {} s", ms / 1000)
    } else {
        format!("Every {} ms", ms)
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let health = RwSignal::new(HealthStatus::default());

    let check_health = move || {
        if health.with_untracked(|h| h.is_checking()) {
            return;
        }
        health.set(HealthStatus::Checking);
        spawn_local(async move {
            let result = api::fetch_health().await;
            if let Err(e) = &result {
                log::warn!("health check failed: {}", e);
            }
            health.set(HealthStatus::from_result(result));
        });
    };

    // check once when the page is created
    check_health();

    let backend_url = api_base();
    let file_types = ACCEPTED_TYPES
        .iter()
        .map(|(ext, mime)| format!("{} ({})", ext, mime))
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="settings-section">
            <h2>"Settings"</h2>

            <div class="settings-card">
                <h3>"Backend"</h3>
                <div class="info-grid">
                    <div class="info-item">
                        <strong>"API URL:"</strong>
                        <span class="mono">{backend_url}</span>
                    </div>
                    <div class="info-item">
                        <strong>"Stats refresh:"</strong>
                        <span>{poll_label(config().stats_poll_ms)}</span>
                    </div>
                    <div class="info-item">
                        <strong>"Status:"</strong>
                        <span class=move || health.with(|h| h.css_class())>
                            {move || health.with(|h| h.label())}
                        </span>
                    </div>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || health.with(|h| h.is_checking()))
                    on_click=move |_| check_health()
                >
                    {icon("refresh")}
                    " Check connection"
                </Button>
            </div>

            <div class="settings-card">
                <h3>"Documents"</h3>
                <div class="info-grid">
                    <div class="info-item">
                        <strong>"Supported types:"</strong>
                        <span>{file_types}</span>
                    </div>
                    <div class="info-item">
                        <strong>"Max file size:"</strong>
                        <span>{format!("{} MB", MAX_FILE_SIZE_MB)}</span>
                    </div>
                </div>
            </div>

            <div class="settings-card">
                <h3>"Features"</h3>
                <ul class="feature-list">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <li>
                                {icon("check")}
                                <span>{*feature}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_label() {
        assert_eq!(poll_label(0), "Disabled");
        assert_eq!(poll_label(30_000), "Every 30 s");
        assert_eq!(poll_label(1_500), "Every 1500 ms");
    }
}
