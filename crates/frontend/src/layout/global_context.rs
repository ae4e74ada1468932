use crate::dashboards::d400_knowledge_base::api;
use crate::layout::tabs::AppTab;
use crate::shared::config::config;
use contracts::dashboards::d400_knowledge_base::DatabaseStats;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use web_sys::window;

const CLEAR_CONFIRMATION: &str = "Are you sure you want to clear all documents from the database?";

/// Root view state: the active tab and the last stats snapshot.
///
/// The snapshot is the single source of truth for the header counters and
/// the database dashboard; every refresh overwrites it.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppTab>,
    pub stats: RwSignal<Option<DatabaseStats>>,
    pub stats_error: RwSignal<Option<String>>,
    /// A clear request is in flight
    pub is_loading: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppTab::default()),
            stats: RwSignal::new(None),
            stats_error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
        }
    }

    /// Restore the active tab from `?active=` and keep the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(tab) = params.get("active").and_then(|key| AppTab::from_key(key)) {
            self.activate_tab(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active.key())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate_tab(&self, tab: AppTab) {
        leptos::logging::log!("activate_tab: '{}'", tab.key());
        self.active.set(tab);
    }

    async fn load_stats(self) {
        match api::fetch_stats().await {
            Ok(stats) => {
                self.stats.set(Some(stats));
                self.stats_error.set(None);
            }
            Err(e) => {
                log::error!("Error fetching stats: {}", e);
                self.stats_error.set(Some(e.to_string()));
            }
        }
    }

    pub fn refresh_stats(&self) {
        spawn_local(self.load_stats());
    }

    /// Periodic refresh; a no-op when the poll interval is 0.
    pub fn start_stats_polling(&self) {
        let interval = config().stats_poll_ms;
        if interval == 0 {
            return;
        }
        let this = *self;
        spawn_local(async move {
            loop {
                TimeoutFuture::new(interval).await;
                this.load_stats().await;
            }
        });
    }

    /// Ask for confirmation, wipe the index and refresh the snapshot.
    pub fn clear_database(&self) {
        let Some(w) = window() else {
            return;
        };
        if !w.confirm_with_message(CLEAR_CONFIRMATION).unwrap_or(false) {
            return;
        }

        self.is_loading.set(true);
        let this = *self;
        spawn_local(async move {
            match api::clear_database().await {
                Ok(resp) => {
                    log::info!("clear: {}", resp.message);
                    this.load_stats().await;
                    alert("Database cleared successfully!");
                }
                Err(e) => {
                    log::error!("Error clearing database: {}", e);
                    alert("Error clearing database. Please try again.");
                }
            }
            this.is_loading.set(false);
        });
    }
}

fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
