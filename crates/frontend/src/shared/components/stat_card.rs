use crate::shared::icons::icon;
use crate::shared::number_format::format_count;
use leptos::prelude::*;

/// Accent of the card icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatAccent {
    Documents,
    Chunks,
    Collections,
}

impl StatAccent {
    fn class(&self) -> &'static str {
        match self {
            StatAccent::Documents => "stat-card__icon stat-card__icon--documents",
            StatAccent::Chunks => "stat-card__icon stat-card__icon--chunks",
            StatAccent::Collections => "stat-card__icon stat-card__icon--collections",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed under the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    accent: StatAccent,
    /// Counter value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<u64>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class=accent.class()>
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{formatted}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}
