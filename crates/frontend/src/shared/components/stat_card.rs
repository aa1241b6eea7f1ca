use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatStatus {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

/// KPI tile
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Formatted value; `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(into, optional)] status: Signal<StatStatus>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        StatStatus::Good => "stat-card stat-card--success",
        StatStatus::Bad => "stat-card stat-card--error",
        StatStatus::Warning => "stat-card stat-card--warning",
        StatStatus::Neutral => "stat-card",
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "...".to_string())}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
