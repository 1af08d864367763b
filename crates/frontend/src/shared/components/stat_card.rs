use crate::shared::icons::icon;
use leptos::prelude::*;

/// KPI tile: icon, label, formatted value and an optional subtitle
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value; None while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional subtitle below the value
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">
                {move || value.get().unwrap_or_else(|| "…".to_string())}
            </div>
            {subtitle.map(|text| view! { <div class="stat-card__subtitle">{text}</div> })}
        </div>
    }
}
