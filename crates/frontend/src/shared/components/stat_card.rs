use crate::shared::icons::icon;
use leptos::prelude::*;

/// Counter tile used by page summaries
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    value: Signal<usize>,
    /// Highlighted tile (selected filter)
    #[prop(optional, into)]
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="stat-card" class:stat-card--active=move || active.get()>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </div>
    }
}
