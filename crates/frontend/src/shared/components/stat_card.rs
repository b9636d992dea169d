use contracts::shared::indicators::OverviewIndicator;
use leptos::prelude::*;

/// Inline "label: value" figure of the overview strip
#[component]
pub fn StatCard(indicator: OverviewIndicator) -> impl IntoView {
    let value_class = format!(
        "overview-item__value {}",
        indicator.status.css_modifier()
    );

    view! {
        <div class="overview-item">
            <span class="overview-item__label">{format!("{}:", indicator.label)}</span>
            <span class=value_class>{indicator.formatted()}</span>
        </div>
    }
}
