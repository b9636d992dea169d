use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible search panel.
///
/// Fields scroll horizontally on one line; `actions` are placed after them
/// behind a divider.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: Signal<bool>,

    /// Called when the header is clicked
    on_toggle: Callback<()>,

    /// Number of filled filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ViewFn,

    /// Search / reset and tab-specific buttons
    #[prop(into)]
    actions: ViewFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header" on:click=move |_| on_toggle.run(())>
                <svg
                    width="16"
                    height="16"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }
                >
                    <polyline points="6 9 12 15 18 9"></polyline>
                </svg>
                {icon("filter")}
                <span class="filter-panel__title">"筛选条件"</span>
                {move || {
                    let count = active_filters_count.get();
                    (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                }}
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    <div class="filter-panel__fields">
                        {filter_content.run()}
                    </div>
                    {actions.run()}
                </div>
            </div>
        </div>
    }
}
