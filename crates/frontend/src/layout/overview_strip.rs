use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use contracts::shared::indicators::overview_indicators;
use leptos::prelude::*;

/// "运营数据概览" strip. The "高级搜索" handle toggles the filter panel.
#[component]
pub fn OverviewStrip() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="overview-strip">
            <div class="overview-strip__body">
                <div class="overview-strip__title">
                    {icon("activity")}
                    <span>"运营数据概览"</span>
                </div>
                <div class="overview-strip__items">
                    {overview_indicators()
                        .into_iter()
                        .map(|indicator| view! { <StatCard indicator=indicator /> })
                        .collect_view()}
                </div>
            </div>
            <div
                class=move || {
                    if ctx.state.with(|s| s.filters_visible) {
                        "overview-strip__toggle overview-strip__toggle--open"
                    } else {
                        "overview-strip__toggle"
                    }
                }
                on:click=move |_| ctx.toggle_filters()
            >
                {icon("search")}
                <span>"高级搜索"</span>
            </div>
        </div>
    }
}
