use super::filter_field::FilterFieldInput;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::icons::icon;
use contracts::enums::BackofficeTab;
use contracts::shared::tab_registry::lookup;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize};

/// Search fields of the active tab, then 搜索 / 重置, then the tab's own
/// buttons. Tab buttons have no handlers.
#[component]
pub fn SearchPanel(#[prop(into)] active_tab: Signal<BackofficeTab>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let is_expanded = Signal::derive(move || ctx.state.with(|s| s.filters_visible));
    let active_filters_count = Signal::derive(move || ctx.state.with(|s| s.filters.active_count()));

    // Fields are rebuilt only on tab change so typing keeps focus
    let fields = move || {
        lookup(active_tab.get())
            .filters
            .iter()
            .cloned()
            .map(|field| view! { <FilterFieldInput field=field /> })
            .collect_view()
    };

    let tab_actions = move || {
        let def = lookup(active_tab.get());
        let buttons = def
            .actions
            .iter()
            .map(|action| {
                view! {
                    <button class=action.style.css_class()>
                        {action.icon.map(|i| icon(i.icon_name()))}
                        {action.label}
                    </button>
                }
            })
            .collect_view();
        let badge = def.pending_badge.map(|badge| {
            view! {
                <div class="pending-chip">
                    {badge.label}
                    <span class="pending-chip__count">
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Danger>
                            {badge.count}
                        </Badge>
                    </span>
                </div>
            }
        });
        view! { {buttons} {badge} }
    };

    view! {
        <FilterPanel
            is_expanded=is_expanded
            on_toggle=Callback::new(move |_| ctx.toggle_filters())
            active_filters_count=active_filters_count
            filter_content=move || view! { {fields} }
            actions=move || view! {
                <div class="filter-panel__buttons">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.search()
                    >
                        "搜索"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctx.reset_filters()
                    >
                        "重置"
                    </Button>
                </div>
                <div class="filter-panel__buttons">
                    {tab_actions}
                </div>
            }
        />
    }
}
