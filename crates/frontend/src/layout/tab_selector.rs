use crate::layout::global_context::AppGlobalContext;
use contracts::enums::BackofficeTab;
use leptos::prelude::*;

#[component]
pub fn TabSelector() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tab-selector">
            {BackofficeTab::all().into_iter().map(|tab| {
                let is_active = move || ctx.state.with(|s| s.active_tab == tab);
                view! {
                    <button
                        class=move || {
                            if is_active() {
                                "tab-selector__item tab-selector__item--active"
                            } else {
                                "tab-selector__item"
                            }
                        }
                        on:click=move |_| ctx.select_tab(tab)
                    >
                        {tab.display_name()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
