use crate::shared::icons::icon;
use contracts::shared::paging::{page_buttons, PageButton, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// PaginationControls component - "共 N 条", page buttons, size and jump.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of rows
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let (jump_value, set_jump_value) = signal(String::from("1"));

    // keep the jump box in sync with button navigation and tab switches
    Effect::new(move |_| set_jump_value.set(current_page.get().to_string()));

    let jump = move || {
        if let Ok(page) = jump_value.get_untracked().trim().parse::<usize>() {
            on_page_change.run(page);
        }
        set_jump_value.set(current_page.get_untracked().to_string());
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || format!("共 {} 条", total_count.get())}</span>
            <div class="pagination-pages">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                    disabled=move || current_page.get() <= 1
                    title="上一页"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    page_buttons(current, total_pages.get())
                        .into_iter()
                        .map(|button| match button {
                            PageButton::Page(page) => view! {
                                <button
                                    class=if page == current {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page}
                                </button>
                            }
                            .into_any(),
                            PageButton::Ellipsis => view! {
                                <span class="pagination-ellipsis">"..."</span>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get() + 1)
                    disabled=move || current_page.get() >= total_pages.get()
                    title="下一页"
                >
                    {icon("chevron-right")}
                </button>
            </div>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} 条/页", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
            <div class="pagination-jump">
                <span>"前往"</span>
                <input
                    type="number"
                    min="1"
                    class="pagination-jump__input"
                    prop:value=move || jump_value.get()
                    on:input=move |ev| set_jump_value.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            jump();
                        }
                    }
                    on:blur=move |_| jump()
                />
                <span>"页"</span>
            </div>
        </div>
    }
}
