use super::data_table::DataTable;
use super::search_panel::SearchPanel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notice_bar::NoticeBar;
use crate::layout::overview_strip::OverviewStrip;
use crate::layout::tab_selector::TabSelector;
use crate::shared::components::pagination_controls::PaginationControls;
use leptos::prelude::*;

/// Back-office dashboard: notice, tabs, overview, filters, table, paging
#[component]
pub fn BackofficeDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Tab-keyed parts re-render only when the tab itself changes
    let active_tab = Memo::new(move |_| ctx.state.with(|s| s.active_tab));

    let total_count = Signal::derive(move || ctx.rows.with(|rows| rows.len()));
    let current_page = Signal::derive(move || ctx.state.with(|s| s.page));
    let page_size = Signal::derive(move || ctx.state.with(|s| s.page_size));
    let total_pages = Signal::derive(move || ctx.state.with(|s| s.total_pages(total_count.get())));

    view! {
        <div class="backoffice">
            <NoticeBar />
            <TabSelector />
            <OverviewStrip />
            <SearchPanel active_tab=active_tab />
            <div class="backoffice-table-card">
                <DataTable active_tab=active_tab />
                <div class="backoffice-table-card__footer">
                    <PaginationControls
                        current_page=current_page
                        total_pages=total_pages
                        total_count=total_count
                        page_size=page_size
                        on_page_change=Callback::new(move |page| ctx.go_to_page(page))
                        on_page_size_change=Callback::new(move |size| ctx.set_page_size(size))
                    />
                </div>
            </div>
        </div>
    }
}
