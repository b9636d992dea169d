pub mod global_context;
pub mod notice_bar;
pub mod overview_strip;
pub mod tab_selector;

use leptos::prelude::*;

/// Main application shell: a full-height column, no sidebars.
///
/// ```text
/// +------------------------------------------+
/// |  NoticeBar                               |
/// |  TabSelector                             |
/// |  OverviewStrip                           |
/// |  SearchPanel                             |
/// |  Table (scrolls) + pagination            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
