use crate::shared::icons::icon;
use crate::shared::theme::SkinSelector;
use contracts::shared::notice::{SYSTEM_NOTICE, SYSTEM_NOTICE_TITLE};
use leptos::prelude::*;

/// Scrolling system announcement; the skin switcher sits at its right edge.
#[component]
pub fn NoticeBar() -> impl IntoView {
    view! {
        <div class="notice-bar">
            <div class="notice-bar__title">
                <span class="notice-bar__bell">{icon("bell")}</span>
                <span>{SYSTEM_NOTICE_TITLE}</span>
            </div>
            <div class="notice-bar__track">
                <div class="notice-bar__marquee">
                    <span>{SYSTEM_NOTICE}</span>
                </div>
            </div>
            <SkinSelector />
        </div>
    }
}
