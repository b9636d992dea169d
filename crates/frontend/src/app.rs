use crate::dashboards::BackofficeDashboard;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::DashboardConfig;
use crate::shared::theme::SkinProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config.tab));

    view! {
        <ConfigProvider>
            <SkinProvider initial=config.skin>
                <Shell>
                    <BackofficeDashboard />
                </Shell>
            </SkinProvider>
        </ConfigProvider>
    }
}
