pub mod app;
pub mod dashboards;
pub mod layout;
pub mod shared;

use leptos::prelude::*;
use shared::config::DashboardConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, warnings) = DashboardConfig::from_location();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();

    for warning in &warnings {
        log::warn!("config: {}", warning);
    }
    log::info!(
        "starting back-office dashboard: tab='{}', skin='{}'",
        config.tab,
        config.skin.as_str()
    );

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
