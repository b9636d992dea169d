use contracts::enums::BackofficeTab;
use contracts::shared::dashboard_state::DashboardState;
use contracts::shared::mock_rows::{generate, MockRow};
use contracts::shared::tab_registry::lookup;
use leptos::prelude::*;

/// Page-wide state: the UI state machine plus the rows of the active tab.
///
/// Rows are regenerated only when the active tab changes.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub state: RwSignal<DashboardState>,
    pub rows: RwSignal<Vec<MockRow>>,
}

impl AppGlobalContext {
    pub fn new(initial_tab: BackofficeTab) -> Self {
        let state = DashboardState::new(initial_tab);
        let rows = generate(state.definition());
        Self {
            state: RwSignal::new(state),
            rows: RwSignal::new(rows),
        }
    }

    pub fn select_tab(&self, tab: BackofficeTab) {
        log::debug!("select_tab: '{}'", tab);
        let changed = self.state.try_update(|s| s.select_tab(tab)).unwrap_or(false);
        if changed {
            self.rows.set(generate(lookup(tab)));
        }
    }

    pub fn toggle_filters(&self) {
        self.state.update(|s| s.toggle_filters());
        log::debug!(
            "filters visible: {}",
            self.state.with_untracked(|s| s.filters_visible)
        );
    }

    pub fn set_text_filter(&self, label: &str, value: String) {
        self.state.update(|s| s.filters.set_text(label, value));
    }

    pub fn set_choice_filter(&self, label: &str, value: String) {
        self.state.update(|s| s.filters.set_choice(label, value));
    }

    pub fn set_date_from(&self, label: &str, raw: &str) {
        self.state.update(|s| s.filters.set_date_from(label, raw));
    }

    pub fn set_date_to(&self, label: &str, raw: &str) {
        self.state.update(|s| s.filters.set_date_to(label, raw));
    }

    pub fn reset_filters(&self) {
        log::debug!("reset filters");
        self.state.update(|s| s.reset_filters());
    }

    /// Rows are mock data, so searching only records what was asked for
    pub fn search(&self) {
        let snapshot = self.state.with_untracked(|s| {
            serde_json::to_string(&s.filters).unwrap_or_else(|e| format!("<{}>", e))
        });
        log::info!("search requested with filters: {}", snapshot);
    }

    pub fn go_to_page(&self, page: usize) {
        let total = self.rows.with_untracked(|rows| rows.len());
        self.state.update(|s| s.go_to_page(page, total));
        log::debug!("page: {}", self.state.with_untracked(|s| s.page));
    }

    pub fn set_page_size(&self, page_size: usize) {
        log::debug!("page size: {}", page_size);
        self.state.update(|s| s.set_page_size(page_size));
    }
}
