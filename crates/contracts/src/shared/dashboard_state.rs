//! Состояние страницы: активный раздел, страница, видимость фильтров.
//!
//! Меняется только обработчиками действий пользователя.

use std::ops::Range;

use crate::domain::common::TabDefinition;
use crate::enums::BackofficeTab;
use crate::shared::filters::FilterValues;
use crate::shared::paging::{self, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::shared::tab_registry::lookup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub active_tab: BackofficeTab,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub filters_visible: bool,
    pub filters: FilterValues,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(BackofficeTab::default())
    }
}

impl DashboardState {
    pub fn new(active_tab: BackofficeTab) -> Self {
        Self {
            active_tab,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filters_visible: true,
            filters: FilterValues::default(),
        }
    }

    pub fn definition(&self) -> &'static TabDefinition {
        lookup(self.active_tab)
    }

    /// Activates `tab` and goes back to page 1.
    ///
    /// Returns `true` when the tab actually changed; filter values are
    /// dropped in that case and the caller must regenerate rows.
    pub fn select_tab(&mut self, tab: BackofficeTab) -> bool {
        self.page = 1;
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        self.filters.clear();
        true
    }

    pub fn toggle_filters(&mut self) {
        self.filters_visible = !self.filters_visible;
    }

    pub fn reset_filters(&mut self) {
        self.filters.clear();
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        paging::total_pages(total_rows, self.page_size)
    }

    /// Moves to `page`, clamped to the available pages
    pub fn go_to_page(&mut self, page: usize, total_rows: usize) {
        self.page = paging::clamp_page(page, self.total_pages(total_rows));
    }

    /// Unknown sizes are ignored
    pub fn set_page_size(&mut self, page_size: usize) {
        if PAGE_SIZE_OPTIONS.contains(&page_size) && page_size != self.page_size {
            self.page_size = page_size;
            self.page = 1;
        }
    }

    pub fn visible_range(&self, total_rows: usize) -> Range<usize> {
        paging::page_range(self.page, self.page_size, total_rows)
    }

    pub fn row_number(&self, index_on_page: usize) -> usize {
        paging::row_number(self.page, self.page_size, index_on_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mock_rows::{generate, ROWS_PER_TAB};

    #[test]
    fn test_initial_state() {
        let state = DashboardState::default();
        assert_eq!(state.active_tab, BackofficeTab::ShopManagement);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 20);
        assert!(state.filters_visible);
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_switching_tab_resets_page_and_filters() {
        for target in BackofficeTab::all() {
            let mut state = DashboardState::new(BackofficeTab::OrderSync);
            state.set_page_size(10);
            state.go_to_page(2, ROWS_PER_TAB);
            state.filters.set_text("店铺名称", "今帮手旗舰店".to_string());

            let changed = state.select_tab(target);

            assert_eq!(state.page, 1);
            assert_eq!(state.active_tab, target);
            assert_eq!(changed, target != BackofficeTab::OrderSync);
            if changed {
                assert!(state.filters.is_empty());
            }
        }
    }

    #[test]
    fn test_reselecting_same_tab_keeps_filters() {
        let mut state = DashboardState::new(BackofficeTab::JdOrders);
        state.filters.set_text("客户名称", "张三".to_string());
        assert!(!state.select_tab(BackofficeTab::JdOrders));
        assert_eq!(state.filters.text("客户名称"), "张三");
    }

    #[test]
    fn test_header_matches_rows_for_active_tab() {
        let mut state = DashboardState::default();
        for tab in BackofficeTab::all() {
            state.select_tab(tab);
            let def = state.definition();
            let rows = generate(def);
            for row in &rows {
                assert_eq!(row.columns().collect::<Vec<_>>(), def.column_labels());
            }
        }
    }

    #[test]
    fn test_toggle_and_paging() {
        let mut state = DashboardState::default();
        state.toggle_filters();
        assert!(!state.filters_visible);
        state.toggle_filters();
        assert!(state.filters_visible);

        state.go_to_page(5, ROWS_PER_TAB);
        assert_eq!(state.page, 1);

        state.set_page_size(10);
        state.go_to_page(5, ROWS_PER_TAB);
        assert_eq!(state.page, 2);
        assert_eq!(state.visible_range(ROWS_PER_TAB), 10..20);
        assert_eq!(state.row_number(0), 11);

        state.set_page_size(15);
        assert_eq!(state.page_size, 10);
        state.set_page_size(20);
        assert_eq!(state.page, 1);
    }
}
