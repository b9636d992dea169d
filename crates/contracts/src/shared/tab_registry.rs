//! Реестр описаний разделов back-office.
//!
//! Собирает `definition()` каждого домена один раз при первом обращении;
//! дальше все потребители только читают его.

use once_cell::sync::Lazy;

use crate::domain::common::TabDefinition;
use crate::enums::BackofficeTab;

// ─── Импорт описаний всех разделов ──────────────────────────────────────────

use crate::domain::a001_shop_management::definition as a001_definition;
use crate::domain::a002_review_management::definition as a002_definition;
use crate::domain::a003_review_statistics::definition as a003_definition;
use crate::domain::a004_product_management::definition as a004_definition;
use crate::domain::a005_customer_service::definition as a005_definition;
use crate::domain::a006_jd_orders::definition as a006_definition;
use crate::domain::a007_order_sync::definition as a007_definition;

// ─── Структуры ──────────────────────────────────────────────────────────────

pub struct TabRegistry {
    /// Indexed in `BackofficeTab::all()` order
    entries: Vec<TabDefinition>,
}

// ─── Глобальный экземпляр ───────────────────────────────────────────────────

pub static TAB_REGISTRY: Lazy<TabRegistry> = Lazy::new(TabRegistry::build);

// ─── Реализация ─────────────────────────────────────────────────────────────

impl TabRegistry {
    fn build() -> Self {
        let entries = vec![
            a001_definition(),
            a002_definition(),
            a003_definition(),
            a004_definition(),
            a005_definition(),
            a006_definition(),
            a007_definition(),
        ];
        log::debug!("tab registry built: {} definitions", entries.len());
        Self { entries }
    }

    fn position(tab: BackofficeTab) -> usize {
        match tab {
            BackofficeTab::ShopManagement => 0,
            BackofficeTab::ReviewManagement => 1,
            BackofficeTab::ReviewStatistics => 2,
            BackofficeTab::ProductManagement => 3,
            BackofficeTab::CustomerService => 4,
            BackofficeTab::JdOrders => 5,
            BackofficeTab::OrderSync => 6,
        }
    }

    pub fn get(&self, tab: BackofficeTab) -> &TabDefinition {
        &self.entries[Self::position(tab)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabDefinition> {
        self.entries.iter()
    }
}

/// Описание раздела. Total over the closed tab set.
pub fn lookup(tab: BackofficeTab) -> &'static TabDefinition {
    TAB_REGISTRY.get(tab)
}

/// All definitions in selector order
pub fn definitions() -> impl Iterator<Item = &'static TabDefinition> {
    TAB_REGISTRY.iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{ActionStyle, CellAlign, ColumnKind, FilterKind, FixedValue};

    #[test]
    fn test_lookup_returns_matching_tab() {
        for tab in BackofficeTab::all() {
            assert_eq!(lookup(tab).tab, tab);
        }
        let order: Vec<BackofficeTab> = definitions().map(|d| d.tab).collect();
        assert_eq!(order, BackofficeTab::all().to_vec());
    }

    #[test]
    fn test_column_labels_are_unique_per_tab() {
        for def in definitions() {
            let labels = def.column_labels();
            let mut deduped = labels.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(labels.len(), deduped.len(), "duplicate column in {}", def.tab);
        }
    }

    #[test]
    fn test_shop_management_definition() {
        let def = lookup(BackofficeTab::ShopManagement);
        assert_eq!(
            def.filter_labels(),
            vec!["店铺名称", "店铺负责人", "区域名称", "店铺所属平台", "是否自动录单", "是否新店"]
        );
        assert_eq!(
            def.column_labels(),
            vec![
                "店铺名称",
                "店铺ID",
                "店铺负责人",
                "区域名称",
                "店铺所属平台",
                "店铺对应的订单来源",
                "是否自动录单",
                "是否新店"
            ]
        );
        assert_eq!(def.action_labels(), vec!["新增", "更新负责人"]);
        assert_eq!(def.row_actions.primary_label, "修改");
        assert!(def.row_actions.deletable);
    }

    #[test]
    fn test_column_and_action_counts() {
        let counts: Vec<(usize, usize, usize)> = definitions()
            .map(|d| (d.filters.len(), d.columns.len(), d.actions.len()))
            .collect();
        assert_eq!(
            counts,
            vec![(6, 8, 2), (6, 11, 1), (4, 6, 1), (6, 6, 2), (3, 5, 1), (3, 16, 1), (12, 23, 1)]
        );
    }

    #[test]
    fn test_row_actions_per_tab() {
        let labels: Vec<(&str, bool)> = definitions()
            .map(|d| (d.row_actions.primary_label, d.row_actions.deletable))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("修改", true),
                ("修改", true),
                ("详情", false),
                ("修改", true),
                ("绑定系统用户", false),
                ("详情", true),
                ("修改", true),
            ]
        );
    }

    #[test]
    fn test_filter_kinds_follow_labels() {
        for def in definitions() {
            for field in &def.filters {
                let label = field.label;
                let expect_date = label.contains("时间") || label.contains("日期");
                let expect_select = !expect_date
                    && (label.contains("状态")
                        || label.contains("来源")
                        || label.contains("平台")
                        || label.contains("是否")
                        || label == "评论等级");
                assert_eq!(field.kind.is_date_range(), expect_date, "{}", label);
                assert_eq!(
                    matches!(field.kind, FilterKind::Select(_)),
                    expect_select,
                    "{}",
                    label
                );
            }
        }
    }

    /// First matching label rule wins, in this order
    fn kind_by_label(label: &str) -> ColumnKind {
        let has = |parts: &[&str]| parts.iter().any(|p| label.contains(p));
        if has(&["时间", "日期"]) {
            ColumnKind::Date
        } else if has(&["状态"]) {
            ColumnKind::Status
        } else if has(&["是否"]) {
            ColumnKind::BooleanFlag
        } else if has(&["负责人", "人", "业务员"]) {
            ColumnKind::Person
        } else if has(&["店铺名称"]) {
            ColumnKind::ShopName
        } else if has(&["平台", "来源"]) {
            ColumnKind::Source
        } else if has(&["金额", "原价"]) {
            ColumnKind::Amount
        } else if has(&["ID", "单号", "skuid"]) {
            ColumnKind::Identifier
        } else {
            match label {
                "星级" => ColumnKind::Constant(FixedValue::StarRating),
                "评价等级" => ColumnKind::Constant(FixedValue::ReviewGrade),
                "区域" | "区域名称" => ColumnKind::Constant(FixedValue::Region),
                _ => ColumnKind::Freeform,
            }
        }
    }

    #[test]
    fn test_column_kinds_follow_label_rules() {
        for def in definitions() {
            for col in &def.columns {
                assert_eq!(col.kind, kind_by_label(col.label), "{} / {}", def.tab, col.label);
            }
        }
    }

    #[test]
    fn test_first_matching_rule_decides_jd_columns() {
        let jd = lookup(BackofficeTab::JdOrders);
        let kind = |label: &str| jd.column(label).map(|c| c.kind);
        // lowercase "id" is not an identifier
        assert_eq!(kind("京东订单id"), Some(ColumnKind::Freeform));
        assert_eq!(kind("业务员处理详情"), Some(ColumnKind::Person));
        assert_eq!(kind("运营"), Some(ColumnKind::Freeform));
        assert_eq!(
            lookup(BackofficeTab::OrderSync).column("纳税人识别号").map(|c| c.kind),
            Some(ColumnKind::Person)
        );
    }

    #[test]
    fn test_special_columns() {
        let reviews = lookup(BackofficeTab::ReviewManagement);
        assert_eq!(
            reviews.column("星级").map(|c| (c.kind, c.align)),
            Some((ColumnKind::Constant(FixedValue::StarRating), CellAlign::Center))
        );
        assert_eq!(
            reviews.column("评价等级").map(|c| c.kind),
            Some(ColumnKind::Constant(FixedValue::ReviewGrade))
        );

        for def in definitions() {
            for col in &def.columns {
                if col.label.contains("数量") {
                    assert_eq!(col.align, CellAlign::Center, "{}", col.label);
                }
            }
        }
    }

    #[test]
    fn test_action_styles_and_pending_badge() {
        let products = lookup(BackofficeTab::ProductManagement);
        let styles: Vec<ActionStyle> = products.actions.iter().map(|a| a.style).collect();
        assert_eq!(styles, vec![ActionStyle::Success, ActionStyle::Primary]);

        let badges: Vec<BackofficeTab> = definitions()
            .filter(|d| d.pending_badge.is_some())
            .map(|d| d.tab)
            .collect();
        assert_eq!(badges, vec![BackofficeTab::JdOrders]);
    }

    #[test]
    fn test_definition_serializes_for_debug_dump() {
        let json = serde_json::to_value(lookup(BackofficeTab::CustomerService)).unwrap();
        assert_eq!(json["tab"], "CustomerService");
        assert_eq!(json["columns"][3]["label"], "店铺名称");
        assert_eq!(json["row_actions"]["primary_label"], "绑定系统用户");
    }
}
