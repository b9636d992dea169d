use crate::domain::common::{ActionButton, ColumnDef, FilterField, RowActions, TabDefinition};
use crate::enums::filter_kind::SOURCE_OPTIONS;
use crate::enums::{ActionIcon, ActionStyle, BackofficeTab, ColumnKind};

/// 评价统计
///
/// Aggregated counters, so rows can be inspected but not deleted.
pub fn definition() -> TabDefinition {
    TabDefinition {
        tab: BackofficeTab::ReviewStatistics,
        filters: vec![
            FilterField::text("负责人"),
            FilterField::text("店铺名称"),
            FilterField::select("评论来源", SOURCE_OPTIONS),
            FilterField::date_range("评论时间"),
        ],
        columns: vec![
            ColumnDef::new("店铺名称", ColumnKind::ShopName),
            ColumnDef::new("负责人", ColumnKind::Person),
            ColumnDef::new("评论来源", ColumnKind::Source),
            ColumnDef::new("好评数量", ColumnKind::Freeform).centered(),
            ColumnDef::new("中评数量", ColumnKind::Freeform).centered(),
            ColumnDef::new("差评数量", ColumnKind::Freeform).centered(),
        ],
        actions: vec![
            ActionButton::new("导出", ActionStyle::Default).with_icon(ActionIcon::Spreadsheet)
        ],
        row_actions: RowActions {
            primary_label: "详情",
            deletable: false,
        },
        pending_badge: None,
    }
}
