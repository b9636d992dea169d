use crate::domain::common::{
    ActionButton, ColumnDef, FilterField, PendingBadge, TabDefinition, DETAILS_AND_DELETE,
};
use crate::enums::filter_kind::SOURCE_OPTIONS;
use crate::enums::{ActionIcon, ActionStyle, BackofficeTab, ColumnKind};

/// 京东订单
pub fn definition() -> TabDefinition {
    TabDefinition {
        tab: BackofficeTab::JdOrders,
        filters: vec![
            FilterField::select("订单来源", SOURCE_OPTIONS),
            FilterField::text("客户名称"),
            FilterField::text("京东订单id"),
        ],
        columns: vec![
            ColumnDef::new("店铺名称", ColumnKind::ShopName),
            ColumnDef::new("下单时间", ColumnKind::Date),
            ColumnDef::new("客户名称", ColumnKind::Freeform),
            ColumnDef::new("订单状态", ColumnKind::Status),
            ColumnDef::new("顾客申请退款", ColumnKind::Freeform),
            ColumnDef::new("京东订单id", ColumnKind::Freeform),
            ColumnDef::new("订单原价(元)", ColumnKind::Amount),
            ColumnDef::new("结算金额(元)", ColumnKind::Amount),
            ColumnDef::new("业务员操作时间", ColumnKind::Date),
            ColumnDef::new("业务员", ColumnKind::Person),
            ColumnDef::new("业务员选择状态", ColumnKind::Status),
            ColumnDef::new("业务员处理详情", ColumnKind::Person),
            ColumnDef::new("运营处理时间", ColumnKind::Date),
            ColumnDef::new("运营", ColumnKind::Freeform),
            ColumnDef::new("运营操作状态", ColumnKind::Status),
            ColumnDef::new("运营处理详情", ColumnKind::Freeform),
        ],
        actions: vec![
            ActionButton::new("导出", ActionStyle::Default).with_icon(ActionIcon::Spreadsheet)
        ],
        row_actions: DETAILS_AND_DELETE,
        pending_badge: Some(PendingBadge {
            label: "待出库订单",
            count: 0,
        }),
    }
}
