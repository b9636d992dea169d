use crate::domain::common::{ActionButton, ColumnDef, FilterField, RowActions, TabDefinition};
use crate::enums::{ActionIcon, ActionStyle, BackofficeTab, ColumnKind};

/// 客服管理
///
/// Agents are bound to system users instead of being edited in place.
pub fn definition() -> TabDefinition {
    TabDefinition {
        tab: BackofficeTab::CustomerService,
        filters: vec![
            FilterField::text("系统用户名称"),
            FilterField::text("客服名称"),
            FilterField::text("店铺名称"),
        ],
        columns: vec![
            ColumnDef::new("客服名称", ColumnKind::Freeform),
            ColumnDef::new("客服编号", ColumnKind::Freeform),
            ColumnDef::new("系统用户名称", ColumnKind::Freeform),
            ColumnDef::new("店铺名称", ColumnKind::ShopName),
            ColumnDef::new("客服等级", ColumnKind::Freeform),
        ],
        actions: vec![
            ActionButton::new("同步", ActionStyle::Primary).with_icon(ActionIcon::Refresh)
        ],
        row_actions: RowActions {
            primary_label: "绑定系统用户",
            deletable: false,
        },
        pending_badge: None,
    }
}
