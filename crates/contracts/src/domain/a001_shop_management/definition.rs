use crate::domain::common::{ActionButton, ColumnDef, FilterField, TabDefinition, EDIT_AND_DELETE};
use crate::enums::filter_kind::{SOURCE_OPTIONS, YES_NO_OPTIONS};
use crate::enums::{ActionIcon, ActionStyle, BackofficeTab, ColumnKind, FixedValue};

/// 第三方店铺管理
pub fn definition() -> TabDefinition {
    TabDefinition {
        tab: BackofficeTab::ShopManagement,
        filters: vec![
            FilterField::text("店铺名称"),
            FilterField::text("店铺负责人"),
            FilterField::text("区域名称"),
            FilterField::select("店铺所属平台", SOURCE_OPTIONS),
            FilterField::select("是否自动录单", YES_NO_OPTIONS),
            FilterField::select("是否新店", YES_NO_OPTIONS),
        ],
        columns: vec![
            ColumnDef::new("店铺名称", ColumnKind::ShopName),
            ColumnDef::new("店铺ID", ColumnKind::Identifier),
            ColumnDef::new("店铺负责人", ColumnKind::Person),
            ColumnDef::new("区域名称", ColumnKind::Constant(FixedValue::Region)),
            ColumnDef::new("店铺所属平台", ColumnKind::Source),
            ColumnDef::new("店铺对应的订单来源", ColumnKind::Source),
            ColumnDef::new("是否自动录单", ColumnKind::BooleanFlag),
            ColumnDef::new("是否新店", ColumnKind::BooleanFlag),
        ],
        actions: vec![
            ActionButton::new("新增", ActionStyle::Primary).with_icon(ActionIcon::Plus),
            ActionButton::new("更新负责人", ActionStyle::Success).with_icon(ActionIcon::UserPlus),
        ],
        row_actions: EDIT_AND_DELETE,
        pending_badge: None,
    }
}
