use crate::domain::common::{ActionButton, ColumnDef, FilterField, TabDefinition, EDIT_AND_DELETE};
use crate::enums::filter_kind::SOURCE_OPTIONS;
use crate::enums::{ActionStyle, BackofficeTab, ColumnKind};

/// 商品管理
pub fn definition() -> TabDefinition {
    TabDefinition {
        tab: BackofficeTab::ProductManagement,
        filters: vec![
            FilterField::text("商品名称"),
            FilterField::text("店铺名称"),
            FilterField::text("SKU名称"),
            FilterField::text("项目名称"),
            FilterField::text("skuid"),
            FilterField::select("店铺来源", SOURCE_OPTIONS),
        ],
        columns: vec![
            ColumnDef::new("店铺名称", ColumnKind::ShopName),
            ColumnDef::new("商品名称", ColumnKind::Freeform),
            ColumnDef::new("skuid", ColumnKind::Identifier),
            ColumnDef::new("sku规格名称", ColumnKind::Freeform),
            ColumnDef::new("项目名称", ColumnKind::Freeform),
            ColumnDef::new("店铺来源", ColumnKind::Source),
        ],
        actions: vec![
            ActionButton::new("同步店铺SKU", ActionStyle::Success),
            ActionButton::new("自动匹配项目", ActionStyle::Primary),
        ],
        row_actions: EDIT_AND_DELETE,
        pending_badge: None,
    }
}
