use crate::domain::common::{ActionButton, ColumnDef, FilterField, TabDefinition, EDIT_AND_DELETE};
use crate::enums::filter_kind::{REVIEW_GRADE_OPTIONS, SOURCE_OPTIONS};
use crate::enums::{ActionIcon, ActionStyle, BackofficeTab, ColumnKind, FixedValue};

/// 评论管理
pub fn definition() -> TabDefinition {
    TabDefinition {
        tab: BackofficeTab::ReviewManagement,
        filters: vec![
            FilterField::text("负责人"),
            FilterField::text("店铺名称"),
            FilterField::text("第三方订单号/券码"),
            FilterField::select("评论等级", REVIEW_GRADE_OPTIONS),
            FilterField::select("评论来源", SOURCE_OPTIONS),
            FilterField::date_range("评论时间"),
        ],
        columns: vec![
            ColumnDef::new("店铺名称", ColumnKind::ShopName),
            ColumnDef::new("负责人", ColumnKind::Person),
            ColumnDef::new("评论来源", ColumnKind::Source),
            ColumnDef::new("第三方订单号", ColumnKind::Identifier),
            ColumnDef::new("评论用户昵称", ColumnKind::Freeform),
            ColumnDef::new("评价等级", ColumnKind::Constant(FixedValue::ReviewGrade)),
            ColumnDef::new("星级", ColumnKind::Constant(FixedValue::StarRating)).centered(),
            ColumnDef::new("区域", ColumnKind::Constant(FixedValue::Region)),
            ColumnDef::new("券码", ColumnKind::Freeform),
            ColumnDef::new("评价内容", ColumnKind::Freeform),
            ColumnDef::new("评论时间", ColumnKind::Date),
        ],
        actions: vec![
            ActionButton::new("导出", ActionStyle::Default).with_icon(ActionIcon::Spreadsheet)
        ],
        row_actions: EDIT_AND_DELETE,
        pending_badge: None,
    }
}
