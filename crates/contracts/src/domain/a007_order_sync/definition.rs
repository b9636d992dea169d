use crate::domain::common::{ActionButton, ColumnDef, FilterField, TabDefinition, EDIT_AND_DELETE};
use crate::enums::filter_kind::{SOURCE_OPTIONS, STATUS_OPTIONS, YES_NO_OPTIONS};
use crate::enums::{ActionStyle, BackofficeTab, ColumnKind};

/// 第三方订单同步管理
pub fn definition() -> TabDefinition {
    TabDefinition {
        tab: BackofficeTab::OrderSync,
        filters: vec![
            FilterField::select("录单状态", STATUS_OPTIONS),
            FilterField::select("录单失败处理状态", STATUS_OPTIONS),
            FilterField::text("处理用户名称"),
            FilterField::text("用户名"),
            FilterField::text("店铺名称"),
            FilterField::select("订单来源", SOURCE_OPTIONS),
            FilterField::text("系统订单号"),
            FilterField::text("商家订单号"),
            FilterField::select("是否多SKU订单", YES_NO_OPTIONS),
            FilterField::text("失败原因"),
            FilterField::date_range("创建时间"),
            FilterField::select("是否补单", YES_NO_OPTIONS),
        ],
        columns: vec![
            ColumnDef::new("订单来源", ColumnKind::Source),
            ColumnDef::new("重复订单来源", ColumnKind::Source),
            ColumnDef::new("系统订单号", ColumnKind::Identifier),
            ColumnDef::new("用户名", ColumnKind::Freeform),
            ColumnDef::new("商家订单号", ColumnKind::Identifier),
            ColumnDef::new("下单数量", ColumnKind::Freeform).centered(),
            ColumnDef::new("录单人", ColumnKind::Person),
            ColumnDef::new("录单状态", ColumnKind::Status),
            ColumnDef::new("录单失败原因", ColumnKind::Freeform),
            ColumnDef::new("录单失败处理人", ColumnKind::Person),
            ColumnDef::new("录单失败处理状态", ColumnKind::Status),
            ColumnDef::new("录单失败处理结果", ColumnKind::Freeform),
            ColumnDef::new("订单创建时间", ColumnKind::Date),
            ColumnDef::new("店铺名称", ColumnKind::ShopName),
            ColumnDef::new("虚拟号", ColumnKind::Freeform),
            ColumnDef::new("商家备注", ColumnKind::Freeform),
            ColumnDef::new("买家备注", ColumnKind::Freeform),
            ColumnDef::new("商品名称", ColumnKind::Freeform),
            ColumnDef::new("地址", ColumnKind::Freeform),
            ColumnDef::new("发票抬头", ColumnKind::Freeform),
            ColumnDef::new("纳税人识别号", ColumnKind::Person),
            ColumnDef::new("电子邮箱", ColumnKind::Freeform),
            ColumnDef::new("是否补单", ColumnKind::BooleanFlag),
        ],
        actions: vec![ActionButton::new("补录", ActionStyle::Primary)],
        row_actions: EDIT_AND_DELETE,
        pending_badge: None,
    }
}
