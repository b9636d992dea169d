use serde::{Deserialize, Serialize};

/// How a table column is filled with placeholder data.
///
/// Assigned once when a tab definition is authored; the row generator
/// matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Synthetic timestamp
    Date,
    /// 是 / 否
    BooleanFlag,
    /// 完成 / 待处理
    Status,
    /// Responsible person, operator, clerk
    Person,
    ShopName,
    /// Platform or order source
    Source,
    /// Monetary amount, two decimals
    Amount,
    /// Store id, order number, sku id
    Identifier,
    Constant(FixedValue),
    Freeform,
}

/// Columns that always show the same value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixedValue {
    StarRating,
    ReviewGrade,
    Region,
}

impl FixedValue {
    pub fn value(&self) -> &'static str {
        match self {
            FixedValue::StarRating => "5",
            FixedValue::ReviewGrade => "好评",
            FixedValue::Region => "赣州市",
        }
    }
}

/// Horizontal alignment of body cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellAlign {
    #[default]
    Left,
    Center,
}

impl CellAlign {
    pub fn css_class(&self) -> &'static str {
        match self {
            CellAlign::Left => "",
            CellAlign::Center => "backoffice-table__cell--center",
        }
    }
}
