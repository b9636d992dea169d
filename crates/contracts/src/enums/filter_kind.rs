use serde::{Deserialize, Serialize};

/// Placeholder option shown first in every select filter
pub const SELECT_PLACEHOLDER: &str = "请选择";

/// Input widget of a search filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FilterKind {
    /// Two native date inputs: from / to
    DateRange,
    /// Dropdown with fixed options (placeholder not included)
    Select(&'static [&'static str]),
    /// Free text input
    Text,
}

pub const YES_NO_OPTIONS: &[&str] = &["是", "否"];
pub const STATUS_OPTIONS: &[&str] = &["完成", "待处理"];
pub const SOURCE_OPTIONS: &[&str] = &["京东", "拼多多"];
pub const REVIEW_GRADE_OPTIONS: &[&str] = &["好评", "中评", "差评"];

impl FilterKind {
    pub fn is_date_range(&self) -> bool {
        matches!(self, FilterKind::DateRange)
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FilterKind::Select(options) => options,
            _ => &[],
        }
    }
}
