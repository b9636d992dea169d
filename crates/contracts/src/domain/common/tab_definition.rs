use crate::enums::{ActionIcon, ActionStyle, BackofficeTab, CellAlign, ColumnKind, FilterKind};
use serde::Serialize;

/// Поле панели поиска
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterField {
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterField {
    pub fn text(label: &'static str) -> Self {
        Self {
            label,
            kind: FilterKind::Text,
        }
    }

    pub fn select(label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            label,
            kind: FilterKind::Select(options),
        }
    }

    pub fn date_range(label: &'static str) -> Self {
        Self {
            label,
            kind: FilterKind::DateRange,
        }
    }
}

/// Колонка таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub label: &'static str,
    pub kind: ColumnKind,
    pub align: CellAlign,
}

impl ColumnDef {
    pub fn new(label: &'static str, kind: ColumnKind) -> Self {
        Self {
            label,
            kind,
            align: CellAlign::Left,
        }
    }

    /// Counters and ratings are centred
    pub fn centered(mut self) -> Self {
        self.align = CellAlign::Center;
        self
    }

    /// Long headers get a wider minimum width
    pub fn is_wide(&self) -> bool {
        self.label.chars().count() > 8
    }
}

/// Кнопка панели действий раздела (без обработчика)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub label: &'static str,
    pub style: ActionStyle,
    pub icon: Option<ActionIcon>,
}

impl ActionButton {
    pub fn new(label: &'static str, style: ActionStyle) -> Self {
        Self {
            label,
            style,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: ActionIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Links in the frozen "操作" column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowActions {
    pub primary_label: &'static str,
    pub deletable: bool,
}

/// Counter chip next to the action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingBadge {
    pub label: &'static str,
    pub count: u32,
}

/// Описание раздела: фильтры, колонки, кнопки.
///
/// Создаётся один раз в реестре и дальше только читается.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabDefinition {
    pub tab: BackofficeTab,
    pub filters: Vec<FilterField>,
    pub columns: Vec<ColumnDef>,
    pub actions: Vec<ActionButton>,
    pub row_actions: RowActions,
    pub pending_badge: Option<PendingBadge>,
}

impl TabDefinition {
    pub fn column_labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }

    pub fn filter_labels(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.label).collect()
    }

    pub fn action_labels(&self) -> Vec<&'static str> {
        self.actions.iter().map(|a| a.label).collect()
    }

    pub fn column(&self, label: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.label == label)
    }

    pub fn filter(&self, label: &str) -> Option<&FilterField> {
        self.filters.iter().find(|f| f.label == label)
    }
}

/// Row actions shared by every "…管理" tab
pub const EDIT_AND_DELETE: RowActions = RowActions {
    primary_label: "修改",
    deletable: true,
};

/// Row actions of read-mostly tabs
pub const DETAILS_AND_DELETE: RowActions = RowActions {
    primary_label: "详情",
    deletable: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_column_threshold() {
        assert!(!ColumnDef::new("店铺名称", ColumnKind::ShopName).is_wide());
        assert!(!ColumnDef::new("店铺对应的订单来", ColumnKind::Source).is_wide());
        assert!(ColumnDef::new("店铺对应的订单来源", ColumnKind::Source).is_wide());
    }

    #[test]
    fn test_centered_builder() {
        let col = ColumnDef::new("好评数量", ColumnKind::Freeform).centered();
        assert_eq!(col.align, CellAlign::Center);
        assert_eq!(ColumnDef::new("券码", ColumnKind::Freeform).align, CellAlign::Left);
    }
}
