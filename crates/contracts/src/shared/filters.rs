//! Значения полей панели поиска.
//!
//! Хранятся только на время жизни раздела: при переключении вкладки
//! сбрасываются вместе с номером страницы.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::enums::filter_kind::SELECT_PLACEHOLDER;

/// Format produced by `<input type="date">`
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterValue {
    Text {
        value: String,
    },
    Choice {
        value: String,
    },
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text { value } => value.trim().is_empty(),
            FilterValue::Choice { value } => value.is_empty() || value == SELECT_PLACEHOLDER,
            FilterValue::DateRange { from, to } => from.is_none() && to.is_none(),
        }
    }
}

/// Parses the value of a native date input; anything else is treated as unset
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

/// Значения фильтров текущего раздела, по подписи поля
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterValues {
    values: BTreeMap<String, FilterValue>,
}

impl FilterValues {
    fn put(&mut self, label: &str, value: FilterValue) {
        if value.is_empty() {
            self.values.remove(label);
        } else {
            self.values.insert(label.to_string(), value);
        }
    }

    pub fn set_text(&mut self, label: &str, value: String) {
        self.put(label, FilterValue::Text { value });
    }

    pub fn set_choice(&mut self, label: &str, value: String) {
        self.put(label, FilterValue::Choice { value });
    }

    pub fn set_date_from(&mut self, label: &str, raw: &str) {
        let (_, to) = self.date_range(label);
        self.put(
            label,
            FilterValue::DateRange {
                from: parse_date_input(raw),
                to,
            },
        );
    }

    pub fn set_date_to(&mut self, label: &str, raw: &str) {
        let (from, _) = self.date_range(label);
        self.put(
            label,
            FilterValue::DateRange {
                from,
                to: parse_date_input(raw),
            },
        );
    }

    pub fn get(&self, label: &str) -> Option<&FilterValue> {
        self.values.get(label)
    }

    /// Current text or choice, empty when unset
    pub fn text(&self, label: &str) -> String {
        match self.values.get(label) {
            Some(FilterValue::Text { value }) | Some(FilterValue::Choice { value }) => {
                value.clone()
            }
            _ => String::new(),
        }
    }

    pub fn date_range(&self, label: &str) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match self.values.get(label) {
            Some(FilterValue::DateRange { from, to }) => (*from, *to),
            _ => (None, None),
        }
    }

    /// `from` later than `to`
    pub fn is_inverted(&self, label: &str) -> bool {
        matches!(self.date_range(label), (Some(from), Some(to)) if from > to)
    }

    /// Number of filled fields (badge on the filter panel)
    pub fn active_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_not_stored() {
        let mut filters = FilterValues::default();
        filters.set_text("店铺名称", "   ".to_string());
        filters.set_choice("是否新店", SELECT_PLACEHOLDER.to_string());
        filters.set_date_from("评论时间", "");
        assert!(filters.is_empty());

        filters.set_text("店铺名称", "今帮手".to_string());
        assert_eq!(filters.active_count(), 1);
        filters.set_text("店铺名称", String::new());
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_date_range_keeps_other_bound() {
        let mut filters = FilterValues::default();
        filters.set_date_from("评论时间", "2025-11-01");
        filters.set_date_to("评论时间", "2025-11-17");
        assert_eq!(
            filters.date_range("评论时间"),
            (
                NaiveDate::from_ymd_opt(2025, 11, 1),
                NaiveDate::from_ymd_opt(2025, 11, 17)
            )
        );
        assert!(!filters.is_inverted("评论时间"));

        filters.set_date_from("评论时间", "2025-12-01");
        assert!(filters.is_inverted("评论时间"));

        filters.set_date_from("评论时间", "not a date");
        assert_eq!(filters.date_range("评论时间").0, None);
        assert_eq!(filters.active_count(), 1);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut filters = FilterValues::default();
        filters.set_choice("订单来源", "京东".to_string());
        filters.set_date_to("创建时间", "2025-11-17");
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["订单来源"]["kind"], "choice");
        assert_eq!(json["订单来源"]["value"], "京东");
        assert_eq!(json["创建时间"]["to"], "2025-11-17");
        assert!(json["创建时间"]["from"].is_null());
    }
}
