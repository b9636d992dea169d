//! Генератор строк-заглушек для таблиц разделов.
//!
//! Значение ячейки определяется только типом колонки и индексом строки;
//! исключение — денежные суммы, они случайные.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use serde::Serialize;

use crate::domain::common::TabDefinition;
use crate::enums::ColumnKind;

/// Rows produced per tab
pub const ROWS_PER_TAB: usize = 20;

/// Shown for columns without a synthetic rule
pub const PLACEHOLDER: &str = "--";

const PERSONS: [&str; 3] = ["管理员", "廖林峰", "何旺1"];

const SHOP_NAMES: [&str; 4] = [
    "鲸佳家家庭服务官方旗舰店",
    "极修辣家庭维修旗舰店",
    "帮帮佳BSKA旗舰店",
    "今帮手旗舰店",
];

const SOURCES: [&str; 2] = ["京东", "拼多多"];
const FLAGS: [&str; 2] = ["是", "否"];
const STATUSES: [&str; 2] = ["完成", "待处理"];

const IDENTIFIER_BASE: u64 = 13_444_998;
/// Exclusive upper bound of synthetic amounts, in cents (500.00)
const AMOUNT_UPPER_CENTS: u32 = 50_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockCell {
    pub column: &'static str,
    pub value: String,
}

/// Строка-заглушка: синтетический id и по ячейке на каждую колонку раздела
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockRow {
    /// 1-based
    pub id: usize,
    pub cells: Vec<MockCell>,
}

impl MockRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|c| c.column)
    }
}

/// Base moment of the synthetic timeline: 2025-11-17 17:10:00
fn timeline_origin() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2025, 11, 17)?.and_hms_opt(17, 10, 0)
}

/// Steps back one day per row (cycle of 10) and forward `i` minutes and
/// `i % 60` seconds.
fn synthetic_timestamp(i: usize) -> String {
    let Some(origin) = timeline_origin() else {
        return PLACEHOLDER.to_string();
    };
    let moment = origin - Duration::days((i % 10) as i64)
        + Duration::minutes(i as i64)
        + Duration::seconds((i % 60) as i64);
    moment.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_cents(cents: u32) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn alternate(pair: &[&'static str; 2], i: usize) -> &'static str {
    pair[i % 2]
}

/// Value of one cell for row index `i`
pub fn cell_value<R: Rng>(kind: ColumnKind, i: usize, rng: &mut R) -> String {
    match kind {
        ColumnKind::Date => synthetic_timestamp(i),
        ColumnKind::BooleanFlag => alternate(&FLAGS, i).to_string(),
        ColumnKind::Status => alternate(&STATUSES, i).to_string(),
        ColumnKind::Person => PERSONS[i % PERSONS.len()].to_string(),
        ColumnKind::ShopName => SHOP_NAMES[i % SHOP_NAMES.len()].to_string(),
        ColumnKind::Source => alternate(&SOURCES, i).to_string(),
        ColumnKind::Amount => format_cents(rng.gen_range(0..AMOUNT_UPPER_CENTS)),
        ColumnKind::Identifier => (IDENTIFIER_BASE + i as u64).to_string(),
        ColumnKind::Constant(fixed) => fixed.value().to_string(),
        ColumnKind::Freeform => PLACEHOLDER.to_string(),
    }
}

/// One row for index `i` (0-based)
pub fn generate_row<R: Rng>(def: &TabDefinition, i: usize, rng: &mut R) -> MockRow {
    MockRow {
        id: i + 1,
        cells: def
            .columns
            .iter()
            .map(|col| MockCell {
                column: col.label,
                value: cell_value(col.kind, i, rng),
            })
            .collect(),
    }
}

/// `ROWS_PER_TAB` rows drawing amounts from `rng`
pub fn generate_with<R: Rng>(def: &TabDefinition, rng: &mut R) -> Vec<MockRow> {
    (0..ROWS_PER_TAB).map(|i| generate_row(def, i, rng)).collect()
}

/// `ROWS_PER_TAB` rows with thread-local randomness for amounts
pub fn generate(def: &TabDefinition) -> Vec<MockRow> {
    let rows = generate_with(def, &mut rand::thread_rng());
    log::debug!("generated {} mock rows for {}", rows.len(), def.tab);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{BackofficeTab, FixedValue};
    use crate::shared::tab_registry::{definitions, lookup};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn non_amount_values(def: &TabDefinition, rows: &[MockRow]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| {
                def.columns
                    .iter()
                    .filter(|c| c.kind != ColumnKind::Amount)
                    .map(|c| row.get(c.label).unwrap_or_default().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_every_tab_gets_twenty_complete_rows() {
        for def in definitions() {
            let rows = generate(def);
            assert_eq!(rows.len(), ROWS_PER_TAB);
            for (i, row) in rows.iter().enumerate() {
                assert_eq!(row.id, i + 1);
                let keys: Vec<&str> = row.columns().collect();
                assert_eq!(keys, def.column_labels(), "row {} of {}", i, def.tab);
            }
        }
    }

    #[test]
    fn test_non_amount_cells_are_deterministic() {
        for def in definitions() {
            let first = generate_with(def, &mut StdRng::seed_from_u64(1));
            let second = generate_with(def, &mut StdRng::seed_from_u64(2));
            assert_eq!(non_amount_values(def, &first), non_amount_values(def, &second));
        }
    }

    #[test]
    fn test_person_cycle() {
        let def = lookup(BackofficeTab::ShopManagement);
        let rows = generate(def);
        let owners: Vec<&str> = rows.iter().take(4).filter_map(|r| r.get("店铺负责人")).collect();
        assert_eq!(owners, vec!["管理员", "廖林峰", "何旺1", "管理员"]);
    }

    #[test]
    fn test_yes_no_alternates() {
        for def in definitions() {
            let rows = generate(def);
            for col in def.columns.iter().filter(|c| c.label.starts_with("是否")) {
                for (i, row) in rows.iter().enumerate() {
                    let expected = if i % 2 == 0 { "是" } else { "否" };
                    assert_eq!(row.get(col.label), Some(expected));
                }
            }
        }
    }

    #[test]
    fn test_status_pair_differs_from_flag_pair() {
        let rows = generate(lookup(BackofficeTab::JdOrders));
        assert_eq!(rows[0].get("订单状态"), Some("完成"));
        assert_eq!(rows[1].get("订单状态"), Some("待处理"));
    }

    #[test]
    fn test_timestamps_match_reference_format() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(cell_value(ColumnKind::Date, 0, &mut rng), "2025-11-17 17:10:00");
        assert_eq!(cell_value(ColumnKind::Date, 3, &mut rng), "2025-11-14 17:13:03");
        assert_eq!(cell_value(ColumnKind::Date, 12, &mut rng), "2025-11-15 17:22:12");
        assert_eq!(cell_value(ColumnKind::Date, 19, &mut rng), "2025-11-08 17:29:19");
        // beyond the generated range minutes roll over instead of overflowing
        assert_eq!(cell_value(ColumnKind::Date, 55, &mut rng), "2025-11-12 18:05:55");
    }

    #[test]
    fn test_cyclic_and_fixed_values() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(cell_value(ColumnKind::ShopName, 5, &mut rng), "极修辣家庭维修旗舰店");
        assert_eq!(cell_value(ColumnKind::Source, 1, &mut rng), "拼多多");
        assert_eq!(cell_value(ColumnKind::Identifier, 0, &mut rng), "13444998");
        assert_eq!(cell_value(ColumnKind::Identifier, 19, &mut rng), "13445017");
        assert_eq!(
            cell_value(ColumnKind::Constant(FixedValue::StarRating), 4, &mut rng),
            "5"
        );
        assert_eq!(
            cell_value(ColumnKind::Constant(FixedValue::Region), 9, &mut rng),
            "赣州市"
        );
        assert_eq!(cell_value(ColumnKind::Freeform, 2, &mut rng), PLACEHOLDER);
    }

    #[test]
    fn test_cents_formatting_stays_below_upper_bound() {
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(7), "0.07");
        assert_eq!(format_cents(12_340), "123.40");
        assert_eq!(format_cents(AMOUNT_UPPER_CENTS - 1), "499.99");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_row_id_is_one_based_for_any_index() {
        let def = lookup(BackofficeTab::ShopManagement);
        let mut rng = StdRng::seed_from_u64(3);
        let far = u32::MAX as usize + 5;
        assert_eq!(generate_row(def, 0, &mut rng).id, 1);
        assert_eq!(generate_row(def, far, &mut rng).id, far + 1);
    }

    #[test]
    fn test_amounts_in_range_with_two_decimals() {
        let def = lookup(BackofficeTab::JdOrders);
        for row in generate(def) {
            for label in ["订单原价(元)", "结算金额(元)"] {
                let value = row.get(label).unwrap();
                let (_, frac) = value.split_once('.').unwrap();
                assert_eq!(frac.len(), 2, "{}", value);
                let parsed: f64 = value.parse().unwrap();
                assert!((0.0..500.0).contains(&parsed), "{}", value);
            }
        }
    }
}
