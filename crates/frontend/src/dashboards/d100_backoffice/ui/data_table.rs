use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::common::ColumnDef;
use contracts::enums::{BackofficeTab, ColumnKind, FixedValue};
use contracts::shared::mock_rows::{MockRow, PLACEHOLDER};
use contracts::shared::tab_registry::lookup;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

fn header_class(col: &ColumnDef) -> &'static str {
    if col.is_wide() {
        "backoffice-table__header-cell backoffice-table__header-cell--wide"
    } else {
        "backoffice-table__header-cell"
    }
}

fn row_class(index_on_page: usize) -> &'static str {
    if index_on_page % 2 == 1 {
        "backoffice-table__row backoffice-table__row--striped"
    } else {
        "backoffice-table__row"
    }
}

fn cell_view(col: &ColumnDef, row: &MockRow) -> AnyView {
    let value = row.get(col.label).unwrap_or(PLACEHOLDER).to_string();
    let class = format!("backoffice-table__cell {}", col.align.css_class());
    match col.kind {
        ColumnKind::Constant(FixedValue::ReviewGrade) => view! {
            <td class=class>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{value}</Badge>
            </td>
        }
        .into_any(),
        _ => {
            let title = value.clone();
            view! { <td class=class title=title>{value}</td> }.into_any()
        }
    }
}

/// Table of the active tab: "序号", configured columns, frozen "操作".
///
/// Header and body are both driven by the active definition's column list.
#[component]
pub fn DataTable(#[prop(into)] active_tab: Signal<BackofficeTab>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let header = move || {
        lookup(active_tab.get())
            .columns
            .iter()
            .map(|col| view! { <th class=header_class(col)>{col.label}</th> })
            .collect_view()
    };

    let body = move || {
        let def = lookup(active_tab.get());
        let (range, first_number) = ctx.state.with(|s| {
            let total = ctx.rows.with(|rows| rows.len());
            (s.visible_range(total), s.row_number(0))
        });
        let row_actions = def.row_actions;

        ctx.rows.with(|rows| {
            rows[range]
                .iter()
                .enumerate()
                .map(|(idx, row)| {
                    let cells = def.columns.iter().map(|col| cell_view(col, row)).collect_view();
                    view! {
                        <tr class=row_class(idx)>
                            <td class="backoffice-table__cell backoffice-table__cell--number">
                                {first_number + idx}
                            </td>
                            {cells}
                            <td class="backoffice-table__cell backoffice-table__cell--actions">
                                <div class="row-actions">
                                    <button class="row-actions__link">{row_actions.primary_label}</button>
                                    {row_actions.deletable.then(|| view! {
                                        <button class="row-actions__link row-actions__link--danger">
                                            {icon("trash")}
                                            "删除"
                                        </button>
                                    })}
                                </div>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="backoffice-table__scroll">
            <table class="backoffice-table">
                <thead class="backoffice-table__head">
                    <tr>
                        <th class="backoffice-table__header-cell backoffice-table__header-cell--number">"序号"</th>
                        {header}
                        <th class="backoffice-table__header-cell backoffice-table__header-cell--actions">"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    {body}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_class_by_label_length() {
        let def = lookup(BackofficeTab::ShopManagement);
        let classes: Vec<bool> = def
            .columns
            .iter()
            .map(|c| header_class(c).ends_with("--wide"))
            .collect();
        assert_eq!(classes, vec![false, false, false, false, false, true, false, false]);
    }

    #[test]
    fn test_row_striping() {
        assert_eq!(row_class(0), "backoffice-table__row");
        assert!(row_class(1).ends_with("--striped"));
    }
}
