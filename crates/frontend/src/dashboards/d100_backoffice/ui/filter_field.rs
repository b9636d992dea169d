use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Input, Select};
use chrono::NaiveDate;
use contracts::domain::common::FilterField;
use contracts::enums::FilterKind;
use contracts::shared::filters::DATE_INPUT_FORMAT;
use leptos::prelude::*;

fn date_to_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// One search field; the widget follows the field's `FilterKind`
#[component]
pub fn FilterFieldInput(field: FilterField) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let label = field.label;

    match field.kind {
        FilterKind::DateRange => view! {
            <div class="filter-field filter-field--range">
                <span class="filter-field__label">{label}</span>
                <div class="filter-field__range">
                    <DateInput
                        value=Signal::derive(move || {
                            ctx.state.with(|s| date_to_input(s.filters.date_range(label).0))
                        })
                        on_change=move |raw: String| ctx.set_date_from(label, &raw)
                        invalid=Signal::derive(move || ctx.state.with(|s| s.filters.is_inverted(label)))
                    />
                    <span class="filter-field__range-sep">"-"</span>
                    <DateInput
                        value=Signal::derive(move || {
                            ctx.state.with(|s| date_to_input(s.filters.date_range(label).1))
                        })
                        on_change=move |raw: String| ctx.set_date_to(label, &raw)
                        invalid=Signal::derive(move || ctx.state.with(|s| s.filters.is_inverted(label)))
                    />
                </div>
            </div>
        }
        .into_any(),
        FilterKind::Select(options) => view! {
            <Select
                label=label
                value=Signal::derive(move || ctx.state.with(|s| s.filters.text(label)))
                on_change=Callback::new(move |v: String| ctx.set_choice_filter(label, v))
                options=options
            />
        }
        .into_any(),
        FilterKind::Text => view! {
            <Input
                label=label
                value=Signal::derive(move || ctx.state.with(|s| s.filters.text(label)))
                on_input=Callback::new(move |v: String| ctx.set_text_filter(label, v))
            />
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_to_input() {
        assert_eq!(date_to_input(NaiveDate::from_ymd_opt(2025, 11, 7)), "2025-11-07");
        assert_eq!(date_to_input(None), "");
    }
}
