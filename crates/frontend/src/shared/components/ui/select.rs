use contracts::enums::filter_kind::SELECT_PLACEHOLDER;
use leptos::prelude::*;

/// Select with an inline label; the first option is always "请选择"
#[component]
pub fn Select(
    /// Label text
    #[prop(into)]
    label: String,
    /// Current value (empty = placeholder)
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options besides the placeholder
    options: &'static [&'static str],
) -> impl IntoView {
    let is_placeholder = move || value.get().is_empty();

    view! {
        <div class="filter-field">
            <span class="filter-field__label">{label}</span>
            <select
                class=move || {
                    if is_placeholder() {
                        "filter-field__select filter-field__select--placeholder"
                    } else {
                        "filter-field__select"
                    }
                }
                prop:value=move || {
                    let v = value.get();
                    if v.is_empty() { SELECT_PLACEHOLDER.to_string() } else { v }
                }
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value=SELECT_PLACEHOLDER>{SELECT_PLACEHOLDER}</option>
                {options.iter().map(|&opt| view! {
                    <option value=opt>{opt}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
