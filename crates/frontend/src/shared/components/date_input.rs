use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser renders the value in its locale format; the model keeps yyyy-mm-dd
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format (empty when unset)
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    /// Marks the input red (e.g. inverted range)
    #[prop(optional, into)]
    invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class=move || {
                if invalid.get() {
                    "filter-field__date filter-field__date--invalid"
                } else {
                    "filter-field__date"
                }
            }
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
