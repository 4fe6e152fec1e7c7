use super::FieldError;
use leptos::prelude::*;

/// Select with a leading "nothing chosen" option and inline validation message
#[component]
pub fn Select(
    /// Label text
    #[prop(into)]
    label: String,
    /// Field name; also used as the element id
    #[prop(into)]
    name: String,
    /// Current value ("" selects the placeholder option)
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: (value, label)
    options: Vec<(&'static str, &'static str)>,
    /// Text of the empty option
    #[prop(into)]
    placeholder: String,
    /// Validation message, empty when the field is fine
    #[prop(into)]
    error: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="input-group">
            <div>
                <label class="form__label" for=name.clone()>{label}</label>
                <br />
                <select
                    id=name.clone()
                    name=name
                    class="form__select"
                    prop:value=move || value.get()
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
                    {options
                        .into_iter()
                        .map(|(val, text)| {
                            view! {
                                <option value=val selected=move || value.get() == val>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <FieldError message=error />
        </div>
    }
}
