use super::FieldError;
use leptos::prelude::*;

/// Text input with label and inline validation message
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// Field name; also used as the element id
    #[prop(into)]
    name: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Validation message, empty when the field is fine
    #[prop(into)]
    error: Signal<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="input-group">
            <div>
                <label class="form__label" for=name.clone()>{label}</label>
                <br />
                <input
                    id=name.clone()
                    name=name
                    class="form__input"
                    type="text"
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
            <FieldError message=error />
        </div>
    }
}
