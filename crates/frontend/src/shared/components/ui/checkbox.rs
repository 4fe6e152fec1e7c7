use leptos::prelude::*;

/// Labelled checkbox
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// `name` attribute, identifies the option
    #[prop(into)]
    name: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler, receives the new checked state
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox-label">
            <input
                name=name
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            {label}
            <br />
        </label>
    }
}
