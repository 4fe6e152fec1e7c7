use leptos::prelude::*;

/// Form submit button
#[component]
pub fn Button(
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="button button--primary"
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
