pub mod button;
pub mod checkbox;
pub mod input;
pub mod select;

pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::Select;

use leptos::prelude::*;

/// Inline field error; renders nothing for an empty message
#[component]
pub fn FieldError(#[prop(into)] message: Signal<String>) -> impl IntoView {
    move || {
        let text = message.get();
        (!text.is_empty()).then(|| view! { <div class="error">{text}</div> })
    }
}
