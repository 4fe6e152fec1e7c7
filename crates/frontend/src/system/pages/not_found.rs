use crate::routes::routes::HOME_PATH;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <a href=HOME_PATH>"Back to home"</a>
        </div>
    }
}
