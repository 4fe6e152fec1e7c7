use crate::routes::routes::ORDER_PATH;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h2>"Welcome to Bloom Pizza!"</h2>
            <p>"Hand-stretched dough, five classic toppings, three sizes."</p>
            <a class="button button--primary" href=ORDER_PATH>"Order now"</a>
        </div>
    }
}
