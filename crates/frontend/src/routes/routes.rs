use crate::domain::a001_pizza_order::ui::details::PizzaOrderDetails;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

pub const HOME_PATH: &str = "/";
pub const ORDER_PATH: &str = "/order";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/order") view=PizzaOrderDetails />
        </Routes>
    }
}
