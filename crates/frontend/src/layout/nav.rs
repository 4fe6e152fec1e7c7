use crate::routes::routes::{HOME_PATH, ORDER_PATH};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// CSS class for a nav link: `"active"` when `href` is the current page.
///
/// A trailing slash on the current path is ignored, so `/order/` still
/// highlights the Order link.
pub fn nav_class(pathname: &str, href: &str) -> &'static str {
    let normalized = match pathname.trim_end_matches('/') {
        "" => "/",
        p => p,
    };
    if normalized == href {
        "active"
    } else {
        ""
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav>
            <a href=HOME_PATH class=move || nav_class(&pathname.get(), HOME_PATH)>
                "Home"
            </a>
            <a href=ORDER_PATH class=move || nav_class(&pathname.get(), ORDER_PATH)>
                "Order"
            </a>
        </nav>
    }
}
