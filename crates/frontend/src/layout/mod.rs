pub mod nav;

use leptos::prelude::*;
use nav::Nav;

/// Application shell.
///
/// ```text
/// +-------------------------+
/// |  Nav: Home | Order      |
/// +-------------------------+
/// |  routed page            |
/// +-------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div id="app">
            <Nav />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
