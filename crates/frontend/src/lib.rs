pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Console log level: everything in dev builds, order events and up in release
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Mount the pizza shop into `<body>`; Trunk calls this through `start`
#[wasm_bindgen]
pub fn mount_pizza_shop() {
    // A second init (hot reload) fails harmlessly: the logger is already set.
    if console_log::init_with_level(log_level()).is_err() {
        log::debug!("console logger already initialised");
    }
    console_error_panic_hook::set_once();

    log::info!("pizza order form starting, log level {}", log_level());
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    mount_pizza_shop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_follows_build_profile() {
        assert_eq!(log_level() == log::Level::Debug, cfg!(debug_assertions));
        assert!(log_level() >= log::Level::Info);
    }
}
