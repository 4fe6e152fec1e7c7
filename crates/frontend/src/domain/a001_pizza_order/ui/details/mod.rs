//! Pizza Order form UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: async validation pass and stale-pass tracking
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::PizzaOrderDetails;
