pub mod aggregate;
pub mod schema;
pub mod submission;
pub mod toppings;

pub use aggregate::{FormField, OrderId, PizzaOrderDto};
pub use schema::{OrderFormErrors, OrderSchema, PIZZA_ORDER_SCHEMA};
pub use submission::{submit, toppings_phrase, OrderConfirmation};
pub use toppings::{Topping, ToppingId, ToppingSelection, TOPPINGS};
