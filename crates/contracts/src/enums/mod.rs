pub mod pizza_size;

pub use pizza_size::PizzaSize;
