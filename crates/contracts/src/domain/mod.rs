pub mod a001_pizza_order;
pub mod common;
