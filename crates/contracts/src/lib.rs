//! Contracts for the pizza order form: catalog, schema and submission rules.
//!
//! Everything here is plain Rust with no browser dependencies, so the
//! frontend and the unit tests share exactly the same rules.

pub mod domain;
pub mod enums;
pub mod shared;
