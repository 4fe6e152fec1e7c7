pub mod errors;
pub mod metadata;
