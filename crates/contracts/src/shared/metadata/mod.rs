//! Declarative field rules
//!
//! Rules are `const`-constructible so a whole form schema can live in a
//! `static` and be checked without allocation until a rule fails.
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::metadata::ValidationRules;
//!
//! const NAME: ValidationRules = ValidationRules::none()
//!     .trimmed()
//!     .min_length(3, "too short");
//!
//! assert!(NAME.validate_string("name", "  Bo  ").is_err());
//! assert!(NAME.validate_string("name", "Bob").is_ok());
//! ```

mod validation;

pub use validation::ValidationRules;
