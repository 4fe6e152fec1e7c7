//! Validation rules for form fields

use crate::shared::errors::{ValidationError, ValidationErrorKind};

/// Validation rules for a single string field.
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub trim: bool,
    pub min_length: Option<(usize, &'static str)>,
    pub max_length: Option<(usize, &'static str)>,
    pub one_of: Option<(&'static [&'static str], &'static str)>,
}

impl ValidationRules {
    /// Create empty validation rules (no constraints)
    pub const fn none() -> Self {
        Self {
            trim: false,
            min_length: None,
            max_length: None,
            one_of: None,
        }
    }

    /// Trim surrounding whitespace before any other rule runs
    pub const fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    pub const fn min_length(mut self, min: usize, message: &'static str) -> Self {
        self.min_length = Some((min, message));
        self
    }

    pub const fn max_length(mut self, max: usize, message: &'static str) -> Self {
        self.max_length = Some((max, message));
        self
    }

    pub const fn one_of(mut self, allowed: &'static [&'static str], message: &'static str) -> Self {
        self.one_of = Some((allowed, message));
        self
    }

    /// Validate a string value against the rules.
    ///
    /// Rules run in the order trim, min, max, one_of; the first failure wins.
    /// Lengths are counted in UTF-16 code units, the same unit the browser
    /// uses for `maxlength` and `String.length`.
    pub fn validate_string(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        let value = if self.trim { value.trim() } else { value };
        let len = value.encode_utf16().count();

        if let Some((min, message)) = self.min_length {
            if len < min {
                return Err(ValidationError::new(field, ValidationErrorKind::TooShort, message));
            }
        }

        if let Some((max, message)) = self.max_length {
            if len > max {
                return Err(ValidationError::new(field, ValidationErrorKind::TooLong, message));
            }
        }

        if let Some((allowed, message)) = self.one_of {
            if !allowed.contains(&value) {
                return Err(ValidationError::new(field, ValidationErrorKind::NotAllowed, message));
            }
        }

        Ok(())
    }
}
