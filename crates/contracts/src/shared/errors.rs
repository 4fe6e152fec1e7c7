use thiserror::Error;

/// Какое правило схемы не прошло
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    TooShort,
    TooLong,
    NotAllowed,
}

/// Ошибка валидации одного поля формы.
///
/// `Display` отдаёт ровно то сообщение, которое показывается под полем.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}
