//! Validation schema of the pizza order form

use crate::domain::a001_pizza_order::aggregate::{FormField, PizzaOrderDto};
use crate::enums::PizzaSize;
use crate::shared::errors::ValidationError;
use crate::shared::metadata::ValidationRules;

pub const FULL_NAME_TOO_SHORT: &str = "full name must be at least 3 characters";
pub const FULL_NAME_TOO_LONG: &str = "full name must be at most 20 characters";
pub const SIZE_INCORRECT: &str = "size must be S or M or L";

/// Правила для каждого валидируемого поля формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSchema {
    pub full_name: ValidationRules,
    pub size: ValidationRules,
}

/// Схема формы заказа пиццы
pub static PIZZA_ORDER_SCHEMA: OrderSchema = OrderSchema::pizza();

impl OrderSchema {
    pub const fn pizza() -> Self {
        Self {
            full_name: ValidationRules::none()
                .trimmed()
                .min_length(3, FULL_NAME_TOO_SHORT)
                .max_length(20, FULL_NAME_TOO_LONG),
            size: ValidationRules::none()
                .trimmed()
                .one_of(PizzaSize::CODES, SIZE_INCORRECT),
        }
    }

    pub fn rules(&self, field: FormField) -> &ValidationRules {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Size => &self.size,
        }
    }

    /// Проверка одного изменившегося поля
    pub fn validate_field(&self, field: FormField, value: &str) -> Result<(), ValidationError> {
        self.rules(field).validate_string(field.name(), value)
    }

    /// Полный проход по всем полям
    pub fn validate(&self, values: &PizzaOrderDto) -> OrderFormErrors {
        let mut errors = OrderFormErrors::default();
        for field in FormField::all() {
            errors.apply(field, self.validate_field(field, values.value(field)));
        }
        errors
    }

    /// Можно ли отправлять форму. Топпинги не ограничены.
    pub fn is_valid(&self, values: &PizzaOrderDto) -> bool {
        FormField::all()
            .into_iter()
            .all(|field| self.validate_field(field, values.value(field)).is_ok())
    }
}

/// Сообщения об ошибках по полям; пустая строка означает "ошибки нет"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderFormErrors {
    pub full_name: String,
    pub size: String,
}

impl OrderFormErrors {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Size => &self.size,
        }
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        let slot = match field {
            FormField::FullName => &mut self.full_name,
            FormField::Size => &mut self.size,
        };
        *slot = message.into();
    }

    pub fn clear(&mut self, field: FormField) {
        self.set(field, String::new());
    }

    /// Set or clear the message of `field` from a validation outcome
    pub fn apply(&mut self, field: FormField, outcome: Result<(), ValidationError>) {
        match outcome {
            Ok(()) => self.clear(field),
            Err(e) => self.set(field, e.message),
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::all().iter().all(|f| self.get(*f).is_empty())
    }
}
