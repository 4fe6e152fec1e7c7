use crate::domain::a001_pizza_order::toppings::ToppingSelection;
use crate::domain::common::AggregateId;
use crate::enums::PizzaSize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор принятого заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self::new(Uuid::new_v4())
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Form fields
// ============================================================================

/// Поля формы, которые проходят валидацию схемой
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FullName,
    Size,
}

impl FormField {
    /// Имя поля в DOM и в JSON
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Size => "size",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Size => "Size",
        }
    }

    pub fn all() -> [FormField; 2] {
        [FormField::FullName, FormField::Size]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fullName" => Some(FormField::FullName),
            "size" => Some(FormField::Size),
            _ => None,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Значения формы заказа.
///
/// `size` хранится как код из `<select>` ("" пока размер не выбран), чтобы
/// схема могла отклонить любое значение вне S/M/L.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PizzaOrderDto {
    #[serde(rename = "fullName")]
    pub full_name: String,

    pub size: String,

    #[serde(default)]
    pub toppings: ToppingSelection,
}

impl PizzaOrderDto {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Size => &self.size,
        }
    }

    pub fn set_value(&mut self, field: FormField, value: String) {
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Size => self.size = value,
        }
    }

    /// Выбранный размер, если код валиден
    pub fn pizza_size(&self) -> Option<PizzaSize> {
        PizzaSize::from_code(&self.size)
    }

    /// Вернуть форму к начальному состоянию
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_pizza_order::toppings::ToppingId;

    #[test]
    fn test_order_id_string_is_the_uuid() {
        let id = OrderId::new_v4();
        assert_eq!(Uuid::parse_str(&id.as_string()).ok().map(OrderId::new), Some(id));
        assert_ne!(OrderId::new_v4(), id);
    }

    #[test]
    fn test_field_names() {
        for field in FormField::all() {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("toppings"), None);
    }

    #[test]
    fn test_set_value_and_reset() {
        let mut dto = PizzaOrderDto::default();
        dto.set_value(FormField::FullName, "Alice".into());
        dto.set_value(FormField::Size, "M".into());
        dto.toppings.toggle(ToppingId::PEPPERONI);

        assert_eq!(dto.value(FormField::FullName), "Alice");
        assert_eq!(dto.pizza_size(), Some(PizzaSize::Medium));

        dto.reset();
        assert_eq!(dto, PizzaOrderDto::default());
        assert!(dto.toppings.is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let mut dto = PizzaOrderDto {
            full_name: "Alice".into(),
            size: "M".into(),
            ..Default::default()
        };
        dto.toppings.toggle(ToppingId::PINEAPPLE);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["fullName"], "Alice");
        assert_eq!(json["size"], "M");
        assert_eq!(json["toppings"], serde_json::json!([3]));

        let parsed: PizzaOrderDto =
            serde_json::from_str(r#"{"fullName":"Bob","size":""}"#).unwrap();
        assert_eq!(parsed.full_name, "Bob");
        assert!(parsed.toppings.is_empty());
    }
}
