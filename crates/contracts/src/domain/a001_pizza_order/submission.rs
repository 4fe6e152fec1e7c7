//! Order submission: final validation and the confirmation sentence

use crate::domain::a001_pizza_order::aggregate::{FormField, OrderId, PizzaOrderDto};
use crate::domain::a001_pizza_order::schema::{OrderFormErrors, PIZZA_ORDER_SCHEMA, SIZE_INCORRECT};
use crate::enums::PizzaSize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Результат успешной отправки формы.
///
/// Создаётся заново при каждой отправке и никуда не передаётся.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub placed_at: DateTime<Utc>,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub size: PizzaSize,
    pub toppings: Vec<String>,
    pub message: String,
}

/// "no toppings" / "1 topping" / "N toppings"
pub fn toppings_phrase(count: usize) -> String {
    match count {
        0 => "no toppings".to_string(),
        1 => "1 topping".to_string(),
        n => format!("{} toppings", n),
    }
}

/// Проверить значения и сформировать подтверждение заказа.
///
/// Схема проверяется повторно: кнопка может оказаться активной по
/// устаревшему результату валидации.
pub fn submit(values: &PizzaOrderDto) -> Result<OrderConfirmation, OrderFormErrors> {
    let errors = PIZZA_ORDER_SCHEMA.validate(values);
    if !errors.is_empty() {
        return Err(errors);
    }

    let size = values.pizza_size().ok_or_else(|| {
        let mut errors = OrderFormErrors::default();
        errors.set(FormField::Size, SIZE_INCORRECT);
        errors
    })?;

    let full_name = values.full_name.trim().to_string();
    let message = format!(
        "Thank you for your order, {}! Your {} pizza with {} is on its way.",
        full_name,
        size,
        toppings_phrase(values.toppings.len()),
    );

    Ok(OrderConfirmation {
        order_id: OrderId::new_v4(),
        placed_at: Utc::now(),
        full_name,
        size,
        toppings: values.toppings.labels().into_iter().map(String::from).collect(),
        message,
    })
}
