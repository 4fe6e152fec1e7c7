use super::model::{self, PassTracker};
use contracts::domain::a001_pizza_order::{submit, FormField, OrderFormErrors, PizzaOrderDto, ToppingId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

pub const FAILURE_MESSAGE: &str = "Something went wrong";

/// ViewModel for the pizza order form
#[derive(Clone, Copy)]
pub struct PizzaOrderViewModel {
    pub form: RwSignal<PizzaOrderDto>,
    pub errors: RwSignal<OrderFormErrors>,
    pub enabled: RwSignal<bool>,
    pub success: RwSignal<Option<String>>,
    pub failure: RwSignal<Option<String>>,
    touched: StoredValue<Vec<FormField>>,
    passes: StoredValue<PassTracker>,
}

impl PizzaOrderViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PizzaOrderDto::default()),
            errors: RwSignal::new(OrderFormErrors::default()),
            enabled: RwSignal::new(false),
            success: RwSignal::new(None),
            failure: RwSignal::new(None),
            touched: StoredValue::new(Vec::new()),
            passes: StoredValue::new(PassTracker::default()),
        }
    }

    pub fn field_value(&self, field: FormField) -> impl Fn() -> String + Send + Sync + 'static {
        let form = self.form;
        move || form.with(|f| f.value(field).to_string())
    }

    pub fn field_error(&self, field: FormField) -> impl Fn() -> String + Send + Sync + 'static {
        let errors = self.errors;
        move || errors.with(|e| e.get(field).to_string())
    }

    pub fn is_topping_selected(&self, id: ToppingId) -> impl Fn() -> bool + Send + Sync + 'static {
        let form = self.form;
        move || form.with(|f| f.toppings.is_selected(id))
    }

    /// Text input / select change
    pub fn change_field(&self, field: FormField, value: String) {
        log::debug!("field '{}' changed", field.name());
        self.form.update(|f| f.set_value(field, value));
        self.touched.update_value(|touched| {
            if !touched.contains(&field) {
                touched.push(field);
            }
        });
        self.failure.set(None);
        self.revalidate();
    }

    /// Checkbox change; toggles only when the DOM state differs from ours
    pub fn set_topping(&self, id: ToppingId, checked: bool) {
        self.form.update(|f| {
            if f.toppings.is_selected(id) != checked {
                let selected = f.toppings.toggle(id);
                log::debug!("topping {} selected={}", id.topping().label, selected);
            }
        });
        self.revalidate();
    }

    /// Spawn a validation pass for the current values.
    /// A pass that finishes after a newer one was issued is dropped.
    fn revalidate(&self) {
        self.passes.update_value(|p| {
            p.issue();
        });
        let ticket = self.passes.with_value(|p| p.current());
        let values = self.form.get_untracked();
        let touched = self.touched.get_value();

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let pass = model::validate_async(ticket, values, touched).await;
            if !this.passes.with_value(|p| p.is_current(pass.ticket)) {
                log::debug!("discarding stale validation pass {:?}", pass.ticket);
                return;
            }
            this.errors.set(pass.errors);
            this.enabled.set(pass.enabled);
        });
    }

    /// Submit the form: confirm and reset, or show why it was rejected
    pub fn submit_command(&self) {
        let current = self.form.get_untracked();

        match submit(&current) {
            Ok(confirmation) => {
                log::info!(
                    "order {} accepted: {}",
                    confirmation.order_id.as_string(),
                    serde_json::to_string(&current).unwrap_or_default()
                );
                self.success.set(Some(confirmation.message));
                self.failure.set(None);
                self.reset();
            }
            Err(errors) => {
                log::warn!("order rejected: {:?}", errors);
                self.touched.update_value(|touched| *touched = FormField::all().to_vec());
                self.errors.set(errors);
                self.enabled.set(false);
                self.success.set(None);
                self.failure.set(Some(FAILURE_MESSAGE.to_string()));
            }
        }
    }

    /// Back to the initial state. In-flight passes are invalidated so they
    /// cannot re-enable the submit button.
    pub fn reset(&self) {
        self.passes.update_value(|p| {
            p.issue();
        });
        self.form.update(|f| f.reset());
        self.errors.set(OrderFormErrors::default());
        self.touched.update_value(|touched| touched.clear());
        self.enabled.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_pizza_order::schema::{FULL_NAME_TOO_SHORT, SIZE_INCORRECT};

    fn with_vm(test: impl FnOnce(PizzaOrderViewModel)) {
        let owner = Owner::new();
        owner.with(|| test(PizzaOrderViewModel::new()));
    }

    #[test]
    fn test_valid_submit_confirms_and_resets() {
        with_vm(|vm| {
            vm.form.update(|f| {
                f.full_name = "Alice".into();
                f.size = "M".into();
                f.toppings.toggle(ToppingId::PEPPERONI);
                f.toppings.toggle(ToppingId::PINEAPPLE);
            });
            vm.enabled.set(true);
            vm.failure.set(Some(FAILURE_MESSAGE.to_string()));

            vm.submit_command();

            let success = vm.success.get_untracked().unwrap_or_default();
            assert!(success.contains("Medium"));
            assert!(success.contains("2 toppings"));
            assert_eq!(vm.failure.get_untracked(), None);
            assert_eq!(vm.form.get_untracked(), PizzaOrderDto::default());
            assert!(vm.form.with_untracked(|f| f.toppings.is_empty()));
            assert!(vm.errors.get_untracked().is_empty());
            assert!(!vm.enabled.get_untracked());
        });
    }

    #[test]
    fn test_invalid_submit_shows_failure() {
        with_vm(|vm| {
            vm.success.set(Some("previous order".to_string()));

            vm.submit_command();

            assert_eq!(vm.failure.get_untracked().as_deref(), Some(FAILURE_MESSAGE));
            assert_eq!(vm.success.get_untracked(), None);
            let errors = vm.errors.get_untracked();
            assert_eq!(errors.full_name, FULL_NAME_TOO_SHORT);
            assert_eq!(errors.size, SIZE_INCORRECT);
            assert!(!vm.enabled.get_untracked());
        });
    }

    #[test]
    fn test_short_name_submit_is_rejected() {
        with_vm(|vm| {
            vm.form.update(|f| {
                f.full_name = "Al".into();
                f.size = "S".into();
            });

            vm.submit_command();

            assert_eq!(vm.success.get_untracked(), None);
            assert_eq!(vm.errors.get_untracked().full_name, FULL_NAME_TOO_SHORT);
            assert_eq!(vm.errors.get_untracked().size, "");
            assert_eq!(vm.form.get_untracked().full_name, "Al");
        });
    }

    #[test]
    fn test_reset_invalidates_in_flight_passes() {
        with_vm(|vm| {
            vm.passes.update_value(|p| {
                p.issue();
            });
            let in_flight = vm.passes.with_value(|p| p.current());
            assert!(vm.passes.with_value(|p| p.is_current(in_flight)));

            vm.reset();

            assert!(!vm.passes.with_value(|p| p.is_current(in_flight)));
            assert!(vm.touched.with_value(|t| t.is_empty()));
        });
    }
}
