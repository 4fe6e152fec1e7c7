use contracts::domain::a001_pizza_order::{FormField, OrderFormErrors, PizzaOrderDto, PIZZA_ORDER_SCHEMA};

/// Identifies one validation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PassTicket(u64);

/// Hands out increasing tickets; only the newest ticket may publish.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassTracker {
    latest: u64,
}

impl PassTracker {
    pub fn issue(&mut self) -> PassTicket {
        self.latest += 1;
        PassTicket(self.latest)
    }

    /// The most recently issued ticket
    pub fn current(&self) -> PassTicket {
        PassTicket(self.latest)
    }

    pub fn is_current(&self, ticket: PassTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Outcome of one validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPass {
    pub ticket: PassTicket,
    /// Whether the whole form may be submitted
    pub enabled: bool,
    /// Messages for the fields the user has touched; other fields stay empty
    pub errors: OrderFormErrors,
}

/// Run one validation pass.
///
/// Every touched field is re-checked, so the newest pass alone is the full
/// truth and older passes can be dropped without losing a message.
pub fn run_pass(ticket: PassTicket, values: &PizzaOrderDto, touched: &[FormField]) -> ValidationPass {
    let mut errors = OrderFormErrors::default();
    for field in touched {
        errors.apply(*field, PIZZA_ORDER_SCHEMA.validate_field(*field, values.value(*field)));
    }

    ValidationPass {
        ticket,
        enabled: PIZZA_ORDER_SCHEMA.is_valid(values),
        errors,
    }
}

/// Validate `values` off the input handler
pub async fn validate_async(
    ticket: PassTicket,
    values: PizzaOrderDto,
    touched: Vec<FormField>,
) -> ValidationPass {
    run_pass(ticket, &values, &touched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_pizza_order::schema::{FULL_NAME_TOO_SHORT, SIZE_INCORRECT};

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut tracker = PassTracker::default();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert_eq!(tracker.current(), second);
        assert!(first < second);
    }

    #[test]
    fn test_untouched_fields_get_no_message() {
        let mut tracker = PassTracker::default();
        let values = PizzaOrderDto {
            full_name: "Al".into(),
            ..Default::default()
        };
        let pass = run_pass(tracker.issue(), &values, &[FormField::FullName]);
        assert!(!pass.enabled);
        assert_eq!(pass.errors.full_name, FULL_NAME_TOO_SHORT);
        assert_eq!(pass.errors.size, "");
    }

    #[test]
    fn test_pass_revalidates_every_touched_field() {
        let mut tracker = PassTracker::default();
        let values = PizzaOrderDto {
            full_name: "Alice".into(),
            size: "XL".into(),
            ..Default::default()
        };
        let pass = run_pass(
            tracker.issue(),
            &values,
            &[FormField::FullName, FormField::Size],
        );
        assert_eq!(pass.errors.full_name, "");
        assert_eq!(pass.errors.size, SIZE_INCORRECT);
        assert!(!pass.enabled);
    }

    #[test]
    fn test_valid_values_enable_submit() {
        let mut tracker = PassTracker::default();
        let values = PizzaOrderDto {
            full_name: "Alice".into(),
            size: "M".into(),
            ..Default::default()
        };
        let pass = run_pass(tracker.issue(), &values, &[FormField::Size]);
        assert!(pass.enabled);
        assert!(pass.errors.is_empty());
    }
}
