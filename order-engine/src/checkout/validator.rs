//! Checkout form validation

use crate::pricing::to_decimal;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::order::CheckoutForm;
use std::str::FromStr;

/// Fixed message for the mobile phone rule
pub const PHONE_MESSAGE: &str = "Invalid phone: 11 digits starting with a mobile 9";

/// Form fields addressable by validation errors
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutField {
    Name,
    Phone,
    Neighborhood,
    Street,
    Reference,
    ChangeFor,
}

/// One field-level validation failure
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: CheckoutField,
    pub message: String,
}

/// Validation outcome; an empty error list means the form may be submitted
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// First error for a field, if any (inline display)
    pub fn error_for(&self, field: CheckoutField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    fn push(&mut self, field: CheckoutField, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

/// Digits-only view of a phone entry
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Local mobile convention: exactly 11 digits with the third digit 9
pub fn is_phone_valid(raw: &str) -> bool {
    let digits = sanitize_phone(raw);
    digits.len() == 11 && digits.as_bytes()[2] == b'9'
}

/// Parse a change amount as typed, accepting comma or dot decimal
/// separators
pub fn parse_change(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim().replace(',', ".").as_str()).ok()
}

/// Validate the form against field rules and the change-due rule
///
/// The change rule only applies to cash payments with change requested:
/// the given amount must parse and strictly exceed the cart total. For any
/// other payment setup it is vacuously valid.
pub fn validate(form: &CheckoutForm, cart_total: f64) -> ValidationReport {
    let mut report = ValidationReport::default();

    if form.name.chars().count() <= 2 {
        report.push(CheckoutField::Name, "Name must be at least 3 characters");
    }
    if !is_phone_valid(&form.phone) {
        report.push(CheckoutField::Phone, PHONE_MESSAGE);
    }
    if form.neighborhood.chars().count() <= 2 {
        report.push(
            CheckoutField::Neighborhood,
            "Neighborhood must be at least 3 characters",
        );
    }
    if form.street.chars().count() <= 3 {
        report.push(
            CheckoutField::Street,
            "Street and number must be at least 4 characters",
        );
    }
    if form.reference.chars().count() <= 2 {
        report.push(
            CheckoutField::Reference,
            "Reference must be at least 3 characters",
        );
    }

    if form.payment_method.is_cash() && form.needs_change {
        let given = form.change_for.as_deref().unwrap_or("");
        match parse_change(given) {
            Some(amount) if amount > to_decimal(cart_total) => {}
            _ => report.push(
                CheckoutField::ChangeFor,
                "Change must be greater than the order total",
            ),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::PaymentMethod;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            name: "Maria".to_string(),
            phone: "11987654321".to_string(),
            neighborhood: "Centro".to_string(),
            street: "Rua das Flores, 123".to_string(),
            reference: "Próximo ao mercado".to_string(),
            payment_method: PaymentMethod::Pix,
            needs_change: false,
            change_for: None,
        }
    }

    // ==================== Phone Rule ====================

    #[test]
    fn test_phone_fixtures() {
        assert!(is_phone_valid("11987654321"));
        // Third digit is not 9
        assert!(!is_phone_valid("11887654321"));
        // Wrong length
        assert!(!is_phone_valid("119876543"));
    }

    #[test]
    fn test_phone_is_sanitized_before_checking() {
        assert!(is_phone_valid("(11) 98765-4321"));
        assert_eq!(sanitize_phone("(11) 98765-4321"), "11987654321");
    }

    #[test]
    fn test_phone_error_uses_fixed_message() {
        let form = CheckoutForm {
            phone: "11887654321".to_string(),
            ..valid_form()
        };
        let report = validate(&form, 20.0);
        assert_eq!(
            report.error_for(CheckoutField::Phone).unwrap().message,
            PHONE_MESSAGE
        );
    }

    // ==================== Field Lengths ====================

    #[test]
    fn test_complete_form_is_valid() {
        assert!(validate(&valid_form(), 20.0).is_valid());
    }

    #[test]
    fn test_short_fields_are_rejected() {
        let report = validate(
            &CheckoutForm {
                name: "Jo".to_string(),
                neighborhood: "ab".to_string(),
                street: "R. 1".to_string(),
                reference: "ok".to_string(),
                ..valid_form()
            },
            20.0,
        );

        assert!(!report.is_valid());
        assert!(report.error_for(CheckoutField::Name).is_some());
        assert!(report.error_for(CheckoutField::Neighborhood).is_some());
        assert!(report.error_for(CheckoutField::Street).is_some());
        assert!(report.error_for(CheckoutField::Reference).is_some());
    }

    // ==================== Change Rule ====================

    fn cash_form(needs_change: bool, change_for: Option<&str>) -> CheckoutForm {
        CheckoutForm {
            payment_method: PaymentMethod::Cash,
            needs_change,
            change_for: change_for.map(str::to_string),
            ..valid_form()
        }
    }

    #[test]
    fn test_change_must_exceed_total() {
        // total = 50.00
        assert!(!validate(&cash_form(true, Some("40")), 50.0).is_valid());
        assert!(!validate(&cash_form(true, Some("50.00")), 50.0).is_valid());
        assert!(validate(&cash_form(true, Some("60,50")), 50.0).is_valid());
        assert!(validate(&cash_form(true, Some("60.50")), 50.0).is_valid());
    }

    #[test]
    fn test_unparseable_change_is_rejected() {
        assert!(!validate(&cash_form(true, Some("cinquenta")), 50.0).is_valid());
        assert!(!validate(&cash_form(true, None), 50.0).is_valid());
    }

    #[test]
    fn test_change_rule_is_vacuous_without_request() {
        // needs_change off: valid regardless of the typed value
        assert!(validate(&cash_form(false, Some("40")), 50.0).is_valid());
        // Non-cash method: valid even with change requested
        let pix = CheckoutForm {
            needs_change: true,
            change_for: Some("40".to_string()),
            ..valid_form()
        };
        assert!(validate(&pix, 50.0).is_valid());
    }
}
