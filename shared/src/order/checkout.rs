//! Checkout form models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment method label; recorded on the order, never charged
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    Pix,
    #[serde(rename = "Dinheiro")]
    Cash,
    #[serde(rename = "Cartão")]
    Card,
}

impl PaymentMethod {
    /// Cash is the only method with change-due rules
    pub fn is_cash(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Card => "Cartão",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Delivery and payment details collected at checkout
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutForm {
    pub name: String,
    /// Contact phone as typed; validation strips non-digits
    pub phone: String,
    pub neighborhood: String,
    /// Street and number
    pub street: String,
    /// Delivery reference note ("next to the market...")
    pub reference: String,
    pub payment_method: PaymentMethod,
    /// Cash only: customer needs change for a larger bill
    pub needs_change: bool,
    /// Bill value the customer will pay with, as typed (comma or dot
    /// decimal separator)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_for: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_wire_labels() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Pix).unwrap(), "\"Pix\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::Cash).unwrap(), "\"Dinheiro\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::Card).unwrap(), "\"Cartão\"");

        let cash: PaymentMethod = serde_json::from_str("\"Dinheiro\"").unwrap();
        assert!(cash.is_cash());
    }
}
