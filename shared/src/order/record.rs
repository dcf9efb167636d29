//! Normalized order record
//!
//! The shape handed to the order transport. Every multi-step build either
//! completes fully or produces nothing; the record is immutable once
//! assembled.

use super::checkout::PaymentMethod;
use serde::{Deserialize, Serialize};

/// Order lifecycle status; new orders are always pending
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
}

/// Whether cash change was requested
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeRequested {
    Yes,
    No,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub neighborhood: String,
    pub street: String,
    pub reference: String,
}

/// One order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub product: String,
    pub quantity: u32,
    /// Flattened option names across all groups; group provenance is not
    /// retained
    pub extras: Vec<String>,
    /// Base item price; extras are reflected in `line_total` only
    pub unit_price: f64,
    pub line_total: f64,
}

/// Payment block; change fields appear only for cash payments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_requested: Option<ChangeRequested>,
    /// Bill value as the customer typed it, not reformatted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_for: Option<String>,
}

/// The assembled order submitted to the merchant's store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub customer: Customer,
    pub created_at: String,
    pub address: Address,
    pub items: Vec<OrderLine>,
    pub payment: Payment,
    pub status: OrderStatus,
    pub total: f64,
}
