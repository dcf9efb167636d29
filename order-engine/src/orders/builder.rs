//! Order assembly
//!
//! Building is all-or-nothing: the record is assembled from immutable
//! snapshots and nothing observable changes until submission.

use crate::checkout::sanitize_phone;
use shared::order::{
    Address, CartLine, ChangeRequested, CheckoutForm, Customer, Order, OrderLine, OrderStatus,
    Payment,
};

/// Timestamp format for order records (local time)
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Assemble the order record from the cart and a validated form
///
/// Selected extras are flattened into one name sequence per line, without
/// group provenance. `unit_price` stays the base item price; the
/// customized per-unit price lives in `line_total`.
pub fn build_order(lines: &[CartLine], form: &CheckoutForm, total: f64) -> Order {
    let items = lines
        .iter()
        .map(|line| OrderLine {
            product: line.item.name.clone(),
            quantity: line.quantity,
            extras: line.extra_names(),
            unit_price: line.item.base_price(),
            line_total: line.total_price,
        })
        .collect();

    Order {
        customer: Customer {
            name: form.name.clone(),
            phone: sanitize_phone(&form.phone),
        },
        created_at: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        address: Address {
            neighborhood: form.neighborhood.clone(),
            street: form.street.clone(),
            reference: form.reference.clone(),
        },
        items,
        payment: build_payment(form),
        status: OrderStatus::Pending,
        total,
    }
}

/// Payment block rules: change fields only exist for cash payments
///
/// The change target is recorded exactly as typed, not reformatted.
fn build_payment(form: &CheckoutForm) -> Payment {
    if !form.payment_method.is_cash() {
        return Payment {
            method: form.payment_method,
            change_requested: None,
            change_for: None,
        };
    }

    match form.change_for.as_deref() {
        Some(amount) if form.needs_change && !amount.is_empty() => Payment {
            method: form.payment_method,
            change_requested: Some(ChangeRequested::Yes),
            change_for: Some(amount.to_string()),
        },
        _ => Payment {
            method: form.payment_method,
            change_requested: Some(ChangeRequested::No),
            change_for: None,
        },
    }
}
