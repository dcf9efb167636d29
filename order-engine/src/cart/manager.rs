//! Cart manager
//!
//! Owns the cart lines for one ordering session. Each add produces exactly
//! one line priced per unit at add time; removal acts on the exact line id
//! the user saw.

use crate::hours::HoursMonitor;
use crate::pricing;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::menu::MenuItem;
use shared::order::{CartLine, Selection};
use std::sync::Arc;
use thiserror::Error;

/// Cart errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The merchant is outside its opening window; nothing was added
    #[error("store is currently closed")]
    StoreClosed,
}

pub type CartResult<T> = Result<T, CartError>;

/// Cart manager
///
/// Adds re-check the opening status synchronously instead of trusting a
/// published value that may be up to a polling interval old.
pub struct CartManager {
    hours: Arc<HoursMonitor>,
    lines: RwLock<Vec<CartLine>>,
}

impl CartManager {
    pub fn new(hours: Arc<HoursMonitor>) -> Self {
        Self {
            hours,
            lines: RwLock::new(Vec::new()),
        }
    }

    /// Append a new line with a fresh opaque id and quantity 1
    ///
    /// `total_price` is the per-unit price computed at add time.
    pub fn add(
        &self,
        item: MenuItem,
        selections: Selection,
        total_price: f64,
    ) -> CartResult<String> {
        if !self.hours.evaluate_now().is_open {
            tracing::warn!(item = %item.name, "add to cart rejected: store closed");
            return Err(CartError::StoreClosed);
        }

        let id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(line_id = %id, item = %item.name, total_price, "cart line added");
        self.lines.write().push(CartLine {
            id: id.clone(),
            item,
            selections,
            total_price,
            quantity: 1,
        });
        Ok(id)
    }

    /// Remove the line with the given id; unknown ids are a no-op
    pub fn remove(&self, id: &str) {
        self.lines.write().retain(|line| line.id != id);
    }

    /// Empty the cart
    pub fn clear(&self) {
        self.lines.write().clear();
    }

    /// Snapshot of the current lines, in insertion order
    pub fn lines(&self) -> Vec<CartLine> {
        self.lines.read().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.read().is_empty()
    }

    /// Sum of per-line totals
    ///
    /// Quantity is not multiplied in: each add produces exactly one line
    /// priced per unit.
    pub fn total(&self) -> f64 {
        let total: Decimal = self
            .lines
            .read()
            .iter()
            .map(|line| pricing::to_decimal(line.total_price))
            .sum();
        pricing::to_f64(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hours::{Clock, OpeningWindow};
    use serde_json::json;

    struct FixedClock(u32);

    impl Clock for FixedClock {
        fn minutes_now(&self) -> u32 {
            self.0
        }
    }

    fn open_manager() -> CartManager {
        // No window configured: always open
        CartManager::new(Arc::new(HoursMonitor::new()))
    }

    fn closed_manager() -> CartManager {
        let monitor = HoursMonitor::with_clock(Arc::new(FixedClock(12 * 60)));
        monitor.set_window(OpeningWindow {
            opens_at: Some("22:00".to_string()),
            closes_at: Some("02:00".to_string()),
        });
        CartManager::new(Arc::new(monitor))
    }

    fn item(name: &str, price: f64) -> MenuItem {
        serde_json::from_value(json!({ "nome": name, "disponivel": true, "preco": price }))
            .unwrap()
    }

    #[test]
    fn test_add_remove_and_total() {
        let cart = open_manager();

        let first = cart.add(item("Açaí 300ml", 10.0), Selection::new(), 12.5).unwrap();
        cart.add(item("Água", 3.0), Selection::new(), 3.0).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 15.5);

        cart.remove(&first);
        assert_eq!(cart.total(), 3.0);

        // Unknown id is a no-op
        cart.remove("missing");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_each_add_creates_its_own_line() {
        let cart = open_manager();
        let a = cart.add(item("Açaí 300ml", 10.0), Selection::new(), 10.0).unwrap();
        let b = cart.add(item("Açaí 300ml", 10.0), Selection::new(), 10.0).unwrap();

        assert_ne!(a, b);
        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.quantity == 1));
    }

    #[test]
    fn test_add_is_rejected_while_closed() {
        let cart = closed_manager();
        let result = cart.add(item("Açaí 300ml", 10.0), Selection::new(), 10.0);
        assert_eq!(result, Err(CartError::StoreClosed));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let cart = open_manager();
        cart.add(item("Açaí 300ml", 10.0), Selection::new(), 10.0).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
