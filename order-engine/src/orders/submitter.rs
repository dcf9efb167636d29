//! Guarded order submission
//!
//! There is no server-side idempotency key, so a double-tap must be
//! suppressed client-side: at most one submission is in flight per
//! session, enforced by an atomic flag.

use crate::client::OrderTransport;
use shared::order::Order;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Order submitter with an in-flight guard
pub struct OrderSubmitter {
    transport: Arc<dyn OrderTransport>,
    in_flight: AtomicBool,
}

impl OrderSubmitter {
    pub fn new(transport: Arc<dyn OrderTransport>) -> Self {
        Self {
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    /// True while a submission runs or a submitted order awaits its
    /// confirmation flow; the submit action stays disabled meanwhile
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Allow a new submission (the confirmation flow finished)
    pub fn reset(&self) {
        self.in_flight.store(false, Ordering::SeqCst);
    }

    /// Send the order through the transport
    ///
    /// Returns false without calling the transport when a submission is
    /// already in flight. A transport failure clears the flag so the user
    /// may retry; success leaves it set until [`reset`](Self::reset).
    pub async fn submit(&self, merchant_id: &str, order: &Order) -> bool {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::warn!(merchant_id, "submission already in flight; ignoring");
            return false;
        }

        match self.transport.submit_order(merchant_id, order).await {
            Ok(()) => {
                tracing::info!(merchant_id, total = order.total, "order submitted");
                true
            }
            Err(e) => {
                tracing::error!(merchant_id, error = %e, "order submission failed");
                self.in_flight.store(false, Ordering::SeqCst);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::error::SubmitError;
    use shared::order::{
        Address, Customer, Order, OrderStatus, Payment, PaymentMethod,
    };

    struct RecordingTransport {
        fail: bool,
        sent: Mutex<Vec<Order>>,
    }

    impl RecordingTransport {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl OrderTransport for RecordingTransport {
        async fn submit_order(&self, _merchant_id: &str, order: &Order) -> Result<(), SubmitError> {
            if self.fail {
                return Err(SubmitError("write refused".to_string()));
            }
            self.sent.lock().push(order.clone());
            Ok(())
        }
    }

    fn order() -> Order {
        Order {
            customer: Customer {
                name: "Maria".to_string(),
                phone: "11987654321".to_string(),
            },
            created_at: "01/08/2026 20:15:00".to_string(),
            address: Address {
                neighborhood: "Centro".to_string(),
                street: "Rua das Flores, 123".to_string(),
                reference: "Próximo ao mercado".to_string(),
            },
            items: Vec::new(),
            payment: Payment {
                method: PaymentMethod::Pix,
                change_requested: None,
                change_for: None,
            },
            status: OrderStatus::Pending,
            total: 12.5,
        }
    }

    #[tokio::test]
    async fn test_success_keeps_flag_until_reset() {
        let transport = RecordingTransport::new(false);
        let submitter = OrderSubmitter::new(transport.clone());

        assert!(submitter.submit("loja", &order()).await);
        assert!(submitter.is_submitting());
        assert_eq!(transport.sent.lock().len(), 1);

        // A second attempt while the confirmation flow runs is suppressed
        assert!(!submitter.submit("loja", &order()).await);
        assert_eq!(transport.sent.lock().len(), 1);

        submitter.reset();
        assert!(!submitter.is_submitting());
        assert!(submitter.submit("loja", &order()).await);
    }

    #[tokio::test]
    async fn test_failure_clears_flag_for_retry() {
        let submitter = OrderSubmitter::new(RecordingTransport::new(true));

        assert!(!submitter.submit("loja", &order()).await);
        assert!(!submitter.is_submitting());

        // Retry is allowed immediately
        assert!(!submitter.submit("loja", &order()).await);
    }
}
