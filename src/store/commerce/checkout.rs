//! Checkout Flow
//!
//! Orchestrates an order through payment: opens a session with the
//! payment provider, resolves it, and lands the order in `Paid` (then
//! persisted) or `Cancelled`. Payment-intent creation itself is the
//! provider's business - this module only drives the status machine.

use std::fmt;

use crate::store::commerce::backend::{BackendError, StoreBackend};
use crate::store::commerce::order::{InvalidTransition, Order, OrderStatus};

/// An open payment session with the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSession {
    pub session_id: u64,
    pub amount_cents: u64,
}

/// Provider's verdict on a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDecision {
    Approved,
    Declined(String),
}

/// Errors surfaced by the payment provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentError(pub String);

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for PaymentError {}

/// Payment provider seam (external collaborator).
pub trait PaymentProvider {
    /// Open a payment session for the order's total.
    fn create_session(&mut self, order: &Order) -> Result<PaymentSession, PaymentError>;

    /// Resolve a previously created session.
    fn resolve(&mut self, session: &PaymentSession) -> PaymentDecision;
}

/// How a checkout run ended (both are successful runs of the flow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Paid,
    Declined,
}

/// Errors that abort a checkout run.
#[derive(Debug)]
pub enum CheckoutError {
    /// Nothing in the order.
    EmptyOrder,
    /// The provider could not open a session.
    Payment(PaymentError),
    /// The backend rejected the persisted order.
    Backend(BackendError),
    /// The order was not in a state the flow can drive.
    Order(InvalidTransition),
}

impl fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutError::EmptyOrder => write!(f, "cannot check out an empty order"),
            CheckoutError::Payment(e) => write!(f, "payment failed: {e}"),
            CheckoutError::Backend(e) => write!(f, "backend failed: {e}"),
            CheckoutError::Order(e) => write!(f, "order state error: {e}"),
        }
    }
}

impl std::error::Error for CheckoutError {}

impl From<PaymentError> for CheckoutError {
    fn from(e: PaymentError) -> Self {
        CheckoutError::Payment(e)
    }
}

impl From<BackendError> for CheckoutError {
    fn from(e: BackendError) -> Self {
        CheckoutError::Backend(e)
    }
}

impl From<InvalidTransition> for CheckoutError {
    fn from(e: InvalidTransition) -> Self {
        CheckoutError::Order(e)
    }
}

/// Run an order through checkout.
///
/// `Pending -> AwaitingPayment`, then `Paid` + persist on approval, or
/// `Cancelled` on decline. A decline is a normal outcome, not an error.
pub fn run_checkout(
    order: &mut Order,
    provider: &mut dyn PaymentProvider,
    backend: &mut dyn StoreBackend,
) -> Result<CheckoutOutcome, CheckoutError> {
    if order.lines.is_empty() {
        return Err(CheckoutError::EmptyOrder);
    }

    order.transition(OrderStatus::AwaitingPayment)?;
    let session = provider.create_session(order)?;

    match provider.resolve(&session) {
        PaymentDecision::Approved => {
            order.transition(OrderStatus::Paid)?;
            backend.submit_order(order)?;
            log::info!(
                "checkout: order {} paid ({} cents)",
                order.id,
                order.total_cents()
            );
            Ok(CheckoutOutcome::Paid)
        }
        PaymentDecision::Declined(reason) => {
            order.transition(OrderStatus::Cancelled)?;
            log::warn!("checkout: order {} declined: {reason}", order.id);
            Ok(CheckoutOutcome::Declined)
        }
    }
}

/// Deterministic provider for the demo binary and tests: approves or
/// declines every session according to its configuration.
pub struct DemoPaymentProvider {
    approve: bool,
    next_session: u64,
}

impl DemoPaymentProvider {
    pub fn approving() -> Self {
        Self {
            approve: true,
            next_session: 1,
        }
    }

    pub fn declining() -> Self {
        Self {
            approve: false,
            next_session: 1,
        }
    }
}

impl PaymentProvider for DemoPaymentProvider {
    fn create_session(&mut self, order: &Order) -> Result<PaymentSession, PaymentError> {
        let session = PaymentSession {
            session_id: self.next_session,
            amount_cents: order.total_cents(),
        };
        self.next_session += 1;
        Ok(session)
    }

    fn resolve(&mut self, _session: &PaymentSession) -> PaymentDecision {
        if self.approve {
            PaymentDecision::Approved
        } else {
            PaymentDecision::Declined("demo decline".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::commerce::backend::{InMemoryBackend, Product, build_order};

    fn catalog() -> Vec<Product> {
        vec![Product {
            id: 1,
            name: "Canvas Sneaker".into(),
            price_cents: 5900,
        }]
    }

    #[test]
    fn test_approved_checkout_persists_paid_order() {
        let mut backend = InMemoryBackend::new(catalog());
        let mut provider = DemoPaymentProvider::approving();
        let mut order = build_order(1, &[1], &catalog()).unwrap();

        let outcome = run_checkout(&mut order, &mut provider, &mut backend).unwrap();
        assert_eq!(outcome, CheckoutOutcome::Paid);
        assert_eq!(order.status(), OrderStatus::Paid);
        assert_eq!(backend.submitted_orders().len(), 1);
    }

    #[test]
    fn test_declined_checkout_cancels_without_persisting() {
        let mut backend = InMemoryBackend::new(catalog());
        let mut provider = DemoPaymentProvider::declining();
        let mut order = build_order(1, &[1], &catalog()).unwrap();

        let outcome = run_checkout(&mut order, &mut provider, &mut backend).unwrap();
        assert_eq!(outcome, CheckoutOutcome::Declined);
        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert!(backend.submitted_orders().is_empty());
    }

    #[test]
    fn test_empty_order_rejected() {
        let mut backend = InMemoryBackend::new(catalog());
        let mut provider = DemoPaymentProvider::approving();
        let mut order = build_order(1, &[], &catalog()).unwrap();

        let err = run_checkout(&mut order, &mut provider, &mut backend).unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyOrder));
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn test_checkout_twice_fails_on_state() {
        let mut backend = InMemoryBackend::new(catalog());
        let mut provider = DemoPaymentProvider::approving();
        let mut order = build_order(1, &[1], &catalog()).unwrap();

        run_checkout(&mut order, &mut provider, &mut backend).unwrap();
        let err = run_checkout(&mut order, &mut provider, &mut backend).unwrap_err();
        assert!(matches!(err, CheckoutError::Order(_)));
    }

    #[test]
    fn test_session_carries_order_total() {
        let mut provider = DemoPaymentProvider::approving();
        let order = build_order(1, &[1, 1], &catalog()).unwrap();
        let session = provider.create_session(&order).unwrap();
        assert_eq!(session.amount_cents, 2 * 5900);
    }
}
