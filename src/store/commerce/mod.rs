//! Commerce Module
//!
//! Orders, the checkout flow, and the seams to the hosted backend and
//! the payment provider.

pub mod backend;
pub mod checkout;
pub mod order;

pub use backend::{BackendError, InMemoryBackend, Product, StoreBackend, build_order};
pub use checkout::{
    CheckoutError, CheckoutOutcome, DemoPaymentProvider, PaymentDecision, PaymentProvider,
    PaymentSession, run_checkout,
};
pub use order::{InvalidTransition, Order, OrderLine, OrderStatus, ProductId};
