//! Store Backend Seam
//!
//! Thin CRUD boundary to the hosted commerce backend: fetch the product
//! list, persist completed orders. The real backend (REST, database,
//! authentication) is an external collaborator behind [`StoreBackend`];
//! an in-memory implementation backs the demo binary and the tests.

use std::fmt;

use crate::store::commerce::order::{Order, OrderLine, ProductId};

/// Minimal product DTO exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in cents.
    pub price_cents: u32,
}

/// Errors surfaced by backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Backend unreachable or refused the request.
    Unavailable(String),
    /// A cart references a product the catalog does not know.
    UnknownProduct(ProductId),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Unavailable(reason) => write!(f, "backend unavailable: {reason}"),
            BackendError::UnknownProduct(id) => write!(f, "unknown product id {id}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// CRUD seam to the commerce backend.
pub trait StoreBackend {
    /// Fetch the product catalog.
    fn fetch_products(&self) -> Result<Vec<Product>, BackendError>;

    /// Persist a completed order.
    fn submit_order(&mut self, order: &Order) -> Result<(), BackendError>;
}

/// Build an order from cart contents, pricing each line from the catalog.
///
/// Duplicate cart entries collapse into a single line with a higher
/// quantity. Fails if any id is missing from the catalog.
pub fn build_order(
    order_id: u64,
    cart: &[ProductId],
    catalog: &[Product],
) -> Result<Order, BackendError> {
    let mut lines: Vec<OrderLine> = Vec::new();

    for &product_id in cart {
        let product = catalog
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(BackendError::UnknownProduct(product_id))?;

        match lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => line.quantity += 1,
            None => lines.push(OrderLine {
                product_id,
                quantity: 1,
                unit_price_cents: product.price_cents,
            }),
        }
    }

    Ok(Order::new(order_id, lines))
}

/// In-memory backend for the demo binary and tests.
pub struct InMemoryBackend {
    products: Vec<Product>,
    submitted: Vec<Order>,
}

impl InMemoryBackend {
    /// Create a backend preloaded with a catalog.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            submitted: Vec::new(),
        }
    }

    /// Orders persisted so far.
    pub fn submitted_orders(&self) -> &[Order] {
        &self.submitted
    }
}

impl StoreBackend for InMemoryBackend {
    fn fetch_products(&self) -> Result<Vec<Product>, BackendError> {
        Ok(self.products.clone())
    }

    fn submit_order(&mut self, order: &Order) -> Result<(), BackendError> {
        log::info!(
            "backend: persisting order {} ({} lines, {} cents)",
            order.id,
            order.lines.len(),
            order.total_cents()
        );
        self.submitted.push(order.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                name: "Canvas Sneaker".into(),
                price_cents: 5900,
            },
            Product {
                id: 2,
                name: "Wool Beanie".into(),
                price_cents: 2400,
            },
        ]
    }

    #[test]
    fn test_build_order_prices_from_catalog() {
        let order = build_order(7, &[1, 2], &catalog()).unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.total_cents(), 5900 + 2400);
    }

    #[test]
    fn test_build_order_collapses_duplicates() {
        let order = build_order(7, &[1, 1, 1], &catalog()).unwrap();
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].quantity, 3);
        assert_eq!(order.total_cents(), 3 * 5900);
    }

    #[test]
    fn test_build_order_unknown_product() {
        let err = build_order(7, &[99], &catalog()).unwrap_err();
        assert_eq!(err, BackendError::UnknownProduct(99));
    }

    #[test]
    fn test_in_memory_backend_round_trip() {
        let mut backend = InMemoryBackend::new(catalog());
        let products = backend.fetch_products().unwrap();
        assert_eq!(products.len(), 2);

        let order = build_order(1, &[2], &products).unwrap();
        backend.submit_order(&order).unwrap();
        assert_eq!(backend.submitted_orders().len(), 1);
        assert_eq!(backend.submitted_orders()[0].id, 1);
    }
}
