//! Store Module
//!
//! Contains storefront-specific systems that build on top of the engine:
//! the scene composition, product displays, the entrance door, the promo
//! banner, the commerce flow, and the configuration layer.

pub mod commerce;
pub mod config;
pub mod display;
pub mod door;
pub mod promo;
pub mod scene;
pub mod types;

// Re-exports from store modules
pub use types::{Aabb, Mesh, Vertex, generate_box, generate_quad, generate_yaw_box};

pub use commerce::{
    BackendError, CheckoutError, CheckoutOutcome, DemoPaymentProvider, InMemoryBackend, Order,
    OrderLine, OrderStatus, PaymentProvider, Product, ProductId, StoreBackend, build_order,
    run_checkout,
};
pub use config::{ControlsConfig, DisplaySlot, LayoutConfig, StoreConfig};
pub use display::ProductDisplay;
pub use door::{Door, DoorState};
pub use promo::{PromoBanner, PromoVisual};
pub use scene::{ClickAction, PickTarget, StoreScene};
