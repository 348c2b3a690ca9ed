//! Product Displays
//!
//! A product display is a pedestal on the shop floor with a product box
//! on top. The box carries the hover/pick volume; hovering highlights it
//! and clicking adds the product to the cart.

use glam::Vec3;

use crate::store::commerce::Product;
use crate::store::types::Aabb;

/// Pedestal half extents.
pub const PEDESTAL_HALF: Vec3 = Vec3::new(0.45, 0.5, 0.45);
/// Product box half extents.
pub const PRODUCT_HALF: Vec3 = Vec3::new(0.3, 0.3, 0.3);

/// Pedestal surface color.
pub const PEDESTAL_COLOR: [f32; 4] = [0.62, 0.60, 0.58, 1.0];
/// Product box resting color.
pub const PRODUCT_COLOR: [f32; 4] = [0.84, 0.72, 0.45, 1.0];
/// Product box color while hovered.
pub const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 0.92, 0.55, 1.0];

/// One product display on the shop floor.
#[derive(Debug, Clone)]
pub struct ProductDisplay {
    /// The product shown on this display.
    pub product: Product,
    /// Center of the pedestal base on the floor plane.
    pub position: Vec3,
    /// Whether the cursor ray currently rests on the product box.
    pub hovered: bool,
}

impl ProductDisplay {
    pub fn new(product: Product, position: Vec3) -> Self {
        Self {
            product,
            position,
            hovered: false,
        }
    }

    /// Center of the pedestal volume.
    pub fn pedestal_center(&self) -> Vec3 {
        self.position + Vec3::new(0.0, PEDESTAL_HALF.y, 0.0)
    }

    /// Center of the product box, floating just above the pedestal.
    pub fn product_center(&self) -> Vec3 {
        self.position + Vec3::new(0.0, 2.0 * PEDESTAL_HALF.y + PRODUCT_HALF.y + 0.15, 0.0)
    }

    /// Pick volume of the product box.
    pub fn pick_aabb(&self) -> Aabb {
        Aabb::from_center(self.product_center(), PRODUCT_HALF)
    }

    /// Current color of the product box.
    pub fn product_color(&self) -> [f32; 4] {
        if self.hovered {
            HIGHLIGHT_COLOR
        } else {
            PRODUCT_COLOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> ProductDisplay {
        ProductDisplay::new(
            Product {
                id: 1,
                name: "Canvas Sneaker".into(),
                price_cents: 5900,
            },
            Vec3::new(2.0, 0.0, -3.0),
        )
    }

    #[test]
    fn test_product_box_sits_above_pedestal() {
        let d = display();
        let aabb = d.pick_aabb();
        // Bottom of the product box clears the pedestal top
        assert!(aabb.min.y > 2.0 * PEDESTAL_HALF.y);
        assert_eq!(aabb.center().x, 2.0);
        assert_eq!(aabb.center().z, -3.0);
    }

    #[test]
    fn test_hover_changes_color() {
        let mut d = display();
        assert_eq!(d.product_color(), PRODUCT_COLOR);
        d.hovered = true;
        assert_eq!(d.product_color(), HIGHLIGHT_COLOR);
    }
}
