//! Store Layout Configuration
//!
//! Centralizes the shop floor dimensions and where the displays, door,
//! and promo banner sit, so the floor plan can be tweaked without
//! touching scene code. Loadable from JSON with compiled-in defaults.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::store::commerce::ProductId;

/// Placement of one product display on the floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySlot {
    /// Pedestal base position on the floor plane.
    pub position: Vec3,
    /// Catalog product shown on this slot.
    pub product_id: ProductId,
}

/// Floor plan of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Half extent of the floor along X.
    pub floor_half_width: f32,
    /// Half extent of the floor along Z.
    pub floor_half_depth: f32,
    /// Wall height.
    pub wall_height: f32,
    /// Where the avatar spawns.
    pub avatar_spawn: Vec3,
    /// Product display placements.
    pub display_slots: Vec<DisplaySlot>,
    /// Half width of the entrance doorway (in the +Z wall).
    pub doorway_half_width: f32,
    /// Door panel height.
    pub door_height: f32,
    /// Resting center of the promo banner quad.
    pub banner_center: Vec3,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            floor_half_width: 8.0,
            floor_half_depth: 10.0,
            wall_height: 4.0,
            avatar_spawn: Vec3::new(0.0, 0.0, 2.0),
            display_slots: vec![
                DisplaySlot {
                    position: Vec3::new(-4.5, 0.0, 2.0),
                    product_id: 1,
                },
                DisplaySlot {
                    position: Vec3::new(4.5, 0.0, 2.0),
                    product_id: 2,
                },
                DisplaySlot {
                    position: Vec3::new(-4.5, 0.0, -3.5),
                    product_id: 3,
                },
                DisplaySlot {
                    position: Vec3::new(4.5, 0.0, -3.5),
                    product_id: 4,
                },
            ],
            doorway_half_width: 1.2,
            door_height: 3.0,
            banner_center: Vec3::new(0.0, 3.1, 9.6),
        }
    }
}
