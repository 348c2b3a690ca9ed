//! StoreScene - high-level composition of the storefront.
//!
//! Owns the avatar, product displays, entrance door, promo banner, cart,
//! and the hover/pick state. Its [`update`](StoreScene::update) method is
//! the single per-frame entry point for store logic. **No wgpu imports**
//! - this module is GPU-agnostic; it hands CPU meshes to the renderer.

use glam::Vec3;

use crate::avatar::AvatarController;
use crate::camera::ray_aabb_intersection;
use crate::input::MovementKeys;

use crate::store::commerce::{
    CheckoutError, CheckoutOutcome, PaymentProvider, Product, ProductId, StoreBackend,
    build_order, run_checkout,
};
use crate::store::config::StoreConfig;
use crate::store::display::{PEDESTAL_COLOR, PEDESTAL_HALF, PRODUCT_HALF, ProductDisplay};
use crate::store::door::Door;
use crate::store::promo::PromoBanner;
use crate::store::types::{Aabb, Mesh, generate_box, generate_quad, generate_yaw_box};

/// Margin between the avatar and the walls.
const WALL_MARGIN: f32 = 0.4;
/// Thickness of the door panel and walls.
const PANEL_THICKNESS: f32 = 0.08;

const FLOOR_COLOR: [f32; 4] = [0.82, 0.79, 0.74, 1.0];
const WALL_COLOR: [f32; 4] = [0.88, 0.87, 0.84, 1.0];
const DOOR_COLOR: [f32; 4] = [0.45, 0.32, 0.22, 1.0];
const AVATAR_BODY_COLOR: [f32; 4] = [0.25, 0.45, 0.75, 1.0];
const AVATAR_HEAD_COLOR: [f32; 4] = [0.92, 0.80, 0.68, 1.0];
const BANNER_COLOR: [f32; 3] = [0.92, 0.35, 0.30];

/// What the cursor ray currently rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// Index into `displays`.
    Display(usize),
    Door,
    Banner,
}

/// Result of a click on the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    AddedToCart(ProductId),
    ToggledDoor,
}

/// Complete storefront scene composing avatar, displays, door, banner,
/// and cart state.
pub struct StoreScene {
    pub config: StoreConfig,
    catalog: Vec<Product>,

    pub avatar: AvatarController,
    pub displays: Vec<ProductDisplay>,
    pub door: Door,
    pub banner: PromoBanner,

    /// Product ids added by clicking displays; drained by checkout.
    pub cart: Vec<ProductId>,
    /// Current hover target, if any.
    pub hovered: Option<PickTarget>,

    next_order_id: u64,
}

impl StoreScene {
    /// Build the scene from a config and the backend's catalog.
    ///
    /// Slots referencing products the catalog does not know are skipped
    /// with a warning.
    pub fn new(config: StoreConfig, catalog: Vec<Product>) -> Self {
        let mut avatar = AvatarController::new(config.layout.avatar_spawn);
        avatar.movement_speed = config.controls.movement_speed;

        let displays = config
            .layout
            .display_slots
            .iter()
            .filter_map(|slot| {
                match catalog.iter().find(|p| p.id == slot.product_id) {
                    Some(product) => Some(ProductDisplay::new(product.clone(), slot.position)),
                    None => {
                        log::warn!(
                            "scene: slot at {:?} references unknown product {}",
                            slot.position,
                            slot.product_id
                        );
                        None
                    }
                }
            })
            .collect();

        let banner = PromoBanner::new(config.layout.banner_center);

        Self {
            config,
            catalog,
            avatar,
            displays,
            door: Door::new(),
            banner,
            cart: Vec::new(),
            hovered: None,
            next_order_id: 1,
        }
    }

    // ========================================================================
    // PER-FRAME UPDATE
    // ========================================================================

    /// Advance one frame: step the avatar (camera-relative), keep it on
    /// the shop floor, and advance the door swing.
    pub fn update(&mut self, keys: &MovementKeys, camera_yaw: f32, dt: f32) {
        self.avatar.step(keys, camera_yaw);

        let limit_x = self.config.layout.floor_half_width - WALL_MARGIN;
        let limit_z = self.config.layout.floor_half_depth - WALL_MARGIN;
        self.avatar.position.x = self.avatar.position.x.clamp(-limit_x, limit_x);
        self.avatar.position.z = self.avatar.position.z.clamp(-limit_z, limit_z);

        self.door.update(dt);
    }

    // ========================================================================
    // PICKING
    // ========================================================================

    /// Pick volume of the doorway (the opening, not the swinging panel).
    fn door_aabb(&self) -> Aabb {
        let layout = &self.config.layout;
        Aabb::from_center(
            Vec3::new(0.0, layout.door_height * 0.5, layout.floor_half_depth),
            Vec3::new(layout.doorway_half_width, layout.door_height * 0.5, 0.3),
        )
    }

    /// Recompute the hover target from a cursor ray. Nearest hit wins.
    pub fn update_hover(&mut self, ray_origin: Vec3, ray_dir: Vec3) {
        let mut nearest: Option<(f32, PickTarget)> = None;

        let mut consider = |t: Option<f32>, target: PickTarget| {
            if let Some(t) = t {
                if nearest.map_or(true, |(best, _)| t < best) {
                    nearest = Some((t, target));
                }
            }
        };

        for (i, display) in self.displays.iter().enumerate() {
            let aabb = display.pick_aabb();
            consider(
                ray_aabb_intersection(ray_origin, ray_dir, aabb.min, aabb.max),
                PickTarget::Display(i),
            );
        }

        let door = self.door_aabb();
        consider(
            ray_aabb_intersection(ray_origin, ray_dir, door.min, door.max),
            PickTarget::Door,
        );

        let banner = self.banner.pick_aabb();
        consider(
            ray_aabb_intersection(ray_origin, ray_dir, banner.min, banner.max),
            PickTarget::Banner,
        );

        self.hovered = nearest.map(|(_, target)| target);
        for (i, display) in self.displays.iter_mut().enumerate() {
            display.hovered = self.hovered == Some(PickTarget::Display(i));
        }
    }

    /// Clear the hover state (cursor left the window).
    pub fn clear_hover(&mut self) {
        self.hovered = None;
        for display in &mut self.displays {
            display.hovered = false;
        }
    }

    /// Handle a click on the current hover target.
    pub fn handle_click(&mut self) -> Option<ClickAction> {
        match self.hovered? {
            PickTarget::Display(i) => {
                let product = &self.displays[i].product;
                self.cart.push(product.id);
                log::info!(
                    "cart: added {} ({} items total)",
                    product.name,
                    self.cart.len()
                );
                Some(ClickAction::AddedToCart(product.id))
            }
            PickTarget::Door => {
                self.door.toggle();
                Some(ClickAction::ToggledDoor)
            }
            PickTarget::Banner => None,
        }
    }

    /// Whether wheel input should scrub the promo timeline instead of
    /// zooming the camera.
    pub fn banner_hovered(&self) -> bool {
        self.hovered == Some(PickTarget::Banner)
    }

    // ========================================================================
    // CHECKOUT
    // ========================================================================

    /// Run the cart through checkout. On approval the cart is cleared; on
    /// decline it is kept so the shopper can retry.
    pub fn checkout(
        &mut self,
        provider: &mut dyn PaymentProvider,
        backend: &mut dyn StoreBackend,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        let mut order = build_order(self.next_order_id, &self.cart, &self.catalog)?;
        self.next_order_id += 1;

        let outcome = run_checkout(&mut order, provider, backend)?;
        if outcome == CheckoutOutcome::Paid {
            self.cart.clear();
        }
        Ok(outcome)
    }

    // ========================================================================
    // MESH GENERATION
    // ========================================================================

    /// Static store shell: floor, walls, entrance cut, display pedestals.
    /// Built once at startup.
    pub fn static_mesh(&self) -> Mesh {
        let layout = &self.config.layout;
        let (hw, hd, wh) = (
            layout.floor_half_width,
            layout.floor_half_depth,
            layout.wall_height,
        );

        let mut mesh = Mesh::new();

        // Floor slab
        mesh.merge(&generate_box(
            Vec3::new(0.0, -0.1, 0.0),
            Vec3::new(hw, 0.1, hd),
            FLOOR_COLOR,
        ));

        // Back wall (-Z) and side walls
        mesh.merge(&generate_box(
            Vec3::new(0.0, wh * 0.5, -hd),
            Vec3::new(hw, wh * 0.5, PANEL_THICKNESS),
            WALL_COLOR,
        ));
        mesh.merge(&generate_box(
            Vec3::new(-hw, wh * 0.5, 0.0),
            Vec3::new(PANEL_THICKNESS, wh * 0.5, hd),
            WALL_COLOR,
        ));
        mesh.merge(&generate_box(
            Vec3::new(hw, wh * 0.5, 0.0),
            Vec3::new(PANEL_THICKNESS, wh * 0.5, hd),
            WALL_COLOR,
        ));

        // Front wall (+Z) with the entrance cut out: two side pieces plus
        // a lintel above the doorway
        let dhw = layout.doorway_half_width;
        let side_half = (hw - dhw) * 0.5;
        mesh.merge(&generate_box(
            Vec3::new(-(dhw + side_half), wh * 0.5, hd),
            Vec3::new(side_half, wh * 0.5, PANEL_THICKNESS),
            WALL_COLOR,
        ));
        mesh.merge(&generate_box(
            Vec3::new(dhw + side_half, wh * 0.5, hd),
            Vec3::new(side_half, wh * 0.5, PANEL_THICKNESS),
            WALL_COLOR,
        ));
        let lintel_half = (wh - layout.door_height) * 0.5;
        mesh.merge(&generate_box(
            Vec3::new(0.0, layout.door_height + lintel_half, hd),
            Vec3::new(dhw, lintel_half, PANEL_THICKNESS),
            WALL_COLOR,
        ));

        // Display pedestals
        for display in &self.displays {
            mesh.merge(&generate_box(
                display.pedestal_center(),
                PEDESTAL_HALF,
                PEDESTAL_COLOR,
            ));
        }

        mesh
    }

    /// Dynamic geometry, rebuilt every frame: product boxes (hover
    /// highlight), the swinging door panel, the avatar, and the promo
    /// banner quad.
    pub fn dynamic_mesh(&self) -> Mesh {
        let layout = &self.config.layout;
        let mut mesh = Mesh::new();

        // Product boxes
        for display in &self.displays {
            mesh.merge(&generate_box(
                display.product_center(),
                PRODUCT_HALF,
                display.product_color(),
            ));
        }

        // Door panel, hinged on the -X side of the doorway; positive swing
        // rotates it into the store
        let hinge = Vec3::new(-layout.doorway_half_width, 0.0, layout.floor_half_depth);
        mesh.merge(&generate_yaw_box(
            Vec3::new(0.0, layout.door_height * 0.5, layout.floor_half_depth),
            Vec3::new(
                layout.doorway_half_width,
                layout.door_height * 0.5,
                PANEL_THICKNESS,
            ),
            self.door.swing_angle(),
            hinge,
            DOOR_COLOR,
        ));

        // Avatar: body and head, both turned to the walk heading
        let pos = self.avatar.position;
        let heading = self.avatar.heading;
        mesh.merge(&generate_yaw_box(
            pos + Vec3::new(0.0, 0.8, 0.0),
            Vec3::new(0.3, 0.8, 0.2),
            heading,
            pos,
            AVATAR_BODY_COLOR,
        ));
        mesh.merge(&generate_yaw_box(
            pos + Vec3::new(0.0, 1.85, 0.0),
            Vec3::new(0.16, 0.16, 0.16),
            heading,
            pos,
            AVATAR_HEAD_COLOR,
        ));

        // Promo banner
        let (half_w, half_h) = self.banner.half_size();
        let color = [
            BANNER_COLOR[0],
            BANNER_COLOR[1],
            BANNER_COLOR[2],
            self.banner.visual.opacity,
        ];
        mesh.merge(&generate_quad(self.banner.center(), half_w, half_h, color));

        mesh
    }
}
