//! Camera Module
//!
//! Avatar-tracking orbit camera and screen-ray computation for picking.

pub mod orbit;
pub mod raycast;

pub use orbit::{FIXED_HEIGHT, MAX_ZOOM, MIN_ZOOM, MOUSE_SENSITIVITY, OrbitCamera, ZOOM_SPEED};
pub use raycast::{get_ray_direction, ray_aabb_intersection};
