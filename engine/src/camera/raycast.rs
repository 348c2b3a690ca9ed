//! Raycast Module
//!
//! Provides raycasting from the camera through a screen point, used for
//! hover and click picking of store geometry (product displays, the door,
//! the promo banner).

use glam::Vec3;

/// Calculate ray direction from screen UV coordinates
///
/// # Arguments
/// * `camera_pos` - Camera position in world space
/// * `camera_target` - Point the camera is looking at
/// * `uv` - Normalized screen coordinates (0-1, 0-1) where (0,0) is bottom-left
/// * `aspect_ratio` - Screen aspect ratio (width / height)
/// * `fov` - Vertical field of view in radians
///
/// # Returns
/// Normalized ray direction in world space
pub fn get_ray_direction(
    camera_pos: Vec3,
    camera_target: Vec3,
    uv: (f32, f32),
    aspect_ratio: f32,
    fov: f32,
) -> Vec3 {
    // Convert UV to NDC (-1 to 1)
    let ndc = (uv.0 * 2.0 - 1.0, uv.1 * 2.0 - 1.0);
    let half_fov = (fov * 0.5_f32).tan();

    let forward = (camera_target - camera_pos).normalize();
    let up_world = Vec3::new(0.0, 1.0, 0.0);

    // Handle edge case when looking straight up/down
    let (right, up) = if forward.y.abs() > 0.99 {
        let right = Vec3::new(1.0, 0.0, 0.0);
        let up = right.cross(forward).normalize();
        (right, up)
    } else {
        let right = forward.cross(up_world).normalize();
        let up = right.cross(forward);
        (right, up)
    };

    (forward + right * ndc.0 * aspect_ratio * half_fov + up * ndc.1 * half_fov).normalize()
}

/// Intersect a ray with an axis-aligned bounding box (slab method).
///
/// # Arguments
/// * `origin` - Ray origin in world space
/// * `dir` - Normalized ray direction
/// * `min` - Minimum corner of the box
/// * `max` - Maximum corner of the box
///
/// # Returns
/// * `Some(t)` - Distance along the ray to the entry point (0 if the
///   origin is inside the box)
/// * `None` - If the ray misses the box or the box is entirely behind it
pub fn ray_aabb_intersection(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let (lo, hi) = (min[axis], max[axis]);

        if d.abs() < 1e-8 {
            // Ray parallel to the slab: miss unless origin is within it
            if o < lo || o > hi {
                return None;
            }
        } else {
            let inv_d = 1.0 / d;
            let mut t0 = (lo - o) * inv_d;
            let mut t1 = (hi - o) * inv_d;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }
    }

    if t_far < 0.0 {
        // Box entirely behind the ray
        return None;
    }

    Some(t_near.max(0.0))
}
