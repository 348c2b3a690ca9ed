//! Avatar Movement Controller
//!
//! Converts held movement keys into a per-frame position and heading
//! update for the controlled avatar. Movement direction is relative to
//! the camera's facing direction, so "forward" always walks away from
//! the viewer.
//!
//! The step is a fixed distance per rendered frame, deliberately not
//! scaled by elapsed time: the walk rate tracks the display refresh rate.
//! Flagged as a known quirk rather than corrected (see DESIGN.md).

use glam::{Quat, Vec3};

use crate::input::MovementKeys;

/// Distance the avatar covers per rendered frame while a movement key is held.
pub const MOVEMENT_SPEED: f32 = 0.1;

/// Walking avatar state: position on the shop floor plus the heading the
/// mesh should visually face.
///
/// Owned by the frame loop; `step` is called exactly once per rendered
/// frame with the sampled movement intent and the camera's current yaw.
#[derive(Debug, Clone)]
pub struct AvatarController {
    /// Avatar position in world space (feet, on the floor plane).
    pub position: Vec3,
    /// Heading angle in radians; the direction the avatar faces.
    pub heading: f32,
    /// Per-frame step length.
    pub movement_speed: f32,
}

impl AvatarController {
    /// Create an avatar standing at `position`, facing -Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            heading: std::f32::consts::PI,
            movement_speed: MOVEMENT_SPEED,
        }
    }

    /// Advance one frame of movement.
    ///
    /// Builds a camera-relative unit direction from the held keys, rotates
    /// it about the world up-axis by the camera yaw, then steps the
    /// position and turns the heading to match. With no keys held this is
    /// a no-op: the zero vector is skipped rather than normalized, so the
    /// heading never degenerates to NaN.
    pub fn step(&mut self, keys: &MovementKeys, camera_yaw: f32) {
        let dir = Vec3::new(
            keys.right_axis() as f32,
            0.0,
            -(keys.forward_axis() as f32),
        );

        if dir.length_squared() == 0.0 {
            return;
        }

        let rotated = Quat::from_rotation_y(camera_yaw) * dir.normalize();

        self.heading = rotated.x.atan2(rotated.z);
        self.position += rotated * self.movement_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-5;

    fn keys(forward: bool, backward: bool, left: bool, right: bool) -> MovementKeys {
        MovementKeys {
            forward,
            backward,
            left,
            right,
        }
    }

    #[test]
    fn test_idle_keys_leave_avatar_untouched() {
        let mut avatar = AvatarController::new(Vec3::new(1.0, 0.0, 2.0));
        let heading_before = avatar.heading;
        avatar.step(&keys(false, false, false, false), 0.7);
        assert_eq!(avatar.position, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(avatar.heading, heading_before);
    }

    #[test]
    fn test_forward_at_zero_yaw_walks_minus_z() {
        let mut avatar = AvatarController::new(Vec3::ZERO);
        avatar.step(&keys(true, false, false, false), 0.0);
        assert!((avatar.position - Vec3::new(0.0, 0.0, -MOVEMENT_SPEED)).length() < EPSILON);
        // atan2(0, -1): the avatar faces -Z, away from the default camera
        assert!((avatar.heading - PI).abs() < EPSILON);
    }

    #[test]
    fn test_step_length_is_movement_speed() {
        // Every single-key and corner-key combination moves exactly one step
        let combos = [
            keys(true, false, false, false),
            keys(false, true, false, false),
            keys(false, false, true, false),
            keys(false, false, false, true),
            keys(true, false, true, false),
            keys(true, false, false, true),
            keys(false, true, true, false),
            keys(false, true, false, true),
        ];
        for combo in combos {
            let mut avatar = AvatarController::new(Vec3::ZERO);
            avatar.step(&combo, 1.3);
            assert!(
                (avatar.position.length() - MOVEMENT_SPEED).abs() < EPSILON,
                "step length wrong for {combo:?}"
            );
        }
    }

    #[test]
    fn test_opposed_keys_cancel_to_no_movement() {
        let mut avatar = AvatarController::new(Vec3::ZERO);
        avatar.step(&keys(true, true, false, false), 0.0);
        assert_eq!(avatar.position, Vec3::ZERO);

        avatar.step(&keys(false, false, true, true), 0.0);
        assert_eq!(avatar.position, Vec3::ZERO);
    }

    #[test]
    fn test_movement_is_camera_relative() {
        // With the camera swung 90 degrees (yaw = pi/2), "forward" walks -X
        let mut avatar = AvatarController::new(Vec3::ZERO);
        avatar.step(&keys(true, false, false, false), PI / 2.0);
        assert!((avatar.position - Vec3::new(-MOVEMENT_SPEED, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_heading_faces_movement_direction() {
        // Strafing right at yaw 0 moves +X; atan2(1, 0) = pi/2
        let mut avatar = AvatarController::new(Vec3::ZERO);
        avatar.step(&keys(false, false, false, true), 0.0);
        assert!((avatar.heading - PI / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_heading_stable_when_stopping() {
        let mut avatar = AvatarController::new(Vec3::ZERO);
        avatar.step(&keys(false, false, true, false), 0.0);
        let heading = avatar.heading;
        avatar.step(&keys(false, false, false, false), 0.0);
        assert_eq!(avatar.heading, heading);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        // Forward+right must not be faster than forward alone
        let mut straight = AvatarController::new(Vec3::ZERO);
        straight.step(&keys(true, false, false, false), 0.0);
        let mut diagonal = AvatarController::new(Vec3::ZERO);
        diagonal.step(&keys(true, false, false, true), 0.0);
        assert!((straight.position.length() - diagonal.position.length()).abs() < EPSILON);
    }

    #[test]
    fn test_custom_speed_respected() {
        let mut avatar = AvatarController::new(Vec3::ZERO);
        avatar.movement_speed = 0.25;
        avatar.step(&keys(true, false, false, false), 0.0);
        assert!((avatar.position.z + 0.25).abs() < EPSILON);
    }
}
