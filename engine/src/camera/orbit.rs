//! Orbit Camera for the Shop Floor
//!
//! A yaw/zoom orbit camera that tracks the walking avatar. The camera sits
//! behind and above its target on a circle whose radius is the zoom
//! distance; its height rises proportionally with that distance so the
//! viewing angle stays consistent across the whole zoom range.
//!
//! Controls:
//! - Left mouse drag: rotate the view around the avatar
//! - Scroll wheel: zoom in/out (fixed step per tick, clamped)
//!
//! This is window-system agnostic - it only manages camera state and
//! transformations. Input handling is done externally and forwarded here
//! as pixel/line deltas.

use glam::{Mat4, Vec3};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Closest the camera may come to the avatar.
pub const MIN_ZOOM: f32 = 2.0;
/// Farthest the camera may pull back from the avatar.
pub const MAX_ZOOM: f32 = 10.0;
/// Distance change per scroll wheel tick.
pub const ZOOM_SPEED: f32 = 0.5;
/// Yaw change in radians per pixel of horizontal drag.
pub const MOUSE_SENSITIVITY: f32 = 0.005;
/// Camera height above the avatar when fully zoomed out. The actual height
/// is this value scaled by `distance / MAX_ZOOM`.
pub const FIXED_HEIGHT: f32 = 4.0;

/// Default zoom distance for a fresh camera.
const DEFAULT_DISTANCE: f32 = 6.0;
/// Default field of view in degrees.
const DEFAULT_FOV: f32 = 50.0;
/// Near clip plane.
const DEFAULT_NEAR: f32 = 0.1;
/// Far clip plane.
const DEFAULT_FAR: f32 = 200.0;

// ============================================================================
// ORBIT CAMERA
// ============================================================================

/// Avatar-tracking orbit camera.
///
/// Owns the full camera control state: `yaw` (unbounded radians, wraps
/// implicitly through sin/cos), `distance` (always clamped to
/// `[MIN_ZOOM, MAX_ZOOM]`), and the pointer drag flag. Event handlers
/// write through the explicit methods below; the per-frame render path
/// reads the derived position and matrices. Single writer per field.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal angle in radians (unbounded).
    yaw: f32,
    /// Distance from the tracked target (clamped to [MIN_ZOOM, MAX_ZOOM]).
    distance: f32,
    /// Whether a pointer drag is in progress on the render surface.
    dragging: bool,
    /// Last cursor position in pixels, for drag deltas.
    last_cursor: Option<(f32, f32)>,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl OrbitCamera {
    /// Create a new orbit camera with default view settings.
    pub fn new(aspect: f32) -> Self {
        Self {
            yaw: 0.0,
            distance: DEFAULT_DISTANCE,
            dragging: false,
            last_cursor: None,
            aspect,
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    // ========================================================================
    // STATE ACCESS
    // ========================================================================

    /// Current horizontal angle in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current zoom distance.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Whether a pointer drag is currently rotating the view.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    // ========================================================================
    // POSITION & MATRICES
    // ========================================================================

    /// Offset from the tracked target to the camera eye.
    ///
    /// `(sin(yaw) * d, FIXED_HEIGHT * d / MAX_ZOOM, cos(yaw) * d)` - the
    /// height term makes the camera rise as it pulls back, keeping the
    /// downward viewing angle consistent.
    pub fn offset(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.distance,
            FIXED_HEIGHT * (self.distance / MAX_ZOOM),
            self.yaw.cos() * self.distance,
        )
    }

    /// Camera eye position for a given target (the avatar).
    pub fn eye_position(&self, target: Vec3) -> Vec3 {
        target + self.offset()
    }

    /// View matrix looking from the eye position at the target.
    pub fn view_matrix(&self, target: Vec3) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(target), target, Vec3::Y)
    }

    /// Perspective projection matrix (right-handed, wgpu depth range).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix for a given target.
    pub fn view_projection_matrix(&self, target: Vec3) -> Mat4 {
        self.projection_matrix() * self.view_matrix(target)
    }

    // ========================================================================
    // INPUT HANDLING
    // ========================================================================

    /// Begin a pointer drag (pointer-down on the render surface).
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// End a pointer drag (pointer-up or pointer-leave).
    ///
    /// Clears the stored cursor position so the next drag starts with a
    /// fresh delta instead of jumping.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.last_cursor = None;
    }

    /// Handle cursor movement. Call this on every cursor-moved event.
    ///
    /// While dragging, horizontal movement rotates the view: a rightward
    /// drag (positive dx) subtracts from yaw, which swings the camera so
    /// the scene appears to rotate with the pointer.
    pub fn handle_cursor_move(&mut self, x: f32, y: f32) {
        if self.dragging {
            if let Some((lx, _ly)) = self.last_cursor {
                let dx = x - lx;
                self.yaw -= dx * MOUSE_SENSITIVITY;
            }
            self.last_cursor = Some((x, y));
        }
    }

    /// Handle scroll wheel input for zooming.
    ///
    /// Steps the distance by `ZOOM_SPEED` per event against the sign of
    /// the delta (winit line deltas are positive scrolling up, which zooms
    /// in), then clamps to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn handle_scroll(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        self.distance = (self.distance - ZOOM_SPEED * delta.signum()).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Update the viewport aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Reset the view to the default angle and distance.
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.distance = DEFAULT_DISTANCE;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_defaults() {
        let cam = OrbitCamera::new(16.0 / 9.0);
        assert!(approx_eq(cam.yaw(), 0.0));
        assert!(approx_eq(cam.distance(), DEFAULT_DISTANCE));
        assert!(!cam.is_dragging());
    }

    #[test]
    fn test_offset_at_zero_yaw() {
        let mut cam = OrbitCamera::new(1.0);
        cam.distance = MAX_ZOOM;
        let offset = cam.offset();
        // yaw 0: camera sits on +Z, at full height
        assert!(approx_eq(offset.x, 0.0));
        assert!(approx_eq(offset.y, FIXED_HEIGHT));
        assert!(approx_eq(offset.z, MAX_ZOOM));
    }

    #[test]
    fn test_height_scales_with_zoom() {
        let mut cam = OrbitCamera::new(1.0);
        cam.distance = MIN_ZOOM;
        let expected = FIXED_HEIGHT * MIN_ZOOM / MAX_ZOOM;
        assert!(approx_eq(cam.offset().y, expected));

        cam.distance = MAX_ZOOM;
        assert!(approx_eq(cam.offset().y, FIXED_HEIGHT));
    }

    #[test]
    fn test_drag_rotates_yaw() {
        let mut cam = OrbitCamera::new(1.0);
        cam.begin_drag();
        cam.handle_cursor_move(100.0, 100.0);
        cam.handle_cursor_move(200.0, 100.0);
        // Rightward drag: yaw decreases by 100 px * sensitivity
        assert!(approx_eq(cam.yaw(), -100.0 * MOUSE_SENSITIVITY));
    }

    #[test]
    fn test_no_rotation_without_drag() {
        let mut cam = OrbitCamera::new(1.0);
        cam.handle_cursor_move(100.0, 100.0);
        cam.handle_cursor_move(300.0, 100.0);
        assert!(approx_eq(cam.yaw(), 0.0));
    }

    #[test]
    fn test_release_stops_rotation() {
        let mut cam = OrbitCamera::new(1.0);
        cam.begin_drag();
        cam.handle_cursor_move(100.0, 100.0);
        cam.handle_cursor_move(150.0, 100.0);
        let yaw_after_drag = cam.yaw();

        cam.end_drag();
        cam.handle_cursor_move(400.0, 100.0);
        assert!(approx_eq(cam.yaw(), yaw_after_drag));
    }

    #[test]
    fn test_new_drag_does_not_inherit_stale_delta() {
        let mut cam = OrbitCamera::new(1.0);
        cam.begin_drag();
        cam.handle_cursor_move(100.0, 100.0);
        cam.end_drag();

        // Cursor jumped far away while not dragging; pressing again must
        // not apply the jump as a delta.
        cam.begin_drag();
        cam.handle_cursor_move(900.0, 100.0);
        assert!(approx_eq(cam.yaw(), 0.0));
    }

    #[test]
    fn test_scroll_steps_and_clamps() {
        let mut cam = OrbitCamera::new(1.0);
        let d0 = cam.distance();
        cam.handle_scroll(1.0); // scroll up = zoom in
        assert!(approx_eq(cam.distance(), d0 - ZOOM_SPEED));

        cam.handle_scroll(-1.0); // scroll down = zoom out
        assert!(approx_eq(cam.distance(), d0));
    }

    #[test]
    fn test_distance_clamped_after_any_sequence() {
        let mut cam = OrbitCamera::new(1.0);
        for _ in 0..100 {
            cam.handle_scroll(3.0);
            assert!(cam.distance() >= MIN_ZOOM && cam.distance() <= MAX_ZOOM);
        }
        assert!(approx_eq(cam.distance(), MIN_ZOOM));

        for _ in 0..100 {
            cam.handle_scroll(-0.5);
            assert!(cam.distance() >= MIN_ZOOM && cam.distance() <= MAX_ZOOM);
        }
        assert!(approx_eq(cam.distance(), MAX_ZOOM));
    }

    #[test]
    fn test_zero_scroll_ignored() {
        let mut cam = OrbitCamera::new(1.0);
        let d0 = cam.distance();
        cam.handle_scroll(0.0);
        assert!(approx_eq(cam.distance(), d0));
    }

    #[test]
    fn test_eye_position_tracks_target() {
        let cam = OrbitCamera::new(1.0);
        let target = Vec3::new(3.0, 0.0, -2.0);
        let eye = cam.eye_position(target);
        assert!((eye - target - cam.offset()).length() < EPSILON);
    }

    #[test]
    fn test_view_matrix_is_valid() {
        let cam = OrbitCamera::new(1.0);
        let view = cam.view_matrix(Vec3::ZERO);
        let sum: f32 = view.to_cols_array().iter().map(|v| v.abs()).sum();
        assert!(sum > 0.0, "View matrix should not be all zeros");
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut cam = OrbitCamera::new(1.0);
        cam.resize(1920, 1080);
        assert!(approx_eq(cam.aspect, 1920.0 / 1080.0));
    }

    #[test]
    fn test_resize_zero_ignored() {
        let mut cam = OrbitCamera::new(1.5);
        cam.resize(0, 0);
        assert!(approx_eq(cam.aspect, 1.5), "Zero resize should be ignored");
    }

    #[test]
    fn test_reset() {
        let mut cam = OrbitCamera::new(1.0);
        cam.begin_drag();
        cam.handle_cursor_move(0.0, 0.0);
        cam.handle_cursor_move(500.0, 0.0);
        cam.handle_scroll(4.0);

        cam.reset();
        assert!(approx_eq(cam.yaw(), 0.0));
        assert!(approx_eq(cam.distance(), DEFAULT_DISTANCE));
    }
}
