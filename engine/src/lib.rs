//! Storewalk Engine Library
//!
//! Engine modules for the walkable 3D storefront: platform-agnostic input
//! sampling, the avatar movement integrator, the avatar-tracking orbit
//! camera, the keyframe animation timeline, and the wgpu render context.
//!
//! # Modules
//!
//! - [`input`] - Platform-agnostic keyboard and mouse state
//! - [`avatar`] - Per-frame kinematic movement for the controlled avatar
//! - [`camera`] - Orbit camera and picking rays
//! - [`animation`] - Easing curves and keyframe timelines
//! - [`render`] - wgpu device/surface management and the mesh pipeline
//!
//! # Example
//!
//! ```ignore
//! use storewalk_engine::avatar::AvatarController;
//! use storewalk_engine::camera::OrbitCamera;
//! use storewalk_engine::input::{InputState, KeyCode};
//! use glam::Vec3;
//!
//! let mut input = InputState::new();
//! let mut avatar = AvatarController::new(Vec3::ZERO);
//! let mut camera = OrbitCamera::new(16.0 / 9.0);
//!
//! // Each rendered frame:
//! input.keyboard.handle_key(KeyCode::W, true);
//! avatar.step(&input.keyboard.movement, camera.yaw());
//! let view_proj = camera.view_projection_matrix(avatar.position);
//! ```

pub mod animation;
pub mod avatar;
pub mod camera;
pub mod input;
pub mod render;

// Store-specific modules (located in src/store/ directory)
#[path = "../../src/store/mod.rs"]
pub mod store;

// Re-export commonly used engine types at crate level for convenience
pub use animation::{Easing, Segment, Timeline};
pub use avatar::AvatarController;
pub use camera::OrbitCamera;
pub use input::{InputState, KeyCode, KeyboardState, MouseButton, MouseState};
pub use render::{GpuContext, GpuContextConfig, SceneUniforms};
