//! GPU Uniform Buffers
//!
//! Data structures for GPU uniform buffers in the store shader pipeline.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Per-frame scene uniforms for the store shader
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub time: f32,
    // Keeps `resolution` on the 8-byte boundary WGSL gives a vec2
    pub _padding: f32,
    pub resolution: [f32; 2],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0, 0.0, 0.0, 0.0],
            time: 0.0,
            _padding: 0.0,
            resolution: [1280.0, 720.0],
        }
    }
}

// Uniform buffer size must be a multiple of 16 bytes
static_assertions::const_assert!(std::mem::size_of::<SceneUniforms>() % 16 == 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_default_identity() {
        let u = SceneUniforms::default();
        assert_eq!(u.view_proj, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(u.time, 0.0);
    }
}
