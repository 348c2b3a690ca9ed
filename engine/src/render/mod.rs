//! Render Module
//!
//! Core rendering infrastructure with wgpu: device/surface management and
//! the vertex-colored forward mesh pipeline used for all store geometry.

pub mod gpu_context;
pub mod uniforms;

pub use gpu_context::{GpuContext, GpuContextConfig};
pub use uniforms::SceneUniforms;
