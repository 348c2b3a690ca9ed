//! Shared Types Module
//!
//! Contains vertex types, mesh structures, bounding boxes, and the CPU
//! mesh generation primitives shared across store modules.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

// ============================================================================
// GPU VERTEX TYPES
// ============================================================================

/// Vertex for store geometry
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

// Must match the 40-byte stride the mesh pipeline declares
static_assertions::const_assert_eq!(std::mem::size_of::<Vertex>(), 40);

// ============================================================================
// MESH STRUCTURE
// ============================================================================

/// A mesh with vertices and indices
#[derive(Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another mesh, rebasing its indices.
    pub fn merge(&mut self, other: &Mesh) {
        let base_idx = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base_idx));
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

// ============================================================================
// BOUNDING BOX
// ============================================================================

/// Axis-aligned bounding box used for hover/click picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build from a center point and half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

// ============================================================================
// MESH GENERATION PRIMITIVES
// ============================================================================

/// Generate an axis-aligned box mesh
pub fn generate_box(center: Vec3, half_extents: Vec3, color: [f32; 4]) -> Mesh {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);

    let corners = [
        Vec3::new(-hx, -hy, -hz),
        Vec3::new(hx, -hy, -hz),
        Vec3::new(hx, hy, -hz),
        Vec3::new(-hx, hy, -hz),
        Vec3::new(-hx, -hy, hz),
        Vec3::new(hx, -hy, hz),
        Vec3::new(hx, hy, hz),
        Vec3::new(-hx, hy, hz),
    ];

    let faces = [
        ([0, 1, 2, 3], Vec3::new(0.0, 0.0, -1.0)),
        ([5, 4, 7, 6], Vec3::new(0.0, 0.0, 1.0)),
        ([4, 0, 3, 7], Vec3::new(-1.0, 0.0, 0.0)),
        ([1, 5, 6, 2], Vec3::new(1.0, 0.0, 0.0)),
        ([3, 2, 6, 7], Vec3::new(0.0, 1.0, 0.0)),
        ([4, 5, 1, 0], Vec3::new(0.0, -1.0, 0.0)),
    ];

    for (face_indices, normal) in &faces {
        let base = vertices.len() as u32;
        for &i in face_indices {
            let pos = center + corners[i];
            vertices.push(Vertex {
                position: [pos.x, pos.y, pos.z],
                normal: [normal.x, normal.y, normal.z],
                color,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh { vertices, indices }
}

/// Generate a box rotated about the world up-axis, with an optional pivot.
///
/// `pivot` is the world-space point the rotation happens around; pass the
/// box center to spin in place (avatar), or a hinge edge for the door.
pub fn generate_yaw_box(
    center: Vec3,
    half_extents: Vec3,
    yaw: f32,
    pivot: Vec3,
    color: [f32; 4],
) -> Mesh {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let (sy, cy) = yaw.sin_cos();
    let rotate = |v: Vec3| -> Vec3 {
        Vec3::new(v.x * cy + v.z * sy, v.y, -v.x * sy + v.z * cy)
    };

    let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);

    let corners: [Vec3; 8] = [
        Vec3::new(-hx, -hy, -hz),
        Vec3::new(hx, -hy, -hz),
        Vec3::new(hx, hy, -hz),
        Vec3::new(-hx, hy, -hz),
        Vec3::new(-hx, -hy, hz),
        Vec3::new(hx, -hy, hz),
        Vec3::new(hx, hy, hz),
        Vec3::new(-hx, hy, hz),
    ];

    // Rotate each corner's offset from the pivot
    let world_corners: Vec<Vec3> = corners
        .iter()
        .map(|&c| pivot + rotate(center + c - pivot))
        .collect();

    let faces: [([usize; 4], Vec3); 6] = [
        ([0, 3, 2, 1], Vec3::new(0.0, 0.0, -1.0)),
        ([4, 5, 6, 7], Vec3::new(0.0, 0.0, 1.0)),
        ([0, 4, 7, 3], Vec3::new(-1.0, 0.0, 0.0)),
        ([1, 2, 6, 5], Vec3::new(1.0, 0.0, 0.0)),
        ([3, 7, 6, 2], Vec3::new(0.0, 1.0, 0.0)),
        ([0, 1, 5, 4], Vec3::new(0.0, -1.0, 0.0)),
    ];

    for (face_indices, local_normal) in &faces {
        let base = vertices.len() as u32;
        let world_normal = rotate(*local_normal);

        for &i in face_indices {
            let pos = world_corners[i];
            vertices.push(Vertex {
                position: [pos.x, pos.y, pos.z],
                normal: [world_normal.x, world_normal.y, world_normal.z],
                color,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh { vertices, indices }
}

/// Generate a vertical quad facing +Z, for the promo banner.
///
/// `center` is the quad center, `half_width`/`half_height` its extents in
/// the XY plane.
pub fn generate_quad(center: Vec3, half_width: f32, half_height: f32, color: [f32; 4]) -> Mesh {
    let corners = [
        Vec3::new(-half_width, -half_height, 0.0),
        Vec3::new(half_width, -half_height, 0.0),
        Vec3::new(half_width, half_height, 0.0),
        Vec3::new(-half_width, half_height, 0.0),
    ];

    let vertices = corners
        .iter()
        .map(|&c| {
            let pos = center + c;
            Vertex {
                position: [pos.x, pos.y, pos.z],
                normal: [0.0, 0.0, 1.0],
                color,
            }
        })
        .collect();

    Mesh {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}
