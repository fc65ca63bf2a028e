//! Cube mesh generation

use glam::Vec3;

use super::MeshData;
use crate::geometry::corners_of;

/// Faces as (corner indices counter-clockwise seen from outside, normal)
pub const BOX_FACES: [([usize; 4], [f32; 3]); 6] = [
    ([1, 3, 7, 5], [1.0, 0.0, 0.0]),
    ([2, 0, 4, 6], [-1.0, 0.0, 0.0]),
    ([3, 2, 6, 7], [0.0, 1.0, 0.0]),
    ([0, 1, 5, 4], [0.0, -1.0, 0.0]),
    ([4, 5, 7, 6], [0.0, 0.0, 1.0]),
    ([2, 3, 1, 0], [0.0, 0.0, -1.0]),
];

/// Generate a cube mesh
///
/// # Arguments
/// * `size` - Edge length
/// * `center` - Cube center
///
/// # Returns
/// (vertices, normals, indices) - 24 vertices (4 per face), 12 triangles
pub fn generate_box_mesh(size: f32, center: Vec3) -> MeshData {
    let corners = corners_of(size, center);

    // 6 faces, 4 vertices each (for proper normals)
    let mut vertices = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in BOX_FACES {
        let base = vertices.len() as u32;
        for corner in quad {
            vertices.push(corners[corner].to_array());
            normals.push(normal);
        }
        // Two triangles per face
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, normals, indices)
}
