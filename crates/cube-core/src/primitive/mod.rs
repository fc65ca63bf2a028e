//! Primitive mesh generation
//!
//! Cubes are drawn as flat-shaded triangle meshes built from the same
//! corner layout the handles use.

mod box_mesh;

pub use box_mesh::{BOX_FACES, generate_box_mesh};

/// Mesh data: vertices, normals, and triangle indices
pub type MeshData = (Vec<[f32; 3]>, Vec<[f32; 3]>, Vec<u32>);

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_box_mesh() {
        let (vertices, normals, indices) = generate_box_mesh(1.0, Vec3::ZERO);
        assert_eq!(vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(normals.len(), 24);
        assert_eq!(indices.len(), 36); // 6 faces * 2 triangles * 3 indices
    }

    #[test]
    fn test_box_dimensions() {
        let (vertices, _, _) = generate_box_mesh(2.0, Vec3::new(0.0, 2.0, 0.0));
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for v in &vertices {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }
        assert!((max[0] - min[0] - 2.0).abs() < 0.001);
        assert!((min[1] - 1.0).abs() < 0.001);
        assert!((max[1] - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_box_winding_faces_outward() {
        let (vertices, normals, indices) = generate_box_mesh(1.0, Vec3::ZERO);
        for tri in indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(vertices[i as usize]));
            let normal = Vec3::from(normals[tri[0] as usize]);
            assert!((b - a).cross(c - a).dot(normal) > 0.0);
        }
    }
}
