//! Cube corner and edge geometry
//!
//! Corner `i` sits at `-half` or `+half` on each axis depending on bit 0 (x),
//! bit 1 (y) and bit 2 (z) of `i`. Handles rely on this order being the same
//! for every cube.

use glam::Vec3;

use crate::constants::{CUBE_CORNER_COUNT, CUBE_EDGE_COUNT};

/// Corner index pairs joined by a cube edge (4 along X, 4 along Y, 4 along Z)
pub const CUBE_EDGES: [(usize, usize); CUBE_EDGE_COUNT] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Calculate the eight corners of an axis-aligned cube
///
/// # Arguments
/// * `size` - Edge length
/// * `center` - Cube center
pub fn corners_of(size: f32, center: Vec3) -> [Vec3; CUBE_CORNER_COUNT] {
    let half = size / 2.0;
    std::array::from_fn(|i| {
        let sign = |bit: usize| if i & (1 << bit) == 0 { -1.0 } else { 1.0 };
        center + Vec3::new(sign(0), sign(1), sign(2)) * half
    })
}

/// Calculate the twelve edges of an axis-aligned cube as corner pairs
pub fn edges_of(size: f32, center: Vec3) -> [[Vec3; 2]; CUBE_EDGE_COUNT] {
    let corners = corners_of(size, center);
    CUBE_EDGES.map(|(a, b)| [corners[a], corners[b]])
}
