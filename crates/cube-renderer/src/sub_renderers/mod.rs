//! Built-in sub-renderers for the cube editor.
//!
//! - [`mesh::CubeRenderer`]: cube faces
//! - [`marker::HandleRenderer`]: corner handles
//! - [`outline::OutlineRenderer`]: selection outlines

pub mod marker;
pub mod mesh;
pub mod outline;

use glam::{Vec2, Vec3};

use crate::camera::Camera;
use cube_core::Viewport;

pub use marker::HandleRenderer;
pub use mesh::CubeRenderer;
pub use outline::OutlineRenderer;

/// Render priorities for sub-renderers.
///
/// Lower values are painted first. Primitives sharing a priority are depth
/// sorted together, so cubes and handles occlude each other correctly.
pub mod priorities {
    /// Cube faces and handles
    pub const SCENE: i32 = 100;
    /// Outlines are painted over the scene
    pub const OVERLAY: i32 = 200;
}

/// Project several world points, failing if any is behind the eye.
/// Returns the screen points and their mean depth.
pub(crate) fn project_all<const N: usize>(
    camera: &Camera,
    viewport: Viewport,
    points: [Vec3; N],
) -> Option<([Vec2; N], f32)> {
    let mut screen = [Vec2::ZERO; N];
    let mut depth = 0.0;
    for (i, point) in points.into_iter().enumerate() {
        let (pos, z) = camera.world_to_screen(point, viewport)?;
        screen[i] = pos;
        depth += z;
    }
    Some((screen, depth / N as f32))
}
