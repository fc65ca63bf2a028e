//! Cube face renderer

use glam::Vec3;

use cube_core::generate_box_mesh;

use super::{priorities, project_all};
use crate::draw_list::{DrawList, DrawPrimitive};
use crate::traits::{FrameContext, SubRenderer};

/// Draws every cube as flat, unlit triangles with back faces culled
#[derive(Debug, Default)]
pub struct CubeRenderer;

impl SubRenderer for CubeRenderer {
    fn name(&self) -> &str {
        "cubes"
    }

    fn priority(&self) -> i32 {
        priorities::SCENE
    }

    fn draw(&self, frame: &FrameContext<'_>, list: &mut DrawList) {
        let eye = frame.camera.position;
        let color = frame.config.colors.cube;

        for group in frame.registry.groups() {
            let (vertices, normals, indices) =
                generate_box_mesh(group.cube.size, group.cube.position);
            let world: Vec<Vec3> = vertices
                .iter()
                .map(|v| group.to_world(Vec3::from(*v)))
                .collect();

            for tri in indices.chunks_exact(3) {
                let corners = [tri[0], tri[1], tri[2]].map(|i| world[i as usize]);
                let normal = Vec3::from(normals[tri[0] as usize]);
                if normal.dot(eye - corners[0]) <= 0.0 {
                    continue;
                }

                let Some((points, depth)) = project_all(frame.camera, frame.viewport, corners)
                else {
                    continue;
                };
                list.push(
                    self.priority(),
                    depth,
                    DrawPrimitive::Triangle { points, color },
                );
            }
        }
    }
}
