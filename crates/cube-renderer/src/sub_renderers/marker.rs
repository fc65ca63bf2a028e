//! Corner handle renderer

use super::priorities;
use crate::draw_list::{DrawList, DrawPrimitive};
use crate::traits::{FrameContext, SubRenderer};

/// Draws corner handles as screen-space discs sized by perspective
#[derive(Debug, Default)]
pub struct HandleRenderer;

impl SubRenderer for HandleRenderer {
    fn name(&self) -> &str {
        "handles"
    }

    fn priority(&self) -> i32 {
        priorities::SCENE
    }

    fn draw(&self, frame: &FrameContext<'_>, list: &mut DrawList) {
        let right = frame.camera.right();
        let color = frame.config.colors.handle;

        for group in frame.registry.groups() {
            for handle in &group.handles {
                let center = group.to_world(handle.position);
                let rim = center + right * handle.radius * group.scale;

                let (Some((screen_center, depth)), Some((screen_rim, _))) = (
                    frame.camera.world_to_screen(center, frame.viewport),
                    frame.camera.world_to_screen(rim, frame.viewport),
                ) else {
                    continue;
                };

                list.push(
                    self.priority(),
                    depth,
                    DrawPrimitive::Disc {
                        center: screen_center,
                        radius: screen_center.distance(screen_rim),
                        color,
                    },
                );
            }
        }
    }
}
