//! Selection outline renderer

use super::{priorities, project_all};
use crate::draw_list::{DrawList, DrawPrimitive};
use crate::traits::{FrameContext, SubRenderer};

/// Draws the edges of every visible outline on top of the scene
#[derive(Debug, Default)]
pub struct OutlineRenderer;

impl SubRenderer for OutlineRenderer {
    fn name(&self) -> &str {
        "outlines"
    }

    fn priority(&self) -> i32 {
        priorities::OVERLAY
    }

    fn draw(&self, frame: &FrameContext<'_>, list: &mut DrawList) {
        let color = frame.config.colors.outline;
        let width = frame.config.outline_width;

        for group in frame.registry.groups() {
            if !group.outline.visible {
                continue;
            }
            for [a, b] in group.outline.segments() {
                let segment = [group.to_world(a), group.to_world(b)];
                if let Some((points, depth)) = project_all(frame.camera, frame.viewport, segment) {
                    list.push(
                        self.priority(),
                        depth,
                        DrawPrimitive::Line {
                            points,
                            color,
                            width,
                        },
                    );
                }
            }
        }
    }
}
