//! Core renderer abstractions

use cube_core::{SceneRegistry, Viewport};

use crate::camera::Camera;
use crate::config::RendererConfig;
use crate::draw_list::DrawList;

/// Everything a sub-renderer may read while drawing one frame
pub struct FrameContext<'a> {
    /// Scene to draw
    pub registry: &'a SceneRegistry,
    /// Active camera
    pub camera: &'a Camera,
    /// Viewport size in pixels
    pub viewport: Viewport,
    /// Colors and stroke settings
    pub config: &'a RendererConfig,
}

/// A pluggable piece of the frame
pub trait SubRenderer {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Layer for this renderer's primitives; see [`crate::sub_renderers::priorities`]
    fn priority(&self) -> i32;

    /// Append this renderer's primitives to `list`
    fn draw(&self, frame: &FrameContext<'_>, list: &mut DrawList);
}
