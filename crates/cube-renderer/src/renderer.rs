//! Main renderer

use cube_core::{SceneRegistry, Viewport};

use crate::camera::Camera;
use crate::config::RendererConfig;
use crate::draw_list::DrawList;
use crate::sub_renderers::{CubeRenderer, HandleRenderer, OutlineRenderer};
use crate::traits::{FrameContext, SubRenderer};

/// Owns the camera and the sub-renderers, and turns the scene into a
/// [`DrawList`] once per frame
pub struct Renderer {
    camera: Camera,
    config: RendererConfig,
    viewport: Viewport,
    sub_renderers: Vec<Box<dyn SubRenderer>>,
}

impl Renderer {
    /// Create a renderer with the built-in cube, handle and outline passes
    pub fn new(config: RendererConfig, viewport: Viewport) -> Self {
        let camera = Camera::from_config(&config.camera, viewport.aspect());
        let mut renderer = Self {
            camera,
            config,
            viewport,
            sub_renderers: Vec::new(),
        };
        renderer.add_sub_renderer(Box::new(CubeRenderer));
        renderer.add_sub_renderer(Box::new(HandleRenderer));
        renderer.add_sub_renderer(Box::new(OutlineRenderer));
        renderer
    }

    /// Register an additional sub-renderer
    pub fn add_sub_renderer(&mut self, sub_renderer: Box<dyn SubRenderer>) {
        tracing::debug!(
            "Registered sub-renderer '{}' (priority {})",
            sub_renderer.name(),
            sub_renderer.priority()
        );
        self.sub_renderers.push(sub_renderer);
        self.sub_renderers.sort_by_key(|r| r.priority());
    }

    /// Get the camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Get the configuration
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Current viewport size
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Background clear color (RGB)
    pub fn background_color(&self) -> [f32; 3] {
        self.config.colors.background
    }

    /// Resize the viewport, keeping the camera aspect in sync
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        tracing::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
        self.camera.update_aspect(viewport.aspect());
    }

    /// Build this frame's draw list
    pub fn render(&self, registry: &SceneRegistry) -> DrawList {
        let frame = FrameContext {
            registry,
            camera: &self.camera,
            viewport: self.viewport,
            config: &self.config,
        };

        let mut list = DrawList::new();
        for sub_renderer in &self.sub_renderers {
            sub_renderer.draw(&frame, &mut list);
        }
        list.finish();
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_list::DrawPrimitive;
    use cube_core::{SceneConfig, SelectionSet};

    fn count(list: &DrawList) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for primitive in list.primitives() {
            match primitive {
                DrawPrimitive::Triangle { .. } => counts.0 += 1,
                DrawPrimitive::Disc { .. } => counts.1 += 1,
                DrawPrimitive::Line { .. } => counts.2 += 1,
            }
        }
        counts
    }

    #[test]
    fn test_render_stack() {
        let renderer = Renderer::new(RendererConfig::default(), Viewport::new(800.0, 600.0));
        let mut registry = SceneRegistry::with_stack(&SceneConfig::default());

        // Fresh outlines start visible
        let (triangles, discs, lines) = count(&renderer.render(&registry));
        assert!(triangles > 0);
        assert!(triangles < 3 * 12);
        assert_eq!(discs, 24);
        assert_eq!(lines, 36);

        let mut selection = SelectionSet::default();
        selection.toggle(registry.ids()[0]);
        registry.refresh_outlines(&selection);
        let (_, _, lines) = count(&renderer.render(&registry));
        assert_eq!(lines, 12);
    }

    #[test]
    fn test_outlines_painted_last() {
        let renderer = Renderer::new(RendererConfig::default(), Viewport::new(800.0, 600.0));
        let registry = SceneRegistry::with_stack(&SceneConfig::default());
        let list = renderer.render(&registry);

        let first_line = list
            .primitives()
            .position(|p| matches!(p, DrawPrimitive::Line { .. }))
            .unwrap();
        assert!(
            list.primitives()
                .skip(first_line)
                .all(|p| matches!(p, DrawPrimitive::Line { .. }))
        );
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut renderer = Renderer::new(RendererConfig::default(), Viewport::new(800.0, 600.0));
        renderer.resize(Viewport::new(1000.0, 500.0));
        assert_eq!(renderer.camera().aspect, 2.0);
        assert_eq!(renderer.viewport(), Viewport::new(1000.0, 500.0));
    }
}
