//! Application state module

use cube_core::{InteractionController, PointerEvent, SceneRegistry, SelectionSet, Viewport};
use cube_renderer::{DrawList, Renderer};

use crate::config::AppConfig;

/// Editor state: the interaction controller (which owns the scene) plus
/// the renderer (which owns the camera)
pub struct EditorState {
    controller: InteractionController,
    renderer: Renderer,
}

impl EditorState {
    /// Build the startup scene from configuration
    pub fn new(config: &AppConfig, viewport: Viewport) -> Self {
        let controller =
            InteractionController::with_stack(&config.scene, config.interaction.clone());
        let renderer = Renderer::new(config.renderer.clone(), viewport);
        tracing::info!("Scene created with {} cubes", controller.registry().len());
        Self {
            controller,
            renderer,
        }
    }

    /// Route one pointer event through the camera into the controller
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let viewport = self.renderer.viewport();
        self.controller
            .handle(event, self.renderer.camera(), viewport);
    }

    /// Track the viewport size
    pub fn resize(&mut self, viewport: Viewport) {
        self.renderer.resize(viewport);
    }

    /// Build this frame's draw list
    pub fn render(&self) -> DrawList {
        self.renderer.render(self.controller.registry())
    }

    pub fn registry(&self) -> &SceneRegistry {
        self.controller.registry()
    }

    pub fn selection(&self) -> &SelectionSet {
        self.controller.selection()
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}
