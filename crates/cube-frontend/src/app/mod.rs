//! Main application module

use cube_core::Viewport;

use crate::config::{AppConfig, ConfigManager};
use crate::panels::{Panel, StatusPanel, ViewportPanel};
use crate::state::EditorState;

/// Main application
pub struct CubeEditorApp {
    state: EditorState,
    viewport_panel: ViewportPanel,
    status_panel: StatusPanel,
}

impl CubeEditorApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(&load_config())
    }

    /// Create an app from an explicit configuration
    pub fn with_config(config: &AppConfig) -> Self {
        // The real size arrives with the first frame
        let state = EditorState::new(config, Viewport::new(800.0, 600.0));
        Self {
            state,
            viewport_panel: ViewportPanel::new(),
            status_panel: StatusPanel,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> AppConfig {
    ConfigManager::load().config().clone()
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> AppConfig {
    ConfigManager::default().config().clone()
}

impl eframe::App for CubeEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_panel.ui(ui, &mut self.state);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.viewport_panel.ui(ui, &mut self.state);
            });
    }
}
