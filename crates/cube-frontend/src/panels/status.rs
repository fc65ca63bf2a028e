//! Status bar

use cube_core::InteractionMode;

use super::Panel;
use crate::state::EditorState;

/// One-line summary of the selection and any resize in progress
#[derive(Default)]
pub struct StatusPanel;

impl Panel for StatusPanel {
    fn name(&self) -> &str {
        "Status"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut EditorState) {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Selected: {} / {}",
                state.selection().len(),
                state.registry().len()
            ));
            ui.separator();

            match state.controller().state().mode {
                InteractionMode::Idle => {
                    ui.label("Click a cube to select, drag a red corner to resize");
                }
                InteractionMode::Resizing { cube, .. } => {
                    let scale = state
                        .registry()
                        .group(cube)
                        .map(|g| g.scale)
                        .unwrap_or(1.0);
                    ui.label(format!("Resizing: scale {:.3}", scale));
                }
            }
        });
    }
}
