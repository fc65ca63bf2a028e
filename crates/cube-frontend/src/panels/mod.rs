//! UI panels

mod status;
mod viewport;

pub use status::StatusPanel;
pub use viewport::ViewportPanel;

use crate::state::EditorState;

/// Panel trait for editor UI regions
pub trait Panel {
    /// Panel name, used for logging and widget IDs
    fn name(&self) -> &str;

    /// Draw the panel UI
    fn ui(&mut self, ui: &mut egui::Ui, state: &mut EditorState);
}
