//! Cube Editor Frontend
//!
//! egui-based application: a viewport showing the cube stack, routing
//! pointer input into the interaction controller.

pub mod app;
pub mod config;
pub mod panels;
pub mod state;

// Re-exports for convenience
pub use app::CubeEditorApp;
pub use config::{AppConfig, ConfigError, ConfigManager};
pub use state::EditorState;
