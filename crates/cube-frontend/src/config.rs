//! Application configuration
//!
//! Settings live in a single RON file. Every section is optional; anything
//! missing falls back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cube_core::{InteractionConfig, SceneConfig};
use cube_renderer::RendererConfig;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "CUBE_EDITOR_CONFIG";

/// Config file used when the environment variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "cube-editor.ron";

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Startup scene layout
    pub scene: SceneConfig,
    /// Resize behaviour
    pub interaction: InteractionConfig,
    /// Camera and colors
    pub renderer: RendererConfig,
}

impl AppConfig {
    /// Parse from RON text, replacing unusable values with defaults
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        ron::from_str::<Self>(content)
            .map(Self::sanitized)
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Replace out-of-range values in every section with their defaults
    pub fn sanitized(self) -> Self {
        Self {
            scene: self.scene.sanitized(),
            interaction: self.interaction.sanitized(),
            renderer: RendererConfig {
                camera: self.renderer.camera.sanitized(),
                ..self.renderer
            },
        }
    }

    /// Serialize to pretty RON text
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Config-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Loads and saves [`AppConfig`]
#[derive(Debug, Default)]
pub struct ConfigManager {
    path: Option<PathBuf>,
    config: AppConfig,
}

impl ConfigManager {
    /// Config path from the environment, or the default file name
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load from the default path, falling back to defaults on any problem
    pub fn load() -> Self {
        Self::load_or_default(Self::default_path())
    }

    /// Load from `path`, falling back to defaults on any problem
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = if path.exists() {
            match Self::read(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to load config {}: {}", path.display(), e);
                    AppConfig::default()
                }
            }
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            AppConfig::default()
        };

        Self {
            path: Some(path),
            config,
        }
    }

    /// Read and parse a config file
    pub fn read(path: &Path) -> Result<AppConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        AppConfig::from_ron_str(&content)
    }

    /// Write the current config back to its path
    pub fn save(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Err(ConfigError::Io("No config path set".into()));
        };
        let content = self.config.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Current config
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current config, mutably
    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// Path this manager reads from and saves to
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
