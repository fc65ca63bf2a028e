//! Renderer configuration structures
//!
//! This module provides configurable settings for the renderer that can be
//! serialized and loaded from configuration files.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
    /// Eye position
    pub eye: [f32; 3],
    /// Look-at target
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            eye: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

impl CameraConfig {
    /// Fall back to the default eye and target when they cannot define a view
    ///
    /// The eye must differ from the target and must not sit straight above or
    /// below it, since the camera's up axis is fixed to +Y.
    pub fn sanitized(self) -> Self {
        let eye = Vec3::from(self.eye);
        let target = Vec3::from(self.target);
        let view = target - eye;
        if view.is_finite()
            && view.length_squared() > f32::EPSILON
            && view.normalize().cross(Vec3::Y).length_squared() > f32::EPSILON
        {
            return self;
        }

        let defaults = Self::default();
        tracing::warn!(
            "Camera eye {:?} cannot look at {:?}, using {:?} -> {:?}",
            self.eye,
            self.target,
            defaults.eye,
            defaults.target
        );
        Self {
            eye: defaults.eye,
            target: defaults.target,
            ..self
        }
    }
}

/// Scene colors (RGB, 0..1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorConfig {
    /// Cube faces
    pub cube: [f32; 3],
    /// Corner handles
    pub handle: [f32; 3],
    /// Selection outlines
    pub outline: [f32; 3],
    /// Viewport background
    pub background: [f32; 3],
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            cube: [0.0, 1.0, 0.0],
            handle: [1.0, 0.0, 0.0],
            outline: [0.0, 0.0, 1.0],
            background: [0.0, 0.0, 0.0],
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RendererConfig {
    /// Camera settings
    #[serde(default)]
    pub camera: CameraConfig,
    /// Color settings
    #[serde(default)]
    pub colors: ColorConfig,
    /// Outline stroke width in pixels
    #[serde(default = "default_outline_width")]
    pub outline_width: f32,
}

fn default_outline_width() -> f32 {
    1.5
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            colors: ColorConfig::default(),
            outline_width: default_outline_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_view_falls_back() {
        let defaults = CameraConfig::default();
        for (eye, target) in [
            ([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]),
            ([0.0, 5.0, 0.0], [0.0, 0.0, 0.0]),
            ([f32::NAN, 0.0, 5.0], [0.0, 0.0, 0.0]),
        ] {
            let config = CameraConfig {
                eye,
                target,
                fov_degrees: 60.0,
                ..CameraConfig::default()
            }
            .sanitized();
            assert_eq!(config.eye, defaults.eye);
            assert_eq!(config.target, defaults.target);
            assert_eq!(config.fov_degrees, 60.0);
        }
    }

    #[test]
    fn test_valid_view_kept() {
        let config = CameraConfig {
            eye: [3.0, 1.0, 4.0],
            ..CameraConfig::default()
        };
        assert_eq!(config.clone().sanitized(), config);
    }
}
