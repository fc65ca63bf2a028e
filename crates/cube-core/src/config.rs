//! Scene and interaction configuration
//!
//! Both structs are serde-friendly so the frontend can embed them in its
//! configuration file. Missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CUBE_COUNT, DEFAULT_CUBE_SIZE, DEFAULT_CUBE_SPACING, GROWTH_FACTOR, HANDLE_RADIUS,
};

/// Startup scene layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of cubes stacked along the Y axis
    pub cube_count: u32,
    /// Edge length of each cube
    pub cube_size: f32,
    /// Distance between neighbouring cube centers
    pub spacing: f32,
    /// Radius of the corner handle spheres
    pub handle_radius: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cube_count: DEFAULT_CUBE_COUNT,
            cube_size: DEFAULT_CUBE_SIZE,
            spacing: DEFAULT_CUBE_SPACING,
            handle_radius: HANDLE_RADIUS,
        }
    }
}

impl SceneConfig {
    /// Replace non-finite or non-positive sizes with their defaults
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            cube_count: self.cube_count,
            cube_size: positive_or(self.cube_size, defaults.cube_size, "cube_size"),
            spacing: if self.spacing.is_finite() {
                self.spacing
            } else {
                tracing::warn!(
                    "Invalid spacing {}, using {}",
                    self.spacing,
                    defaults.spacing
                );
                defaults.spacing
            },
            handle_radius: positive_or(self.handle_radius, defaults.handle_radius, "handle_radius"),
        }
    }
}

fn positive_or(value: f32, default: f32, name: &str) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        tracing::warn!("Invalid {} {}, using {}", name, value, default);
        default
    }
}

/// Resize behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    /// Scale multiplier per pointer-move step (divisor when shrinking)
    pub growth_factor: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            growth_factor: GROWTH_FACTOR,
        }
    }
}

impl InteractionConfig {
    /// Fall back to [`GROWTH_FACTOR`] unless the factor is finite and above 1
    ///
    /// A factor at or below 1 would swap or cancel growing and shrinking, and
    /// zero drives the scale to NaN after one grow/shrink pair.
    pub fn sanitized(self) -> Self {
        if self.growth_factor.is_finite() && self.growth_factor > 1.0 {
            self
        } else {
            tracing::warn!(
                "Invalid growth_factor {}, using {}",
                self.growth_factor,
                GROWTH_FACTOR
            );
            Self::default()
        }
    }
}
