//! Scene object registry
//!
//! A [`CubeGroup`] bundles one [`Cube`], its eight [`CornerHandle`]s and its
//! [`Outline`]. Groups are indexed by [`CubeId`] and never removed.

use std::collections::HashMap;
use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SceneConfig;
use crate::constants::CUBE_CORNER_COUNT;
use crate::geometry::{corners_of, edges_of};
use crate::interaction::SelectionSet;

/// Identifier shared by a cube, its group, its handles and its outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CubeId(pub Uuid);

impl CubeId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CubeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CubeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cube mesh
#[derive(Debug, Clone)]
pub struct Cube {
    pub id: CubeId,
    /// Center, local to the owning group
    pub position: Vec3,
    /// Edge length, fixed at creation
    pub size: f32,
}

impl Cube {
    /// Half the edge length
    pub fn half_extent(&self) -> f32 {
        self.size / 2.0
    }
}

/// Pickable sphere marker at one cube corner
#[derive(Debug, Clone)]
pub struct CornerHandle {
    /// Owning cube
    pub cube: CubeId,
    /// Corner index, see [`corners_of`]
    pub corner: usize,
    /// Position local to the owning group
    pub position: Vec3,
    pub radius: f32,
}

/// Wireframe overlay tracing a cube's edges
#[derive(Debug, Clone)]
pub struct Outline {
    /// Owning cube
    pub cube: CubeId,
    /// Copied from the cube at creation
    pub position: Vec3,
    /// Copied from the cube at creation
    pub size: f32,
    pub visible: bool,
}

impl Outline {
    /// Edge segments local to the owning group
    pub fn segments(&self) -> impl Iterator<Item = [Vec3; 2]> {
        edges_of(self.size, self.position).into_iter()
    }
}

/// The unit of resizing
#[derive(Debug, Clone)]
pub struct CubeGroup {
    pub id: CubeId,
    pub cube: Cube,
    pub handles: [CornerHandle; CUBE_CORNER_COUNT],
    pub outline: Outline,
    /// Uniform scale about the world origin
    pub scale: f32,
}

impl CubeGroup {
    /// Map a group-local point into world space
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        local * self.scale
    }
}

/// Registry-level consistency errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SceneError {
    #[error("Handle {corner} of group {group} points at cube {cube}")]
    OrphanedHandle {
        group: CubeId,
        cube: CubeId,
        corner: usize,
    },
    #[error("Outline of group {group} points at cube {cube}")]
    OrphanedOutline { group: CubeId, cube: CubeId },
}

/// Owns every cube group in the scene
#[derive(Debug, Default)]
pub struct SceneRegistry {
    groups: HashMap<CubeId, CubeGroup>,
    /// Creation order, for stable iteration
    order: Vec<CubeId>,
    handle_radius: f32,
}

impl SceneRegistry {
    /// Create an empty registry
    pub fn new(handle_radius: f32) -> Self {
        Self {
            groups: HashMap::new(),
            order: Vec::new(),
            handle_radius,
        }
    }

    /// Create the startup stack described by `config`
    ///
    /// Cubes are centered on the Y axis and spread symmetrically around the
    /// origin when the count is odd (three cubes land at y = -2, 0, 2).
    pub fn with_stack(config: &SceneConfig) -> Self {
        let config = config.clone().sanitized();
        let mut registry = Self::new(config.handle_radius);
        let offset = (config.cube_count / 2) as f32 * config.spacing;
        for i in 0..config.cube_count {
            let y = i as f32 * config.spacing - offset;
            registry.create_cube_group(config.cube_size, Vec3::new(0.0, y, 0.0));
        }
        registry
    }

    /// Build a cube with its handles and outline and index the group
    pub fn create_cube_group(&mut self, size: f32, center: Vec3) -> CubeId {
        let id = CubeId::new();
        let cube = Cube {
            id,
            position: center,
            size,
        };

        let corners = corners_of(size, center);
        let handles = std::array::from_fn(|corner| CornerHandle {
            cube: id,
            corner,
            position: corners[corner],
            radius: self.handle_radius,
        });

        let outline = Outline {
            cube: id,
            position: cube.position,
            size: cube.size,
            visible: true,
        };

        self.groups.insert(
            id,
            CubeGroup {
                id,
                cube,
                handles,
                outline,
                scale: 1.0,
            },
        );
        self.order.push(id);

        tracing::debug!("Created cube group {} at {:?}", id, center);
        id
    }

    /// Get a cube by ID
    pub fn cube(&self, id: CubeId) -> Option<&Cube> {
        self.groups.get(&id).map(|g| &g.cube)
    }

    /// Get a group by ID
    pub fn group(&self, id: CubeId) -> Option<&CubeGroup> {
        self.groups.get(&id)
    }

    /// Get a mutable group by ID
    pub fn group_mut(&mut self, id: CubeId) -> Option<&mut CubeGroup> {
        self.groups.get_mut(&id)
    }

    /// Get the outline belonging to a cube
    pub fn outline(&self, id: CubeId) -> Option<&Outline> {
        self.groups.get(&id).map(|g| &g.outline)
    }

    /// Iterate over groups in creation order
    pub fn groups(&self) -> impl Iterator<Item = &CubeGroup> {
        self.order.iter().filter_map(|id| self.groups.get(id))
    }

    /// Group IDs in creation order
    pub fn ids(&self) -> &[CubeId] {
        &self.order
    }

    /// Iterate over every corner handle in the scene
    pub fn handles(&self) -> impl Iterator<Item = &CornerHandle> {
        self.groups().flat_map(|g| g.handles.iter())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Show exactly the outlines whose cube is selected
    pub fn refresh_outlines(&mut self, selection: &SelectionSet) {
        for group in self.groups.values_mut() {
            group.outline.visible = selection.contains(group.id);
        }
    }

    /// Check that every handle and outline belongs to its group
    pub fn validate(&self) -> Result<(), SceneError> {
        for (id, group) in &self.groups {
            if let Some(handle) = group.handles.iter().find(|h| h.cube != *id) {
                return Err(SceneError::OrphanedHandle {
                    group: *id,
                    cube: handle.cube,
                    corner: handle.corner,
                });
            }
            if group.outline.cube != *id {
                return Err(SceneError::OrphanedOutline {
                    group: *id,
                    cube: group.outline.cube,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_CUBE_SIZE, HANDLE_RADIUS};

    #[test]
    fn test_create_cube_group() {
        let mut registry = SceneRegistry::new(0.1);
        let id = registry.create_cube_group(1.0, Vec3::new(0.0, 2.0, 0.0));

        let group = registry.group(id).unwrap();
        assert_eq!(group.id, id);
        assert_eq!(group.cube.id, id);
        assert_eq!(group.scale, 1.0);
        assert_eq!(group.handles.len(), 8);
        assert!(group.handles.iter().all(|h| h.cube == id));
        assert_eq!(group.outline.cube, id);
        assert_eq!(group.outline.position, group.cube.position);
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_handles_sit_on_corners() {
        let mut registry = SceneRegistry::new(0.1);
        let center = Vec3::new(1.0, 1.0, 1.0);
        let id = registry.create_cube_group(2.0, center);
        let corners = corners_of(2.0, center);

        for handle in &registry.group(id).unwrap().handles {
            assert_eq!(handle.position, corners[handle.corner]);
            assert_eq!(handle.radius, 0.1);
        }
    }

    #[test]
    fn test_stack_layout() {
        let registry = SceneRegistry::with_stack(&SceneConfig::default());
        let ys: Vec<f32> = registry.groups().map(|g| g.cube.position.y).collect();
        assert_eq!(ys, vec![-2.0, 0.0, 2.0]);
        assert_eq!(registry.handles().count(), 24);
    }

    #[test]
    fn test_stack_ignores_degenerate_sizes() {
        let config = SceneConfig {
            cube_size: -1.0,
            handle_radius: f32::NAN,
            ..SceneConfig::default()
        };
        let registry = SceneRegistry::with_stack(&config);
        for group in registry.groups() {
            assert_eq!(group.cube.size, DEFAULT_CUBE_SIZE);
            assert!(group.handles.iter().all(|h| h.radius == HANDLE_RADIUS));
        }
    }

    #[test]
    fn test_lookup_miss() {
        let registry = SceneRegistry::with_stack(&SceneConfig::default());
        let unknown = CubeId::new();
        assert!(registry.cube(unknown).is_none());
        assert!(registry.group(unknown).is_none());
        assert!(registry.outline(unknown).is_none());
    }

    #[test]
    fn test_refresh_outlines() {
        let mut registry = SceneRegistry::with_stack(&SceneConfig::default());
        let ids = registry.ids().to_vec();
        let mut selection = SelectionSet::default();
        selection.toggle(ids[1]);

        registry.refresh_outlines(&selection);

        for id in &ids {
            assert_eq!(registry.outline(*id).unwrap().visible, *id == ids[1]);
        }
    }

    #[test]
    fn test_validate_detects_orphans() {
        let mut registry = SceneRegistry::new(0.1);
        let id = registry.create_cube_group(1.0, Vec3::ZERO);
        let stranger = CubeId::new();

        registry.group_mut(id).unwrap().handles[3].cube = stranger;
        assert!(matches!(
            registry.validate(),
            Err(SceneError::OrphanedHandle { corner: 3, .. })
        ));

        registry.group_mut(id).unwrap().handles[3].cube = id;
        registry.group_mut(id).unwrap().outline.cube = stranger;
        assert!(matches!(
            registry.validate(),
            Err(SceneError::OrphanedOutline { .. })
        ));
    }

    #[test]
    fn test_group_to_world() {
        let mut registry = SceneRegistry::new(0.1);
        let id = registry.create_cube_group(1.0, Vec3::new(0.0, 2.0, 0.0));
        let group = registry.group_mut(id).unwrap();
        group.scale = 2.0;

        assert_eq!(group.to_world(group.cube.position), Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(group.outline.segments().count(), 12);
    }
}
