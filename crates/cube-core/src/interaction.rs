//! Selection and resize interaction
//!
//! [`InteractionController`] owns the scene and an explicit
//! [`InteractionState`], and reacts to pointer down/move/up:
//!
//! - down on a corner handle starts resizing that handle's cube,
//! - down on a cube toggles it in the selection,
//! - down on empty space clears the selection,
//! - move while resizing grows or shrinks the group by one step depending on
//!   whether the ray moved away from or towards the cube,
//! - up refreshes outline visibility and ends any resize.
//!
//! Outline visibility deliberately lags the selection until pointer up.

use std::collections::HashSet;

use glam::Vec2;

use crate::config::{InteractionConfig, SceneConfig};
use crate::picking::{PickHit, Ray, RayCaster, Viewport, pick, ray_point_distance};
use crate::scene::{CubeId, SceneRegistry};

/// Duplicate-free set of selected cubes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<CubeId>,
}

impl SelectionSet {
    /// Add `id` if absent, remove it if present. Returns whether it is now
    /// selected.
    pub fn toggle(&mut self, id: CubeId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: CubeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CubeId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<CubeId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = CubeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Resize anchor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Dragging a corner handle of `cube`
    Resizing {
        cube: CubeId,
        /// Ray-to-cube distance at the previous event
        last_distance: f32,
    },
}

/// Mutable interaction state
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub selection: SelectionSet,
    pub mode: InteractionMode,
}

impl InteractionState {
    /// Cube currently being resized
    pub fn resizing(&self) -> Option<CubeId> {
        match self.mode {
            InteractionMode::Resizing { cube, .. } => Some(cube),
            InteractionMode::Idle => None,
        }
    }
}

/// Pointer input, in viewport-relative screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up,
}

/// What a pointer-down did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerDownOutcome {
    ResizeStarted { cube: CubeId, distance: f32 },
    SelectionToggled { cube: CubeId, selected: bool },
    SelectionCleared,
}

/// What a resize step did to the group scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleStep {
    Grew,
    Shrank,
    Unchanged,
}

/// Interaction errors. Handlers log these and abandon the event.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InteractionError {
    #[error("Cube {0} not found")]
    CubeNotFound(CubeId),
    #[error("Group {0} not found")]
    GroupNotFound(CubeId),
}

/// Owns the scene and routes pointer events into it
#[derive(Debug)]
pub struct InteractionController {
    registry: SceneRegistry,
    state: InteractionState,
    config: InteractionConfig,
}

impl InteractionController {
    /// Wrap an existing registry
    pub fn new(registry: SceneRegistry, config: InteractionConfig) -> Self {
        Self {
            registry,
            state: InteractionState::default(),
            config: config.sanitized(),
        }
    }

    /// Build the startup stack and wrap it
    pub fn with_stack(scene: &SceneConfig, config: InteractionConfig) -> Self {
        Self::new(SceneRegistry::with_stack(scene), config)
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.state.selection
    }

    /// Dispatch a single pointer event
    pub fn handle<C: RayCaster + ?Sized>(
        &mut self,
        event: PointerEvent,
        caster: &C,
        viewport: Viewport,
    ) {
        match event {
            PointerEvent::Down(pos) => {
                self.pointer_down(caster, viewport, pos);
            }
            PointerEvent::Move(pos) => {
                self.pointer_move(caster, viewport, pos);
            }
            PointerEvent::Up => self.pointer_up(),
        }
    }

    /// Handle a pointer press
    pub fn pointer_down<C: RayCaster + ?Sized>(
        &mut self,
        caster: &C,
        viewport: Viewport,
        pointer: Vec2,
    ) -> Option<PointerDownOutcome> {
        let pick = pick(caster, viewport, pointer, &self.registry);

        let outcome = match pick.hit {
            PickHit::Handle { cube, corner } => {
                let Some(target) = self.registry.cube(cube) else {
                    tracing::error!("{}", InteractionError::CubeNotFound(cube));
                    return None;
                };
                let distance = ray_point_distance(&pick.ray, target.position);
                self.state.mode = InteractionMode::Resizing {
                    cube,
                    last_distance: distance,
                };
                tracing::debug!("Resize started on cube {} (corner {})", cube, corner);
                PointerDownOutcome::ResizeStarted { cube, distance }
            }
            PickHit::Cube(cube) => {
                let selected = self.state.selection.toggle(cube);
                tracing::debug!("Cube {} selected: {}", cube, selected);
                PointerDownOutcome::SelectionToggled { cube, selected }
            }
            PickHit::Empty => {
                self.state.selection.clear();
                tracing::debug!("Selection cleared");
                PointerDownOutcome::SelectionCleared
            }
        };

        Some(outcome)
    }

    /// Handle pointer motion. Returns `None` when not resizing or when the
    /// event had to be abandoned.
    pub fn pointer_move<C: RayCaster + ?Sized>(
        &mut self,
        caster: &C,
        viewport: Viewport,
        pointer: Vec2,
    ) -> Option<ScaleStep> {
        let InteractionMode::Resizing {
            cube,
            last_distance,
        } = self.state.mode
        else {
            return None;
        };

        let ray = caster.ray_from_pointer(viewport, pointer);
        match self.resize_step(cube, last_distance, &ray) {
            Ok(step) => Some(step),
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        }
    }

    fn resize_step(
        &mut self,
        cube: CubeId,
        last_distance: f32,
        ray: &Ray,
    ) -> Result<ScaleStep, InteractionError> {
        let position = self
            .registry
            .cube(cube)
            .ok_or(InteractionError::CubeNotFound(cube))?
            .position;
        let new_distance = ray_point_distance(ray, position);

        let group = self
            .registry
            .group_mut(cube)
            .ok_or(InteractionError::GroupNotFound(cube))?;

        let step = if new_distance > last_distance {
            group.scale *= self.config.growth_factor;
            ScaleStep::Grew
        } else if new_distance < last_distance {
            group.scale /= self.config.growth_factor;
            ScaleStep::Shrank
        } else {
            ScaleStep::Unchanged
        };

        self.state.mode = InteractionMode::Resizing {
            cube,
            last_distance: new_distance,
        };
        Ok(step)
    }

    /// Handle a pointer release
    pub fn pointer_up(&mut self) {
        self.registry.refresh_outlines(&self.state.selection);
        if let Some(cube) = self.state.resizing() {
            tracing::debug!("Resize finished on cube {}", cube);
        }
        self.state.mode = InteractionMode::Idle;
    }
}
