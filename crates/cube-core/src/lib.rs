//! Cube Editor Core
//!
//! Scene model and pointer interaction for a small cube editor: a stack of
//! cubes with corner handles and selection outlines, ray picking, and the
//! selection/resize state machine. Nothing here touches the GPU or a window;
//! cameras plug in through [`picking::RayCaster`].

pub mod config;
pub mod constants;
pub mod geometry;
pub mod interaction;
pub mod picking;
pub mod primitive;
pub mod scene;

pub use config::{InteractionConfig, SceneConfig};
pub use geometry::{CUBE_EDGES, corners_of, edges_of};
pub use interaction::{
    InteractionController, InteractionError, InteractionMode, InteractionState, PointerDownOutcome,
    PointerEvent, ScaleStep, SelectionSet,
};
pub use picking::{Pick, PickHit, Ray, RayCaster, Viewport, pick, ray_point_distance};
pub use primitive::{MeshData, generate_box_mesh};
pub use scene::{CornerHandle, Cube, CubeGroup, CubeId, Outline, SceneError, SceneRegistry};
