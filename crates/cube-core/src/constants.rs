//! Global constants for cube-core

/// Number of cubes in the startup stack
pub const DEFAULT_CUBE_COUNT: u32 = 3;

/// Edge length of a freshly created cube
pub const DEFAULT_CUBE_SIZE: f32 = 1.0;

/// Distance between neighbouring cube centers in the startup stack
pub const DEFAULT_CUBE_SPACING: f32 = 2.0;

/// Radius of the corner handle spheres
pub const HANDLE_RADIUS: f32 = 0.1;

/// Scale multiplier applied per pointer-move step while resizing
pub const GROWTH_FACTOR: f32 = 1.01;

/// Number of corners (and therefore handles) on a cube
pub const CUBE_CORNER_COUNT: usize = 8;

/// Number of edges traced by an outline
pub const CUBE_EDGE_COUNT: usize = 12;
