//! Cube Editor Renderer
//!
//! Projects the cube scene into screen-space primitives that any 2D painter
//! can draw.
//!
//! # Architecture
//!
//! - [`traits::SubRenderer`] - Trait for pluggable passes
//! - [`sub_renderers`] - Built-in passes (cubes, handles, outlines)
//! - [`draw_list::DrawList`] - Depth-sorted output of a frame
//! - [`camera::Camera`] - Perspective camera, also the picking ray caster
//! - [`renderer::Renderer`] - Ties the above together

pub mod camera;
pub mod config;
pub mod draw_list;
pub mod renderer;
pub mod sub_renderers;
pub mod traits;

// Re-exports for convenience
pub use camera::Camera;
pub use config::{CameraConfig, ColorConfig, RendererConfig};
pub use draw_list::{DrawList, DrawPrimitive};
pub use renderer::Renderer;
pub use sub_renderers::{CubeRenderer, HandleRenderer, OutlineRenderer};
pub use traits::{FrameContext, SubRenderer};
