//! Screen-space draw list
//!
//! Sub-renderers project the scene into flat primitives in viewport pixels.
//! The frontend paints them in order; there is no depth buffer, so
//! [`DrawList::finish`] sorts each layer back to front.

use glam::Vec2;

/// A single screen-space primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawPrimitive {
    /// Filled triangle
    Triangle {
        /// Corners in viewport pixels
        points: [Vec2; 3],
        /// Fill color (RGB)
        color: [f32; 3],
    },
    /// Filled circle
    Disc {
        /// Center in viewport pixels
        center: Vec2,
        /// Radius in pixels
        radius: f32,
        /// Fill color (RGB)
        color: [f32; 3],
    },
    /// Line segment
    Line {
        /// Endpoints in viewport pixels
        points: [Vec2; 2],
        /// Stroke color (RGB)
        color: [f32; 3],
        /// Stroke width in pixels
        width: f32,
    },
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    layer: i32,
    depth: f32,
    primitive: DrawPrimitive,
}

/// Collected primitives for one frame
#[derive(Debug, Default)]
pub struct DrawList {
    entries: Vec<Entry>,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to `layer` at NDC `depth` (larger is farther)
    pub fn push(&mut self, layer: i32, depth: f32, primitive: DrawPrimitive) {
        self.entries.push(Entry {
            layer,
            depth,
            primitive,
        });
    }

    /// Sort by layer, then far to near within a layer
    pub fn finish(&mut self) {
        self.entries.sort_by(|a, b| {
            a.layer
                .cmp(&b.layer)
                .then_with(|| b.depth.total_cmp(&a.depth))
        });
    }

    /// Primitives in paint order (call [`DrawList::finish`] first)
    pub fn primitives(&self) -> impl Iterator<Item = &DrawPrimitive> {
        self.entries.iter().map(|e| &e.primitive)
    }

    /// Number of primitives
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
