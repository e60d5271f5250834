//! Mapping shapes to drawables for an external drawing surface.
//!
//! The scene never knows how a shape is drawn. A [`ShapeRenderer`] turns a
//! [`ShapeData`](crate::scene::ShapeData) into some drawable value, and a
//! [`RenderSurface`] accepts those values without this crate inspecting them.
//! [`OutlineRenderer`] is the built-in renderer: it tessellates the shape's
//! circle into a closed [`Polyline`].

mod surface;
mod tessellate_shape;

pub use surface::{populate_surface, RecordingSurface, RenderSurface, ShapeRenderer};
pub use tessellate_shape::OutlineRenderer;

use crate::math::Vector2;

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true outline.
    pub tolerance: f64,
    /// Minimum number of segments for a full circle.
    pub min_segments: usize,
    /// Maximum number of segments for a full circle.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 8,
            max_segments: 256,
        }
    }
}

/// A polyline approximation of a shape outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Vector2>,
    /// Whether the last point connects back to the first.
    pub closed: bool,
}
