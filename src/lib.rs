//! 2D vector math, minimum bounding circles, and a scene of moving shapes.
//!
//! ```text
//! math        — Vector2 alias and pure vector algebra
//! geometry    — Circle, Polygon2D, RelativePolygon2D
//! operations  — BoundingCircle query, RelativeCoordinates transform
//! scene       — caller-owned store of shape records
//! render      — renderer/surface seam and the built-in outline renderer
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod scene;

pub use error::{PlanarError, Result};
