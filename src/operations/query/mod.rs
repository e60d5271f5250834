mod bounding_circle;

pub use bounding_circle::{BoundingCircle, BoundingCircleParams};
