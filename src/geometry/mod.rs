mod circle;
mod polygon;

pub use circle::Circle;
pub use polygon::{Polygon2D, RelativePolygon2D};
