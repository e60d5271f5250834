use crate::error::Result;
use crate::geometry::{Polygon2D, RelativePolygon2D};
use crate::math::subtract;
use crate::operations::query::{BoundingCircle, BoundingCircleParams};

/// Re-expresses a polygon's vertices relative to the center of its
/// minimum bounding circle.
#[derive(Debug)]
pub struct RelativeCoordinates<'a> {
    polygon: &'a Polygon2D,
    params: BoundingCircleParams,
}

impl<'a> RelativeCoordinates<'a> {
    /// Creates a new `RelativeCoordinates` operation with default parameters.
    #[must_use]
    pub fn new(polygon: &'a Polygon2D) -> Self {
        Self::with_params(polygon, BoundingCircleParams::default())
    }

    /// Creates a new `RelativeCoordinates` operation with explicit
    /// bounding-circle parameters.
    #[must_use]
    pub fn with_params(polygon: &'a Polygon2D, params: BoundingCircleParams) -> Self {
        Self { polygon, params }
    }

    /// Executes the conversion. The input polygon is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyInput` if the polygon has no vertices.
    pub fn execute(&self) -> Result<RelativePolygon2D> {
        let circle = BoundingCircle::with_params(&self.polygon.vertices, self.params).execute()?;
        let center = *circle.center();
        let vertices = self
            .polygon
            .vertices
            .iter()
            .map(|&v| subtract(v, center))
            .collect();
        Ok(RelativePolygon2D::new(circle, vertices))
    }
}
