use crate::math::{add, Vector2};

use super::Circle;

/// An ordered set of polygon vertices.
///
/// Only the point set matters to the operations in this crate; no edge or
/// containment semantics are attached to the vertex order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon2D {
    /// The ordered vertices of the polygon.
    pub vertices: Vec<Vector2>,
}

impl Polygon2D {
    /// Creates a polygon from its vertices.
    #[must_use]
    pub fn new(vertices: Vec<Vector2>) -> Self {
        Self { vertices }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl FromIterator<Vector2> for Polygon2D {
    fn from_iter<I: IntoIterator<Item = Vector2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A polygon whose vertices are expressed relative to the center of its
/// bounding circle.
///
/// Produced by [`RelativeCoordinates`](crate::operations::transform::RelativeCoordinates).
#[derive(Debug, Clone, PartialEq)]
pub struct RelativePolygon2D {
    circle: Circle,
    vertices: Vec<Vector2>,
}

impl RelativePolygon2D {
    pub(crate) fn new(circle: Circle, vertices: Vec<Vector2>) -> Self {
        Self { circle, vertices }
    }

    /// Center of the bounding circle, in the original coordinates.
    #[must_use]
    pub fn center(&self) -> &Vector2 {
        self.circle.center()
    }

    /// Radius of the bounding circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.circle.radius()
    }

    /// Vertices relative to [`center`](Self::center), in input order.
    #[must_use]
    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// The bounding circle the vertices are relative to.
    #[must_use]
    pub fn bounding_circle(&self) -> Circle {
        self.circle
    }

    /// Reconstructs the polygon in the original coordinates.
    #[must_use]
    pub fn to_absolute(&self) -> Polygon2D {
        let center = *self.circle.center();
        self.vertices.iter().map(|&v| add(v, center)).collect()
    }
}
