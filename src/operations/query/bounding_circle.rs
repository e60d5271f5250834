use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::Circle;
use crate::math::{Vector2, TOLERANCE};

/// Parameters controlling the minimum enclosing circle search.
#[derive(Debug, Clone, Copy)]
pub struct BoundingCircleParams {
    /// Containment slack, relative to the candidate radius.
    ///
    /// An absolute floor of a few ulps of the largest input coordinate is
    /// added on top.
    pub tolerance: f64,
    /// Seed for shuffling the processing order. `None` keeps the input order.
    pub shuffle_seed: Option<u64>,
}

impl Default for BoundingCircleParams {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            shuffle_seed: Some(0x5eed_c1c1e),
        }
    }
}

/// Ulps of the largest coordinate magnitude used as the absolute slack floor.
const ROUNDING_ULPS: f64 = 4.0;

/// How far outside a candidate circle a point may lie and still count as enclosed.
#[derive(Debug, Clone, Copy)]
struct Slack {
    relative: f64,
    floor: f64,
}

impl Slack {
    fn for_points(points: &[Vector2], relative: f64) -> Self {
        let scale = points
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0_f64, f64::max);
        Self {
            relative,
            floor: ROUNDING_ULPS * f64::EPSILON * scale,
        }
    }

    fn encloses(self, circle: &Circle, point: Vector2) -> bool {
        circle.contains(point, self.relative * circle.radius() + self.floor)
    }
}

/// Computes the minimum enclosing circle of a set of points.
///
/// Uses the incremental form of Welzl's algorithm: points are visited in a
/// fixed (optionally shuffled) order and, whenever a point falls outside the
/// current candidate, the circle is rebuilt with that point on its boundary.
/// The result is deterministic for a given input order and seed.
#[derive(Debug)]
pub struct BoundingCircle<'a> {
    vertices: &'a [Vector2],
    params: BoundingCircleParams,
}

impl<'a> BoundingCircle<'a> {
    /// Creates a new `BoundingCircle` query with default parameters.
    #[must_use]
    pub fn new(vertices: &'a [Vector2]) -> Self {
        Self::with_params(vertices, BoundingCircleParams::default())
    }

    /// Creates a new `BoundingCircle` query with explicit parameters.
    #[must_use]
    pub fn with_params(vertices: &'a [Vector2], params: BoundingCircleParams) -> Self {
        Self { vertices, params }
    }

    /// Executes the query, returning the smallest circle containing every vertex.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyInput` if no vertices were given.
    pub fn execute(&self) -> Result<Circle> {
        let points = self.processing_order();
        let Some(&first) = points.first() else {
            return Err(GeometryError::EmptyInput.into());
        };

        let slack = Slack::for_points(&points, self.params.tolerance);
        let mut circle = Circle::from_point(first);
        for (i, &p) in points.iter().enumerate().skip(1) {
            if slack.encloses(&circle, p) {
                continue;
            }
            circle = with_one_boundary_point(slack, &points[..i], p);
        }

        trace!(
            vertices = points.len(),
            center_x = circle.center().x,
            center_y = circle.center().y,
            radius = circle.radius(),
            "bounding circle"
        );
        Ok(circle)
    }

    fn processing_order(&self) -> Vec<Vector2> {
        let mut points = self.vertices.to_vec();
        if let Some(seed) = self.params.shuffle_seed {
            points.shuffle(&mut StdRng::seed_from_u64(seed));
        }
        points
    }
}

/// Smallest circle enclosing `points` with `p` on its boundary.
fn with_one_boundary_point(slack: Slack, points: &[Vector2], p: Vector2) -> Circle {
    let mut circle = Circle::from_point(p);
    for (j, &q) in points.iter().enumerate() {
        if slack.encloses(&circle, q) {
            continue;
        }
        circle = with_two_boundary_points(slack, &points[..j], p, q);
    }
    circle
}

/// Smallest circle enclosing `points` with `p` and `q` on its boundary.
fn with_two_boundary_points(slack: Slack, points: &[Vector2], p: Vector2, q: Vector2) -> Circle {
    let mut circle = Circle::from_diameter(p, q);
    for &r in points {
        if slack.encloses(&circle, r) {
            continue;
        }
        circle = Circle::circumscribed(p, q, r).unwrap_or_else(|| widest_diameter(p, q, r));
    }
    circle
}

/// For collinear points: the diameter circle of the farthest-apart pair.
fn widest_diameter(p: Vector2, q: Vector2, r: Vector2) -> Circle {
    [
        Circle::from_diameter(p, q),
        Circle::from_diameter(p, r),
        Circle::from_diameter(q, r),
    ]
    .into_iter()
    .fold(Circle::from_point(p), |best, c| {
        if c.radius() > best.radius() {
            c
        } else {
            best
        }
    })
}
