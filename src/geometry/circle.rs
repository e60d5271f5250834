use crate::error::{GeometryError, Result};
use crate::math::{
    cross_product_2d, magnitude, magnitude_squared, scale_up, subtract, Vector2, TOLERANCE,
};

/// A disc in the plane.
///
/// The radius is always non-negative; a zero radius describes a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Vector2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRadius` if `radius` is negative or `NaN`.
    pub fn new(center: Vector2, radius: f64) -> Result<Self> {
        if radius.is_nan() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Zero-radius circle located at `point`.
    #[must_use]
    pub fn from_point(point: Vector2) -> Self {
        Self {
            center: point,
            radius: 0.0,
        }
    }

    /// Smallest circle through `a` and `b`: the segment `ab` is its diameter.
    #[must_use]
    pub fn from_diameter(a: Vector2, b: Vector2) -> Self {
        Self {
            center: scale_up(a + b, 0.5),
            radius: magnitude(subtract(a, b)) * 0.5,
        }
    }

    /// Circle passing through `a`, `b`, and `c`.
    ///
    /// Returns `None` when the three points are (numerically) collinear.
    #[must_use]
    pub fn circumscribed(a: Vector2, b: Vector2, c: Vector2) -> Option<Self> {
        let ab = subtract(b, a);
        let ac = subtract(c, a);
        let ab_sq = magnitude_squared(ab);
        let ac_sq = magnitude_squared(ac);

        // Sine of the angle at `a`, scaled by |ab| * |ac|.
        let cross = cross_product_2d(ab, ac);
        if cross.abs() <= TOLERANCE * (ab_sq * ac_sq).sqrt() {
            return None;
        }

        let d = 2.0 * cross;
        let offset = Vector2::new(
            (ac.y * ab_sq - ab.y * ac_sq) / d,
            (ab.x * ac_sq - ac.x * ab_sq) / d,
        );
        Some(Self {
            center: a + offset,
            radius: magnitude(offset),
        })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Vector2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `true` if `point` lies inside or within `tolerance` of the boundary.
    #[must_use]
    pub fn contains(&self, point: Vector2, tolerance: f64) -> bool {
        magnitude(subtract(point, self.center)) <= self.radius + tolerance
    }

    /// Point on the boundary at angle `t` (radians, counter-clockwise from +X).
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Vector2 {
        self.center + Vector2::new(t.cos(), t.sin()) * self.radius
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn new_accepts_zero_radius() {
        let c = Circle::new(Vector2::new(1.0, 2.0), 0.0).unwrap();
        assert_eq!(*c.center(), Vector2::new(1.0, 2.0));
        assert!(c.radius().abs() < TOLERANCE);
    }

    #[test]
    fn invalid_radius() {
        assert!(Circle::new(Vector2::zeros(), -1.0).is_err());
        assert!(Circle::new(Vector2::zeros(), f64::NAN).is_err());
    }

    #[test]
    fn diameter_circle() {
        let c = Circle::from_diameter(Vector2::new(-1.0, 0.0), Vector2::new(3.0, 0.0));
        assert_relative_eq!(*c.center(), Vector2::new(1.0, 0.0));
        assert!((c.radius() - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn circumscribed_right_triangle() {
        let c = Circle::circumscribed(
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(0.0, 3.0),
        )
        .unwrap();
        assert_relative_eq!(*c.center(), Vector2::new(2.0, 1.5), epsilon = 1e-12);
        assert!((c.radius() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn circumscribed_collinear_is_none() {
        let c = Circle::circumscribed(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(3.0, 3.0),
        );
        assert!(c.is_none());
    }

    #[test]
    fn contains_uses_tolerance() {
        let c = Circle::new(Vector2::zeros(), 1.0).unwrap();
        assert!(c.contains(Vector2::new(0.5, 0.5), 0.0));
        assert!(c.contains(Vector2::new(1.0 + 1e-12, 0.0), 1e-10));
        assert!(!c.contains(Vector2::new(1.1, 0.0), 1e-10));
    }

    #[test]
    fn evaluate_at_pi_over_2() {
        let c = Circle::new(Vector2::new(1.0, 1.0), 3.0).unwrap();
        assert_relative_eq!(c.evaluate(FRAC_PI_2), Vector2::new(1.0, 4.0), epsilon = 1e-12);
    }
}
