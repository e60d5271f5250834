use crate::geometry::Circle;
use crate::math::Vector2;

slotmap::new_key_type! {
    /// Unique identifier for a shape in a [`Scene`](super::Scene).
    pub struct ShapeId;
}

/// Geometric and physical state of a moving shape.
///
/// Velocity and rotational speed are carried as plain data; nothing in this
/// crate integrates them over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeData {
    /// Bounding circle of the shape, in scene coordinates.
    pub circle: Circle,
    /// Linear velocity.
    pub velocity: Vector2,
    /// Angular speed in radians per unit time. Positive is anti-clockwise.
    pub rotational_speed: f64,
}

impl ShapeData {
    /// Creates a resting shape occupying `circle`.
    #[must_use]
    pub fn new(circle: Circle) -> Self {
        Self {
            circle,
            velocity: Vector2::zeros(),
            rotational_speed: 0.0,
        }
    }

    #[must_use]
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    #[must_use]
    pub fn with_rotational_speed(mut self, rotational_speed: f64) -> Self {
        self.rotational_speed = rotational_speed;
        self
    }

    /// Returns `true` if the shape rotates anti-clockwise.
    #[must_use]
    pub fn is_anticlockwise(&self) -> bool {
        self.rotational_speed > 0.0
    }
}
