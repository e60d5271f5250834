//! Pure arithmetic over [`Vector2`].
//!
//! Every function takes its operands by value and returns a fresh vector or
//! scalar. Division-like operations follow IEEE-754: a zero divisor yields
//! `±inf` or `NaN` components. The only checked operation is [`normalize`],
//! since a zero vector has no direction.

use super::Vector2;
use crate::error::{GeometryError, Result};

/// Returns `(-v.x, -v.y)`.
#[must_use]
pub fn negate(v: Vector2) -> Vector2 {
    -v
}

/// Componentwise sum.
#[must_use]
pub fn add(v0: Vector2, v1: Vector2) -> Vector2 {
    v0 + v1
}

/// Componentwise difference `v0 - v1`.
#[must_use]
pub fn subtract(v0: Vector2, v1: Vector2) -> Vector2 {
    v0 - v1
}

/// Componentwise product.
#[must_use]
pub fn memberwise_multiply(v0: Vector2, v1: Vector2) -> Vector2 {
    v0.component_mul(&v1)
}

/// Componentwise quotient. Zero components of `v1` are not special-cased.
#[must_use]
pub fn memberwise_divide(v0: Vector2, v1: Vector2) -> Vector2 {
    v0.component_div(&v1)
}

/// Returns `(v.x * scalar, v.y * scalar)`.
#[must_use]
pub fn scale_up(v: Vector2, scalar: f64) -> Vector2 {
    v * scalar
}

/// Returns `scale_up(v, 1 / scalar)`.
///
/// A zero `scalar` produces infinite or `NaN` components.
#[must_use]
pub fn scale_down(v: Vector2, scalar: f64) -> Vector2 {
    scale_up(v, 1.0 / scalar)
}

/// Z-component of the 3D cross product of `v0` and `v1` embedded at `z = 0`.
///
/// Positive when `v1` is counter-clockwise from `v0`.
#[must_use]
pub fn cross_product_2d(v0: Vector2, v1: Vector2) -> f64 {
    // |  i    j    k  |
    // | v0.x v0.y  0  |  ->  k * (v0.x * v1.y - v0.y * v1.x)
    // | v1.x v1.y  0  |
    v0.x * v1.y - v0.y * v1.x
}

/// Rotates `v` by 90° counter-clockwise.
#[must_use]
pub fn orthogonalize(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Returns `v0.x * v1.x + v0.y * v1.y`.
#[must_use]
pub fn dot_product(v0: Vector2, v1: Vector2) -> f64 {
    v0.x * v1.x + v0.y * v1.y
}

#[must_use]
pub fn magnitude_squared(v: Vector2) -> f64 {
    dot_product(v, v)
}

#[must_use]
pub fn magnitude(v: Vector2) -> f64 {
    magnitude_squared(v).sqrt()
}

/// Returns the unit vector pointing along `v`.
///
/// # Errors
///
/// Returns `GeometryError::DivisionByZero` if `v` has zero length.
/// Non-finite inputs are not rejected and yield `NaN` components.
pub fn normalize(v: Vector2) -> Result<Vector2> {
    let len = magnitude(v);
    if len <= 0.0 {
        return Err(GeometryError::DivisionByZero.into());
    }
    Ok(scale_down(v, len))
}
