pub mod vector_2d;

pub use vector_2d::{
    add, cross_product_2d, dot_product, magnitude, magnitude_squared, memberwise_divide,
    memberwise_multiply, negate, normalize, orthogonalize, scale_down, scale_up, subtract,
};

/// 2D vector type. Positions and displacements are both expressed with it.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
