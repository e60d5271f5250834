use thiserror::Error;

/// Top-level error type for the planar crate.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to vector and circle computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("division by zero: vector has zero length")]
    DivisionByZero,

    #[error("empty input: at least one vertex is required")]
    EmptyInput,

    #[error("invalid radius {0}: must be non-negative")]
    InvalidRadius(f64),
}

/// Errors related to the shape scene.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("shape not found")]
    ShapeNotFound,
}

/// Errors related to turning shapes into drawables.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render parameters: {0}")]
    InvalidParameters(String),

    #[error("render failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
