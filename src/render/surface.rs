use tracing::debug;

use crate::error::Result;
use crate::scene::{Scene, ShapeData};

/// Maps a shape record to a drawable representation.
///
/// Any `Fn(&ShapeData) -> Result<D>` closure is a renderer, so callers can
/// pass one in directly without defining a type.
pub trait ShapeRenderer {
    /// The drawable produced for one shape.
    type Drawable;

    /// Produces the drawable for `shape`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape cannot be represented.
    fn render(&self, shape: &ShapeData) -> Result<Self::Drawable>;
}

impl<F, D> ShapeRenderer for F
where
    F: Fn(&ShapeData) -> Result<D>,
{
    type Drawable = D;

    fn render(&self, shape: &ShapeData) -> Result<D> {
        self(shape)
    }
}

/// Sink that accepts drawables without exposing how they are displayed.
pub trait RenderSurface<D> {
    /// Appends one drawable to the surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the drawable.
    fn append(&mut self, drawable: D) -> Result<()>;
}

/// A surface that records every drawable it receives, in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface<D> {
    drawables: Vec<D>,
}

impl<D> RecordingSurface<D> {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            drawables: Vec::new(),
        }
    }

    /// Returns the recorded drawables.
    #[must_use]
    pub fn drawables(&self) -> &[D] {
        &self.drawables
    }

    /// Consumes the surface, returning the recorded drawables.
    #[must_use]
    pub fn into_drawables(self) -> Vec<D> {
        self.drawables
    }
}

impl<D> Default for RecordingSurface<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> RenderSurface<D> for RecordingSurface<D> {
    fn append(&mut self, drawable: D) -> Result<()> {
        self.drawables.push(drawable);
        Ok(())
    }
}

/// Renders every shape in `scene` and appends the result to `surface`.
///
/// Returns the number of drawables appended. Stops at the first renderer or
/// surface error; drawables appended before it stay on the surface.
///
/// # Errors
///
/// Propagates the first error from `renderer` or `surface`.
pub fn populate_surface<R, S>(scene: &Scene, renderer: &R, surface: &mut S) -> Result<usize>
where
    R: ShapeRenderer + ?Sized,
    S: RenderSurface<R::Drawable> + ?Sized,
{
    let mut count = 0;
    for (id, shape) in scene.iter() {
        let drawable = renderer.render(shape)?;
        surface.append(drawable)?;
        debug!(?id, radius = shape.circle.radius(), "shape appended to surface");
        count += 1;
    }
    debug!(count, "surface populated");
    Ok(count)
}
