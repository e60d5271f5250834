use std::f64::consts::{PI, TAU};

use crate::error::{RenderError, Result};
use crate::scene::ShapeData;

use super::{Polyline, ShapeRenderer, TessellationParams};

/// Renders a shape as the closed outline of its circle.
///
/// The segment count follows from the sagitta bound and is clamped to
/// `[min_segments, max_segments]`. A zero-radius shape renders as a single
/// point.
#[derive(Debug, Clone, Copy)]
pub struct OutlineRenderer {
    params: TessellationParams,
}

impl OutlineRenderer {
    /// Creates a new outline renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not positive, `min_segments < 3`, or
    /// `min_segments > max_segments`.
    pub fn new(params: TessellationParams) -> Result<Self> {
        if params.tolerance.is_nan() || params.tolerance <= 0.0 {
            return Err(RenderError::InvalidParameters(
                "tessellation tolerance must be positive".to_owned(),
            )
            .into());
        }
        if params.min_segments < 3 || params.min_segments > params.max_segments {
            return Err(RenderError::InvalidParameters(format!(
                "segment range [{}, {}] must start at 3 or more and be non-empty",
                params.min_segments, params.max_segments
            ))
            .into());
        }
        Ok(Self { params })
    }

    /// Returns the tessellation parameters.
    #[must_use]
    pub fn params(&self) -> &TessellationParams {
        &self.params
    }

    /// Fewest chords whose midpoints stay within `tolerance` of the circle.
    ///
    /// A chord spanning `2θ` sits `radius * (1 - cos θ)` inside the arc, so
    /// `θ` may grow up to `acos(1 - tolerance / radius)`.
    fn segment_count(&self, radius: f64) -> usize {
        let deviation = (self.params.tolerance / radius).min(1.0);
        let max_half_step = (1.0 - deviation).acos();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (PI / max_half_step).ceil() as usize;
        n.clamp(self.params.min_segments, self.params.max_segments)
    }
}

impl ShapeRenderer for OutlineRenderer {
    type Drawable = Polyline;

    #[allow(clippy::cast_precision_loss)]
    fn render(&self, shape: &ShapeData) -> Result<Polyline> {
        let circle = &shape.circle;
        if circle.radius() <= 0.0 {
            return Ok(Polyline {
                points: vec![*circle.center()],
                closed: false,
            });
        }

        let n = self.segment_count(circle.radius());
        let points = (0..n)
            .map(|i| circle.evaluate(TAU * i as f64 / n as f64))
            .collect();
        Ok(Polyline {
            points,
            closed: true,
        })
    }
}
