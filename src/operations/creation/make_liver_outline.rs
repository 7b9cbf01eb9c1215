use crate::error::{ensure_positive, ensure_sample_count, Result};
use crate::geometry::Curve;
use crate::math::sampling::full_turn;
use crate::math::Point2;

/// Default horizontal half-extent of the toy liver.
const DEFAULT_SCALE_X: f64 = 10.0;

/// Default vertical half-extent of the toy liver.
const DEFAULT_SCALE_Y: f64 = 8.0;

/// Creates a closed, bean-shaped liver outline.
///
/// `x = sx * (cos t + 0.2 cos 2t)`, `y = sy * (sin t - 0.1 sin 2t)` for
/// `t` over one full turn. The point count only changes the sampling
/// density, never the shape.
#[derive(Debug, Clone)]
pub struct MakeLiverOutline {
    n_points: usize,
    scale_x: f64,
    scale_y: f64,
}

impl MakeLiverOutline {
    /// Creates a new `MakeLiverOutline` operation with the default size.
    #[must_use]
    pub fn new(n_points: usize) -> Self {
        Self {
            n_points,
            scale_x: DEFAULT_SCALE_X,
            scale_y: DEFAULT_SCALE_Y,
        }
    }

    /// Overrides the horizontal and vertical scale factors.
    #[must_use]
    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Executes the operation, returning a closed curve.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are requested or a scale
    /// factor is not positive.
    pub fn execute(&self) -> Result<Curve> {
        let n = ensure_sample_count(self.n_points)?;
        let sx = ensure_positive("scale_x", self.scale_x)?;
        let sy = ensure_positive("scale_y", self.scale_y)?;

        let points = full_turn(n)
            .into_iter()
            .map(|t| {
                Point2::new(
                    sx * (t.cos() + 0.2 * (2.0 * t).cos()),
                    sy * (t.sin() - 0.1 * (2.0 * t).sin()),
                )
            })
            .collect();
        Ok(Curve::closed(points))
    }
}
