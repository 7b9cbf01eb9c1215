use crate::error::{ensure_finite, ensure_positive, ensure_sample_count, Result};
use crate::geometry::Curve;
use crate::math::sampling::full_turn;
use crate::math::Point2;

/// Creates a closed circle, used for the ablation zone and the tumor.
///
/// `P(t) = center + radius * (cos t, sin t)`, sampled counter-clockwise
/// from the positive x-axis.
#[derive(Debug, Clone)]
pub struct MakeCircularRegion {
    center: Point2,
    radius: f64,
    n_points: usize,
}

impl MakeCircularRegion {
    /// Creates a new `MakeCircularRegion` operation.
    #[must_use]
    pub fn new(center: Point2, radius: f64, n_points: usize) -> Self {
        Self {
            center,
            radius,
            n_points,
        }
    }

    /// Executes the operation, returning a closed curve.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are requested, the radius
    /// is not positive, or the center is not finite.
    pub fn execute(&self) -> Result<Curve> {
        let n = ensure_sample_count(self.n_points)?;
        let radius = ensure_positive("radius", self.radius)?;
        let cx = ensure_finite("center.x", self.center.x)?;
        let cy = ensure_finite("center.y", self.center.y)?;

        let points = full_turn(n)
            .into_iter()
            .map(|t| Point2::new(cx + radius * t.cos(), cy + radius * t.sin()))
            .collect();
        Ok(Curve::closed(points))
    }
}
