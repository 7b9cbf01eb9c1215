use crate::error::{ensure_finite, ensure_positive, ensure_sample_count, Result};
use crate::geometry::Curve;
use crate::math::sampling::linspace;
use crate::math::Point2;

/// Creates an open circular arc, used as a vessel running around the
/// ablation zone.
///
/// Angles are given in degrees and sampled linearly from start to end,
/// both included; `start > end` walks clockwise. The arc endpoints are not
/// joined to the center.
#[derive(Debug, Clone)]
pub struct MakeArcVessel {
    center: Point2,
    radius_vessel: f64,
    start_angle_deg: f64,
    end_angle_deg: f64,
    n_points: usize,
}

impl MakeArcVessel {
    /// Creates a new `MakeArcVessel` operation.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc (usually the ablation center)
    /// * `radius_vessel` - Distance of the vessel from the center
    /// * `start_angle_deg` - Angle of the first point, in degrees
    /// * `end_angle_deg` - Angle of the last point, in degrees
    /// * `n_points` - Number of samples (at least 2)
    #[must_use]
    pub fn new(
        center: Point2,
        radius_vessel: f64,
        start_angle_deg: f64,
        end_angle_deg: f64,
        n_points: usize,
    ) -> Self {
        Self {
            center,
            radius_vessel,
            start_angle_deg,
            end_angle_deg,
            n_points,
        }
    }

    /// Executes the operation, returning an open curve.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are requested, the radius
    /// is not positive, or an angle or the center is not finite.
    pub fn execute(&self) -> Result<Curve> {
        let n = ensure_sample_count(self.n_points)?;
        let radius = ensure_positive("radius_vessel", self.radius_vessel)?;
        let start = ensure_finite("start_angle", self.start_angle_deg)?.to_radians();
        let end = ensure_finite("end_angle", self.end_angle_deg)?.to_radians();
        let cx = ensure_finite("center.x", self.center.x)?;
        let cy = ensure_finite("center.y", self.center.y)?;

        let points = linspace(start, end, n)
            .into_iter()
            .map(|t| Point2::new(cx + radius * t.cos(), cy + radius * t.sin()))
            .collect();
        Ok(Curve::open(points))
    }
}
