use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, Result};
use crate::math::Point2;

/// Validated parameters of a radial retraction.
///
/// `strength` scales the displacement and must be non-negative;
/// `radius_influence` is the Gaussian decay width and must be strictly
/// positive. Invalid values are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetractionParams {
    center: Point2,
    strength: f64,
    radius_influence: f64,
}

impl RetractionParams {
    /// Creates validated retraction parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`](crate::error::ParameterError) if the
    /// center is not finite, `strength` is negative or not finite, or
    /// `radius_influence` is not strictly positive.
    pub fn new(center: Point2, strength: f64, radius_influence: f64) -> Result<Self> {
        ensure_finite("center.x", center.x)?;
        ensure_finite("center.y", center.y)?;
        let strength = ensure_non_negative("strength", strength)?;
        let radius_influence = ensure_positive("radius_influence", radius_influence)?;
        Ok(Self {
            center,
            strength,
            radius_influence,
        })
    }

    /// Returns the contraction center.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the displacement scale.
    #[must_use]
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Returns the Gaussian decay width.
    #[must_use]
    pub fn radius_influence(&self) -> f64 {
        self.radius_influence
    }

    /// Returns a copy with a different strength.
    ///
    /// # Errors
    ///
    /// Returns an error if `strength` is negative or not finite.
    pub fn with_strength(&self, strength: f64) -> Result<Self> {
        Self::new(self.center, strength, self.radius_influence)
    }
}
