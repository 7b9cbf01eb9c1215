use crate::error::{ensure_finite, ensure_positive, ensure_sample_count, Result};
use crate::math::Point2;
use crate::operations::deformation::RetractionParams;

/// One arc-shaped vessel around the ablation center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselSpec {
    /// Distance of the vessel from the ablation center.
    pub radius: f64,
    /// Angle of the first sample, in degrees.
    pub start_angle_deg: f64,
    /// Angle of the last sample, in degrees.
    pub end_angle_deg: f64,
    /// Number of samples along the arc.
    pub n_points: usize,
}

impl VesselSpec {
    /// Creates a vessel spec with the default sampling density.
    #[must_use]
    pub fn new(radius: f64, start_angle_deg: f64, end_angle_deg: f64) -> Self {
        Self {
            radius,
            start_angle_deg,
            end_angle_deg,
            n_points: 60,
        }
    }
}

/// Parameters of an ablation scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    /// Samples on the liver outline.
    pub liver_points: usize,
    /// Center of the ablation zone, also the retraction center.
    pub ablation_center: Point2,
    /// Radius of the ablation zone.
    pub ablation_radius: f64,
    /// Samples on the ablation zone outline.
    pub ablation_points: usize,
    /// Radius of the tumor inside the ablation zone.
    pub tumor_radius: f64,
    /// Samples on the tumor outline.
    pub tumor_points: usize,
    /// Vessels running around the ablation zone.
    pub vessels: Vec<VesselSpec>,
    /// Retraction strength.
    pub retraction_strength: f64,
    /// Retraction influence radius.
    pub retraction_radius: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            liver_points: 400,
            ablation_center: Point2::new(2.0, 1.0),
            ablation_radius: 3.0,
            ablation_points: 100,
            tumor_radius: 1.5,
            tumor_points: 100,
            vessels: vec![
                VesselSpec::new(4.5, 20.0, 160.0),
                VesselSpec::new(5.5, 200.0, 300.0),
                VesselSpec::new(4.0, -60.0, 10.0),
            ],
            retraction_strength: 0.3,
            retraction_radius: 4.0,
        }
    }
}

impl ScenarioConfig {
    /// Retraction parameters centered on the ablation zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the strength or influence radius is invalid.
    pub fn retraction_params(&self) -> Result<RetractionParams> {
        RetractionParams::new(
            self.ablation_center,
            self.retraction_strength,
            self.retraction_radius,
        )
    }

    /// Checks every field before any shape is generated.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter found.
    pub fn validate(&self) -> Result<()> {
        ensure_sample_count(self.liver_points)?;
        ensure_sample_count(self.ablation_points)?;
        ensure_sample_count(self.tumor_points)?;
        ensure_finite("ablation_center.x", self.ablation_center.x)?;
        ensure_finite("ablation_center.y", self.ablation_center.y)?;
        ensure_positive("ablation_radius", self.ablation_radius)?;
        ensure_positive("tumor_radius", self.tumor_radius)?;
        for vessel in &self.vessels {
            ensure_sample_count(vessel.n_points)?;
            ensure_positive("vessel.radius", vessel.radius)?;
            ensure_finite("vessel.start_angle", vessel.start_angle_deg)?;
            ensure_finite("vessel.end_angle", vessel.end_angle_deg)?;
        }
        self.retraction_params()?;
        Ok(())
    }
}
