use crate::error::Result;
use crate::geometry::VesselSet;
use crate::operations::creation::{MakeArcVessel, MakeCircularRegion, MakeLiverOutline};
use crate::operations::deformation::RetractionField;

use super::{Anatomy, ScenarioConfig};

/// A liver-ablation scenario: pre-op shapes and their retracted post-op
/// counterparts.
///
/// The pre-op anatomy is generated once and never modified; every post-op
/// state is derived from it, so sweeps over the retraction strength do not
/// accumulate displacement.
#[derive(Debug, Clone)]
pub struct InterventionScenario {
    config: ScenarioConfig,
    pre_op: Anatomy,
    field: RetractionField,
}

impl InterventionScenario {
    /// Generates the pre-op anatomy from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn new(config: ScenarioConfig) -> Result<Self> {
        config.validate()?;
        let field = RetractionField::new(config.retraction_params()?);

        let liver = MakeLiverOutline::new(config.liver_points).execute()?;
        let ablation_zone = MakeCircularRegion::new(
            config.ablation_center,
            config.ablation_radius,
            config.ablation_points,
        )
        .execute()?;
        let tumor = MakeCircularRegion::new(
            config.ablation_center,
            config.tumor_radius,
            config.tumor_points,
        )
        .execute()?;

        let mut vessels = VesselSet::new();
        for spec in &config.vessels {
            vessels.push(
                MakeArcVessel::new(
                    config.ablation_center,
                    spec.radius,
                    spec.start_angle_deg,
                    spec.end_angle_deg,
                    spec.n_points,
                )
                .execute()?,
            )?;
        }

        tracing::info!(
            liver_points = liver.len(),
            vessels = vessels.len(),
            vessel_points = vessels.point_count(),
            "generated pre-op anatomy"
        );

        Ok(Self {
            config,
            pre_op: Anatomy {
                liver,
                ablation_zone,
                tumor: Some(tumor),
                vessels,
            },
            field,
        })
    }

    /// Returns the configuration the scenario was built from.
    #[must_use]
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Returns the retraction field of the scenario.
    #[must_use]
    pub fn field(&self) -> &RetractionField {
        &self.field
    }

    /// Returns the pre-op anatomy.
    #[must_use]
    pub fn pre_op(&self) -> &Anatomy {
        &self.pre_op
    }

    /// Returns the post-op anatomy under the configured retraction.
    ///
    /// Liver, ablation zone and vessels are retracted; the tumor is gone.
    #[must_use]
    pub fn post_op(&self) -> Anatomy {
        retract(&self.pre_op, &self.field)
    }

    /// Returns the post-op anatomy under a different strength.
    ///
    /// # Errors
    ///
    /// Returns an error if `strength` is negative or not finite.
    pub fn post_op_with_strength(&self, strength: f64) -> Result<Anatomy> {
        let field = RetractionField::new(self.field.params().with_strength(strength)?);
        Ok(retract(&self.pre_op, &field))
    }

    /// Returns one post-op anatomy per strength, all derived from the same
    /// pre-op shapes.
    ///
    /// # Errors
    ///
    /// Returns an error on the first invalid strength.
    pub fn sweep(&self, strengths: &[f64]) -> Result<Vec<Anatomy>> {
        strengths
            .iter()
            .map(|&s| self.post_op_with_strength(s))
            .collect()
    }
}

fn retract(pre_op: &Anatomy, field: &RetractionField) -> Anatomy {
    Anatomy {
        liver: field.apply_curve(&pre_op.liver),
        ablation_zone: field.apply_curve(&pre_op.ablation_zone),
        tumor: None,
        vessels: field.apply_vessels(&pre_op.vessels),
    }
}
