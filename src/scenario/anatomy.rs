use crate::geometry::{ConnectiveStructure, Curve, VesselSet};
use crate::operations::connectivity::{BuildConnectivity, MergeVessels};

/// The structures of one scenario state (pre-op or post-op).
#[derive(Debug, Clone, PartialEq)]
pub struct Anatomy {
    /// Closed liver outline.
    pub liver: Curve,
    /// Closed ablation zone outline.
    pub ablation_zone: Curve,
    /// Closed tumor outline, absent once ablated.
    pub tumor: Option<Curve>,
    /// Vascular branches.
    pub vessels: VesselSet,
}

/// Connective structures of an [`Anatomy`], vessels merged into one.
#[derive(Debug, Clone, PartialEq)]
pub struct AnatomyStructures {
    pub liver: ConnectiveStructure,
    pub ablation_zone: ConnectiveStructure,
    pub tumor: Option<ConnectiveStructure>,
    pub vessels: ConnectiveStructure,
}

impl Anatomy {
    /// Converts every curve into its connective structure.
    #[must_use]
    pub fn to_structures(&self) -> AnatomyStructures {
        AnatomyStructures {
            liver: BuildConnectivity::new(&self.liver).execute(),
            ablation_zone: BuildConnectivity::new(&self.ablation_zone).execute(),
            tumor: self
                .tumor
                .as_ref()
                .map(|tumor| BuildConnectivity::new(tumor).execute()),
            vessels: MergeVessels::new(&self.vessels).execute(),
        }
    }
}
