use crate::geometry::{ConnectiveStructure, VesselSet};

use super::BuildConnectivity;

/// Merges every vessel of a set into one connective structure.
///
/// Each vessel keeps its own open connectivity; point buffers are
/// concatenated in set order and no segment joins two vessels.
#[derive(Debug)]
pub struct MergeVessels<'a> {
    vessels: &'a VesselSet,
}

impl<'a> MergeVessels<'a> {
    /// Creates a new `MergeVessels` operation.
    #[must_use]
    pub fn new(vessels: &'a VesselSet) -> Self {
        Self { vessels }
    }

    /// Executes the merge.
    #[must_use]
    pub fn execute(&self) -> ConnectiveStructure {
        let mut merged = ConnectiveStructure {
            points: Vec::with_capacity(self.vessels.point_count()),
            segments: Vec::with_capacity(self.vessels.segment_count()),
            auxiliary_grid: None,
        };
        for vessel in self.vessels {
            merged.append(&BuildConnectivity::new(vessel).execute());
        }
        tracing::debug!(
            vessels = self.vessels.len(),
            points = merged.point_count(),
            segments = merged.segment_count(),
            "merged vessels"
        );
        merged
    }
}
