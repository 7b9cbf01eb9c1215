use crate::geometry::{ConnectiveStructure, Curve};

/// Converts a curve into a connective structure honoring its topology.
///
/// Open curves give `N - 1` segments, closed curves `N` with the last
/// point wrapping to the first. Curves with fewer than two points give
/// a structure without segments.
#[derive(Debug)]
pub struct BuildConnectivity<'a> {
    curve: &'a Curve,
}

impl<'a> BuildConnectivity<'a> {
    /// Creates a new `BuildConnectivity` operation.
    #[must_use]
    pub fn new(curve: &'a Curve) -> Self {
        Self { curve }
    }

    /// Executes the conversion.
    #[must_use]
    pub fn execute(&self) -> ConnectiveStructure {
        let structure =
            ConnectiveStructure::from_points(self.curve.points(), self.curve.is_closed());
        tracing::trace!(
            points = structure.point_count(),
            segments = structure.segment_count(),
            closed = self.curve.is_closed(),
            "built connectivity"
        );
        structure
    }
}

impl From<&Curve> for ConnectiveStructure {
    fn from(curve: &Curve) -> Self {
        BuildConnectivity::new(curve).execute()
    }
}
