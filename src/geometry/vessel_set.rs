use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::Curve;

/// A collection of independent open curves, one per vascular branch.
///
/// Order between vessels carries no meaning; the point order inside each
/// vessel defines its path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VesselSet {
    vessels: Vec<Curve>,
}

impl VesselSet {
    /// Creates an empty vessel set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a vessel set from curves, rejecting closed ones.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnexpectedTopology`] if any curve is closed.
    pub fn from_curves(curves: impl IntoIterator<Item = Curve>) -> Result<Self> {
        let mut set = Self::new();
        for curve in curves {
            set.push(curve)?;
        }
        Ok(set)
    }

    /// Adds a vessel.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnexpectedTopology`] if `curve` is closed.
    pub fn push(&mut self, curve: Curve) -> Result<()> {
        if curve.is_closed() {
            return Err(GeometryError::UnexpectedTopology(
                "vessels must be open curves".to_owned(),
            )
            .into());
        }
        self.vessels.push(curve);
        Ok(())
    }

    /// Returns the vessels.
    #[must_use]
    pub fn vessels(&self) -> &[Curve] {
        &self.vessels
    }

    /// Iterates over the vessels.
    pub fn iter(&self) -> std::slice::Iter<'_, Curve> {
        self.vessels.iter()
    }

    /// Returns the number of vessels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    /// Returns `true` if there are no vessels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    /// Returns a new set whose vessels carry the points produced by `f`.
    ///
    /// Vessel order and open topology are kept.
    #[must_use]
    pub fn map_points<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&[Point2]) -> Vec<Point2>,
    {
        Self {
            vessels: self
                .vessels
                .iter()
                .map(|vessel| vessel.with_points(f(vessel.points())))
                .collect(),
        }
    }

    /// Total number of points across all vessels.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.vessels.iter().map(Curve::len).sum()
    }

    /// Total number of segments across all vessels.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.vessels.iter().map(Curve::segment_count).sum()
    }
}

impl<'a> IntoIterator for &'a VesselSet {
    type Item = &'a Curve;
    type IntoIter = std::slice::Iter<'a, Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.vessels.iter()
    }
}
