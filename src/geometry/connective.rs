use crate::error::{GeometryError, Result};
use crate::math::{lift, Point2, Point3};

/// A point buffer plus line segments indexing into it.
///
/// This is the form handed to a renderer: planar points lifted onto
/// `z = 0` and each segment stored as a pair of buffer indices. A
/// structure may carry an auxiliary control grid (for instance the lattice
/// a registration method deforms); consumers inspect the `Option` rather
/// than probing for the capability.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectiveStructure {
    /// Point buffer, `z = 0` for everything produced by this crate.
    pub points: Vec<Point3>,
    /// Segments as `[start, end]` indices into `points`.
    pub segments: Vec<[usize; 2]>,
    /// Optional control grid attached to this structure.
    pub auxiliary_grid: Option<Box<ConnectiveStructure>>,
}

impl ConnectiveStructure {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a structure from an ordered point sequence.
    ///
    /// Open: `(i, i + 1)` for every consecutive pair, `N - 1` segments.
    /// Closed: the same plus `(N - 1, 0)`, `N` segments. Fewer than two
    /// points produce no segments; the points are still kept.
    #[must_use]
    pub fn from_points(points: &[Point2], closed: bool) -> Self {
        let n = points.len();
        let segments = match n {
            0 | 1 => Vec::new(),
            _ if closed => (0..n).map(|i| [i, (i + 1) % n]).collect(),
            _ => (0..n - 1).map(|i| [i, i + 1]).collect(),
        };
        Self {
            points: points.iter().map(lift).collect(),
            segments,
            auxiliary_grid: None,
        }
    }

    /// Attaches an auxiliary control grid.
    #[must_use]
    pub fn with_auxiliary_grid(mut self, grid: ConnectiveStructure) -> Self {
        self.auxiliary_grid = Some(Box::new(grid));
        self
    }

    /// Returns the number of points in the buffer.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the buffer holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends `other`, offsetting its segment indices by the current
    /// point count.
    ///
    /// No segment is added between the two structures. The auxiliary grid
    /// of `other` is not carried over.
    pub fn append(&mut self, other: &ConnectiveStructure) {
        let offset = self.points.len();
        self.points.extend_from_slice(&other.points);
        self.segments.extend(
            other
                .segments
                .iter()
                .map(|[a, b]| [a + offset, b + offset]),
        );
    }

    /// Concatenates structures in iteration order into one.
    #[must_use]
    pub fn merge<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a ConnectiveStructure>,
    {
        let mut merged = Self::new();
        for part in parts {
            merged.append(part);
        }
        merged
    }

    /// Checks that every segment index is inside the point buffer,
    /// including those of the auxiliary grid.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidIndex`] for the first index found
    /// outside the buffer.
    pub fn validate(&self) -> Result<()> {
        let len = self.points.len();
        if let Some(&index) = self.segments.iter().flatten().find(|&&i| i >= len) {
            return Err(GeometryError::InvalidIndex { index, len }.into());
        }
        if let Some(grid) = &self.auxiliary_grid {
            grid.validate()?;
        }
        Ok(())
    }

    /// Returns `true` if [`validate`](Self::validate) succeeds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the planar projection of the point buffer.
    #[must_use]
    pub fn points_2d(&self) -> Vec<Point2> {
        self.points.iter().map(|p| Point2::new(p.x, p.y)).collect()
    }
}
