use crate::math::{Point2, Point3};

/// An ordered planar point sequence with open or closed topology.
///
/// For closed curves the last point connects back to the first. The
/// points are stored once; a closed curve does not repeat its first point
/// at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Point2>,
    closed: bool,
}

impl Curve {
    /// Creates a curve from points and a topology flag.
    #[must_use]
    pub fn new(points: Vec<Point2>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Creates an open curve (a path).
    #[must_use]
    pub fn open(points: Vec<Point2>) -> Self {
        Self::new(points, false)
    }

    /// Creates a closed curve (a loop).
    #[must_use]
    pub fn closed(points: Vec<Point2>) -> Self {
        Self::new(points, true)
    }

    /// Returns the ordered points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the curve, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Returns whether the last point connects back to the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of segments this curve produces.
    ///
    /// `N` for closed curves, `N - 1` for open ones, and zero below two
    /// points regardless of topology.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Returns a new curve with the same topology and the given points.
    ///
    /// Used by deformations that produce a displaced copy.
    #[must_use]
    pub fn with_points(&self, points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: self.closed,
        }
    }

    /// Returns the points lifted onto the `z = 0` plane.
    #[must_use]
    pub fn to_points_3d(&self) -> Vec<Point3> {
        self.points.iter().map(crate::math::lift).collect()
    }

    /// Returns the total length of all segments, including the closing one.
    #[must_use]
    pub fn length(&self) -> f64 {
        let n = self.points.len();
        (0..self.segment_count())
            .map(|i| (self.points[(i + 1) % n] - self.points[i]).norm())
            .sum()
    }
}
