#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::geometry::{ConnectiveStructure, Curve, VesselSet};
use crate::math::{Point2, Point3, Vector2};

use super::RetractionParams;

/// Distance substituted for a point lying exactly on the center, so the
/// outward direction can be normalized.
pub const CENTER_EPSILON: f64 = 1e-3;

/// Radial contraction of points toward a center.
///
/// Each point `p` moves along the outward unit vector `u = (p - c) / d`
/// by `-m(d)`, where
///
/// `m(d) = strength * d * exp(-d^2 / (2 * radius_influence^2))`
///
/// The magnitude is zero at the center, peaks at `d = radius_influence`
/// and decays to nothing a few radii away. Points are displaced
/// independently of each other and inputs are never modified, so the same
/// shape can be retracted repeatedly with different parameters.
#[derive(Debug, Clone, Copy)]
pub struct RetractionField {
    params: RetractionParams,
}

impl RetractionField {
    /// Creates a field from validated parameters.
    #[must_use]
    pub fn new(params: RetractionParams) -> Self {
        Self { params }
    }

    /// Validates the parameters and applies the field to `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if `strength` is negative or `radius_influence`
    /// is not strictly positive; no point is computed in that case.
    pub fn apply_to(
        points: &[Point2],
        center: Point2,
        strength: f64,
        radius_influence: f64,
    ) -> Result<Vec<Point2>> {
        let params = RetractionParams::new(center, strength, radius_influence)?;
        Ok(Self::new(params).apply(points))
    }

    /// Returns the field parameters.
    #[must_use]
    pub fn params(&self) -> &RetractionParams {
        &self.params
    }

    /// Displacement magnitude at distance `d` from the center.
    #[must_use]
    pub fn displacement_magnitude(&self, d: f64) -> f64 {
        let r = self.params.radius_influence();
        self.params.strength() * d * (-(d * d) / (2.0 * r * r)).exp()
    }

    /// Distance at which the displacement is largest.
    #[must_use]
    pub fn peak_distance(&self) -> f64 {
        self.params.radius_influence()
    }

    /// Largest displacement the field produces anywhere.
    #[must_use]
    pub fn max_displacement(&self) -> f64 {
        self.displacement_magnitude(self.peak_distance())
    }

    /// Displacement vector applied to `p`.
    #[must_use]
    pub fn displacement(&self, p: &Point2) -> Vector2 {
        let v = p - self.params.center();
        // hypot avoids overflowing x^2 + y^2 for very distant points.
        let mut d = v.x.hypot(v.y);
        if d == 0.0 {
            d = CENTER_EPSILON;
        } else if d.is_infinite() {
            return Vector2::zeros();
        }
        let direction = v / d;
        -direction * self.displacement_magnitude(d)
    }

    /// Returns the displaced position of a single point.
    #[must_use]
    pub fn displace(&self, p: &Point2) -> Point2 {
        p + self.displacement(p)
    }

    /// Returns the displaced copy of `points`, same length and order.
    #[must_use]
    pub fn apply(&self, points: &[Point2]) -> Vec<Point2> {
        tracing::debug!(
            points = points.len(),
            center_x = self.params.center().x,
            center_y = self.params.center().y,
            strength = self.params.strength(),
            radius_influence = self.params.radius_influence(),
            "applying retraction field"
        );
        self.map_points(points)
    }

    #[cfg(feature = "parallel")]
    fn map_points(&self, points: &[Point2]) -> Vec<Point2> {
        points.par_iter().map(|p| self.displace(p)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn map_points(&self, points: &[Point2]) -> Vec<Point2> {
        points.iter().map(|p| self.displace(p)).collect()
    }

    /// Returns a displaced copy of `curve` with the same topology.
    #[must_use]
    pub fn apply_curve(&self, curve: &Curve) -> Curve {
        curve.with_points(self.apply(curve.points()))
    }

    /// Returns a displaced copy of every vessel.
    #[must_use]
    pub fn apply_vessels(&self, vessels: &VesselSet) -> VesselSet {
        vessels.map_points(|points| self.apply(points))
    }

    /// Returns a displaced copy of a connective structure.
    ///
    /// Segments are kept as they are; `z` coordinates pass through. An
    /// auxiliary grid, if any, is displaced with the structure.
    #[must_use]
    pub fn apply_structure(&self, structure: &ConnectiveStructure) -> ConnectiveStructure {
        let planar = self.apply(&structure.points_2d());
        let points = planar
            .iter()
            .zip(&structure.points)
            .map(|(p, orig)| Point3::new(p.x, p.y, orig.z))
            .collect();
        ConnectiveStructure {
            points,
            segments: structure.segments.clone(),
            auxiliary_grid: structure
                .auxiliary_grid
                .as_deref()
                .map(|grid| Box::new(self.apply_structure(grid))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn field(strength: f64, radius: f64) -> RetractionField {
        RetractionField::new(RetractionParams::new(Point2::origin(), strength, radius).unwrap())
    }

    #[test]
    fn point_at_decay_peak() {
        let out = RetractionField::apply_to(&[Point2::new(5.0, 0.0)], Point2::origin(), 1.0, 5.0)
            .unwrap();
        let expected_shift = 5.0 * (-0.5_f64).exp();
        assert_relative_eq!(expected_shift, 3.032_653_298_563_167, epsilon = 1e-12);
        assert_relative_eq!(out[0].x, 5.0 - expected_shift, epsilon = 1e-12);
        assert_abs_diff_eq!(out[0].y, 0.0);
        assert_abs_diff_eq!(out[0].x, 1.967, epsilon = 1e-3);
    }

    #[test]
    fn zero_strength_is_identity() {
        let pts = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 0.5),
            Point2::origin(),
            Point2::new(100.0, -40.0),
        ];
        let out = field(0.0, 2.0).apply(&pts);
        assert_eq!(out, pts);
    }

    #[test]
    fn point_at_center_is_finite() {
        let f = field(3.0, 1.0);
        let p = f.displace(&Point2::origin());
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-2);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-2);
    }

    #[test]
    fn magnitude_is_non_negative_and_vanishes_at_center() {
        let f = field(2.0, 3.0);
        assert_abs_diff_eq!(f.displacement_magnitude(0.0), 0.0);
        assert!(f.displacement_magnitude(1e-9) < 1e-8);
        for i in 1..1000 {
            let d = f64::from(i) * 0.05;
            assert!(f.displacement_magnitude(d) >= 0.0);
        }
    }

    #[test]
    fn magnitude_peaks_at_radius_influence() {
        let f = field(1.5, 4.0);
        let (best_d, _) = (1..=20_000)
            .map(|i| f64::from(i) * 1e-3)
            .map(|d| (d, f.displacement_magnitude(d)))
            .fold((0.0, f64::MIN), |acc, cur| if cur.1 > acc.1 { cur } else { acc });
        assert_abs_diff_eq!(best_d, 4.0, epsilon = 2e-3);
        assert_abs_diff_eq!(f.peak_distance(), 4.0);
        assert_relative_eq!(f.max_displacement(), 1.5 * 4.0 * (-0.5_f64).exp());
    }

    #[test]
    fn displacement_points_toward_center() {
        let center = Point2::new(2.0, -1.0);
        let f = RetractionField::new(RetractionParams::new(center, 0.4, 3.0).unwrap());
        let p = Point2::new(4.0, 3.0);
        let q = f.displace(&p);
        assert!((q - center).norm() < (p - center).norm());
        // Moved along the radial line.
        let cross = (p - center).perp(&(q - center));
        assert_abs_diff_eq!(cross, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn far_points_barely_move() {
        let f = field(1.0, 1.0);
        let p = Point2::new(20.0, 0.0);
        assert_abs_diff_eq!((f.displace(&p) - p).norm(), 0.0, epsilon = 1e-40);
    }

    #[test]
    fn huge_coordinates_stay_finite_and_unmoved() {
        let f = field(1.0, 5.0);
        let pts = [Point2::new(1e200, 0.0), Point2::new(-3e170, 2e160), Point2::new(1e-300, 0.0)];
        let out = f.apply(&pts);
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[1], pts[1]);
        assert!(out.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn infinite_coordinate_is_not_turned_into_nan() {
        let f = field(1.0, 5.0);
        let p = f.displace(&Point2::new(f64::INFINITY, 0.0));
        assert!(!p.x.is_nan() && !p.y.is_nan());
    }

    #[test]
    fn input_is_not_mutated_and_no_accumulation() {
        let pts = vec![Point2::new(3.0, 4.0), Point2::new(-1.0, 1.0)];
        let snapshot = pts.clone();
        let f = field(0.8, 2.0);
        let first = f.apply(&pts);
        let second = f.apply(&pts);
        assert_eq!(pts, snapshot);
        assert_eq!(first, second);
        assert_eq!(first.len(), pts.len());
    }

    #[test]
    fn invalid_parameters_are_rejected_before_computation() {
        let pts = [Point2::new(1.0, 1.0)];
        assert!(RetractionField::apply_to(&pts, Point2::origin(), 1.0, 0.0).is_err());
        assert!(RetractionField::apply_to(&pts, Point2::origin(), -1.0, 1.0).is_err());
    }

    #[test]
    fn curve_topology_is_kept() {
        let curve = Curve::closed(vec![
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, 0.0),
        ]);
        let moved = field(0.5, 1.0).apply_curve(&curve);
        assert!(moved.is_closed());
        assert_eq!(moved.len(), 3);
        assert_ne!(moved.points(), curve.points());
    }

    #[test]
    fn vessels_stay_open_and_ordered() {
        let vessels = VesselSet::from_curves([
            Curve::open(vec![Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)]),
            Curve::open(vec![Point2::new(0.0, 3.0), Point2::new(0.0, 4.0), Point2::new(0.0, 5.0)]),
        ])
        .unwrap();
        let moved = field(1.0, 2.0).apply_vessels(&vessels);
        assert_eq!(moved.len(), 2);
        assert_eq!(moved.vessels()[1].len(), 3);
        assert!(moved.iter().all(|v| !v.is_closed()));
    }

    #[test]
    fn structure_keeps_segments_and_moves_grid() {
        let grid = ConnectiveStructure::from_points(&[Point2::new(2.0, 2.0), Point2::new(3.0, 2.0)], false);
        let s = ConnectiveStructure::from_points(
            &[Point2::new(1.0, 0.0), Point2::new(0.0, 1.0), Point2::new(-1.0, 0.0)],
            true,
        )
        .with_auxiliary_grid(grid.clone());
        let moved = field(1.0, 1.0).apply_structure(&s);
        assert_eq!(moved.segments, s.segments);
        let moved_grid = moved.auxiliary_grid.unwrap();
        assert_eq!(moved_grid.segments, grid.segments);
        assert!(moved_grid.points[0].x < 2.0);
        assert!(moved.points.iter().all(|p| p.z.abs() < f64::EPSILON));
    }
}
