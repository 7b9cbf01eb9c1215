#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use liver_retraction::geometry::{ConnectiveStructure, Curve, VesselSet};
use liver_retraction::math::Point2;
use liver_retraction::operations::connectivity::{BuildConnectivity, MergeVessels};
use liver_retraction::operations::creation::{MakeArcVessel, MakeCircularRegion};
use liver_retraction::operations::deformation::{RetractionField, RetractionParams};
use liver_retraction::render::{render_intervention, RecordingRenderer};
use liver_retraction::scenario::{InterventionScenario, ScenarioConfig, VesselSpec};

#[test]
fn circle_to_closed_structure() {
    let circle = MakeCircularRegion::new(Point2::origin(), 5.0, 4)
        .execute()
        .unwrap();
    let s = BuildConnectivity::new(&circle).execute();
    assert_eq!(s.segments, vec![[0, 1], [1, 2], [2, 3], [3, 0]]);
    assert_abs_diff_eq!(s.points[1].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(s.points[1].y, 5.0, epsilon = 1e-9);
}

#[test]
fn retract_then_rebuild_connectivity() {
    let center = Point2::new(1.0, -2.0);
    let arc = MakeArcVessel::new(center, 3.0, 0.0, 180.0, 25).execute().unwrap();
    let field = RetractionField::new(RetractionParams::new(center, 0.5, 3.0).unwrap());

    let before = BuildConnectivity::new(&arc).execute();
    let moved = field.apply_curve(&arc);
    let after = BuildConnectivity::new(&moved).execute();

    assert_eq!(before.segments, after.segments);
    assert_eq!(arc.len(), moved.len());
    // Same as displacing the structure directly.
    assert_eq!(field.apply_structure(&before), after);
}

#[test]
fn merged_vessels_after_retraction_stay_separate() {
    let center = Point2::origin();
    let vessels = VesselSet::from_curves([
        MakeArcVessel::new(center, 4.0, 10.0, 80.0, 3).execute().unwrap(),
        MakeArcVessel::new(center, 5.0, 100.0, 250.0, 4).execute().unwrap(),
    ])
    .unwrap();
    let field = RetractionField::new(RetractionParams::new(center, 1.0, 4.0).unwrap());
    let merged = MergeVessels::new(&field.apply_vessels(&vessels)).execute();

    assert_eq!(merged.point_count(), 7);
    assert_eq!(merged.segments, vec![[0, 1], [1, 2], [3, 4], [4, 5], [5, 6]]);
    assert!(merged.is_valid());
}

#[test]
fn custom_scenario_end_to_end() {
    let config = ScenarioConfig {
        liver_points: 120,
        vessels: vec![VesselSpec::new(4.0, 0.0, 90.0), VesselSpec::new(6.0, 180.0, 90.0)],
        retraction_strength: 0.8,
        ..ScenarioConfig::default()
    };
    let scenario = InterventionScenario::new(config).unwrap();
    let post = scenario.post_op();

    let mut renderer = RecordingRenderer::new();
    render_intervention(&mut renderer, scenario.pre_op(), &post).unwrap();
    assert_eq!(renderer.panels().len(), 2);
    assert_eq!(renderer.draw_count(), 4 + 3);

    for panel in renderer.panels() {
        for draw in &panel.draws {
            assert!(draw.structure.is_valid());
        }
    }

    let structures = post.to_structures();
    assert_eq!(structures.liver.segment_count(), 120);
    assert_eq!(structures.vessels.segment_count(), 59 + 59);
    assert!(structures.tumor.is_none());
}

#[test]
fn point_on_center_through_public_api() {
    let out = RetractionField::apply_to(
        &[Point2::new(2.0, 2.0), Point2::new(7.0, 2.0)],
        Point2::new(2.0, 2.0),
        1.0,
        5.0,
    )
    .unwrap();
    assert!(out[0].x.is_finite() && out[0].y.is_finite());
    assert_abs_diff_eq!(out[1].x, 2.0 + 5.0 - 5.0 * (-0.5_f64).exp(), epsilon = 1e-12);
    assert_abs_diff_eq!(out[1].y, 2.0, epsilon = 1e-12);
}

#[test]
fn empty_and_single_point_inputs() {
    let field = RetractionField::new(RetractionParams::new(Point2::origin(), 1.0, 1.0).unwrap());
    assert!(field.apply(&[]).is_empty());

    let single = Curve::open(vec![Point2::new(1.0, 1.0)]);
    let s = ConnectiveStructure::from(&field.apply_curve(&single));
    assert_eq!(s.point_count(), 1);
    assert_eq!(s.segment_count(), 0);
}
