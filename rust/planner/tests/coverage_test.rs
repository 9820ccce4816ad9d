// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end checks of the coverage sweep against hand-worked scenarios.

use approx::assert_relative_eq;
use wallcover_planner::{plan, plan_coverage, Error, PlanParams, Point2D, Rectangle};

/// Assert rows alternate direction by row index and advance monotonically in `y`.
fn assert_zig_zag(points: &[Point2D], step: f64) {
    for pair in points.windows(2) {
        let (q, p) = (pair[0], pair[1]);
        if p.y == q.y {
            let row = (p.y / step).round() as usize;
            if row % 2 == 0 {
                assert!(p.x > q.x, "row {row} should ascend: {q:?} -> {p:?}");
            } else {
                assert!(p.x < q.x, "row {row} should descend: {q:?} -> {p:?}");
            }
        } else {
            assert!(p.y > q.y, "rows must advance in y: {q:?} -> {p:?}");
        }
    }
}

#[test]
fn test_half_step_unit_wall() {
    let points = plan(1.0, 1.0, &[], 0.5).unwrap();

    let expected = vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(0.5, 0.0),
        Point2D::new(1.0, 0.0),
        Point2D::new(1.0, 0.5),
        Point2D::new(0.5, 0.5),
        Point2D::new(0.0, 0.5),
        Point2D::new(0.0, 1.0),
        Point2D::new(0.5, 1.0),
        Point2D::new(1.0, 1.0),
    ];
    assert_eq!(points, expected);
}

#[test]
fn test_obstacle_exclusion_scenario() {
    let obstacle = Rectangle::new(0.25, 0.25, 0.25, 0.25);
    let points = plan(1.0, 1.0, &[obstacle], 0.1).unwrap();

    // 11 x 11 grid minus the 3 x 3 block {0.3, 0.4, 0.5}^2
    assert_eq!(points.len(), 121 - 9);

    assert!(!points.contains(&Point2D::new(0.3, 0.3)));
    assert!(!points.contains(&Point2D::new(0.5, 0.5)));
    assert!(!points.contains(&Point2D::new(0.4, 0.5)));
    assert!(points.contains(&Point2D::new(0.2, 0.3)));
    assert!(points.contains(&Point2D::new(0.6, 0.4)));
    assert!(points.contains(&Point2D::new(0.3, 0.6)));

    for p in &points {
        assert!(!obstacle.contains(p), "{p:?} lies inside the obstacle");
    }
    assert_zig_zag(&points, 0.1);
}

#[test]
fn test_point_count_without_obstacles() {
    let cases = [
        (1.0, 1.0, 0.5, 9),
        (1.0, 1.0, 0.1, 121),
        (2.0, 1.5, 0.25, 63),
        (3.0, 2.0, 1.0, 12),
        (0.7, 0.3, 0.1, 32),
    ];

    for (width, height, step, expected) in cases {
        let points = plan(width, height, &[], step).unwrap();
        let formula = ((width / step + 1.0).round() * (height / step + 1.0).round()) as usize;
        assert_eq!(points.len(), expected, "{width}x{height} @ {step}");
        assert_eq!(points.len(), formula, "{width}x{height} @ {step}");

        for p in &points {
            assert!(p.x >= 0.0 && p.x <= width, "{p:?} outside width {width}");
            assert!(p.y >= 0.0 && p.y <= height, "{p:?} outside height {height}");
        }
        assert_zig_zag(&points, step);
    }
}

#[test]
fn test_non_multiple_dimensions_do_not_snap_to_edge() {
    let points = plan(1.0, 1.0, &[], 0.3).unwrap();
    assert_eq!(points.len(), 16);
    assert!(points.iter().all(|p| p.x <= 0.9 && p.y <= 0.9));
    assert!(!points.iter().any(|p| p.x == 1.0 || p.y == 1.0));
}

#[test]
fn test_zig_zag_with_several_obstacles() {
    let obstacles = [
        Rectangle::new(0.1, 0.1, 0.3, 0.2),
        Rectangle::new(1.2, 0.0, 0.4, 2.0),
        Rectangle::new(-1.0, 1.5, 1.3, 1.0),
    ];
    let points = plan(2.0, 2.0, &obstacles, 0.1).unwrap();

    assert!(!points.is_empty());
    for p in &points {
        for o in &obstacles {
            assert!(!o.contains(p), "{p:?} lies inside {o:?}");
        }
    }
    assert_zig_zag(&points, 0.1);
}

#[test]
fn test_row_direction_follows_row_index_not_surviving_rows() {
    // Row 1 (y = 0.5) is fully blocked; row 2 must still ascend.
    let blocker = Rectangle::new(-1.0, 0.4, 3.0, 0.2);
    let points = plan(1.0, 1.0, &[blocker], 0.5).unwrap();

    assert_eq!(
        points,
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.5, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.0, 1.0),
            Point2D::new(0.5, 1.0),
            Point2D::new(1.0, 1.0),
        ]
    );
}

#[test]
fn test_obstacle_covering_whole_wall() {
    let points = plan(1.0, 1.0, &[Rectangle::new(0.0, 0.0, 1.0, 1.0)], 0.1).unwrap();
    assert!(points.is_empty());
}

#[test]
fn test_step_larger_than_wall() {
    let points = plan(1.0, 2.0, &[], 5.0).unwrap();
    assert_eq!(points, vec![Point2D::new(0.0, 0.0)]);

    let blocked = plan(1.0, 2.0, &[Rectangle::new(0.0, 0.0, 0.0, 0.0)], 5.0).unwrap();
    assert!(blocked.is_empty());
}

#[test]
fn test_degenerate_obstacles_are_accepted() {
    let obstacles = [
        Rectangle::new(0.5, 0.5, -0.5, -0.5),
        Rectangle::new(10.0, 10.0, 1.0, 1.0),
    ];
    let points = plan(1.0, 1.0, &obstacles, 0.5).unwrap();
    assert_eq!(points.len(), 9);
}

#[test]
fn test_degenerate_walls_produce_empty_path() {
    assert!(plan(0.0, 1.0, &[], 0.1).unwrap().is_empty());
    assert!(plan(1.0, -2.0, &[], 0.1).unwrap().is_empty());
    assert!(plan(f64::NAN, 1.0, &[], 0.1).unwrap().is_empty());
}

#[test]
fn test_invalid_step_size() {
    for step in [0.0, -0.1, -10.0, f64::NAN] {
        match plan(1.0, 1.0, &[], step) {
            Err(Error::InvalidParameter(msg)) => assert!(msg.contains("step_size")),
            other => panic!("expected InvalidParameter for {step}, got {other:?}"),
        }
    }
}

#[test]
fn test_deterministic_output() {
    let params = PlanParams::new(3.7, 2.3, 0.07)
        .with_obstacle([0.5, 0.5, 1.0, 0.3])
        .with_obstacle((2.0, 1.0, 0.2, 2.0));

    let first = plan_coverage(&params).unwrap();
    let second = plan_coverage(&params).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.params, params);
}

#[test]
fn test_coordinates_are_rounded_to_six_decimals() {
    let points = plan(1.0, 1.0, &[], 1.0 / 3.0).unwrap();
    assert_eq!(points.len(), 16);
    for p in &points {
        assert_eq!(p.x, (p.x * 1e6).round() / 1e6);
        assert_eq!(p.y, (p.y * 1e6).round() / 1e6);
    }
    assert!(points.contains(&Point2D::new(0.333333, 0.666667)));
}

#[test]
fn test_plan_statistics() {
    let coverage = plan_coverage(&PlanParams::new(1.0, 1.0, 0.5)).unwrap();

    // Three rows of length 1.0 joined by two 0.5 transitions
    assert_relative_eq!(coverage.path_length(), 4.0, epsilon = 1e-12);
    let rows = coverage.rows();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.len() == 3));
}

#[test]
fn test_huge_wall_under_full_cover_is_empty() {
    // 1_000_001 x 1_000_001 candidates, all inside the obstacle
    let cover = Rectangle::new(0.0, 0.0, 1.0e4, 1.0e4);
    let points = plan(1.0e4, 1.0e4, &[cover], 0.01).unwrap();
    assert!(points.is_empty());
}

#[test]
fn test_step_too_fine_for_wall_is_rejected() {
    let result = plan(1.0e6, 1.0, &[], 1.0e-10);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn test_row_spanning_obstacle_keeps_partial_rows() {
    // Covers rows y = 0.5 and y = 1.0 end to end; row y = 0.0 stays whole
    let band = Rectangle::new(0.0, 0.4, 1.0, 1.0);
    let points = plan(1.0, 1.0, &[band], 0.5).unwrap();
    assert_eq!(
        points,
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.5, 0.0),
            Point2D::new(1.0, 0.0),
        ]
    );
}
