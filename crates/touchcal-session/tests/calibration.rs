//! End-to-end calibration scenarios driven through the public API.

use touchcal_core::{
    format_coefficients, is_affine, parse_coefficients, target_points, transform_point,
    MonitorRegion, Prescale, Pt2, Real, ScreenSize,
};
use touchcal_session::{CalibrationSession, ClickSink, SessionConfig, SolveError};

fn session_with_thresholds(misclick: i32, doubleclick: i32) -> CalibrationSession {
    CalibrationSession::new(SessionConfig {
        threshold_misclick: misclick,
        threshold_doubleclick: doubleclick,
    })
}

/// Undo the 0..1 normalization so assertions can run in pixel space.
fn denormalize(
    m: &touchcal_core::Mat3,
    width: u32,
    height: u32,
) -> touchcal_core::Mat3 {
    let w = width as Real;
    let h = height as Real;
    let mut pixel = *m;
    pixel[(0, 1)] *= w / h;
    pixel[(0, 2)] *= w;
    pixel[(1, 0)] *= h / w;
    pixel[(1, 2)] *= h;
    pixel
}

#[test]
fn undistorted_clicks_yield_identity() {
    let mut session = session_with_thresholds(0, 0);
    for t in target_points(800, 600) {
        assert!(session.add_click(t.x as i32, t.y as i32));
    }
    let coeff = session.finish(800, 600).unwrap();

    for r in 0..3 {
        for c in 0..3 {
            let expected = if r == c { 1.0 } else { 0.0 };
            assert!((coeff[(r, c)] - expected).abs() < 1e-12);
        }
    }
    assert!(is_affine(&coeff));
    // bottom row must be exact, not just close
    assert_eq!(coeff[(2, 0)], 0.0);
    assert_eq!(coeff[(2, 1)], 0.0);
    assert_eq!(coeff[(2, 2)], 1.0);
}

#[test]
fn shifted_clicks_yield_pure_translation() {
    let mut session = session_with_thresholds(0, 0);
    for t in target_points(800, 600) {
        assert!(session.add_click(t.x as i32 + 50, t.y as i32 + 50));
    }
    let coeff = session.finish(800, 600).unwrap();
    let pixel = denormalize(&coeff, 800, 600);

    assert!((pixel[(0, 0)] - 1.0).abs() < 1e-9);
    assert!((pixel[(1, 1)] - 1.0).abs() < 1e-9);
    assert!(pixel[(0, 1)].abs() < 1e-9);
    assert!(pixel[(1, 0)].abs() < 1e-9);
    assert!((pixel[(0, 2)] - (-50.0)).abs() < 1e-9);
    assert!((pixel[(1, 2)] - (-50.0)).abs() < 1e-9);
}

#[test]
fn known_affine_map_is_recovered() {
    // Clicks are the targets distorted by a sheared device mapping: the
    // device reports x + 0.2y for x. The solve must recover the inverse.
    let width = 800;
    let height = 600;
    let mut session = session_with_thresholds(0, 0);
    for t in target_points(width, height) {
        let x = t.x + 0.2 * t.y;
        assert!(session.add_click(x as i32, t.y as i32));
    }
    let coeff = session.finish(width, height).unwrap();
    let pixel = denormalize(&coeff, width, height);

    let expected = [
        [1.0, -0.2, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ];
    for (r, row) in expected.iter().enumerate() {
        for (c, want) in row.iter().enumerate() {
            assert!(
                (pixel[(r, c)] - want).abs() < 1e-4,
                "pixel[({r},{c})] = {}, want {want}",
                pixel[(r, c)]
            );
        }
    }
}

#[test]
fn misclick_restarts_and_session_recovers() {
    let mut session = session_with_thresholds(10, 0);
    assert!(session.add_click(100, 75));
    // way off both axes of the first click
    assert!(!session.add_click(300, 400));
    assert_eq!(session.num_clicks(), 0);

    // user starts over and completes cleanly
    for t in target_points(800, 600) {
        assert!(session.add_click(t.x as i32, t.y as i32));
    }
    assert_eq!(session.num_clicks(), 4);
    assert!(session.finish(800, 600).is_ok());
}

#[test]
fn collinear_clicks_fail_without_garbage() {
    let mut session = session_with_thresholds(0, 0);
    for (x, y) in [(100, 100), (300, 100), (500, 100), (700, 100)] {
        assert!(session.add_click(x, y));
    }
    assert_eq!(
        session.finish(800, 600),
        Err(SolveError::DegenerateClicks)
    );
    assert!(session.coeff().is_none());
}

#[test]
fn prescaled_clicks_calibrate_the_right_monitor() {
    // Two side-by-side 1920x1080 monitors; calibration runs on the right
    // one. Presses arrive in overall-display coordinates.
    let overall = ScreenSize {
        width: 3840,
        height: 1080,
    };
    let monitor = MonitorRegion {
        x: 1920,
        y: 0,
        width: 1920,
        height: 1080,
    };
    let prescale = Prescale::for_monitor(overall, monitor).unwrap();

    let mut session = session_with_thresholds(0, 0);
    for t in target_points(monitor.width, monitor.height) {
        // what the windowing system reports for a press at the local target
        let global_x = (t.x + monitor.x as Real) * monitor.width as Real / overall.width as Real;
        let global_y = (t.y + monitor.y as Real) * monitor.height as Real / overall.height as Real;
        let (x, y) = prescale.remap(global_x as i32, global_y as i32);
        assert!(session.add_click(x, y));
    }

    let coeff = session.finish(monitor.width, monitor.height).unwrap();
    for r in 0..3 {
        for c in 0..3 {
            let expected = if r == c { 1.0 } else { 0.0 };
            assert!((coeff[(r, c)] - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn coefficients_survive_the_wire_format() {
    let mut session = session_with_thresholds(0, 0);
    for t in target_points(800, 600) {
        assert!(session.add_click(t.x as i32 + 30, t.y as i32 - 20));
    }
    let coeff = session.finish(800, 600).unwrap();

    let wire = format_coefficients(&coeff);
    let restored = parse_coefficients(&wire).unwrap();
    assert_eq!(coeff, restored);

    // restored matrix still maps a click onto its target in pixel space
    let pixel = denormalize(&restored, 800, 600);
    let target = target_points(800, 600)[0];
    let mapped = transform_point(&pixel, &Pt2::new(target.x + 30.0, target.y - 20.0));
    assert!((mapped.x - target.x).abs() < 1e-6);
    assert!((mapped.y - target.y).abs() < 1e-6);
}
