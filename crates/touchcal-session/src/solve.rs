//! Four-point calibration solve.
//!
//! The calibration matrix `C` maps device-reported coordinates onto screen
//! coordinates in homogeneous form:
//!
//! ```text
//!     [a b c]   [tx]   [sx]
//!     [d e f] · [ty] = [sy]
//!     [0 0 1]   [ 1]   [ 1]
//! ```
//!
//! Three click/target pairs determine `C` exactly: stack the observed
//! clicks and the target positions as matrix columns and solve
//! `C · Tm = Ts`, i.e. `C = Ts · Tm⁻¹`. Four clicks over-determine the
//! six-parameter map, so the solve runs the four leave-one-out sub-problems
//! and averages the exact solutions; this is deliberately not a
//! least-squares fit.
//!
//! The averaged matrix is then rescaled so input and output axes live in
//! the 0..1 space the input stack expects, and the bottom row is pinned to
//! exactly `(0, 0, 1)`.

use thiserror::Error;

use touchcal_core::{
    force_affine, format_coefficients, invert_checked, target_points, to_homogeneous, Mat3, Pt2,
    Real, Vec3,
};

use crate::validator::{ClickPoint, NUM_POINTS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("need exactly 4 accepted clicks, got {0}")]
    NotEnoughClicks(usize),
    #[error("accepted clicks are collinear, no unique affine map exists")]
    DegenerateClicks,
}

// Corner triples for the leave-one-out sub-solves:
// skip LR, skip UL, skip UR, skip LL.
const SUBSETS: [[usize; 3]; 4] = [
    [0, 1, 2], // UL UR LL
    [3, 1, 2], // LR UR LL
    [3, 0, 2], // LR UL LL
    [3, 0, 1], // LR UL UR
];

/// Compute the normalized calibration matrix from four accepted clicks.
///
/// `width`/`height` are the pixel dimensions of the calibrated surface and
/// define the four target positions. Any collinear three-click subset
/// fails the whole solve; no partial result escapes.
pub fn solve_calibration(
    points: &[ClickPoint],
    width: u32,
    height: u32,
) -> Result<Mat3, SolveError> {
    if points.len() != NUM_POINTS {
        return Err(SolveError::NotEnoughClicks(points.len()));
    }
    let targets = target_points(width, height);

    let mut sum = Mat3::zeros();
    for corners in SUBSETS {
        sum += three_point_map(points, &targets, corners)?;
    }
    let mut coeff = sum * 0.25;

    // Rescale into the 0..1 coordinate space on both axes. The pure scale
    // terms (0,0) and (1,1) are axis-ratio invariant and stay untouched.
    let w = width as Real;
    let h = height as Real;
    coeff[(0, 1)] *= h / w;
    coeff[(0, 2)] *= 1.0 / w;
    coeff[(1, 0)] *= w / h;
    coeff[(1, 2)] *= 1.0 / h;

    // The arithmetic above can leave -0.0 / 0.999999 in the bottom row.
    force_affine(&mut coeff);

    log::debug!("calibration matrix: {}", format_coefficients(&coeff));

    Ok(coeff)
}

/// The exact affine map sending three observed clicks onto their targets.
fn three_point_map(
    points: &[ClickPoint],
    targets: &[Pt2; 4],
    corners: [usize; 3],
) -> Result<Mat3, SolveError> {
    let mut tm = Mat3::zeros();
    let mut ts = Mat3::zeros();
    for (col, &i) in corners.iter().enumerate() {
        tm.set_column(
            col,
            &Vec3::new(points[i].x as Real, points[i].y as Real, 1.0),
        );
        ts.set_column(col, &to_homogeneous(&targets[i]));
    }
    let tmi = invert_checked(&tm).ok_or(SolveError::DegenerateClicks)?;
    Ok(ts * tmi)
}
