//! 3×3 matrix utilities for calibration work.
//!
//! nalgebra already provides the algebra (products, sums, scalar multiples,
//! `Mat3::identity()`); this module adds what the calibration flow needs on
//! top: inversion with an explicit singularity guard, the primitive
//! translation/scale constructors used for coordinate-space composition,
//! and the nine-coefficient string format consumed by device-property
//! writers.

use thiserror::Error;

use crate::math::{Mat3, Real};

/// Determinants below this magnitude are treated as singular.
pub const DET_EPSILON: Real = 1e-9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoeffParseError {
    #[error("expected 9 coefficients, got {0}")]
    WrongCount(usize),
    #[error("invalid coefficient '{0}'")]
    BadFloat(String),
}

/// Invert a 3×3 matrix, refusing near-singular input.
///
/// Returns `None` when `|det| < DET_EPSILON`. The calibration sub-solves
/// hit this when three accepted clicks are collinear.
pub fn invert_checked(m: &Mat3) -> Option<Mat3> {
    if m.determinant().abs() < DET_EPSILON {
        return None;
    }
    m.try_inverse()
}

/// Homogeneous translation by `(dx, dy)`.
pub fn translation(dx: Real, dy: Real) -> Mat3 {
    Mat3::new(1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0)
}

/// Homogeneous axis-aligned scale by `(sx, sy)`.
pub fn scaling(sx: Real, sy: Real) -> Mat3 {
    Mat3::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0)
}

/// Overwrite the bottom row with exactly `(0, 0, 1)`.
///
/// Averaging and rescaling can leave `-0.0` or `0.999999...` where the
/// input stack expects exact values.
pub fn force_affine(m: &mut Mat3) {
    m[(2, 0)] = 0.0;
    m[(2, 1)] = 0.0;
    m[(2, 2)] = 1.0;
}

/// Whether the bottom row is exactly `(0, 0, 1)`.
pub fn is_affine(m: &Mat3) -> bool {
    m[(2, 0)] == 0.0 && m[(2, 1)] == 0.0 && m[(2, 2)] == 1.0
}

/// Parse a nine-coefficient string into a row-major matrix.
///
/// Accepts whitespace and/or comma separators, so both the device property
/// read-back (`"1 0 0 0 1 0 0 0 1"`) and the comma form used on command
/// lines (`"1,0,0,0,1,0,0,0,1"`) parse.
pub fn parse_coefficients(s: &str) -> Result<Mat3, CoeffParseError> {
    let tokens: Vec<&str> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() != 9 {
        return Err(CoeffParseError::WrongCount(tokens.len()));
    }

    let mut vals: [Real; 9] = [0.0; 9];
    for (v, tok) in vals.iter_mut().zip(&tokens) {
        *v = tok
            .parse()
            .map_err(|_| CoeffParseError::BadFloat((*tok).to_string()))?;
    }
    Ok(Mat3::from_row_slice(&vals))
}

/// Format row-major, space-separated: the device property wire format.
pub fn format_coefficients(m: &Mat3) -> String {
    (0..9)
        .map(|i| m[(i / 3, i % 3)].to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
