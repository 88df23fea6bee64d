//! Core math and geometry primitives for `touchcal`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Pt2`, `Mat3`, ...),
//! - 3×3 matrix utilities: guarded inversion, the primitive homogeneous
//!   transforms, and the nine-coefficient device string round-trip,
//! - the four-target block-grid geometry,
//! - the multi-monitor prescale transform.
//!
//! A calibration matrix maps device-reported touch coordinates to screen
//! coordinates in homogeneous form; before it is handed to the input stack
//! it is expressed in the 0..1 normalized space with the bottom row pinned
//! to `(0, 0, 1)`.

/// Target corners and display/monitor geometry.
pub mod geometry;
/// Linear algebra type aliases and helpers.
pub mod math;
/// 3×3 matrix utilities and the coefficient wire format.
pub mod matrix;
/// Multi-monitor click remapping.
pub mod prescale;

pub use geometry::*;
pub use math::*;
pub use matrix::*;
pub use prescale::*;
