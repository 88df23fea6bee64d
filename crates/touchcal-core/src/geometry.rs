//! Target-corner geometry.
//!
//! The calibrated surface is divided into an 8×8 grid of blocks; each of
//! the four targets sits one block in from its nearest corner, so a target
//! is never flush against the screen edge where a touch sensor is least
//! accurate.

use serde::{Deserialize, Serialize};

use crate::math::{Pt2, Real};

/// Blocks per axis of the target grid.
pub const NUM_BLOCKS: u32 = 8;

/// The four calibration targets, in click-acceptance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetCorner {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl TargetCorner {
    /// All corners, in the order clicks are accepted.
    pub const ALL: [TargetCorner; 4] = [
        TargetCorner::UpperLeft,
        TargetCorner::UpperRight,
        TargetCorner::LowerLeft,
        TargetCorner::LowerRight,
    ];

    /// Pixel position of this target on a `width × height` surface.
    pub fn target_point(self, width: u32, height: u32) -> Pt2 {
        let xl = width as Real / NUM_BLOCKS as Real;
        let xr = xl * (NUM_BLOCKS - 1) as Real;
        let yu = height as Real / NUM_BLOCKS as Real;
        let yl = yu * (NUM_BLOCKS - 1) as Real;
        match self {
            TargetCorner::UpperLeft => Pt2::new(xl, yu),
            TargetCorner::UpperRight => Pt2::new(xr, yu),
            TargetCorner::LowerLeft => Pt2::new(xl, yl),
            TargetCorner::LowerRight => Pt2::new(xr, yl),
        }
    }
}

/// All four target positions, in click-acceptance order.
pub fn target_points(width: u32, height: u32) -> [Pt2; 4] {
    TargetCorner::ALL.map(|c| c.target_point(width, height))
}

/// Size of the overall display surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

/// A monitor's offset and size inside the overall display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}
