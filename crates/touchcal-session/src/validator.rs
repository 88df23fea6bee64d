//! Click acceptance.
//!
//! Collects the four calibration clicks in UL, UR, LL, LR order and rejects
//! accidental input: a repeat of an earlier click (double-click) or a tap
//! that is not axis-aligned with the clicks before it (mis-click). A
//! mis-click discards everything accepted so far, forcing the user to
//! restart from a clean slate.

use serde::{Deserialize, Serialize};

/// An observed press in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickPoint {
    pub x: i32,
    pub y: i32,
}

/// Clicks a full calibration needs.
pub const NUM_POINTS: usize = 4;

// Ordinal positions in the accepted list.
const UL: usize = 0;
const UR: usize = 1;
const LL: usize = 2;

/// Click-acceptance state machine.
///
/// Thresholds are in pixels; 0 disables the corresponding check. The
/// accepted list never exceeds [`NUM_POINTS`] entries; the N-th accepted
/// click is implicitly bound to the N-th target corner.
#[derive(Debug, Clone, Default)]
pub struct ClickValidator {
    points: Vec<ClickPoint>,
    threshold_doubleclick: i32,
    threshold_misclick: i32,
}

impl ClickValidator {
    pub fn new(threshold_misclick: i32, threshold_doubleclick: i32) -> Self {
        Self {
            points: Vec::with_capacity(NUM_POINTS),
            threshold_doubleclick,
            threshold_misclick,
        }
    }

    /// Number of clicks accepted so far.
    pub fn num_clicks(&self) -> usize {
        self.points.len()
    }

    /// The `i`-th accepted click.
    pub fn point(&self, i: usize) -> Option<ClickPoint> {
        self.points.get(i).copied()
    }

    /// Accepted clicks, in acceptance order.
    pub fn points(&self) -> &[ClickPoint] {
        &self.points
    }

    pub fn set_threshold_misclick(&mut self, t: i32) {
        self.threshold_misclick = t;
    }

    pub fn set_threshold_doubleclick(&mut self, t: i32) {
        self.threshold_doubleclick = t;
    }

    /// Discard all accepted clicks.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Validate and record a click.
    ///
    /// Returns `false` on rejection. A double-click leaves earlier clicks
    /// in place; a mis-click discards them all.
    pub fn add_click(&mut self, x: i32, y: i32) -> bool {
        if self.points.len() >= NUM_POINTS {
            log::warn!("ignoring click (X={x}, Y={y}): already have {NUM_POINTS} points");
            return false;
        }

        if self.threshold_doubleclick > 0 && !self.points.is_empty() {
            if let Some(prev) = self.points.iter().find(|p| {
                (x - p.x).abs() <= self.threshold_doubleclick
                    && (y - p.y).abs() <= self.threshold_doubleclick
            }) {
                log::warn!(
                    "not adding click {} (X={x}, Y={y}): within {} pixels of click (X={}, Y={})",
                    self.points.len(),
                    self.threshold_doubleclick,
                    prev.x,
                    prev.y
                );
                return false;
            }
        }

        if self.threshold_misclick > 0 && !self.points.is_empty() && self.is_misclick(x, y) {
            log::warn!(
                "mis-click detected at (X={x}, Y={y}) after {} clicks, restarting",
                self.points.len()
            );
            self.reset();
            return false;
        }

        self.points.push(ClickPoint { x, y });
        true
    }

    /// Whether `v` is within the mis-click threshold of either coordinate
    /// of the reference point.
    fn along_axis(&self, v: i32, p: ClickPoint) -> bool {
        (v - p.x).abs() <= self.threshold_misclick || (v - p.y).abs() <= self.threshold_misclick
    }

    fn is_misclick(&self, x: i32, y: i32) -> bool {
        let p = &self.points;
        let aligned = match p.len() {
            // second click: along one axis of the first
            1 => self.along_axis(x, p[UL]) || self.along_axis(y, p[UL]),
            // third click: along the other axis of the first than the second
            2 => {
                (self.along_axis(y, p[UL]) && self.along_axis(p[UR].x, p[UL]))
                    || (self.along_axis(x, p[UL]) && self.along_axis(p[UR].y, p[UL]))
            }
            // fourth click: along both axes of the second and third
            3 => {
                (self.along_axis(x, p[UR]) && self.along_axis(y, p[LL]))
                    || (self.along_axis(y, p[UR]) && self.along_axis(x, p[LL]))
            }
            _ => false,
        };
        !aligned
    }
}
