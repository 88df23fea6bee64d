//! Calibration session facade.
//!
//! One `CalibrationSession` serves one calibration attempt: it owns the
//! click validator and the solved matrix, and implements [`ClickSink`] so
//! the host GUI can push pointer presses into it without depending on the
//! concrete type.

use serde::{Deserialize, Serialize};

use touchcal_core::Mat3;

use crate::solve::{solve_calibration, SolveError};
use crate::validator::{ClickPoint, ClickValidator};

/// Pixel thresholds for click acceptance; 0 disables a check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Reject clicks not axis-aligned with earlier ones; a lower value
    /// forces a more precise calibration.
    pub threshold_misclick: i32,
    /// Reject clicks this close to an already accepted click.
    pub threshold_doubleclick: i32,
}

/// Receiver of pointer presses.
///
/// The host GUI's event loop pushes presses into whatever implements this;
/// [`CalibrationSession`] is the production implementation.
pub trait ClickSink {
    /// Accept or reject a press. Rejection may discard earlier clicks.
    fn add_click(&mut self, x: i32, y: i32) -> bool;
    /// Discard all accepted clicks.
    fn reset(&mut self);
}

/// One calibration attempt: click collection, solve, stored result.
#[derive(Debug, Clone, Default)]
pub struct CalibrationSession {
    validator: ClickValidator,
    result: Option<Mat3>,
}

impl CalibrationSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            validator: ClickValidator::new(config.threshold_misclick, config.threshold_doubleclick),
            result: None,
        }
    }

    /// Number of clicks accepted so far.
    pub fn num_clicks(&self) -> usize {
        self.validator.num_clicks()
    }

    /// The `i`-th accepted click.
    pub fn point(&self, i: usize) -> Option<ClickPoint> {
        self.validator.point(i)
    }

    pub fn set_threshold_misclick(&mut self, t: i32) {
        self.validator.set_threshold_misclick(t);
    }

    pub fn set_threshold_doubleclick(&mut self, t: i32) {
        self.validator.set_threshold_doubleclick(t);
    }

    /// Solve over the accepted clicks and store the normalized matrix.
    ///
    /// `width`/`height` are the pixel dimensions of the calibrated
    /// surface. On failure the previously stored result is untouched.
    pub fn finish(&mut self, width: u32, height: u32) -> Result<Mat3, SolveError> {
        let coeff = solve_calibration(self.validator.points(), width, height)?;
        self.result = Some(coeff);
        Ok(coeff)
    }

    /// The last successfully computed matrix.
    pub fn coeff(&self) -> Option<&Mat3> {
        self.result.as_ref()
    }
}

impl ClickSink for CalibrationSession {
    fn add_click(&mut self, x: i32, y: i32) -> bool {
        self.validator.add_click(x, y)
    }

    fn reset(&mut self) {
        self.validator.reset();
    }
}
