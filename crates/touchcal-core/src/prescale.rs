//! Multi-monitor click remapping.
//!
//! On a virtual desktop spanning monitors of differing resolution, pointer
//! presses are reported in overall-display coordinates; a press meant for a
//! smaller monitor can alias onto its nearest edge and corrupt the
//! calibration. The prescale transform restores monitor-local coordinates
//! before a click reaches validation. It is built once per calibration
//! attempt, before any click is accepted.

use crate::geometry::{MonitorRegion, ScreenSize};
use crate::math::{transform_point, Mat3, Pt2, Real};
use crate::matrix::{scaling, translation};

/// Coordinate-space remap for one monitor inside the overall display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prescale {
    overall: ScreenSize,
    monitor: MonitorRegion,
}

impl Prescale {
    /// Build the prescale for `monitor` inside `overall`.
    ///
    /// Returns `None` when the monitor covers the whole display: clicks
    /// then pass through unchanged and no remapping is needed.
    pub fn for_monitor(overall: ScreenSize, monitor: MonitorRegion) -> Option<Prescale> {
        if monitor.x == 0
            && monitor.y == 0
            && monitor.width == overall.width
            && monitor.height == overall.height
        {
            return None;
        }
        Some(Prescale { overall, monitor })
    }

    /// The composed transform
    /// `[mw/ow, 0, mx/ow; 0, mh/oh, my/oh; 0, 0, 1]`
    /// mapping monitor-local coordinates into the overall display space.
    pub fn matrix(&self) -> Mat3 {
        let ow = self.overall.width as Real;
        let oh = self.overall.height as Real;
        Mat3::new(
            self.monitor.width as Real / ow,
            0.0,
            self.monitor.x as Real / ow,
            0.0,
            self.monitor.height as Real / oh,
            self.monitor.y as Real / oh,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Remap a click from overall-display coordinates back to
    /// monitor-local coordinates:
    /// `x' = x/mw*ow - mx`, `y' = y/mh*oh - my`.
    pub fn remap(&self, x: i32, y: i32) -> (i32, i32) {
        let m = translation(-(self.monitor.x as Real), -(self.monitor.y as Real))
            * scaling(
                self.overall.width as Real / self.monitor.width as Real,
                self.overall.height as Real / self.monitor.height as Real,
            );
        let p = transform_point(&m, &Pt2::new(x as Real, y as Real));
        (p.x.round() as i32, p.y.round() as i32)
    }
}
