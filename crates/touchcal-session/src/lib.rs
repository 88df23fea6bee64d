//! Touch-screen calibration engine.
//!
//! The four-point calibration flow: the host GUI feeds pointer presses into
//! a [`CalibrationSession`] (optionally remapped through a
//! `touchcal_core::Prescale` first), the session's [`ClickValidator`]
//! rejects accidental double-clicks and badly aligned taps, and once four
//! clicks are accepted [`CalibrationSession::finish`] runs the
//! leave-one-out solve and stores the normalized calibration matrix.
//!
//! Everything here is synchronous and single-threaded; one session serves
//! one calibration attempt.

/// Session facade and the `ClickSink` seam for the host GUI.
pub mod session;
/// Four-point leave-one-out calibration solve.
pub mod solve;
/// Click-acceptance state machine.
pub mod validator;

pub use session::*;
pub use solve::*;
pub use validator::*;
