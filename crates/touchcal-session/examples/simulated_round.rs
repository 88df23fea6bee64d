//! Simulated calibration round: scripted presses stand in for the GUI.
//!
//! Run with `RUST_LOG=debug` to see the rejection and solve diagnostics.

use anyhow::Result;
use touchcal_core::{format_coefficients, target_points, MonitorRegion, Prescale, ScreenSize};
use touchcal_session::{CalibrationSession, ClickSink, SessionConfig};

fn main() -> Result<()> {
    env_logger::init();

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
    let prescale = Prescale::for_monitor(overall, monitor);

    let mut session = CalibrationSession::new(SessionConfig {
        threshold_misclick: 15,
        threshold_doubleclick: 7,
    });

    // A sloppy user: the second press repeats the first, one press lands
    // far off axis, and the rest are a few pixels off target.
    let presses: &[(i32, i32)] = &[
        (1082, 139),
        (1084, 141), // double-click, rejected
        (1798, 133),
        (1540, 480), // mis-click, restarts the round
        (1081, 137),
        (1799, 134),
        (1083, 946),
        (1801, 947),
    ];

    for &(gx, gy) in presses {
        let (x, y) = match prescale {
            Some(p) => p.remap(gx, gy),
            None => (gx, gy),
        };
        let accepted = session.add_click(x, y);
        println!(
            "press ({gx:4}, {gy:4}) -> local ({x:4}, {y:4}): {}",
            if accepted { "accepted" } else { "rejected" }
        );
    }

    let coeff = session.finish(monitor.width, monitor.height)?;

    println!();
    println!("targets: {:?}", target_points(monitor.width, monitor.height));
    println!("calibration matrix:");
    for r in 0..3 {
        println!(
            "    [ {:8.5}, {:8.5}, {:8.5} ]",
            coeff[(r, 0)],
            coeff[(r, 1)],
            coeff[(r, 2)]
        );
    }
    println!();
    println!("device property: {}", format_coefficients(&coeff));
    Ok(())
}
