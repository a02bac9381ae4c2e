//! # Frame sampling and CSV export
//!
//! Headless counterpart of the animation loop: evaluates an [`OrbitGeometry`] at the
//! ticks of a [`crate::time::FrameClock`] and writes the outline and the per-frame
//! states as CSV.
//!
//! A frame whose evaluation fails (non-convergence, vis-viva domain error) is skipped
//! and logged; the following frames are still evaluated.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, warn};

use crate::constants::Mass;
use crate::coordinate::Coordinate;
use crate::orbit_geometry::{OrbitGeometry, OrbitState};
use crate::orbiter_errors::OrbitError;

/// States computed for a run of frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameReport {
    pub states: Vec<OrbitState>,
    /// Time values of the frames that could not be evaluated
    pub skipped: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct OutlineRow {
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct FrameRow {
    time: f64,
    eccentric_anomaly: f64,
    x: f64,
    y: f64,
    speed: f64,
}

impl From<&OrbitState> for FrameRow {
    fn from(state: &OrbitState) -> Self {
        FrameRow {
            time: state.time,
            eccentric_anomaly: state.eccentric_anomaly,
            x: state.coordinate.x,
            y: state.coordinate.y,
            speed: state.speed,
        }
    }
}

/// Evaluate the orbit at every time value, skipping the frames that fail.
pub fn render_frames<I>(orbit: &OrbitGeometry, central_mass: Mass, times: I) -> FrameReport
where
    I: IntoIterator<Item = f64>,
{
    let mut report = FrameReport::default();

    for time in times {
        match orbit.state_at_time(time, central_mass) {
            Ok(state) => report.states.push(state),
            Err(err) => {
                warn!(time, %err, "skipping frame");
                report.skipped.push(time);
            }
        }
    }

    debug!(
        rendered = report.states.len(),
        skipped = report.skipped.len(),
        "frames evaluated"
    );
    report
}

/// Write the outline points as `x,y` CSV rows.
pub fn write_outline<W: Write>(writer: W, outline: &[Coordinate]) -> Result<(), OrbitError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in outline {
        wtr.serialize(OutlineRow {
            x: point.x,
            y: point.y,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write frame states as `time,eccentric_anomaly,x,y,speed` CSV rows.
pub fn write_frames<W: Write>(writer: W, states: &[OrbitState]) -> Result<(), OrbitError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for state in states {
        wtr.serialize(FrameRow::from(state))?;
    }
    wtr.flush()?;
    Ok(())
}
