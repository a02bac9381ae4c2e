use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::orbiter_errors::OrbitError;

/// Unit of the scalar time value handed to the orbit model.
///
/// The reference renderer feeds wall-clock milliseconds since the Unix epoch, which
/// gives a visible orbit period of a few seconds with the default parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum TimeUnit {
    #[default]
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Number of time units in one second
    pub fn per_second(self) -> f64 {
        match self {
            TimeUnit::Milliseconds => 1e3,
            TimeUnit::Seconds => 1.0,
        }
    }
}

/// Transformation from an epoch to the scalar time value (elapsed since the Unix epoch)
///
/// Argument
/// --------
/// * `epoch`: the epoch to convert
/// * `unit`: the unit of the returned value
///
/// Return
/// ------
/// * the time elapsed since 1970-01-01T00:00:00 UTC in `unit`
pub fn epoch_to_time_value(epoch: Epoch, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Milliseconds => epoch.to_unix_milliseconds(),
        TimeUnit::Seconds => epoch.to_unix_seconds(),
    }
}

/// Parse an epoch such as `2024-03-01T12:00:00 UTC`, or `now` for the current time
///
/// Argument
/// --------
/// * `date`: the epoch string
///
/// Return
/// ------
/// * the parsed [`Epoch`], or [`OrbitError::InvalidEpoch`]
pub fn parse_epoch(date: &str) -> Result<Epoch, OrbitError> {
    if date.trim().eq_ignore_ascii_case("now") {
        return Epoch::now().map_err(|e| OrbitError::InvalidEpoch(e.to_string()));
    }
    Epoch::from_str(date.trim()).map_err(|e| OrbitError::InvalidEpoch(format!("{date}: {e}")))
}

/// Timestamps of a fixed-cadence animation loop.
///
/// Each tick advances by `1 / frame_rate` seconds, expressed in the configured unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    start: f64,
    step: f64,
}

impl FrameClock {
    pub fn new(start: f64, frame_rate: f64, unit: TimeUnit) -> Result<Self, OrbitError> {
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(OrbitError::invalid(
                "frame_rate",
                frame_rate,
                "must be finite and strictly positive",
            ));
        }
        if !start.is_finite() {
            return Err(OrbitError::invalid("start", start, "must be finite"));
        }
        Ok(FrameClock {
            start,
            step: unit.per_second() / frame_rate,
        })
    }

    pub fn from_epoch(epoch: Epoch, frame_rate: f64, unit: TimeUnit) -> Result<Self, OrbitError> {
        FrameClock::new(epoch_to_time_value(epoch, unit), frame_rate, unit)
    }

    /// Time between two frames
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Time value of frame `index`
    pub fn tick(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    /// Time values of the first `count` frames
    pub fn ticks(&self, count: usize) -> impl Iterator<Item = f64> + '_ {
        (0..count).map(move |i| self.tick(i))
    }
}
