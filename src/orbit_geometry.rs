//! # Elliptical orbit geometry
//!
//! [`OrbitGeometry`] binds fixed [`OrbitParameters`] to their derived [`OrbitShape`] and
//! evaluates the orbit:
//!
//! - [`OrbitGeometry::coordinate_at`] — planar point for an eccentric anomaly `E`
//! - [`OrbitGeometry::position_at_time`] — solve Kepler's equation for a time value
//! - [`OrbitGeometry::speed_at_coordinate`] — vis-viva orbital speed
//! - [`OrbitGeometry::outline`] — closed polyline of the ellipse, for drawing
//!
//! The central body sits at one focus of the ellipse, at `center`. The ellipse is
//! rotated by `rotation_angle` about that focus.
//!
//! ## Units
//!
//! The central mass is given per query and the gravitational constant is injected at
//! construction (default [`GRAVITATIONAL_CONSTANT`]). Distances, masses and time values
//! must be expressed in units consistent with that constant.
//!
//! ## Example
//!
//! ```rust
//! use orbiter::coordinate::Coordinate;
//! use orbiter::orbit_geometry::{OrbitGeometry, OrbitParameters};
//!
//! let params = OrbitParameters::new(Coordinate::new(500., 500.), 300., 0.9, 35f64.to_radians());
//! let orbit = OrbitGeometry::new(params).unwrap();
//!
//! let state = orbit.state_at_time(1_700_000_000_000., 5e10).unwrap();
//! println!("{state}");
//! ```

use std::fmt;

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{Mass, Radian, DPI, GRAVITATIONAL_CONSTANT};
use crate::coordinate::Coordinate;
use crate::kepler::{solve_kepler, KeplerConvergence};
use crate::orbit_shape::OrbitShape;
use crate::orbiter_errors::OrbitError;

/// Orbital elements fixed at initialization.
///
/// * `center`: position of the central body (occupied focus)
/// * `average_radius`: mean of periapsis and apoapsis separations, > 0
/// * `eccentricity`: in `[0, 1)`
/// * `rotation_angle`: orientation of the major axis, radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParameters {
    pub center: Coordinate,
    pub average_radius: f64,
    pub eccentricity: f64,
    pub rotation_angle: Radian,
}

impl OrbitParameters {
    pub fn new(
        center: Coordinate,
        average_radius: f64,
        eccentricity: f64,
        rotation_angle: Radian,
    ) -> Self {
        OrbitParameters {
            center,
            average_radius,
            eccentricity,
            rotation_angle,
        }
    }
}

/// Position of the body at a given time, with the eccentric anomaly that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPosition {
    pub coordinate: Coordinate,
    pub eccentric_anomaly: Radian,
}

/// Everything the renderer draws for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub time: f64,
    pub eccentric_anomaly: Radian,
    pub coordinate: Coordinate,
    pub speed: f64,
}

/// Overlay text lines: time, coordinate, speed.
impl fmt::Display for OrbitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "t={}", self.time)?;
        writeln!(f, "{}", self.coordinate)?;
        write!(f, "speed={}", self.speed)
    }
}

/// Ellipse center in world space, so that `center` lies on a focus.
///
/// `offset = center - focus_distance·(cos θ, sin θ)`
pub fn focus_offset(center: Coordinate, rotation_angle: Radian, focus_distance: f64) -> Coordinate {
    let axis = Vector2::new(rotation_angle.cos(), rotation_angle.sin());
    (center.to_vector() - focus_distance * axis).into()
}

/// Immutable orbit: parameters, derived shape and the constants used to evaluate it.
///
/// Changing a parameter builds a new value through one of the `with_*` methods,
/// so the shape can never go stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGeometry {
    params: OrbitParameters,
    shape: OrbitShape,
    rotation: Rotation2<f64>,
    offset: Coordinate,
    gravitational_constant: f64,
    convergence: KeplerConvergence,
}

impl OrbitGeometry {
    /// Build an orbit using the default gravitational constant and solver settings.
    pub fn new(params: OrbitParameters) -> Result<Self, OrbitError> {
        OrbitGeometry::with_constants(
            params,
            GRAVITATIONAL_CONSTANT,
            KeplerConvergence::default(),
        )
    }

    /// Build an orbit with an explicit gravitational constant and Kepler solver settings.
    ///
    /// Return
    /// ------
    /// * [`OrbitError::InvalidParameter`] if the elements are outside the supported
    ///   domain, the constant is not strictly positive, or the rotation is not finite
    pub fn with_constants(
        params: OrbitParameters,
        gravitational_constant: f64,
        convergence: KeplerConvergence,
    ) -> Result<Self, OrbitError> {
        if !gravitational_constant.is_finite() || gravitational_constant <= 0.0 {
            return Err(OrbitError::invalid(
                "gravitational_constant",
                gravitational_constant,
                "must be finite and strictly positive",
            ));
        }
        if !params.rotation_angle.is_finite() {
            return Err(OrbitError::invalid(
                "rotation_angle",
                params.rotation_angle,
                "must be finite",
            ));
        }
        if let Some(bad) = [params.center.x, params.center.y]
            .into_iter()
            .find(|v| !v.is_finite())
        {
            return Err(OrbitError::invalid("center", bad, "must be finite"));
        }

        let shape = OrbitShape::recompute(params.average_radius, params.eccentricity)?;
        let offset = focus_offset(params.center, params.rotation_angle, shape.focus_distance());

        Ok(OrbitGeometry {
            params,
            shape,
            rotation: Rotation2::new(params.rotation_angle),
            offset,
            gravitational_constant,
            convergence,
        })
    }

    /// Same orbit with another set of parameters.
    pub fn with_parameters(&self, params: OrbitParameters) -> Result<Self, OrbitError> {
        OrbitGeometry::with_constants(params, self.gravitational_constant, self.convergence)
    }

    pub fn with_eccentricity(&self, eccentricity: f64) -> Result<Self, OrbitError> {
        self.with_parameters(OrbitParameters {
            eccentricity,
            ..self.params
        })
    }

    pub fn with_average_radius(&self, average_radius: f64) -> Result<Self, OrbitError> {
        self.with_parameters(OrbitParameters {
            average_radius,
            ..self.params
        })
    }

    pub fn with_rotation_angle(&self, rotation_angle: Radian) -> Result<Self, OrbitError> {
        self.with_parameters(OrbitParameters {
            rotation_angle,
            ..self.params
        })
    }

    pub fn params(&self) -> &OrbitParameters {
        &self.params
    }

    pub fn shape(&self) -> &OrbitShape {
        &self.shape
    }

    /// Ellipse geometric center in world space.
    pub fn offset(&self) -> Coordinate {
        self.offset
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    pub fn convergence(&self) -> &KeplerConvergence {
        &self.convergence
    }

    /// Point of the ellipse for the eccentric anomaly `E` (any real value).
    ///
    /// `(a·cos E, b·sin E)` rotated by the orbit rotation, then translated by the focus offset.
    pub fn coordinate_at(&self, eccentric_anomaly: Radian) -> Coordinate {
        let local = Vector2::new(
            self.shape.semi_major() * eccentric_anomaly.cos(),
            self.shape.semi_minor() * eccentric_anomaly.sin(),
        );
        (self.offset.to_vector() + self.rotation * local).into()
    }

    /// Closed outline of the ellipse: `samples + 1` points at `E = k·2π/samples`.
    ///
    /// The last point repeats the first one (up to rounding) so that drawing the
    /// polyline closes the loop.
    pub fn outline(&self, samples: usize) -> Vec<Coordinate> {
        if samples == 0 {
            return vec![self.coordinate_at(0.)];
        }
        let step = DPI / samples as f64;
        (0..=samples)
            .map(|k| self.coordinate_at(k as f64 * step))
            .collect()
    }

    fn standard_gravitational_parameter(&self, central_mass: Mass) -> Result<f64, OrbitError> {
        if !central_mass.is_finite() || central_mass <= 0.0 {
            return Err(OrbitError::invalid(
                "central_mass",
                central_mass,
                "must be finite and strictly positive",
            ));
        }
        Ok(self.gravitational_constant * central_mass)
    }

    /// Orbital period `T = 2π·sqrt(a³ / (G·m))`.
    pub fn period(&self, central_mass: Mass) -> Result<f64, OrbitError> {
        let mu = self.standard_gravitational_parameter(central_mass)?;
        Ok(DPI * (self.shape.semi_major().powi(3) / mu).sqrt())
    }

    /// Mean anomaly in `[0, 2π)` at `time`.
    ///
    /// The time is first reduced modulo the period; negative times wrap around.
    pub fn mean_anomaly_at(&self, time: f64, central_mass: Mass) -> Result<Radian, OrbitError> {
        if !time.is_finite() {
            return Err(OrbitError::invalid("time", time, "must be finite"));
        }
        let period = self.period(central_mass)?;
        let mean_motion = DPI / period;
        let reduced_time = time.rem_euclid(period);
        Ok(mean_motion * reduced_time)
    }

    /// Position of the body at `time` around a central body of mass `central_mass`.
    ///
    /// Return
    /// ------
    /// * the [`OrbitPosition`] with the eccentric anomaly found by the Kepler solver
    /// * [`OrbitError::InvalidParameter`] for a non-finite time or a non-positive mass
    /// * [`OrbitError::NonConvergence`] if the solver hits its iteration cap
    pub fn position_at_time(
        &self,
        time: f64,
        central_mass: Mass,
    ) -> Result<OrbitPosition, OrbitError> {
        let mean_anomaly = self.mean_anomaly_at(time, central_mass)?;
        let solution = solve_kepler(mean_anomaly, self.shape.eccentricity(), &self.convergence)?;

        Ok(OrbitPosition {
            coordinate: self.coordinate_at(solution.eccentric_anomaly),
            eccentric_anomaly: solution.eccentric_anomaly,
        })
    }

    /// Orbital speed at `coord` from the vis-viva equation `v² = G·m·(2/r - 1/a)`.
    ///
    /// `r` is measured from the central body. A radicand that is not strictly usable
    /// (negative, or `r = 0`) yields [`OrbitError::NumericDomainError`] instead of NaN.
    pub fn speed_at_coordinate(
        &self,
        coord: Coordinate,
        central_mass: Mass,
    ) -> Result<f64, OrbitError> {
        let mu = self.standard_gravitational_parameter(central_mass)?;
        let distance = coord.distance_to(&self.params.center);
        let radicand = mu * (2. / distance - 1. / self.shape.semi_major());

        if !radicand.is_finite() || radicand < 0.0 {
            warn!(distance, radicand, "vis-viva radicand out of domain");
            return Err(OrbitError::NumericDomainError { distance, radicand });
        }
        Ok(radicand.sqrt())
    }

    /// Position and speed of the body at `time`.
    pub fn state_at_time(&self, time: f64, central_mass: Mass) -> Result<OrbitState, OrbitError> {
        let position = self.position_at_time(time, central_mass)?;
        let speed = self.speed_at_coordinate(position.coordinate, central_mass)?;

        Ok(OrbitState {
            time,
            eccentric_anomaly: position.eccentric_anomaly,
            coordinate: position.coordinate,
            speed,
        })
    }
}
