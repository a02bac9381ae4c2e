use std::f64::consts::PI;

use tracing::{trace, warn};

use crate::constants::{DPI, HIGH_ECCENTRICITY, KEPLER_MAX_ITER, KEPLER_TOLERANCE};
use crate::orbiter_errors::OrbitError;

/// Stopping criterion of the Newton–Raphson iteration.
///
/// * `eps`: the iteration stops once the last correction satisfies `|ΔE| <= eps`
/// * `max_iter`: number of corrections after which [`OrbitError::NonConvergence`] is returned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerConvergence {
    pub eps: f64,
    pub max_iter: usize,
}

impl Default for KeplerConvergence {
    fn default() -> Self {
        KeplerConvergence {
            eps: KEPLER_TOLERANCE,
            max_iter: KEPLER_MAX_ITER,
        }
    }
}

/// Root of Kepler's equation together with the number of Newton steps used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: f64,
    pub iterations: usize,
}

/// Reduce an angle in radians to `[0, 2π)`.
pub fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Residual of Kepler's equation `E - e·sin(E) - M`.
pub fn kepler_residual(eccentric_anomaly: f64, eccentricity: f64, mean_anomaly: f64) -> f64 {
    eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly
}

/// Solve Kepler's equation `E - e·sin(E) = M` for the eccentric anomaly `E`.
///
/// The starting point is `E₀ = π` when `e > 0.8` and `E₀ = M` otherwise: for very
/// eccentric orbits the curve is steep near periapsis and Newton steps started from
/// `M` overshoot.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians
/// * `eccentricity`: must lie in `[0, 1)`
/// * `convergence`: tolerance and iteration cap
///
/// Return
/// ------
/// * a [`KeplerSolution`], [`OrbitError::InvalidParameter`] for an unsupported
///   eccentricity or a non-finite `M`, or [`OrbitError::NonConvergence`] when the cap is hit
pub fn solve_kepler(
    mean_anomaly: f64,
    eccentricity: f64,
    convergence: &KeplerConvergence,
) -> Result<KeplerSolution, OrbitError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(OrbitError::invalid(
            "eccentricity",
            eccentricity,
            "must lie in [0, 1)",
        ));
    }
    if !mean_anomaly.is_finite() {
        return Err(OrbitError::invalid(
            "mean_anomaly",
            mean_anomaly,
            "must be finite",
        ));
    }

    let mut ecc_anom = if eccentricity > HIGH_ECCENTRICITY {
        PI
    } else {
        mean_anomaly
    };
    let mut delta = f64::INFINITY;

    for iter in 1..=convergence.max_iter {
        // 1 - e·cos(E) >= 1 - e > 0, the step is always defined
        delta = kepler_residual(ecc_anom, eccentricity, mean_anomaly)
            / (1. - eccentricity * ecc_anom.cos());
        ecc_anom -= delta;

        if delta.abs() <= convergence.eps {
            trace!(
                mean_anomaly,
                eccentricity,
                ecc_anom,
                iterations = iter,
                "kepler equation solved"
            );
            return Ok(KeplerSolution {
                eccentric_anomaly: ecc_anom,
                iterations: iter,
            });
        }
    }

    warn!(
        mean_anomaly,
        eccentricity,
        max_iter = convergence.max_iter,
        last_step = delta,
        "kepler equation did not converge"
    );
    Err(OrbitError::NonConvergence {
        mean_anomaly,
        eccentricity,
        iterations: convergence.max_iter,
        last_step: delta,
    })
}
