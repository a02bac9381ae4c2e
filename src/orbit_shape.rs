use tracing::debug;

use crate::orbiter_errors::OrbitError;

/// Ellipse shape derived from the average radius and the eccentricity.
///
/// Units:
/// * `sep_max`, `sep_min`: apoapsis and periapsis separation, same unit as the radius
/// * `semi_major`, `semi_minor`: ellipse half axes
/// * `focus_distance`: distance between the ellipse center and either focus
///
/// The fields are private: an [`OrbitShape`] only exists through
/// [`OrbitShape::recompute`], so it is always consistent with its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitShape {
    average_radius: f64,
    eccentricity: f64,
    sep_max: f64,
    sep_min: f64,
    semi_major: f64,
    semi_minor: f64,
    focus_distance: f64,
}

impl OrbitShape {
    /// Derive the ellipse shape from the orbital elements.
    ///
    /// Arguments
    /// ---------
    /// * `average_radius`: mean of the periapsis and apoapsis separations, must be finite and > 0
    /// * `eccentricity`: must lie in `[0, 1)`; parabolic and hyperbolic orbits are not supported
    ///
    /// Return
    /// ------
    /// * the derived [`OrbitShape`], or [`OrbitError::InvalidParameter`]
    pub fn recompute(average_radius: f64, eccentricity: f64) -> Result<Self, OrbitError> {
        if !average_radius.is_finite() || average_radius <= 0.0 {
            return Err(OrbitError::invalid(
                "average_radius",
                average_radius,
                "must be finite and strictly positive",
            ));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::invalid(
                "eccentricity",
                eccentricity,
                "must lie in [0, 1)",
            ));
        }

        let sep_max = average_radius * (1. + eccentricity);
        let sep_min = average_radius * (1. - eccentricity);
        let semi_major = (sep_max + sep_min) / 2.;
        let semi_minor = semi_major * (1. - eccentricity.powi(2)).sqrt();
        // clamp guards against a tiny negative difference from rounding
        let focus_distance = (semi_major.powi(2) - semi_minor.powi(2)).max(0.).sqrt();

        debug!(
            average_radius,
            eccentricity, semi_major, semi_minor, focus_distance, "derived orbit shape"
        );

        Ok(OrbitShape {
            average_radius,
            eccentricity,
            sep_max,
            sep_min,
            semi_major,
            semi_minor,
            focus_distance,
        })
    }

    pub fn average_radius(&self) -> f64 {
        self.average_radius
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Apoapsis separation
    pub fn sep_max(&self) -> f64 {
        self.sep_max
    }

    /// Periapsis separation
    pub fn sep_min(&self) -> f64 {
        self.sep_min
    }

    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    pub fn focus_distance(&self) -> f64 {
        self.focus_distance
    }
}
