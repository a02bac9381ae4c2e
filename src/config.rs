//! Orbit configuration with defaults and RON persistence.
//!
//! The defaults reproduce the reference scene: a star at `(500, 500)` and a planet on
//! an orbit of average radius 300 with eccentricity 0.9, rotated by 35°.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{
    Degree, Mass, FRAME_RATE, GRAVITATIONAL_CONSTANT, KEPLER_MAX_ITER, KEPLER_TOLERANCE,
    OUTLINE_SAMPLES, RADEG,
};
use crate::coordinate::Coordinate;
use crate::kepler::KeplerConvergence;
use crate::orbit_geometry::{OrbitGeometry, OrbitParameters};
use crate::orbiter_errors::OrbitError;
use crate::time::TimeUnit;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbiterConfig {
    /// Orbital elements.
    pub orbit: OrbitConfig,
    /// Mass of the central body.
    pub central_mass: Mass,
    /// Gravitational constant, in units consistent with mass, distance and time.
    pub gravitational_constant: f64,
    /// Kepler solver settings.
    pub kepler: KeplerConfig,
    /// Unit of the time values fed to the model.
    pub time_unit: TimeUnit,
    /// Cadence of the frame loop, frames per second.
    pub frame_rate: f64,
    /// Number of angle steps of the outline.
    pub outline_samples: usize,
    /// Log filter (error, warn, info, debug, trace or an `EnvFilter` directive).
    pub log_level: String,
}

/// Orbital elements as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Position of the central body.
    pub center: Coordinate,
    pub average_radius: f64,
    pub eccentricity: f64,
    /// Rotation of the major axis, degrees.
    pub rotation: Degree,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeplerConfig {
    pub tolerance: f64,
    pub max_iter: usize,
}

impl Default for OrbiterConfig {
    fn default() -> Self {
        Self {
            orbit: OrbitConfig::default(),
            central_mass: 5e10,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            kepler: KeplerConfig::default(),
            time_unit: TimeUnit::Milliseconds,
            frame_rate: FRAME_RATE,
            outline_samples: OUTLINE_SAMPLES,
            log_level: "info".to_string(),
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            center: Coordinate::new(500., 500.),
            average_radius: 300.,
            eccentricity: 0.9,
            rotation: 35.,
        }
    }
}

impl Default for KeplerConfig {
    fn default() -> Self {
        Self {
            tolerance: KEPLER_TOLERANCE,
            max_iter: KEPLER_MAX_ITER,
        }
    }
}

impl From<&KeplerConfig> for KeplerConvergence {
    fn from(cfg: &KeplerConfig) -> Self {
        KeplerConvergence {
            eps: cfg.tolerance,
            max_iter: cfg.max_iter,
        }
    }
}

impl OrbitConfig {
    pub fn to_parameters(&self) -> OrbitParameters {
        OrbitParameters::new(
            self.center,
            self.average_radius,
            self.eccentricity,
            self.rotation * RADEG,
        )
    }
}

impl OrbiterConfig {
    /// Load a config from a RON file.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let contents = std::fs::read_to_string(path)?;
        let config: OrbiterConfig = ron::from_str(&contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, OrbitError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "config not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Write the config as pretty-printed RON.
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = self.to_ron()?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn to_ron(&self) -> Result<String, OrbitError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Build the orbit described by this config.
    pub fn geometry(&self) -> Result<OrbitGeometry, OrbitError> {
        OrbitGeometry::with_constants(
            self.orbit.to_parameters(),
            self.gravitational_constant,
            KeplerConvergence::from(&self.kepler),
        )
    }
}
