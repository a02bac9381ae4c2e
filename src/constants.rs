//! # Constants and type definitions for Orbiter
//!
//! This module centralizes the **physical constants**, **numerical tolerances** and
//! **type aliases** shared by the orbit model.
//!
//! ## Overview
//!
//! - Gravitational constant used by default for period and vis-viva computations
//! - Angle conversions (degrees ↔ radians)
//! - Kepler solver defaults (tolerance, iteration cap, high-eccentricity threshold)
//! - Outline sampling and frame cadence defaults of the reference renderer

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Newtonian gravitational constant (m³·kg⁻¹·s⁻²), rounded as in the reference model
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Kepler solver defaults
// -------------------------------------------------------------------------------------------------

/// Newton–Raphson stops once the last correction is at most this value (radians)
pub const KEPLER_TOLERANCE: f64 = 1e-4;

/// Hard cap on Newton–Raphson iterations
pub const KEPLER_MAX_ITER: usize = 100;

/// Above this eccentricity the solver starts from E₀ = π instead of E₀ = M
pub const HIGH_ECCENTRICITY: f64 = 0.8;

// -------------------------------------------------------------------------------------------------
// Rendering defaults
// -------------------------------------------------------------------------------------------------

/// Number of angle steps used to trace the ellipse outline (1° spacing)
pub const OUTLINE_SAMPLES: usize = 360;

/// Target cadence of the animation loop, in frames per second
pub const FRAME_RATE: f64 = 30.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Mass of the central body, in units consistent with the gravitational constant
pub type Mass = f64;
