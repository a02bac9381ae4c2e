pub mod cli;
pub mod config;
pub mod constants;
pub mod coordinate;
pub mod kepler;
pub mod logging;
pub mod orbit_geometry;
pub mod orbit_shape;
pub mod orbiter_errors;
pub mod time;
pub mod trace;
