//! Planar Cartesian coordinates.
//!
//! [`Coordinate`] is the value exchanged with the renderer: the central body position,
//! the ellipse outline samples and the moving body all share the same units.
//! Arithmetic is delegated to [`nalgebra::Vector2`].

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Immutable `(x, y)` point in the plane of the orbit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    /// Euclidean distance between two coordinates.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Coordinate {
    fn from(v: Vector2<f64>) -> Self {
        Coordinate::new(v.x, v.y)
    }
}

impl From<Coordinate> for Vector2<f64> {
    fn from(c: Coordinate) -> Self {
        c.to_vector()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate::new(x, y)
    }
}

/// Same layout as the overlay of the reference renderer: `x=524.575; y=517.207`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={:.3}; y={:.3}", self.x, self.y)
    }
}
