use approx::assert_abs_diff_eq;
use orbiter::coordinate::Coordinate;
use orbiter::orbit_geometry::{OrbitGeometry, OrbitParameters};

#[allow(dead_code)]
pub const STAR_MASS: f64 = 5e10;

/// Orbit of the reference scene: star at (500, 500), r = 300, e = 0.9, rotated by 35°.
#[allow(dead_code)]
pub fn reference_orbit() -> OrbitGeometry {
    OrbitGeometry::new(OrbitParameters::new(
        Coordinate::new(500., 500.),
        300.,
        0.9,
        35f64.to_radians(),
    ))
    .unwrap()
}

#[allow(dead_code)]
pub fn assert_coord_close(actual: Coordinate, expected: Coordinate, epsilon: f64) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
}
