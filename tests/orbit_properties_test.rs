mod common;

use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use itertools::iproduct;
use orbiter::constants::{DPI, KEPLER_TOLERANCE};
use orbiter::coordinate::Coordinate;
use orbiter::kepler::{kepler_residual, solve_kepler, KeplerConvergence};
use orbiter::orbit_geometry::{OrbitGeometry, OrbitParameters};
use orbiter::orbit_shape::OrbitShape;
use orbiter::orbiter_errors::OrbitError;

use crate::common::{assert_coord_close, reference_orbit, STAR_MASS};

const RADII: [f64; 4] = [1e-3, 1., 300., 7.5e6];
const ECCENTRICITIES: [f64; 7] = [0., 0.1, 0.5, 0.8, 0.81, 0.9, 0.999];

#[test]
fn test_shape_invariants() {
    for (r, e) in iproduct!(RADII, ECCENTRICITIES) {
        let shape = OrbitShape::recompute(r, e).unwrap();

        assert!(shape.semi_major() >= shape.semi_minor());
        assert!(shape.semi_minor() >= 0.);
        assert_relative_eq!(
            shape.focus_distance().powi(2) + shape.semi_minor().powi(2),
            shape.semi_major().powi(2),
            max_relative = 1e-12
        );
        assert_relative_eq!(shape.semi_major(), r, max_relative = 1e-12);
    }
}

#[test]
fn test_coordinate_at_is_periodic() {
    for (r, e) in iproduct!(RADII, ECCENTRICITIES) {
        let orbit =
            OrbitGeometry::new(OrbitParameters::new(Coordinate::new(-3., 8.), r, e, 1.1)).unwrap();

        let tol = 1e-9 * r.max(10.);
        assert_coord_close(orbit.coordinate_at(0.), orbit.coordinate_at(DPI), tol);
        assert_coord_close(orbit.coordinate_at(-1.), orbit.coordinate_at(DPI - 1.), tol);
        assert_coord_close(orbit.coordinate_at(0.5), orbit.coordinate_at(0.5 + 3. * DPI), tol);
    }
}

#[test]
fn test_reference_scene_at_periapsis() {
    let orbit = reference_orbit();
    let position = orbit.position_at_time(0., STAR_MASS).unwrap();

    let angle = 35f64.to_radians();
    let expected = Coordinate::new(500. + 30. * angle.cos(), 500. + 30. * angle.sin());
    assert_coord_close(position.coordinate, expected, 1e-3);
    assert_coord_close(position.coordinate, Coordinate::new(524.5746, 517.2073), 1e-3);
    assert_abs_diff_eq!(position.eccentric_anomaly, 0., epsilon = 1e-6);
}

#[test]
fn test_position_at_time_zero_is_periapsis() {
    for e in ECCENTRICITIES {
        let orbit = reference_orbit().with_eccentricity(e).unwrap();
        let position = orbit.position_at_time(0., STAR_MASS).unwrap();

        let distance = position.coordinate.distance_to(&orbit.params().center);
        assert_abs_diff_eq!(distance, orbit.shape().sep_min(), epsilon = 1e-3);
    }
}

#[test]
fn test_position_is_time_periodic() {
    let orbit = reference_orbit();
    let period = orbit.period(STAR_MASS).unwrap();

    for t in [0., 1234.5, 9000., 17000.] {
        let p0 = orbit.position_at_time(t, STAR_MASS).unwrap().coordinate;
        let p1 = orbit.position_at_time(t + period, STAR_MASS).unwrap().coordinate;
        let p2 = orbit.position_at_time(t - 3. * period, STAR_MASS).unwrap().coordinate;
        assert_coord_close(p0, p1, 1e-3);
        assert_coord_close(p0, p2, 1e-3);
    }
}

#[test]
fn test_position_at_wall_clock_time() {
    // the reference renderer feeds milliseconds since the Unix epoch
    let orbit = reference_orbit();
    let position = orbit.position_at_time(1_700_000_000_000., STAR_MASS).unwrap();
    let center = orbit.params().center;

    let distance = position.coordinate.distance_to(&center);
    assert!(distance >= orbit.shape().sep_min() - 1e-6);
    assert!(distance <= orbit.shape().sep_max() + 1e-6);
}

#[test]
fn test_kepler_residual_within_tolerance() {
    let convergence = KeplerConvergence::default();
    for e in ECCENTRICITIES {
        for k in 0..720 {
            let m = k as f64 * DPI / 720.;
            let sol = solve_kepler(m, e, &convergence).unwrap();
            assert!(
                kepler_residual(sol.eccentric_anomaly, e, m).abs() <= KEPLER_TOLERANCE,
                "residual too large for M = {m}, e = {e}"
            );
            assert!(sol.iterations <= convergence.max_iter);
        }
    }
}

#[test]
fn test_speed_periapsis_exceeds_apoapsis() {
    for e in ECCENTRICITIES.into_iter().filter(|&e| e > 0.) {
        let orbit = reference_orbit().with_eccentricity(e).unwrap();

        let v_peri = orbit.speed_at_coordinate(orbit.coordinate_at(0.), STAR_MASS).unwrap();
        let v_apo = orbit.speed_at_coordinate(orbit.coordinate_at(PI), STAR_MASS).unwrap();
        assert!(v_peri > v_apo, "e = {e}: {v_peri} <= {v_apo}");
    }

    let orbit = reference_orbit();
    let v_peri = orbit.speed_at_coordinate(orbit.coordinate_at(0.), STAR_MASS).unwrap();
    let v_apo = orbit.speed_at_coordinate(orbit.coordinate_at(PI), STAR_MASS).unwrap();
    assert_relative_eq!(v_peri, 0.45972092984041235, max_relative = 1e-9);
    assert_relative_eq!(v_apo, 0.02419583841265327, max_relative = 1e-9);
}

#[test]
fn test_circular_orbit() {
    let orbit = reference_orbit().with_eccentricity(0.).unwrap();
    let shape = orbit.shape();

    assert_eq!(shape.semi_major(), 300.);
    assert_eq!(shape.semi_minor(), 300.);
    assert_eq!(shape.focus_distance(), 0.);

    for point in orbit.outline(360) {
        assert_relative_eq!(point.distance_to(&orbit.params().center), 300., max_relative = 1e-12);
    }

    // constant speed on a circle
    let v0 = orbit.state_at_time(0., STAR_MASS).unwrap().speed;
    let v1 = orbit.state_at_time(5000., STAR_MASS).unwrap().speed;
    assert_relative_eq!(v0, v1, max_relative = 1e-9);
}

#[test]
fn test_near_parabolic_terminates() {
    let orbit = reference_orbit().with_eccentricity(0.999).unwrap();
    let period = orbit.period(STAR_MASS).unwrap();

    for t in [0., 1e-9 * period, 1e-3 * period, 0.5 * period, 0.999999 * period] {
        match orbit.position_at_time(t, STAR_MASS) {
            Ok(position) => {
                let m = orbit.mean_anomaly_at(t, STAR_MASS).unwrap();
                assert!(kepler_residual(position.eccentric_anomaly, 0.999, m).abs() <= 1e-4);
            }
            Err(err) => assert!(matches!(err, OrbitError::NonConvergence { .. })),
        }
    }

    let capped = KeplerConvergence {
        eps: 1e-15,
        max_iter: 3,
    };
    let res = solve_kepler(1e-6, 0.999, &capped);
    assert!(matches!(res, Err(OrbitError::NonConvergence { iterations: 3, .. })));
}

#[test]
fn test_unsupported_orbits_rejected() {
    let params = *reference_orbit().params();

    for e in [1.0, 1.5, -0.01, f64::NAN] {
        let res = OrbitGeometry::new(OrbitParameters {
            eccentricity: e,
            ..params
        });
        assert!(matches!(
            res,
            Err(OrbitError::InvalidParameter {
                name: "eccentricity",
                ..
            })
        ));
    }

    for r in [0., -300.] {
        let res = OrbitGeometry::new(OrbitParameters {
            average_radius: r,
            ..params
        });
        assert!(res.is_err());
    }

    let orbit = reference_orbit();
    assert!(matches!(
        orbit.position_at_time(0., 0.),
        Err(OrbitError::InvalidParameter {
            name: "central_mass",
            ..
        })
    ));
}

#[test]
fn test_gravitational_constant_injection() {
    // G = 1, m = 1, a = 1: period 2π in natural units
    let orbit = OrbitGeometry::with_constants(
        OrbitParameters::new(Coordinate::new(0., 0.), 1., 0.5, 0.),
        1.0,
        KeplerConvergence::default(),
    )
    .unwrap();

    assert_relative_eq!(orbit.period(1.).unwrap(), DPI, max_relative = 1e-12);

    // half a period later the body is at apoapsis
    let position = orbit.position_at_time(PI, 1.).unwrap();
    assert_coord_close(position.coordinate, Coordinate::new(-1.5, 0.), 1e-6);
    assert_relative_eq!(
        orbit.speed_at_coordinate(position.coordinate, 1.).unwrap(),
        (2. / 1.5 - 1.0_f64).sqrt(),
        max_relative = 1e-6
    );
}
