//! Oblate-Earth geodesy: geodetic coordinates ↔ geocentric vectors in the true equator of date.

use nalgebra::Vector3;

use crate::constants::{
    Degree, Hour, Meter, ANGVEL, DEGRAD, EARTH_EQUATORIAL_RADIUS_KM, EARTH_FLATTENING_SQUARED,
    EARTH_POLAR_RADIUS_KM, KM_PER_AU, RADEG, SECONDS_PER_DAY,
};
use crate::conversion::wrap_signed_degrees;
use crate::orrery_errors::OrreryError;

use super::Observer;

const INVERSE_TERRA_MAX_ITERATIONS: usize = 10;

/// Newton residual below which the geodetic latitude is accepted, km.
const INVERSE_TERRA_TOLERANCE_KM: f64 = 1.0e-8;

/// Geocentric position (AU) and rotational velocity (AU/day) of an observer in EQD.
///
/// Arguments
/// ---------
/// * `observer`: geodetic latitude/longitude and height above the ellipsoid.
/// * `st`: Greenwich apparent sidereal time, hours.
pub(crate) fn terra(observer: &Observer, st: Hour) -> (Vector3<f64>, Vector3<f64>) {
    let (sinphi, cosphi) = (observer.latitude() * RADEG).sin_cos();
    let c = 1.0 / (cosphi * cosphi + EARTH_FLATTENING_SQUARED * sinphi * sinphi).sqrt();
    let s = EARTH_FLATTENING_SQUARED * c;
    let ht_km = observer.height() / 1000.0;
    let ach = EARTH_EQUATORIAL_RADIUS_KM * c + ht_km;
    let ash = EARTH_EQUATORIAL_RADIUS_KM * s + ht_km;

    let (sinst, cosst) = ((15.0 * st + observer.longitude()) * RADEG).sin_cos();

    let pos = Vector3::new(
        ach * cosphi * cosst,
        ach * cosphi * sinst,
        ash * sinphi,
    ) / KM_PER_AU;
    let vel = Vector3::new(-ach * cosphi * sinst, ach * cosphi * cosst, 0.0)
        * (ANGVEL * SECONDS_PER_DAY / KM_PER_AU);
    (pos, vel)
}

/// Geodetic coordinates of a geocentric EQD vector.
///
/// The geodetic latitude solves `W(φ) = 0` by Newton iteration, where `W` is the offset of
/// the point from the ellipsoid normal through latitude `φ`.
///
/// Arguments
/// ---------
/// * `ovec`: geocentric position in AU, true equator of date.
/// * `st`: Greenwich apparent sidereal time, hours.
///
/// Returns
/// --------
/// * The [`Observer`] at that point, or [`OrreryError::NoConvergence`].
pub(crate) fn inverse_terra(ovec: &Vector3<f64>, st: Hour) -> Result<Observer, OrreryError> {
    let x = ovec.x * KM_PER_AU;
    let y = ovec.y * KM_PER_AU;
    let z = ovec.z * KM_PER_AU;
    let p = x.hypot(y);

    if p < 1.0e-6 {
        // on the polar axis: longitude is arbitrary
        let lat = if z > 0.0 { 90.0 } else { -90.0 };
        let height_km = z.abs() - EARTH_POLAR_RADIUS_KM;
        return Observer::new(lat, 0.0, 1000.0 * height_km);
    }

    let lon = wrap_signed_degrees(DEGRAD * y.atan2(x) - 15.0 * st);
    let f2 = EARTH_FLATTENING_SQUARED;
    let factor = (f2 - 1.0) * EARTH_EQUATORIAL_RADIUS_KM;

    let mut lat = (z / p).atan();
    for _ in 0..INVERSE_TERRA_MAX_ITERATIONS {
        let (sin, cos) = lat.sin_cos();
        let cos2 = cos * cos;
        let sin2 = sin * sin;
        let radicand = cos2 + f2 * sin2;
        let denom = radicand.sqrt();
        let w = factor * sin * cos / denom - z * cos + p * sin;
        if w.abs() < INVERSE_TERRA_TOLERANCE_KM {
            let adjust = EARTH_EQUATORIAL_RADIUS_KM / denom;
            let height_km = if sin.abs() > cos.abs() {
                z / sin - f2 * adjust
            } else {
                p / cos - adjust
            };
            return Observer::new(DEGRAD * lat, lon, 1000.0 * height_km);
        }
        let d = factor * ((cos2 - sin2) / denom - sin2 * cos2 * (f2 - 1.0) / (denom * radicand))
            + z * sin
            + p * cos;
        lat -= w / d;
    }
    Err(OrreryError::NoConvergence(
        "geodetic latitude from geocentric vector".to_string(),
    ))
}

/// Gravitational acceleration (m/s²) at a given latitude and height, from the WGS-84 normal
/// gravity formula with a second-order free-air height correction.
pub fn observer_gravity(latitude: Degree, height: Meter) -> f64 {
    let s = (latitude * RADEG).sin();
    let s2 = s * s;
    let g0 = 9.780_325_335_9 * (1.0 + 0.001_931_852_652_41 * s2)
        / (1.0 - 0.006_694_379_990_13 * s2).sqrt();
    g0 * (1.0 - (3.157_04e-07 - 2.102_69e-09 * s2) * height + 7.374_52e-14 * height * height)
}

#[cfg(test)]
mod terra_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_equator_radius() {
        let observer = Observer::new(0.0, 0.0, 0.0).unwrap();
        let (pos, vel) = terra(&observer, 0.0);
        assert_abs_diff_eq!(pos.x * KM_PER_AU, EARTH_EQUATORIAL_RADIUS_KM, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.y, 0.0, epsilon = 1e-15);
        // 465 m/s eastward at the equator
        let speed = vel.y * KM_PER_AU / SECONDS_PER_DAY * 1000.0;
        assert_abs_diff_eq!(speed, 465.1, epsilon = 0.1);
    }

    #[test]
    fn test_pole_radius() {
        let observer = Observer::new(90.0, 0.0, 0.0).unwrap();
        let (pos, _) = terra(&observer, 3.0);
        assert_abs_diff_eq!(pos.z * KM_PER_AU, EARTH_POLAR_RADIUS_KM, epsilon = 1e-9);
    }

    #[test]
    fn test_inverse_terra_round_trip() {
        for lat in [-89.5, -45.0, -10.0, 0.0, 33.3, 60.0, 89.9] {
            for lon in [-179.0, -60.0, 0.0, 95.0, 180.0] {
                for height in [-100.0, 0.0, 4000.0] {
                    let observer = Observer::new(lat, lon, height).unwrap();
                    let st = 7.25;
                    let (pos, _) = terra(&observer, st);
                    let back = inverse_terra(&pos, st).unwrap();
                    assert_abs_diff_eq!(back.latitude(), lat, epsilon = 1e-9);
                    assert_abs_diff_eq!(back.height(), height, epsilon = 1e-3);
                    let dlon = (back.longitude() - lon).rem_euclid(360.0);
                    assert!(dlon.min(360.0 - dlon) < 1e-9, "lon {lon} -> {}", back.longitude());
                }
            }
        }
    }

    #[test]
    fn test_inverse_terra_on_axis() {
        let pos = Vector3::new(0.0, 0.0, -(EARTH_POLAR_RADIUS_KM + 2.0) / KM_PER_AU);
        let observer = inverse_terra(&pos, 0.0).unwrap();
        assert_eq!(observer.latitude(), -90.0);
        assert_abs_diff_eq!(observer.height(), 2000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_gravity() {
        assert_abs_diff_eq!(observer_gravity(0.0, 0.0), 9.780_325_335_9, epsilon = 1e-12);
        assert_abs_diff_eq!(observer_gravity(90.0, 0.0), 9.832_184_9, epsilon = 1e-6);
        assert!(observer_gravity(45.0, 8848.0) < observer_gravity(45.0, 0.0));
    }
}
