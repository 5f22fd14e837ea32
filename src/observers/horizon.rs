//! # Horizontal coordinates and atmospheric refraction
//!
//! [`horizon`] turns equatorial coordinates of date (EQD) into azimuth and altitude for an
//! observer on the Earth. The azimuth is measured clockwise from north (east = 90°).
//!
//! Refraction follows the Saemundsson formula used by almanacs,
//!
//! ```text
//! R = 1.02′ / tan(h + 10.3 / (h + 5.11))
//! ```
//!
//! with two ways of handling objects below the horizon, selected by [`Refraction`].

use nalgebra::Vector3;

use crate::constants::{Degree, Hour, DEGRAD, RADEG};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::time::AstroTime;

use super::Observer;

/// Convergence threshold of [`inverse_refraction_angle`], degrees.
const INVERSE_REFRACTION_TOLERANCE: f64 = 1.0e-14;

const INVERSE_REFRACTION_MAX_ITERATIONS: usize = 50;

/// Atmospheric refraction policy applied to altitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Refraction {
    /// Airless altitude.
    #[default]
    None,
    /// Almanac refraction; below −1° it fades linearly to zero at the nadir.
    Normal,
    /// Same formula, held at its −1° value for every lower altitude (JPL Horizons behavior).
    JplHor,
}

/// Apparent position of a body in the observer's sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Topocentric {
    /// Degrees clockwise from north, `[0, 360)`
    pub azimuth: Degree,
    /// Degrees above the horizon
    pub altitude: Degree,
    /// Right ascension of date, adjusted for refraction when requested
    pub ra: Hour,
    /// Declination of date, adjusted for refraction when requested
    pub dec: Degree,
}

/// Refraction correction (degrees) to add to an airless altitude.
///
/// Arguments
/// ---------
/// * `refraction`: policy.
/// * `altitude`: airless altitude in degrees; outside `[-90, 90]` the result is 0.
pub fn refraction_angle(refraction: Refraction, altitude: Degree) -> Degree {
    if !(-90.0..=90.0).contains(&altitude) {
        return 0.0;
    }
    match refraction {
        Refraction::None => 0.0,
        Refraction::Normal | Refraction::JplHor => {
            let hd = altitude.max(-1.0);
            let mut refr = (1.02 / ((hd + 10.3 / (hd + 5.11)) * RADEG).tan()) / 60.0;
            if refraction == Refraction::Normal && altitude < -1.0 {
                refr *= (altitude + 90.0) / 89.0;
            }
            refr
        }
    }
}

/// Correction (degrees, usually negative) to add to an apparent altitude to recover the
/// airless altitude.
///
/// Solved by fixed-point iteration on [`refraction_angle`].
///
/// Returns
/// --------
/// * [`OrreryError::NoConvergence`] if the iteration does not settle.
pub fn inverse_refraction_angle(
    refraction: Refraction,
    bent_altitude: Degree,
) -> Result<Degree, OrreryError> {
    if !(-90.0..=90.0).contains(&bent_altitude) {
        return Ok(0.0);
    }
    let mut altitude = bent_altitude - refraction_angle(refraction, bent_altitude);
    for _ in 0..INVERSE_REFRACTION_MAX_ITERATIONS {
        let diff = (altitude + refraction_angle(refraction, altitude)) - bent_altitude;
        if diff.abs() < INVERSE_REFRACTION_TOLERANCE {
            return Ok(altitude - bent_altitude);
        }
        altitude -= diff;
    }
    Err(OrreryError::NoConvergence(format!(
        "inverse refraction at apparent altitude {bent_altitude}"
    )))
}

/// Rotate a vector about the z axis by `angle` degrees (clockwise seen from +z).
pub(crate) fn spin(angle: Degree, v: &Vector3<f64>) -> Vector3<f64> {
    let (s, c) = (angle * RADEG).sin_cos();
    Vector3::new(c * v.x + s * v.y, c * v.y - s * v.x, v.z)
}

/// Zenith, north and west unit vectors of an observer, expressed in EQD at `time`.
pub(crate) fn local_axes(
    orrery: &Orrery,
    time: &AstroTime,
    observer: &Observer,
) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    let (sinlat, coslat) = (observer.latitude() * RADEG).sin_cos();
    let (sinlon, coslon) = (observer.longitude() * RADEG).sin_cos();

    let uze = Vector3::new(coslat * coslon, coslat * sinlon, sinlat);
    let une = Vector3::new(-sinlat * coslon, -sinlat * sinlon, coslat);
    let uwe = Vector3::new(sinlon, -coslon, 0.0);

    let spin_angle = -15.0 * orrery.sidereal_time(time);
    (
        spin(spin_angle, &uze),
        spin(spin_angle, &une),
        spin(spin_angle, &uwe),
    )
}

/// Azimuth and altitude of a point given by equatorial coordinates of date.
///
/// Arguments
/// ---------
/// * `orrery`: context (sidereal time).
/// * `time`: the instant.
/// * `observer`: location on the Earth.
/// * `ra`: right ascension of date, hours.
/// * `dec`: declination of date, degrees.
/// * `refraction`: refraction policy for the altitude.
///
/// Returns
/// --------
/// * [`Topocentric`] coordinates. When refraction lifts the body, `ra`/`dec` are moved along
///   the vertical circle by the same amount. At the zenith the azimuth is reported as 0.
///
/// See also
/// ------------
/// * [`refraction_angle`] – the correction applied to the altitude.
pub fn horizon(
    orrery: &Orrery,
    time: &AstroTime,
    observer: &Observer,
    ra: Hour,
    dec: Degree,
    refraction: Refraction,
) -> Topocentric {
    let (uz, un, uw) = local_axes(orrery, time, observer);

    let (sindc, cosdc) = (dec * RADEG).sin_cos();
    let (sinra, cosra) = (ra * 15.0 * RADEG).sin_cos();
    let p = Vector3::new(cosdc * cosra, cosdc * sinra, sindc);

    let pz = p.dot(&uz);
    let pn = p.dot(&un);
    let pw = p.dot(&uw);

    let proj = pn.hypot(pw);
    let azimuth = if proj > 0.0 {
        let az = -DEGRAD * pw.atan2(pn);
        if az < 0.0 {
            az + 360.0
        } else if az >= 360.0 {
            az - 360.0
        } else {
            az
        }
    } else {
        0.0
    };

    let mut zd = DEGRAD * proj.atan2(pz);
    let mut hor_ra = ra;
    let mut hor_dec = dec;

    if refraction != Refraction::None {
        let zd0 = zd;
        let refr = refraction_angle(refraction, 90.0 - zd);
        zd -= refr;

        if refr > 0.0 && zd > 3.0e-4 {
            let (sinzd, coszd) = (zd * RADEG).sin_cos();
            let (sinzd0, coszd0) = (zd0 * RADEG).sin_cos();
            let pr = (p - uz * coszd0) / sinzd0 * sinzd + uz * coszd;
            let proj = pr.x.hypot(pr.y);
            hor_ra = if proj > 0.0 {
                let ra = DEGRAD * pr.y.atan2(pr.x) / 15.0;
                if ra < 0.0 {
                    ra + 24.0
                } else if ra >= 24.0 {
                    ra - 24.0
                } else {
                    ra
                }
            } else {
                0.0
            };
            hor_dec = DEGRAD * pr.z.atan2(proj);
        }
    }

    Topocentric {
        azimuth,
        altitude: 90.0 - zd,
        ra: hor_ra,
        dec: hor_dec,
    }
}

#[cfg(test)]
mod horizon_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_refraction_at_horizon() {
        // about 29 arcminutes for an airless altitude of zero
        let refr = refraction_angle(Refraction::Normal, 0.0);
        assert!((0.45..0.5).contains(&refr), "refr = {refr}");
        assert_eq!(refraction_angle(Refraction::None, 0.0), 0.0);
        assert_eq!(refraction_angle(Refraction::Normal, 91.0), 0.0);
    }

    #[test]
    fn test_refraction_below_horizon() {
        let at_minus_one = refraction_angle(Refraction::JplHor, -1.0);
        assert_eq!(refraction_angle(Refraction::JplHor, -30.0), at_minus_one);
        assert!(refraction_angle(Refraction::Normal, -30.0) < at_minus_one);
        assert_abs_diff_eq!(refraction_angle(Refraction::Normal, -90.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_inverse_refraction_round_trip() {
        let mut alt = -90.0;
        while alt <= 90.0 {
            for policy in [Refraction::Normal, Refraction::JplHor] {
                let bent = alt + refraction_angle(policy, alt);
                if !(-90.0..=90.0).contains(&bent) {
                    continue;
                }
                let back = bent + inverse_refraction_angle(policy, bent).unwrap();
                assert_abs_diff_eq!(back, alt, epsilon = 1e-10);
            }
            alt += 0.125;
        }
    }

    #[test]
    fn test_spin_quarter_turn() {
        let v = spin(90.0, &Vector3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(v, Vector3::new(0.0, -1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_pole_star_altitude_matches_latitude() {
        let orrery = Orrery::new();
        let observer = Observer::new(35.0, -80.0, 0.0).unwrap();
        let time = AstroTime::from_ut(8000.3);
        let hor = horizon(&orrery, &time, &observer, 0.0, 90.0, Refraction::None);
        assert_abs_diff_eq!(hor.altitude, 35.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hor.azimuth.min(360.0 - hor.azimuth), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_refraction_raises_altitude() {
        let orrery = Orrery::new();
        let observer = Observer::new(-20.0, 150.0, 100.0).unwrap();
        let time = AstroTime::from_ut(7500.0);
        for (ra, dec) in [(1.0, 10.0), (13.5, -40.0), (20.0, 60.0)] {
            let plain = horizon(&orrery, &time, &observer, ra, dec, Refraction::None);
            let refr = horizon(&orrery, &time, &observer, ra, dec, Refraction::Normal);
            assert_abs_diff_eq!(
                refr.altitude - plain.altitude,
                refraction_angle(Refraction::Normal, plain.altitude),
                epsilon = 1e-12
            );
            assert_eq!(refr.azimuth, plain.azimuth);
        }
    }
}
