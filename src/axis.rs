//! # Rotation axes
//!
//! Orientation of the Sun, the Moon, the planets and Pluto from the IAU Working Group on
//! Cartographic Coordinates and Rotational Elements (2015 report). Each body's north pole is
//! given in EQJ, together with the angle of its prime meridian measured eastward along the
//! body's equator from the ascending node of that equator on the J2000 equator.
//!
//! The Earth is the exception: its pole is the true equator of date of
//! [`crate::rotation::rotation_eqj_eqd`], and the spin follows the Earth rotation angle.

use crate::bodies::Body;
use crate::constants::{Degree, Hour, DAYS_PER_CENTURY, RADEG};
use crate::conversion::normalize_longitude;
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::rotation::rotation_eqj_eqd;
use crate::time::AstroTime;
use crate::vector::{equator_from_vector, vector_from_sphere, AstroVector, Spherical};

/// Earth rotation angle at the J2000 epoch measured from the node of the equator, degrees.
const EARTH_SPIN_J2000: Degree = 190.413_757_887_002_53;
const EARTH_SPIN_RATE: f64 = 360.985_612_288_087_6;

/// Orientation of a body's rotation axis at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisInfo {
    /// Right ascension of the north pole, EQJ, sidereal hours
    pub ra: Hour,
    /// Declination of the north pole, EQJ, degrees
    pub dec: Degree,
    /// Prime meridian angle in `[0, 360)` degrees
    pub spin: Degree,
    /// Unit vector toward the north pole, EQJ
    pub north: AstroVector,
}

/// Pole right ascension, pole declination and prime meridian angle, all in degrees.
type Orientation = (Degree, Degree, Degree);

fn sin(x: Degree) -> f64 {
    (x * RADEG).sin()
}

fn cos(x: Degree) -> f64 {
    (x * RADEG).cos()
}

fn mercury(d: f64, t: f64) -> Orientation {
    let m1 = 174.791_085_7 + 4.092_335 * d;
    let m2 = 349.582_171_4 + 8.184_670 * d;
    let m3 = 164.373_257_1 + 12.277_005 * d;
    let m4 = 339.164_342_9 + 16.369_340 * d;
    let m5 = 153.955_428_6 + 20.461_675 * d;
    let w = 329.598_8 + 6.138_510_8 * d + 0.010_672_57 * sin(m1) - 0.001_123_09 * sin(m2)
        - 0.000_110_40 * sin(m3)
        - 0.000_025_39 * sin(m4)
        - 0.000_005_71 * sin(m5);
    (281.010_3 - 0.032_8 * t, 61.415_5 - 0.004_9 * t, w)
}

fn moon(d: f64, t: f64) -> Orientation {
    let e1 = 125.045 - 0.052_992_1 * d;
    let e2 = 250.089 - 0.105_984_2 * d;
    let e3 = 260.008 + 13.012_000_9 * d;
    let e4 = 176.625 + 13.340_715_4 * d;
    let e5 = 357.529 + 0.985_600_3 * d;
    let e6 = 311.589 + 26.405_708_4 * d;
    let e7 = 134.963 + 13.064_993_0 * d;
    let e8 = 276.617 + 0.328_714_6 * d;
    let e9 = 34.226 + 1.748_487_7 * d;
    let e10 = 15.134 - 0.158_976_3 * d;
    let e11 = 119.743 + 0.003_609_6 * d;
    let e12 = 239.961 + 0.164_357_3 * d;
    let e13 = 25.053 + 12.959_008_8 * d;

    let ra = 269.994_9 + 0.003_1 * t - 3.878_7 * sin(e1) - 0.120_4 * sin(e2)
        + 0.070_0 * sin(e3)
        - 0.017_2 * sin(e4)
        + 0.007_2 * sin(e6)
        - 0.005_2 * sin(e10)
        + 0.004_3 * sin(e13);
    let dec = 66.539_2 + 0.013_0 * t + 1.541_9 * cos(e1) + 0.023_9 * cos(e2)
        - 0.027_8 * cos(e3)
        + 0.006_8 * cos(e4)
        - 0.002_9 * cos(e6)
        + 0.000_9 * cos(e7)
        + 0.000_8 * cos(e10)
        - 0.000_9 * cos(e13);
    let w = 38.321_3 + 13.176_358_15 * d - 1.4e-12 * d * d + 3.561_0 * sin(e1)
        + 0.120_8 * sin(e2)
        - 0.064_2 * sin(e3)
        + 0.015_8 * sin(e4)
        + 0.025_2 * sin(e5)
        - 0.006_6 * sin(e6)
        - 0.004_7 * sin(e7)
        - 0.004_6 * sin(e8)
        + 0.002_8 * sin(e9)
        + 0.005_2 * sin(e10)
        + 0.004_0 * sin(e11)
        + 0.001_9 * sin(e12)
        - 0.004_4 * sin(e13);
    (ra, dec, w)
}

fn mars(d: f64, t: f64) -> Orientation {
    let ra = 317.269_202 - 0.109_275_47 * t
        + 0.000_068 * sin(198.991_226 + 19_139.481_998_5 * t)
        + 0.000_238 * sin(226.292_679 + 38_280.851_128_1 * t)
        + 0.000_052 * sin(249.663_391 + 57_420.725_159_3 * t)
        + 0.000_009 * sin(266.183_510 + 76_560.636_795_0 * t)
        + 0.419_057 * sin(79.398_797 + 0.504_261_5 * t);
    let dec = 54.432_516 - 0.058_271_05 * t
        + 0.000_051 * cos(122.433_576 + 19_139.940_747_6 * t)
        + 0.000_141 * cos(43.058_401 + 38_280.875_327_2 * t)
        + 0.000_031 * cos(57.663_379 + 57_420.751_720_5 * t)
        + 0.000_005 * cos(79.476_401 + 76_560.649_500_4 * t)
        + 1.591_274 * cos(166.325_722 + 0.504_261_5 * t);
    let w = 176.049_863 + 350.891_982_443_297 * d
        + 0.000_145 * sin(129.071_773 + 19_140.032_824_4 * t)
        + 0.000_157 * sin(36.352_167 + 38_281.047_359_1 * t)
        + 0.000_040 * sin(56.668_646 + 57_420.929_536_0 * t)
        + 0.000_001 * sin(67.364_003 + 76_560.255_221_5 * t)
        + 0.000_001 * sin(104.792_680 + 95_700.438_757_8 * t)
        + 0.584_542 * sin(95.391_654 + 0.504_261_5 * t);
    (ra, dec, w)
}

fn jupiter(d: f64, t: f64) -> Orientation {
    let ja = 99.360_714 + 4_850.404_6 * t;
    let jb = 175.895_369 + 1_191.960_5 * t;
    let jc = 300.323_162 + 262.547_5 * t;
    let jd = 114.012_305 + 6_070.247_6 * t;
    let je = 49.511_251 + 64.300_0 * t;
    let ra = 268.056_595 - 0.006_499 * t
        + 0.000_117 * sin(ja)
        + 0.000_938 * sin(jb)
        + 0.001_432 * sin(jc)
        + 0.000_030 * sin(jd)
        + 0.002_150 * sin(je);
    let dec = 64.495_303 + 0.002_413 * t
        + 0.000_050 * cos(ja)
        + 0.000_404 * cos(jb)
        + 0.000_617 * cos(jc)
        - 0.000_013 * cos(jd)
        + 0.000_926 * cos(je);
    (ra, dec, 284.95 + 870.536 * d)
}

fn neptune(d: f64, t: f64) -> Orientation {
    let n = 357.85 + 52.316 * t;
    (
        299.36 + 0.70 * sin(n),
        43.46 - 0.51 * cos(n),
        249.978 + 541.139_775_7 * d - 0.48 * sin(n),
    )
}

fn earth_axis(orrery: &Orrery, time: &AstroTime) -> Result<AxisInfo, OrreryError> {
    let pole = AstroVector::new(0.0, 0.0, 1.0, *time);
    let north = rotation_eqj_eqd(orrery, time).inverse().rotate_vector(&pole);
    let equ = equator_from_vector(&north)?;
    Ok(AxisInfo {
        ra: equ.ra,
        dec: equ.dec,
        spin: normalize_longitude(EARTH_SPIN_J2000 + EARTH_SPIN_RATE * time.ut()),
        north,
    })
}

/// Orientation of a body's rotation axis.
///
/// Arguments
/// ---------
/// * `orrery`: context; only the Earth uses its orientation cache.
/// * `body`: the Sun, the Moon, a planet or Pluto.
/// * `time`: the instant; the IAU models are evaluated at its TT value.
///
/// Returns
/// --------
/// * The pole in EQJ as hours/degrees and as a unit vector, and the prime meridian angle.
/// * [`OrreryError::InvalidBody`] for barycenters and user-defined stars.
///
/// See also
/// ------------
/// * [`crate::events::libration::libration`] for the Moon's optical libration.
pub fn rotation_axis(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
) -> Result<AxisInfo, OrreryError> {
    let d = time.tt();
    let t = d / DAYS_PER_CENTURY;
    let (ra, dec, w) = match body {
        Body::Earth => return earth_axis(orrery, time),
        Body::Sun => (286.13, 63.87, 84.176 + 14.184_4 * d),
        Body::Mercury => mercury(d, t),
        Body::Venus => (272.76, 67.16, 160.20 - 1.481_368_8 * d),
        Body::Moon => moon(d, t),
        Body::Mars => mars(d, t),
        Body::Jupiter => jupiter(d, t),
        Body::Saturn => (40.589 - 0.036 * t, 83.537 - 0.004 * t, 38.90 + 810.793_902_4 * d),
        Body::Uranus => (257.311, -15.175, 203.81 - 501.160_092_8 * d),
        Body::Neptune => neptune(d, t),
        Body::Pluto => (132.993, -6.163, 302.695 + 56.362_522_5 * d),
        other => return Err(OrreryError::InvalidBody(other)),
    };
    let north = vector_from_sphere(&Spherical::new(dec, ra, 1.0), *time);
    Ok(AxisInfo {
        ra: normalize_longitude(ra) / 15.0,
        dec,
        spin: normalize_longitude(w),
        north,
    })
}

#[cfg(test)]
mod axis_test {
    use super::*;
    use crate::conversion::longitude_offset;
    use crate::earth_orientation::earth_rotation_angle;
    use crate::jupiter_moons::jupiter_moons;
    use crate::vector::angle_between;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sun_axis() {
        let orrery = Orrery::new();
        let axis = rotation_axis(&orrery, Body::Sun, &AstroTime::from_tt(0.0)).unwrap();
        assert_abs_diff_eq!(axis.ra, 286.13 / 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(axis.dec, 63.87, epsilon = 1e-12);
        assert_abs_diff_eq!(axis.spin, 84.176, epsilon = 1e-9);
        assert_abs_diff_eq!(axis.north.length(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_earth_pole_near_j2000_pole() {
        let orrery = Orrery::new();
        let axis = rotation_axis(&orrery, Body::Earth, &AstroTime::from_tt(0.0)).unwrap();
        // only nutation separates the true pole from the J2000 pole at the epoch
        assert!(axis.dec > 89.99);
        assert_abs_diff_eq!(axis.north.pos.z, 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_earth_pole_against_horizons() {
        // JPL Horizons north pole of the Earth, 1979-06-13 00:00 TDB
        let orrery = Orrery::new();
        let time = AstroTime::from_tt(2_444_037.5 - 2_451_545.0);
        let axis = rotation_axis(&orrery, Body::Earth, &time).unwrap();
        let expected = vector_from_sphere(&Spherical::new(89.884_93, 181.441_64, 1.0), time);
        let arcmin = 60.0 * angle_between(&axis.north, &expected).unwrap();
        assert!(arcmin < 0.1, "{arcmin} arcmin");
    }

    #[test]
    fn test_earth_spin_follows_rotation_angle() {
        let orrery = Orrery::new();
        let offsets: Vec<f64> = [-7_300.25, 0.0, 9_131.6]
            .iter()
            .map(|&ut| {
                let time = AstroTime::from_ut(ut);
                let axis = rotation_axis(&orrery, Body::Earth, &time).unwrap();
                normalize_longitude(axis.spin - earth_rotation_angle(ut))
            })
            .collect();
        for offset in &offsets {
            assert_abs_diff_eq!(*offset, 269.953, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_moon_spin_rate() {
        let orrery = Orrery::new();
        let a = rotation_axis(&orrery, Body::Moon, &AstroTime::from_tt(2_000.0)).unwrap();
        let b = rotation_axis(&orrery, Body::Moon, &AstroTime::from_tt(2_000.5)).unwrap();
        assert_abs_diff_eq!(longitude_offset(b.spin - a.spin), 6.588, epsilon = 0.02);
        assert!((a.dec - 66.54).abs() < 1.7);
    }

    #[test]
    fn test_jupiter_pole_matches_moon_orbits() {
        let orrery = Orrery::new();
        let time = AstroTime::from_tt(-3_650.0);
        let axis = rotation_axis(&orrery, Body::Jupiter, &time).unwrap();
        let io = jupiter_moons(&time).io;
        let normal = AstroVector::from_vec(io.pos.cross(&io.vel).normalize(), time);
        assert!(angle_between(&axis.north, &normal).unwrap() < 0.2);
    }

    #[test]
    fn test_north_vector_matches_angles() {
        let orrery = Orrery::new();
        let time = AstroTime::from_tt(5_432.1);
        for body in [Body::Mercury, Body::Mars, Body::Neptune, Body::Uranus, Body::Pluto] {
            let axis = rotation_axis(&orrery, body, &time).unwrap();
            let equ = equator_from_vector(&axis.north).unwrap();
            assert_abs_diff_eq!(equ.ra, axis.ra, epsilon = 1e-9);
            assert_abs_diff_eq!(equ.dec, axis.dec, epsilon = 1e-9);
            assert!((0.0..360.0).contains(&axis.spin));
        }
    }

    #[test]
    fn test_rejects_barycenters_and_stars() {
        let orrery = Orrery::new();
        let time = AstroTime::from_tt(0.0);
        for body in [Body::Emb, Body::Ssb, Body::Star1] {
            assert_eq!(
                rotation_axis(&orrery, body, &time),
                Err(OrreryError::InvalidBody(body))
            );
        }
    }
}
