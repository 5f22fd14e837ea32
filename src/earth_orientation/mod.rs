//! # Earth orientation: nutation, precession, obliquity and sidereal time
//!
//! This module gathers the pieces needed to relate the fixed J2000 mean equator (EQJ)
//! to the true equator of date (EQD) and to the rotating Earth:
//!
//! - [`iau2000b`] – truncated IAU 2000B nutation series (77 luni-solar terms),
//! - [`mean_obliquity`] – IAU 2006 mean obliquity polynomial,
//! - [`earth_tilt`] – nutation angles, mean/true obliquity and equation of the equinoxes,
//! - [`precession_matrix`] / [`nutation_matrix`] – rotation matrices between EQJ, the mean
//!   equator of date and the true equator of date,
//! - [`earth_rotation_angle`] / [`sidereal_time`] – Greenwich apparent sidereal time.
//!
//! All matrices follow the column-vector convention `v_out = M · v_in`; the inverse rotation
//! is the transpose.
//!
//! The tilt evaluation is the most expensive step of a frame conversion, so
//! [`Orrery`](crate::orrery::Orrery) keeps the last [`EarthTilt`] and reuses it for any time
//! within `1e-6` day.

mod iau2000b;

use nalgebra::Matrix3;

use crate::constants::{ArcSec, Degree, Hour, ASEC360, DAYS_PER_CENTURY, DPI, RADEG, RADSEC};
use crate::time::AstroTime;

use self::iau2000b::{CLS, NALS};

/// Nutation and obliquity state of the Earth at one TT instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthTilt {
    /// Terrestrial Time (days since J2000) at which the tilt was evaluated
    pub tt: f64,
    /// Nutation in longitude, arcseconds
    pub dpsi: ArcSec,
    /// Nutation in obliquity, arcseconds
    pub deps: ArcSec,
    /// Equation of the equinoxes, seconds of time
    pub ee: f64,
    /// Mean obliquity of the ecliptic, degrees
    pub mobl: Degree,
    /// True obliquity of the ecliptic, degrees
    pub tobl: Degree,
}

/// Nutation angles (Δψ, Δε) in arcseconds from the IAU 2000B series.
///
/// Arguments
/// ---------
/// * `tt`: Terrestrial Time in days since J2000.
///
/// Returns
/// --------
/// * `(dpsi, deps)`: nutation in longitude and in obliquity, arcseconds. The constant
///   offsets of the 2000B model (−0.135 mas and +0.388 mas) are included.
///
/// See also
/// ------------
/// * [`earth_tilt`] – bundles these angles with the obliquities.
pub fn iau2000b(tt: f64) -> (ArcSec, ArcSec) {
    let t = tt / DAYS_PER_CENTURY;
    let fundamental = |c0: f64, c1: f64| (c0 + t * c1).rem_euclid(ASEC360) * RADSEC;

    // Delaunay arguments l, l', F, D, Ω
    let args = [
        fundamental(485_868.249_036, 1_717_915_923.217_8),
        fundamental(1_287_104.793_05, 129_596_581.048_1),
        fundamental(335_779.526_232, 1_739_527_262.847_8),
        fundamental(1_072_260.703_69, 1_602_961_601.209_0),
        fundamental(450_160.398_036, -6_962_890.543_1),
    ];

    let (dp, de) = NALS.iter().zip(CLS.iter()).rev().fold(
        (0.0, 0.0),
        |(dp, de), (nals, cls)| {
            let arg = nals
                .iter()
                .zip(args.iter())
                .map(|(&n, &a)| n as f64 * a)
                .sum::<f64>()
                % DPI;
            let (sarg, carg) = arg.sin_cos();
            (
                dp + (cls[0] + cls[1] * t) * sarg + cls[2] * carg,
                de + (cls[3] + cls[4] * t) * carg + cls[5] * sarg,
            )
        },
    );

    (-0.000_135 + dp * 1.0e-7, 0.000_388 + de * 1.0e-7)
}

/// Mean obliquity of the ecliptic (IAU 2006), in degrees.
///
/// Arguments
/// ---------
/// * `tt`: Terrestrial Time in days since J2000.
pub fn mean_obliquity(tt: f64) -> Degree {
    let t = tt / DAYS_PER_CENTURY;
    let asec = ((((-0.000_000_043_4 * t - 0.000_000_576) * t + 0.002_003_40) * t
        - 0.000_183_1)
        * t
        - 46.836_769)
        * t
        + 84_381.406;
    asec / 3600.0
}

/// Evaluate nutation and obliquity at a given Terrestrial Time.
///
/// This is the uncached computation; callers going through an
/// [`Orrery`](crate::orrery::Orrery) should use its `tilt` method instead.
pub fn earth_tilt(tt: f64) -> EarthTilt {
    let (dpsi, deps) = iau2000b(tt);
    let mobl = mean_obliquity(tt);
    EarthTilt {
        tt,
        dpsi,
        deps,
        ee: dpsi * (mobl * RADEG).cos() / 15.0,
        mobl,
        tobl: mobl + deps / 3600.0,
    }
}

/// Precession matrix from the J2000 mean equator to the mean equator of date.
///
/// Uses the IAU 2006 angles ψ_A, ω_A and χ_A. The reverse rotation
/// (mean equator of date to J2000) is the transpose.
///
/// Arguments
/// ---------
/// * `tt`: Terrestrial Time of the target equator, days since J2000.
pub fn precession_matrix(tt: f64) -> Matrix3<f64> {
    let eps0 = 84_381.406;
    let t = tt / DAYS_PER_CENTURY;

    let psia = ((((-0.000_000_095_1 * t + 0.000_132_851) * t - 0.001_140_45) * t - 1.079_006_9)
        * t
        + 5_038.481_507)
        * t;
    let omegaa = ((((0.000_000_333_7 * t - 0.000_000_467) * t - 0.007_725_03) * t
        + 0.051_262_3)
        * t
        - 0.025_754)
        * t
        + eps0;
    let chia = ((((-0.000_000_056_0 * t + 0.000_170_663) * t - 0.001_211_97) * t - 2.381_429_2)
        * t
        + 10.556_403)
        * t;

    let (sa, ca) = (eps0 * RADSEC).sin_cos();
    let (sb, cb) = (-psia * RADSEC).sin_cos();
    let (sc, cc) = (-omegaa * RADSEC).sin_cos();
    let (sd, cd) = (chia * RADSEC).sin_cos();

    let xx = cd * cb - sb * sd * cc;
    let yx = cd * sb * ca + sd * cc * cb * ca - sa * sd * sc;
    let zx = cd * sb * sa + sd * cc * cb * sa + ca * sd * sc;
    let xy = -sd * cb - sb * cd * cc;
    let yy = -sd * sb * ca + cd * cc * cb * ca - sa * cd * sc;
    let zy = -sd * sb * sa + cd * cc * cb * sa + ca * cd * sc;
    let xz = sb * sc;
    let yz = -sc * cb * ca - sa * cc;
    let zz = -sc * cb * sa + cc * ca;

    Matrix3::new(xx, yx, zx, xy, yy, zy, xz, yz, zz)
}

/// Nutation matrix from the mean equator of date to the true equator of date.
///
/// The reverse rotation is the transpose.
pub fn nutation_matrix(tilt: &EarthTilt) -> Matrix3<f64> {
    let (sobm, cobm) = (tilt.mobl * RADEG).sin_cos();
    let (sobt, cobt) = (tilt.tobl * RADEG).sin_cos();
    let (spsi, cpsi) = (tilt.dpsi * RADSEC).sin_cos();

    let xx = cpsi;
    let yx = -spsi * cobm;
    let zx = -spsi * sobm;
    let xy = spsi * cobt;
    let yy = cpsi * cobm * cobt + sobm * sobt;
    let zy = cpsi * sobm * cobt - cobm * sobt;
    let xz = spsi * sobt;
    let yz = cpsi * cobm * sobt - sobm * cobt;
    let zz = cpsi * sobm * sobt + cobm * cobt;

    Matrix3::new(xx, yx, zx, xy, yy, zy, xz, yz, zz)
}

/// Rotation from the mean ecliptic of date to the mean equator of date.
pub(crate) fn ecliptic_to_equator_matrix(obliquity: Degree) -> Matrix3<f64> {
    let (s, c) = (obliquity * RADEG).sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
}

/// Earth Rotation Angle in degrees, `[0, 360)`.
///
/// Arguments
/// ---------
/// * `ut`: Universal Time in days since J2000.
pub fn earth_rotation_angle(ut: f64) -> Degree {
    let thet1 = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * ut;
    let thet3 = ut.rem_euclid(1.0);
    360.0 * (thet1 + thet3).rem_euclid(1.0)
}

/// Greenwich apparent sidereal time in sidereal hours, `[0, 24)`.
///
/// Arguments
/// ---------
/// * `time`: the instant; `ut` drives the rotation angle and `tt` the precession terms.
/// * `tilt`: Earth tilt at `time.tt()`, supplying the equation of the equinoxes.
pub fn sidereal_time(time: &AstroTime, tilt: &EarthTilt) -> Hour {
    let t = time.julian_centuries();
    let eqeq = 15.0 * tilt.ee;
    let theta = earth_rotation_angle(time.ut());
    let st = eqeq
        + 0.014_506
        + ((((-0.000_000_036_8 * t - 0.000_029_956) * t - 0.000_000_44) * t + 1.391_581_7) * t
            + 4_612.156_534)
            * t;
    let gst = (st / 3600.0 + theta).rem_euclid(360.0) / 15.0;
    if gst >= 24.0 {
        0.0
    } else {
        gst
    }
}

#[cfg(test)]
mod earth_orientation_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_obliquity_at_j2000() {
        assert_eq!(mean_obliquity(0.0), 84_381.406 / 3600.0);
    }

    #[test]
    fn test_iau2000b_at_j2000() {
        let (dpsi, deps) = iau2000b(0.000_742_870_370_370_370_4);
        assert_abs_diff_eq!(dpsi, -13.931_658_647_131_16, epsilon = 1e-6);
        assert_abs_diff_eq!(deps, -5.769_432_255_216_151, epsilon = 1e-6);
    }

    #[test]
    fn test_tilt_consistency() {
        let tilt = earth_tilt(7000.0);
        assert_abs_diff_eq!(tilt.tobl - tilt.mobl, tilt.deps / 3600.0, epsilon = 1e-15);
        assert!(tilt.ee.abs() < 1.2, "equation of the equinoxes is about a second");
    }

    #[test]
    fn test_matrices_are_orthonormal() {
        let tt = 8109.41;
        for m in [precession_matrix(tt), nutation_matrix(&earth_tilt(tt))] {
            let id = m * m.transpose();
            assert_abs_diff_eq!(id, Matrix3::identity(), epsilon = 1e-14);
            assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_precession_is_identity_at_j2000() {
        assert_abs_diff_eq!(precession_matrix(0.0), Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_precession_moves_the_pole() {
        // a century of general precession turns the equinox by about 1.4 degrees
        let m = precession_matrix(DAYS_PER_CENTURY);
        let angle = (m[(0, 0)]).acos() / RADEG;
        assert!((1.2..1.5).contains(&angle), "angle={angle}");
    }

    #[test]
    fn test_sidereal_time() {
        let time = AstroTime::from_calendar(2022, 3, 15, 21, 50, 0.0).unwrap();
        let tilt = earth_tilt(time.tt());
        let gast = sidereal_time(&time, &tilt);
        assert_abs_diff_eq!(gast, 9.398_368_460_395_213, epsilon = 1e-5);
    }

    #[test]
    fn test_earth_rotation_angle_range() {
        for ut in [-1.0e5, -0.25, 0.0, 0.5, 1234.567] {
            let era = earth_rotation_angle(ut);
            assert!((0.0..360.0).contains(&era), "ut={ut} era={era}");
        }
    }
}
