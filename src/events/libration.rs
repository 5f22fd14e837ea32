//! # Lunar libration
//!
//! The Moon turns the same face toward the Earth only on average. Seen from the center of
//! the Earth, the sub-Earth point wanders over the lunar surface by several degrees in both
//! selenographic latitude and longitude:
//!
//! * the *optical* libration comes from the inclination of the lunar equator to the ecliptic
//!   and from the eccentricity of the orbit,
//! * the *physical* libration is the real wobble of the Moon about its mean rotation, a few
//!   hundredths of a degree.
//!
//! Both follow Meeus, *Astronomical Algorithms*, chapter 53.

use crate::constants::{Degree, Kilometer, DAYS_PER_CENTURY, DEGRAD, MOON_MEAN_RADIUS_KM, RADEG};
use crate::conversion::longitude_offset;
use crate::moon::lunar_position;
use crate::time::AstroTime;

/// Inclination of the mean lunar equator to the ecliptic.
const LUNAR_EQUATOR_INCLINATION: Degree = 1.543;

/// Apparent orientation and size of the Moon as seen from the center of the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LibrationInfo {
    /// Selenographic latitude of the sub-Earth point, degrees
    pub elat: Degree,
    /// Selenographic longitude of the sub-Earth point, degrees
    pub elon: Degree,
    /// Geocentric ecliptic latitude of the Moon, degrees
    pub mlat: Degree,
    /// Geocentric ecliptic longitude of the Moon, degrees
    pub mlon: Degree,
    /// Distance between the centers of the Earth and the Moon
    pub dist_km: Kilometer,
    /// Apparent angular diameter of the Moon, degrees
    pub diam_deg: Degree,
}

/// Mean lunar arguments in degrees, `c` in Julian centuries of TT.
struct MeanArguments {
    d: Degree,
    m: Degree,
    mprime: Degree,
    f: Degree,
    e: f64,
}

impl MeanArguments {
    fn new(c: f64) -> Self {
        let c2 = c * c;
        let c3 = c2 * c;
        let c4 = c2 * c2;
        MeanArguments {
            d: 297.850_192_1 + 445_267.111_403_4 * c - 0.001_881_9 * c2 + c3 / 545_868.0
                - c4 / 113_065_000.0,
            m: 357.529_109_2 + 35_999.050_290_9 * c - 0.000_153_6 * c2 + c3 / 24_490_000.0,
            mprime: 134.963_396_4 + 477_198.867_505_5 * c + 0.008_741_4 * c2 + c3 / 69_699.0
                - c4 / 14_712_000.0,
            f: 93.272_095_0 + 483_202.017_523_3 * c - 0.003_653_9 * c2 - c3 / 3_526_000.0
                + c4 / 863_310_000.0,
            e: 1.0 - 0.002_516 * c - 0.000_007_4 * c2,
        }
    }
}

/// Longitude of the Moon's mean ascending node, degrees.
fn mean_node_longitude(c: f64) -> Degree {
    let c2 = c * c;
    125.044_547_9 - 1_934.136_289_1 * c + 0.002_075_4 * c2 + c2 * c / 467_441.0
        - c2 * c2 / 60_616_000.0
}

/// Libration of the Moon at a given time.
///
/// Arguments
/// ---------
/// * `time`: the instant.
///
/// Returns
/// --------
/// * [`LibrationInfo`] with the sub-Earth point, the Moon's ecliptic position of date and its
///   apparent diameter.
pub fn libration(time: &AstroTime) -> LibrationInfo {
    let c = time.tt() / DAYS_PER_CENTURY;
    let moon = lunar_position(time.tt());
    let args = MeanArguments::new(c);

    let lon = moon.lon * RADEG;
    let lat = moon.lat * RADEG;
    let inc = LUNAR_EQUATOR_INCLINATION * RADEG;
    let f = args.f * RADEG;
    let omega = mean_node_longitude(c) * RADEG;
    let m = args.m * RADEG;
    let mdash = args.mprime * RADEG;
    let d = args.d * RADEG;
    let e = args.e;

    // optical libration
    let w = lon - omega;
    let a = (w.sin() * lat.cos() * inc.cos() - lat.sin() * inc.sin()).atan2(w.cos() * lat.cos());
    let ldash = longitude_offset(DEGRAD * (a - f));
    let bdash = (-w.sin() * lat.cos() * inc.sin() - lat.sin() * inc.cos()).asin();

    // physical libration
    let k1 = (119.75 + 131.849 * c) * RADEG;
    let k2 = (72.56 + 20.186 * c) * RADEG;

    let rho = -0.02752 * mdash.cos() - 0.02245 * f.sin() + 0.00684 * (mdash - 2.0 * f).cos()
        - 0.00293 * (2.0 * f).cos()
        - 0.00085 * (2.0 * f - 2.0 * d).cos()
        - 0.00054 * (mdash - 2.0 * d).cos()
        - 0.00020 * (mdash + f).sin()
        - 0.00020 * (mdash + 2.0 * f).cos()
        - 0.00020 * (mdash - f).cos()
        + 0.00014 * (mdash + 2.0 * f - 2.0 * d).cos();

    let sigma = -0.02816 * mdash.sin() + 0.02244 * f.cos() - 0.00682 * (mdash - 2.0 * f).sin()
        - 0.00279 * (2.0 * f).sin()
        - 0.00083 * (2.0 * f - 2.0 * d).sin()
        + 0.00069 * (mdash - 2.0 * d).sin()
        + 0.00040 * (mdash + f).cos()
        - 0.00025 * (2.0 * mdash).sin()
        - 0.00023 * (mdash + 2.0 * f).sin()
        + 0.00020 * (mdash - f).cos()
        + 0.00019 * (mdash - f).sin()
        + 0.00013 * (mdash + 2.0 * f - 2.0 * d).sin()
        - 0.00010 * (mdash - 3.0 * f).cos();

    let tau = 0.02520 * e * m.sin() + 0.00473 * (2.0 * mdash - 2.0 * f).sin()
        - 0.00467 * mdash.sin()
        + 0.00396 * k1.sin()
        + 0.00276 * (2.0 * mdash - 2.0 * d).sin()
        + 0.00196 * omega.sin()
        - 0.00183 * (mdash - f).cos()
        + 0.00115 * (mdash - 2.0 * d).sin()
        - 0.00096 * (mdash - d).sin()
        + 0.00046 * (2.0 * f - 2.0 * d).sin()
        - 0.00039 * (mdash - f).sin()
        - 0.00032 * (mdash - m - d).sin()
        + 0.00027 * (2.0 * mdash - m - 2.0 * d).sin()
        + 0.00023 * k2.sin()
        - 0.00014 * (2.0 * d).sin()
        + 0.00014 * (2.0 * mdash - 2.0 * f).cos()
        - 0.00012 * (mdash - 2.0 * f).sin()
        - 0.00012 * (2.0 * mdash).sin()
        + 0.00011 * (2.0 * mdash - 2.0 * m - 2.0 * d).sin();

    let ldash2 = -tau + (rho * a.cos() + sigma * a.sin()) * bdash.tan();
    let bdash2 = sigma * a.sin() - rho * a.cos();

    let dist_km = moon.dist_km;
    let radius = MOON_MEAN_RADIUS_KM;
    LibrationInfo {
        elat: DEGRAD * bdash + bdash2,
        elon: ldash + ldash2,
        mlat: moon.lat,
        mlon: moon.lon,
        dist_km,
        diam_deg: 2.0 * DEGRAD * (radius / (dist_km * dist_km - radius * radius).sqrt()).atan(),
    }
}

#[cfg(test)]
mod libration_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_meeus_example_53a() {
        // 1992-04-12 0h TD
        let lib = libration(&AstroTime::from_tt(2_448_724.5 - 2_451_545.0));
        assert_abs_diff_eq!(lib.elon, -1.23, epsilon = 0.01);
        assert_abs_diff_eq!(lib.elat, 4.20, epsilon = 0.01);
        assert_abs_diff_eq!(lib.mlon, 133.162_006, epsilon = 1e-6);
        assert_abs_diff_eq!(lib.dist_km, 368_394.89, epsilon = 0.1);
        assert_abs_diff_eq!(lib.diam_deg, 0.5404, epsilon = 1e-4);
    }

    #[test]
    fn test_libration_bounds() {
        let mut tt = -36_525.0;
        while tt < 36_525.0 {
            let lib = libration(&AstroTime::from_tt(tt));
            assert!(lib.elon.abs() < 8.5, "elon {} at {tt}", lib.elon);
            assert!(lib.elat.abs() < 7.5, "elat {} at {tt}", lib.elat);
            assert!(lib.diam_deg > 0.48 && lib.diam_deg < 0.57, "diam {}", lib.diam_deg);
            tt += 13.7;
        }
    }
}
