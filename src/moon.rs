//! # Lunar theory
//!
//! Geocentric position of the Moon from the lunar series of Montenbruck & Pfleger
//! (*Astronomy on the Personal Computer*), an abridgement of Brown's theory:
//!
//! - long-period corrections to the five mean arguments `L0`, `l`, `l′`, `F`, `D`,
//! - 104 solar perturbation terms, each adding to longitude, the argument of latitude,
//!   the inclination and the horizontal parallax,
//! - 10 terms for the node and 11 planetary terms in longitude.
//!
//! The series gives longitude, latitude and distance on the mean ecliptic of date. From there:
//!
//! - [`geo_moon`] rotates onto the mean equator of date and precesses to EQJ,
//! - [`geo_moon_state`] differentiates [`geo_moon`] numerically,
//! - [`ecliptic_geo_moon`] adds nutation and reports the true ecliptic of date,
//! - [`geo_emb_state`] scales the lunar state by the Earth/Moon mass ratio.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector3;

use crate::constants::{
    Degree, Kilometer, DAYS_PER_CENTURY, DEGRAD, EARTH_EQUATORIAL_RADIUS_KM,
    EARTH_MOON_MASS_RATIO, KM_PER_AU, RADEG,
};
use crate::earth_orientation::{
    ecliptic_to_equator_matrix, mean_obliquity, nutation_matrix, precession_matrix,
};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::time::AstroTime;
use crate::vector::{sphere_from_vector, AstroVector, Spherical, StateVector};

/// Half-width of the central difference used for the lunar velocity, in days.
const VELOCITY_STEP_DAYS: f64 = 1.0e-5;

/// Arcseconds per radian.
const ARC: f64 = 3600.0 * 180.0 / PI;

/// Mean horizontal parallax of the Moon, arcseconds.
const MEAN_PARALLAX: f64 = 3422.7;

/// Highest multiple of `l`, `l′`, `F`, `D` appearing in the series.
const MAX_MULTIPLE: [usize; 4] = [4, 3, 4, 6];

/// Index of the zero multiple in a [`Harmonics`] row.
const ZERO: usize = 6;

// Solar perturbations: coefficients in longitude, argument of latitude, inclination and
// parallax (arcseconds), then the multiples of l, l′, F, D.
const SOLAR_TERMS: [(f64, f64, f64, f64, [i8; 4]); 104] = [
    (13.9020, 14.0600, -0.0010, 0.2607, [0, 0, 0, 4]),
    (0.4030, -4.0100, 0.3940, 0.0023, [0, 0, 0, 3]),
    (2369.9120, 2373.3600, 0.6010, 28.2333, [0, 0, 0, 2]),
    (-125.1540, -112.7900, -0.7250, -0.9781, [0, 0, 0, 1]),
    (1.9790, 6.9800, -0.4450, 0.0433, [1, 0, 0, 4]),
    (191.9530, 192.7200, 0.0290, 3.0861, [1, 0, 0, 2]),
    (-8.4660, -13.5100, 0.4550, -0.1093, [1, 0, 0, 1]),
    (22639.5000, 22609.0700, 0.0790, 186.5398, [1, 0, 0, 0]),
    (18.6090, 3.5900, -0.0940, 0.0118, [1, 0, 0, -1]),
    (-4586.4650, -4578.1300, -0.0770, 34.3117, [1, 0, 0, -2]),
    (3.2150, 5.4400, 0.1920, -0.0386, [1, 0, 0, -3]),
    (-38.4280, -38.6400, 0.0010, 0.6008, [1, 0, 0, -4]),
    (-0.3930, -1.4300, -0.0920, 0.0086, [1, 0, 0, -6]),
    (-0.2890, -1.5900, 0.1230, -0.0053, [0, 1, 0, 4]),
    (-24.4200, -25.1000, 0.0400, -0.3000, [0, 1, 0, 2]),
    (18.0230, 17.9300, 0.0070, 0.1494, [0, 1, 0, 1]),
    (-668.1460, -126.9800, -1.3020, -0.3997, [0, 1, 0, 0]),
    (0.5600, 0.3200, -0.0010, -0.0037, [0, 1, 0, -1]),
    (-165.1450, -165.0600, 0.0540, 1.9178, [0, 1, 0, -2]),
    (-1.8770, -6.4600, -0.4160, 0.0339, [0, 1, 0, -4]),
    (0.2130, 1.0200, -0.0740, 0.0054, [2, 0, 0, 4]),
    (14.3870, 14.7800, -0.0170, 0.2833, [2, 0, 0, 2]),
    (-0.5860, -1.2000, 0.0540, -0.0100, [2, 0, 0, 1]),
    (769.0160, 767.9600, 0.1070, 10.1657, [2, 0, 0, 0]),
    (1.7500, 2.0100, -0.0180, 0.0155, [2, 0, 0, -1]),
    (-211.6560, -152.5300, 5.6790, -0.3039, [2, 0, 0, -2]),
    (1.2250, 0.9100, -0.0300, -0.0088, [2, 0, 0, -3]),
    (-30.7730, -34.0700, -0.3080, 0.3722, [2, 0, 0, -4]),
    (-0.5700, -1.4000, -0.0740, 0.0109, [2, 0, 0, -6]),
    (-2.9210, -11.7500, 0.7870, -0.0484, [1, 1, 0, 2]),
    (1.2670, 1.5200, -0.0220, 0.0164, [1, 1, 0, 1]),
    (-109.6730, -115.1800, 0.4610, -0.9490, [1, 1, 0, 0]),
    (-205.9620, -182.3600, 2.0560, 1.4437, [1, 1, 0, -2]),
    (0.2330, 0.3600, 0.0120, -0.0025, [1, 1, 0, -3]),
    (-4.3910, -9.6600, -0.4710, 0.0673, [1, 1, 0, -4]),
    (0.2830, 1.5300, -0.1110, 0.0060, [1, -1, 0, 4]),
    (14.5770, 31.7000, -1.5400, 0.2302, [1, -1, 0, 2]),
    (147.6870, 138.7600, 0.6790, 1.1528, [1, -1, 0, 0]),
    (-1.0890, 0.5500, 0.0210, 0.0000, [1, -1, 0, -1]),
    (28.4750, 23.5900, -0.4430, -0.2257, [1, -1, 0, -2]),
    (-0.2760, -0.3800, -0.0060, -0.0036, [1, -1, 0, -3]),
    (0.6360, 2.2700, 0.1460, -0.0102, [1, -1, 0, -4]),
    (-0.1890, -1.6800, 0.1310, -0.0028, [0, 2, 0, 2]),
    (-7.4860, -0.6600, -0.0370, -0.0086, [0, 2, 0, 0]),
    (-8.0960, -16.3500, -0.7400, 0.0918, [0, 2, 0, -2]),
    (-5.7410, -0.0400, 0.0000, -0.0009, [0, 0, 2, 2]),
    (0.2550, 0.0000, 0.0000, 0.0000, [0, 0, 2, 1]),
    (-411.6080, -0.2000, 0.0000, -0.0124, [0, 0, 2, 0]),
    (0.5840, 0.8400, 0.0000, 0.0071, [0, 0, 2, -1]),
    (-55.1730, -52.1400, 0.0000, -0.1052, [0, 0, 2, -2]),
    (0.2540, 0.2500, 0.0000, -0.0017, [0, 0, 2, -3]),
    (0.0250, -1.6700, 0.0000, 0.0031, [0, 0, 2, -4]),
    (1.0600, 2.9600, -0.1660, 0.0243, [3, 0, 0, 2]),
    (36.1240, 50.6400, -1.3000, 0.6215, [3, 0, 0, 0]),
    (-13.1930, -16.4000, 0.2580, -0.1187, [3, 0, 0, -2]),
    (-1.1870, -0.7400, 0.0420, 0.0074, [3, 0, 0, -4]),
    (-0.2930, -0.3100, -0.0020, 0.0046, [3, 0, 0, -6]),
    (-0.2900, -1.4500, 0.1160, -0.0051, [2, 1, 0, 2]),
    (-7.6490, -10.5600, 0.2590, -0.1038, [2, 1, 0, 0]),
    (-8.6270, -7.5900, 0.0780, -0.0192, [2, 1, 0, -2]),
    (-2.7400, -2.5400, 0.0220, 0.0324, [2, 1, 0, -4]),
    (1.1810, 3.3200, -0.2120, 0.0213, [2, -1, 0, 2]),
    (9.7030, 11.6700, -0.1510, 0.1268, [2, -1, 0, 0]),
    (-0.3520, -0.3700, 0.0010, -0.0028, [2, -1, 0, -1]),
    (-2.4940, -1.1700, -0.0030, -0.0017, [2, -1, 0, -2]),
    (0.3600, 0.2000, -0.0120, -0.0043, [2, -1, 0, -4]),
    (-1.1670, -1.2500, 0.0080, -0.0106, [1, 2, 0, 0]),
    (-7.4120, -6.1200, 0.1170, 0.0484, [1, 2, 0, -2]),
    (-0.3110, -0.6500, -0.0320, 0.0044, [1, 2, 0, -4]),
    (0.7570, 1.8200, -0.1050, 0.0112, [1, -2, 0, 2]),
    (2.5800, 2.3200, 0.0270, 0.0196, [1, -2, 0, 0]),
    (2.5330, 2.4000, -0.0140, -0.0212, [1, -2, 0, -2]),
    (-0.3440, -0.5700, -0.0250, 0.0036, [0, 3, 0, -2]),
    (-0.9920, -0.0200, 0.0000, 0.0000, [1, 0, 2, 2]),
    (-45.0990, -0.0200, 0.0000, -0.0010, [1, 0, 2, 0]),
    (-0.1790, -9.5200, 0.0000, -0.0833, [1, 0, 2, -2]),
    (-0.3010, -0.3300, 0.0000, 0.0014, [1, 0, 2, -4]),
    (-6.3820, -3.3700, 0.0000, -0.0481, [1, 0, -2, 2]),
    (39.5280, 85.1300, 0.0000, -0.7136, [1, 0, -2, 0]),
    (9.3660, 0.7100, 0.0000, -0.0112, [1, 0, -2, -2]),
    (0.2020, 0.0200, 0.0000, 0.0000, [1, 0, -2, -4]),
    (0.4150, 0.1000, 0.0000, 0.0013, [0, 1, 2, 0]),
    (-2.1520, -2.2600, 0.0000, -0.0066, [0, 1, 2, -2]),
    (-1.4400, -1.3000, 0.0000, 0.0014, [0, 1, -2, 2]),
    (0.3840, -0.0400, 0.0000, 0.0000, [0, 1, -2, -2]),
    (1.9380, 3.6000, -0.1450, 0.0401, [4, 0, 0, 0]),
    (-0.9520, -1.5800, 0.0520, -0.0130, [4, 0, 0, -2]),
    (-0.5510, -0.9400, 0.0320, -0.0097, [3, 1, 0, 0]),
    (-0.4820, -0.5700, 0.0050, -0.0045, [3, 1, 0, -2]),
    (0.6810, 0.9600, -0.0260, 0.0115, [3, -1, 0, 0]),
    (-0.2970, -0.2700, 0.0020, -0.0009, [2, 2, 0, -2]),
    (0.2540, 0.2100, -0.0030, 0.0000, [2, -2, 0, -2]),
    (-0.2500, -0.2200, 0.0040, 0.0014, [1, 3, 0, -2]),
    (-3.9960, 0.0000, 0.0000, 0.0004, [2, 0, 2, 0]),
    (0.5570, -0.7500, 0.0000, -0.0090, [2, 0, 2, -2]),
    (-0.4590, -0.3800, 0.0000, -0.0053, [2, 0, -2, 2]),
    (-1.2980, 0.7400, 0.0000, 0.0004, [2, 0, -2, 0]),
    (0.5380, 1.1400, 0.0000, -0.0141, [2, 0, -2, -2]),
    (0.2630, 0.0200, 0.0000, 0.0000, [1, 1, 2, 0]),
    (0.4260, 0.0700, 0.0000, -0.0006, [1, 1, -2, -2]),
    (-0.3040, 0.0300, 0.0000, 0.0003, [1, -1, 2, 0]),
    (-0.3720, -0.1900, 0.0000, -0.0027, [1, -1, -2, 2]),
    (0.4180, 0.0000, 0.0000, 0.0000, [0, 0, 4, 0]),
    (-0.3300, -0.0400, 0.0000, 0.0000, [3, 0, 2, 0]),
];

// Node perturbations: coefficient in latitude (arcseconds), multiples of l, l′, F, D.
const NODE_TERMS: [(f64, [i8; 4]); 10] = [
    (-526.069, [0, 0, 1, -2]),
    (-3.352, [0, 0, 1, -4]),
    (44.297, [1, 0, 1, -2]),
    (-6.000, [1, 0, 1, -4]),
    (20.599, [-1, 0, 1, 0]),
    (-30.598, [-1, 0, 1, -2]),
    (-24.649, [-2, 0, 1, 0]),
    (-2.000, [-2, 0, 1, -2]),
    (-22.571, [0, 1, 1, -2]),
    (10.985, [0, -1, 1, -2]),
];

fn sine(phi: f64) -> f64 {
    (TAU * phi).sin()
}

fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// `cos(k·x)` and `sin(k·x)` for the four lunar arguments and every multiple `k` the series
/// needs, built by repeated angle addition.
struct Harmonics {
    co: [[f64; 2 * ZERO + 1]; 4],
    si: [[f64; 2 * ZERO + 1]; 4],
}

/// Cosine and sine of the sum of two angles given by their cosines and sines.
fn add_angles(c1: f64, s1: f64, c2: f64, s2: f64) -> (f64, f64) {
    (c1 * c2 - s1 * s2, s1 * c2 + c1 * s2)
}

impl Harmonics {
    /// `args` holds, for each argument, its value in radians and a scale applied to the
    /// first harmonic.
    fn new(args: [(f64, f64); 4]) -> Self {
        let mut co = [[0.0; 2 * ZERO + 1]; 4];
        let mut si = [[0.0; 2 * ZERO + 1]; 4];
        for (i, &(arg, fac)) in args.iter().enumerate() {
            co[i][ZERO] = 1.0;
            co[i][ZERO + 1] = arg.cos() * fac;
            si[i][ZERO + 1] = arg.sin() * fac;
            for j in 2..=MAX_MULTIPLE[i] {
                let (c, s) = add_angles(
                    co[i][ZERO + j - 1],
                    si[i][ZERO + j - 1],
                    co[i][ZERO + 1],
                    si[i][ZERO + 1],
                );
                co[i][ZERO + j] = c;
                si[i][ZERO + j] = s;
            }
            for j in 1..=MAX_MULTIPLE[i] {
                co[i][ZERO - j] = co[i][ZERO + j];
                si[i][ZERO - j] = -si[i][ZERO + j];
            }
        }
        Harmonics { co, si }
    }

    /// Cosine and sine of `p·l + q·l′ + r·F + s·D`.
    fn term(&self, multiples: [i8; 4]) -> (f64, f64) {
        multiples
            .iter()
            .enumerate()
            .filter(|(_, k)| **k != 0)
            .fold((1.0, 0.0), |(x, y), (i, &k)| {
                let idx = (ZERO as i8 + k) as usize;
                add_angles(x, y, self.co[i][idx], self.si[i][idx])
            })
    }
}

/// Moon on the mean ecliptic of date: longitude and latitude in radians, distance in AU.
fn calc_moon(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;

    let s1 = sine(0.19833 + 0.05611 * t);
    let s2 = sine(0.27869 + 0.04508 * t);
    let s3 = sine(0.16827 - 0.36903 * t);
    let s4 = sine(0.34734 - 5.37261 * t);
    let s5 = sine(0.10498 - 5.37899 * t);
    let s6 = sine(0.42681 - 0.41855 * t);
    let s7 = sine(0.14943 - 5.37511 * t);

    // long-period corrections, arcseconds
    let dl0 = 0.84 * s1 + 0.31 * s2 + 14.27 * s3 + 7.26 * s4 + 0.28 * s5 + 0.24 * s6;
    let dl = 2.94 * s1 + 0.31 * s2 + 14.27 * s3 + 9.34 * s4 + 1.12 * s5 + 0.83 * s6;
    let dls = -6.40 * s1 - 1.89 * s6;
    let df = 0.21 * s1 + 0.31 * s2 + 14.27 * s3 - 88.70 * s4 - 15.30 * s5 + 0.24 * s6
        - 1.86 * s7;
    let dd = dl0 - dls;
    let dgam = -3332e-9 * sine(0.59734 - 5.37261 * t)
        - 539e-9 * sine(0.35498 - 5.37899 * t)
        - 64e-9 * sine(0.39943 - 5.37511 * t);

    let l0 = TAU * frac(0.60643382 + 1336.85522467 * t - 0.00000313 * t2) + dl0 / ARC;
    let l = TAU * frac(0.37489701 + 1325.55240982 * t + 0.00002565 * t2) + dl / ARC;
    let ls = TAU * frac(0.99312619 + 99.99735956 * t - 0.00000044 * t2) + dls / ARC;
    let f = TAU * frac(0.25909118 + 1342.22782980 * t - 0.00000892 * t2) + df / ARC;
    let d = TAU * frac(0.82736186 + 1236.85308708 * t - 0.00000397 * t2) + dd / ARC;

    let harmonics = Harmonics::new([
        (l, 1.000002208),
        (ls, 0.997504612 - 0.002495388 * t),
        (f, 1.000002708 + 139.978 * dgam),
        (d, 1.0),
    ]);

    let (mut dlam, ds, gam1c, sinpi) = SOLAR_TERMS.iter().fold(
        (0.0, 0.0, 0.0, MEAN_PARALLAX),
        |(dlam, ds, gam1c, sinpi), &(cl, cs, cg, cp, multiples)| {
            let (x, y) = harmonics.term(multiples);
            (dlam + cl * y, ds + cs * y, gam1c + cg * x, sinpi + cp * x)
        },
    );
    let n = NODE_TERMS
        .iter()
        .fold(0.0, |n, &(cn, multiples)| n + cn * harmonics.term(multiples).1);

    // planetary perturbations
    dlam += 0.82 * sine(0.7736 - 62.5512 * t)
        + 0.31 * sine(0.0466 - 125.1025 * t)
        + 0.35 * sine(0.5785 - 25.1042 * t)
        + 0.66 * sine(0.4591 + 1335.8075 * t)
        + 0.64 * sine(0.3130 - 91.5680 * t)
        + 1.14 * sine(0.1480 + 1331.2898 * t)
        + 0.21 * sine(0.5918 + 1056.5859 * t)
        + 0.44 * sine(0.5784 + 1322.8595 * t)
        + 0.24 * sine(0.2275 - 5.7374 * t)
        + 0.28 * sine(0.2965 + 2.6929 * t)
        + 0.33 * sine(0.3132 + 6.3368 * t);

    let s = f + ds / ARC;
    let lat_seconds = (1.000002708 + 139.978 * dgam) * (18518.511 + 1.189 + gam1c) * s.sin()
        - 6.24 * (3.0 * s).sin()
        + n;

    let earth_radius_au = EARTH_EQUATORIAL_RADIUS_KM / KM_PER_AU;
    (
        TAU * frac((l0 + dlam / ARC) / TAU),
        lat_seconds * (RADEG / 3600.0),
        (ARC * earth_radius_au) / (0.999953253 * sinpi),
    )
}

/// Geocentric Moon on the mean ecliptic and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    /// Ecliptic longitude, degrees in `[0, 360)`
    pub lon: Degree,
    /// Ecliptic latitude, degrees
    pub lat: Degree,
    /// Distance between the centers of the Earth and the Moon
    pub dist_km: Kilometer,
}

/// Evaluate the lunar series at a given Terrestrial Time.
///
/// Arguments
/// ---------
/// * `tt`: Terrestrial Time in days since J2000.
///
/// Returns
/// --------
/// * Longitude, latitude and distance on the mean ecliptic of date.
pub fn lunar_position(tt: f64) -> LunarPosition {
    let (lon, lat, dist) = calc_moon(tt / DAYS_PER_CENTURY);
    LunarPosition {
        lon: DEGRAD * lon,
        lat: DEGRAD * lat,
        dist_km: dist * KM_PER_AU,
    }
}

/// Cartesian vector (AU) on the mean ecliptic of date.
fn ecliptic_vector(tt: f64) -> Vector3<f64> {
    let (lon, lat, dist) = calc_moon(tt / DAYS_PER_CENTURY);
    let dist_cos_lat = dist * lat.cos();
    Vector3::new(dist_cos_lat * lon.cos(), dist_cos_lat * lon.sin(), dist * lat.sin())
}

/// Geocentric position of the Moon in the J2000 mean equatorial frame (EQJ).
///
/// The series is evaluated at `time.tt()`; no light-time correction is applied.
pub fn geo_moon(time: &AstroTime) -> AstroVector {
    let tt = time.tt();
    let eqd = ecliptic_to_equator_matrix(mean_obliquity(tt)) * ecliptic_vector(tt);
    AstroVector::from_vec(precession_matrix(tt).transpose() * eqd, *time)
}

/// Geocentric position and velocity of the Moon (EQJ).
///
/// The velocity is the central difference of [`geo_moon`] over ±1e-5 day.
pub fn geo_moon_state(time: &AstroTime) -> StateVector {
    let before = geo_moon(&time.add_days(-VELOCITY_STEP_DAYS));
    let after = geo_moon(&time.add_days(VELOCITY_STEP_DAYS));
    let center = geo_moon(time);
    let dt = after.t.ut() - before.t.ut();
    StateVector::new(center.pos, (after.pos - before.pos) / dt, *time)
}

/// Geocentric state of the Earth/Moon barycenter (EQJ).
pub fn geo_emb_state(time: &AstroTime) -> StateVector {
    let moon = geo_moon_state(time);
    let scale = 1.0 / (1.0 + EARTH_MOON_MASS_RATIO);
    StateVector::new(moon.pos * scale, moon.vel * scale, *time)
}

/// Geocentric Moon on the true ecliptic and equinox of date (ECT).
///
/// Returns
/// --------
/// * Latitude and longitude in degrees, distance in AU.
pub fn ecliptic_geo_moon(orrery: &Orrery, time: &AstroTime) -> Result<Spherical, OrreryError> {
    let tilt = orrery.tilt(time);
    let eqm = ecliptic_to_equator_matrix(tilt.mobl) * ecliptic_vector(time.tt());
    let eqd = nutation_matrix(&tilt) * eqm;
    let ect = ecliptic_to_equator_matrix(tilt.tobl).transpose() * eqd;
    sphere_from_vector(&AstroVector::from_vec(ect, *time))
}

#[cfg(test)]
mod moon_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_meeus_example_47a() {
        // 1992-04-12 0h TD; the ELP values are 133.162655°, -3.229126°, 368409.7 km
        let moon = lunar_position(2_448_724.5 - 2_451_545.0);
        assert_abs_diff_eq!(moon.lon, 133.162_655, epsilon = 1e-3);
        assert_abs_diff_eq!(moon.lat, -3.229_126, epsilon = 1e-3);
        assert_abs_diff_eq!(moon.dist_km, 368_409.7, epsilon = 20.0);
        assert_abs_diff_eq!(moon.lon, 133.162_005_877_370_1, epsilon = 1e-9);
        assert_abs_diff_eq!(moon.dist_km, 368_394.889_358_947_5, epsilon = 1e-6);
    }

    #[test]
    fn test_geo_moon_reference_vector() {
        let time = AstroTime::from_calendar(2019, 6, 24, 15, 45, 37.0).unwrap();
        let moon = geo_moon(&time);
        let expected = Vector3::new(
            0.002_674_037_026_701_135,
            -0.000_153_161_031_660_066_6,
            -0.000_315_015_992_706_942_9,
        );
        let diff = (moon.pos - expected).norm();
        assert!(diff <= 4.34e-19, "diff = {diff:e}");
        assert_eq!(moon, geo_moon(&time));
    }

    #[test]
    fn test_harmonics_match_trig() {
        let h = Harmonics::new([(0.3, 1.0), (1.1, 1.0), (-2.0, 1.0), (4.0, 1.0)]);
        let (x, y) = h.term([1, -1, 2, -6]);
        let angle: f64 = 0.3 - 1.1 - 4.0 - 24.0;
        assert_abs_diff_eq!(x, angle.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(y, angle.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_moon_speed() {
        let state = geo_moon_state(&AstroTime::from_ut(7000.0));
        // about 1 km/s
        let km_per_s = state.vel.norm() * KM_PER_AU / 86_400.0;
        assert!((0.9..1.1).contains(&km_per_s), "speed = {km_per_s}");
    }

    #[test]
    fn test_emb_is_scaled_moon() {
        let time = AstroTime::from_ut(123.4);
        let emb = geo_emb_state(&time);
        let moon = geo_moon_state(&time);
        assert_abs_diff_eq!(emb.pos * (1.0 + EARTH_MOON_MASS_RATIO), moon.pos, epsilon = 1e-15);
    }

    #[test]
    fn test_true_ecliptic_adds_nutation() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(-2820.5);
        let mean = lunar_position(time.tt());
        let tilt = orrery.tilt(&time);
        let sphere = ecliptic_geo_moon(&orrery, &time).unwrap();
        assert_abs_diff_eq!(sphere.lon, mean.lon + tilt.dpsi / 3600.0, epsilon = 1e-6);
        assert_abs_diff_eq!(sphere.lat, mean.lat, epsilon = 1e-6);
        assert_abs_diff_eq!(sphere.dist * KM_PER_AU, mean.dist_km, epsilon = 1e-6);
    }
}
