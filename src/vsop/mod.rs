//! # Planetary theory: truncated VSOP87D series
//!
//! Each planet from Mercury to Neptune is described by three families of Poisson series in
//! `τ`, Julian millennia of TT since J2000:
//!
//! ```text
//! X(τ) = Σₖ τᵏ · Σᵢ Aᵢ · cos(Bᵢ + Cᵢ·τ)        X ∈ {L, B, R}
//! ```
//!
//! giving the heliocentric longitude `L`, latitude `B` (radians) and distance `R` (AU) referred
//! to the mean ecliptic and equinox of date. The tables are the abridged VSOP87D terms printed
//! by Meeus (*Astronomical Algorithms*, Appendix III).
//!
//! [`helio_state`] adds the small FK5 frame correction, converts to Cartesian coordinates,
//! rotates the mean ecliptic of date onto the mean equator of date and finally precesses back
//! to the J2000 mean equator (EQJ). The velocity comes from the analytic derivative of the
//! series and goes through the same rotations.

mod earth;
mod jupiter;
mod mars;
mod mercury;
mod neptune;
mod saturn;
mod uranus;
mod venus;

use nalgebra::Vector3;

use crate::constants::{DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, DPI, RADSEC};
use crate::earth_orientation::{ecliptic_to_equator_matrix, mean_obliquity, precession_matrix};
use crate::time::AstroTime;
use crate::vector::StateVector;

/// One series term `[A, B, C]`: amplitude (1e-8 rad or 1e-8 AU), phase (rad), frequency
/// (rad per Julian millennium).
pub(crate) type VsopTerm = [f64; 3];

/// The L, B and R series of one planet, each split by power of `τ`.
pub(crate) struct VsopModel {
    pub(crate) lon: &'static [&'static [VsopTerm]],
    pub(crate) lat: &'static [&'static [VsopTerm]],
    pub(crate) rad: &'static [&'static [VsopTerm]],
}

/// Planets covered by the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VsopPlanet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl VsopPlanet {
    fn model(self) -> &'static VsopModel {
        match self {
            VsopPlanet::Mercury => &mercury::MERCURY,
            VsopPlanet::Venus => &venus::VENUS,
            VsopPlanet::Earth => &earth::EARTH,
            VsopPlanet::Mars => &mars::MARS,
            VsopPlanet::Jupiter => &jupiter::JUPITER,
            VsopPlanet::Saturn => &saturn::SATURN,
            VsopPlanet::Uranus => &uranus::URANUS,
            VsopPlanet::Neptune => &neptune::NEPTUNE,
        }
    }
}

/// Heliocentric spherical coordinates on the mean ecliptic and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticLbr {
    /// Longitude in radians, `[0, 2π)`
    pub lon: f64,
    /// Latitude in radians
    pub lat: f64,
    /// Distance in AU
    pub rad: f64,
}

/// Value and `τ`-derivative of one series family.
fn evaluate_series(series: &[&[VsopTerm]], tau: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut rate = 0.0;
    let mut tpower = 1.0;
    let mut dpower = 0.0;
    for (k, terms) in series.iter().enumerate() {
        let (sum, dsum) = terms.iter().fold((0.0, 0.0), |(s, ds), &[a, b, c]| {
            let (sin_arg, cos_arg) = (b + c * tau).sin_cos();
            (s + a * cos_arg, ds - a * c * sin_arg)
        });
        value += tpower * sum;
        rate += dpower * sum + tpower * dsum;
        dpower = (k + 1) as f64 * tpower;
        tpower *= tau;
    }
    (value * 1.0e-8, rate * 1.0e-8)
}

/// Heliocentric (L, B, R) of a planet, referred to the mean ecliptic of date, without the
/// FK5 correction.
///
/// Arguments
/// ---------
/// * `planet`: the planet to evaluate.
/// * `tt`: Terrestrial Time in days since J2000.
pub fn ecliptic_lbr(planet: VsopPlanet, tt: f64) -> EclipticLbr {
    let (lbr, _) = lbr_with_rates(planet, tt);
    lbr
}

/// (L, B, R) and their rates per day.
fn lbr_with_rates(planet: VsopPlanet, tt: f64) -> (EclipticLbr, [f64; 3]) {
    let model = planet.model();
    let tau = tt / DAYS_PER_MILLENNIUM;
    let (lon, dlon) = evaluate_series(model.lon, tau);
    let (lat, dlat) = evaluate_series(model.lat, tau);
    let (rad, drad) = evaluate_series(model.rad, tau);
    (
        EclipticLbr {
            lon: lon.rem_euclid(DPI),
            lat,
            rad,
        },
        [
            dlon / DAYS_PER_MILLENNIUM,
            dlat / DAYS_PER_MILLENNIUM,
            drad / DAYS_PER_MILLENNIUM,
        ],
    )
}

/// FK5 frame correction of VSOP87 longitude and latitude (radians in, radians out).
fn fk5_correction(lon: f64, lat: f64, tt: f64) -> (f64, f64) {
    let t = tt / DAYS_PER_CENTURY;
    let lprime = lon - (1.397 * t + 0.000_31 * t * t).to_radians();
    let (sin_lp, cos_lp) = lprime.sin_cos();
    let dlon = -0.090_33 + 0.039_16 * (cos_lp + sin_lp) * lat.tan();
    let dlat = 0.039_16 * (cos_lp - sin_lp);
    (lon + dlon * RADSEC, lat + dlat * RADSEC)
}

/// Heliocentric state of a planet in the J2000 mean equatorial frame (EQJ).
///
/// Arguments
/// ---------
/// * `planet`: the planet to evaluate.
/// * `time`: the instant; only `tt` is used.
///
/// Returns
/// --------
/// * Position in AU and velocity in AU/day.
pub fn helio_state(planet: VsopPlanet, time: &AstroTime) -> StateVector {
    let tt = time.tt();
    let (lbr, [dlon, dlat, drad]) = lbr_with_rates(planet, tt);
    let (lon, lat) = fk5_correction(lbr.lon, lbr.lat, tt);
    let r = lbr.rad;

    let (sin_lon, cos_lon) = lon.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();

    let ecl_pos = Vector3::new(r * cos_lat * cos_lon, r * cos_lat * sin_lon, r * sin_lat);
    let ecl_vel = Vector3::new(
        drad * cos_lat * cos_lon - r * sin_lat * cos_lon * dlat - r * cos_lat * sin_lon * dlon,
        drad * cos_lat * sin_lon - r * sin_lat * sin_lon * dlat + r * cos_lat * cos_lon * dlon,
        drad * sin_lat + r * cos_lat * dlat,
    );

    let rot = precession_matrix(tt).transpose() * ecliptic_to_equator_matrix(mean_obliquity(tt));
    StateVector::new(rot * ecl_pos, rot * ecl_vel, *time)
}

#[cfg(test)]
mod vsop_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    // Meeus example 32.a and 25.b: 1992-12-20 0h TD
    const TT_1992_12_20: f64 = 2_448_976.5 - 2_451_545.0;

    #[test]
    fn test_venus_lbr() {
        let lbr = ecliptic_lbr(VsopPlanet::Venus, TT_1992_12_20);
        assert_abs_diff_eq!(lbr.lon.to_degrees(), 26.114_28, epsilon = 1e-4);
        assert_abs_diff_eq!(lbr.lat.to_degrees(), -2.620_70, epsilon = 1e-4);
        assert_abs_diff_eq!(lbr.rad, 0.724_603, epsilon = 1e-6);
    }

    #[test]
    fn test_earth_lbr() {
        let lbr = ecliptic_lbr(VsopPlanet::Earth, TT_1992_12_20);
        assert_abs_diff_eq!(lbr.lon.to_degrees(), 88.357_04, epsilon = 1e-4);
        assert_abs_diff_eq!(lbr.lat.to_degrees(), 0.000_14, epsilon = 1e-4);
        assert_abs_diff_eq!(lbr.rad, 0.983_824, epsilon = 1e-6);
    }

    #[test]
    fn test_velocity_matches_finite_difference() {
        let dt = 1.0e-3;
        for planet in [VsopPlanet::Mercury, VsopPlanet::Earth, VsopPlanet::Neptune] {
            let t = AstroTime::from_tt(7000.0);
            let before = helio_state(planet, &AstroTime::from_tt(7000.0 - dt));
            let after = helio_state(planet, &AstroTime::from_tt(7000.0 + dt));
            let numeric = (after.pos - before.pos) / (2.0 * dt);
            let analytic = helio_state(planet, &t).vel;
            assert_abs_diff_eq!(analytic, numeric, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_earth_distance_range() {
        let mut tt = 0.0;
        while tt < 366.0 {
            let r = helio_state(VsopPlanet::Earth, &AstroTime::from_tt(tt)).pos.norm();
            assert!((0.983..1.017).contains(&r), "tt={tt} r={r}");
            tt += 5.0;
        }
    }
}
