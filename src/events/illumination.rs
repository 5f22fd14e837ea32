//! # Visual magnitude and phase
//!
//! [`illumination`] gives the apparent visual magnitude of the Sun, the Moon and the planets
//! together with the phase angle (Sun–body–Earth) and the illuminated fraction of the disc.
//!
//! Planetary magnitudes follow the cubic phase laws of the *Astronomical Almanac*:
//!
//! ```text
//! m = c0 + c1·x + c2·x² + c3·x³ + 5·log10(r·Δ),    x = phase / 100°
//! ```
//!
//! Saturn's rings change its brightness by more than a magnitude, so Saturn uses a separate
//! formula driven by the tilt of the ring plane toward the Earth.

use crate::bodies::{geo_vector, helio_vector, Aberration, Body};
use crate::constants::{Au, Degree, DEGRAD, KM_PER_AU, RADEG, SUN_MAG_1AU};
use crate::events::elongation::search_inferior_extreme;
use crate::moon::geo_moon;
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::rotation::rotation_eqj_ect;
use crate::time::AstroTime;
use crate::vector::{angle_between, sphere_from_vector, AstroVector};

/// Mean Earth–Moon distance used to normalize the lunar magnitude, km.
const MOON_MEAN_DISTANCE_KM: f64 = 385_000.6;

const MAGNITUDE_SLOPE_DT_DAYS: f64 = 0.01;

/// Inclination of Saturn's rings to the ecliptic, degrees.
const SATURN_RING_INCLINATION: Degree = 28.06;

/// Brightness of a body as seen from the center of the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IlluminationInfo {
    pub time: AstroTime,
    /// Apparent visual magnitude
    pub mag: f64,
    /// Angle Sun–body–Earth in degrees; 0 for the Sun
    pub phase_angle: Degree,
    /// Illuminated fraction of the apparent disc, `[0, 1]`
    pub phase_fraction: f64,
    /// Distance from the Sun, AU
    pub helio_dist: Au,
    /// Tilt of Saturn's rings toward the Earth, degrees; 0 for every other body
    pub ring_tilt: Degree,
}

fn moon_magnitude(phase: Degree, helio_dist: Au, geo_dist: Au) -> f64 {
    let rad = phase * RADEG;
    let rad4 = rad.powi(4);
    let geo_ratio = geo_dist / (MOON_MEAN_DISTANCE_KM / KM_PER_AU);
    -12.717 + 1.49 * rad.abs() + 0.0431 * rad4 + 5.0 * (helio_dist * geo_ratio).log10()
}

/// Saturn's magnitude with its ring contribution, and the ring tilt in degrees.
fn saturn_magnitude(
    orrery: &Orrery,
    phase: Degree,
    helio_dist: Au,
    geo_dist: Au,
    gc: &AstroVector,
) -> Result<(f64, Degree), OrreryError> {
    let eclip = sphere_from_vector(&rotation_eqj_ect(orrery, &gc.t).rotate_vector(gc))?;
    let ir = SATURN_RING_INCLINATION * RADEG;
    let nr = (169.51 + 3.82e-5 * gc.t.tt()) * RADEG;
    let lat = eclip.lat * RADEG;
    let lon = eclip.lon * RADEG;
    let tilt = (lat.sin() * ir.cos() - lat.cos() * ir.sin() * (lon - nr).sin()).asin();
    let sin_tilt = tilt.abs().sin();

    let mag = -9.0
        + 0.044 * phase
        + sin_tilt * (-2.6 + 1.2 * sin_tilt)
        + 5.0 * (helio_dist * geo_dist).log10();
    Ok((mag, DEGRAD * tilt))
}

fn planet_magnitude(
    body: Body,
    phase: Degree,
    helio_dist: Au,
    geo_dist: Au,
) -> Result<f64, OrreryError> {
    let (c0, c1, c2, c3) = match body {
        Body::Mercury => (-0.60, 4.98, -4.88, 3.02),
        Body::Venus if phase < 163.6 => (-4.47, 1.03, 0.57, 0.13),
        Body::Venus => (0.98, -1.02, 0.0, 0.0),
        Body::Mars => (-1.52, 1.60, 0.0, 0.0),
        Body::Jupiter => (-9.40, 0.50, 0.0, 0.0),
        Body::Uranus => (-7.19, 0.25, 0.0, 0.0),
        Body::Neptune => (-6.87, 0.0, 0.0, 0.0),
        Body::Pluto => (-1.00, 4.00, 0.0, 0.0),
        other => return Err(OrreryError::InvalidBody(other)),
    };
    let x = phase / 100.0;
    Ok(c0 + x * (c1 + x * (c2 + x * c3)) + 5.0 * (helio_dist * geo_dist).log10())
}

/// Visual magnitude and phase of a body.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `body`: the Sun, the Moon, a planet other than the Earth, or Pluto.
/// * `time`: the instant.
///
/// Returns
/// --------
/// * [`IlluminationInfo`].
/// * [`OrreryError::EarthNotAllowed`] for the Earth, [`OrreryError::InvalidBody`] for
///   barycenters and stars.
pub fn illumination(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
) -> Result<IlluminationInfo, OrreryError> {
    match body {
        Body::Earth => return Err(OrreryError::EarthNotAllowed),
        Body::Emb | Body::Ssb => return Err(OrreryError::InvalidBody(body)),
        star if star.is_star() => return Err(OrreryError::InvalidBody(star)),
        _ => {}
    }

    let earth = helio_vector(orrery, Body::Earth, time)?;
    let (gc, hc, phase_angle) = match body {
        Body::Sun => (AstroVector::from_vec(-earth.pos, *time), AstroVector::zero(*time), 0.0),
        _ => {
            let gc = match body {
                Body::Moon => geo_moon(time),
                _ => geo_vector(orrery, body, time, Aberration::Corrected)?,
            };
            let hc = AstroVector::from_vec(earth.pos + gc.pos, *time);
            let phase = angle_between(&gc, &hc)?;
            (gc, hc, phase)
        }
    };

    let geo_dist = gc.length();
    let helio_dist = hc.length();
    let mut ring_tilt = 0.0;
    let mag = match body {
        Body::Sun => SUN_MAG_1AU + 5.0 * geo_dist.log10(),
        Body::Moon => moon_magnitude(phase_angle, helio_dist, geo_dist),
        Body::Saturn => {
            let (mag, tilt) = saturn_magnitude(orrery, phase_angle, helio_dist, geo_dist, &gc)?;
            ring_tilt = tilt;
            mag
        }
        _ => planet_magnitude(body, phase_angle, helio_dist, geo_dist)?,
    };

    Ok(IlluminationInfo {
        time: *time,
        mag,
        phase_angle,
        phase_fraction: (1.0 + (phase_angle * RADEG).cos()) / 2.0,
        helio_dist,
        ring_tilt,
    })
}

/// Find the next time Venus reaches its greatest brilliancy.
///
/// Venus is brightest about five weeks before and after inferior conjunction, while its
/// relative longitude to the Earth is between 10° and 30° on either side.
///
/// Returns
/// --------
/// * [`IlluminationInfo`] at the peak, or [`OrreryError::InvalidBody`] for any body but
///   Venus.
pub fn search_peak_magnitude(
    orrery: &Orrery,
    body: Body,
    start: &AstroTime,
) -> Result<IlluminationInfo, OrreryError> {
    if body != Body::Venus {
        return Err(OrreryError::InvalidBody(body));
    }
    // the magnitude decreases while the planet brightens
    let mag_slope = |t: &AstroTime| -> Result<f64, OrreryError> {
        let y1 = illumination(orrery, body, &t.add_days(-MAGNITUDE_SLOPE_DT_DAYS / 2.0))?.mag;
        let y2 = illumination(orrery, body, &t.add_days(MAGNITUDE_SLOPE_DT_DAYS / 2.0))?.mag;
        Ok((y2 - y1) / MAGNITUDE_SLOPE_DT_DAYS)
    };
    let time = search_inferior_extreme(orrery, body, start, (10.0, 30.0), mag_slope)?;
    illumination(orrery, body, &time)
}

#[cfg(test)]
mod illumination_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_invalid_bodies() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(0.0);
        assert_eq!(
            illumination(&orrery, Body::Earth, &time),
            Err(OrreryError::EarthNotAllowed)
        );
        for body in [Body::Ssb, Body::Emb, Body::Star3] {
            assert_eq!(illumination(&orrery, body, &time), Err(OrreryError::InvalidBody(body)));
        }
    }

    #[test]
    fn test_saturn_rings() {
        let orrery = Orrery::new();
        for ((year, month, day), mag, tilt) in [
            ((1972, 1, 1), -0.317, 24.43),
            ((2017, 6, 15), -0.123, -26.60),
            ((2025, 9, 25), 0.505, 1.69),
        ] {
            let time = orrery.make_time(year, month, day, 0, 0, 0.0).unwrap();
            let info = illumination(&orrery, Body::Saturn, &time).unwrap();
            assert_abs_diff_eq!(info.mag, mag, epsilon = 0.02);
            assert_abs_diff_eq!(info.ring_tilt, tilt, epsilon = 0.1);
        }
    }

    #[test]
    fn test_sun_and_full_moon() {
        let orrery = Orrery::new();
        let time = orrery.make_time(2019, 1, 21, 5, 16, 0.0).unwrap();

        let sun = illumination(&orrery, Body::Sun, &time).unwrap();
        assert_eq!(sun.phase_angle, 0.0);
        assert_eq!(sun.phase_fraction, 1.0);
        assert_eq!(sun.helio_dist, 0.0);
        assert_abs_diff_eq!(sun.mag, -26.78, epsilon = 0.01);

        let moon = illumination(&orrery, Body::Moon, &time).unwrap();
        assert!(moon.phase_fraction > 0.99);
        assert!(moon.mag > -13.1 && moon.mag < -12.6, "{}", moon.mag);
    }

    #[test]
    fn test_venus_peak_brilliancy_2020() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2020, 1, 1, 0, 0, 0.0).unwrap();
        let peak = search_peak_magnitude(&orrery, Body::Venus, &start).unwrap();
        let almanac = orrery.make_time(2020, 4, 28, 0, 0, 0.0).unwrap();
        // the peak is broad; magnitude laws differ by a few days on its date
        assert!((peak.time.ut() - almanac.ut()).abs() < 5.0);
        assert!(peak.mag < -4.4);
        for offset in [-5.0, 5.0] {
            let nearby = illumination(&orrery, Body::Venus, &peak.time.add_days(offset)).unwrap();
            assert!(nearby.mag > peak.mag);
        }
        assert_eq!(
            search_peak_magnitude(&orrery, Body::Mercury, &start),
            Err(OrreryError::InvalidBody(Body::Mercury))
        );
    }

    #[test]
    fn test_phase_fraction_bounds() {
        let orrery = Orrery::new();
        for body in [Body::Mercury, Body::Venus, Body::Mars, Body::Jupiter, Body::Pluto] {
            let info = illumination(&orrery, body, &AstroTime::from_ut(7777.0)).unwrap();
            assert!((0.0..=1.0).contains(&info.phase_fraction));
            assert_eq!(info.ring_tilt, 0.0);
            assert!(info.mag.is_finite());
        }
    }
}
