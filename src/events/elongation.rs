//! # Elongation and relative longitude
//!
//! - [`elongation`] – angular distance of a body from the Sun and whether it is a morning or
//!   an evening object,
//! - [`search_relative_longitude`] – conjunctions, oppositions and any other configuration
//!   defined by the difference of heliocentric longitudes of a planet and the Earth,
//! - [`search_max_elongation`] – greatest elongations of Mercury and Venus.

use log::{debug, warn};

use crate::bodies::{synodic_period, Body};
use crate::constants::Degree;
use crate::conversion::longitude_offset;
use crate::coordinates::{angle_from_sun, ecliptic_longitude, pair_longitude};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::search::{search, SearchOptions};
use crate::time::AstroTime;

const RELATIVE_LONGITUDE_MAX_ITERATIONS: usize = 100;

/// Step below which the relative longitude search stops, seconds.
const RELATIVE_LONGITUDE_TOLERANCE_SECONDS: f64 = 1.0;

const ELONGATION_SLOPE_DT_DAYS: f64 = 0.1;

const ELONGATION_TOLERANCE_SECONDS: f64 = 10.0;

/// Which part of the night a body is best seen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// West of the Sun, seen before sunrise
    Morning,
    /// East of the Sun, seen after sunset
    Evening,
}

/// Elongation of a body at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElongationEvent {
    pub time: AstroTime,
    pub visibility: Visibility,
    /// Angle between the body and the Sun, degrees
    pub elongation: Degree,
    /// Difference of geocentric ecliptic longitudes, degrees in `[0, 180]`
    pub ecliptic_separation: Degree,
}

/// Angular separation of a body from the Sun, as seen from the Earth.
///
/// Returns
/// --------
/// * [`OrreryError::EarthNotAllowed`] for the Earth.
pub fn elongation(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
) -> Result<ElongationEvent, OrreryError> {
    let relative_longitude = pair_longitude(orrery, body, Body::Sun, time)?;
    let (visibility, ecliptic_separation) = if relative_longitude > 180.0 {
        (Visibility::Morning, 360.0 - relative_longitude)
    } else {
        (Visibility::Evening, relative_longitude)
    };
    Ok(ElongationEvent {
        time: *time,
        visibility,
        elongation: angle_from_sun(orrery, body, time)?,
        ecliptic_separation,
    })
}

fn is_superior_planet(body: Body) -> bool {
    matches!(
        body,
        Body::Mars | Body::Jupiter | Body::Saturn | Body::Uranus | Body::Neptune | Body::Pluto
    )
}

/// Signed distance (degrees) of the current relative longitude from the target.
fn relative_longitude_offset(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
    direction: f64,
    target: Degree,
) -> Result<Degree, OrreryError> {
    let plon = ecliptic_longitude(orrery, body, time)?;
    let elon = ecliptic_longitude(orrery, Body::Earth, time)?;
    Ok(longitude_offset(direction * (elon - plon) - target))
}

/// Find when the heliocentric longitudes of a planet and the Earth differ by a given angle.
///
/// The relative longitude is `Earth − planet` for the planets beyond the Earth and
/// `planet − Earth` for Mercury and Venus, so 0° is an opposition or an inferior conjunction
/// and 180° a superior conjunction.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `body`: a planet other than the Earth, or Pluto.
/// * `target_rel_lon`: the relative longitude to reach, degrees.
/// * `start`: the first such event after this time is returned.
///
/// Returns
/// --------
/// * The event time.
/// * [`OrreryError::EarthNotAllowed`], [`OrreryError::InvalidBody`] for the Sun, the Moon
///   and other non-planets, [`OrreryError::NoConvergence`] after 100 corrections.
pub fn search_relative_longitude(
    orrery: &Orrery,
    body: Body,
    target_rel_lon: Degree,
    start: &AstroTime,
) -> Result<AstroTime, OrreryError> {
    let mut syn = synodic_period(body)?;
    let direction = if is_superior_planet(body) { 1.0 } else { -1.0 };

    let mut error_angle =
        relative_longitude_offset(orrery, body, start, direction, target_rel_lon)?;
    if error_angle > 0.0 {
        // always search forward in time
        error_angle -= 360.0;
    }

    let mut time = *start;
    for iter in 0..RELATIVE_LONGITUDE_MAX_ITERATIONS {
        let day_adjust = -error_angle / 360.0 * syn;
        time = time.add_days(day_adjust);
        if day_adjust.abs() * 86_400.0 < RELATIVE_LONGITUDE_TOLERANCE_SECONDS {
            debug!("relative longitude of {body} converged after {iter} iterations");
            return Ok(time);
        }
        let prev_angle = error_angle;
        error_angle = relative_longitude_offset(orrery, body, &time, direction, target_rel_lon)?;
        if prev_angle.abs() < 30.0 && prev_angle != error_angle {
            // eccentric orbits: scale the synodic period to the local relative speed
            let ratio = prev_angle / (prev_angle - error_angle);
            if ratio > 0.5 && ratio < 2.0 {
                syn *= ratio;
            }
        }
    }
    Err(OrreryError::NoConvergence(format!(
        "relative longitude {target_rel_lon} of {body} from {start}"
    )))
}

/// Locate the extreme of a quantity that only happens while an inferior planet's relative
/// longitude lies within `±[s1, s2]`.
///
/// `slope` must be negative before the extreme and positive after it. At most two
/// candidate windows are tried.
pub(crate) fn search_inferior_extreme<F>(
    orrery: &Orrery,
    body: Body,
    start: &AstroTime,
    (s1, s2): (Degree, Degree),
    slope: F,
) -> Result<AstroTime, OrreryError>
where
    F: Fn(&AstroTime) -> Result<f64, OrreryError>,
{
    let syn = synodic_period(body)?;
    let options = SearchOptions::with_tolerance(ELONGATION_TOLERANCE_SECONDS);
    let mut start = *start;
    for _ in 0..2 {
        let plon = ecliptic_longitude(orrery, body, &start)?;
        let elon = ecliptic_longitude(orrery, Body::Earth, &start)?;
        let rlon = longitude_offset(plon - elon);

        // keep clear of the cusps at 0 and 180 degrees
        let (adjust_days, rlon_lo, rlon_hi) = if (-s1..s1).contains(&rlon) {
            (0.0, s1, s2)
        } else if rlon > s2 || rlon < -s2 {
            (0.0, -s2, -s1)
        } else if rlon >= 0.0 {
            (-syn / 4.0, s1, s2)
        } else {
            (-syn / 4.0, -s2, -s1)
        };

        let t_start = start.add_days(adjust_days);
        let t1 = search_relative_longitude(orrery, body, rlon_lo, &t_start)?;
        let t2 = search_relative_longitude(orrery, body, rlon_hi, &t1)?;
        if slope(&t1)? >= 0.0 || slope(&t2)? <= 0.0 {
            return Err(OrreryError::InternalError(format!(
                "{body} extreme not bracketed between {t1} and {t2}"
            )));
        }
        let tx = search(&slope, &t1, &t2, &options)?.ok_or_else(|| {
            OrreryError::InternalError(format!("{body} extreme lost between {t1} and {t2}"))
        })?;
        if tx.tt() >= start.tt() {
            return Ok(tx);
        }
        // the extreme of this window is already past
        start = t2.add_days(1.0);
    }
    warn!("{body} extreme not found in two windows after {start}");
    Err(OrreryError::InternalError(format!(
        "{body} extreme not found after {start}"
    )))
}

/// Find the next greatest elongation of Mercury or Venus.
///
/// Returns
/// --------
/// * The [`ElongationEvent`] at the maximum, or [`OrreryError::InvalidBody`] for any other
///   body.
pub fn search_max_elongation(
    orrery: &Orrery,
    body: Body,
    start: &AstroTime,
) -> Result<ElongationEvent, OrreryError> {
    let window = match body {
        Body::Mercury => (50.0, 85.0),
        Body::Venus => (40.0, 50.0),
        other => return Err(OrreryError::InvalidBody(other)),
    };
    // negative while the elongation grows
    let neg_elong_slope = |t: &AstroTime| -> Result<f64, OrreryError> {
        let e1 = angle_from_sun(orrery, body, &t.add_days(-ELONGATION_SLOPE_DT_DAYS / 2.0))?;
        let e2 = angle_from_sun(orrery, body, &t.add_days(ELONGATION_SLOPE_DT_DAYS / 2.0))?;
        Ok((e1 - e2) / ELONGATION_SLOPE_DT_DAYS)
    };
    let time = search_inferior_extreme(orrery, body, start, window, neg_elong_slope)?;
    elongation(orrery, body, &time)
}

#[cfg(test)]
mod elongation_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn days_from(orrery: &Orrery, time: &AstroTime, (y, m, d, h): (i32, u32, u32, u32)) -> f64 {
        (time.ut() - orrery.make_time(y, m, d, h, 0, 0.0).unwrap().ut()).abs()
    }

    #[test]
    fn test_greatest_elongations_2020() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2020, 1, 1, 0, 0, 0.0).unwrap();

        let venus = search_max_elongation(&orrery, Body::Venus, &start).unwrap();
        assert_eq!(venus.visibility, Visibility::Evening);
        assert!(days_from(&orrery, &venus.time, (2020, 3, 24, 12)) < 1.0);
        assert_abs_diff_eq!(venus.elongation, 46.1, epsilon = 0.2);

        let later = orrery.make_time(2020, 4, 1, 0, 0, 0.0).unwrap();
        let venus = search_max_elongation(&orrery, Body::Venus, &later).unwrap();
        assert_eq!(venus.visibility, Visibility::Morning);
        assert!(days_from(&orrery, &venus.time, (2020, 8, 13, 12)) < 1.0);
        assert_abs_diff_eq!(venus.elongation, 45.8, epsilon = 0.2);

        let mercury = search_max_elongation(&orrery, Body::Mercury, &start).unwrap();
        assert_eq!(mercury.visibility, Visibility::Evening);
        assert!(days_from(&orrery, &mercury.time, (2020, 2, 10, 12)) < 1.0);
        assert_abs_diff_eq!(mercury.elongation, 18.2, epsilon = 0.2);
    }

    #[test]
    fn test_max_elongation_invalid_body() {
        let orrery = Orrery::new();
        let start = AstroTime::from_ut(0.0);
        assert_eq!(
            search_max_elongation(&orrery, Body::Mars, &start),
            Err(OrreryError::InvalidBody(Body::Mars))
        );
    }

    #[test]
    fn test_oppositions_2020() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2020, 1, 1, 0, 0, 0.0).unwrap();
        let mars = search_relative_longitude(&orrery, Body::Mars, 0.0, &start).unwrap();
        assert!(days_from(&orrery, &mars, (2020, 10, 13, 23)) < 1.0);
        let jupiter = search_relative_longitude(&orrery, Body::Jupiter, 0.0, &start).unwrap();
        assert!(days_from(&orrery, &jupiter, (2020, 7, 14, 8)) < 1.0);

        // seen from the Earth the planet is opposite the Sun
        let elong = elongation(&orrery, Body::Mars, &mars).unwrap();
        assert!(elong.ecliptic_separation > 179.0);
    }

    #[test]
    fn test_relative_longitude_reached() {
        let orrery = Orrery::new();
        let start = AstroTime::from_ut(-5000.0);
        for (body, target) in [(Body::Mercury, 120.0), (Body::Venus, 300.0), (Body::Saturn, 90.0)] {
            let time = search_relative_longitude(&orrery, body, target, &start).unwrap();
            assert!(time.ut() >= start.ut());
            let direction = if is_superior_planet(body) { 1.0 } else { -1.0 };
            let offset =
                relative_longitude_offset(&orrery, body, &time, direction, target).unwrap();
            assert!(offset.abs() < 1e-3, "{body}: {offset}");
        }
    }

    #[test]
    fn test_relative_longitude_invalid() {
        let orrery = Orrery::new();
        let start = AstroTime::from_ut(0.0);
        assert_eq!(
            search_relative_longitude(&orrery, Body::Earth, 0.0, &start),
            Err(OrreryError::EarthNotAllowed)
        );
        for body in [Body::Sun, Body::Moon] {
            assert_eq!(
                search_relative_longitude(&orrery, body, 0.0, &start),
                Err(OrreryError::InvalidBody(body))
            );
        }
    }
}
