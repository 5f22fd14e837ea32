//! # Transits of Mercury and Venus
//!
//! A transit is an inferior conjunction where the planet crosses the solar disc as seen
//! from the center of the Earth. It is modeled as the Earth entering the penumbra of the
//! planet's shadow cone: the transit lasts while the Earth's center is within the penumbra
//! radius of the shadow axis.

use log::debug;

use crate::bodies::Body;
use crate::constants::{Degree, Kilometer, MERCURY_RADIUS_KM, VENUS_RADIUS_KM};
use crate::coordinates::angle_from_sun;
use crate::events::elongation::search_relative_longitude;
use crate::events::shadow::{peak_shadow, planet_shadow, shadow_transition};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::time::AstroTime;

/// Conjunctions farther than this from the center of the Sun cannot be transits, degrees.
const THRESHOLD_ANGLE: Degree = 0.4;

/// Window around the peak searched for the first and last contacts, days.
const CONTACT_WINDOW_DAYS: f64 = 1.0;

const CONJUNCTION_SKIP_DAYS: f64 = 10.0;

const TRANSIT_SKIP_DAYS: f64 = 100.0;

/// Inferior conjunctions examined before giving up. Transits of Venus can be more than a
/// century apart, about 75 conjunctions.
const MAX_CONJUNCTIONS: usize = 200;

/// A transit seen from the center of the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitInfo {
    /// First contact with the solar disc
    pub start: AstroTime,
    /// Closest approach to the center of the Sun
    pub peak: AstroTime,
    /// Last contact
    pub finish: AstroTime,
    /// Angular distance between the centers at the peak, arcminutes
    pub separation: f64,
}

fn planet_radius(body: Body) -> Result<Kilometer, OrreryError> {
    match body {
        Body::Mercury => Ok(MERCURY_RADIUS_KM),
        Body::Venus => Ok(VENUS_RADIUS_KM),
        other => Err(OrreryError::InvalidBody(other)),
    }
}

/// Find the first transit of Mercury or Venus after a given time.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `body`: [`Body::Mercury`] or [`Body::Venus`].
/// * `start`: the search starts here.
///
/// Returns
/// --------
/// * [`TransitInfo`] for the transit.
/// * [`OrreryError::InvalidBody`] for any other body, [`OrreryError::NoConvergence`] if
///   no transit is found within 200 inferior conjunctions.
///
/// See also
/// ------------
/// * [`next_transit`] – iterate through the following transits.
pub fn search_transit(
    orrery: &Orrery,
    body: Body,
    start: &AstroTime,
) -> Result<TransitInfo, OrreryError> {
    let radius = planet_radius(body)?;
    let shadow_of = |t: &AstroTime| planet_shadow(orrery, body, radius, t);

    let mut search_time = *start;
    for _ in 0..MAX_CONJUNCTIONS {
        let conj = search_relative_longitude(orrery, body, 0.0, &search_time)?;
        if angle_from_sun(orrery, body, &conj)? < THRESHOLD_ANGLE {
            let shadow = peak_shadow(shadow_of, &conj, CONTACT_WINDOW_DAYS)?;
            if shadow.r < shadow.p {
                let before = shadow.time.add_days(-CONTACT_WINDOW_DAYS);
                let after = shadow.time.add_days(CONTACT_WINDOW_DAYS);
                let contact = |t: &AstroTime, direction: f64| -> Result<f64, OrreryError> {
                    let s = shadow_of(t)?;
                    Ok(direction * (s.r - s.p))
                };
                let start = shadow_transition(|t| contact(t, -1.0), &before, &shadow.time)?;
                let finish = shadow_transition(|t| contact(t, 1.0), &shadow.time, &after)?;
                let separation = 60.0 * angle_from_sun(orrery, body, &shadow.time)?;
                debug!("transit of {body:?} peaking at {} ({separation:.2}′)", shadow.time);
                return Ok(TransitInfo {
                    start,
                    peak: shadow.time,
                    finish,
                    separation,
                });
            }
        }
        search_time = conj.add_days(CONJUNCTION_SKIP_DAYS);
    }
    Err(OrreryError::NoConvergence(format!(
        "no transit of {body:?} within {MAX_CONJUNCTIONS} conjunctions of {start}"
    )))
}

/// The transit following the one that peaked at `prev_peak`.
pub fn next_transit(
    orrery: &Orrery,
    body: Body,
    prev_peak: &AstroTime,
) -> Result<TransitInfo, OrreryError> {
    search_transit(orrery, body, &prev_peak.add_days(TRANSIT_SKIP_DAYS))
}

#[cfg(test)]
mod transit_test {
    use super::*;

    fn assert_near(orrery: &Orrery, time: &AstroTime, expected: (i32, u32, u32, u32, u32)) {
        let (year, month, day, hour, minute) = expected;
        let almanac = orrery.make_time(year, month, day, hour, minute, 0.0).unwrap();
        let minutes = (time.ut() - almanac.ut()).abs() * 1440.0;
        assert!(minutes < 5.0, "{time} is {minutes} min from {almanac}");
    }

    #[test]
    fn test_mercury_transit_2019() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2019, 1, 1, 0, 0, 0.0).unwrap();
        let transit = search_transit(&orrery, Body::Mercury, &start).unwrap();
        assert_near(&orrery, &transit.start, (2019, 11, 11, 12, 35));
        assert_near(&orrery, &transit.peak, (2019, 11, 11, 15, 20));
        assert_near(&orrery, &transit.finish, (2019, 11, 11, 18, 4));
        assert!(transit.separation < 2.0, "{}", transit.separation);
    }

    #[test]
    fn test_venus_transit_2012() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2000, 1, 1, 0, 0, 0.0).unwrap();
        let first = search_transit(&orrery, Body::Venus, &start).unwrap();
        assert_near(&orrery, &first.peak, (2004, 6, 8, 8, 20));

        let transit = next_transit(&orrery, Body::Venus, &first.peak).unwrap();
        assert_near(&orrery, &transit.start, (2012, 6, 5, 22, 9));
        assert_near(&orrery, &transit.peak, (2012, 6, 6, 1, 29));
        assert_near(&orrery, &transit.finish, (2012, 6, 6, 4, 49));
        // the 2012 transit crossed the northern part of the disc
        assert!(transit.separation > 9.0 && transit.separation < 10.5);
    }

    #[test]
    fn test_invalid_body() {
        let orrery = Orrery::new();
        let start = AstroTime::from_ut(0.0);
        assert_eq!(
            search_transit(&orrery, Body::Mars, &start),
            Err(OrreryError::InvalidBody(Body::Mars))
        );
    }
}
