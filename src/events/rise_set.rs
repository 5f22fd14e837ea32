//! # Hour angles, culminations, rising and setting
//!
//! All searches here are driven by the body's hour angle:
//!
//! - [`search_hour_angle`] steps sidereal time until the body reaches a given hour angle
//!   (0 h is the upper culmination, 12 h the lower one),
//! - [`search_rise_set`] and [`search_altitude`] bracket each altitude crossing between a
//!   lower and an upper culmination, then call [`crate::search::search`] inside the bracket.
//!
//! Rising and setting use the standard almanac definition: the top of the disc touches the
//! horizon under 34′ of refraction. The body's angular radius is included for the Sun and
//! the Moon.

use log::{trace, warn};

use crate::bodies::{Aberration, Body};
use crate::constants::{
    Au, Degree, Hour, DEGRAD, KM_PER_AU, MOON_EQUATORIAL_RADIUS_KM, REFRACTION_NEAR_HORIZON,
    SOLAR_DAYS_PER_SIDEREAL_DAY, SUN_RADIUS_KM,
};
use crate::conversion::normalize_hours;
use crate::coordinates::equator;
use crate::observers::{horizon, EquatorEpoch, Observer, Refraction, Topocentric};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::search::{search, SearchOptions};
use crate::time::AstroTime;

const HOUR_ANGLE_MAX_ITERATIONS: usize = 20;

/// Sidereal seconds of hour-angle error accepted by [`search_hour_angle`].
const HOUR_ANGLE_TOLERANCE_SECONDS: f64 = 0.1;

const ALTITUDE_TOLERANCE_SECONDS: f64 = 0.01;

/// Whether the body is crossing the horizon upward or downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Rise,
    Set,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Rise => 1.0,
            Direction::Set => -1.0,
        }
    }

    /// Hour angles of the culminations bracketing the event: (before, after).
    fn bracket_hour_angles(self) -> (Hour, Hour) {
        match self {
            Direction::Rise => (12.0, 0.0),
            Direction::Set => (0.0, 12.0),
        }
    }
}

/// A body reaching a given hour angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourAngleEvent {
    pub time: AstroTime,
    /// Position in the sky at `time`, with normal refraction
    pub hor: Topocentric,
}

/// Hour angle of a body for an observer, in sidereal hours `[0, 24)`.
///
/// Zero means the body is on the observer's meridian, 12 that it is on the
/// opposite meridian. The position is taken on the true equator of date with aberration.
pub fn hour_angle(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
    observer: &Observer,
) -> Result<Hour, OrreryError> {
    let gast = orrery.sidereal_time(time);
    let ofdate = equator(
        orrery,
        body,
        time,
        observer,
        EquatorEpoch::OfDate,
        Aberration::Corrected,
    )?;
    Ok(normalize_hours(observer.longitude() / 15.0 + gast - ofdate.ra))
}

/// Find when a body next (or last) reaches a given hour angle.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `body`: any body except the Earth.
/// * `observer`: the site whose meridian defines the hour angle.
/// * `hour_angle`: target in sidereal hours, `[0, 24)`.
/// * `start`: the search starts here.
/// * `direction`: positive searches forward in time, negative backward.
///
/// Returns
/// --------
/// * The event time and the body's refracted horizontal position.
/// * [`OrreryError::EarthNotAllowed`], [`OrreryError::InvalidParameter`] for an hour angle
///   outside `[0, 24)` or a zero direction, [`OrreryError::NoConvergence`] if the sidereal
///   time correction does not settle.
///
/// See also
/// ------------
/// * [`hour_angle`] – the quantity being solved for.
pub fn search_hour_angle(
    orrery: &Orrery,
    body: Body,
    observer: &Observer,
    hour_angle: Hour,
    start: &AstroTime,
    direction: i32,
) -> Result<HourAngleEvent, OrreryError> {
    if body == Body::Earth {
        return Err(OrreryError::EarthNotAllowed);
    }
    if !(0.0..24.0).contains(&hour_angle) {
        return Err(OrreryError::InvalidParameter(format!(
            "hour angle {hour_angle} outside [0, 24)"
        )));
    }
    if direction == 0 {
        return Err(OrreryError::InvalidParameter(
            "hour angle search direction must be non-zero".to_string(),
        ));
    }

    let mut time = *start;
    for iter in 0..HOUR_ANGLE_MAX_ITERATIONS {
        let gast = orrery.sidereal_time(&time);
        let ofdate = equator(
            orrery,
            body,
            &time,
            observer,
            EquatorEpoch::OfDate,
            Aberration::Corrected,
        )?;

        let mut delta_hours = (hour_angle + ofdate.ra - observer.longitude() / 15.0 - gast) % 24.0;
        if iter == 0 {
            // the first step always goes in the requested direction
            if direction > 0 && delta_hours < 0.0 {
                delta_hours += 24.0;
            } else if direction < 0 && delta_hours > 0.0 {
                delta_hours -= 24.0;
            }
        } else if delta_hours < -12.0 {
            delta_hours += 24.0;
        } else if delta_hours > 12.0 {
            delta_hours -= 24.0;
        }

        trace!("hour angle pass {iter} for {body}: delta = {delta_hours:e} h");
        if delta_hours.abs() * 3600.0 < HOUR_ANGLE_TOLERANCE_SECONDS {
            let hor = horizon(orrery, &time, observer, ofdate.ra, ofdate.dec, Refraction::Normal);
            return Ok(HourAngleEvent { time, hor });
        }
        time = time.add_days(delta_hours / 24.0 * SOLAR_DAYS_PER_SIDEREAL_DAY);
    }
    Err(OrreryError::NoConvergence(format!(
        "hour angle {hour_angle} of {body} from {start}"
    )))
}

/// Signed distance of the body's upper limb from a target altitude.
struct AltitudeCrossing<'a> {
    orrery: &'a Orrery,
    body: Body,
    observer: &'a Observer,
    direction: Direction,
    body_radius: Au,
    target_altitude: Degree,
}

impl AltitudeCrossing<'_> {
    /// Positive once the event has happened, negative before.
    fn error(&self, time: &AstroTime) -> Result<f64, OrreryError> {
        let ofdate = equator(
            self.orrery,
            self.body,
            time,
            self.observer,
            EquatorEpoch::OfDate,
            Aberration::Corrected,
        )?;
        let hor = horizon(
            self.orrery,
            time,
            self.observer,
            ofdate.ra,
            ofdate.dec,
            Refraction::None,
        );
        let altitude = hor.altitude + DEGRAD * (self.body_radius / ofdate.dist).asin();
        Ok(self.direction.sign() * (altitude - self.target_altitude))
    }

    fn culmination(
        &self,
        hour_angle: Hour,
        time: &AstroTime,
        step: i32,
    ) -> Result<AstroTime, OrreryError> {
        Ok(search_hour_angle(self.orrery, self.body, self.observer, hour_angle, time, step)?.time)
    }

    fn solve(
        &self,
        before: &AstroTime,
        after: &AstroTime,
    ) -> Result<Option<AstroTime>, OrreryError> {
        search(
            |t| self.error(t),
            before,
            after,
            &SearchOptions::with_tolerance(ALTITUDE_TOLERANCE_SECONDS),
        )
    }

    fn find(&self, start: &AstroTime, limit_days: f64) -> Result<Option<AstroTime>, OrreryError> {
        if !limit_days.is_finite() {
            return Err(OrreryError::InvalidParameter(format!(
                "altitude search limit {limit_days} days is not finite"
            )));
        }
        let (ha_before, ha_after) = self.direction.bracket_hour_angles();
        let limit_ut = start.ut() + limit_days;
        // one pair of culminations per day, plus the partial windows at both ends
        let max_windows = (limit_days.abs().ceil() as usize).saturating_add(2);

        if limit_days < 0.0 {
            let mut time_after = *start;
            let mut alt_after = self.error(&time_after)?;
            for _ in 0..max_windows {
                let time_before = self.culmination(ha_before, &time_after, -1)?;
                let alt_before = self.error(&time_before)?;
                if alt_before <= 0.0 && alt_after > 0.0 {
                    if let Some(event) = self.solve(&time_before, &time_after)? {
                        return Ok((event.ut() >= limit_ut).then_some(event));
                    }
                }
                if time_before.ut() <= limit_ut {
                    return Ok(None);
                }
                time_after = self.culmination(ha_after, &time_before, -1)?;
                alt_after = self.error(&time_after)?;
            }
        } else {
            let mut time_before = *start;
            let mut alt_before = self.error(&time_before)?;
            for _ in 0..max_windows {
                let time_after = self.culmination(ha_after, &time_before, 1)?;
                let alt_after = self.error(&time_after)?;
                if alt_before <= 0.0 && alt_after > 0.0 {
                    if let Some(event) = self.solve(&time_before, &time_after)? {
                        return Ok((event.ut() <= limit_ut).then_some(event));
                    }
                }
                time_before = self.culmination(ha_before, &time_after, 1)?;
                if time_before.ut() >= limit_ut {
                    return Ok(None);
                }
                alt_before = self.error(&time_before)?;
            }
        }
        warn!(
            "{:?} of {} not bracketed within {limit_days} days of {start}",
            self.direction, self.body
        );
        Ok(None)
    }
}

/// Find the next (or previous) rising or setting of a body.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `body`: any body except the Earth; star slots must be defined.
/// * `observer`: the site.
/// * `direction`: [`Direction::Rise`] or [`Direction::Set`].
/// * `start`: the search starts here.
/// * `limit_days`: how far to look; a negative value searches backward in time.
///
/// Returns
/// --------
/// * `Ok(Some(time))` of the event, `Ok(None)` when it does not happen within the limit
///   (e.g. polar day or night).
///
/// See also
/// ------------
/// * [`search_altitude`] – same search for an arbitrary altitude of the body's center.
pub fn search_rise_set(
    orrery: &Orrery,
    body: Body,
    observer: &Observer,
    direction: Direction,
    start: &AstroTime,
    limit_days: f64,
) -> Result<Option<AstroTime>, OrreryError> {
    if body == Body::Earth {
        return Err(OrreryError::EarthNotAllowed);
    }
    let body_radius_km = match body {
        Body::Sun => SUN_RADIUS_KM,
        Body::Moon => MOON_EQUATORIAL_RADIUS_KM,
        _ => 0.0,
    };
    AltitudeCrossing {
        orrery,
        body,
        observer,
        direction,
        body_radius: body_radius_km / KM_PER_AU,
        target_altitude: -REFRACTION_NEAR_HORIZON,
    }
    .find(start, limit_days)
}

/// Find when the center of a body crosses a given airless altitude.
///
/// Typical use is twilight: the Sun at −6°, −12° or −18° for civil, nautical and
/// astronomical twilight.
///
/// Returns
/// --------
/// * [`OrreryError::InvalidParameter`] for an altitude outside `[-90, 90]`; otherwise as
///   [`search_rise_set`].
pub fn search_altitude(
    orrery: &Orrery,
    body: Body,
    observer: &Observer,
    direction: Direction,
    start: &AstroTime,
    limit_days: f64,
    altitude: Degree,
) -> Result<Option<AstroTime>, OrreryError> {
    if body == Body::Earth {
        return Err(OrreryError::EarthNotAllowed);
    }
    if !(-90.0..=90.0).contains(&altitude) {
        return Err(OrreryError::InvalidParameter(format!(
            "altitude {altitude} outside [-90, 90]"
        )));
    }
    AltitudeCrossing {
        orrery,
        body,
        observer,
        direction,
        body_radius: 0.0,
        target_altitude: altitude,
    }
    .find(start, limit_days)
}

#[cfg(test)]
mod rise_set_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn minutes_between(a: &AstroTime, b: &AstroTime) -> f64 {
        (a.ut() - b.ut()).abs() * 1440.0
    }

    #[test]
    fn test_search_hour_angle_hits_target() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2023, 2, 11, 0, 0, 0.0).unwrap();
        for longitude in [-170.0, -45.0, 0.0, 100.0] {
            let observer = Observer::new(35.0, longitude, 0.0).unwrap();
            for target in [0.0, 6.5, 12.0, 21.0] {
                for body in [Body::Sun, Body::Moon, Body::Jupiter] {
                    let event =
                        search_hour_angle(&orrery, body, &observer, target, &start, 1).unwrap();
                    assert!(event.time.ut() >= start.ut());
                    assert!(event.time.ut() - start.ut() < 1.1);
                    let ha = hour_angle(&orrery, body, &event.time, &observer).unwrap();
                    let diff = (ha - target + 12.0).rem_euclid(24.0) - 12.0;
                    assert!(diff.abs() * 3600.0 < 0.1, "{body} ha {ha} target {target}");
                }
            }
        }
    }

    #[test]
    fn test_search_hour_angle_backward() {
        let orrery = Orrery::new();
        let start = AstroTime::from_ut(8500.3);
        let observer = Observer::new(-30.0, 20.0, 0.0).unwrap();
        let event = search_hour_angle(&orrery, Body::Mars, &observer, 3.0, &start, -1).unwrap();
        assert!(event.time.ut() < start.ut());
        assert!(start.ut() - event.time.ut() < 1.1);
    }

    #[test]
    fn test_search_hour_angle_invalid() {
        let orrery = Orrery::new();
        let start = AstroTime::from_ut(0.0);
        let observer = Observer::new(0.0, 0.0, 0.0).unwrap();
        assert_eq!(
            search_hour_angle(&orrery, Body::Earth, &observer, 0.0, &start, 1),
            Err(OrreryError::EarthNotAllowed)
        );
        assert!(matches!(
            search_hour_angle(&orrery, Body::Sun, &observer, 24.0, &start, 1),
            Err(OrreryError::InvalidParameter(_))
        ));
        assert!(matches!(
            search_hour_angle(&orrery, Body::Sun, &observer, 1.0, &start, 0),
            Err(OrreryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_sirius_rise_culmination_set() {
        let mut orrery = Orrery::new();
        orrery.define_star(Body::Star1, 6.7525, -16.7183, 8.6).unwrap();
        let observer = Observer::new(25.77, -80.19, 0.0).unwrap();

        for (day, rise, culm, set) in [
            (21, (2, 37), (8, 6), (13, 34)),
            (25, (2, 22), (7, 50), (13, 18)),
        ] {
            let start = orrery.make_time(2022, 11, day, 0, 0, 0.0).unwrap();
            let expected = |(h, m): (u32, u32)| orrery.make_time(2022, 11, day, h, m, 0.0).unwrap();

            let rise_time =
                search_rise_set(&orrery, Body::Star1, &observer, Direction::Rise, &start, 1.0)
                    .unwrap()
                    .unwrap();
            assert!(minutes_between(&rise_time, &expected(rise)) < 1.0);

            let culm_time =
                search_hour_angle(&orrery, Body::Star1, &observer, 0.0, &start, 1).unwrap();
            assert!(minutes_between(&culm_time.time, &expected(culm)) < 1.0);
            // 16.7 degrees south of the equator, seen from 25.8 degrees north
            assert_abs_diff_eq!(culm_time.hor.altitude, 90.0 - 25.77 - 16.72, epsilon = 0.1);

            let set_time =
                search_rise_set(&orrery, Body::Star1, &observer, Direction::Set, &start, 1.0)
                    .unwrap()
                    .unwrap();
            assert!(minutes_between(&set_time, &expected(set)) < 1.0);
        }
    }

    #[test]
    fn test_moon_rise_forward_matches_backward() {
        let orrery = Orrery::new();
        let observer = Observer::new(28.6, -81.2, 44.0).unwrap();
        let start = orrery.make_time(1990, 1, 1, 0, 0, 0.0).unwrap();
        for direction in [Direction::Rise, Direction::Set] {
            let mut time = start;
            for _ in 0..300 {
                let forward =
                    search_rise_set(&orrery, Body::Moon, &observer, direction, &time, 2.0)
                        .unwrap()
                        .unwrap();
                let later = forward.add_days(0.01);
                let backward =
                    search_rise_set(&orrery, Body::Moon, &observer, direction, &later, -2.0)
                        .unwrap()
                        .unwrap();
                let diff = (forward.ut() - backward.ut()).abs() * 86_400.0;
                assert!(diff < 0.1, "{direction:?} at {forward}: {diff} s");
                time = later;
            }
            // 300 events of one kind span about ten lunations
            assert!(time.ut() - start.ut() > 290.0);
        }
    }

    #[test]
    fn test_huge_search_limit() {
        let orrery = Orrery::new();
        let observer = Observer::new(80.0, 15.0, 0.0).unwrap();
        let start = orrery.make_time(2021, 11, 20, 0, 0, 0.0).unwrap();
        let rise =
            search_rise_set(&orrery, Body::Sun, &observer, Direction::Rise, &start, 1.0e30)
                .unwrap()
                .unwrap();
        // the polar night at 80 degrees north ends in February
        assert!(rise.ut() > start.ut() + 60.0);
        assert!(rise.ut() < start.ut() + 120.0);
    }

    #[test]
    fn test_twilight_ordering() {
        let orrery = Orrery::new();
        let observer = Observer::new(52.0, 0.0, 0.0).unwrap();
        let start = orrery.make_time(2022, 3, 20, 12, 0, 0.0).unwrap();
        let sunset = search_rise_set(&orrery, Body::Sun, &observer, Direction::Set, &start, 1.0)
            .unwrap()
            .unwrap();
        let mut previous = sunset;
        for altitude in [-6.0, -12.0, -18.0] {
            let dusk = search_altitude(
                &orrery,
                Body::Sun,
                &observer,
                Direction::Set,
                &start,
                1.0,
                altitude,
            )
            .unwrap()
            .unwrap();
            assert!(dusk.ut() > previous.ut());
            // roughly 35 to 45 minutes per six degrees at the equinox
            assert!(minutes_between(&dusk, &previous) < 60.0);

            let ofdate = equator(
                &orrery,
                Body::Sun,
                &dusk,
                &observer,
                EquatorEpoch::OfDate,
                Aberration::Corrected,
            )
            .unwrap();
            let hor = horizon(&orrery, &dusk, &observer, ofdate.ra, ofdate.dec, Refraction::None);
            assert_abs_diff_eq!(hor.altitude, altitude, epsilon = 1e-3);
            previous = dusk;
        }
    }

    #[test]
    fn test_polar_night_has_no_sunrise() {
        let orrery = Orrery::new();
        let observer = Observer::new(80.0, 15.0, 0.0).unwrap();
        let start = orrery.make_time(2021, 12, 1, 0, 0, 0.0).unwrap();
        let rise =
            search_rise_set(&orrery, Body::Sun, &observer, Direction::Rise, &start, 5.0).unwrap();
        assert_eq!(rise, None);
        assert!(matches!(
            search_altitude(&orrery, Body::Sun, &observer, Direction::Rise, &start, 1.0, 91.0),
            Err(OrreryError::InvalidParameter(_))
        ));
        assert!(matches!(
            search_rise_set(&orrery, Body::Sun, &observer, Direction::Rise, &start, f64::NAN),
            Err(OrreryError::InvalidParameter(_))
        ));
    }
}
