//! # Apsides
//!
//! Closest (pericenter) and farthest (apocenter) points of the Moon's orbit around the
//! Earth and of the planets' orbits around the Sun.
//!
//! For the Moon and for most planets the distance curve is smooth, so an apsis is a zero of
//! the distance's rate of change. The slope is sampled at a fixed step until it changes sign,
//! and [`crate::search::search`] homes in on the zero.
//!
//! Neptune and Pluto are far enough out that the Sun's wobble around the barycenter leaves
//! several local extremes near each apsis, which makes the slope unusable. For these two the
//! distance itself is sampled over most of an orbit, and the extremes are refined by
//! repeatedly narrowing a grid around the best sample.

use itertools::{Itertools, MinMaxResult};
use log::{debug, warn};

use crate::bodies::{helio_distance, planet_orbital_period, Body};
use crate::constants::{Au, Kilometer, KM_PER_AU, MEAN_SYNODIC_MONTH, MINUTES_PER_DAY};
use crate::moon::lunar_position;
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::search::{search, SearchOptions};
use crate::time::AstroTime;

/// Days between slope samples of the lunar distance.
const LUNAR_STEP_DAYS: f64 = 5.0;

/// Days to skip past a lunar apsis before looking for the next one.
const LUNAR_SKIP_DAYS: f64 = 11.0;

/// Time step of the finite-difference distance slope, days.
const SLOPE_DT_DAYS: f64 = 0.001;

const APSIS_TOLERANCE_SECONDS: f64 = 1.0;

/// Samples spread over the brute-force window.
const BRUTE_FORCE_SAMPLES: usize = 100;

/// Grid points of each narrowing pass.
const EXTREME_GRID_POINTS: usize = 10;

const EXTREME_MAX_PASSES: usize = 50;

/// Pericenter or apocenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApsisKind {
    Pericenter,
    Apocenter,
}

impl ApsisKind {
    fn opposite(self) -> Self {
        match self {
            ApsisKind::Pericenter => ApsisKind::Apocenter,
            ApsisKind::Apocenter => ApsisKind::Pericenter,
        }
    }
}

/// An apsis event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apsis {
    pub time: AstroTime,
    pub kind: ApsisKind,
    pub dist_au: Au,
    pub dist_km: Kilometer,
}

impl Apsis {
    fn new(time: AstroTime, kind: ApsisKind, dist_au: Au) -> Self {
        Apsis {
            time,
            kind,
            dist_au,
            dist_km: dist_au * KM_PER_AU,
        }
    }
}

fn moon_distance_km(time: &AstroTime) -> Kilometer {
    lunar_position(time.tt()).dist_km
}

/// Central-difference slope of a distance function, positive while the body recedes.
fn distance_slope<F>(distance: &F, time: &AstroTime) -> Result<f64, OrreryError>
where
    F: Fn(&AstroTime) -> Result<f64, OrreryError>,
{
    let r1 = distance(&time.add_days(-SLOPE_DT_DAYS / 2.0))?;
    let r2 = distance(&time.add_days(SLOPE_DT_DAYS / 2.0))?;
    Ok((r2 - r1) / SLOPE_DT_DAYS)
}

/// Step through time until the distance slope changes sign, then solve for the apsis time.
fn slope_scan<F>(
    distance: F,
    start: &AstroTime,
    step_days: f64,
    span_days: f64,
) -> Result<Option<(AstroTime, ApsisKind)>, OrreryError>
where
    F: Fn(&AstroTime) -> Result<f64, OrreryError>,
{
    let options = SearchOptions::with_tolerance(APSIS_TOLERANCE_SECONDS);
    let mut t1 = *start;
    let mut m1 = distance_slope(&distance, &t1)?;
    let steps = (span_days / step_days).ceil() as usize;
    for _ in 0..steps {
        let t2 = t1.add_days(step_days);
        let m2 = distance_slope(&distance, &t2)?;
        if m1 * m2 <= 0.0 {
            let (kind, sign) = if m1 < 0.0 || m2 > 0.0 {
                (ApsisKind::Pericenter, 1.0)
            } else if m1 > 0.0 || m2 < 0.0 {
                (ApsisKind::Apocenter, -1.0)
            } else {
                return Err(OrreryError::InternalError(
                    "distance slope vanished at both ends of an apsis bracket".to_string(),
                ));
            };
            let time = search(
                |t| Ok(sign * distance_slope(&distance, t)?),
                &t1,
                &t2,
                &options,
            )?;
            return Ok(time.map(|t| (t, kind)));
        }
        t1 = t2;
        m1 = m2;
    }
    Ok(None)
}

/// Find the first lunar perigee or apogee after a given time.
///
/// Returns
/// --------
/// * The [`Apsis`] with the geocentric distance of the Moon, or
///   [`OrreryError::InternalError`] if no apsis shows up within two synodic months.
///
/// See also
/// ------------
/// * [`next_lunar_apsis`] – iterate through the following apsides.
pub fn search_lunar_apsis(start: &AstroTime) -> Result<Apsis, OrreryError> {
    let found = slope_scan(
        |t| Ok(moon_distance_km(t)),
        start,
        LUNAR_STEP_DAYS,
        2.0 * MEAN_SYNODIC_MONTH,
    )?;
    let (time, kind) = found.ok_or_else(|| {
        warn!("no lunar apsis within two synodic months of {start}");
        OrreryError::InternalError(format!("lunar apsis not found after {start}"))
    })?;
    Ok(Apsis::new(time, kind, moon_distance_km(&time) / KM_PER_AU))
}

/// The lunar apsis following `previous`, which must be of the opposite kind.
pub fn next_lunar_apsis(previous: &Apsis) -> Result<Apsis, OrreryError> {
    let next = search_lunar_apsis(&previous.time.add_days(LUNAR_SKIP_DAYS))?;
    if next.kind != previous.kind.opposite() {
        return Err(OrreryError::InternalError(format!(
            "lunar {:?} followed by {:?} at {}",
            previous.kind, next.kind, next.time
        )));
    }
    Ok(next)
}

/// Refine an extreme of the heliocentric distance inside `[start, start + dayspan]`.
///
/// Each pass samples a grid, keeps the best point and narrows the window to its two
/// neighbors, until the grid spacing is below one minute.
fn planet_extreme(
    orrery: &Orrery,
    body: Body,
    kind: ApsisKind,
    start: &AstroTime,
    dayspan: f64,
) -> Result<Apsis, OrreryError> {
    let direction = match kind {
        ApsisKind::Apocenter => 1.0,
        ApsisKind::Pericenter => -1.0,
    };
    let mut start = *start;
    let mut dayspan = dayspan;
    for _ in 0..EXTREME_MAX_PASSES {
        let interval = dayspan / (EXTREME_GRID_POINTS - 1) as f64;
        if interval < 1.0 / MINUTES_PER_DAY {
            let time = start.add_days(interval / 2.0);
            return Ok(Apsis::new(time, kind, helio_distance(orrery, body, &time)?));
        }
        let mut best_i = 0;
        let mut best_dist = f64::NEG_INFINITY;
        for i in 0..EXTREME_GRID_POINTS {
            let time = start.add_days(i as f64 * interval);
            let dist = direction * helio_distance(orrery, body, &time)?;
            if dist > best_dist {
                best_i = i;
                best_dist = dist;
            }
        }
        start = start.add_days((best_i as f64 - 1.0) * interval);
        dayspan = 2.0 * interval;
    }
    Err(OrreryError::NoConvergence(format!(
        "{kind:?} of {body} near {start}"
    )))
}

/// Sample the distance from 30° of orbit before `start` to 270° after it and refine both
/// extremes; return the earliest one not before `start`.
fn brute_search_planet_apsis(
    orrery: &Orrery,
    body: Body,
    start: &AstroTime,
) -> Result<Apsis, OrreryError> {
    let period = planet_orbital_period(body)?;
    let t1 = start.add_days(period * (-30.0 / 360.0));
    let t2 = start.add_days(period * (270.0 / 360.0));
    let interval = (t2.ut() - t1.ut()) / (BRUTE_FORCE_SAMPLES - 1) as f64;

    let samples = (0..BRUTE_FORCE_SAMPLES)
        .map(|i| {
            let time = t1.add_days(i as f64 * interval);
            Ok((time, helio_distance(orrery, body, &time)?))
        })
        .collect::<Result<Vec<_>, OrreryError>>()?;
    let ((t_min, min_dist), (t_max, max_dist)) =
        match samples.iter().minmax_by(|a, b| a.1.total_cmp(&b.1)) {
            MinMaxResult::MinMax(&min, &max) => (min, max),
            _ => {
                return Err(OrreryError::InternalError(format!(
                    "{body} distance samples have no spread"
                )))
            }
        };
    debug!("{body} brute-force apsis samples: min {min_dist} AU, max {max_dist} AU");

    let perihelion = planet_extreme(
        orrery,
        body,
        ApsisKind::Pericenter,
        &t_min.add_days(-2.0 * interval),
        4.0 * interval,
    )?;
    let aphelion = planet_extreme(
        orrery,
        body,
        ApsisKind::Apocenter,
        &t_max.add_days(-2.0 * interval),
        4.0 * interval,
    )?;

    let candidates = [perihelion, aphelion];
    candidates
        .into_iter()
        .filter(|apsis| apsis.time.tt() >= start.tt())
        .min_by(|a, b| a.time.tt().total_cmp(&b.time.tt()))
        .ok_or_else(|| {
            warn!("no apsis of {body} in the sampled window after {start}");
            OrreryError::InternalError(format!("apsis of {body} not found after {start}"))
        })
}

/// Find the first perihelion or aphelion of a planet after a given time.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `body`: a planet, the Earth included, or Pluto.
/// * `start`: the search starts here.
///
/// Returns
/// --------
/// * The [`Apsis`] with the heliocentric distance.
/// * [`OrreryError::InvalidBody`] for the Sun, the Moon, barycenters and stars.
///
/// See also
/// ------------
/// * [`next_planet_apsis`] – iterate through the following apsides.
pub fn search_planet_apsis(
    orrery: &Orrery,
    body: Body,
    start: &AstroTime,
) -> Result<Apsis, OrreryError> {
    let period = planet_orbital_period(body)?;
    if matches!(body, Body::Neptune | Body::Pluto) {
        return brute_search_planet_apsis(orrery, body, start);
    }
    let found = slope_scan(
        |t| helio_distance(orrery, body, t),
        start,
        period / 6.0,
        2.0 * period,
    )?;
    let (time, kind) = found.ok_or_else(|| {
        warn!("no apsis of {body} within two orbits of {start}");
        OrreryError::InternalError(format!("apsis of {body} not found after {start}"))
    })?;
    Ok(Apsis::new(time, kind, helio_distance(orrery, body, &time)?))
}

/// The apsis of `body` following `previous`, which must be of the opposite kind.
pub fn next_planet_apsis(
    orrery: &Orrery,
    body: Body,
    previous: &Apsis,
) -> Result<Apsis, OrreryError> {
    let skip = 0.25 * planet_orbital_period(body)?;
    let next = search_planet_apsis(orrery, body, &previous.time.add_days(skip))?;
    if next.kind != previous.kind.opposite() {
        return Err(OrreryError::InternalError(format!(
            "{body} {:?} followed by {:?} at {}",
            previous.kind, next.kind, next.time
        )));
    }
    Ok(next)
}

#[cfg(test)]
mod apsis_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lunar_apsides_january_2001() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2001, 1, 1, 0, 0, 0.0).unwrap();

        let perigee = search_lunar_apsis(&start).unwrap();
        assert_eq!(perigee.kind, ApsisKind::Pericenter);
        let expected = orrery.make_time(2001, 1, 10, 8, 59, 0.0).unwrap();
        assert!((perigee.time.ut() - expected.ut()).abs() * 1440.0 < 60.0);
        assert_abs_diff_eq!(perigee.dist_km, 357_132.0, epsilon = 100.0);

        let apogee = next_lunar_apsis(&perigee).unwrap();
        assert_eq!(apogee.kind, ApsisKind::Apocenter);
        let expected = orrery.make_time(2001, 1, 24, 19, 2, 0.0).unwrap();
        assert!((apogee.time.ut() - expected.ut()).abs() * 1440.0 < 60.0);
        assert_abs_diff_eq!(apogee.dist_km, 406_565.0, epsilon = 100.0);
    }

    #[test]
    fn test_lunar_apsides_alternate() {
        let mut apsis = search_lunar_apsis(&AstroTime::from_ut(5000.0)).unwrap();
        for _ in 0..30 {
            let next = next_lunar_apsis(&apsis).unwrap();
            let gap = next.time.ut() - apsis.time.ut();
            assert!(gap > 11.0 && gap < 18.0, "gap {gap}");
            assert!(next.dist_km > 350_000.0 && next.dist_km < 410_000.0);
            apsis = next;
        }
    }

    #[test]
    fn test_earth_perihelion_2001() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2001, 1, 1, 0, 0, 0.0).unwrap();
        let apsis = search_planet_apsis(&orrery, Body::Earth, &start).unwrap();
        assert_eq!(apsis.kind, ApsisKind::Pericenter);
        assert_abs_diff_eq!(apsis.time.ut(), start.ut() + 3.4, epsilon = 0.3);
        assert_abs_diff_eq!(apsis.dist_au, 0.983_3, epsilon = 1e-3);

        let aphelion = next_planet_apsis(&orrery, Body::Earth, &apsis).unwrap();
        assert_eq!(aphelion.kind, ApsisKind::Apocenter);
        assert_abs_diff_eq!(aphelion.dist_au, 1.016_7, epsilon = 1e-3);
    }

    #[test]
    fn test_planet_apsides_alternate() {
        let orrery = Orrery::new();
        let start = AstroTime::from_ut(0.0);
        for body in [Body::Mercury, Body::Venus, Body::Mars] {
            let first = search_planet_apsis(&orrery, body, &start).unwrap();
            let second = next_planet_apsis(&orrery, body, &first).unwrap();
            let half_orbit = 0.5 * planet_orbital_period(body).unwrap();
            let gap = second.time.ut() - first.time.ut();
            assert!((gap - half_orbit).abs() < 0.1 * half_orbit, "{body}: gap {gap}");
        }
    }

    #[test]
    fn test_neptune_brute_force() {
        let orrery = Orrery::new();
        let start = AstroTime::from_ut(0.0);
        let apsis = search_planet_apsis(&orrery, Body::Neptune, &start).unwrap();
        assert!(apsis.time.tt() >= start.tt());
        assert!(apsis.dist_au > 29.7 && apsis.dist_au < 30.5, "{}", apsis.dist_au);
    }

    #[test]
    fn test_pluto_perihelion_1989() {
        let orrery = Orrery::new();
        let start = orrery.make_time(1980, 1, 1, 0, 0, 0.0).unwrap();
        let apsis = search_planet_apsis(&orrery, Body::Pluto, &start).unwrap();
        assert_eq!(apsis.kind, ApsisKind::Pericenter);
        let expected = orrery.make_time(1989, 9, 5, 0, 0, 0.0).unwrap();
        // Pluto's perihelion is shallow and the barycentric wobble shifts it by weeks
        assert!((apsis.time.ut() - expected.ut()).abs() < 120.0);
        assert_abs_diff_eq!(apsis.dist_au, 29.66, epsilon = 0.05);
    }

    #[test]
    fn test_invalid_bodies() {
        let orrery = Orrery::new();
        let start = AstroTime::from_ut(0.0);
        for body in [Body::Sun, Body::Moon, Body::Ssb] {
            assert_eq!(
                search_planet_apsis(&orrery, body, &start),
                Err(OrreryError::InvalidBody(body))
            );
        }
    }
}
