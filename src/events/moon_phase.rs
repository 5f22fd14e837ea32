//! # Lunar phases
//!
//! The phase angle is the geocentric ecliptic longitude of the Moon minus that of the Sun:
//! 0° new moon, 90° first quarter, 180° full moon, 270° third quarter.
//!
//! Because the Moon gains about 12.2° per day on the Sun, the time of a given phase can be
//! predicted from the mean synodic month to within a day and a half. The search brackets
//! that prediction and lets [`crate::search::search`] refine it.

use crate::bodies::Body;
use crate::constants::{Degree, MEAN_SYNODIC_MONTH};
use crate::conversion::longitude_offset;
use crate::coordinates::pair_longitude;
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::search::{search, SearchOptions};
use crate::time::AstroTime;

/// Half-width of the window placed around the mean-motion prediction, days.
const PHASE_UNCERTAINTY_DAYS: f64 = 1.5;

const PHASE_TOLERANCE_SECONDS: f64 = 0.1;

/// Days to skip past a quarter before looking for the next one.
const QUARTER_SKIP_DAYS: f64 = 6.0;

/// A lunar quarter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonQuarter {
    /// 0 new moon, 1 first quarter, 2 full moon, 3 third quarter
    pub quarter: u8,
    pub time: AstroTime,
}

/// Phase angle of the Moon in degrees, `[0, 360)`.
pub fn moon_phase(orrery: &Orrery, time: &AstroTime) -> Result<Degree, OrreryError> {
    pair_longitude(orrery, Body::Moon, Body::Sun, time)
}

/// Find when the Moon reaches a given phase angle.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `target_lon`: phase angle in degrees (see [`moon_phase`]).
/// * `start`: the search starts here.
/// * `limit_days`: how far to search; negative values search backward in time.
///
/// Returns
/// --------
/// * `Ok(Some(time))` of the first such phase in the requested direction, `Ok(None)` if
///   it falls beyond the limit.
/// * [`OrreryError::InvalidParameter`] for a non-finite limit.
pub fn search_moon_phase(
    orrery: &Orrery,
    target_lon: Degree,
    start: &AstroTime,
    limit_days: f64,
) -> Result<Option<AstroTime>, OrreryError> {
    if !limit_days.is_finite() {
        return Err(OrreryError::InvalidParameter(format!(
            "moon phase search limit {limit_days} days is not finite"
        )));
    }
    let phase_offset = |t: &AstroTime| -> Result<f64, OrreryError> {
        Ok(longitude_offset(moon_phase(orrery, t)? - target_lon))
    };

    let mut ya = phase_offset(start)?;
    let (dt1, dt2) = if limit_days < 0.0 {
        if ya < 0.0 {
            ya += 360.0;
        }
        let estimate = -MEAN_SYNODIC_MONTH * ya / 360.0;
        let dt2 = estimate + PHASE_UNCERTAINTY_DAYS;
        if dt2 < limit_days {
            return Ok(None);
        }
        ((estimate - PHASE_UNCERTAINTY_DAYS).max(limit_days), dt2)
    } else {
        if ya > 0.0 {
            ya -= 360.0;
        }
        let estimate = -MEAN_SYNODIC_MONTH * ya / 360.0;
        let dt1 = estimate - PHASE_UNCERTAINTY_DAYS;
        if dt1 > limit_days {
            return Ok(None);
        }
        (dt1, (estimate + PHASE_UNCERTAINTY_DAYS).min(limit_days))
    };

    search(
        phase_offset,
        &start.add_days(dt1),
        &start.add_days(dt2),
        &SearchOptions::with_tolerance(PHASE_TOLERANCE_SECONDS),
    )
}

/// Find the first lunar quarter after a given time.
///
/// See also
/// ------------
/// * [`next_moon_quarter`] – iterate through the following quarters.
pub fn search_moon_quarter(
    orrery: &Orrery,
    start: &AstroTime,
) -> Result<MoonQuarter, OrreryError> {
    let phase = moon_phase(orrery, start)?;
    let quarter = (1 + (phase / 90.0).floor() as u8) % 4;
    let time = search_moon_phase(orrery, 90.0 * quarter as f64, start, 10.0)?
        .ok_or_else(|| {
            OrreryError::InternalError(format!("lunar quarter {quarter} not found after {start}"))
        })?;
    Ok(MoonQuarter { quarter, time })
}

/// The lunar quarter following `previous`.
///
/// Returns
/// --------
/// * The next quarter, or [`OrreryError::InternalError`] if the sequence does not advance by
///   exactly one quarter.
pub fn next_moon_quarter(
    orrery: &Orrery,
    previous: &MoonQuarter,
) -> Result<MoonQuarter, OrreryError> {
    let next = search_moon_quarter(orrery, &previous.time.add_days(QUARTER_SKIP_DAYS))?;
    let expected = (previous.quarter + 1) % 4;
    if next.quarter != expected {
        return Err(OrreryError::InternalError(format!(
            "lunar quarter {} followed by {} at {}",
            previous.quarter, next.quarter, next.time
        )));
    }
    Ok(next)
}

#[cfg(test)]
mod moon_phase_test {
    use super::*;

    #[test]
    fn test_quarters_january_2019() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2019, 1, 1, 0, 0, 0.0).unwrap();
        let expected = [(0, 6, 1, 28), (1, 14, 6, 45), (2, 21, 5, 16), (3, 27, 21, 10)];

        let mut mq = search_moon_quarter(&orrery, &start).unwrap();
        for (i, &(quarter, day, hour, minute)) in expected.iter().enumerate() {
            if i > 0 {
                mq = next_moon_quarter(&orrery, &mq).unwrap();
            }
            assert_eq!(mq.quarter, quarter);
            let almanac = orrery.make_time(2019, 1, day, hour, minute, 0.0).unwrap();
            let minutes = (mq.time.ut() - almanac.ut()).abs() * 1440.0;
            assert!(minutes < 2.0, "quarter {quarter}: {minutes} min");
        }
    }

    #[test]
    fn test_quarters_alternate_and_hit_angle() {
        let orrery = Orrery::new();
        let mut mq = search_moon_quarter(&orrery, &AstroTime::from_ut(-3000.0)).unwrap();
        for _ in 0..50 {
            let next = next_moon_quarter(&orrery, &mq).unwrap();
            let gap = next.time.ut() - mq.time.ut();
            assert!(gap > 6.0 && gap < 8.5, "gap {gap}");
            let phase = moon_phase(&orrery, &next.time).unwrap();
            let error = longitude_offset(phase - 90.0 * next.quarter as f64);
            assert!(error.abs() < 1.0 / 60.0, "error {error}");
            mq = next;
        }
    }

    #[test]
    fn test_search_backward() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2019, 1, 25, 0, 0, 0.0).unwrap();
        let full = search_moon_phase(&orrery, 180.0, &start, -40.0).unwrap().unwrap();
        let almanac = orrery.make_time(2019, 1, 21, 5, 16, 0.0).unwrap();
        assert!((full.ut() - almanac.ut()).abs() * 1440.0 < 2.0);
    }

    #[test]
    fn test_search_beyond_limit() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2019, 1, 7, 0, 0, 0.0).unwrap();
        // the next new moon is more than three weeks away
        assert_eq!(search_moon_phase(&orrery, 0.0, &start, 5.0).unwrap(), None);
        assert!(search_moon_phase(&orrery, 0.0, &start, 40.0).unwrap().is_some());
    }
}
