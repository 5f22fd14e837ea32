//! # Equinoxes and solstices
//!
//! The seasons begin when the apparent geocentric longitude of the Sun, on the true ecliptic
//! of date, crosses a multiple of 90°.

use log::warn;

use crate::constants::Degree;
use crate::conversion::longitude_offset;
use crate::coordinates::sun_position;
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::search::{search, SearchOptions};
use crate::time::AstroTime;

const SUN_LONGITUDE_TOLERANCE_SECONDS: f64 = 0.01;

/// Days searched after the 10th of the month in which a season starts.
const SEASON_WINDOW_DAYS: f64 = 20.0;

/// The four season changes of a calendar year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonsInfo {
    pub mar_equinox: AstroTime,
    pub jun_solstice: AstroTime,
    pub sep_equinox: AstroTime,
    pub dec_solstice: AstroTime,
}

/// Find when the Sun reaches a given apparent ecliptic longitude.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `target_lon`: longitude on the true ecliptic of date, degrees.
/// * `start`: beginning of the window.
/// * `limit_days`: length of the window; the Sun must cross the longitude only once in it.
///
/// Returns
/// --------
/// * `Ok(None)` when the crossing is not inside the window.
pub fn search_sun_longitude(
    orrery: &Orrery,
    target_lon: Degree,
    start: &AstroTime,
    limit_days: f64,
) -> Result<Option<AstroTime>, OrreryError> {
    let end = start.add_days(limit_days);
    search(
        |t| Ok(longitude_offset(sun_position(orrery, t)?.elon - target_lon)),
        start,
        &end,
        &SearchOptions::with_tolerance(SUN_LONGITUDE_TOLERANCE_SECONDS),
    )
}

fn season_change(
    orrery: &Orrery,
    target_lon: Degree,
    year: i32,
    month: u32,
) -> Result<AstroTime, OrreryError> {
    let start = orrery.make_time(year, month, 10, 0, 0, 0.0)?;
    search_sun_longitude(orrery, target_lon, &start, SEASON_WINDOW_DAYS)?.ok_or_else(|| {
        warn!("solar longitude {target_lon} not reached in {year}-{month:02}");
        OrreryError::InternalError(format!(
            "no season change at solar longitude {target_lon} in {year}"
        ))
    })
}

/// Equinoxes and solstices of a calendar year (UTC dates).
///
/// Returns
/// --------
/// * [`SeasonsInfo`], or [`OrreryError::InternalError`] if one of the crossings escapes its
///   search window.
pub fn seasons(orrery: &Orrery, year: i32) -> Result<SeasonsInfo, OrreryError> {
    Ok(SeasonsInfo {
        mar_equinox: season_change(orrery, 0.0, year, 3)?,
        jun_solstice: season_change(orrery, 90.0, year, 6)?,
        sep_equinox: season_change(orrery, 180.0, year, 9)?,
        dec_solstice: season_change(orrery, 270.0, year, 12)?,
    })
}

#[cfg(test)]
mod seasons_test {
    use super::*;

    fn minutes_from(orrery: &Orrery, time: &AstroTime, fields: (u32, u32, u32, u32)) -> f64 {
        let (month, day, hour, minute) = fields;
        let expected = orrery.make_time(2019, month, day, hour, minute, 0.0).unwrap();
        (time.ut() - expected.ut()).abs() * 1440.0
    }

    #[test]
    fn test_seasons_2019() {
        let orrery = Orrery::new();
        let info = seasons(&orrery, 2019).unwrap();
        assert!(minutes_from(&orrery, &info.mar_equinox, (3, 20, 21, 58)) < 2.37);
        assert!(minutes_from(&orrery, &info.jun_solstice, (6, 21, 15, 54)) < 2.37);
        assert!(minutes_from(&orrery, &info.sep_equinox, (9, 23, 7, 50)) < 2.37);
        assert!(minutes_from(&orrery, &info.dec_solstice, (12, 22, 4, 19)) < 2.37);
    }

    #[test]
    fn test_sun_longitude_window_without_crossing() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2019, 5, 1, 0, 0, 0.0).unwrap();
        assert_eq!(search_sun_longitude(&orrery, 0.0, &start, 10.0).unwrap(), None);
    }

    #[test]
    fn test_seasons_are_ordered_across_centuries() {
        let orrery = Orrery::new();
        for year in [1600, 1900, 2000, 2100, 2400] {
            let info = seasons(&orrery, year).unwrap();
            assert!(info.mar_equinox.ut() < info.jun_solstice.ut());
            assert!(info.jun_solstice.ut() < info.sep_equinox.ut());
            assert!(info.sep_equinox.ut() < info.dec_solstice.ut());
            let summer = info.sep_equinox.ut() - info.mar_equinox.ut();
            // the northern spring and summer are longer than half a year
            assert!(summer > 184.0 && summer < 189.0, "{year}: {summer}");
        }
    }
}
