//! # Astronomical time
//!
//! [`AstroTime`] stores a moment as two day counts measured from the J2000 epoch
//! (2000-01-01T12:00:00):
//!
//! - `ut`: Universal Time, tied to the Earth's rotation (UT1 ≈ UTC here),
//! - `tt`: Terrestrial Time, the uniform scale every series is evaluated on.
//!
//! The two are linked by `tt = ut + ΔT(ut) / 86400`, where ΔT comes from the
//! [`DeltaTModel`] attached to the value. Calendar conversions use the proleptic
//! Gregorian calendar for every year, including negative (astronomical) years.
//!
//! ## Formatting
//!
//! [`AstroTime::format`] renders ISO-8601 text at day, minute, second or millisecond
//! precision. Values are rounded to the nearest unit (day precision truncates) and the
//! carry propagates into the higher fields, so `2020-12-31T23:59:59.500Z` at second
//! precision becomes `2021-01-01T00:00:00Z`. Years outside `0000..=9999` are written with
//! an explicit sign and six digits (`-002300-12-19T16:22:27.929Z`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use hifitime::{Epoch, TimeScale, Unit};
use serde::{Deserialize, Serialize};

use crate::constants::{SECONDS_PER_DAY, T2000};
use crate::delta_t::DeltaTModel;
use crate::orrery_errors::OrreryError;

/// Calendar arithmetic runs on a scale without leap seconds, so every day lasts 86400 s.
const CALENDAR_SCALE: TimeScale = TimeScale::TAI;

/// Largest `|ut + 0.5|`, in days, that has a calendar rendering (about 270,000 years).
const MAX_CALENDAR_DAYS: f64 = 1.0e8;

/// Largest `|year|` accepted by [`AstroTime::from_calendar`].
const MAX_CALENDAR_YEAR: i32 = 270_000;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Precision used by [`AstroTime::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    /// `YYYY-MM-DD` (truncated to the day)
    Day,
    /// `YYYY-MM-DDThh:mmZ`
    Minute,
    /// `YYYY-MM-DDThh:mm:ssZ`
    Second,
    /// `YYYY-MM-DDThh:mm:ss.sssZ`
    Milli,
}

impl TryFrom<u8> for TimeFormat {
    type Error = OrreryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TimeFormat::Day),
            1 => Ok(TimeFormat::Minute),
            2 => Ok(TimeFormat::Second),
            3 => Ok(TimeFormat::Milli),
            other => Err(OrreryError::InvalidParameter(format!(
                "unknown time format code {other}"
            ))),
        }
    }
}

/// Broken-down UTC calendar fields of an [`AstroTime`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

/// A moment in time on both the UT and TT scales.
///
/// Values are immutable: arithmetic returns a new [`AstroTime`] whose `tt` is re-derived
/// from the shifted `ut` with the same ΔT model.
///
/// See also
/// ------------
/// * [`DeltaTModel`] – selects how ΔT is computed.
/// * [`AstroTime::format`] – text rendering with carry-correct rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstroTime {
    ut: f64,
    tt: f64,
    model: DeltaTModel,
}

impl AstroTime {
    /// Build a time from a UT day count, using the default ΔT model.
    pub fn from_ut(ut: f64) -> Self {
        Self::with_delta_t(ut, DeltaTModel::default())
    }

    /// Build a time from a UT day count with an explicit ΔT model.
    pub fn with_delta_t(ut: f64, model: DeltaTModel) -> Self {
        let tt = ut + model.delta_t(ut) / SECONDS_PER_DAY;
        AstroTime { ut, tt, model }
    }

    /// Build a time from a TT day count, using the default ΔT model.
    pub fn from_tt(tt: f64) -> Self {
        Self::from_tt_with_delta_t(tt, DeltaTModel::default())
    }

    /// Build a time from a TT day count with an explicit ΔT model.
    ///
    /// ΔT depends on `ut`, so the UT value is found by fixed-point iteration; ΔT varies
    /// by far less than a second per day, so a handful of passes reach full precision.
    ///
    /// See also
    /// ------------
    /// * [`crate::orrery::Orrery::time_from_tt`] – same conversion with a context's model.
    pub fn from_tt_with_delta_t(tt: f64, model: DeltaTModel) -> Self {
        let mut ut = tt;
        for _ in 0..10 {
            let next = tt - model.delta_t(ut) / SECONDS_PER_DAY;
            let done = (next - ut).abs() < 1.0e-14;
            ut = next;
            if done {
                break;
            }
        }
        AstroTime { ut, tt, model }
    }

    /// Build a time from UTC calendar fields.
    ///
    /// Arguments
    /// ---------
    /// * `year`: astronomical year (year 0 = 1 BC, negative years allowed)
    /// * `month`: 1..=12
    /// * `day`: 1..=31, checked against the length of the month
    /// * `hour`: 0..=23
    /// * `minute`: 0..=59
    /// * `second`: `[0, 60)` including the fractional part
    ///
    /// Returns
    /// --------
    /// * The corresponding [`AstroTime`], or [`OrreryError::InvalidParameter`] when a field
    ///   is out of range.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, OrreryError> {
        if !(1..=12).contains(&month)
            || !(1..=31).contains(&day)
            || hour > 23
            || minute > 59
            || !(0.0..60.0).contains(&second)
        {
            return Err(OrreryError::InvalidParameter(format!(
                "calendar fields out of range: {year}-{month}-{day} {hour}:{minute}:{second}"
            )));
        }
        let days = day_number(year, month, day)?;
        let ut = (days as f64 - 0.5)
            + (hour as f64 + (minute as f64 + second / 60.0) / 60.0) / 24.0;
        Ok(Self::from_ut(ut))
    }

    /// Convert a hifitime [`Epoch`] (interpreted as UTC) into an [`AstroTime`].
    pub fn from_epoch(epoch: &Epoch) -> Self {
        Self::from_ut(epoch.to_mjd_utc_days() - T2000)
    }

    /// Convert this time into a hifitime [`Epoch`] on the UTC scale.
    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_mjd_utc(self.ut + T2000)
    }

    /// Universal Time, in days since J2000.
    pub fn ut(&self) -> f64 {
        self.ut
    }

    /// Terrestrial Time, in days since J2000.
    pub fn tt(&self) -> f64 {
        self.tt
    }

    /// ΔT model used to derive `tt`.
    pub fn delta_t_model(&self) -> DeltaTModel {
        self.model
    }

    /// Julian centuries of TT since J2000.
    pub(crate) fn julian_centuries(&self) -> f64 {
        self.tt / 36_525.0
    }

    /// Return a new time shifted by `days` of UT.
    ///
    /// `tt` is recomputed from the new `ut`, which differs from adding `days` to `tt`
    /// by the change of ΔT over the interval.
    pub fn add_days(&self, days: f64) -> Self {
        Self::with_delta_t(self.ut + days, self.model)
    }

    /// Broken-down UTC calendar fields, without rounding.
    ///
    /// Returns
    /// --------
    /// * The calendar fields, or [`OrreryError::InvalidParameter`] when `ut` is not finite
    ///   or lies more than about 270,000 years from J2000.
    pub fn calendar(&self) -> Result<CalendarDateTime, OrreryError> {
        let djd = self.ut + 0.5;
        if !djd.is_finite() || djd.abs() > MAX_CALENDAR_DAYS {
            return Err(OrreryError::InvalidParameter(format!(
                "time has no calendar date: ut = {}",
                self.ut
            )));
        }
        let day_number = djd.floor();
        let mut seconds = (djd - day_number) * SECONDS_PER_DAY;
        let hour = ((seconds / 3600.0).floor() as u32).min(23);
        seconds -= hour as f64 * 3600.0;
        let minute = ((seconds / 60.0).floor() as u32).min(59);
        seconds -= minute as f64 * 60.0;

        let (year, month, day) = civil_date(day_number as i64);
        Ok(CalendarDateTime {
            year,
            month: month.into(),
            day: day.into(),
            hour,
            minute,
            second: seconds.max(0.0),
        })
    }

    /// Render this time as ISO-8601 text.
    ///
    /// Arguments
    /// ---------
    /// * `format`: requested precision.
    ///
    /// Returns
    /// --------
    /// * The formatted string. The value is first rounded to whole milliseconds, then to the
    ///   requested unit (except [`TimeFormat::Day`], which truncates), with carry into the
    ///   minute, hour, day, month and year fields.
    pub fn format(&self, format: TimeFormat) -> Result<String, OrreryError> {
        let djd = self.ut + 0.5;
        if !djd.is_finite() || djd.abs() > MAX_CALENDAR_DAYS {
            return Err(OrreryError::InvalidParameter(format!(
                "time value cannot be formatted: ut = {}",
                self.ut
            )));
        }
        let total_ms = (djd * MILLIS_PER_DAY as f64).round() as i64;

        let text = match format {
            TimeFormat::Day => {
                let days = total_ms.div_euclid(MILLIS_PER_DAY);
                format_date(days)
            }
            TimeFormat::Minute => {
                let total_min = (total_ms + 30_000).div_euclid(60_000);
                let days = total_min.div_euclid(1440);
                let min_of_day = total_min.rem_euclid(1440);
                format!(
                    "{}T{:02}:{:02}Z",
                    format_date(days),
                    min_of_day / 60,
                    min_of_day % 60
                )
            }
            TimeFormat::Second => {
                let total_s = (total_ms + 500).div_euclid(1000);
                let days = total_s.div_euclid(86_400);
                let s = total_s.rem_euclid(86_400);
                format!(
                    "{}T{:02}:{:02}:{:02}Z",
                    format_date(days),
                    s / 3600,
                    (s / 60) % 60,
                    s % 60
                )
            }
            TimeFormat::Milli => {
                let days = total_ms.div_euclid(MILLIS_PER_DAY);
                let ms = total_ms.rem_euclid(MILLIS_PER_DAY);
                let s = ms / 1000;
                format!(
                    "{}T{:02}:{:02}:{:02}.{:03}Z",
                    format_date(days),
                    s / 3600,
                    (s / 60) % 60,
                    s % 60,
                    ms % 1000
                )
            }
        };
        Ok(text)
    }
}

impl PartialOrd for AstroTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.ut.partial_cmp(&other.ut)
    }
}

impl fmt::Display for AstroTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format(TimeFormat::Milli) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "ut={}", self.ut),
        }
    }
}

impl FromStr for AstroTime {
    type Err = OrreryError;

    /// Parse the text produced by [`AstroTime::format`].
    ///
    /// Accepted shapes: `YYYY-MM-DD`, `YYYY-MM-DDThh:mm[Z]`, `YYYY-MM-DDThh:mm:ss[.fff][Z]`,
    /// with an optional leading sign on the year (`-002300-12-19`, `+012345-01-01`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || OrreryError::BadTime(s.to_string());
        let text = s.trim();

        let (date, clock) = match text.split_once('T') {
            Some((d, c)) => (d, Some(c.strip_suffix('Z').unwrap_or(c))),
            None => (text, None),
        };

        // hifitime reads four-digit years only: a signed year is parsed as 2000 and
        // substituted afterwards
        let signed = match date.as_bytes().first() {
            Some(b'-') => Some((-1, &date[1..])),
            Some(b'+') => Some((1, &date[1..])),
            _ => None,
        };
        let (year, date) = match signed {
            Some((sign, unsigned)) => {
                let (digits, month_day) = unsigned.split_once('-').ok_or_else(bad)?;
                let year: i32 = digits.parse().map_err(|_| bad())?;
                (Some(sign * year), format!("2000-{month_day}"))
            }
            None => (None, date.to_string()),
        };

        let iso = match clock {
            None => date,
            Some(clock) => match clock.matches(':').count() {
                1 => format!("{date}T{clock}:00"),
                2 => format!("{date}T{clock}"),
                _ => return Err(bad()),
            },
        };

        let epoch = Epoch::from_str(&iso).map_err(|_| bad())?;
        let (parsed_year, month, day, hour, minute, second, nanos) =
            epoch.to_gregorian(TimeScale::UTC);
        AstroTime::from_calendar(
            year.unwrap_or(parsed_year),
            month.into(),
            day.into(),
            hour.into(),
            minute.into(),
            f64::from(second) + f64::from(nanos) / 1.0e9,
        )
        .map_err(|_| bad())
    }
}

/// Midnight starting 2000-01-01, origin of the day numbers below.
fn y2000_midnight() -> Epoch {
    Epoch::from_gregorian_at_midnight(2000, 1, 1, CALENDAR_SCALE)
}

/// Days from 2000-01-01 to a proleptic Gregorian date.
fn day_number(year: i32, month: u32, day: u32) -> Result<i64, OrreryError> {
    let invalid = || OrreryError::InvalidParameter(format!("invalid date {year}-{month}-{day}"));
    if year.abs() > MAX_CALENDAR_YEAR {
        return Err(invalid());
    }
    let month = u8::try_from(month).map_err(|_| invalid())?;
    let day_of_month = u8::try_from(day).map_err(|_| invalid())?;
    let midnight =
        Epoch::maybe_from_gregorian(year, month, day_of_month, 0, 0, 0, 0, CALENDAR_SCALE)
            .map_err(|_| invalid())?;
    Ok((midnight - y2000_midnight()).to_unit(Unit::Day).round() as i64)
}

/// Proleptic Gregorian date of a day count since 2000-01-01.
fn civil_date(days_since_2000: i64) -> (i32, u8, u8) {
    let (year, month, day, ..) =
        (y2000_midnight() + Unit::Day * days_since_2000).to_gregorian(CALENDAR_SCALE);
    (year, month, day)
}

/// `YYYY-MM-DD` for a day count since 2000-01-01.
fn format_date(days_since_2000: i64) -> String {
    let (year, month, day) = civil_date(days_since_2000);
    if (0..=9999).contains(&year) {
        format!("{year:04}-{month:02}-{day:02}")
    } else {
        let sign = if year < 0 { '-' } else { '+' };
        format!("{sign}{:06}-{month:02}-{day:02}", year.unsigned_abs())
    }
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn fmt(text: &str, format: TimeFormat) -> String {
        let time: AstroTime = text.parse().unwrap();
        time.format(format).unwrap()
    }

    #[test]
    fn test_make_time_known_value() {
        let time = AstroTime::from_calendar(2018, 12, 2, 18, 30, 12.543).unwrap();
        assert_abs_diff_eq!(time.ut(), 6910.270978506945, epsilon = 1e-12);
        assert_abs_diff_eq!(time.tt(), 6910.271800214368, epsilon = 1e-11);
    }

    #[test]
    fn test_epoch_is_noon() {
        let time = AstroTime::from_calendar(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_eq!(time.ut(), 0.0);
        assert_eq!(time.to_string(), "2000-01-01T12:00:00.000Z");
    }

    #[test]
    fn test_second_precision_carries_into_next_year() {
        assert_eq!(
            fmt("2020-12-31T23:59:59.500Z", TimeFormat::Second),
            "2021-01-01T00:00:00Z"
        );
        assert_eq!(
            fmt("2020-12-31T23:59:59.499Z", TimeFormat::Second),
            "2020-12-31T23:59:59Z"
        );
    }

    #[test]
    fn test_minute_precision_rounding() {
        assert_eq!(
            fmt("2020-12-31T23:59:30.000Z", TimeFormat::Minute),
            "2021-01-01T00:00Z"
        );
        assert_eq!(
            fmt("2020-12-31T23:59:29.999Z", TimeFormat::Minute),
            "2020-12-31T23:59Z"
        );
    }

    #[test]
    fn test_parse_minute_precision() {
        let time: AstroTime = "2022-03-15T21:50Z".parse().unwrap();
        assert_eq!(time.to_string(), "2022-03-15T21:50:00.000Z");
        let date_only: AstroTime = "1600-02-29".parse().unwrap();
        assert_eq!(date_only.format(TimeFormat::Day).unwrap(), "1600-02-29");
    }

    #[test]
    fn test_day_precision_truncates() {
        assert_eq!(fmt("2020-12-31T23:59:59.999Z", TimeFormat::Day), "2020-12-31");
    }

    #[test]
    fn test_extended_years() {
        let time = AstroTime::from_calendar(-2300, 12, 19, 16, 22, 27.929).unwrap();
        assert_eq!(time.to_string(), "-002300-12-19T16:22:27.929Z");
        let time = AstroTime::from_calendar(12345, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(time.to_string(), "+012345-01-01T00:00:00.000Z");
        let parsed: AstroTime = "-002300-12-19T16:22:27.929Z".parse().unwrap();
        assert_eq!(parsed.to_string(), "-002300-12-19T16:22:27.929Z");
    }

    #[test]
    fn test_format_parse_idempotence() {
        let mut ut = -1.0e6;
        while ut < 1.0e6 {
            let text = AstroTime::from_ut(ut).to_string();
            let again: AstroTime = text.parse().unwrap();
            assert_eq!(again.to_string(), text);
            ut += 9_876.543_21;
        }
    }

    #[test]
    fn test_leap_days() {
        let feb29 = AstroTime::from_calendar(2000, 2, 29, 0, 0, 0.0).unwrap();
        assert_eq!(feb29.add_days(1.0).format(TimeFormat::Day).unwrap(), "2000-03-01");
        let feb28 = AstroTime::from_calendar(1900, 2, 28, 0, 0, 0.0).unwrap();
        assert_eq!(feb28.add_days(1.0).format(TimeFormat::Day).unwrap(), "1900-03-01");
    }

    #[test]
    fn test_calendar_breakdown() {
        let time = AstroTime::from_calendar(2022, 3, 15, 21, 50, 12.25).unwrap();
        let cal = time.calendar().unwrap();
        assert_eq!((cal.year, cal.month, cal.day), (2022, 3, 15));
        assert_eq!((cal.hour, cal.minute), (21, 50));
        assert_abs_diff_eq!(cal.second, 12.25, epsilon = 1e-4);
    }

    #[test]
    fn test_from_tt_inverts_delta_t() {
        let time = AstroTime::from_calendar(1850, 6, 1, 0, 0, 0.0).unwrap();
        let back = AstroTime::from_tt(time.tt());
        assert_abs_diff_eq!(back.ut(), time.ut(), epsilon = 1e-10);
    }

    #[test]
    fn test_from_tt_keeps_requested_model() {
        // before the first table node, where the two models differ by hours
        let time = AstroTime::with_delta_t(-2.0e6, DeltaTModel::Table);
        let back = AstroTime::from_tt_with_delta_t(time.tt(), DeltaTModel::Table);
        assert_eq!(back.delta_t_model(), DeltaTModel::Table);
        assert_abs_diff_eq!(back.ut(), time.ut(), epsilon = 1e-8);
        let default = AstroTime::from_tt(time.tt());
        assert!((default.ut() - time.ut()).abs() > 0.01);
    }

    #[test]
    fn test_calendar_out_of_range() {
        assert!(AstroTime::from_ut(1.0e300).calendar().is_err());
        assert!(AstroTime::from_ut(f64::NAN).calendar().is_err());
        assert!(AstroTime::from_ut(-1.0e9).calendar().is_err());
        assert!(AstroTime::from_ut(1.0e300).format(TimeFormat::Day).is_err());
        let far = AstroTime::from_ut(9.0e7).calendar().unwrap();
        assert!(far.year > 240_000);
        assert!(AstroTime::from_calendar(1_000_000, 1, 1, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_calendar_agrees_with_hifitime() {
        let time = AstroTime::from_calendar(1987, 4, 10, 19, 21, 30.0).unwrap();
        let (year, month, day, hour, minute, ..) = time.to_epoch().to_gregorian_utc();
        let cal = time.calendar().unwrap();
        assert_eq!(
            (cal.year, cal.month, cal.day, cal.hour, cal.minute),
            (year, month.into(), day.into(), hour.into(), minute.into())
        );
    }

    #[test]
    fn test_add_days_recomputes_tt() {
        let time = AstroTime::from_ut(100.0);
        let later = time.add_days(36525.0);
        assert_eq!(later.ut(), 36625.0);
        assert_ne!(later.tt() - later.ut(), time.tt() - time.ut());
    }

    #[test]
    fn test_hifitime_round_trip() {
        let time = AstroTime::from_calendar(2019, 6, 24, 15, 45, 37.0).unwrap();
        let epoch = time.to_epoch();
        let back = AstroTime::from_epoch(&epoch);
        assert_abs_diff_eq!(back.ut(), time.ut(), epsilon = 1e-9);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "2020-13-01".parse::<AstroTime>(),
            Err(OrreryError::BadTime(_))
        ));
        assert!("2020-01-01T10".parse::<AstroTime>().is_err());
        assert!("2021-02-29".parse::<AstroTime>().is_err());
        assert!("+012345-02-30".parse::<AstroTime>().is_err());
        assert!("not a date".parse::<AstroTime>().is_err());
        assert!(TimeFormat::try_from(7).is_err());
    }

    #[test]
    fn test_table_model_is_kept_by_arithmetic() {
        let time = AstroTime::with_delta_t(0.0, DeltaTModel::Table);
        assert_eq!(time.add_days(10.0).delta_t_model(), DeltaTModel::Table);
    }
}
