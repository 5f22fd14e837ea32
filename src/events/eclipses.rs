//! # Eclipses
//!
//! Lunar and solar eclipses are found in two stages. A cheap scan visits successive full
//! (or new) moons and discards those where the Moon is more than 1.8° from the ecliptic.
//! For the remaining candidates a shadow-cone model locates the closest approach of the
//! target to the shadow axis, and the umbra and penumbra radii at that moment give the kind
//! of eclipse.
//!
//! | search                            | shadow          | target                  |
//! |-----------------------------------|-----------------|-------------------------|
//! | [`search_lunar_eclipse`]          | Earth           | center of the Moon      |
//! | [`search_global_solar_eclipse`]   | Moon            | center of the Earth     |
//! | [`search_local_solar_eclipse`]    | Moon            | an observer             |
//!
//! A global solar eclipse additionally intersects the shadow axis with the Earth's
//! ellipsoid to report where the eclipse is greatest.

use log::{debug, trace};
use nalgebra::Vector3;

use crate::bodies::{Aberration, Body};
use crate::constants::{
    Degree, Kilometer, DEGRAD, EARTH_EQUATORIAL_RADIUS_KM, EARTH_FLATTENING,
    EARTH_FLATTENING_SQUARED, EARTH_MEAN_RADIUS_KM, KM_PER_AU, MINUTES_PER_DAY,
    MOON_MEAN_RADIUS_KM, MOON_POLAR_RADIUS_KM, SUN_RADIUS_KM,
};
use crate::conversion::wrap_signed_degrees;
use crate::coordinates::equator;
use crate::events::moon_phase::search_moon_phase;
use crate::events::shadow::{
    calc_shadow, earth_shadow, local_moon_shadow, moon_shadow, obscuration, peak_shadow,
    shadow_transition, ShadowInfo,
};
use crate::moon::lunar_position;
use crate::observers::{horizon, EquatorEpoch, Observer, Refraction};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::rotation::rotation_eqj_eqd;
use crate::time::AstroTime;
use crate::vector::AstroVector;

/// Candidates with the Moon farther than this from the ecliptic cannot be eclipses, degrees.
const PRUNE_LATITUDE: Degree = 1.8;

/// Full or new moons examined before a lunar or global solar search gives up.
const MAX_LUNATIONS: usize = 12;

/// New moons examined before a local solar search gives up.
const MAX_LOCAL_LUNATIONS: usize = 1_200;

/// Days skipped past a lunation before looking for the next one.
const LUNATION_SKIP_DAYS: f64 = 10.0;

const PEAK_WINDOW_DAYS: f64 = 0.03;
const LOCAL_PEAK_WINDOW_DAYS: f64 = 0.2;
const LOCAL_PARTIAL_WINDOW_DAYS: f64 = 0.2;
const LOCAL_TOTAL_WINDOW_DAYS: f64 = 0.01;

/// Window searched on each side of the peak for the penumbral contacts, minutes.
const PENUMBRAL_WINDOW_MINUTES: f64 = 200.0;

/// Umbra radius at the surface above which a central solar eclipse is total, km.
const TOTAL_UMBRA_THRESHOLD_KM: Kilometer = 0.014;

/// Distance of the surface point from the shadow axis tolerated as rounding noise, km.
const AXIS_TOLERANCE_KM: Kilometer = 1.0e-6;

const SUN_RADIUS_AU: f64 = SUN_RADIUS_KM / KM_PER_AU;
const MOON_POLAR_RADIUS_AU: f64 = MOON_POLAR_RADIUS_KM / KM_PER_AU;

/// The kind of an eclipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EclipseKind {
    /// Lunar only: the Moon touches the penumbra but not the umbra.
    Penumbral,
    Partial,
    /// Solar only: the Moon is too far to cover the Sun and leaves a ring.
    Annular,
    Total,
}

/// A lunar eclipse seen from anywhere on the night side of the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarEclipseInfo {
    pub kind: EclipseKind,
    /// Fraction of the Moon's disc inside the umbra at the peak; 0 for penumbral eclipses
    pub obscuration: f64,
    pub peak: AstroTime,
    /// Half the duration of the penumbral phase, minutes
    pub sd_penum: f64,
    /// Half the duration of the partial phase, minutes; 0 for penumbral eclipses
    pub sd_partial: f64,
    /// Half the duration of totality, minutes; 0 unless the eclipse is total
    pub sd_total: f64,
}

/// A solar eclipse seen from anywhere on the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalSolarEclipseInfo {
    pub kind: EclipseKind,
    pub peak: AstroTime,
    /// Distance between the shadow axis and the center of the Earth at the peak, km
    pub distance: Kilometer,
    /// Geodetic latitude where the axis meets the Earth; `None` for partial eclipses
    pub latitude: Option<Degree>,
    /// Longitude where the axis meets the Earth; `None` for partial eclipses
    pub longitude: Option<Degree>,
    /// Fraction of the Sun's disc covered at that point; `None` for partial eclipses
    pub obscuration: Option<f64>,
}

/// A contact or the peak of a local solar eclipse, with the Sun's altitude at that time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseEvent {
    pub time: AstroTime,
    /// Refracted altitude of the Sun, degrees
    pub altitude: Degree,
}

/// A solar eclipse seen by a particular observer.
///
/// The contacts are listed in chronological order; some may happen while the Sun is below
/// the horizon, which the caller can tell from [`EclipseEvent::altitude`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalSolarEclipseInfo {
    pub kind: EclipseKind,
    /// Fraction of the Sun's disc covered at the peak
    pub obscuration: f64,
    pub partial_begin: EclipseEvent,
    /// Start of the total or annular phase; `None` for partial eclipses
    pub total_begin: Option<EclipseEvent>,
    pub peak: EclipseEvent,
    pub total_end: Option<EclipseEvent>,
    pub partial_end: EclipseEvent,
}

fn kind_from_umbra(k: Kilometer) -> EclipseKind {
    if k > TOTAL_UMBRA_THRESHOLD_KM {
        EclipseKind::Total
    } else {
        EclipseKind::Annular
    }
}

/// Fraction of the Sun's disc hidden by the Moon for a given observer.
///
/// Arguments
/// ---------
/// * `helio_moon`: heliocentric position of the Moon, AU.
/// * `moon_observer`: position of the observer relative to the Moon, AU.
fn solar_obscuration(
    helio_moon: &Vector3<f64>,
    moon_observer: &Vector3<f64>,
) -> Result<f64, OrreryError> {
    let helio_observer = helio_moon + moon_observer;
    let sun_radius = (SUN_RADIUS_AU / helio_observer.norm()).asin();
    let moon_radius = (MOON_POLAR_RADIUS_AU / moon_observer.norm()).asin();
    let separation = moon_observer.angle(&helio_observer);
    // rounding can make a central eclipse look total
    Ok(obscuration(sun_radius, moon_radius, separation)?.min(0.9999))
}

fn moon_near_node(time: &AstroTime) -> bool {
    lunar_position(time.tt()).lat.abs() < PRUNE_LATITUDE
}

/// Half the time the Moon spends within `radius_limit` of the Earth's shadow axis, minutes.
fn shadow_semi_duration(
    orrery: &Orrery,
    peak: &AstroTime,
    radius_limit: Kilometer,
    window_minutes: f64,
) -> Result<f64, OrreryError> {
    let window = window_minutes / MINUTES_PER_DAY;
    let before = peak.add_days(-window);
    let after = peak.add_days(window);
    let t1 = shadow_transition(|t| Ok(radius_limit - earth_shadow(orrery, t)?.r), &before, peak)?;
    let t2 = shadow_transition(|t| Ok(earth_shadow(orrery, t)?.r - radius_limit), peak, &after)?;
    Ok((t2.ut() - t1.ut()) * MINUTES_PER_DAY / 2.0)
}

fn lunar_eclipse_at(orrery: &Orrery, shadow: &ShadowInfo) -> Result<LunarEclipseInfo, OrreryError> {
    let mut info = LunarEclipseInfo {
        kind: EclipseKind::Penumbral,
        obscuration: 0.0,
        peak: shadow.time,
        sd_penum: 0.0,
        sd_partial: 0.0,
        sd_total: 0.0,
    };
    info.sd_penum = shadow_semi_duration(
        orrery,
        &shadow.time,
        shadow.p + MOON_MEAN_RADIUS_KM,
        PENUMBRAL_WINDOW_MINUTES,
    )?;
    if shadow.r < shadow.k + MOON_MEAN_RADIUS_KM {
        info.kind = EclipseKind::Partial;
        info.sd_partial = shadow_semi_duration(
            orrery,
            &shadow.time,
            shadow.k + MOON_MEAN_RADIUS_KM,
            info.sd_penum,
        )?;
        if shadow.r + MOON_MEAN_RADIUS_KM < shadow.k {
            info.kind = EclipseKind::Total;
            info.obscuration = 1.0;
            info.sd_total = shadow_semi_duration(
                orrery,
                &shadow.time,
                shadow.k - MOON_MEAN_RADIUS_KM,
                info.sd_partial,
            )?;
        } else {
            info.obscuration = obscuration(MOON_MEAN_RADIUS_KM, shadow.k, shadow.r)?;
        }
    }
    Ok(info)
}

/// Find the first lunar eclipse after a given time.
///
/// Every kind of lunar eclipse is reported, penumbral ones included.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `start`: the search starts here.
///
/// Returns
/// --------
/// * [`LunarEclipseInfo`] for the eclipse, or [`OrreryError::NoConvergence`] if none is found
///   within 12 full moons.
///
/// See also
/// ------------
/// * [`next_lunar_eclipse`] – iterate through the following eclipses.
pub fn search_lunar_eclipse(
    orrery: &Orrery,
    start: &AstroTime,
) -> Result<LunarEclipseInfo, OrreryError> {
    let mut fmtime = *start;
    for _ in 0..MAX_LUNATIONS {
        let fullmoon = search_moon_phase(orrery, 180.0, &fmtime, 40.0)?.ok_or_else(|| {
            OrreryError::InternalError(format!("no full moon within 40 days of {fmtime}"))
        })?;
        if moon_near_node(&fullmoon) {
            let shadow = peak_shadow(|t| earth_shadow(orrery, t), &fullmoon, PEAK_WINDOW_DAYS)?;
            trace!("full moon {fullmoon}: r = {:.1} km, p = {:.1} km", shadow.r, shadow.p);
            if shadow.r < shadow.p + MOON_MEAN_RADIUS_KM {
                let info = lunar_eclipse_at(orrery, &shadow)?;
                debug!("{:?} lunar eclipse peaking at {}", info.kind, info.peak);
                return Ok(info);
            }
        }
        fmtime = fullmoon.add_days(LUNATION_SKIP_DAYS);
    }
    Err(OrreryError::NoConvergence(format!(
        "no lunar eclipse within {MAX_LUNATIONS} full moons of {start}"
    )))
}

/// The lunar eclipse following the one that peaked at `prev_peak`.
pub fn next_lunar_eclipse(
    orrery: &Orrery,
    prev_peak: &AstroTime,
) -> Result<LunarEclipseInfo, OrreryError> {
    search_lunar_eclipse(orrery, &prev_peak.add_days(LUNATION_SKIP_DAYS))
}

/// Where the axis of the Moon's shadow meets the Earth's ellipsoid.
fn geoid_intersect(
    orrery: &Orrery,
    shadow: &ShadowInfo,
) -> Result<GlobalSolarEclipseInfo, OrreryError> {
    let mut info = GlobalSolarEclipseInfo {
        kind: EclipseKind::Partial,
        peak: shadow.time,
        distance: shadow.r,
        latitude: None,
        longitude: None,
        obscuration: None,
    };

    // work in an equator-of-date frame stretched along z so the Earth becomes a sphere
    let rot = rotation_eqj_eqd(orrery, &shadow.time);
    let to_sphere = |v: &Vector3<f64>| {
        let eqd = rot.rotate_vector(&AstroVector::from_vec(*v, shadow.time)).pos * KM_PER_AU;
        Vector3::new(eqd.x, eqd.y, eqd.z / EARTH_FLATTENING)
    };
    let v = to_sphere(&shadow.dir);
    let e = to_sphere(&shadow.target);

    let radius = EARTH_EQUATORIAL_RADIUS_KM;
    let a = v.norm_squared();
    let b = -2.0 * v.dot(&e);
    let c = e.norm_squared() - radius * radius;
    let radic = b * b - 4.0 * a * c;
    if radic <= 0.0 {
        return Ok(info);
    }

    // the nearer of the two intersections faces the Moon
    let u = (-b - radic.sqrt()) / (2.0 * a);
    let surface = Vector3::new(u * v.x - e.x, u * v.y - e.y, (u * v.z - e.z) * EARTH_FLATTENING);

    let proj = surface.x.hypot(surface.y) * EARTH_FLATTENING_SQUARED;
    let latitude = if proj == 0.0 {
        90.0_f64.copysign(surface.z)
    } else {
        DEGRAD * (surface.z / proj).atan()
    };
    let gast = orrery.sidereal_time(&shadow.time);
    let longitude = wrap_signed_degrees(DEGRAD * surface.y.atan2(surface.x) - 15.0 * gast);

    let site = rot
        .inverse()
        .rotate_vector(&AstroVector::from_vec(surface / KM_PER_AU, shadow.time))
        .pos
        + shadow.target;
    let at_surface = calc_shadow(MOON_POLAR_RADIUS_KM, shadow.time, site, shadow.dir);
    if at_surface.r > AXIS_TOLERANCE_KM {
        return Err(OrreryError::InternalError(format!(
            "eclipse center {:e} km off the shadow axis at {}",
            at_surface.r, shadow.time
        )));
    }

    info.kind = kind_from_umbra(at_surface.k);
    info.latitude = Some(latitude);
    info.longitude = Some(longitude);
    info.obscuration = Some(match info.kind {
        EclipseKind::Total => 1.0,
        _ => solar_obscuration(&shadow.dir, &site)?,
    });
    Ok(info)
}

/// Find the first solar eclipse visible somewhere on the Earth after a given time.
///
/// Returns
/// --------
/// * [`GlobalSolarEclipseInfo`]. Total and annular eclipses carry the location of greatest
///   eclipse; partial ones, whose shadow axis misses the Earth, do not.
/// * [`OrreryError::NoConvergence`] if none is found within 12 new moons.
pub fn search_global_solar_eclipse(
    orrery: &Orrery,
    start: &AstroTime,
) -> Result<GlobalSolarEclipseInfo, OrreryError> {
    let mut nmtime = *start;
    for _ in 0..MAX_LUNATIONS {
        let newmoon = search_moon_phase(orrery, 0.0, &nmtime, 40.0)?.ok_or_else(|| {
            OrreryError::InternalError(format!("no new moon within 40 days of {nmtime}"))
        })?;
        if moon_near_node(&newmoon) {
            let shadow = peak_shadow(|t| moon_shadow(orrery, t), &newmoon, PEAK_WINDOW_DAYS)?;
            if shadow.r < shadow.p + EARTH_MEAN_RADIUS_KM {
                let info = geoid_intersect(orrery, &shadow)?;
                debug!("{:?} solar eclipse peaking at {}", info.kind, info.peak);
                return Ok(info);
            }
        }
        nmtime = newmoon.add_days(LUNATION_SKIP_DAYS);
    }
    Err(OrreryError::NoConvergence(format!(
        "no solar eclipse within {MAX_LUNATIONS} new moons of {start}"
    )))
}

/// The solar eclipse following the one that peaked at `prev_peak`.
pub fn next_global_solar_eclipse(
    orrery: &Orrery,
    prev_peak: &AstroTime,
) -> Result<GlobalSolarEclipseInfo, OrreryError> {
    search_global_solar_eclipse(orrery, &prev_peak.add_days(LUNATION_SKIP_DAYS))
}

fn sun_altitude(
    orrery: &Orrery,
    time: &AstroTime,
    observer: &Observer,
) -> Result<Degree, OrreryError> {
    let equ = equator(
        orrery,
        Body::Sun,
        time,
        observer,
        EquatorEpoch::OfDate,
        Aberration::Corrected,
    )?;
    Ok(horizon(orrery, time, observer, equ.ra, equ.dec, Refraction::Normal).altitude)
}

fn eclipse_event(
    orrery: &Orrery,
    time: AstroTime,
    observer: &Observer,
) -> Result<EclipseEvent, OrreryError> {
    Ok(EclipseEvent {
        time,
        altitude: sun_altitude(orrery, &time, observer)?,
    })
}

/// A contact of a local eclipse: `direction·distance(shadow)` crosses zero upward in `[t1, t2]`.
fn local_transition<F>(
    orrery: &Orrery,
    observer: &Observer,
    direction: f64,
    distance: F,
    t1: &AstroTime,
    t2: &AstroTime,
) -> Result<EclipseEvent, OrreryError>
where
    F: Fn(&ShadowInfo) -> f64,
{
    let time = shadow_transition(
        |t| Ok(direction * distance(&local_moon_shadow(orrery, t, observer)?)),
        t1,
        t2,
    )?;
    eclipse_event(orrery, time, observer)
}

fn local_eclipse_at(
    orrery: &Orrery,
    shadow: &ShadowInfo,
    observer: &Observer,
) -> Result<LocalSolarEclipseInfo, OrreryError> {
    let partial = |s: &ShadowInfo| s.p - s.r;
    let total = |s: &ShadowInfo| s.k.abs() - s.r;

    let peak = eclipse_event(orrery, shadow.time, observer)?;
    let t1 = shadow.time.add_days(-LOCAL_PARTIAL_WINDOW_DAYS);
    let t2 = shadow.time.add_days(LOCAL_PARTIAL_WINDOW_DAYS);
    let partial_begin = local_transition(orrery, observer, 1.0, partial, &t1, &shadow.time)?;
    let partial_end = local_transition(orrery, observer, -1.0, partial, &shadow.time, &t2)?;

    let (kind, total_begin, total_end) = if shadow.r < shadow.k.abs() {
        let t1 = shadow.time.add_days(-LOCAL_TOTAL_WINDOW_DAYS);
        let t2 = shadow.time.add_days(LOCAL_TOTAL_WINDOW_DAYS);
        (
            kind_from_umbra(shadow.k),
            Some(local_transition(orrery, observer, 1.0, total, &t1, &shadow.time)?),
            Some(local_transition(orrery, observer, -1.0, total, &shadow.time, &t2)?),
        )
    } else {
        (EclipseKind::Partial, None, None)
    };

    let obscuration = match kind {
        EclipseKind::Total => 1.0,
        _ => solar_obscuration(&shadow.dir, &shadow.target)?,
    };
    Ok(LocalSolarEclipseInfo {
        kind,
        obscuration,
        partial_begin,
        total_begin,
        peak,
        total_end,
        partial_end,
    })
}

/// Find the first solar eclipse visible from a given place after a given time.
///
/// An eclipse counts as visible when the Sun is above the horizon at its first or last
/// contact. Since most eclipses are seen from a small part of the Earth, this may scan many
/// years of new moons.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `start`: the search starts here.
/// * `observer`: the site.
///
/// Returns
/// --------
/// * [`LocalSolarEclipseInfo`], or [`OrreryError::NoConvergence`] if no visible eclipse
///   is found within 1200 new moons.
pub fn search_local_solar_eclipse(
    orrery: &Orrery,
    start: &AstroTime,
    observer: &Observer,
) -> Result<LocalSolarEclipseInfo, OrreryError> {
    let mut nmtime = *start;
    for _ in 0..MAX_LOCAL_LUNATIONS {
        let newmoon = search_moon_phase(orrery, 0.0, &nmtime, 40.0)?.ok_or_else(|| {
            OrreryError::InternalError(format!("no new moon within 40 days of {nmtime}"))
        })?;
        if moon_near_node(&newmoon) {
            let shadow = peak_shadow(
                |t| local_moon_shadow(orrery, t, observer),
                &newmoon,
                LOCAL_PEAK_WINDOW_DAYS,
            )?;
            if shadow.r < shadow.p {
                let info = local_eclipse_at(orrery, &shadow, observer)?;
                if info.partial_begin.altitude > 0.0 || info.partial_end.altitude > 0.0 {
                    debug!("{:?} local solar eclipse peaking at {}", info.kind, info.peak.time);
                    return Ok(info);
                }
                trace!("solar eclipse at {} below the horizon", info.peak.time);
            }
        }
        nmtime = newmoon.add_days(LUNATION_SKIP_DAYS);
    }
    Err(OrreryError::NoConvergence(format!(
        "no visible solar eclipse within {MAX_LOCAL_LUNATIONS} new moons of {start}"
    )))
}

/// The local solar eclipse following the one that peaked at `prev_peak`.
pub fn next_local_solar_eclipse(
    orrery: &Orrery,
    prev_peak: &AstroTime,
    observer: &Observer,
) -> Result<LocalSolarEclipseInfo, OrreryError> {
    search_local_solar_eclipse(orrery, &prev_peak.add_days(LUNATION_SKIP_DAYS), observer)
}

#[cfg(test)]
mod eclipses_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn minutes_between(a: &AstroTime, b: &AstroTime) -> f64 {
        (a.ut() - b.ut()).abs() * MINUTES_PER_DAY
    }

    #[test]
    fn test_total_lunar_eclipse_2021() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2021, 1, 1, 0, 0, 0.0).unwrap();
        let eclipse = search_lunar_eclipse(&orrery, &start).unwrap();
        assert_eq!(eclipse.kind, EclipseKind::Total);
        assert_eq!(eclipse.obscuration, 1.0);
        let almanac = orrery.make_time(2021, 5, 26, 11, 18, 42.0).unwrap();
        assert!(minutes_between(&eclipse.peak, &almanac) < 2.0);
        assert!(eclipse.sd_total > 5.0 && eclipse.sd_total < 10.0, "{}", eclipse.sd_total);
        assert!(eclipse.sd_partial > 90.0 && eclipse.sd_partial < 97.0, "{}", eclipse.sd_partial);
        assert!(eclipse.sd_penum > 145.0 && eclipse.sd_penum < 157.0, "{}", eclipse.sd_penum);
    }

    #[test]
    fn test_partial_lunar_eclipse_obscuration() {
        let orrery = Orrery::new();
        for ((year, month, day), expected) in [
            ((2010, 6, 26), 0.506),
            ((2017, 8, 7), 0.169),
            ((2019, 7, 16), 0.654),
            ((2021, 11, 19), 0.991),
            ((2023, 10, 28), 0.060),
        ] {
            let start = orrery.make_time(year, month, day, 0, 0, 0.0).unwrap();
            let eclipse = search_lunar_eclipse(&orrery, &start).unwrap();
            assert_eq!(eclipse.kind, EclipseKind::Partial);
            let dt = eclipse.peak.ut() - start.ut();
            assert!((0.0..1.0).contains(&dt), "{year}-{month}-{day}: {dt} days");
            assert_eq!(eclipse.sd_total, 0.0);
            assert!(eclipse.sd_partial > 0.0 && eclipse.sd_partial < eclipse.sd_penum);
            assert_abs_diff_eq!(eclipse.obscuration, expected, epsilon = 0.01);
        }
    }

    #[test]
    fn test_lunar_eclipses_in_sequence() {
        let orrery = Orrery::new();
        let mut eclipse = search_lunar_eclipse(&orrery, &AstroTime::from_ut(0.0)).unwrap();
        for _ in 0..10 {
            let next = next_lunar_eclipse(&orrery, &eclipse.peak).unwrap();
            let gap = next.peak.ut() - eclipse.peak.ut();
            // eclipses come one, five or six lunations apart
            assert!(gap > 29.0 && gap < 180.0, "gap {gap}");
            assert!((0.0..=1.0).contains(&next.obscuration));
            if next.kind == EclipseKind::Penumbral {
                assert_eq!(next.sd_partial, 0.0);
            }
            eclipse = next;
        }
    }

    #[test]
    fn test_total_solar_eclipse_2017() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2017, 8, 1, 0, 0, 0.0).unwrap();
        let eclipse = search_global_solar_eclipse(&orrery, &start).unwrap();
        assert_eq!(eclipse.kind, EclipseKind::Total);
        let almanac = orrery.make_time(2017, 8, 21, 18, 25, 30.0).unwrap();
        assert!(minutes_between(&eclipse.peak, &almanac) < 2.0);
        assert_abs_diff_eq!(eclipse.latitude.unwrap(), 36.97, epsilon = 0.5);
        assert_abs_diff_eq!(eclipse.longitude.unwrap(), -87.66, epsilon = 0.5);
        assert_eq!(eclipse.obscuration, Some(1.0));
    }

    #[test]
    fn test_annular_and_partial_solar_eclipses() {
        let orrery = Orrery::new();
        let start = orrery.make_time(2023, 10, 14, 0, 0, 0.0).unwrap();
        let annular = search_global_solar_eclipse(&orrery, &start).unwrap();
        assert_eq!(annular.kind, EclipseKind::Annular);
        assert!(annular.peak.ut() - start.ut() < 1.0);
        assert_abs_diff_eq!(annular.obscuration.unwrap(), 0.90638, epsilon = 1e-3);

        let start = orrery.make_time(2018, 7, 1, 0, 0, 0.0).unwrap();
        let partial = search_global_solar_eclipse(&orrery, &start).unwrap();
        assert_eq!(partial.kind, EclipseKind::Partial);
        assert_eq!(partial.latitude, None);
        assert_eq!(partial.longitude, None);
        assert_eq!(partial.obscuration, None);
        assert_eq!(partial.peak.calendar().unwrap().day, 13);
        assert!(partial.distance > EARTH_MEAN_RADIUS_KM);
    }

    #[test]
    fn test_local_total_eclipse_2017() {
        let orrery = Orrery::new();
        let observer = Observer::new(36.97, -87.66, 0.0).unwrap();
        let start = orrery.make_time(2017, 8, 1, 0, 0, 0.0).unwrap();
        let eclipse = search_local_solar_eclipse(&orrery, &start, &observer).unwrap();
        assert_eq!(eclipse.kind, EclipseKind::Total);
        assert_eq!(eclipse.obscuration, 1.0);

        let almanac = orrery.make_time(2017, 8, 21, 18, 25, 30.0).unwrap();
        assert!(minutes_between(&eclipse.peak.time, &almanac) < 3.0);
        assert!(eclipse.peak.altitude > 60.0);

        let total_begin = eclipse.total_begin.unwrap();
        let total_end = eclipse.total_end.unwrap();
        let totality = minutes_between(&total_end.time, &total_begin.time);
        assert!(totality > 2.0 && totality < 3.0, "totality {totality} min");

        let times = [
            eclipse.partial_begin.time,
            total_begin.time,
            eclipse.peak.time,
            total_end.time,
            eclipse.partial_end.time,
        ];
        assert!(times.windows(2).all(|w| w[0].ut() < w[1].ut()));
    }

    #[test]
    fn test_local_partial_eclipse_2023() {
        let orrery = Orrery::new();
        let observer = Observer::new(25.78, -80.22, 0.0).unwrap();
        let start = orrery.make_time(2023, 10, 14, 0, 0, 0.0).unwrap();
        let eclipse = search_local_solar_eclipse(&orrery, &start, &observer).unwrap();
        assert_eq!(eclipse.kind, EclipseKind::Partial);
        assert!(eclipse.peak.time.ut() - start.ut() < 1.0);
        assert!(eclipse.total_begin.is_none() && eclipse.total_end.is_none());
        assert_abs_diff_eq!(eclipse.obscuration, 0.578, epsilon = 0.002);
    }

    #[test]
    fn test_local_eclipses_are_visible() {
        let orrery = Orrery::new();
        let observer = Observer::new(29.0, -81.0, 10.0).unwrap();
        let mut eclipse =
            search_local_solar_eclipse(&orrery, &AstroTime::from_ut(7000.0), &observer).unwrap();
        for _ in 0..3 {
            assert!(eclipse.partial_begin.altitude > 0.0 || eclipse.partial_end.altitude > 0.0);
            assert!(eclipse.partial_begin.time.ut() < eclipse.partial_end.time.ut());
            assert!(eclipse.obscuration > 0.0 && eclipse.obscuration <= 1.0);
            if eclipse.kind == EclipseKind::Partial {
                assert!(eclipse.total_begin.is_none() && eclipse.total_end.is_none());
            }
            eclipse = next_local_solar_eclipse(&orrery, &eclipse.peak.time, &observer).unwrap();
        }
    }
}
