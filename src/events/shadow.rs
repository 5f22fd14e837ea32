//! # Shadow cones
//!
//! Geometry shared by the eclipse and transit searches. A body of radius `R` lit by the Sun
//! casts a shadow along the direction `dir` (Sun → body). For a target at `target` (relative
//! to the body):
//!
//! ```text
//! u = dir·target / |dir|²                      distance along the axis, in units of |dir|
//! r = |u·dir − target|                         distance of the target from the axis
//! k = R☉ − (1 + u)(R☉ − R)                     umbra radius at the target (< 0: antumbra)
//! p = −R☉ + (1 + u)(R☉ + R)                    penumbra radius at the target
//! ```
//!
//! `r`, `k` and `p` are in kilometers.

use nalgebra::Vector3;

use crate::bodies::{geo_vector, helio_vector, Aberration, Body};
use crate::constants::{
    Kilometer, EARTH_ECLIPSE_RADIUS_KM, KM_PER_AU, MOON_MEAN_RADIUS_KM, SECONDS_PER_DAY,
    SUN_RADIUS_KM,
};
use crate::moon::geo_moon;
use crate::observers::{observer_vector, EquatorEpoch, Observer};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::search::{search, SearchOptions};
use crate::time::AstroTime;

const SHADOW_SLOPE_DT_DAYS: f64 = 1.0 / SECONDS_PER_DAY;

const SHADOW_TOLERANCE_SECONDS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShadowInfo {
    pub(crate) time: AstroTime,
    pub(crate) u: f64,
    pub(crate) r: Kilometer,
    pub(crate) k: Kilometer,
    pub(crate) p: Kilometer,
    /// Target relative to the shadow-casting body, AU
    pub(crate) target: Vector3<f64>,
    /// Sun → shadow-casting body, AU
    pub(crate) dir: Vector3<f64>,
}

pub(crate) fn calc_shadow(
    body_radius_km: Kilometer,
    time: AstroTime,
    target: Vector3<f64>,
    dir: Vector3<f64>,
) -> ShadowInfo {
    let u = dir.dot(&target) / dir.norm_squared();
    let r = KM_PER_AU * (dir * u - target).norm();
    let k = SUN_RADIUS_KM - (1.0 + u) * (SUN_RADIUS_KM - body_radius_km);
    let p = -SUN_RADIUS_KM + (1.0 + u) * (SUN_RADIUS_KM + body_radius_km);
    ShadowInfo {
        time,
        u,
        r,
        k,
        p,
        target,
        dir,
    }
}

/// The Earth's shadow at the Moon. The radius includes the atmosphere's enlargement.
pub(crate) fn earth_shadow(orrery: &Orrery, time: &AstroTime) -> Result<ShadowInfo, OrreryError> {
    let sun = geo_vector(orrery, Body::Sun, time, Aberration::Corrected)?;
    let moon = geo_moon(time);
    Ok(calc_shadow(EARTH_ECLIPSE_RADIUS_KM, *time, moon.pos, -sun.pos))
}

/// The Moon's shadow at the center of the Earth.
pub(crate) fn moon_shadow(orrery: &Orrery, time: &AstroTime) -> Result<ShadowInfo, OrreryError> {
    let earth = helio_vector(orrery, Body::Earth, time)?;
    let moon = geo_moon(time);
    Ok(calc_shadow(MOON_MEAN_RADIUS_KM, *time, -moon.pos, moon.pos + earth.pos))
}

/// The Moon's shadow at an observer on the surface of the Earth.
pub(crate) fn local_moon_shadow(
    orrery: &Orrery,
    time: &AstroTime,
    observer: &Observer,
) -> Result<ShadowInfo, OrreryError> {
    let site = observer_vector(orrery, time, observer, EquatorEpoch::J2000);
    let earth = helio_vector(orrery, Body::Earth, time)?;
    let moon = geo_moon(time);
    Ok(calc_shadow(MOON_MEAN_RADIUS_KM, *time, site.pos - moon.pos, moon.pos + earth.pos))
}

/// A planet's shadow at the center of the Earth, with light-time applied to the planet.
pub(crate) fn planet_shadow(
    orrery: &Orrery,
    body: Body,
    planet_radius_km: Kilometer,
    time: &AstroTime,
) -> Result<ShadowInfo, OrreryError> {
    let planet = geo_vector(orrery, body, time, Aberration::None)?;
    let sun = geo_vector(orrery, Body::Sun, time, Aberration::None)?;
    Ok(calc_shadow(planet_radius_km, *time, -planet.pos, planet.pos - sun.pos))
}

/// Find the time near `center` when the target is closest to the shadow axis.
///
/// Arguments
/// ---------
/// * `shadow`: the shadow model evaluated at a given time.
/// * `center`: a time near the expected closest approach.
/// * `window_days`: half-width of the searched interval.
pub(crate) fn peak_shadow<F>(
    shadow: F,
    center: &AstroTime,
    window_days: f64,
) -> Result<ShadowInfo, OrreryError>
where
    F: Fn(&AstroTime) -> Result<ShadowInfo, OrreryError>,
{
    let slope = |t: &AstroTime| -> Result<f64, OrreryError> {
        let r1 = shadow(&t.add_days(-SHADOW_SLOPE_DT_DAYS))?.r;
        let r2 = shadow(&t.add_days(SHADOW_SLOPE_DT_DAYS))?.r;
        Ok((r2 - r1) / SHADOW_SLOPE_DT_DAYS)
    };
    let t1 = center.add_days(-window_days);
    let t2 = center.add_days(window_days);
    let time = search(slope, &t1, &t2, &SearchOptions::with_tolerance(SHADOW_TOLERANCE_SECONDS))?
        .ok_or_else(|| {
            OrreryError::InternalError(format!("shadow peak not bracketed around {center}"))
        })?;
    shadow(&time)
}

/// Find the time in `[t1, t2]` when `boundary` crosses zero upward, or fail.
pub(crate) fn shadow_transition<F>(
    boundary: F,
    t1: &AstroTime,
    t2: &AstroTime,
) -> Result<AstroTime, OrreryError>
where
    F: FnMut(&AstroTime) -> Result<f64, OrreryError>,
{
    search(boundary, t1, t2, &SearchOptions::with_tolerance(SHADOW_TOLERANCE_SECONDS))?
        .ok_or_else(|| {
            OrreryError::InternalError(format!("shadow contact not found between {t1} and {t2}"))
        })
}

/// Fraction of the area of the first disc covered by the second one.
///
/// Arguments
/// ---------
/// * `a`: radius of the first disc.
/// * `b`: radius of the second disc.
/// * `c`: distance between their centers, same unit.
pub(crate) fn obscuration(a: f64, b: f64, c: f64) -> Result<f64, OrreryError> {
    if a <= 0.0 || b <= 0.0 || c < 0.0 {
        return Err(OrreryError::InternalError(format!(
            "invalid disc geometry: a = {a}, b = {b}, c = {c}"
        )));
    }
    if c >= a + b {
        return Ok(0.0);
    }
    let inside = if a <= b { 1.0 } else { (b * b) / (a * a) };
    if c == 0.0 {
        return Ok(inside);
    }
    let x = (a * a - b * b + c * c) / (2.0 * c);
    let radicand = a * a - x * x;
    if radicand <= 0.0 {
        // one disc lies inside the other
        return Ok(inside);
    }
    let y = radicand.sqrt();
    let lens1 = a * a * (x / a).acos() - x * y;
    let lens2 = b * b * ((c - x) / b).acos() - (c - x) * y;
    Ok((lens1 + lens2) / (std::f64::consts::PI * a * a))
}

#[cfg(test)]
mod shadow_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_obscuration_limits() {
        assert_eq!(obscuration(1.0, 1.0, 2.0).unwrap(), 0.0);
        assert_eq!(obscuration(1.0, 2.0, 0.5).unwrap(), 1.0);
        assert_abs_diff_eq!(obscuration(2.0, 1.0, 0.5).unwrap(), 0.25, epsilon = 1e-15);
        assert!(obscuration(0.0, 1.0, 0.5).is_err());
    }

    #[test]
    fn test_obscuration_equal_discs() {
        // two unit discs one radius apart overlap by 2π/3 − √3/2
        let pi = std::f64::consts::PI;
        let expected = (2.0 * pi / 3.0 - 3f64.sqrt() / 2.0) / pi;
        assert_abs_diff_eq!(obscuration(1.0, 1.0, 1.0).unwrap(), expected, epsilon = 1e-12);
        // closer centers overlap more
        let a = obscuration(1.0, 1.0, 0.3).unwrap();
        assert!(a > expected && a < 1.0);
    }

    #[test]
    fn test_calc_shadow_on_axis() {
        let time = AstroTime::from_ut(0.0);
        let dir = Vector3::new(1.0, 0.0, 0.0);
        let target = Vector3::new(0.0025, 0.0, 0.0);
        let shadow = calc_shadow(MOON_MEAN_RADIUS_KM, time, target, dir);
        assert_abs_diff_eq!(shadow.u, 0.0025, epsilon = 1e-15);
        assert_eq!(shadow.r, 0.0);
        assert!(shadow.p > shadow.k);
        let expected = 2.0 * MOON_MEAN_RADIUS_KM * 1.0025;
        assert_abs_diff_eq!(shadow.p + shadow.k, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_earth_shadow_reaches_moon_at_eclipse() {
        let orrery = Orrery::new();
        let time = orrery.make_time(2021, 5, 26, 11, 18, 42.0).unwrap();
        let shadow = earth_shadow(&orrery, &time).unwrap();
        // total eclipse: the whole Moon inside the umbra
        assert!(shadow.r + MOON_MEAN_RADIUS_KM < shadow.k);
        assert!(shadow.k > 4000.0 && shadow.k < 5000.0);
    }
}
