//! # Bodies and their positions
//!
//! [`Body`] enumerates everything a position can be asked for: the Sun, the Moon, the eight
//! planets, Pluto, the Earth/Moon barycenter (EMB), the Solar System barycenter (SSB) and eight
//! user-defined star slots. Position requests dispatch on the variant:
//!
//! | Body | Engine |
//! |------|--------|
//! | Mercury … Neptune | [`vsop`](crate::vsop) series |
//! | Pluto | [`chebyshev`](crate::chebyshev) segment table |
//! | Moon, EMB | [`moon`](crate::moon) lunar theory added to the Earth |
//! | SSB | mass-weighted sum of the Sun and the four giant planets |
//! | Star1 … Star8 | fixed direction and distance stored in the [`Orrery`] |
//!
//! All vectors are in the J2000 mean equatorial frame (EQJ), positions in AU, velocities in
//! AU/day.
//!
//! [`geo_vector`] adds the light-time iteration and the optional aberration correction needed
//! for apparent positions seen from the center of the Earth.

use std::fmt;

use log::trace;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::chebyshev::pluto_helio_state;
use crate::constants::{
    Au, AU_PER_LY, C_AUDAY, EARTH_GM, EARTH_ORBITAL_PERIOD, JUPITER_GM, MARS_GM, MERCURY_GM,
    MOON_GM, NEPTUNE_GM, PLUTO_GM, SATURN_GM, SUN_GM, URANUS_GM, VENUS_GM,
};
use crate::moon::{geo_emb_state, geo_moon, geo_moon_state};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::time::AstroTime;
use crate::vector::{vector_from_sphere, AstroVector, Spherical, StateVector};
use crate::vsop::{self, VsopPlanet};

/// Light-time iteration stops once successive estimates agree within this many days.
const LIGHT_TIME_TOLERANCE_DAYS: f64 = 1.0e-9;

const LIGHT_TIME_MAX_ITERATIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Sun,
    Moon,
    /// Earth/Moon barycenter
    Emb,
    /// Solar System barycenter
    Ssb,
    Star1,
    Star2,
    Star3,
    Star4,
    Star5,
    Star6,
    Star7,
    Star8,
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Emb => "EMB",
            Body::Ssb => "SSB",
            Body::Star1 => "Star1",
            Body::Star2 => "Star2",
            Body::Star3 => "Star3",
            Body::Star4 => "Star4",
            Body::Star5 => "Star5",
            Body::Star6 => "Star6",
            Body::Star7 => "Star7",
            Body::Star8 => "Star8",
        };
        f.write_str(name)
    }
}

impl Body {
    /// Slot index `0..8` of a user-defined star, `None` for every other body.
    pub fn star_index(self) -> Option<usize> {
        match self {
            Body::Star1 => Some(0),
            Body::Star2 => Some(1),
            Body::Star3 => Some(2),
            Body::Star4 => Some(3),
            Body::Star5 => Some(4),
            Body::Star6 => Some(5),
            Body::Star7 => Some(6),
            Body::Star8 => Some(7),
            _ => None,
        }
    }

    pub fn is_star(self) -> bool {
        self.star_index().is_some()
    }

    /// VSOP series backing this body, if any.
    pub(crate) fn vsop_planet(self) -> Option<VsopPlanet> {
        match self {
            Body::Mercury => Some(VsopPlanet::Mercury),
            Body::Venus => Some(VsopPlanet::Venus),
            Body::Earth => Some(VsopPlanet::Earth),
            Body::Mars => Some(VsopPlanet::Mars),
            Body::Jupiter => Some(VsopPlanet::Jupiter),
            Body::Saturn => Some(VsopPlanet::Saturn),
            Body::Uranus => Some(VsopPlanet::Uranus),
            Body::Neptune => Some(VsopPlanet::Neptune),
            _ => None,
        }
    }
}

/// Whether [`geo_vector`] corrects for the aberration of light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Aberration {
    /// Apparent direction: the Earth's velocity times the light-travel time is added.
    #[default]
    Corrected,
    /// Geometric direction after light-time correction only.
    None,
}

/// Gravitational parameter GM of a body, in AU³/day².
///
/// Returns
/// --------
/// * [`OrreryError::InvalidBody`] for barycenters and stars.
pub fn mass_product(body: Body) -> Result<f64, OrreryError> {
    match body {
        Body::Sun => Ok(SUN_GM),
        Body::Mercury => Ok(MERCURY_GM),
        Body::Venus => Ok(VENUS_GM),
        Body::Earth => Ok(EARTH_GM),
        Body::Moon => Ok(MOON_GM),
        Body::Mars => Ok(MARS_GM),
        Body::Jupiter => Ok(JUPITER_GM),
        Body::Saturn => Ok(SATURN_GM),
        Body::Uranus => Ok(URANUS_GM),
        Body::Neptune => Ok(NEPTUNE_GM),
        Body::Pluto => Ok(PLUTO_GM),
        other => Err(OrreryError::InvalidBody(other)),
    }
}

/// Mean sidereal orbital period of a planet around the Sun, in days.
///
/// Returns
/// --------
/// * [`OrreryError::InvalidBody`] for anything that does not orbit the Sun as a planet.
pub fn planet_orbital_period(body: Body) -> Result<f64, OrreryError> {
    match body {
        Body::Mercury => Ok(87.969),
        Body::Venus => Ok(224.701),
        Body::Earth => Ok(EARTH_ORBITAL_PERIOD),
        Body::Mars => Ok(686.980),
        Body::Jupiter => Ok(4_332.589),
        Body::Saturn => Ok(10_759.22),
        Body::Uranus => Ok(30_685.4),
        Body::Neptune => Ok(60_189.0),
        Body::Pluto => Ok(90_560.0),
        other => Err(OrreryError::InvalidBody(other)),
    }
}

/// Mean synodic period of a planet as seen from the Earth, in days.
pub(crate) fn synodic_period(body: Body) -> Result<f64, OrreryError> {
    if body == Body::Earth {
        return Err(OrreryError::EarthNotAllowed);
    }
    let tp = planet_orbital_period(body)?;
    Ok((EARTH_ORBITAL_PERIOD / (EARTH_ORBITAL_PERIOD / tp - 1.0)).abs())
}

/// Heliocentric EQJ vector of a star slot. Stars do not move.
fn star_helio_state(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
) -> Result<StateVector, OrreryError> {
    let star = orrery.star(body)?;
    let sphere = Spherical::new(star.dec, 15.0 * star.ra, star.dist_ly * AU_PER_LY);
    let pos = vector_from_sphere(&sphere, *time).pos;
    Ok(StateVector::new(pos, Vector3::zeros(), *time))
}

/// Heliocentric state of the Solar System barycenter, from the Sun and the four giants.
fn ssb_helio_state(time: &AstroTime) -> StateVector {
    let giants = [
        (VsopPlanet::Jupiter, JUPITER_GM),
        (VsopPlanet::Saturn, SATURN_GM),
        (VsopPlanet::Uranus, URANUS_GM),
        (VsopPlanet::Neptune, NEPTUNE_GM),
    ];
    let (pos, vel, total_gm) = giants.iter().fold(
        (Vector3::<f64>::zeros(), Vector3::<f64>::zeros(), SUN_GM),
        |(pos, vel, gm_sum), &(planet, gm)| {
            let state = vsop::helio_state(planet, time);
            (pos + state.pos * gm, vel + state.vel * gm, gm_sum + gm)
        },
    );
    StateVector::new(pos / total_gm, vel / total_gm, *time)
}

/// Heliocentric position and velocity of a body (EQJ, AU and AU/day).
///
/// Arguments
/// ---------
/// * `orrery`: context, used for star definitions.
/// * `body`: any [`Body`].
/// * `time`: the instant; positions are geometric at this time (no light-time correction).
///
/// Returns
/// --------
/// * The state, or [`OrreryError::InvalidBody`] for an undefined star and
///   [`OrreryError::OutOfRange`] for Pluto outside its table.
pub fn helio_state(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
) -> Result<StateVector, OrreryError> {
    if let Some(planet) = body.vsop_planet() {
        return Ok(vsop::helio_state(planet, time));
    }
    match body {
        Body::Sun => Ok(StateVector::zero(*time)),
        Body::Pluto => pluto_helio_state(time),
        Body::Moon | Body::Emb => {
            let earth = vsop::helio_state(VsopPlanet::Earth, time);
            let geo = if body == Body::Moon {
                geo_moon_state(time)
            } else {
                geo_emb_state(time)
            };
            Ok(StateVector::new(earth.pos + geo.pos, earth.vel + geo.vel, *time))
        }
        Body::Ssb => Ok(ssb_helio_state(time)),
        star => star_helio_state(orrery, star, time),
    }
}

/// Heliocentric position of a body (EQJ, AU).
///
/// See also
/// ------------
/// * [`helio_state`] – same computation with velocity.
pub fn helio_vector(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
) -> Result<AstroVector, OrreryError> {
    Ok(helio_state(orrery, body, time)?.position())
}

/// Distance of a body from the center of the Sun, in AU.
pub fn helio_distance(orrery: &Orrery, body: Body, time: &AstroTime) -> Result<Au, OrreryError> {
    if let Some(planet) = body.vsop_planet() {
        return Ok(vsop::ecliptic_lbr(planet, time.tt()).rad);
    }
    Ok(helio_vector(orrery, body, time)?.length())
}

/// Barycentric state of a body (EQJ): its heliocentric state minus that of the SSB.
pub fn bary_state(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
) -> Result<StateVector, OrreryError> {
    if body == Body::Ssb {
        return Ok(StateVector::zero(*time));
    }
    let ssb = ssb_helio_state(time);
    let helio = helio_state(orrery, body, time)?;
    Ok(StateVector::new(helio.pos - ssb.pos, helio.vel - ssb.vel, *time))
}

/// Apparent geocentric position of a body (EQJ, AU), as seen from the center of the Earth.
///
/// The body is evaluated at the time its light left it: the light-travel time is iterated
/// until two estimates agree within `1e-9` day. With [`Aberration::Corrected`] the Earth's
/// barycentric velocity multiplied by the light-travel time is added to the result.
///
/// Special cases:
/// - the Earth returns the zero vector,
/// - the Moon comes straight from the lunar theory (its light-time is ignored),
/// - stars are too distant for light-time; only the Earth's offset is removed.
///
/// Returns
/// --------
/// * The vector tagged with `time`, or [`OrreryError::NoConvergence`] when the light-time
///   iteration does not settle in 10 passes.
///
/// See also
/// ------------
/// * [`helio_vector`] – geometric heliocentric position.
pub fn geo_vector(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
    aberration: Aberration,
) -> Result<AstroVector, OrreryError> {
    match body {
        Body::Earth => return Ok(AstroVector::zero(*time)),
        Body::Moon => return Ok(geo_moon(time)),
        _ => {}
    }

    let earth = vsop::helio_state(VsopPlanet::Earth, time);
    if body.is_star() {
        let star = helio_vector(orrery, body, time)?;
        return Ok(AstroVector::from_vec(star.pos - earth.pos, *time));
    }

    let mut ltime = *time;
    let mut converged = None;
    for iter in 0..LIGHT_TIME_MAX_ITERATIONS {
        let geo = helio_vector(orrery, body, &ltime)?.pos - earth.pos;
        let next = time.add_days(-geo.norm() / C_AUDAY);
        let shift = (next.tt() - ltime.tt()).abs();
        trace!("light-time pass {iter} for {body}: shift = {shift:e} day");
        if shift < LIGHT_TIME_TOLERANCE_DAYS {
            converged = Some(geo);
            break;
        }
        ltime = next;
    }
    let mut geo = converged.ok_or_else(|| {
        OrreryError::NoConvergence(format!("light-time iteration for {body} at {time}"))
    })?;

    if aberration == Aberration::Corrected {
        let earth_vel = bary_state(orrery, Body::Earth, time)?.vel;
        geo += earth_vel * (geo.norm() / C_AUDAY);
    }
    Ok(AstroVector::from_vec(geo, *time))
}

#[cfg(test)]
mod bodies_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_earth_geo_vector_is_zero() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(1234.5);
        let v = geo_vector(&orrery, Body::Earth, &time, Aberration::Corrected).unwrap();
        assert_eq!(v.pos, Vector3::zeros());
    }

    #[test]
    fn test_sun_geo_is_opposite_earth() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(-200.0);
        let sun = geo_vector(&orrery, Body::Sun, &time, Aberration::None).unwrap();
        let earth = helio_vector(&orrery, Body::Earth, &time).unwrap();
        assert_abs_diff_eq!(sun.pos, -earth.pos, epsilon = 1e-15);

        // aberration shifts the Sun by about 20 arcseconds
        let apparent = geo_vector(&orrery, Body::Sun, &time, Aberration::Corrected).unwrap();
        let shift = sun.pos.angle(&apparent.pos).to_degrees() * 3600.0;
        assert!((19.0..22.0).contains(&shift), "shift = {shift}");
    }

    #[test]
    fn test_light_time_is_applied() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(5000.0);
        let geometric = helio_vector(&orrery, Body::Jupiter, &time).unwrap().pos
            - helio_vector(&orrery, Body::Earth, &time).unwrap().pos;
        let apparent = geo_vector(&orrery, Body::Jupiter, &time, Aberration::None).unwrap();
        let diff = (apparent.pos - geometric).norm();
        // Jupiter moves ~0.0075 AU/day and light takes ~0.03 day to reach us
        assert!(diff > 1.0e-5 && diff < 1.0e-3, "diff = {diff}");
    }

    #[test]
    fn test_emb_lies_between_earth_and_moon() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(42.0);
        let earth = helio_vector(&orrery, Body::Earth, &time).unwrap().pos;
        let moon = helio_vector(&orrery, Body::Moon, &time).unwrap().pos;
        let emb = helio_vector(&orrery, Body::Emb, &time).unwrap().pos;
        let frac = (emb - earth).norm() / (moon - earth).norm();
        assert_abs_diff_eq!(frac, 1.0 / 82.300_56, epsilon = 1e-12);
    }

    #[test]
    fn test_ssb_close_to_sun() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(0.0);
        let ssb = helio_vector(&orrery, Body::Ssb, &time).unwrap();
        // within about two solar radii
        assert!(ssb.length() < 0.02);
        let sun = bary_state(&orrery, Body::Sun, &time).unwrap();
        assert_abs_diff_eq!(sun.pos, -ssb.pos, epsilon = 1e-15);
    }

    #[test]
    fn test_star_vector() {
        let mut orrery = Orrery::new();
        orrery.define_star(Body::Star2, 6.0, 30.0, 10.0).unwrap();
        let time = AstroTime::from_ut(0.0);
        let star = helio_vector(&orrery, Body::Star2, &time).unwrap();
        assert_abs_diff_eq!(star.length(), 10.0 * AU_PER_LY, epsilon = 1e-6);
        assert_abs_diff_eq!(star.pos.x, 0.0, epsilon = 1e-6);
        assert!(helio_vector(&orrery, Body::Star5, &time).is_err());
    }

    #[test]
    fn test_mass_and_period_errors() {
        assert_eq!(mass_product(Body::Ssb), Err(OrreryError::InvalidBody(Body::Ssb)));
        assert_eq!(
            planet_orbital_period(Body::Moon),
            Err(OrreryError::InvalidBody(Body::Moon))
        );
        assert_abs_diff_eq!(synodic_period(Body::Venus).unwrap(), 583.9, epsilon = 0.2);
        assert_abs_diff_eq!(synodic_period(Body::Mars).unwrap(), 779.9, epsilon = 0.2);
    }

    #[test]
    fn test_helio_distance_matches_vector() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(3000.0);
        for body in [Body::Mars, Body::Pluto, Body::Moon] {
            let d = helio_distance(&orrery, body, &time).unwrap();
            let v = helio_vector(&orrery, body, &time).unwrap().length();
            assert_abs_diff_eq!(d, v, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Body::Emb.to_string(), "EMB");
        assert_eq!(Body::Star8.to_string(), "Star8");
    }
}
