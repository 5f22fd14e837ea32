//! # Apparent coordinates of bodies
//!
//! Convenience layer joining the position engines of [`crate::bodies`] with the frame
//! rotations of [`crate::rotation`]:
//!
//! - [`equator`] – topocentric right ascension and declination (J2000 or of date),
//! - [`ecliptic`] – J2000 mean ecliptic coordinates of an EQJ vector,
//! - [`sun_position`] – apparent geocentric Sun on the true ecliptic of date,
//! - [`ecliptic_longitude`] – heliocentric J2000 ecliptic longitude of a body,
//! - [`pair_longitude`] – geocentric longitude difference of two bodies,
//! - [`angle_from_sun`] – geocentric angle between a body and the Sun.

use crate::bodies::{geo_vector, helio_vector, Aberration, Body};
use crate::constants::Degree;
use crate::conversion::normalize_longitude;
use crate::observers::{observer_vector, EquatorEpoch, Observer};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::rotation::{rotation_eqj_ecl, rotation_eqj_ect, rotation_eqj_eqd};
use crate::time::AstroTime;
use crate::vector::{
    angle_between, equator_from_vector, sphere_from_vector, AstroVector, Equatorial,
};

/// Ecliptic coordinates together with the Cartesian vector they came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecliptic {
    /// Cartesian vector in the ecliptic frame, AU
    pub vec: AstroVector,
    /// Ecliptic latitude, degrees
    pub elat: Degree,
    /// Ecliptic longitude, degrees in `[0, 360)`
    pub elon: Degree,
}

fn ecliptic_from_vector(vec: AstroVector) -> Result<Ecliptic, OrreryError> {
    let sphere = sphere_from_vector(&vec)?;
    Ok(Ecliptic {
        vec,
        elat: sphere.lat,
        elon: sphere.lon,
    })
}

/// Topocentric equatorial coordinates of a body.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `body`: the observed body.
/// * `time`: the instant.
/// * `observer`: location on the Earth.
/// * `equdate`: J2000 mean equator or true equator of date.
/// * `aberration`: whether to correct for the observer's motion.
///
/// Returns
/// --------
/// * [`Equatorial`] with RA in hours, declination in degrees and the observer-centered vector.
///
/// See also
/// ------------
/// * [`crate::observers::horizon`] – azimuth and altitude from an of-date RA/Dec.
pub fn equator(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
    observer: &Observer,
    equdate: EquatorEpoch,
    aberration: Aberration,
) -> Result<Equatorial, OrreryError> {
    let site = observer_vector(orrery, time, observer, EquatorEpoch::J2000);
    let geo = geo_vector(orrery, body, time, aberration)?;
    let topo = AstroVector::from_vec(geo.pos - site.pos, *time);
    let vec = match equdate {
        EquatorEpoch::J2000 => topo,
        EquatorEpoch::OfDate => rotation_eqj_eqd(orrery, time).rotate_vector(&topo),
    };
    equator_from_vector(&vec)
}

/// Convert an EQJ vector to the J2000 mean ecliptic.
pub fn ecliptic(eqj: &AstroVector) -> Result<Ecliptic, OrreryError> {
    ecliptic_from_vector(rotation_eqj_ecl().rotate_vector(eqj))
}

/// Apparent geocentric position of the Sun on the true ecliptic and equinox of date.
///
/// Light-time and aberration are both included, so `elon` is the apparent solar longitude
/// used to define the seasons.
pub fn sun_position(orrery: &Orrery, time: &AstroTime) -> Result<Ecliptic, OrreryError> {
    let sun = geo_vector(orrery, Body::Sun, time, Aberration::Corrected)?;
    ecliptic_from_vector(rotation_eqj_ect(orrery, time).rotate_vector(&sun))
}

/// Heliocentric longitude of a body on the J2000 mean ecliptic, degrees.
///
/// Returns
/// --------
/// * [`OrreryError::InvalidBody`] for the Sun.
pub fn ecliptic_longitude(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
) -> Result<Degree, OrreryError> {
    if body == Body::Sun {
        return Err(OrreryError::InvalidBody(body));
    }
    let helio = helio_vector(orrery, body, time)?;
    Ok(ecliptic(&helio)?.elon)
}

/// Geocentric ecliptic longitude of `body1` minus that of `body2`, in `[0, 360)`.
///
/// Both longitudes are taken on the true ecliptic of date, without aberration.
///
/// Returns
/// --------
/// * [`OrreryError::EarthNotAllowed`] if either body is the Earth.
pub fn pair_longitude(
    orrery: &Orrery,
    body1: Body,
    body2: Body,
    time: &AstroTime,
) -> Result<Degree, OrreryError> {
    if body1 == Body::Earth || body2 == Body::Earth {
        return Err(OrreryError::EarthNotAllowed);
    }
    let rot = rotation_eqj_ect(orrery, time);
    let lon = |body| -> Result<Degree, OrreryError> {
        let geo = geo_vector(orrery, body, time, Aberration::None)?;
        Ok(sphere_from_vector(&rot.rotate_vector(&geo))?.lon)
    };
    Ok(normalize_longitude(lon(body1)? - lon(body2)?))
}

/// Angle in degrees between a body and the Sun, as seen from the center of the Earth.
///
/// Returns
/// --------
/// * [`OrreryError::EarthNotAllowed`] for the Earth.
pub fn angle_from_sun(
    orrery: &Orrery,
    body: Body,
    time: &AstroTime,
) -> Result<Degree, OrreryError> {
    if body == Body::Earth {
        return Err(OrreryError::EarthNotAllowed);
    }
    let sun = geo_vector(orrery, Body::Sun, time, Aberration::Corrected)?;
    let target = geo_vector(orrery, body, time, Aberration::Corrected)?;
    angle_between(&sun, &target)
}

#[cfg(test)]
mod coordinates_test {
    use super::*;
    use crate::conversion::longitude_offset;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sun_longitude_at_equinox() {
        // March equinox 2019: 2019-03-20 21:58 UTC
        let orrery = Orrery::new();
        let time = orrery.make_time(2019, 3, 20, 21, 58, 0.0).unwrap();
        let sun = sun_position(&orrery, &time).unwrap();
        let lon = if sun.elon > 180.0 { sun.elon - 360.0 } else { sun.elon };
        // the Sun moves about 0.04 degrees per minute of time
        assert_abs_diff_eq!(lon, 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(sun.elat, 0.0, epsilon = 0.001);
    }

    #[test]
    fn test_ecliptic_longitude_of_earth() {
        let orrery = Orrery::new();
        let time = orrery.make_time(2019, 3, 20, 21, 58, 0.0).unwrap();
        // the Earth is opposite the Sun: heliocentric longitude near 180 at the March equinox
        let lon = ecliptic_longitude(&orrery, Body::Earth, &time).unwrap();
        assert_abs_diff_eq!(lon, 180.0 - 0.27, epsilon = 0.05);
        assert_eq!(
            ecliptic_longitude(&orrery, Body::Sun, &time),
            Err(OrreryError::InvalidBody(Body::Sun))
        );
    }

    #[test]
    fn test_pair_longitude_antisymmetric() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(7000.0);
        let a = pair_longitude(&orrery, Body::Mars, Body::Sun, &time).unwrap();
        let b = pair_longitude(&orrery, Body::Sun, Body::Mars, &time).unwrap();
        assert_abs_diff_eq!(longitude_offset(a + b), 0.0, epsilon = 1e-9);
        assert_eq!(
            pair_longitude(&orrery, Body::Earth, Body::Sun, &time),
            Err(OrreryError::EarthNotAllowed)
        );
    }

    #[test]
    fn test_venus_never_far_from_sun() {
        let orrery = Orrery::new();
        let mut ut = 0.0;
        while ut < 600.0 {
            let angle = angle_from_sun(&orrery, Body::Venus, &AstroTime::from_ut(ut)).unwrap();
            assert!(angle < 48.0, "ut={ut} angle={angle}");
            ut += 10.0;
        }
    }

    #[test]
    fn test_equator_topocentric_moon_parallax() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(8500.25);
        let observer = Observer::new(0.0, 0.0, 0.0).unwrap();
        let topo = equator(
            &orrery,
            Body::Moon,
            &time,
            &observer,
            EquatorEpoch::J2000,
            Aberration::None,
        )
        .unwrap();
        let geo = geo_vector(&orrery, Body::Moon, &time, Aberration::None).unwrap();
        let shift = angle_between(&topo.vec, &geo).unwrap();
        // horizontal parallax of the Moon is about one degree
        assert!(shift < 1.05, "shift = {shift}");
        assert!((0.0..24.0).contains(&topo.ra));
    }

    #[test]
    fn test_equator_of_date_differs_by_precession() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(9000.0);
        let observer = Observer::new(40.0, -75.0, 0.0).unwrap();
        let at_epoch = |equdate| {
            equator(&orrery, Body::Saturn, &time, &observer, equdate, Aberration::Corrected)
                .unwrap()
        };
        let j2000 = at_epoch(EquatorEpoch::J2000);
        let ofdate = at_epoch(EquatorEpoch::OfDate);
        assert_abs_diff_eq!(j2000.dist, ofdate.dist, epsilon = 1e-12);
        let shift = angle_between(&j2000.vec, &ofdate.vec).unwrap();
        // about 25 years of precession
        assert!(shift > 0.2 && shift < 0.5, "shift = {shift}");
    }
}
