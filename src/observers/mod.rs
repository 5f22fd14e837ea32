//! # Observer & site geometry
//!
//! This module gathers everything tied to a location on the Earth:
//!
//! - The [`Observer`] type: geodetic latitude, longitude (degrees, east positive) and height
//!   above the WGS-84 ellipsoid (meters), stored as `NotNan<f64>` so that observers are
//!   hashable and comparable.
//! - The observer's **geocentric position and rotational velocity** ([`observer_vector`],
//!   [`observer_state`]) either in the true equator of date (EQD) or in the J2000 mean
//!   equator (EQJ), selected by [`EquatorEpoch`].
//! - The inverse problem ([`vector_observer`]): the geodetic site below a geocentric vector.
//! - Local sky coordinates and refraction, in [`horizon`].
//!
//! ## Frames & conventions
//!
//! ```text
//! Earth-fixed --(GAST spin)--> EQD --(nutationᵀ, precessionᵀ)--> EQJ
//! ```
//!
//! The Earth-fixed site vector comes from an oblate-Earth model: equatorial
//! radius 6378.1366 km, flattening ratio 0.996647180302104. The rotational velocity is
//! `ω × r` with `ω` = 7.2921150e-5 rad/s.
//!
//! ## Units
//!
//! - Positions: **AU**, velocities: **AU/day**.
//! - Height: **meters**.
//!
//! ## See also
//! ------------
//! * [`horizon::horizon`] – azimuth/altitude of an equatorial direction.
//! * [`crate::rotation::rotation_eqd_hor`] – the same local axes as a rotation matrix.
//! * [`crate::coordinates::equator`] – topocentric RA/Dec of a body.

pub mod horizon;
mod terra;

use nalgebra::Matrix3;
use ordered_float::NotNan;

use crate::constants::{Degree, Meter};
use crate::earth_orientation::{nutation_matrix, precession_matrix};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::time::AstroTime;
use crate::vector::{AstroVector, StateVector};

pub use self::horizon::{
    horizon, inverse_refraction_angle, refraction_angle, Refraction, Topocentric,
};
pub use self::terra::observer_gravity;

/// Which equator the observer vectors are referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EquatorEpoch {
    /// Mean equator and equinox of J2000 (EQJ)
    #[default]
    J2000,
    /// True equator and equinox of date (EQD)
    OfDate,
}

/// A geographic location on the Earth.
///
/// Units
/// -----
/// * `latitude`: geodetic degrees, north positive, within `[-90, 90]`.
/// * `longitude`: degrees east of Greenwich.
/// * `height`: meters above the WGS-84 ellipsoid.
///
/// See also
/// ------------
/// * [`Observer::new`] – validated constructor.
/// * [`vector_observer`] – the observer below a geocentric vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Observer {
    latitude: NotNan<f64>,
    longitude: NotNan<f64>,
    height: NotNan<f64>,
}

impl Observer {
    /// Create a new observer.
    ///
    /// Arguments
    /// ---------
    /// * `latitude`: geodetic latitude in degrees.
    /// * `longitude`: longitude in degrees east of Greenwich.
    /// * `height`: height above the ellipsoid in meters.
    ///
    /// Returns
    /// --------
    /// * [`OrreryError::InvalidParameter`] if any value is NaN or the latitude lies outside
    ///   `[-90, 90]`.
    pub fn new(latitude: Degree, longitude: Degree, height: Meter) -> Result<Self, OrreryError> {
        let not_nan = |value: f64, name: &str| {
            NotNan::new(value)
                .map_err(|_| OrreryError::InvalidParameter(format!("observer {name} is NaN")))
        };
        let latitude = not_nan(latitude, "latitude")?;
        if latitude.into_inner().abs() > 90.0 {
            return Err(OrreryError::InvalidParameter(format!(
                "observer latitude {latitude} outside [-90, 90]"
            )));
        }
        Ok(Observer {
            latitude,
            longitude: not_nan(longitude, "longitude")?,
            height: not_nan(height, "height")?,
        })
    }

    pub fn latitude(&self) -> Degree {
        self.latitude.into_inner()
    }

    pub fn longitude(&self) -> Degree {
        self.longitude.into_inner()
    }

    pub fn height(&self) -> Meter {
        self.height.into_inner()
    }
}

/// Geocentric state of an observer.
///
/// Arguments
/// ---------
/// * `orrery`: context (sidereal time and Earth tilt).
/// * `time`: the instant.
/// * `observer`: the site.
/// * `equdate`: [`EquatorEpoch::OfDate`] keeps the EQD vectors, [`EquatorEpoch::J2000`]
///   rotates them to EQJ.
///
/// Returns
/// --------
/// * Position in AU and velocity (Earth rotation only) in AU/day.
pub fn observer_state(
    orrery: &Orrery,
    time: &AstroTime,
    observer: &Observer,
    equdate: EquatorEpoch,
) -> StateVector {
    let (pos, vel) = terra::terra(observer, orrery.sidereal_time(time));
    match equdate {
        EquatorEpoch::OfDate => StateVector::new(pos, vel, *time),
        EquatorEpoch::J2000 => {
            let rot = eqd_to_eqj(orrery, time);
            StateVector::new(rot * pos, rot * vel, *time)
        }
    }
}

/// Geocentric position of an observer; see [`observer_state`].
pub fn observer_vector(
    orrery: &Orrery,
    time: &AstroTime,
    observer: &Observer,
    equdate: EquatorEpoch,
) -> AstroVector {
    observer_state(orrery, time, observer, equdate).position()
}

/// Geodetic location of the point described by a geocentric vector.
///
/// Arguments
/// ---------
/// * `orrery`: context.
/// * `vector`: geocentric position in AU; its time tag fixes the Earth's orientation.
/// * `equdate`: frame of `vector`.
///
/// Returns
/// --------
/// * The [`Observer`] whose [`observer_vector`] is `vector`, or
///   [`OrreryError::NoConvergence`] if the latitude iteration fails.
pub fn vector_observer(
    orrery: &Orrery,
    vector: &AstroVector,
    equdate: EquatorEpoch,
) -> Result<Observer, OrreryError> {
    let time = vector.t;
    let pos = match equdate {
        EquatorEpoch::OfDate => vector.pos,
        EquatorEpoch::J2000 => eqd_to_eqj(orrery, &time).transpose() * vector.pos,
    };
    terra::inverse_terra(&pos, orrery.sidereal_time(&time))
}

fn eqd_to_eqj(orrery: &Orrery, time: &AstroTime) -> Matrix3<f64> {
    let tilt = orrery.tilt(time);
    precession_matrix(time.tt()).transpose() * nutation_matrix(&tilt).transpose()
}

#[cfg(test)]
mod observers_test {
    use super::*;
    use crate::constants::{EARTH_EQUATORIAL_RADIUS_KM, KM_PER_AU};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_observer_validation() {
        assert!(Observer::new(45.0, 10.0, 100.0).is_ok());
        assert!(matches!(
            Observer::new(f64::NAN, 10.0, 0.0),
            Err(OrreryError::InvalidParameter(_))
        ));
        assert!(matches!(
            Observer::new(90.5, 10.0, 0.0),
            Err(OrreryError::InvalidParameter(_))
        ));
        assert!(Observer::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_observer_hashable() {
        use std::collections::HashSet;
        let a = Observer::new(19.82, -155.47, 4205.0).unwrap();
        let b = Observer::new(19.82, -155.47, 4205.0).unwrap();
        let set: HashSet<Observer> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_observer_vector_length() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(8000.0);
        let observer = Observer::new(0.0, 45.0, 0.0).unwrap();
        for epoch in [EquatorEpoch::J2000, EquatorEpoch::OfDate] {
            let v = observer_vector(&orrery, &time, &observer, epoch);
            let radius_km = v.length() * KM_PER_AU;
            assert_abs_diff_eq!(radius_km, EARTH_EQUATORIAL_RADIUS_KM, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_observer_velocity_perpendicular() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(-1234.5);
        let observer = Observer::new(52.0, 4.9, 10.0).unwrap();
        let state = observer_state(&orrery, &time, &observer, EquatorEpoch::OfDate);
        assert_abs_diff_eq!(state.pos.dot(&state.vel) / state.pos.norm(), 0.0, epsilon = 1e-15);
        assert_eq!(state.vel.z, 0.0);
    }

    #[test]
    fn test_vector_observer_round_trip() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(6000.25);
        for (lat, lon, height) in [(-33.9, 18.4, 0.0), (64.1, -21.9, 50.0), (0.0, 179.5, 2500.0)] {
            let observer = Observer::new(lat, lon, height).unwrap();
            for epoch in [EquatorEpoch::J2000, EquatorEpoch::OfDate] {
                let v = observer_vector(&orrery, &time, &observer, epoch);
                let back = vector_observer(&orrery, &v, epoch).unwrap();
                assert_abs_diff_eq!(back.latitude(), lat, epsilon = 1e-9);
                assert_abs_diff_eq!(back.longitude(), lon, epsilon = 1e-9);
                assert_abs_diff_eq!(back.height(), height, epsilon = 1e-3);
            }
        }
    }
}
