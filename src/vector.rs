//! # Time-tagged vectors and spherical coordinates
//!
//! [`AstroVector`] and [`StateVector`] pair an `nalgebra` [`Vector3`] with the
//! [`AstroTime`] at which it is valid. The frame (EQJ, EQD, ECL, …) is a usage convention
//! documented by the function that produced the value; it is not encoded in the type.

use nalgebra::Vector3;

use crate::constants::{Au, Degree, Hour, DEGRAD, RADEG};
use crate::orrery_errors::OrreryError;
use crate::time::AstroTime;

/// Squared length below which a vector cannot define a direction.
const MIN_SQUARED_LENGTH: f64 = 1.0e-8;

/// A Cartesian position in AU, valid at time `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstroVector {
    pub pos: Vector3<f64>,
    pub t: AstroTime,
}

impl AstroVector {
    pub fn new(x: f64, y: f64, z: f64, t: AstroTime) -> Self {
        AstroVector {
            pos: Vector3::new(x, y, z),
            t,
        }
    }

    pub fn from_vec(pos: Vector3<f64>, t: AstroTime) -> Self {
        AstroVector { pos, t }
    }

    pub fn zero(t: AstroTime) -> Self {
        AstroVector {
            pos: Vector3::zeros(),
            t,
        }
    }

    /// Euclidean length in AU.
    pub fn length(&self) -> Au {
        self.pos.norm()
    }

    /// Unit vector in the same direction.
    ///
    /// Returns
    /// --------
    /// * [`OrreryError::BadVector`] when the squared length is below `1e-8`.
    pub fn normalize(&self) -> Result<AstroVector, OrreryError> {
        let sq = self.pos.norm_squared();
        if sq < MIN_SQUARED_LENGTH {
            return Err(OrreryError::BadVector);
        }
        Ok(AstroVector::from_vec(self.pos / sq.sqrt(), self.t))
    }
}

/// Position (AU) and velocity (AU/day) valid at time `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub pos: Vector3<f64>,
    pub vel: Vector3<f64>,
    pub t: AstroTime,
}

impl StateVector {
    pub fn new(pos: Vector3<f64>, vel: Vector3<f64>, t: AstroTime) -> Self {
        StateVector { pos, vel, t }
    }

    pub fn zero(t: AstroTime) -> Self {
        StateVector {
            pos: Vector3::zeros(),
            vel: Vector3::zeros(),
            t,
        }
    }

    /// Position part as an [`AstroVector`].
    pub fn position(&self) -> AstroVector {
        AstroVector::from_vec(self.pos, self.t)
    }
}

/// Spherical coordinates: latitude and longitude in degrees, distance in the unit of the
/// source vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub lat: Degree,
    pub lon: Degree,
    pub dist: f64,
}

impl Spherical {
    pub fn new(lat: Degree, lon: Degree, dist: f64) -> Self {
        Spherical { lat, lon, dist }
    }
}

/// Equatorial angular coordinates together with the Cartesian vector they came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    /// Right ascension in sidereal hours, `[0, 24)`
    pub ra: Hour,
    /// Declination in degrees
    pub dec: Degree,
    /// Distance in AU
    pub dist: Au,
    pub vec: AstroVector,
}

/// Convert spherical coordinates to a Cartesian vector.
///
/// Arguments
/// ---------
/// * `sphere`: latitude/longitude in degrees and a distance.
/// * `t`: time tag of the resulting vector.
pub fn vector_from_sphere(sphere: &Spherical, t: AstroTime) -> AstroVector {
    let (sin_lat, cos_lat) = (sphere.lat * RADEG).sin_cos();
    let (sin_lon, cos_lon) = (sphere.lon * RADEG).sin_cos();
    let r_cos = sphere.dist * cos_lat;
    AstroVector::new(r_cos * cos_lon, r_cos * sin_lon, sphere.dist * sin_lat, t)
}

/// Convert a Cartesian vector to spherical coordinates.
///
/// The longitude is in `[0, 360)`. On the polar axis the longitude is undefined and is
/// reported as 0 with latitude ±90.
///
/// Returns
/// --------
/// * [`OrreryError::BadVector`] for the zero vector.
pub fn sphere_from_vector(vector: &AstroVector) -> Result<Spherical, OrreryError> {
    let v = &vector.pos;
    let xyproj = v.x * v.x + v.y * v.y;
    let dist = (xyproj + v.z * v.z).sqrt();
    if xyproj == 0.0 {
        if v.z == 0.0 {
            return Err(OrreryError::BadVector);
        }
        let lat = if v.z < 0.0 { -90.0 } else { 90.0 };
        return Ok(Spherical::new(lat, 0.0, dist));
    }
    let mut lon = DEGRAD * v.y.atan2(v.x);
    if lon < 0.0 {
        lon += 360.0;
    }
    let lat = DEGRAD * v.z.atan2(xyproj.sqrt());
    Ok(Spherical::new(lat, lon, dist))
}

/// Right ascension (hours) and declination (degrees) of an equatorial vector.
pub fn equator_from_vector(vector: &AstroVector) -> Result<Equatorial, OrreryError> {
    let sphere = sphere_from_vector(vector)?;
    Ok(Equatorial {
        ra: sphere.lon / 15.0,
        dec: sphere.lat,
        dist: sphere.dist,
        vec: *vector,
    })
}

/// Angle in degrees between two vectors.
///
/// Returns
/// --------
/// * [`OrreryError::BadVector`] when either vector is too short to define a direction.
pub fn angle_between(a: &AstroVector, b: &AstroVector) -> Result<Degree, OrreryError> {
    let r = a.length() * b.length();
    if r < MIN_SQUARED_LENGTH {
        return Err(OrreryError::BadVector);
    }
    let dot = (a.pos.dot(&b.pos) / r).clamp(-1.0, 1.0);
    Ok(DEGRAD * dot.acos())
}

#[cfg(test)]
mod vector_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn t0() -> AstroTime {
        AstroTime::from_ut(0.0)
    }

    #[test]
    fn test_sphere_round_trip() {
        let mut lat = -89.0;
        while lat <= 89.0 {
            let mut lon = 0.0;
            while lon < 360.0 {
                let v = vector_from_sphere(&Spherical::new(lat, lon, 1.0), t0());
                let s = sphere_from_vector(&v).unwrap();
                assert_abs_diff_eq!(s.lat, lat, epsilon = 1e-14 * 90.0);
                let dlon = (s.lon - lon).abs();
                assert!(dlon.min(360.0 - dlon) < 1e-12, "lat={lat} lon={lon} got {}", s.lon);
                assert_abs_diff_eq!(s.dist, 1.0, epsilon = 1e-15);
                lon += 7.5;
            }
            lat += 0.5;
        }
    }

    #[test]
    fn test_pole_longitude_is_zero() {
        let s = sphere_from_vector(&AstroVector::new(0.0, 0.0, -2.0, t0())).unwrap();
        assert_eq!((s.lat, s.lon, s.dist), (-90.0, 0.0, 2.0));
    }

    #[test]
    fn test_zero_vector_is_rejected() {
        assert_eq!(
            sphere_from_vector(&AstroVector::zero(t0())),
            Err(OrreryError::BadVector)
        );
        assert_eq!(
            AstroVector::new(1e-5, 0.0, 0.0, t0()).normalize(),
            Err(OrreryError::BadVector)
        );
    }

    #[test]
    fn test_angle_between() {
        let a = AstroVector::new(1.0, 0.0, 0.0, t0());
        let b = AstroVector::new(0.0, 3.0, 0.0, t0());
        let c = AstroVector::new(-2.0, 0.0, 0.0, t0());
        assert_abs_diff_eq!(angle_between(&a, &b).unwrap(), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_between(&a, &c).unwrap(), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_between(&a, &a).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equator_from_vector_hours() {
        let v = AstroVector::new(0.0, -1.0, 0.0, t0());
        let eq = equator_from_vector(&v).unwrap();
        assert_abs_diff_eq!(eq.ra, 18.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq.dec, 0.0, epsilon = 1e-12);
    }
}
