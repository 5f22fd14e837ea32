//! # Rotation matrices between celestial frames
//!
//! A [`RotationMatrix`] converts vectors from one orientation to another. The supported
//! frames are listed in [`Frame`]:
//!
//! | Frame | Fundamental plane | Origin of longitude |
//! |---|---|---|
//! | EQJ | mean equator of J2000 | mean equinox of J2000 |
//! | EQD | true equator of date | true equinox of date |
//! | ECL | mean ecliptic of J2000 | mean equinox of J2000 |
//! | ECT | true ecliptic of date | true equinox of date |
//! | HOR | observer's horizon | north, `y` toward west |
//! | GAL | galactic plane (IAU 1958) | galactic center |
//!
//! Matrices act on column vectors, `v_out = M · v_in`, so "apply `A` then `B`" is the product
//! `B · A`; [`RotationMatrix::combine`] hides that ordering. The inverse of a rotation is its
//! transpose.
//!
//! [`rotation_between`] reaches any pair of frames by going through EQJ.
//!
//! ```text
//! ECL ─┐                ┌─ ECT
//! GAL ─┼── EQJ ── EQD ──┼─ HOR
//!      └────────────────┘
//! ```

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Degree, RADEG};
use crate::earth_orientation::{ecliptic_to_equator_matrix, nutation_matrix, precession_matrix};
use crate::observers::horizon::local_axes;
use crate::observers::{inverse_refraction_angle, refraction_angle, Observer, Refraction};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::time::AstroTime;
use crate::vector::{sphere_from_vector, vector_from_sphere, AstroVector, Spherical, StateVector};

/// cos and sin of the J2000 mean obliquity used for the ECL frame.
const COS_OBL_J2000: f64 = 0.917_482_143_067_068_8;
const SIN_OBL_J2000: f64 = 0.397_776_969_108_392_2;

/// Right ascension and declination of the north galactic pole, and galactic longitude of the
/// ascending node of the galactic plane on the J2000 equator (degrees).
const GAL_POLE_RA: Degree = 192.859_48;
const GAL_POLE_DEC: Degree = 27.128_25;
const GAL_NODE_LON: Degree = 32.931_92;

/// A coordinate axis, for elementary rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl TryFrom<u8> for Axis {
    type Error = OrreryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(OrreryError::InvalidParameter(format!(
                "axis index {value} (must be 0, 1 or 2)"
            ))),
        }
    }
}

/// Celestial reference frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Mean equator and equinox of J2000
    Eqj,
    /// True equator and equinox of date
    Eqd,
    /// Mean ecliptic and equinox of J2000
    Ecl,
    /// True ecliptic and equinox of date
    Ect,
    /// Observer's horizon
    Hor,
    /// Galactic
    Gal,
}

/// An orthonormal 3×3 matrix converting vectors between two frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix {
    pub rot: Matrix3<f64>,
}

impl RotationMatrix {
    pub fn identity() -> Self {
        RotationMatrix {
            rot: Matrix3::identity(),
        }
    }

    pub fn from_matrix(rot: Matrix3<f64>) -> Self {
        RotationMatrix { rot }
    }

    /// The rotation that undoes this one.
    pub fn inverse(&self) -> Self {
        RotationMatrix {
            rot: self.rot.transpose(),
        }
    }

    /// The rotation equivalent to applying `self` first, then `then`.
    ///
    /// Arguments
    /// ---------
    /// * `then`: the rotation applied second.
    ///
    /// Returns
    /// --------
    /// * The matrix product `then · self`.
    pub fn combine(&self, then: &RotationMatrix) -> Self {
        RotationMatrix {
            rot: then.rot * self.rot,
        }
    }

    /// Compose an elementary right-handed rotation about one axis after this rotation.
    ///
    /// A positive angle turns vectors counterclockwise when looking from the positive end of
    /// the axis toward the origin.
    ///
    /// Arguments
    /// ---------
    /// * `axis`: the pivot axis.
    /// * `angle`: rotation angle in degrees.
    pub fn pivot(&self, axis: Axis, angle: Degree) -> Self {
        let unit = match axis {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        };
        let elementary: Matrix3<f64> = Rotation3::from_axis_angle(&unit, angle * RADEG).into();
        RotationMatrix {
            rot: elementary * self.rot,
        }
    }

    pub fn rotate_vector(&self, vector: &AstroVector) -> AstroVector {
        AstroVector::from_vec(self.rot * vector.pos, vector.t)
    }

    pub fn rotate_state(&self, state: &StateVector) -> StateVector {
        StateVector::new(self.rot * state.pos, self.rot * state.vel, state.t)
    }
}

/// EQJ → EQD: precession to the mean equator of date, then nutation.
pub fn rotation_eqj_eqd(orrery: &Orrery, time: &AstroTime) -> RotationMatrix {
    let tilt = orrery.tilt(time);
    RotationMatrix::from_matrix(nutation_matrix(&tilt) * precession_matrix(time.tt()))
}

/// EQD → ECT: tilt the true equator onto the true ecliptic of date.
pub fn rotation_eqd_ect(orrery: &Orrery, time: &AstroTime) -> RotationMatrix {
    let tilt = orrery.tilt(time);
    RotationMatrix::from_matrix(ecliptic_to_equator_matrix(tilt.tobl).transpose())
}

pub fn rotation_eqj_ect(orrery: &Orrery, time: &AstroTime) -> RotationMatrix {
    rotation_eqj_eqd(orrery, time).combine(&rotation_eqd_ect(orrery, time))
}

/// EQJ → ECL, a fixed tilt by the J2000 mean obliquity.
pub fn rotation_eqj_ecl() -> RotationMatrix {
    RotationMatrix::from_matrix(Matrix3::new(
        1.0,
        0.0,
        0.0,
        0.0,
        COS_OBL_J2000,
        SIN_OBL_J2000,
        0.0,
        -SIN_OBL_J2000,
        COS_OBL_J2000,
    ))
}

/// EQJ → GAL.
///
/// The rows of the matrix are the galactic x (toward the center), y and z (north galactic
/// pole) axes expressed in EQJ.
pub fn rotation_eqj_gal() -> RotationMatrix {
    let (sin_ra, cos_ra) = (GAL_POLE_RA * RADEG).sin_cos();
    let (sin_dec, cos_dec) = (GAL_POLE_DEC * RADEG).sin_cos();
    let (sin_node, cos_node) = (GAL_NODE_LON * RADEG).sin_cos();

    let pole = Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec);
    let node = Vector3::z().cross(&pole).normalize();
    let ahead = pole.cross(&node);

    let x = node * cos_node - ahead * sin_node;
    let y = node * sin_node + ahead * cos_node;
    RotationMatrix::from_matrix(Matrix3::from_rows(&[
        x.transpose(),
        y.transpose(),
        pole.transpose(),
    ]))
}

/// EQD → HOR for an observer.
///
/// In HOR, `x` points north, `y` west and `z` to the zenith; see [`horizon_from_vector`]
/// for azimuth and altitude.
pub fn rotation_eqd_hor(orrery: &Orrery, time: &AstroTime, observer: &Observer) -> RotationMatrix {
    let (uz, un, uw) = local_axes(orrery, time, observer);
    RotationMatrix::from_matrix(Matrix3::from_rows(&[
        un.transpose(),
        uw.transpose(),
        uz.transpose(),
    ]))
}

fn rotation_from_eqj(
    orrery: &Orrery,
    frame: Frame,
    time: &AstroTime,
    observer: Option<&Observer>,
) -> Result<RotationMatrix, OrreryError> {
    Ok(match frame {
        Frame::Eqj => RotationMatrix::identity(),
        Frame::Eqd => rotation_eqj_eqd(orrery, time),
        Frame::Ecl => rotation_eqj_ecl(),
        Frame::Ect => rotation_eqj_ect(orrery, time),
        Frame::Gal => rotation_eqj_gal(),
        Frame::Hor => {
            let observer = observer.ok_or_else(|| {
                OrreryError::InvalidParameter("the HOR frame requires an observer".to_string())
            })?;
            rotation_eqj_eqd(orrery, time).combine(&rotation_eqd_hor(orrery, time, observer))
        }
    })
}

/// Rotation converting vectors from one frame to another.
///
/// The matrix is composed through EQJ. Swapping `from` and `to` yields exactly the transpose.
///
/// Arguments
/// ---------
/// * `orrery`: context (Earth tilt and sidereal time).
/// * `from`, `to`: source and target frames.
/// * `time`: instant for the date-dependent frames.
/// * `observer`: required when either frame is [`Frame::Hor`].
///
/// Returns
/// --------
/// * [`OrreryError::InvalidParameter`] when HOR is involved without an observer.
pub fn rotation_between(
    orrery: &Orrery,
    from: Frame,
    to: Frame,
    time: &AstroTime,
    observer: Option<&Observer>,
) -> Result<RotationMatrix, OrreryError> {
    if from == to {
        return Ok(RotationMatrix::identity());
    }
    if (to as u8) < (from as u8) {
        return Ok(rotation_between(orrery, to, from, time, observer)?.inverse());
    }
    let eqj_from = rotation_from_eqj(orrery, from, time, observer)?;
    let eqj_to = rotation_from_eqj(orrery, to, time, observer)?;
    Ok(eqj_from.inverse().combine(&eqj_to))
}

fn toggle_azimuth(lon: Degree) -> Degree {
    let az = 360.0 - lon;
    if az >= 360.0 {
        az - 360.0
    } else {
        az
    }
}

/// Azimuth (as `lon`, clockwise from north) and altitude (as `lat`) of a HOR vector.
///
/// Arguments
/// ---------
/// * `vector`: a vector in the HOR frame.
/// * `refraction`: refraction added to the altitude.
pub fn horizon_from_vector(
    vector: &AstroVector,
    refraction: Refraction,
) -> Result<Spherical, OrreryError> {
    let sphere = sphere_from_vector(vector)?;
    Ok(Spherical::new(
        sphere.lat + refraction_angle(refraction, sphere.lat),
        toggle_azimuth(sphere.lon),
        sphere.dist,
    ))
}

/// HOR vector from azimuth (`lon`) and apparent altitude (`lat`), removing refraction.
///
/// See also
/// ------------
/// * [`horizon_from_vector`] – the inverse conversion.
pub fn vector_from_horizon(
    sphere: &Spherical,
    time: AstroTime,
    refraction: Refraction,
) -> Result<AstroVector, OrreryError> {
    let lat = sphere.lat + inverse_refraction_angle(refraction, sphere.lat)?;
    let airless = Spherical::new(lat, toggle_azimuth(sphere.lon), sphere.dist);
    Ok(vector_from_sphere(&airless, time))
}

#[cfg(test)]
mod rotation_test {
    use super::*;
    use crate::observers::horizon;
    use approx::assert_abs_diff_eq;

    const ALL_FRAMES: [Frame; 6] = [
        Frame::Eqj,
        Frame::Eqd,
        Frame::Ecl,
        Frame::Ect,
        Frame::Hor,
        Frame::Gal,
    ];

    #[test]
    fn test_combine_order() {
        let a = RotationMatrix::from_matrix(Matrix3::new(
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0,
        ));
        let b = RotationMatrix::from_matrix(Matrix3::new(
            10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0,
        ));
        // b first, then a
        let c = b.combine(&a);
        let expected = Matrix3::new(
            84.0, 90.0, 96.0, 201.0, 216.0, 231.0, 318.0, 342.0, 366.0,
        );
        assert_eq!(c.rot, expected);
    }

    #[test]
    fn test_inverse_is_transpose() {
        let a = RotationMatrix::from_matrix(Matrix3::new(
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0,
        ));
        assert_eq!(a.inverse().rot, a.rot.transpose());
    }

    #[test]
    fn test_pivot() {
        let r = RotationMatrix::identity().pivot(Axis::Z, 90.0);
        let expected = Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(r.rot, expected, epsilon = 1e-15);

        let r = r.pivot(Axis::X, -30.0).pivot(Axis::Y, 180.0);
        let v = r.rotate_vector(&AstroVector::new(1.0, 2.0, 3.0, AstroTime::from_ut(0.0)));
        assert_abs_diff_eq!(
            v.pos,
            Vector3::new(2.0, 2.366_025_403_784_439, -2.098_076_211_353_315_6),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_axis_from_index() {
        assert_eq!(Axis::try_from(1u8), Ok(Axis::Y));
        assert!(matches!(
            Axis::try_from(3u8),
            Err(OrreryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_ecliptic_pole() {
        let t = AstroTime::from_ut(0.0);
        let pole_ecl = AstroVector::new(0.0, 0.0, 1.0, t);
        let pole_eqj = rotation_eqj_ecl().inverse().rotate_vector(&pole_ecl);
        let sphere = sphere_from_vector(&pole_eqj).unwrap();
        assert_abs_diff_eq!(sphere.lon, 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sphere.lat, 90.0 - 23.439_279, epsilon = 1e-5);
    }

    #[test]
    fn test_galactic_center() {
        let t = AstroTime::from_ut(0.0);
        let center = vector_from_sphere(&Spherical::new(-28.936, 266.405, 1.0), t);
        let gal = rotation_eqj_gal().rotate_vector(&center);
        let sphere = sphere_from_vector(&gal).unwrap();
        assert_abs_diff_eq!(sphere.lat, 0.0, epsilon = 0.01);
        assert!(sphere.lon < 0.01 || sphere.lon > 359.99, "lon = {}", sphere.lon);
        assert_abs_diff_eq!(
            rotation_eqj_gal().rot * rotation_eqj_gal().rot.transpose(),
            Matrix3::identity(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_round_trips() {
        let orrery = Orrery::new();
        let time = orrery.make_time(1908, 6, 30, 0, 14, 0.0).unwrap();
        let observer = Observer::new(60.9, 101.9, 300.0).unwrap();
        for from in ALL_FRAMES {
            for to in ALL_FRAMES {
                let ab = rotation_between(&orrery, from, to, &time, Some(&observer)).unwrap();
                let ba = rotation_between(&orrery, to, from, &time, Some(&observer)).unwrap();
                let round = ab.combine(&ba);
                assert_abs_diff_eq!(round.rot, Matrix3::identity(), epsilon = 2e-15);
            }
        }
    }

    #[test]
    fn test_hor_requires_observer() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(100.0);
        assert!(matches!(
            rotation_between(&orrery, Frame::Eqj, Frame::Hor, &time, None),
            Err(OrreryError::InvalidParameter(_))
        ));
        assert!(rotation_between(&orrery, Frame::Eqj, Frame::Gal, &time, None).is_ok());
    }

    #[test]
    fn test_hor_matches_horizon() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(7777.7);
        let observer = Observer::new(-33.9, 151.2, 40.0).unwrap();
        let rot = rotation_eqd_hor(&orrery, &time, &observer);
        for (ra, dec) in [(3.0, 20.0), (11.5, -60.0), (22.0, 5.0)] {
            let eqd = vector_from_sphere(&Spherical::new(dec, 15.0 * ra, 1.0), time);
            let hor_vec = rot.rotate_vector(&eqd);
            let sphere = horizon_from_vector(&hor_vec, Refraction::Normal).unwrap();
            let topo = horizon(&orrery, &time, &observer, ra, dec, Refraction::Normal);
            assert_abs_diff_eq!(sphere.lat, topo.altitude, epsilon = 1e-9);
            assert_abs_diff_eq!(sphere.lon, topo.azimuth, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_horizon_vector_round_trip() {
        let time = AstroTime::from_ut(0.0);
        for (alt, az) in [(-10.0, 0.0), (0.0, 90.0), (0.5, 200.0), (45.0, 359.0)] {
            let sphere = Spherical::new(alt, az, 1.0);
            let v = vector_from_horizon(&sphere, time, Refraction::Normal).unwrap();
            let back = horizon_from_vector(&v, Refraction::Normal).unwrap();
            assert_abs_diff_eq!(back.lat, alt, epsilon = 1e-9);
            assert_abs_diff_eq!(back.lon, az, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ect_longitude_of_date() {
        // the true equinox of date lies near the J2000 equinox, displaced by precession
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(36525.0);
        let x = AstroVector::new(1.0, 0.0, 0.0, time);
        let ect = rotation_eqj_ect(&orrery, &time).rotate_vector(&x);
        let sphere = sphere_from_vector(&ect).unwrap();
        // about 1.397° of general precession per century
        assert_abs_diff_eq!(sphere.lon, 1.397, epsilon = 0.02);
        assert_abs_diff_eq!(sphere.lat, 0.0, epsilon = 0.01);
    }
}
