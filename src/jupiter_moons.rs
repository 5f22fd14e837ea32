//! # Galilean satellites
//!
//! Jovicentric positions and velocities of Io, Europa, Ganymede and Callisto from the
//! "accurate" theory in chapter 44 of Meeus, *Astronomical Algorithms*. The orbits are built
//! in Jupiter's equatorial frame, tilted onto the J2000 ecliptic with the Lieske constants,
//! then reported in EQJ so they can be added to a [`crate::bodies::helio_vector`] result.
//!
//! Light travel time is not applied: the vectors are geometric at `time`.

use nalgebra::Vector3;

use crate::constants::{Degree, DAYS_PER_CENTURY, KM_PER_AU, RADEG};
use crate::rotation::{rotation_eqj_ecl, Axis, RotationMatrix};
use crate::time::AstroTime;
use crate::vector::StateVector;

/// Half-width of the central difference used for velocities, in days.
const VELOCITY_STEP_DAYS: f64 = 1.0e-4;

/// Jupiter's equatorial radius adopted by the theory.
const JUPITER_RADIUS_KM: f64 = 71_398.0;

/// Mean orbital radii, in Jupiter radii.
const SEMI_MAJOR_AXES: [f64; 4] = [5.905_69, 9.396_57, 14.988_32, 26.362_73];

/// Epoch of the theory, as a TT day count since J2000 (JD 2443000.5).
const THEORY_EPOCH: f64 = -8_544.5;

/// Longitude of the ascending node and inclination of Jupiter's orbit (ecliptic B1950).
const NODE: Degree = 100.464_407;
const ORBIT_TILT: Degree = 1.303_267;

/// Precession in longitude from B1950 to J2000, in degrees.
const PRECESSION_B1950: Degree = {
    let t0 = (2_451_545.0 - 2_433_282.423) / DAYS_PER_CENTURY;
    1.396_662_6 * t0 + 0.000_308_8 * t0 * t0
};

/// Jovicentric states of the four Galilean moons, EQJ, AU and AU/day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JupiterMoons {
    pub io: StateVector,
    pub europa: StateVector,
    pub ganymede: StateVector,
    pub callisto: StateVector,
}

impl JupiterMoons {
    /// The four states ordered outward from Jupiter.
    pub fn as_array(&self) -> [StateVector; 4] {
        [self.io, self.europa, self.ganymede, self.callisto]
    }
}

/// Fundamental arguments of the theory, degrees.
struct Arguments {
    l: [Degree; 4],
    pi3: Degree,
    pi4: Degree,
    omega: [Degree; 4],
    gamma: Degree,
    psi: Degree,
}

impl Arguments {
    fn new(t: f64) -> Self {
        Arguments {
            l: [
                106.077_19 + 203.488_955_790 * t,
                175.731_61 + 101.374_724_735 * t,
                120.558_83 + 50.317_609_207 * t,
                84.444_59 + 21.571_071_177 * t,
            ],
            pi3: 188.184_0 + 0.007_127_34 * t,
            pi4: 335.286_8 + 0.001_840_00 * t,
            omega: [
                312.334_6 - 0.132_793_86 * t,
                100.441_1 - 0.032_630_64 * t,
                119.194_2 - 0.007_177_03 * t,
                322.618_6 - 0.001_759_34 * t,
            ],
            gamma: 30.237_56 + 0.083_092_570_1 * t,
            psi: 316.518_2 - 0.000_002_08 * t,
        }
    }

    /// Periodic terms in longitude, degrees.
    fn longitude_terms(&self) -> [Degree; 4] {
        let [l1, l2, l3, l4] = self.l;
        let [_, _, w3, w4] = self.omega;
        let (p3, p4, psi) = (self.pi3, self.pi4, self.psi);
        [
            0.472_59 * sin(2.0 * (l1 - l2)),
            1.064_76 * sin(2.0 * (l2 - l3))
                + 0.042_56 * sin(l1 - 2.0 * l2 + p3)
                + 0.035_81 * sin(l2 - p3)
                + 0.023_95 * sin(l1 - 2.0 * l2 + p4)
                + 0.019_84 * sin(l2 - p4),
            0.164_90 * sin(l3 - p3) + 0.090_81 * sin(l3 - p4) - 0.069_07 * sin(l2 - l3)
                + 0.037_84 * sin(p3 - p4)
                + 0.018_46 * sin(2.0 * (l3 - l4)),
            0.842_87 * sin(l4 - p4) + 0.034_31 * sin(p4 - p3) - 0.033_05 * sin(psi - w4)
                - 0.032_11 * sin(self.gamma)
                - 0.018_62 * sin(l4 - p3)
                + 0.011_86 * sin(psi - w3),
        ]
    }

    /// Relative corrections to the orbital radii.
    fn radius_terms(&self) -> [f64; 4] {
        let [l1, l2, l3, l4] = self.l;
        let (p3, p4) = (self.pi3, self.pi4);
        [
            -0.004_133_9 * cos(2.0 * (l1 - l2)),
            0.009_384_8 * cos(l1 - l2),
            -0.001_438_8 * cos(l3 - p3) - 0.000_791_9 * cos(l3 - p4)
                + 0.000_634_2 * cos(l2 - l3),
            -0.007_354_6 * cos(l4 - p4),
        ]
    }

    /// Tangent of the latitude above Jupiter's equator, for true longitudes `lon`.
    fn latitude_terms(&self, lon: [Degree; 4]) -> [f64; 4] {
        let [w1, w2, w3, w4] = self.omega;
        let psi = self.psi;
        [
            0.000_639_3 * sin(lon[0] - w1) + 0.000_182_5 * sin(lon[0] - w2),
            0.008_100_4 * sin(lon[1] - w2) + 0.000_451_2 * sin(lon[1] - w3)
                - 0.000_328_4 * sin(lon[1] - psi),
            0.003_240_2 * sin(lon[2] - w3) - 0.001_691_1 * sin(lon[2] - psi)
                + 0.000_684_7 * sin(lon[2] - w4),
            -0.007_657_9 * sin(lon[3] - psi) + 0.004_413_4 * sin(lon[3] - w4)
                - 0.000_511_2 * sin(lon[3] - w3),
        ]
    }
}

fn sin(x: Degree) -> f64 {
    (x * RADEG).sin()
}

fn cos(x: Degree) -> f64 {
    (x * RADEG).cos()
}

/// Rotation from Jupiter's equator (x toward the node of the equator on the orbit plane)
/// to EQJ.
///
/// Arguments
/// ---------
/// * `tt`: Terrestrial Time, days since J2000.
/// * `psi`: longitude of the node of Jupiter's equator on its orbit, degrees.
fn jupiter_equator_to_eqj(tt: f64, psi: Degree) -> RotationMatrix {
    let centuries_1900 = (tt + 36_525.0) / DAYS_PER_CENTURY;
    let equator_tilt = 3.120_262 + 0.000_6 * centuries_1900;
    RotationMatrix::identity()
        .pivot(Axis::X, equator_tilt)
        .pivot(Axis::Z, psi + PRECESSION_B1950 - NODE)
        .pivot(Axis::X, ORBIT_TILT)
        .pivot(Axis::Z, NODE)
        .combine(&rotation_eqj_ecl().inverse())
}

/// EQJ positions of the four moons in AU at a TT day count.
fn moon_positions(tt: f64) -> [Vector3<f64>; 4] {
    let args = Arguments::new(tt - THEORY_EPOCH);
    let sigma = args.longitude_terms();
    let rho = args.radius_terms();
    let lon = [
        args.l[0] + sigma[0],
        args.l[1] + sigma[1],
        args.l[2] + sigma[2],
        args.l[3] + sigma[3],
    ];
    let tan_lat = args.latitude_terms(lon);
    let rotation = jupiter_equator_to_eqj(tt, args.psi);

    std::array::from_fn(|k| {
        let lat = tan_lat[k].atan();
        let radius = SEMI_MAJOR_AXES[k] * (1.0 + rho[k]) * JUPITER_RADIUS_KM / KM_PER_AU;
        let (sin_lon, cos_lon) = ((lon[k] - args.psi) * RADEG).sin_cos();
        let equatorial = Vector3::new(
            radius * cos_lon * lat.cos(),
            radius * sin_lon * lat.cos(),
            radius * lat.sin(),
        );
        rotation.rot * equatorial
    })
}

/// Jovicentric states of Io, Europa, Ganymede and Callisto.
///
/// Arguments
/// ---------
/// * `time`: the instant; the theory is evaluated at its TT value.
///
/// Returns
/// --------
/// * EQJ positions in AU and velocities in AU/day, tagged with `time`. The velocities are
///   central differences over ±1e-4 day.
///
/// See also
/// ------------
/// * [`crate::bodies::helio_vector`] for Jupiter itself.
pub fn jupiter_moons(time: &AstroTime) -> JupiterMoons {
    let tt = time.tt();
    let center = moon_positions(tt);
    let before = moon_positions(tt - VELOCITY_STEP_DAYS);
    let after = moon_positions(tt + VELOCITY_STEP_DAYS);
    let state = |k: usize| {
        let vel = (after[k] - before[k]) / (2.0 * VELOCITY_STEP_DAYS);
        StateVector::new(center[k], vel, *time)
    };
    JupiterMoons {
        io: state(0),
        europa: state(1),
        ganymede: state(2),
        callisto: state(3),
    }
}

#[cfg(test)]
mod jupiter_moons_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn relative_error(got: &Vector3<f64>, want: &Vector3<f64>) -> f64 {
        (got - want).norm() / want.norm()
    }

    #[test]
    fn test_io_against_horizons() {
        // JPL Horizons, Io relative to Jupiter, ecliptic J2000, JD 2446545.0 TDB
        let time = AstroTime::from_tt(2_446_545.0 - 2_451_545.0);
        let to_eqj = rotation_eqj_ecl().inverse();
        let pos = to_eqj.rot
            * Vector3::new(
                1.134_408_131_605_554e-3,
                -2.590_904_586_750_408e-3,
                -7.490_427_225_904_72e-5,
            );
        let vel = to_eqj.rot
            * Vector3::new(
                9.148_038_778_472_862e-3,
                3.973_823_407_182_51e-3,
                2.765_660_368_640_458e-4,
            );

        let io = jupiter_moons(&time).io;
        assert!(relative_error(&io.pos, &pos) < 1e-3);
        assert!(relative_error(&io.vel, &vel) < 1e-3);
        assert_eq!(io.t, time);
    }

    #[test]
    fn test_orbital_radii() {
        let time = AstroTime::from_tt(8_000.25);
        for (state, a) in jupiter_moons(&time).as_array().iter().zip(SEMI_MAJOR_AXES) {
            let mean = a * JUPITER_RADIUS_KM / KM_PER_AU;
            assert!((state.pos.norm() / mean - 1.0).abs() < 0.012);
        }
    }

    #[test]
    fn test_io_period() {
        // one sidereal revolution of Io takes 1.769 days
        let time = AstroTime::from_tt(-1_234.5);
        let io = jupiter_moons(&time).io;
        let speed = io.vel.norm() / io.pos.norm();
        assert_abs_diff_eq!(360.0 / (speed / RADEG), 1.769, epsilon = 0.04);
    }

    #[test]
    fn test_laplace_resonance() {
        for t in [-20_000.0, 0.0, 15_000.0] {
            let l = Arguments::new(t).l;
            let phase = (l[0] - 3.0 * l[1] + 2.0 * l[2]).rem_euclid(360.0);
            assert_abs_diff_eq!(phase, 180.0, epsilon = 0.05);
        }
    }

    #[test]
    fn test_orbits_lie_near_jupiter_equator() {
        let time = AstroTime::from_tt(3_000.0);
        let pole = jupiter_equator_to_eqj(time.tt(), 316.518_2).rot * Vector3::z();
        for state in jupiter_moons(&time).as_array() {
            let normal = state.pos.cross(&state.vel).normalize();
            assert!(normal.dot(&pole) > 0.999);
        }
    }
}
