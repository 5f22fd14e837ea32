//! # Orrery
//!
//! Positions of the Sun, the Moon, the planets, Pluto and user-defined stars from analytic
//! theories, frame rotations between the usual celestial coordinate systems, and a catalog
//! of event searches (rise/set, seasons, lunar phases, apsides, elongations, eclipses,
//! transits) built on a single root finder. Rotation axes, constellation lookup and the
//! Galilean moons of Jupiter round out the catalog.
//!
//! All computations go through an [`orrery::Orrery`] context, which carries the ΔT model, the
//! user-defined stars and a cache of the Earth's orientation.
//!
//! ```rust,no_run
//! use orrery::bodies::{geo_vector, Aberration, Body};
//! use orrery::coordinates::equator;
//! use orrery::observers::{horizon, EquatorEpoch, Observer, Refraction};
//! use orrery::orrery::Orrery;
//!
//! let orrery = Orrery::new();
//! let time = orrery.make_time(2025, 3, 20, 12, 0, 0.0)?;
//! let paris = Observer::new(48.85, 2.35, 35.0)?;
//!
//! let mars = geo_vector(&orrery, Body::Mars, &time, Aberration::Corrected)?;
//! println!("Mars is {:.3} AU away", mars.length());
//!
//! let equ = equator(
//!     &orrery,
//!     Body::Mars,
//!     &time,
//!     &paris,
//!     EquatorEpoch::OfDate,
//!     Aberration::Corrected,
//! )?;
//! let hor = horizon(&orrery, &time, &paris, equ.ra, equ.dec, Refraction::Normal);
//! println!("azimuth {:.1}°, altitude {:.1}°", hor.azimuth, hor.altitude);
//! # Ok::<(), orrery::orrery_errors::OrreryError>(())
//! ```

pub mod axis;
pub mod bodies;
pub mod chebyshev;
pub mod constants;
pub mod constellation;
pub mod conversion;
pub mod coordinates;
pub mod delta_t;
pub mod earth_orientation;
pub mod events;
pub mod jupiter_moons;
pub mod moon;
pub mod observers;
pub mod orrery;
pub mod orrery_errors;
pub mod rotation;
pub mod search;
pub mod time;
pub mod vector;
pub mod vsop;
