//! # Astronomical event searches
//!
//! Every search in this module reduces an event to a zero crossing of a scalar function of
//! time and hands it to [`crate::search::search`]. The modules differ in how they choose
//! the function and how they bracket the crossing:
//!
//! | module           | events                                                        |
//! |------------------|---------------------------------------------------------------|
//! | [`rise_set`]     | hour angles, rise and set, arbitrary altitudes (twilight)     |
//! | [`seasons`]      | equinoxes and solstices                                       |
//! | [`moon_phase`]   | lunar phase angle and quarters                                |
//! | [`apsis`]        | perigee/apogee of the Moon, perihelion/aphelion of planets    |
//! | [`elongation`]   | relative longitude, oppositions, greatest elongations         |
//! | [`illumination`] | visual magnitude, phase, Venus at greatest brilliancy         |
//! | [`eclipses`]     | lunar eclipses, global and local solar eclipses               |
//! | [`transit`]      | transits of Mercury and Venus                                 |
//! | [`nodes`]        | ascending and descending lunar nodes                          |
//! | [`libration`]    | apparent orientation of the Moon                              |
//!
//! Searches that may legitimately find nothing in a bounded window return `Ok(None)`.
//! Searches over an unbounded future (eclipses, transits, apsides) return the event or
//! an error once their iteration cap is exhausted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use orrery::events::eclipses::{search_lunar_eclipse, next_lunar_eclipse};
//! use orrery::orrery::Orrery;
//!
//! let orrery = Orrery::new();
//! let start = orrery.make_time(2025, 1, 1, 0, 0, 0.0)?;
//! let mut eclipse = search_lunar_eclipse(&orrery, &start)?;
//! for _ in 0..4 {
//!     println!("{:?} at {}", eclipse.kind, eclipse.peak);
//!     eclipse = next_lunar_eclipse(&orrery, &eclipse.peak)?;
//! }
//! # Ok::<(), orrery::orrery_errors::OrreryError>(())
//! ```

pub mod apsis;
pub mod eclipses;
pub mod elongation;
pub mod illumination;
pub mod libration;
pub mod moon_phase;
pub mod nodes;
pub mod rise_set;
pub mod seasons;
mod shadow;
pub mod transit;
