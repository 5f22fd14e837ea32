//! # Orrery: computation context
//!
//! The [`Orrery`] struct is the single piece of mutable state an application carries around.
//! Every position and event function takes `&Orrery` and reads from it:
//!
//! 1. **ΔT model** – the [`DeltaTModel`] used by [`Orrery::make_time`] and by the event searches
//!    when they build calendar instants (for example the season start dates).
//! 2. **Earth-tilt memo** – a single-slot cache of the last [`EarthTilt`]; nutation is evaluated
//!    again only when the requested `tt` moves by more than `1e-6` day.
//! 3. **User-defined stars** – eight slots ([`Body::Star1`] … [`Body::Star8`]) holding a fixed
//!    J2000 direction and a distance, usable wherever a [`Body`] is accepted.
//!
//! ## Threading
//!
//! The tilt memo lives in a [`Cell`], so an [`Orrery`] is `Send` but not `Sync`. Multi-threaded
//! callers build one context per thread; there is no global state anywhere in the crate.
//!
//! ## Typical usage
//!
//! ```rust
//! use orrery::orrery::Orrery;
//! use orrery::bodies::{Body, geo_vector, Aberration};
//!
//! let mut orrery = Orrery::new();
//! orrery.define_star(Body::Star1, 6.7525, -16.7161, 8.6)?;
//!
//! let time = orrery.make_time(2024, 4, 8, 18, 0, 0.0)?;
//! let mars = geo_vector(&orrery, Body::Mars, &time, Aberration::Corrected)?;
//! # Ok::<(), orrery::orrery_errors::OrreryError>(())
//! ```
//!
//! ## See also
//! ------------
//! * [`earth_tilt`](crate::earth_orientation::earth_tilt) – uncached nutation and obliquity.
//! * [`DeltaTModel`] – TT − UT models.

use std::cell::Cell;

use log::debug;

use crate::bodies::Body;
use crate::constants::{Degree, Hour};
use crate::delta_t::DeltaTModel;
use crate::earth_orientation::{earth_tilt, sidereal_time, EarthTilt};
use crate::orrery_errors::OrreryError;
use crate::time::AstroTime;

/// Largest `tt` difference (days) for which a memoized tilt is reused.
const TILT_TOLERANCE_DAYS: f64 = 1.0e-6;

/// Number of user-definable star slots.
pub const STAR_SLOTS: usize = 8;

/// A user-defined star: fixed J2000 equatorial direction and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarDefinition {
    /// Right ascension, sidereal hours
    pub ra: Hour,
    /// Declination, degrees
    pub dec: Degree,
    /// Distance, light-years
    pub dist_ly: f64,
}

#[derive(Debug, Clone)]
pub struct Orrery {
    delta_t: DeltaTModel,
    tilt_memo: Cell<Option<EarthTilt>>,
    stars: [Option<StarDefinition>; STAR_SLOTS],
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Orrery {
    /// Context with the default ΔT model and no stars defined.
    pub fn new() -> Self {
        Self::with_delta_t(DeltaTModel::default())
    }

    /// Context using a specific ΔT model.
    pub fn with_delta_t(model: DeltaTModel) -> Self {
        Orrery {
            delta_t: model,
            tilt_memo: Cell::new(None),
            stars: [None; STAR_SLOTS],
        }
    }

    pub fn delta_t_model(&self) -> DeltaTModel {
        self.delta_t
    }

    /// Build an [`AstroTime`] from UTC calendar fields using this context's ΔT model.
    ///
    /// See also
    /// ------------
    /// * [`AstroTime::from_calendar`] – same conversion with the default model.
    pub fn make_time(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<AstroTime, OrreryError> {
        let time = AstroTime::from_calendar(year, month, day, hour, minute, second)?;
        Ok(AstroTime::with_delta_t(time.ut(), self.delta_t))
    }

    /// Build an [`AstroTime`] from a TT day count using this context's ΔT model.
    ///
    /// See also
    /// ------------
    /// * [`AstroTime::from_tt`] – same conversion with the default model.
    pub fn time_from_tt(&self, tt: f64) -> AstroTime {
        AstroTime::from_tt_with_delta_t(tt, self.delta_t)
    }

    /// Earth tilt at `time`, served from the memo when the last evaluation is close enough.
    pub fn tilt(&self, time: &AstroTime) -> EarthTilt {
        match self.tilt_memo.get() {
            Some(tilt) if (tilt.tt - time.tt()).abs() <= TILT_TOLERANCE_DAYS => tilt,
            _ => {
                debug!("Earth tilt memo miss at tt = {}", time.tt());
                let tilt = earth_tilt(time.tt());
                self.tilt_memo.set(Some(tilt));
                tilt
            }
        }
    }

    /// Greenwich apparent sidereal time at `time`, in sidereal hours.
    pub fn sidereal_time(&self, time: &AstroTime) -> Hour {
        sidereal_time(time, &self.tilt(time))
    }

    /// Assign a direction and distance to one of the star slots.
    ///
    /// Arguments
    /// ---------
    /// * `body`: one of [`Body::Star1`] … [`Body::Star8`].
    /// * `ra`: J2000 right ascension in sidereal hours.
    /// * `dec`: J2000 declination in degrees.
    /// * `dist_ly`: distance in light-years, at least 1.
    ///
    /// Returns
    /// --------
    /// * [`OrreryError::InvalidBody`] when `body` is not a star slot.
    /// * [`OrreryError::InvalidParameter`] for a distance below one light-year or non-finite
    ///   coordinates.
    pub fn define_star(
        &mut self,
        body: Body,
        ra: Hour,
        dec: Degree,
        dist_ly: f64,
    ) -> Result<(), OrreryError> {
        let slot = body.star_index().ok_or(OrreryError::InvalidBody(body))?;
        if !ra.is_finite() || !dec.is_finite() || dist_ly.is_nan() || dist_ly < 1.0 {
            return Err(OrreryError::InvalidParameter(format!(
                "invalid star definition: ra = {ra}, dec = {dec}, dist = {dist_ly} ly"
            )));
        }
        self.stars[slot] = Some(StarDefinition { ra, dec, dist_ly });
        Ok(())
    }

    /// Definition of a star slot.
    ///
    /// Returns
    /// --------
    /// * [`OrreryError::InvalidBody`] when `body` is not a star or its slot was never defined.
    pub fn star(&self, body: Body) -> Result<StarDefinition, OrreryError> {
        body.star_index()
            .and_then(|slot| self.stars[slot])
            .ok_or(OrreryError::InvalidBody(body))
    }
}

#[cfg(test)]
mod orrery_test {
    use super::*;

    #[test]
    fn test_tilt_memo_reuse() {
        let orrery = Orrery::new();
        let time = AstroTime::from_ut(1000.0);
        let first = orrery.tilt(&time);
        let near = orrery.tilt(&AstroTime::from_ut(1000.0 + 5.0e-7));
        assert_eq!(first, near);

        let far = orrery.tilt(&AstroTime::from_ut(1001.0));
        assert_ne!(first.tt, far.tt);
        assert_eq!(orrery.tilt(&AstroTime::from_ut(1001.0)), far);
    }

    #[test]
    fn test_define_star() {
        let mut orrery = Orrery::new();
        assert_eq!(
            orrery.star(Body::Star3),
            Err(OrreryError::InvalidBody(Body::Star3))
        );
        orrery.define_star(Body::Star3, 6.75, -16.7, 8.6).unwrap();
        let star = orrery.star(Body::Star3).unwrap();
        assert_eq!((star.ra, star.dec, star.dist_ly), (6.75, -16.7, 8.6));
    }

    #[test]
    fn test_define_star_rejects_bad_input() {
        let mut orrery = Orrery::new();
        assert_eq!(
            orrery.define_star(Body::Mars, 1.0, 2.0, 3.0),
            Err(OrreryError::InvalidBody(Body::Mars))
        );
        assert!(matches!(
            orrery.define_star(Body::Star1, 1.0, 2.0, 0.5),
            Err(OrreryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_make_time_uses_context_model() {
        let orrery = Orrery::with_delta_t(DeltaTModel::Table);
        let time = orrery.make_time(1900, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(time.delta_t_model(), DeltaTModel::Table);
    }

    #[test]
    fn test_time_from_tt_uses_context_model() {
        let orrery = Orrery::with_delta_t(DeltaTModel::Table);
        let time = orrery.time_from_tt(-2.0e6);
        assert_eq!(time.delta_t_model(), DeltaTModel::Table);
        assert_eq!(time.tt(), -2.0e6);
        let again = AstroTime::with_delta_t(time.ut(), DeltaTModel::Table);
        assert!((again.tt() - time.tt()).abs() < 1.0e-8);
    }
}
