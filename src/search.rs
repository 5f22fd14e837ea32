//! # Generic event search
//!
//! Every event finder of the crate reduces to locating the instant where a scalar function of
//! time crosses zero going upward. [`search`] solves that problem for any closure
//!
//! ```text
//! f : AstroTime → Result<f64, OrreryError>
//! ```
//!
//! given a bracket `[t1, t2]` with `f(t1) < 0 ≤ f(t2)`. The bracket is the caller's
//! responsibility: it is not verified up front, and a sign pattern that stops making sense
//! during the search ends it with `Ok(None)`.
//!
//! ## Algorithm
//!
//! Each iteration evaluates the midpoint and fits a parabola through `(t1, tmid, t2)`.
//!
//! 1. If the parabola has a single root inside the bracket and the local slope at that root
//!    says the remaining error is below the tolerance, the root is returned.
//! 2. Otherwise, if `1.2 ×` that error estimate is less than a tenth of the half-width, the
//!    bracket is shrunk to `root ± 1.2·error` (when the new ends still straddle zero).
//! 3. Otherwise the bracket is bisected.
//!
//! The search stops when the half-width falls below the tolerance. Exceeding
//! [`SearchOptions::max_iterations`] is an [`OrreryError::NoConvergence`].
//!
//! ## Configuration
//!
//! [`SearchOptions`] follows a builder pattern with validation:
//!
//! ```rust
//! use orrery::search::SearchOptions;
//!
//! let options = SearchOptions::builder()
//!     .dt_tolerance_seconds(0.1)
//!     .max_iterations(30)
//!     .build()?;
//! # Ok::<(), orrery::orrery_errors::OrreryError>(())
//! ```

use std::cmp::Ordering::Greater;

use log::{debug, trace};

use crate::constants::SECONDS_PER_DAY;
use crate::orrery_errors::OrreryError;
use crate::time::AstroTime;

/// Tunable parameters of [`search`].
///
/// Default values:
///
/// * `dt_tolerance_seconds`: 1.0
/// * `max_iterations`: 20
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Half-width of the bracket (seconds) below which the search stops.
    pub dt_tolerance_seconds: f64,
    /// Maximum number of bracket refinements.
    pub max_iterations: usize,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::new()
    }

    /// Options with a given tolerance and the default iteration cap.
    pub(crate) fn with_tolerance(dt_tolerance_seconds: f64) -> Self {
        SearchOptions {
            dt_tolerance_seconds,
            ..Self::default()
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            dt_tolerance_seconds: 1.0,
            max_iterations: 20,
        }
    }
}

/// Builder for [`SearchOptions`], with validation.
#[derive(Debug, Clone, Default)]
pub struct SearchOptionsBuilder {
    options: SearchOptions,
}

impl SearchOptionsBuilder {
    pub fn new() -> Self {
        Self {
            options: SearchOptions::default(),
        }
    }

    pub fn dt_tolerance_seconds(mut self, v: f64) -> Self {
        self.options.dt_tolerance_seconds = v;
        self
    }

    pub fn max_iterations(mut self, v: usize) -> Self {
        self.options.max_iterations = v;
        self
    }

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `dt_tolerance_seconds > 0` and finite.
    /// * `max_iterations ≥ 1`.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(SearchOptions)`, or [`OrreryError::InvalidParameter`] naming the rule that failed.
    pub fn build(self) -> Result<SearchOptions, OrreryError> {
        let o = &self.options;
        if !Self::gt0(o.dt_tolerance_seconds) || o.dt_tolerance_seconds.is_infinite() {
            return Err(OrreryError::InvalidParameter(
                "dt_tolerance_seconds must be finite and > 0".into(),
            ));
        }
        if o.max_iterations == 0 {
            return Err(OrreryError::InvalidParameter(
                "max_iterations must be >= 1".into(),
            ));
        }
        Ok(self.options)
    }
}

/// Result of fitting a parabola through three equally spaced samples.
struct QuadraticRoot {
    /// Offset of the root from the middle sample, in units of the half-width
    x: f64,
    /// Slope of the parabola at the root, per day
    df_dt: f64,
}

/// Fit `f(x) = Q·x² + R·x + S` through `(-1, fa)`, `(0, fm)`, `(1, fb)` and return its unique
/// root in `[-1, 1]`, if there is exactly one.
fn quadratic_root(dt: f64, fa: f64, fm: f64, fb: f64) -> Option<QuadraticRoot> {
    let q = (fb + fa) / 2.0 - fm;
    let r = (fb - fa) / 2.0;
    let s = fm;
    let inside = |x: f64| (-1.0..=1.0).contains(&x);

    let x = if q == 0.0 {
        if r == 0.0 {
            return None;
        }
        let x = -s / r;
        if !inside(x) {
            return None;
        }
        x
    } else {
        let u = r * r - 4.0 * q * s;
        if u <= 0.0 {
            return None;
        }
        let ru = u.sqrt();
        let x1 = (-r + ru) / (2.0 * q);
        let x2 = (-r - ru) / (2.0 * q);
        match (inside(x1), inside(x2)) {
            (true, false) => x1,
            (false, true) => x2,
            _ => return None,
        }
    };
    Some(QuadraticRoot {
        x,
        df_dt: (2.0 * q * x + r) / dt,
    })
}

/// Find the time where `f` crosses zero upward inside `[t1, t2]`.
///
/// Arguments
/// ---------
/// * `f`: the function to solve, evaluated at candidate times.
/// * `t1`, `t2`: bracket with `f(t1) < 0 ≤ f(t2)` (not verified).
/// * `options`: tolerance and iteration cap.
///
/// Returns
/// --------
/// * `Ok(Some(t))` with `t1 ≤ t ≤ t2`, within the tolerance of the crossing.
/// * `Ok(None)` if the sign pattern shows there is no ascending crossing.
/// * [`OrreryError::NoConvergence`] when the iteration cap is reached.
/// * Any error returned by `f`.
pub fn search<F>(
    mut f: F,
    t1: &AstroTime,
    t2: &AstroTime,
    options: &SearchOptions,
) -> Result<Option<AstroTime>, OrreryError>
where
    F: FnMut(&AstroTime) -> Result<f64, OrreryError>,
{
    let dt_days = (options.dt_tolerance_seconds / SECONDS_PER_DAY).abs();
    let (mut t1, mut t2) = (*t1, *t2);
    let mut f1 = f(&t1)?;
    let mut f2 = f(&t2)?;
    let mut fmid = 0.0;
    let mut calc_fmid = true;

    for iter in 1..=options.max_iterations {
        let dt = (t2.ut() - t1.ut()) / 2.0;
        let tmid = t1.add_days(dt);
        if dt.abs() < dt_days {
            debug!("search converged by bracketing after {iter} iterations at {tmid}");
            return Ok(Some(tmid));
        }

        if calc_fmid {
            fmid = f(&tmid)?;
        } else {
            calc_fmid = true;
        }
        trace!("search iteration {iter}: dt = {dt:e} day, f = ({f1:e}, {fmid:e}, {f2:e})");

        if let Some(root) = quadratic_root(t2.ut() - tmid.ut(), f1, fmid, f2) {
            let tq = tmid.add_days(root.x * (t2.ut() - tmid.ut()));
            let fq = f(&tq)?;
            if root.df_dt != 0.0 {
                let dt_guess = (fq / root.df_dt).abs();
                if dt_guess < dt_days {
                    debug!("search converged by interpolation after {iter} iterations at {tq}");
                    return Ok(Some(tq));
                }

                let dt_guess = 1.2 * dt_guess;
                if dt_guess < dt / 10.0 {
                    let tleft = tq.add_days(-dt_guess);
                    let tright = tq.add_days(dt_guess);
                    let strictly_inside =
                        |t: &AstroTime| (t.ut() - t1.ut()) * (t.ut() - t2.ut()) < 0.0;
                    if strictly_inside(&tleft) && strictly_inside(&tright) {
                        let fleft = f(&tleft)?;
                        let fright = f(&tright)?;
                        if fleft < 0.0 && fright >= 0.0 {
                            (t1, f1) = (tleft, fleft);
                            (t2, f2) = (tright, fright);
                            fmid = fq;
                            calc_fmid = false;
                            continue;
                        }
                    }
                }
            }
        }

        if f1 < 0.0 && fmid >= 0.0 {
            (t2, f2) = (tmid, fmid);
        } else if fmid < 0.0 && f2 >= 0.0 {
            (t1, f1) = (tmid, fmid);
        } else {
            debug!("search found no ascending crossing between {t1} and {t2}");
            return Ok(None);
        }
    }

    Err(OrreryError::NoConvergence(format!(
        "search did not converge within {} iterations",
        options.max_iterations
    )))
}

#[cfg(test)]
mod search_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_builder_defaults() {
        let options = SearchOptions::builder().build().unwrap();
        assert_eq!(options, SearchOptions::default());
        assert_eq!(options.dt_tolerance_seconds, 1.0);
        assert_eq!(options.max_iterations, 20);
    }

    #[test]
    fn test_builder_validation() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SearchOptions::builder().dt_tolerance_seconds(bad).build(),
                Err(OrreryError::InvalidParameter(_))
            ));
        }
        assert!(SearchOptions::builder().max_iterations(0).build().is_err());
    }

    #[test]
    fn test_quadratic_root() {
        // f(x) = x² − 0.25 sampled at −1, 0, 1 has roots ±0.5: ambiguous
        assert!(quadratic_root(1.0, 0.75, -0.25, 0.75).is_none());
        // f(x) = x + 0.5
        let root = quadratic_root(2.0, -0.5, 0.5, 1.5).unwrap();
        assert_abs_diff_eq!(root.x, -0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(root.df_dt, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_linear_crossing() {
        let t1 = AstroTime::from_ut(100.0);
        let t2 = AstroTime::from_ut(110.0);
        let found = search(|t| Ok(t.ut() - 104.321), &t1, &t2, &SearchOptions::default())
            .unwrap()
            .unwrap();
        assert_abs_diff_eq!(found.ut(), 104.321, epsilon = 1.0 / SECONDS_PER_DAY);
    }

    #[test]
    fn test_sine_crossing() {
        let t1 = AstroTime::from_ut(-0.4);
        let t2 = AstroTime::from_ut(0.3);
        let options = SearchOptions::with_tolerance(0.01);
        let found = search(|t| Ok((t.ut() * 3.0).sin()), &t1, &t2, &options)
            .unwrap()
            .unwrap();
        assert!(found.ut().abs() < 0.01 / SECONDS_PER_DAY * 1.5);
    }

    #[test]
    fn test_step_function_needs_bisection() {
        let t1 = AstroTime::from_ut(0.0);
        let t2 = AstroTime::from_ut(10.0);
        let step = |t: &AstroTime| -> Result<f64, OrreryError> {
            Ok(if t.ut() < 3.3 { -1.0 } else { 1.0 })
        };

        let options = SearchOptions::builder().max_iterations(30).build().unwrap();
        let found = search(step, &t1, &t2, &options).unwrap().unwrap();
        assert_abs_diff_eq!(found.ut(), 3.3, epsilon = 1.0 / SECONDS_PER_DAY);

        let options = SearchOptions::builder().max_iterations(5).build().unwrap();
        assert!(matches!(
            search(step, &t1, &t2, &options),
            Err(OrreryError::NoConvergence(_))
        ));
    }

    #[test]
    fn test_no_crossing() {
        let t1 = AstroTime::from_ut(0.0);
        let t2 = AstroTime::from_ut(1.0);
        let found = search(|_| Ok(1.0), &t1, &t2, &SearchOptions::default()).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_error_propagates() {
        let t1 = AstroTime::from_ut(0.0);
        let t2 = AstroTime::from_ut(1.0);
        let result = search(
            |_| Err(OrreryError::BadVector),
            &t1,
            &t2,
            &SearchOptions::default(),
        );
        assert_eq!(result, Err(OrreryError::BadVector));
    }
}
