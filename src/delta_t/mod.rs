//! # ΔT = TT − UT
//!
//! Two interchangeable models of the difference between Terrestrial Time and Universal Time:
//!
//! - [`DeltaTModel::EspenakMeeus`] evaluates the piecewise polynomial expressions published by
//!   Espenak & Meeus for the NASA *Five Millennium Canon of Solar Eclipses*. This is the default
//!   model and is valid for any date (the expressions fall back to a parabola outside −500..2150).
//! - [`DeltaTModel::Table`] interpolates linearly inside a compiled-in table of
//!   `(MJD, ΔT)` nodes, clamping to the first/last node outside the covered range.
//!
//! Both are pure functions of `ut` and hold no mutable state.

mod table;

use serde::{Deserialize, Serialize};

use crate::constants::{T2000, MJD};

use self::table::DELTA_T_NODES;

/// One node of the ΔT table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DeltaTNode {
    /// Modified Julian Date of the node (UT)
    pub(crate) mjd: MJD,
    /// ΔT in seconds
    pub(crate) dt: f64,
}

/// Selects how ΔT is obtained when building an [`AstroTime`](crate::time::AstroTime).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeltaTModel {
    /// Espenak & Meeus piecewise polynomials.
    #[default]
    EspenakMeeus,
    /// Linear interpolation in the compiled-in node table, clamped at its bounds.
    Table,
}

impl DeltaTModel {
    /// ΔT in seconds at the given universal time.
    ///
    /// Arguments
    /// ---------
    /// * `ut`: days since J2000 on the UT scale.
    ///
    /// Returns
    /// --------
    /// * TT − UT in seconds.
    pub fn delta_t(self, ut: f64) -> f64 {
        match self {
            DeltaTModel::EspenakMeeus => delta_t_espenak_meeus(ut),
            DeltaTModel::Table => delta_t_table(ut + T2000),
        }
    }
}

/// ΔT from the Espenak & Meeus polynomial expressions.
///
/// The decimal year is derived from `ut` with the tropical year length,
/// offset so that `y = 2000.0` falls on 2000-01-14.
pub fn delta_t_espenak_meeus(ut: f64) -> f64 {
    let y = 2000.0 + (ut - 14.0) / 365.24217;

    if y < -500.0 {
        let u = (y - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if y < 500.0 {
        let u = y / 100.0;
        let (u2, u3) = (u * u, u * u * u);
        let (u4, u5, u6) = (u2 * u2, u2 * u3, u3 * u3);
        return 10583.6 - 1014.41 * u + 33.78311 * u2 - 5.952053 * u3 - 0.1798452 * u4
            + 0.022174192 * u5
            + 0.0090316521 * u6;
    }
    if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        let (u2, u3) = (u * u, u * u * u);
        let (u4, u5, u6) = (u2 * u2, u2 * u3, u3 * u3);
        return 1574.2 - 556.01 * u + 71.23472 * u2 + 0.319781 * u3 - 0.8503463 * u4
            - 0.005050998 * u5
            + 0.0083572073 * u6;
    }
    if y < 1700.0 {
        let u = y - 1600.0;
        let (u2, u3) = (u * u, u * u * u);
        return 120.0 - 0.9808 * u - 0.01532 * u2 + u3 / 7129.0;
    }
    if y < 1800.0 {
        let u = y - 1700.0;
        let (u2, u3) = (u * u, u * u * u);
        let u4 = u2 * u2;
        return 8.83 + 0.1603 * u - 0.0059285 * u2 + 0.00013336 * u3 - u4 / 1174000.0;
    }
    if y < 1860.0 {
        let u = y - 1800.0;
        let (u2, u3) = (u * u, u * u * u);
        let (u4, u5, u6) = (u2 * u2, u2 * u3, u3 * u3);
        let u7 = u6 * u;
        return 13.72 - 0.332447 * u + 0.0068612 * u2 + 0.0041116 * u3 - 0.00037436 * u4
            + 0.0000121272 * u5
            - 0.0000001699 * u6
            + 0.000000000875 * u7;
    }
    if y < 1900.0 {
        let u = y - 1860.0;
        let (u2, u3) = (u * u, u * u * u);
        let (u4, u5) = (u2 * u2, u2 * u3);
        return 7.62 + 0.5737 * u - 0.251754 * u2 + 0.01680668 * u3 - 0.0004473624 * u4
            + u5 / 233174.0;
    }
    if y < 1920.0 {
        let u = y - 1900.0;
        let (u2, u3) = (u * u, u * u * u);
        let u4 = u2 * u2;
        return -2.79 + 1.494119 * u - 0.0598939 * u2 + 0.0061966 * u3 - 0.000197 * u4;
    }
    if y < 1941.0 {
        let u = y - 1920.0;
        let (u2, u3) = (u * u, u * u * u);
        return 21.20 + 0.84493 * u - 0.076100 * u2 + 0.0020936 * u3;
    }
    if y < 1961.0 {
        let u = y - 1950.0;
        let (u2, u3) = (u * u, u * u * u);
        return 29.07 + 0.407 * u - u2 / 233.0 + u3 / 2547.0;
    }
    if y < 1986.0 {
        let u = y - 1975.0;
        let (u2, u3) = (u * u, u * u * u);
        return 45.45 + 1.067 * u - u2 / 260.0 - u3 / 718.0;
    }
    if y < 2005.0 {
        let u = y - 2000.0;
        let (u2, u3) = (u * u, u * u * u);
        let (u4, u5) = (u2 * u2, u2 * u3);
        return 63.86 + 0.3345 * u - 0.060374 * u2 + 0.0017275 * u3 + 0.000651814 * u4
            + 0.00002373599 * u5;
    }
    if y < 2050.0 {
        let u = y - 2000.0;
        return 62.92 + 0.32217 * u + 0.005589 * u * u;
    }
    if y < 2150.0 {
        let u = (y - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y);
    }

    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT interpolated from the node table.
///
/// Binary search for the bracketing pair of nodes, then linear interpolation.
/// Requests before the first node or after the last node return the boundary value.
///
/// Arguments
/// ---------
/// * `mjd`: Modified Julian Date on the UT scale.
pub fn delta_t_table(mjd: MJD) -> f64 {
    let nodes = &DELTA_T_NODES[..];
    let (first, last) = (nodes[0], nodes[nodes.len() - 1]);

    if mjd <= first.mjd {
        return first.dt;
    }
    if mjd >= last.mjd {
        return last.dt;
    }

    // index of the first node strictly after mjd; always in 1..len
    let hi = nodes.partition_point(|node| node.mjd <= mjd);
    let (a, b) = (nodes[hi - 1], nodes[hi]);
    let frac = (mjd - a.mjd) / (b.mjd - a.mjd);
    a.dt + frac * (b.dt - a.dt)
}

#[cfg(test)]
mod delta_t_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_table_is_sorted() {
        assert!(DELTA_T_NODES.windows(2).all(|w| w[0].mjd < w[1].mjd));
    }

    #[test]
    fn test_table_clamps_at_bounds() {
        let first = DELTA_T_NODES[0];
        let last = DELTA_T_NODES[DELTA_T_NODES.len() - 1];
        assert_eq!(delta_t_table(first.mjd - 1.0e6), first.dt);
        assert_eq!(delta_t_table(last.mjd + 1.0e6), last.dt);
    }

    #[test]
    fn test_table_interpolates_between_nodes() {
        let a = DELTA_T_NODES[150];
        let b = DELTA_T_NODES[151];
        assert_abs_diff_eq!(delta_t_table(a.mjd), a.dt, epsilon = 1e-12);
        let mid = delta_t_table(0.5 * (a.mjd + b.mjd));
        assert_abs_diff_eq!(mid, 0.5 * (a.dt + b.dt), epsilon = 1e-9);
    }

    #[test]
    fn test_models_agree_in_modern_era() {
        // 2018-12-02: both models sit around 69 seconds
        let ut = 6910.27;
        let em = DeltaTModel::EspenakMeeus.delta_t(ut);
        let tab = DeltaTModel::Table.delta_t(ut);
        assert_abs_diff_eq!(em, 70.996, epsilon = 0.01);
        assert_abs_diff_eq!(em, tab, epsilon = 0.1);
    }

    #[test]
    fn test_espenak_meeus_long_term_parabola() {
        // far future: -20 + 32 u², u = (y - 1820) / 100
        let ut = (3000.0 - 2000.0) * 365.24217 + 14.0;
        assert_abs_diff_eq!(delta_t_espenak_meeus(ut), -20.0 + 32.0 * 11.8 * 11.8, epsilon = 1e-6);
    }
}
