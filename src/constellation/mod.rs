//! # Constellations
//!
//! Finds which of the 88 IAU constellations contains a direction in the sky. The official
//! boundaries run along lines of constant right ascension and declination of the B1875 mean
//! equator, so the J2000 direction is first precessed to that epoch.
//!
//! ```rust
//! use orrery::constellation::constellation;
//!
//! // Betelgeuse
//! let info = constellation(5.919_5, 7.407)?;
//! assert_eq!(info.symbol, "Ori");
//! assert_eq!(info.name, "Orion");
//! # Ok::<(), orrery::orrery_errors::OrreryError>(())
//! ```

mod boundaries;

use boundaries::{BOUNDARIES, CONSTELLATION_NAMES};

use crate::constants::{Degree, Hour};
use crate::conversion::normalize_hours;
use crate::earth_orientation::precession_matrix;
use crate::orrery_errors::OrreryError;
use crate::time::AstroTime;
use crate::vector::{equator_from_vector, vector_from_sphere, AstroVector, Spherical};

/// Besselian epoch B1875.0 as a TT day count since J2000.
const B1875_TT: f64 = -45_655.741_449_525;

/// The constellation containing a sky position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationInfo {
    /// Three-letter IAU abbreviation, e.g. `"UMa"`
    pub symbol: &'static str,
    /// Full Latin name
    pub name: &'static str,
    /// Right ascension on the B1875 mean equator, hours
    pub ra_1875: Hour,
    /// Declination on the B1875 mean equator, degrees
    pub dec_1875: Degree,
}

/// Full name of a constellation from its IAU abbreviation.
pub fn full_name(abbreviation: &str) -> Option<&'static str> {
    CONSTELLATION_NAMES
        .iter()
        .find(|(abbr, _)| *abbr == abbreviation)
        .map(|(_, name)| *name)
}

/// All 88 `(abbreviation, name)` pairs, sorted by abbreviation.
pub fn all_names() -> &'static [(&'static str, &'static str); 88] {
    &CONSTELLATION_NAMES
}

/// Constellation containing a J2000 equatorial direction.
///
/// Arguments
/// ---------
/// * `ra`: right ascension in sidereal hours, EQJ; any value is wrapped into `[0, 24)`.
/// * `dec`: declination in degrees, EQJ.
///
/// Returns
/// --------
/// * The constellation and the B1875 coordinates used to look it up.
/// * [`OrreryError::InvalidParameter`] when `dec` is outside `[-90, +90]` or either angle is
///   not finite.
pub fn constellation(ra: Hour, dec: Degree) -> Result<ConstellationInfo, OrreryError> {
    if !ra.is_finite() || !dec.is_finite() || dec.abs() > 90.0 {
        return Err(OrreryError::InvalidParameter(format!(
            "sky position ra = {ra} h, dec = {dec}°"
        )));
    }
    let epoch = AstroTime::from_tt(B1875_TT);
    let eqj = vector_from_sphere(&Spherical::new(dec, 15.0 * normalize_hours(ra), 1.0), epoch);
    let b1875 = AstroVector::from_vec(precession_matrix(B1875_TT) * eqj.pos, epoch);
    let equ = equator_from_vector(&b1875)?;

    let symbol = BOUNDARIES
        .iter()
        .find(|(ra_lo, ra_hi, dec_lo, _)| {
            *ra_lo <= equ.ra && equ.ra < *ra_hi && equ.dec >= *dec_lo
        })
        .map(|row| row.3)
        .ok_or_else(|| {
            OrreryError::InternalError(format!("no boundary row for ra = {ra} h, dec = {dec}°"))
        })?;
    let name = full_name(symbol).ok_or_else(|| {
        OrreryError::InternalError(format!("unknown constellation symbol {symbol}"))
    })?;

    Ok(ConstellationInfo {
        symbol,
        name,
        ra_1875: equ.ra,
        dec_1875: equ.dec,
    })
}

#[cfg(test)]
mod constellation_test {
    use super::*;
    use std::collections::HashSet;

    fn symbol(ra: Hour, dec: Degree) -> &'static str {
        constellation(ra, dec).unwrap().symbol
    }

    #[test]
    fn test_bright_stars() {
        let stars = [
            ("Sirius", 6.752_5, -16.716, "CMa"),
            ("Polaris", 2.530, 89.264, "UMi"),
            ("Betelgeuse", 5.919_5, 7.407, "Ori"),
            ("Alnitak", 5.679, -1.943, "Ori"),
            ("Vega", 18.615, 38.784, "Lyr"),
            ("Acrux", 12.443, -63.099, "Cru"),
            ("Alpheratz", 0.140, 29.091, "And"),
            ("Antares", 16.490, -26.432, "Sco"),
            ("Canopus", 6.399, -52.696, "Car"),
            ("Rasalhague", 17.582, 12.560, "Oph"),
            ("Alpha Scuti", 18.587, -8.244, "Sct"),
            ("Sigma Octantis", 21.146, -88.956, "Oct"),
        ];
        for (star, ra, dec, expected) in stars {
            assert_eq!(symbol(ra, dec), expected, "{star}");
        }
    }

    #[test]
    fn test_poles() {
        assert_eq!(symbol(0.0, 90.0), "UMi");
        assert_eq!(symbol(13.0, -90.0), "Oct");
    }

    #[test]
    fn test_precession_to_b1875() {
        // Polaris sits close enough to the pole that 125 years move it by over half an hour
        let info = constellation(2.530, 89.264).unwrap();
        assert!((info.ra_1875 - 2.530).abs() > 0.5);
        assert!(info.dec_1875 < 89.264);
        assert_eq!(info.name, "Ursa Minor");
    }

    #[test]
    fn test_right_ascension_wraps() {
        assert_eq!(symbol(29.919_5, 7.407), "Ori");
        assert_eq!(symbol(-18.0, 60.0), symbol(6.0, 60.0));
    }

    #[test]
    fn test_invalid_declination() {
        assert!(matches!(
            constellation(3.0, 90.5),
            Err(OrreryError::InvalidParameter(_))
        ));
        assert!(constellation(f64::NAN, 10.0).is_err());
        assert!(constellation(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_full_name_lookup() {
        assert_eq!(full_name("Ori"), Some("Orion"));
        assert_eq!(full_name("CVn"), Some("Canes Venatici"));
        assert_eq!(full_name("Xyz"), None);
        assert_eq!(all_names().len(), 88);
    }

    #[test]
    fn test_boundary_table() {
        let symbols: HashSet<&str> = BOUNDARIES.iter().map(|row| row.3).collect();
        assert_eq!(symbols.len(), 88);
        assert!(symbols.iter().all(|s| full_name(s).is_some()));
        assert!(BOUNDARIES.windows(2).all(|w| w[0].2 >= w[1].2));
        assert!(BOUNDARIES.iter().all(|(lo, hi, _, _)| lo < hi));
    }
}
