use crate::constants::{Degree, Hour};

/// Wrap an angle into `[0, 360)` degrees.
pub fn normalize_longitude(lon: Degree) -> Degree {
    let wrapped = lon.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle into `(-180, +180]` degrees.
///
/// Used to turn a longitude difference into a signed offset whose zero crossing
/// marks the event being searched for.
pub fn longitude_offset(diff: Degree) -> Degree {
    let mut offset = diff;
    while offset <= -180.0 {
        offset += 360.0;
    }
    while offset > 180.0 {
        offset -= 360.0;
    }
    offset
}

/// Wrap an hour angle into `[0, 24)`.
pub(crate) fn normalize_hours(h: Hour) -> Hour {
    let wrapped = h.rem_euclid(24.0);
    if wrapped >= 24.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap a terrestrial longitude into `(-180, +180]` degrees.
pub(crate) fn wrap_signed_degrees(lon: Degree) -> Degree {
    let mut wrapped = lon.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped -= 360.0;
    }
    wrapped
}

#[cfg(test)]
mod conversion_test {
    use super::*;

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(370.0), 10.0);
        assert_eq!(normalize_longitude(-10.0), 350.0);
        assert_eq!(normalize_longitude(720.0), 0.0);
        assert_eq!(normalize_longitude(-1e-20), 0.0);
    }

    #[test]
    fn test_longitude_offset() {
        assert_eq!(longitude_offset(180.0), 180.0);
        assert_eq!(longitude_offset(-180.0), 180.0);
        assert_eq!(longitude_offset(190.0), -170.0);
        assert_eq!(longitude_offset(-350.0), 10.0);
        assert_eq!(longitude_offset(0.0), 0.0);
    }

    #[test]
    fn test_hours_and_signed_degrees() {
        assert_eq!(normalize_hours(-1.0), 23.0);
        assert_eq!(normalize_hours(25.5), 1.5);
        assert_eq!(wrap_signed_degrees(270.0), -90.0);
        assert_eq!(wrap_signed_degrees(180.0), 180.0);
        assert_eq!(wrap_signed_degrees(-180.0), 180.0);
    }
}
