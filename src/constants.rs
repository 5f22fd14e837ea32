//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Time scale anchors (J2000, MJD offsets)
//! - Unit conversions (degrees ↔ radians, hours ↔ radians, AU ↔ km)
//! - Geodetic constants of the oblate Earth model
//! - Mean radii and magnitude references of the Sun, Moon and planets
//!
//! These definitions are shared by the time model, the position engines and every event search.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of minutes in a day
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days in a Julian millennium
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Modified Julian Date of the J2000.0 epoch (2000-01-01 12:00:00)
pub const T2000: f64 = 51_544.5;

/// Julian Date of the J2000.0 epoch
pub const JD2000: f64 = 2_451_545.0;

/// Astronomical Unit in kilometers
pub const KM_PER_AU: f64 = 1.495_978_706_909_893_2e8;

/// Speed of light in astronomical units per day
pub const C_AUDAY: f64 = 173.144_632_684_669_3;

/// Astronomical units in one light-year
pub const AU_PER_LY: f64 = 63_241.077_088_075_46;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648_000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Arcseconds in a full circle
pub const ASEC360: f64 = 1_296_000.0;

/// Mean obliquity of the ecliptic at J2000 (IAU 2006), in degrees
pub const OBLIQUITY_J2000: f64 = 23.439_279_444_444_445;

// -------------------------------------------------------------------------------------------------
// Earth model
// -------------------------------------------------------------------------------------------------

/// Earth equatorial radius in kilometers
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6_378.136_6;

/// Ratio of polar to equatorial Earth radius (1 - flattening)
pub const EARTH_FLATTENING: f64 = 0.996_647_180_302_104;

/// Square of [`EARTH_FLATTENING`]
pub const EARTH_FLATTENING_SQUARED: f64 = EARTH_FLATTENING * EARTH_FLATTENING;

/// Earth polar radius in kilometers
pub const EARTH_POLAR_RADIUS_KM: f64 = EARTH_EQUATORIAL_RADIUS_KM * EARTH_FLATTENING;

/// Mean Earth radius in kilometers
pub const EARTH_MEAN_RADIUS_KM: f64 = 6_371.0;

/// Effective Earth radius for the umbra and penumbra of lunar eclipses, in kilometers.
/// Slightly larger than the equatorial radius to account for the atmosphere.
pub const EARTH_ECLIPSE_RADIUS_KM: f64 = 6_459.0;

/// Earth rotation rate in radians per second
pub const ANGVEL: f64 = 7.292_115_0e-5;

/// Ratio of solar days to sidereal days
pub const SOLAR_DAYS_PER_SIDEREAL_DAY: f64 = 0.997_269_571_759_259_2;

/// Ratio of the Earth mass to the Moon mass
pub const EARTH_MOON_MASS_RATIO: f64 = 81.300_56;

// -------------------------------------------------------------------------------------------------
// Sun, Moon and planets
// -------------------------------------------------------------------------------------------------

/// Solar radius in kilometers
pub const SUN_RADIUS_KM: f64 = 695_700.0;

/// Mean lunar radius in kilometers
pub const MOON_MEAN_RADIUS_KM: f64 = 1_737.4;

/// Lunar equatorial radius in kilometers
pub const MOON_EQUATORIAL_RADIUS_KM: f64 = 1_738.1;

/// Lunar polar radius in kilometers
pub const MOON_POLAR_RADIUS_KM: f64 = 1_736.0;

/// Mercury mean radius in kilometers
pub const MERCURY_RADIUS_KM: f64 = 2_439.7;

/// Venus mean radius in kilometers
pub const VENUS_RADIUS_KM: f64 = 6_051.8;

/// Mean synodic month in days
pub const MEAN_SYNODIC_MONTH: f64 = 29.530_588;

/// Sidereal orbital period of the Earth in days
pub const EARTH_ORBITAL_PERIOD: f64 = 365.256;

/// Apparent magnitude of the Sun seen from 1 AU
pub const SUN_MAG_1AU: f64 = -26.74;

/// Standard refraction at the horizon, in degrees (34 arcminutes)
pub const REFRACTION_NEAR_HORIZON: f64 = 34.0 / 60.0;

// Gravitational parameters GM in AU³/day²

pub const SUN_GM: f64 = 0.295_912_208_285_591_1e-03;
pub const MERCURY_GM: f64 = 0.491_250_019_488_931_8e-10;
pub const VENUS_GM: f64 = 0.724_345_233_264_411_9e-09;
pub const EARTH_GM: f64 = 0.888_769_244_512_563_4e-09;
pub const MOON_GM: f64 = 0.109_318_945_074_237_4e-10;
pub const MARS_GM: f64 = 0.954_954_869_555_077_0e-10;
pub const JUPITER_GM: f64 = 0.282_534_584_083_387_0e-06;
pub const SATURN_GM: f64 = 0.845_970_607_324_503_0e-07;
pub const URANUS_GM: f64 = 0.129_202_482_578_296_0e-07;
pub const NEPTUNE_GM: f64 = 0.152_435_734_788_511_0e-07;
pub const PLUTO_GM: f64 = 0.217_844_105_197_418_0e-11;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle in sidereal hours
pub type Hour = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in meters
pub type Meter = f64;
/// Distance in astronomical units
pub type Au = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
