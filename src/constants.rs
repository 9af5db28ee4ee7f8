//! # Constants and type definitions for marsclock
//!
//! This module centralizes the **epochs**, **scale factors** and **unit type aliases** used by the
//! Earth → Mars time pipeline.
//!
//! ## Overview
//!
//! - Earth time bases (Unix epoch as a Julian Date, J2000.0, TT − TAI offset)
//! - Leap-second default (TAI − UTC), overridable through [`MarsClockParams`](crate::params::MarsClockParams)
//! - Mars day / sol scaling used by the sol date and the coordinated clock
//! - Unit type aliases shared by every stage

// -------------------------------------------------------------------------------------------------
// Earth time bases
// -------------------------------------------------------------------------------------------------

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC)
pub const UNIX_EPOCH_JD: JulianDay = 2_440_587.5;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const J2000_JD: JulianDay = 2_451_545.0;

/// Milliseconds in an Earth day
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Seconds in an Earth day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// TT − TAI, in seconds (fixed by definition)
pub const TT_MINUS_TAI: f64 = 32.184;

/// TAI − UTC in seconds, valid since 2017-01-01.
///
/// This is a frozen value: any leap second announced later makes every result drift by one
/// second of Earth time per leap second. Use
/// [`MarsClockParamsBuilder::leap_seconds`](crate::params::MarsClockParamsBuilder::leap_seconds)
/// to override it.
pub const DEFAULT_LEAP_SECONDS: f64 = 37.0;

/// Beyond this distance from J2000.0 (in days, about ±27 000 years) the day-count subtractions
/// lose enough bits of `f64` precision that sub-second clock output is no longer meaningful.
pub const PRECISION_HORIZON_DAYS: f64 = 1.0e7;

// -------------------------------------------------------------------------------------------------
// Mars time scaling
// -------------------------------------------------------------------------------------------------

/// Ratio between a Mars solar day (sol) and an Earth day, as used by the sol date
pub const SOL_RATIO_MSD: f64 = 1.027_491_252;

/// Ratio between a sol and an Earth day, as used by the coordinated clock
pub const SOL_RATIO_MCT: f64 = 1.027_491_251_7;

/// Offset applied to `delta_j2000` before scaling into sols
pub const MSD_DAY_OFFSET: f64 = 4.5;

/// Sol count at the scaling origin of the Mars Sol Date
pub const MSD_EPOCH_SOL: f64 = 44_796.0;

/// Small empirical correction of the Mars Sol Date
pub const MSD_CORRECTION: f64 = 0.000_96;

/// TT Julian Date used as origin by the coordinated clock (2000-01-06 00:00 TT)
pub const MCT_REFERENCE_JD: JulianDay = 2_451_549.5;

/// Sol count at [`MCT_REFERENCE_JD`]
pub const MCT_EPOCH_SOL: f64 = 44_769.0;

/// Small empirical correction of the coordinated clock
pub const MCT_CORRECTION: f64 = 0.000_962_6;

/// Hours in a Mars clock day
pub const HOURS_PER_SOL: Hours = 24.0;

/// Degrees of longitude per clock hour
pub const DEGREES_PER_HOUR: Degree = 15.0;

/// Longitude of Gale crater (Curiosity rover), degrees west of the Mars prime meridian
pub const GALE_CRATER_LONGITUDE_WEST: Degree = 222.6;

/// Number of fractional digits kept when rendering a sol date
pub const SOL_FRACTION_DIGITS: u32 = 5;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Duration or clock value in hours
pub type Hours = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Date (days)
pub type JulianDay = f64;
/// Milliseconds since the Unix epoch
pub type UnixMillis = f64;
