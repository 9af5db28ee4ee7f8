//! # Earth time basis
//!
//! Conversion of an Earth instant into the day counts that seed the Mars pipeline:
//!
//! ```text
//! Unix milliseconds ──► JD (UT) ──► JD (TT) ──► Δt since J2000.0
//! ```
//!
//! [`EarthInstant`] is the validated entry point: it only ever holds a finite number of
//! milliseconds since the Unix epoch, so every downstream stage works on finite reals.
//!
//! ## Accuracy
//!
//! The UT → TT step adds `TT − TAI + TAI − UTC` with a **fixed** leap-second count
//! ([`DEFAULT_LEAP_SECONDS`] unless overridden). Instants before 2017 or after the next leap
//! second are shifted by the corresponding whole seconds.
use hifitime::Epoch;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    JulianDay, UnixMillis, DEFAULT_LEAP_SECONDS, J2000_JD, MILLIS_PER_DAY, SECONDS_PER_DAY,
    TT_MINUS_TAI, UNIX_EPOCH_JD,
};
use crate::mars_clock_errors::MarsClockError;

/// A single point in Earth time, stored as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EarthInstant {
    unix_millis: UnixMillis,
}

impl EarthInstant {
    /// Build an instant from milliseconds since 1970-01-01T00:00:00 UTC.
    ///
    /// Arguments
    /// ---------
    /// * `unix_millis`: milliseconds since the Unix epoch, may be negative
    ///
    /// Return
    /// ------
    /// * the instant, or [`MarsClockError::NonFiniteInstant`] for NaN / ±∞
    pub fn from_unix_millis(unix_millis: UnixMillis) -> Result<Self, MarsClockError> {
        if !unix_millis.is_finite() {
            return Err(MarsClockError::NonFiniteInstant(unix_millis));
        }
        Ok(EarthInstant { unix_millis })
    }

    /// Convert a hifitime [`Epoch`] (any time scale) into an instant.
    pub fn from_epoch(epoch: Epoch) -> Result<Self, MarsClockError> {
        Self::from_unix_millis(epoch.to_unix_milliseconds())
    }

    /// Read the system clock.
    pub fn now() -> Result<Self, MarsClockError> {
        Self::from_epoch(Epoch::now()?)
    }

    pub fn unix_millis(&self) -> UnixMillis {
        self.unix_millis
    }

    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_unix_milliseconds(self.unix_millis)
    }

    /// Julian Date (UT) of this instant.
    pub fn julian_date_ut(&self) -> JulianDay {
        julian_date_ut(self.unix_millis)
    }
}

impl FromStr for EarthInstant {
    type Err = MarsClockError;

    /// Parse any timestamp understood by hifitime, e.g. `2000-01-06T00:00:00 UTC`
    /// or `2024-03-20T12:30:00` (UTC assumed when no scale is given).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let epoch = Epoch::from_str(s.trim())
            .map_err(|e| MarsClockError::TimestampParse(format!("{s}: {e}")))?;
        Self::from_epoch(epoch)
    }
}

impl fmt::Display for EarthInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_epoch())
    }
}

/// Transformation from Unix milliseconds to Julian Date (UT)
///
/// Argument
/// --------
/// * `millis`: milliseconds since the Unix epoch
///
/// Return
/// ------
/// * the Julian Date on the UT basis
pub fn julian_date_ut(millis: UnixMillis) -> JulianDay {
    UNIX_EPOCH_JD + millis / MILLIS_PER_DAY
}

/// Transformation from Julian Date (UT) to Julian Date (TT) with the default leap-second count
pub fn julian_date_tt(jd_ut: JulianDay) -> JulianDay {
    julian_date_tt_with_leap_seconds(jd_ut, DEFAULT_LEAP_SECONDS)
}

/// Transformation from Julian Date (UT) to Julian Date (TT)
///
/// Arguments
/// ---------
/// * `jd_ut`: Julian Date on the UT basis
/// * `leap_seconds`: TAI − UTC in seconds
///
/// Return
/// ------
/// * `jd_ut + (32.184 + leap_seconds) / 86400`
pub fn julian_date_tt_with_leap_seconds(jd_ut: JulianDay, leap_seconds: f64) -> JulianDay {
    jd_ut + (TT_MINUS_TAI + leap_seconds) / SECONDS_PER_DAY
}

/// Signed number of days since the J2000.0 epoch, from a Julian Date (TT)
pub fn delta_j2000(jd_tt: JulianDay) -> f64 {
    jd_tt - J2000_JD
}
