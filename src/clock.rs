//! # Clock rendering
//!
//! Fixed-width renderings of the Mars time quantities:
//!
//! - [`ClockTime`]: a fractional-hour value split into `hh:mm:ss`, each field two digits wide.
//! - [`SolDate`]: a Mars Sol Date split into its sol count and exactly five fractional digits.
//!
//! Both use integer arithmetic on a scaled value and **truncate**: fractional seconds and the
//! sixth fractional sol digit onward are dropped, never rounded. The truncation absorbs the
//! binary representation error of the input, so a value written with whole seconds (or at most
//! five sol digits) renders those digits exactly: `4.1` h is `04:06:00`, `0.29` is `0.29000`.
use serde::Serialize;
use std::fmt;

use crate::constants::{Hours, SOL_FRACTION_DIGITS};
use crate::mars_clock_errors::MarsClockError;
use crate::mars_solar_time::wrap_hours;

const SECONDS_PER_HOUR: f64 = 3600.0;
const LAST_SECOND_OF_DAY: u32 = 24 * 3600 - 1;

/// `floor(value · scale)`, tolerant to a few ulps of error in a quantity of size `magnitude`.
fn floor_scaled(value: f64, scale: f64, magnitude: f64) -> f64 {
    let slack = 4.0 * f64::EPSILON * magnitude.abs().max(1.0) * scale;
    (value * scale + slack).floor()
}

/// A time of day on a 24-hour Mars clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    /// Split a fractional-hour value into hours, minutes and whole seconds.
    ///
    /// Arguments
    /// ---------
    /// * `hours`: clock value in hours; values outside `[0, 24)` are wrapped first
    ///
    /// Return
    /// ------
    /// * the clock time, or [`MarsClockError::NonFiniteHours`] for NaN / ±∞
    pub fn from_hours(hours: Hours) -> Result<Self, MarsClockError> {
        if !hours.is_finite() {
            return Err(MarsClockError::NonFiniteHours(hours));
        }

        let wrapped = wrap_hours(hours);
        let total = floor_scaled(wrapped, SECONDS_PER_HOUR, wrapped) as u32;
        let total = total.min(LAST_SECOND_OF_DAY);

        Ok(ClockTime {
            hours: (total / 3600) as u8,
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
        })
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// The three zero-padded fields, `["hh", "mm", "ss"]`.
    pub fn fields(&self) -> [String; 3] {
        [
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Render a fractional-hour value as zero-padded `(hh, mm, ss)` strings.
pub fn format_clock(hours: Hours) -> Result<(String, String, String), MarsClockError> {
    let [hh, mm, ss] = ClockTime::from_hours(hours)?.fields();
    Ok((hh, mm, ss))
}

/// A Mars Sol Date cut to five fractional digits.
///
/// The sol is `floor(MSD)`, so the fraction is always the elapsed part of the sol, also for the
/// negative sol dates of the nineteenth century.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SolDate {
    sol: i64,
    fraction: u32,
}

impl SolDate {
    pub fn from_mars_sol_date(msd: f64) -> Result<Self, MarsClockError> {
        if !msd.is_finite() {
            return Err(MarsClockError::NonFiniteSolDate(msd));
        }

        let scale = 10u32.pow(SOL_FRACTION_DIGITS);
        let sol = msd.floor();
        let fraction = (floor_scaled(msd - sol, scale as f64, msd) as u32).min(scale - 1);

        Ok(SolDate {
            sol: sol as i64,
            fraction,
        })
    }

    pub fn sol(&self) -> i64 {
        self.sol
    }

    /// Fractional part scaled by 10⁵.
    pub fn fraction(&self) -> u32 {
        self.fraction
    }

    /// The sol count and the five fractional digits as separate strings.
    pub fn parts(&self) -> (String, String) {
        (
            self.sol.to_string(),
            format!("{:0width$}", self.fraction, width = SOL_FRACTION_DIGITS as usize),
        )
    }
}

impl fmt::Display for SolDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sol, fraction) = self.parts();
        write!(f, "{sol}.{fraction}")
    }
}
