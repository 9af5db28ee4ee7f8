//! # Mars clock parameters
//!
//! This module defines the [`MarsClockParams`](crate::params::MarsClockParams) configuration
//! struct and its builder, which control the few tunable points of the Earth → Mars pipeline.
//!
//! ## Purpose
//!
//! - **Leap seconds**: TAI − UTC used by the UT → TT step. The default (37 s) is valid from
//!   2017-01-01; set it explicitly when a new leap second is announced or when reproducing
//!   results for an earlier era.
//! - **Angle reduction**: floor modulo (default) or the historical truncation, see
//!   [`AngleReduction`].
//! - **Local time wrapping**: whether [`MartianTime`](crate::martian_time::MartianTime) brings
//!   local solar times back into `[0, 24)`.
//!
//! ## Example
//!
//! ```rust
//! use marsclock::mars_orbit::AngleReduction;
//! use marsclock::params::MarsClockParams;
//!
//! let params = MarsClockParams::builder()
//!     .leap_seconds(37.0)
//!     .angle_reduction(AngleReduction::Truncate)
//!     .wrap_local_time(false)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.leap_seconds, 37.0);
//! ```
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LEAP_SECONDS;
use crate::mars_clock_errors::MarsClockError;
use crate::mars_orbit::AngleReduction;

/// Upper bound accepted for TAI − UTC, in seconds
const MAX_LEAP_SECONDS: f64 = 100.0;

/// Configuration of the Earth → Mars time pipeline.
///
/// Defaults
/// --------
/// * `leap_seconds`: 37.0
/// * `angle_reduction`: [`AngleReduction::Floor`]
/// * `wrap_local_time`: true
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarsClockParams {
    /// TAI − UTC in seconds.
    pub leap_seconds: f64,
    /// Rule used to reduce orbital angles into one turn.
    pub angle_reduction: AngleReduction,
    /// Wrap local mean/true solar times into `[0, 24)`.
    pub wrap_local_time: bool,
}

impl MarsClockParams {
    /// Construct a new [`MarsClockParams`] with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`MarsClockParamsBuilder`] to configure custom parameters.
    pub fn builder() -> MarsClockParamsBuilder {
        MarsClockParamsBuilder::new()
    }

    /// Parameters reproducing the historical clock: truncating reduction, unwrapped local time.
    pub fn legacy() -> Self {
        MarsClockParams {
            angle_reduction: AngleReduction::Truncate,
            wrap_local_time: false,
            ..Self::default()
        }
    }
}

impl Default for MarsClockParams {
    fn default() -> Self {
        MarsClockParams {
            leap_seconds: DEFAULT_LEAP_SECONDS,
            angle_reduction: AngleReduction::Floor,
            wrap_local_time: true,
        }
    }
}

/// Builder for [`MarsClockParams`], with validation.
#[derive(Debug, Clone)]
pub struct MarsClockParamsBuilder {
    params: MarsClockParams,
}

impl Default for MarsClockParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MarsClockParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: MarsClockParams::default(),
        }
    }

    pub fn leap_seconds(mut self, v: f64) -> Self {
        self.params.leap_seconds = v;
        self
    }
    pub fn angle_reduction(mut self, v: AngleReduction) -> Self {
        self.params.angle_reduction = v;
        self
    }
    pub fn wrap_local_time(mut self, v: bool) -> Self {
        self.params.wrap_local_time = v;
        self
    }

    /// Finalize the builder and produce a [`MarsClockParams`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `leap_seconds` must be finite and within `[0, 100]`.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(MarsClockParams)` if all values are valid.
    /// * `Err(MarsClockError::InvalidParams)` otherwise.
    pub fn build(self) -> Result<MarsClockParams, MarsClockError> {
        let p = &self.params;

        if !p.leap_seconds.is_finite() || !(0.0..=MAX_LEAP_SECONDS).contains(&p.leap_seconds) {
            return Err(MarsClockError::InvalidParams(format!(
                "leap_seconds must be finite and within [0, {MAX_LEAP_SECONDS}], got {}",
                p.leap_seconds
            )));
        }

        Ok(self.params)
    }
}
