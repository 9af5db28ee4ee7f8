//! # MartianTime: one Earth instant, every Mars time quantity
//!
//! [`MartianTime`](crate::martian_time::MartianTime) runs the full pipeline once and keeps every
//! intermediate value, so a caller that needs the sol date, the coordinated clock and the
//! heliocentric distance for the same instant does not recompute the shared prefix three times.
//!
//! ## Pipeline
//!
//! ```text
//! EarthInstant
//!   └─► JD (UT) ─► JD (TT) ─► Δt J2000
//!                     │          ├─► M ───────────────┬─► r (AU)
//!                     │          ├─► α_FMS ──┐        │
//!                     │          ├─► PBS ────┼─► ν − M┴─► L_s ─► EOT
//!                     │          └─► MSD     │
//!                     └─► MCT ─► LMST(λ) ─► LTST(λ)
//! ```
//!
//! ## Typical usage
//!
//! ```rust
//! use marsclock::martian_time::MartianTime;
//! use marsclock::params::MarsClockParams;
//! use marsclock::time::EarthInstant;
//!
//! let instant = EarthInstant::from_unix_millis(947_116_800_000.0).unwrap();
//! let mars = MartianTime::compute(instant, &MarsClockParams::default());
//!
//! assert_eq!(mars.sol_date().unwrap().to_string(), "44795.99981");
//! assert_eq!(mars.coordinated_clock().unwrap().to_string(), "23:59:44");
//! ```
//!
//! A value is built for a single instant and never updated: a refreshing display builds a new
//! one on every tick.
use serde::Serialize;
use tracing::{trace, warn};

use crate::{
    clock::{ClockTime, SolDate},
    constants::{AstronomicalUnit, Degree, Hours, JulianDay, PRECISION_HORIZON_DAYS},
    mars_clock_errors::MarsClockError,
    mars_orbit::{
        aerocentric_solar_longitude, angle_fiction_mean_sun, equation_of_center,
        mars_mean_anomaly, perturbers,
    },
    mars_solar_time::{
        equation_of_time, heliocentric_distance, local_mean_solar_time, local_true_solar_time,
        mars_coordinated_time, mars_sol_date, wrap_hours,
    },
    params::MarsClockParams,
    time::{delta_j2000, julian_date_tt_with_leap_seconds, EarthInstant},
};

/// All Mars time quantities derived from one Earth instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MartianTime {
    /// Milliseconds since the Unix epoch of the seed instant
    pub unix_millis: f64,
    /// Julian Date, UT basis
    pub julian_date_ut: JulianDay,
    /// Julian Date, TT basis
    pub julian_date_tt: JulianDay,
    /// Days since J2000.0 (TT)
    pub delta_j2000: f64,
    /// Mean anomaly of Mars, degrees
    pub mean_anomaly: Degree,
    /// Angle of the Fictitious Mean Sun, degrees
    pub angle_fiction_mean_sun: Degree,
    /// Sum of the planetary perturbations, degrees
    pub perturbers: Degree,
    /// Equation of center `ν − M`, degrees
    pub equation_of_center: Degree,
    /// Aerocentric solar longitude `L_s`, degrees
    pub solar_longitude: Degree,
    /// Equation of time, degrees
    pub equation_of_time: Degree,
    /// Mars Sol Date
    pub mars_sol_date: f64,
    /// Mars Coordinated Time, hours in `[0, 24)`
    pub coordinated_time: Hours,
    /// Heliocentric distance of Mars, AU
    pub heliocentric_distance: AstronomicalUnit,
    #[serde(skip)]
    wrap_local_time: bool,
}

impl MartianTime {
    /// Run the full pipeline for one Earth instant.
    ///
    /// Arguments
    /// -----------------
    /// * `instant`: the Earth instant, already validated as finite.
    /// * `params`: leap seconds, angle reduction rule and local time wrapping.
    ///
    /// Return
    /// ----------
    /// * every intermediate and final quantity of the pipeline.
    ///
    /// Instants farther than [`PRECISION_HORIZON_DAYS`] from J2000.0 are still computed, with a
    /// warning: the clock fields lose their sub-second meaning there.
    pub fn compute(instant: EarthInstant, params: &MarsClockParams) -> Self {
        let reduction = params.angle_reduction;

        let julian_date_ut = instant.julian_date_ut();
        let julian_date_tt = julian_date_tt_with_leap_seconds(julian_date_ut, params.leap_seconds);
        let delta_j2000 = delta_j2000(julian_date_tt);

        if beyond_precision_horizon(delta_j2000) {
            warn!(
                delta_j2000,
                horizon = PRECISION_HORIZON_DAYS,
                "instant is far from J2000.0, Mars clock precision is degraded"
            );
        }

        let mean_anomaly = mars_mean_anomaly(delta_j2000, reduction);
        let angle_fiction_mean_sun = angle_fiction_mean_sun(delta_j2000, reduction);
        let perturbers = perturbers(delta_j2000);
        let equation_of_center =
            equation_of_center(delta_j2000, perturbers, mean_anomaly, reduction);
        let solar_longitude =
            aerocentric_solar_longitude(angle_fiction_mean_sun, equation_of_center, reduction);
        let equation_of_time = equation_of_time(solar_longitude, equation_of_center);

        let mars_time = MartianTime {
            unix_millis: instant.unix_millis(),
            julian_date_ut,
            julian_date_tt,
            delta_j2000,
            mean_anomaly,
            angle_fiction_mean_sun,
            perturbers,
            equation_of_center,
            solar_longitude,
            equation_of_time,
            mars_sol_date: mars_sol_date(delta_j2000),
            coordinated_time: mars_coordinated_time(julian_date_tt),
            heliocentric_distance: heliocentric_distance(mean_anomaly),
            wrap_local_time: params.wrap_local_time,
        };

        trace!(
            unix_millis = mars_time.unix_millis,
            delta_j2000,
            msd = mars_time.mars_sol_date,
            mct = mars_time.coordinated_time,
            "computed Mars time"
        );

        mars_time
    }

    /// Validate a Unix timestamp and run the pipeline with default parameters.
    pub fn from_unix_millis(unix_millis: f64) -> Result<Self, MarsClockError> {
        let instant = EarthInstant::from_unix_millis(unix_millis)?;
        Ok(Self::compute(instant, &MarsClockParams::default()))
    }

    /// Run the pipeline for the current system time.
    pub fn now(params: &MarsClockParams) -> Result<Self, MarsClockError> {
        Ok(Self::compute(EarthInstant::now()?, params))
    }

    /// Local Mean Solar Time at a longitude west of the prime meridian, in hours.
    ///
    /// Wrapped into `[0, 24)` unless the pipeline ran with `wrap_local_time = false`.
    pub fn local_mean_solar_time(&self, longitude_west: Degree) -> Result<Hours, MarsClockError> {
        if !longitude_west.is_finite() {
            return Err(MarsClockError::NonFiniteLongitude(longitude_west));
        }
        let lmst = local_mean_solar_time(self.coordinated_time, longitude_west);
        Ok(self.wrap(lmst))
    }

    /// Local True Solar Time at a longitude west of the prime meridian, in hours.
    pub fn local_true_solar_time(&self, longitude_west: Degree) -> Result<Hours, MarsClockError> {
        if !longitude_west.is_finite() {
            return Err(MarsClockError::NonFiniteLongitude(longitude_west));
        }
        let lmst = local_mean_solar_time(self.coordinated_time, longitude_west);
        Ok(self.wrap(local_true_solar_time(lmst, self.equation_of_time)))
    }

    pub fn sol_date(&self) -> Result<SolDate, MarsClockError> {
        SolDate::from_mars_sol_date(self.mars_sol_date)
    }

    pub fn coordinated_clock(&self) -> Result<ClockTime, MarsClockError> {
        ClockTime::from_hours(self.coordinated_time)
    }

    pub fn local_mean_clock(&self, longitude_west: Degree) -> Result<ClockTime, MarsClockError> {
        ClockTime::from_hours(self.local_mean_solar_time(longitude_west)?)
    }

    pub fn local_true_clock(&self, longitude_west: Degree) -> Result<ClockTime, MarsClockError> {
        ClockTime::from_hours(self.local_true_solar_time(longitude_west)?)
    }

    /// True when the instant lies farther than [`PRECISION_HORIZON_DAYS`] from J2000.0.
    pub fn beyond_precision_horizon(&self) -> bool {
        beyond_precision_horizon(self.delta_j2000)
    }

    fn wrap(&self, hours: Hours) -> Hours {
        if self.wrap_local_time {
            wrap_hours(hours)
        } else {
            hours
        }
    }
}

fn beyond_precision_horizon(delta_j2000: f64) -> bool {
    delta_j2000.abs() > PRECISION_HORIZON_DAYS
}
