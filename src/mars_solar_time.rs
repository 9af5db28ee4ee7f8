//! # Mars solar time
//!
//! Derived quantities of the pipeline: equation of time, Mars Sol Date, Mars Coordinated Time,
//! local mean and true solar time, and the heliocentric distance of Mars.
//!
//! Clock values are in hours. [`mars_coordinated_time`] is always wrapped into `[0, 24)`; the
//! local times returned here are **not** wrapped, see [`wrap_hours`].
use crate::constants::{
    AstronomicalUnit, Degree, Hours, JulianDay, DEGREES_PER_HOUR, HOURS_PER_SOL, MCT_CORRECTION,
    MCT_EPOCH_SOL, MCT_REFERENCE_JD, MSD_CORRECTION, MSD_DAY_OFFSET, MSD_EPOCH_SOL,
    SOL_RATIO_MCT, SOL_RATIO_MSD,
};

/// Compute the Mars equation of time (true minus mean solar time), in degrees.
///
/// Arguments
/// ---------
/// * `solar_longitude`: aerocentric solar longitude `L_s`, degrees
/// * `equation_of_center`: `ν − M`, degrees
///
/// Return
/// ------
/// * `2.861·sin 2L_s − 0.071·sin 4L_s + 0.002·sin 6L_s − (ν − M)`
pub fn equation_of_time(solar_longitude: Degree, equation_of_center: Degree) -> Degree {
    let ls = solar_longitude.to_radians();
    2.861 * (2.0 * ls).sin() - 0.071 * (4.0 * ls).sin() + 0.002 * (6.0 * ls).sin()
        - equation_of_center
}

/// Mars Sol Date: continuous sol count whose fractional part is the time of day at the prime
/// meridian.
pub fn mars_sol_date(delta_j2000: f64) -> f64 {
    (delta_j2000 - MSD_DAY_OFFSET) / SOL_RATIO_MSD + MSD_EPOCH_SOL - MSD_CORRECTION
}

/// Compute the Mars Coordinated Time (mean solar time at the prime meridian).
///
/// Argument
/// --------
/// * `jd_tt`: Julian Date (TT)
///
/// Return
/// ------
/// * hours in `[0, 24)`, wrapped with a true (Euclidean) modulo
pub fn mars_coordinated_time(jd_tt: JulianDay) -> Hours {
    let sols = (jd_tt - MCT_REFERENCE_JD) / SOL_RATIO_MCT + MCT_EPOCH_SOL - MCT_CORRECTION;
    wrap_hours(HOURS_PER_SOL * sols)
}

/// Local Mean Solar Time at a longitude west of the prime meridian.
///
/// `LMST = MCT − λ_W / 15`. Not wrapped: eastern sites can exceed 24 h and western sites can
/// go negative.
pub fn local_mean_solar_time(coordinated_time: Hours, longitude_west: Degree) -> Hours {
    coordinated_time - longitude_west / DEGREES_PER_HOUR
}

/// Local True Solar Time, `LTST = LMST + EOT / 15`. Not wrapped.
pub fn local_true_solar_time(local_mean_time: Hours, equation_of_time: Degree) -> Hours {
    local_mean_time + equation_of_time / DEGREES_PER_HOUR
}

/// Heliocentric distance of Mars in astronomical units, from its mean anomaly in degrees.
pub fn heliocentric_distance(mean_anomaly: Degree) -> AstronomicalUnit {
    let m = mean_anomaly.to_radians();
    1.5236 * (1.00436 - 0.09309 * m.cos() - 0.00436 * (2.0 * m).cos() - 0.00031 * (3.0 * m).cos())
}

/// Bring a clock value into `[0, 24)`.
pub fn wrap_hours(hours: Hours) -> Hours {
    let wrapped = hours.rem_euclid(HOURS_PER_SOL);
    if wrapped >= HOURS_PER_SOL {
        0.0
    } else {
        wrapped
    }
}
