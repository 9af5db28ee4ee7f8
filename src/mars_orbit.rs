//! # Mars orbital angles
//!
//! Angular stage of the pipeline. Every function takes the number of days since J2000.0 (TT)
//! and returns degrees; trigonometry is evaluated in radians internally.
//!
//! ```text
//! Δt ─┬─► mean anomaly M ─────────────┐
//!     ├─► perturbers PBS ─────────────┼─► equation of center ν − M ─┐
//!     └─► fictitious mean sun α_FMS ──┴──────────────────────────────┴─► L_s
//! ```
//!
//! Reported angles are reduced into `[0, 360)` with an [`AngleReduction`] rule. The default,
//! [`AngleReduction::Floor`], is a true floor modulo; [`AngleReduction::Truncate`] reproduces the
//! historical `x − trunc(x / 360)·360` reduction, which leaves negative angles negative for dates
//! before J2000.0.
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Radian};

/// Rule used to bring an angle back into one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleReduction {
    /// `x − floor(x / 360)·360`, always in `[0, 360)`
    #[default]
    Floor,
    /// `x − trunc(x / 360)·360`, in `(−360, 360)` with the sign of `x`
    Truncate,
}

impl AngleReduction {
    /// Reduce an angle in degrees according to the rule.
    pub fn reduce(self, angle: Degree) -> Degree {
        match self {
            AngleReduction::Floor => {
                let reduced = angle.rem_euclid(360.0);
                // rem_euclid rounds tiny negative inputs up to exactly 360
                if reduced >= 360.0 {
                    0.0
                } else {
                    reduced
                }
            }
            AngleReduction::Truncate => angle - (angle / 360.0).trunc() * 360.0,
        }
    }
}

/// Perturbations of Jupiter, Earth and Venus on the Mars orbit:
/// (amplitude in degrees, period in Julian years, phase in degrees)
const PERTURBERS: [(f64, f64, Degree); 7] = [
    (0.0071, 2.2353, 49.409),
    (0.0057, 2.7543, 168.173),
    (0.0039, 1.1177, 191.837),
    (0.0037, 15.7866, 21.736),
    (0.0021, 2.1354, 15.704),
    (0.0020, 2.4694, 95.528),
    (0.0018, 32.8493, 49.095),
];

/// Mean motion of the Earth in degrees per day, used to express the perturbation periods in years
const EARTH_MEAN_MOTION: f64 = 0.985626;

/// Compute the mean anomaly of Mars.
///
/// Arguments
/// ---------
/// * `delta_j2000`: days since J2000.0 (TT)
/// * `reduction`: rule used to reduce the angle into one turn
///
/// Return
/// ------
/// * `M = 19.3871 + 0.52402073·Δt` in degrees, reduced
pub fn mars_mean_anomaly(delta_j2000: f64, reduction: AngleReduction) -> Degree {
    reduction.reduce(19.3871 + 0.52402073 * delta_j2000)
}

/// Compute the angle of the Fictitious Mean Sun, `α_FMS = 270.3871 + 0.524038496·Δt`, reduced.
pub fn angle_fiction_mean_sun(delta_j2000: f64, reduction: AngleReduction) -> Degree {
    reduction.reduce(270.3871 + 0.524038496 * delta_j2000)
}

/// Sum of the seven planetary perturbation terms, in degrees (not reduced).
///
/// Each term is `A·cos(0.985626·Δt / τ + φ)`.
pub fn perturbers(delta_j2000: f64) -> Degree {
    PERTURBERS
        .iter()
        .map(|&(amplitude, period, phase)| {
            let arg: Radian = ((EARTH_MEAN_MOTION * delta_j2000) / period + phase).to_radians();
            amplitude * arg.cos()
        })
        .sum()
}

/// Compute the equation of center `ν − M`, in degrees.
///
/// Arguments
/// ---------
/// * `delta_j2000`: days since J2000.0 (TT)
/// * `perturbation`: output of [`perturbers`]
/// * `mean_anomaly`: output of [`mars_mean_anomaly`]
/// * `reduction`: rule used on the slowly drifting leading coefficient
///
/// Return
/// ------
/// * `(10.691 + 3e-7·Δt)·sin M + 0.623·sin 2M + 0.050·sin 3M + 0.005·sin 4M + 0.0005·sin 5M + PBS`
///
/// The result is not reduced and can be negative.
pub fn equation_of_center(
    delta_j2000: f64,
    perturbation: Degree,
    mean_anomaly: Degree,
    reduction: AngleReduction,
) -> Degree {
    let leading = reduction.reduce(10.691 + 3.0e-7 * delta_j2000);
    let m: Radian = mean_anomaly.to_radians();

    leading * m.sin()
        + 0.623 * (2.0 * m).sin()
        + 0.050 * (3.0 * m).sin()
        + 0.005 * (4.0 * m).sin()
        + 0.0005 * (5.0 * m).sin()
        + perturbation
}

/// Aerocentric solar longitude `L_s = α_FMS + (ν − M)`, reduced.
pub fn aerocentric_solar_longitude(
    angle_fiction_mean_sun: Degree,
    equation_of_center: Degree,
    reduction: AngleReduction,
) -> Degree {
    reduction.reduce(angle_fiction_mean_sun + equation_of_center)
}
