//! # marsclock
//!
//! Conversion of an Earth instant into Mars time: Mars Sol Date, Mars Coordinated Time, local
//! mean and true solar time at any longitude, aerocentric solar longitude and the heliocentric
//! distance of Mars.
//!
//! The computation is a chain of pure functions (one module per stage) bundled by
//! [`MartianTime`](crate::martian_time::MartianTime). Nothing is cached or shared between calls.
pub mod clock;
pub mod constants;
pub mod mars_clock_errors;
pub mod mars_orbit;
pub mod mars_solar_time;
pub mod martian_time;
pub mod params;
pub mod time;
